//! Text normalization — the single entry point every comparison goes through.
//!
//! Job descriptions and profile fields arrive with mixed case, pt-BR accents
//! and ragged whitespace. Comparing unnormalized strings is a correctness bug,
//! so every other module in `matching` calls `normalize` before matching.

/// Lowercases, folds the fixed pt-BR accent set to base Latin letters and
/// collapses whitespace runs to a single space (trimmed).
///
/// Pure and idempotent. Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        let folded = fold_accent(ch);
        if folded.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(folded);
    }

    out
}

/// Folds the fixed accent set (á ã â à → a, é ê → e, í → i, ó õ ô → o,
/// ú → u, ç → c). Anything outside the table passes through unchanged.
fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'ã' | 'â' | 'à' => 'a',
        'é' | 'ê' => 'e',
        'í' => 'i',
        'ó' | 'õ' | 'ô' => 'o',
        'ú' => 'u',
        'ç' => 'c',
        _ => ch,
    }
}
