//! Profile scoring — compares one profile against an extracted
//! `RequirementSet`, producing an integer score and a pt-BR justification.
//!
//! Dimensions are evaluated in a fixed order (skills, experience, education)
//! so the justification text is reproducible; the order never changes the
//! total. Skills contribute 1 point each, uncapped; experience and education
//! contribute at most 1 point each.

use std::collections::BTreeSet;

use crate::matching::catalog::education_rank;
use crate::matching::extractor::RequirementSet;
use crate::matching::normalize::normalize;
use crate::models::profile::Profile;

/// Scores a profile against the requirements. Returns the total score and a
/// space-joined justification, one clause per dimension.
pub fn score_profile(profile: &Profile, requirements: &RequirementSet) -> (u32, String) {
    let mut score = 0u32;
    let mut clauses: Vec<String> = Vec::with_capacity(3);

    // Skills: 1 point per intersecting skill.
    let profile_skills: BTreeSet<String> =
        profile.skills.iter().map(|s| normalize(s)).collect();
    let matched: Vec<&str> = requirements
        .skills
        .iter()
        .filter(|s| profile_skills.contains(*s))
        .map(String::as_str)
        .collect();

    score += matched.len() as u32;
    if !matched.is_empty() {
        clauses.push(format!("Habilidades compatíveis: {}.", matched.join(", ")));
    } else if !requirements.skills.is_empty() {
        clauses.push("Nenhuma habilidade compatível.".to_string());
    } else {
        clauses.push("Nenhuma habilidade era exigida.".to_string());
    }

    // Experience: at most 1 point, only when the description asked for it.
    if requirements.experience_years > 0 {
        if profile.experience_years >= requirements.experience_years {
            score += 1;
            clauses.push(format!(
                "Experiência atende: {} anos (exigidos {}).",
                profile.experience_years, requirements.experience_years
            ));
        } else {
            clauses.push(format!(
                "Experiência não atende: {} anos (exigidos {}).",
                profile.experience_years, requirements.experience_years
            ));
        }
    } else {
        clauses.push(format!(
            "Experiência não era um requisito explícito (candidato possui {} anos).",
            profile.experience_years
        ));
    }

    // Education: at most 1 point, only when the description asked for it.
    let required_rank = education_rank(&requirements.education);
    let profile_education = normalize(&profile.education_level);
    let profile_rank = education_rank(&profile_education);
    if required_rank > 0 {
        if profile_rank >= required_rank {
            score += 1;
            clauses.push(format!(
                "Escolaridade atende: {} (exigido {}).",
                display_education(&profile_education),
                requirements.education
            ));
        } else {
            clauses.push(format!(
                "Escolaridade não atende: {} (exigido {}).",
                display_education(&profile_education),
                requirements.education
            ));
        }
    } else {
        clauses.push(format!(
            "Escolaridade não era um requisito explícito (candidato possui {}).",
            display_education(&profile_education)
        ));
    }

    (score, clauses.join(" "))
}

fn display_education(normalized: &str) -> &str {
    if normalized.is_empty() {
        "nenhum"
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::extractor::extract;

    fn make_profile(skills: &[&str], years: u32, education: &str) -> Profile {
        Profile {
            name: "Ana Souza".to_string(),
            url: "https://example.com/ana".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years: years,
            education_level: education.to_string(),
        }
    }

    #[test]
    fn test_end_to_end_fixture_scores_four() {
        let req = extract("Dev full stack, 3 anos, superior completo, Python, React, SQL.");
        let profile = make_profile(&["Python", "SQL"], 5, "Superior Completo");

        let (score, justification) = score_profile(&profile, &req);
        // 2 skills + 1 experience + 1 education
        assert_eq!(score, 4);
        assert!(justification.contains("python, sql"));
        assert!(justification.contains("Experiência atende: 5 anos (exigidos 3)."));
        assert!(justification.contains("Escolaridade atende"));
    }

    #[test]
    fn test_profile_skills_are_normalized_before_comparison() {
        let req = extract("Python e SQL, 2 anos.");
        let profile = make_profile(&["  PYTHON ", "Sql"], 2, "");
        let (score, _) = score_profile(&profile, &req);
        assert_eq!(score, 3);
    }

    #[test]
    fn test_no_compatible_skill_clause() {
        let req = extract("Vaga Python.");
        let profile = make_profile(&["Java"], 0, "");
        let (score, justification) = score_profile(&profile, &req);
        assert_eq!(score, 0);
        assert!(justification.contains("Nenhuma habilidade compatível."));
    }

    #[test]
    fn test_no_skill_required_clause() {
        let req = extract("Vaga de analista, 2 anos.");
        assert!(req.skills.is_empty());
        let profile = make_profile(&["Python"], 5, "");
        let (score, justification) = score_profile(&profile, &req);
        // Only the experience point; profile skills earn nothing unrequested.
        assert_eq!(score, 1);
        assert!(justification.contains("Nenhuma habilidade era exigida."));
    }

    #[test]
    fn test_experience_not_required_awards_nothing() {
        let req = extract("Vaga Python.");
        assert_eq!(req.experience_years, 0);
        let profile = make_profile(&["Python"], 10, "");
        let (score, justification) = score_profile(&profile, &req);
        assert_eq!(score, 1);
        assert!(justification
            .contains("Experiência não era um requisito explícito (candidato possui 10 anos)."));
    }

    #[test]
    fn test_experience_below_requirement_scores_zero_for_dimension() {
        let req = extract("Python, 5 anos.");
        let profile = make_profile(&["Python"], 3, "");
        let (score, justification) = score_profile(&profile, &req);
        assert_eq!(score, 1);
        assert!(justification.contains("Experiência não atende: 3 anos (exigidos 5)."));
    }

    #[test]
    fn test_education_exceeding_requirement_still_one_point() {
        let req = extract("Exige ensino médio.");
        let profile = make_profile(&[], 0, "Doutorado");
        let (score, justification) = score_profile(&profile, &req);
        assert_eq!(score, 1);
        assert!(justification.contains("Escolaridade atende: doutorado (exigido ensino medio)."));
    }

    #[test]
    fn test_education_not_required_awards_nothing() {
        let req = extract("Vaga Python.");
        let profile = make_profile(&["Python"], 0, "Mestrado");
        let (score, justification) = score_profile(&profile, &req);
        assert_eq!(score, 1);
        assert!(justification.contains("não era um requisito explícito (candidato possui mestrado)."));
    }

    #[test]
    fn test_missing_profile_fields_degrade_to_zero() {
        let req = extract("Python, 3 anos, superior completo.");
        let profile = Profile::default();
        let (score, justification) = score_profile(&profile, &req);
        assert_eq!(score, 0);
        assert!(justification.contains("candidato possui") || justification.contains("não atende"));
    }

    #[test]
    fn test_scoring_is_monotonic_in_matching_skills() {
        let req = extract("Python, React, SQL, 3 anos.");
        let smaller = make_profile(&["Python"], 5, "");
        let larger = make_profile(&["Python", "React"], 5, "");
        let (s1, _) = score_profile(&smaller, &req);
        let (s2, _) = score_profile(&larger, &req);
        assert!(s2 >= s1);
    }

    #[test]
    fn test_score_upper_bound() {
        let req = extract("Python, React, SQL, 3 anos, doutorado.");
        let profile = make_profile(
            &["Python", "React", "SQL", "Java", "Go"],
            30,
            "Doutorado",
        );
        let (score, _) = score_profile(&profile, &req);
        assert!(score <= req.skills.len() as u32 + 2);
    }

    #[test]
    fn test_clause_order_is_skills_experience_education() {
        let req = extract("Python, 3 anos, superior completo.");
        let profile = make_profile(&["Python"], 3, "Superior Completo");
        let (_, justification) = score_profile(&profile, &req);
        let skills_at = justification.find("Habilidades").unwrap();
        let exp_at = justification.find("Experiência").unwrap();
        let edu_at = justification.find("Escolaridade").unwrap();
        assert!(skills_at < exp_at && exp_at < edu_at);
    }
}
