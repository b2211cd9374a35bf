use crate::models::profile::{AssessmentProfile, CareerMatch};

fn result(major: &str, career: &str, rationale: &str) -> CareerMatch {
    CareerMatch {
        major: major.to_string(),
        career: career.to_string(),
        rationale: rationale.to_string(),
    }
}

/// Ordered rules, first match wins.
pub fn match_career(profile: &AssessmentProfile) -> CareerMatch {
    if profile.logic >= 80 && profile.strategy >= 70 {
        return result(
            "Computer Science",
            "Data Analyst",
            "High logical reasoning and strategic thinking align with analytics roles.",
        );
    }
    if profile.interpersonal >= 80 {
        return result(
            "Psychology/Business",
            "HR Specialist",
            "Strong interpersonal skills support people-oriented careers.",
        );
    }
    if profile.creativity >= 80 && profile.practical >= 60 {
        return result(
            "Design/Communication",
            "UX Designer",
            "Creative and practical balance fits user-centered design.",
        );
    }
    result(
        "Business Administration",
        "Marketing Associate",
        "Balanced profile suits generalist roles with growth potential.",
    )
}
