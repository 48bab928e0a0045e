use crate::tables::PointTables;
use crate::types::profile::{ApplicantProfile, LanguageScores};
use crate::types::scoring::{core_cap, Points};

pub const FIRST_LANGUAGE_CAP_SINGLE: Points = 136;
pub const FIRST_LANGUAGE_CAP_WITH_SPOUSE: Points = 128;
pub const SECOND_LANGUAGE_CAP_SINGLE: Points = 24;
pub const SECOND_LANGUAGE_CAP_WITH_SPOUSE: Points = 22;

pub fn first_language_points(
    tables: &PointTables,
    scores: &LanguageScores,
    has_spouse: bool,
) -> Points {
    let cap = if has_spouse {
        FIRST_LANGUAGE_CAP_WITH_SPOUSE
    } else {
        FIRST_LANGUAGE_CAP_SINGLE
    };
    let sum: Points = scores
        .abilities()
        .iter()
        .map(|level| tables.first_language_points(*level, has_spouse))
        .sum();
    sum.min(cap)
}

pub fn second_language_points(
    tables: &PointTables,
    scores: &LanguageScores,
    has_spouse: bool,
) -> Points {
    let cap = if has_spouse {
        SECOND_LANGUAGE_CAP_WITH_SPOUSE
    } else {
        SECOND_LANGUAGE_CAP_SINGLE
    };
    let sum: Points = scores
        .abilities()
        .iter()
        .map(|level| tables.second_language_points(*level))
        .sum();
    sum.min(cap)
}

/// Core human capital section. `age` and `canadian_work_years` are passed in
/// so projections can substitute values for a future date.
pub fn human_capital_score(
    tables: &PointTables,
    profile: &ApplicantProfile,
    age: u32,
    canadian_work_years: u8,
) -> Points {
    let has_spouse = profile.has_spouse();
    let score = tables.age_points(age, has_spouse)
        + tables.education_points(profile.education, has_spouse)
        + first_language_points(tables, &profile.first_language, has_spouse)
        + second_language_points(tables, &profile.second_language, has_spouse)
        + tables.canadian_experience_points(canadian_work_years, has_spouse);
    score.min(core_cap(has_spouse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::{EducationLevel, MaritalStatus};

    fn profile(marital_status: MaritalStatus) -> ApplicantProfile {
        ApplicantProfile {
            marital_status,
            ..ApplicantProfile::default()
        }
    }

    #[test]
    fn first_language_sum_clamps_at_cap() {
        let tables = PointTables::current();
        let scores = LanguageScores::uniform(10);
        assert_eq!(first_language_points(tables, &scores, false), 136);
        assert_eq!(first_language_points(tables, &scores, true), 128);
    }

    #[test]
    fn first_language_below_cap_is_raw_sum() {
        let tables = PointTables::current();
        let scores = LanguageScores::new(9, 8, 7, 0);
        assert_eq!(first_language_points(tables, &scores, false), 31 + 23 + 17);
    }

    #[test]
    fn second_language_sum_clamps_at_cap() {
        let tables = PointTables::current();
        let scores = LanguageScores::uniform(9);
        assert_eq!(second_language_points(tables, &scores, false), 24);
        assert_eq!(second_language_points(tables, &scores, true), 22);
        let scores = LanguageScores::uniform(7);
        assert_eq!(second_language_points(tables, &scores, false), 12);
    }

    #[test]
    fn core_sums_all_factors() {
        let tables = PointTables::current();
        let mut single = profile(MaritalStatus::Single);
        single.education = EducationLevel::Master;
        single.first_language = LanguageScores::uniform(10);
        single.second_language = LanguageScores::uniform(7);

        // 88 age + 135 education + 136 first + 12 second + 40 experience
        assert_eq!(human_capital_score(tables, &single, 33, 1), 411);
    }

    #[test]
    fn core_respects_spouse_cap() {
        let tables = PointTables::current();
        let mut married = profile(MaritalStatus::MarriedOrCommonLaw);
        married.education = EducationLevel::Doctoral;
        married.first_language = LanguageScores::uniform(10);
        married.second_language = LanguageScores::uniform(10);

        // 100 + 140 + 128 + 22 + 70 = 460, exactly at the cap
        assert_eq!(human_capital_score(tables, &married, 25, 5), 460);
        let single = ApplicantProfile {
            marital_status: MaritalStatus::Single,
            ..married
        };
        // 110 + 150 + 136 + 24 + 80 = 500
        assert_eq!(human_capital_score(tables, &single, 25, 5), 500);
    }

    #[test]
    fn canadian_experience_outside_table_scores_zero() {
        let tables = PointTables::current();
        let single = profile(MaritalStatus::Single);
        assert_eq!(human_capital_score(tables, &single, 50, 6), 0);
    }
}
