use crate::tables::PointTables;
use crate::types::profile::SpouseProfile;
use crate::types::scoring::{Points, SPOUSE_CAP};

pub const SPOUSE_LANGUAGE_CAP: Points = 20;

pub fn spouse_score(tables: &PointTables, spouse: Option<&SpouseProfile>) -> Points {
    let Some(spouse) = spouse else {
        return 0;
    };
    let language: Points = spouse
        .language
        .abilities()
        .iter()
        .map(|level| tables.spouse_language_points(*level))
        .sum();
    let score = tables.spouse_education_points(spouse.education)
        + language.min(SPOUSE_LANGUAGE_CAP)
        + tables.spouse_canadian_experience_points(spouse.canadian_work_years);
    score.min(SPOUSE_CAP)
}
