use crate::types::profile::{ApplicantProfile, EducationLevel, ForeignExperience, LanguageScores};
use crate::types::scoring::{Points, SKILL_TRANSFERABILITY_CAP};

pub const COMBINATION_CAP: Points = 50;

/// The five pairwise combinations, each already clamped to [`COMBINATION_CAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Combinations {
    pub education_language: Points,
    pub education_canadian_experience: Points,
    pub foreign_experience_language: Points,
    pub foreign_experience_canadian_experience: Points,
    pub certificate_language: Points,
}

impl Combinations {
    pub fn total(&self) -> Points {
        let sum = self.education_language
            + self.education_canadian_experience
            + self.foreign_experience_language
            + self.foreign_experience_canadian_experience
            + self.certificate_language;
        sum.min(SKILL_TRANSFERABILITY_CAP)
    }
}

pub fn combinations(
    education: EducationLevel,
    first_language: &LanguageScores,
    canadian_work_years: u8,
    foreign_experience: ForeignExperience,
    trade_certificate: bool,
) -> Combinations {
    // Language-dependent combinations need all four abilities.
    let min_clb = first_language.min_if_complete();
    let post_secondary = education.is_post_secondary();

    let education_language: Points = match min_clb {
        Some(clb) if post_secondary && clb >= 9 => 50,
        Some(clb) if post_secondary && clb >= 7 => 25,
        _ => 0,
    };

    let education_canadian_experience: Points = match canadian_work_years {
        _ if !post_secondary => 0,
        0 => 0,
        1 => 25,
        _ => 50,
    };

    let foreign_experience_language: Points = match (foreign_experience, min_clb) {
        (ForeignExperience::OneToTwoYears, Some(clb)) if clb >= 9 => 25,
        (ForeignExperience::OneToTwoYears, Some(clb)) if clb >= 7 => 13,
        (ForeignExperience::ThreeOrMoreYears, Some(clb)) if clb >= 9 => 50,
        (ForeignExperience::ThreeOrMoreYears, Some(clb)) if clb >= 7 => 25,
        _ => 0,
    };

    let foreign_experience_canadian_experience: Points =
        match (foreign_experience, canadian_work_years) {
            (ForeignExperience::None, _) | (_, 0) => 0,
            (ForeignExperience::OneToTwoYears, 1) => 13,
            (ForeignExperience::OneToTwoYears, _) => 25,
            (ForeignExperience::ThreeOrMoreYears, 1) => 25,
            (ForeignExperience::ThreeOrMoreYears, _) => 50,
        };

    let certificate_language: Points = match min_clb {
        Some(clb) if trade_certificate && clb >= 7 => 50,
        Some(clb) if trade_certificate && clb >= 5 => 25,
        _ => 0,
    };

    Combinations {
        education_language: education_language.min(COMBINATION_CAP),
        education_canadian_experience: education_canadian_experience.min(COMBINATION_CAP),
        foreign_experience_language: foreign_experience_language.min(COMBINATION_CAP),
        foreign_experience_canadian_experience: foreign_experience_canadian_experience
            .min(COMBINATION_CAP),
        certificate_language: certificate_language.min(COMBINATION_CAP),
    }
}

pub fn transferability_score(profile: &ApplicantProfile, canadian_work_years: u8) -> Points {
    combinations(
        profile.education,
        &profile.first_language,
        canadian_work_years,
        profile.foreign_experience,
        profile.trade_certificate,
    )
    .total()
}
