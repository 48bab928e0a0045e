use crate::types::profile::{ApplicantProfile, CanadianStudy, JobOffer};
use crate::types::scoring::{Points, ADDITIONAL_CAP};

pub const NOMINATION_POINTS: Points = 600;
pub const SIBLING_POINTS: Points = 15;

pub fn job_offer_points(offer: JobOffer) -> Points {
    match offer {
        JobOffer::TopTier => 200,
        JobOffer::Other => 50,
        JobOffer::None => 0,
    }
}

pub fn canadian_study_points(study: CanadianStudy) -> Points {
    match study {
        CanadianStudy::OneOrTwoYears => 15,
        CanadianStudy::ThreeYearsOrMore => 30,
        CanadianStudy::None => 0,
    }
}

/// Bonus for strong second-language results. The threshold flag is supplied
/// by the caller; the amount depends on the first-language abilities provided.
pub fn second_language_bonus(profile: &ApplicantProfile) -> Points {
    if !profile.second_language_threshold {
        return 0;
    }
    match profile.first_language.min_present() {
        Some(clb) if clb >= 5 => 50,
        _ => 25,
    }
}

pub fn additional_score(profile: &ApplicantProfile) -> Points {
    let factors = &profile.additional;
    let mut score: Points = 0;
    if factors.provincial_nomination {
        score += NOMINATION_POINTS;
    }
    score += job_offer_points(factors.job_offer);
    score += canadian_study_points(factors.canadian_study);
    if factors.sibling_in_canada {
        score += SIBLING_POINTS;
    }
    score += second_language_bonus(profile);
    score.min(ADDITIONAL_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::{AdditionalFactors, LanguageScores};

    fn with_threshold(first_language: LanguageScores) -> ApplicantProfile {
        ApplicantProfile {
            first_language,
            second_language_threshold: true,
            ..ApplicantProfile::default()
        }
    }

    #[test]
    fn second_language_bonus_without_first_language_is_25() {
        assert_eq!(second_language_bonus(&with_threshold(LanguageScores::default())), 25);
    }

    #[test]
    fn second_language_bonus_with_strong_first_language_is_50() {
        let profile = with_threshold(LanguageScores::new(5, 9, 6, 0));
        assert_eq!(second_language_bonus(&profile), 50);
    }

    #[test]
    fn second_language_bonus_with_weak_first_language_is_25() {
        let profile = with_threshold(LanguageScores::new(4, 9, 9, 9));
        assert_eq!(second_language_bonus(&profile), 25);
    }

    #[test]
    fn second_language_bonus_requires_threshold_flag() {
        let profile = ApplicantProfile {
            first_language: LanguageScores::uniform(10),
            second_language: LanguageScores::uniform(10),
            ..ApplicantProfile::default()
        };
        assert_eq!(second_language_bonus(&profile), 0);
    }

    #[test]
    fn additional_factors_sum() {
        let profile = ApplicantProfile {
            additional: AdditionalFactors {
                provincial_nomination: false,
                job_offer: JobOffer::Other,
                canadian_study: CanadianStudy::ThreeYearsOrMore,
                sibling_in_canada: true,
            },
            ..with_threshold(LanguageScores::uniform(8))
        };
        assert_eq!(additional_score(&profile), 50 + 30 + 15 + 50);
    }

    #[test]
    fn nomination_saturates_section() {
        let profile = ApplicantProfile {
            additional: AdditionalFactors {
                provincial_nomination: true,
                job_offer: JobOffer::TopTier,
                canadian_study: CanadianStudy::OneOrTwoYears,
                sibling_in_canada: true,
            },
            ..ApplicantProfile::default()
        };
        assert_eq!(additional_score(&profile), 600);
    }
}
