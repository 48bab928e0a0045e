pub mod additional;
pub mod human_capital;
pub mod spouse;
pub mod transferability;

use crate::tables::PointTables;
use crate::types::profile::ApplicantProfile;
use crate::types::scoring::ScoreBreakdown;
use tracing::debug;

/// Values substituted for the profile's stored attributes when scoring a future date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub age: Option<u32>,
    pub canadian_work_years: Option<u32>,
}

pub fn score(profile: &ApplicantProfile) -> ScoreBreakdown {
    score_with(profile, Overrides::default())
}

pub fn score_with(profile: &ApplicantProfile, overrides: Overrides) -> ScoreBreakdown {
    let tables = PointTables::current();
    let age = overrides.age.unwrap_or(profile.age);
    let max_years = tables.max_canadian_experience_years();
    let canadian_work_years = overrides
        .canadian_work_years
        .map(|years| years.min(u32::from(max_years)) as u8)
        .unwrap_or(profile.canadian_work_years);

    let core = human_capital::human_capital_score(tables, profile, age, canadian_work_years);
    let spouse = spouse::spouse_score(tables, profile.spouse_factors().as_ref());
    let skill_transferability =
        transferability::transferability_score(profile, canadian_work_years);
    let additional = additional::additional_score(profile);

    let breakdown = ScoreBreakdown::new(core, spouse, skill_transferability, additional);
    debug!(
        age,
        canadian_work_years,
        core,
        spouse,
        skill_transferability,
        additional,
        total = breakdown.total,
        "scored profile"
    );
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::{
        AdditionalFactors, CanadianStudy, EducationLevel, ForeignExperience, JobOffer,
        LanguageScores, MaritalStatus, SpouseProfile,
    };
    use crate::types::scoring::{
        core_cap, ADDITIONAL_CAP, GRAND_TOTAL_CAP, SKILL_TRANSFERABILITY_CAP, SPOUSE_CAP,
    };
    use proptest::prelude::*;

    fn sample_profile() -> ApplicantProfile {
        let mut profile = ApplicantProfile {
            marital_status: MaritalStatus::Single,
            age: 33,
            education: EducationLevel::Master,
            first_language: LanguageScores::uniform(10),
            second_language: LanguageScores::uniform(7),
            canadian_work_years: 1,
            foreign_experience: ForeignExperience::ThreeOrMoreYears,
            additional: AdditionalFactors {
                canadian_study: CanadianStudy::OneOrTwoYears,
                sibling_in_canada: true,
                ..AdditionalFactors::default()
            },
            ..ApplicantProfile::default()
        };
        profile.refresh_second_language_threshold();
        profile
    }

    #[test]
    fn score_sample_profile() {
        let breakdown = score(&sample_profile());
        // 88 + 135 + 136 + 12 + 40
        assert_eq!(breakdown.core, 411);
        assert_eq!(breakdown.spouse, 0);
        // education x language 50, education x CWE 25, FWE x language 50, FWE x CWE 25
        assert_eq!(breakdown.skill_transferability, 100);
        // study 15, sibling 15, second-language bonus 50
        assert_eq!(breakdown.additional, 80);
        assert_eq!(breakdown.total, 591);
    }

    #[test]
    fn overrides_replace_age_and_clamp_experience() {
        let profile = sample_profile();
        let breakdown = score_with(
            &profile,
            Overrides {
                age: Some(45),
                canadian_work_years: Some(9),
            },
        );
        // 0 + 135 + 136 + 12 + 80
        assert_eq!(breakdown.core, 363);
        assert_eq!(breakdown.skill_transferability, 100);
    }

    #[test]
    fn scoring_is_idempotent() {
        let profile = sample_profile();
        assert_eq!(score(&profile), score(&profile));
    }

    #[test]
    fn spouse_section_only_for_married_applicants() {
        let mut profile = sample_profile();
        profile.spouse = Some(SpouseProfile {
            education: EducationLevel::Bachelor,
            language: LanguageScores::uniform(9),
            canadian_work_years: 1,
        });
        assert_eq!(score(&profile).spouse, 0);

        profile.marital_status = MaritalStatus::MarriedOrCommonLaw;
        assert_eq!(score(&profile).spouse, 8 + 20 + 5);
    }

    fn education_strategy() -> impl Strategy<Value = EducationLevel> {
        (0usize..9).prop_map(|index| {
            EducationLevel::ALL
                .get(index)
                .copied()
                .unwrap_or(EducationLevel::Unrecognized)
        })
    }

    fn language_strategy() -> impl Strategy<Value = LanguageScores> {
        (0u8..=10, 0u8..=10, 0u8..=10, 0u8..=10)
            .prop_map(|(r, w, l, s)| LanguageScores::new(r, w, l, s))
    }

    fn spouse_strategy() -> impl Strategy<Value = SpouseProfile> {
        (education_strategy(), language_strategy(), 0u8..=7).prop_map(
            |(education, language, canadian_work_years)| SpouseProfile {
                education,
                language,
                canadian_work_years,
            },
        )
    }

    fn additional_strategy() -> impl Strategy<Value = AdditionalFactors> {
        (any::<bool>(), 0u8..=2, 0u8..=2, any::<bool>()).prop_map(
            |(provincial_nomination, job_offer, study, sibling_in_canada)| AdditionalFactors {
                provincial_nomination,
                job_offer: match job_offer {
                    1 => JobOffer::TopTier,
                    2 => JobOffer::Other,
                    _ => JobOffer::None,
                },
                canadian_study: match study {
                    1 => CanadianStudy::OneOrTwoYears,
                    2 => CanadianStudy::ThreeYearsOrMore,
                    _ => CanadianStudy::None,
                },
                sibling_in_canada,
            },
        )
    }

    prop_compose! {
        fn profile_strategy()(
            married in any::<bool>(),
            age in 0u32..80,
            education in education_strategy(),
            first_language in language_strategy(),
            second_language in language_strategy(),
            canadian_work_years in 0u8..=7,
            foreign in 0u8..=3,
            trade_certificate in any::<bool>(),
            spouse in spouse_strategy(),
            additional in additional_strategy(),
        ) -> ApplicantProfile {
            let mut profile = ApplicantProfile {
                marital_status: if married {
                    MaritalStatus::MarriedOrCommonLaw
                } else {
                    MaritalStatus::Single
                },
                age,
                education,
                first_language,
                second_language,
                canadian_work_years,
                foreign_experience: match foreign {
                    1 => ForeignExperience::OneToTwoYears,
                    3 => ForeignExperience::ThreeOrMoreYears,
                    _ => ForeignExperience::None,
                },
                trade_certificate,
                spouse: Some(spouse),
                additional,
                ..ApplicantProfile::default()
            };
            profile.refresh_second_language_threshold();
            profile
        }
    }

    proptest! {
        #[test]
        fn sections_stay_within_caps(profile in profile_strategy()) {
            let breakdown = score(&profile);
            prop_assert!(breakdown.core <= core_cap(profile.has_spouse()));
            prop_assert!(breakdown.spouse <= SPOUSE_CAP);
            prop_assert!(breakdown.skill_transferability <= SKILL_TRANSFERABILITY_CAP);
            prop_assert!(breakdown.additional <= ADDITIONAL_CAP);
            prop_assert!(breakdown.total <= GRAND_TOTAL_CAP);
            let sum = breakdown.core
                + breakdown.spouse
                + breakdown.skill_transferability
                + breakdown.additional;
            prop_assert_eq!(breakdown.total, sum.min(GRAND_TOTAL_CAP));
        }

        #[test]
        fn repeated_scoring_is_identical(profile in profile_strategy()) {
            prop_assert_eq!(score(&profile), score(&profile));
        }
    }
}
