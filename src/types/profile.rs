use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use toml::Value;

/// Form keys that map free-form input onto a closed set of variants.
/// Unknown keys never fail; they land on the variant worth zero points.
pub trait FormKey: Sized {
    fn from_key(key: &str) -> Self;

    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::from_key(&text.trim().to_ascii_lowercase()),
            Value::Integer(number) => Self::from_key(&number.to_string()),
            Value::Float(number) if number.is_finite() => {
                Self::from_key(&(number.trunc() as i64).to_string())
            }
            Value::Boolean(flag) => Self::from_key(if *flag { "yes" } else { "no" }),
            _ => Self::from_key(""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaritalStatus {
    #[default]
    Single,
    MarriedOrCommonLaw,
}

impl FormKey for MaritalStatus {
    fn from_key(key: &str) -> Self {
        match key {
            "married" | "common_law" | "married_or_common_law" => Self::MarriedOrCommonLaw,
            _ => Self::Single,
        }
    }
}

/// Highest completed credential, in ascending order of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EducationLevel {
    #[default]
    None,
    Secondary,
    OneYearDiploma,
    TwoYearDiploma,
    Bachelor,
    TwoOrMoreCredentials,
    Master,
    Doctoral,
    Unrecognized,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 8] = [
        EducationLevel::None,
        EducationLevel::Secondary,
        EducationLevel::OneYearDiploma,
        EducationLevel::TwoYearDiploma,
        EducationLevel::Bachelor,
        EducationLevel::TwoOrMoreCredentials,
        EducationLevel::Master,
        EducationLevel::Doctoral,
    ];

    /// Row index into the education tables; `None` for unrecognized input.
    pub fn tier(self) -> Option<usize> {
        Self::ALL.iter().position(|level| *level == self)
    }

    pub fn is_post_secondary(self) -> bool {
        self.tier().map(|tier| tier >= 2).unwrap_or(false)
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Secondary => "secondary",
            Self::OneYearDiploma => "one_year_diploma",
            Self::TwoYearDiploma => "two_year_diploma",
            Self::Bachelor => "bachelor",
            Self::TwoOrMoreCredentials => "two_or_more_certs",
            Self::Master => "master",
            Self::Doctoral => "phd",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl FormKey for EducationLevel {
    fn from_key(key: &str) -> Self {
        match key {
            "" | "none" => Self::None,
            "secondary" => Self::Secondary,
            "one_year_diploma" => Self::OneYearDiploma,
            "two_year_diploma" => Self::TwoYearDiploma,
            "bachelor" => Self::Bachelor,
            "two_or_more_certs" | "two_or_more_credentials" => Self::TwoOrMoreCredentials,
            "master" => Self::Master,
            "phd" | "doctoral" => Self::Doctoral,
            _ => Self::Unrecognized,
        }
    }
}

/// Coarse foreign work-experience bucket (0, 1 for 1-2 years, 3 for 3+ years).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForeignExperience {
    #[default]
    None,
    OneToTwoYears,
    ThreeOrMoreYears,
}

impl FormKey for ForeignExperience {
    fn from_key(key: &str) -> Self {
        match key.parse::<i64>().unwrap_or(0) {
            1 => Self::OneToTwoYears,
            years if years >= 3 => Self::ThreeOrMoreYears,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobOffer {
    #[default]
    None,
    TopTier,
    Other,
}

impl FormKey for JobOffer {
    fn from_key(key: &str) -> Self {
        match key {
            "top_tier" | "yes_noc_00" | "teer_0_major_group_00" => Self::TopTier,
            "other" | "yes_noc_other" => Self::Other,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanadianStudy {
    #[default]
    None,
    OneOrTwoYears,
    ThreeYearsOrMore,
}

impl FormKey for CanadianStudy {
    fn from_key(key: &str) -> Self {
        match key {
            "one_or_two_years" | "1_or_2_years" => Self::OneOrTwoYears,
            "three_years_or_more" | "3_years_or_more" | "advanced" => Self::ThreeYearsOrMore,
            _ => Self::None,
        }
    }
}

/// Four ability levels on the 0-10 scale; 0 means the score was not provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LanguageScores {
    #[serde(alias = "r", deserialize_with = "level")]
    pub reading: u8,
    #[serde(alias = "w", deserialize_with = "level")]
    pub writing: u8,
    #[serde(alias = "l", deserialize_with = "level")]
    pub listening: u8,
    #[serde(alias = "s", deserialize_with = "level")]
    pub speaking: u8,
}

impl LanguageScores {
    pub fn new(reading: u8, writing: u8, listening: u8, speaking: u8) -> Self {
        Self {
            reading,
            writing,
            listening,
            speaking,
        }
    }

    pub fn uniform(level: u8) -> Self {
        Self::new(level, level, level, level)
    }

    pub fn abilities(&self) -> [u8; 4] {
        [self.reading, self.writing, self.listening, self.speaking]
    }

    pub fn all_present(&self) -> bool {
        self.abilities().iter().all(|level| *level > 0)
    }

    /// Minimum level, only when every ability was provided.
    pub fn min_if_complete(&self) -> Option<u8> {
        if self.all_present() {
            self.abilities().into_iter().min()
        } else {
            None
        }
    }

    /// Minimum over the abilities that were provided.
    pub fn min_present(&self) -> Option<u8> {
        self.abilities().into_iter().filter(|level| *level > 0).min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SpouseProfile {
    #[serde(deserialize_with = "keyed")]
    pub education: EducationLevel,
    pub language: LanguageScores,
    #[serde(deserialize_with = "level")]
    pub canadian_work_years: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AdditionalFactors {
    #[serde(deserialize_with = "flag")]
    pub provincial_nomination: bool,
    #[serde(deserialize_with = "keyed")]
    pub job_offer: JobOffer,
    #[serde(deserialize_with = "keyed")]
    pub canadian_study: CanadianStudy,
    #[serde(deserialize_with = "flag")]
    pub sibling_in_canada: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ApplicantProfile {
    #[serde(deserialize_with = "keyed")]
    pub marital_status: MaritalStatus,
    #[serde(deserialize_with = "count")]
    pub age: u32,
    #[serde(alias = "birthday", deserialize_with = "date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(deserialize_with = "keyed")]
    pub education: EducationLevel,
    pub first_language: LanguageScores,
    pub second_language: LanguageScores,
    #[serde(deserialize_with = "level")]
    pub canadian_work_years: u8,
    #[serde(deserialize_with = "date")]
    pub canadian_work_start: Option<NaiveDate>,
    #[serde(deserialize_with = "keyed")]
    pub foreign_experience: ForeignExperience,
    #[serde(alias = "certificate_of_qualification", deserialize_with = "flag")]
    pub trade_certificate: bool,
    pub spouse: Option<SpouseProfile>,
    pub additional: AdditionalFactors,
    /// Derived from `second_language`; see [`ApplicantProfile::refresh_second_language_threshold`].
    #[serde(skip)]
    pub second_language_threshold: bool,
}

impl ApplicantProfile {
    pub fn has_spouse(&self) -> bool {
        self.marital_status == MaritalStatus::MarriedOrCommonLaw
    }

    /// Spouse factors apply only to a declared partner; a missing section counts as empty.
    pub fn spouse_factors(&self) -> Option<SpouseProfile> {
        if self.has_spouse() {
            Some(self.spouse.unwrap_or_default())
        } else {
            None
        }
    }

    /// Must be called by whoever mutates `second_language`.
    pub fn refresh_second_language_threshold(&mut self) {
        self.second_language_threshold = meets_second_language_threshold(&self.second_language);
    }
}

/// True when all four second-language abilities are present and at level 7 or above.
pub fn meets_second_language_threshold(scores: &LanguageScores) -> bool {
    scores.all_present() && scores.abilities().iter().all(|level| *level >= 7)
}

fn to_integer(value: &Value) -> i64 {
    match value {
        Value::Integer(number) => *number,
        Value::Float(number) if number.is_finite() => number.trunc() as i64,
        Value::String(text) => text.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

fn to_flag(value: &Value) -> bool {
    match value {
        Value::Boolean(flag) => *flag,
        Value::Integer(number) => *number != 0,
        Value::String(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "yes" | "y" | "true" | "1"
        ),
        _ => false,
    }
}

fn to_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok(),
        Value::Datetime(datetime) => datetime.date.and_then(|date| {
            NaiveDate::from_ymd_opt(
                i32::from(date.year),
                u32::from(date.month),
                u32::from(date.day),
            )
        }),
        _ => None,
    }
}

fn level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(to_integer(&value).clamp(0, i64::from(u8::MAX)) as u8)
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(to_integer(&value).clamp(0, i64::from(u32::MAX)) as u32)
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(to_flag(&value))
}

fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(to_date(&value))
}

fn keyed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FormKey,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::from_value(&value))
}
