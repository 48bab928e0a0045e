//! Encoded CRS point tables.
//!
//! Every lookup is total: a key outside the tabulated domain is worth 0 points.

use crate::types::profile::EducationLevel;

pub const TABLE_VERSION: &str = "crs-2023-11";

/// Points for one row, split by whether a spouse or partner accompanies the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPoints {
    pub single: u32,
    pub with_spouse: u32,
}

impl SplitPoints {
    const fn new(single: u32, with_spouse: u32) -> Self {
        Self {
            single,
            with_spouse,
        }
    }

    const fn flat(points: u32) -> Self {
        Self::new(points, points)
    }

    pub fn pick(self, has_spouse: bool) -> u32 {
        if has_spouse {
            self.with_spouse
        } else {
            self.single
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AgeBand {
    pub min: u32,
    pub max: u32,
    pub points: SplitPoints,
}

/// One step of a language step function; rows are ordered by descending `min_level`.
#[derive(Debug, Clone, Copy)]
pub struct LevelStep {
    pub min_level: u8,
    pub points: SplitPoints,
}

#[derive(Debug)]
pub struct PointTables {
    pub version: &'static str,
    pub age: &'static [AgeBand],
    /// Indexed by [`EducationLevel::tier`].
    pub education: [SplitPoints; 8],
    pub spouse_education: [u32; 8],
    pub first_language: &'static [LevelStep],
    pub second_language: &'static [LevelStep],
    pub spouse_language: &'static [LevelStep],
    /// Indexed by completed years, 0 through 5.
    pub canadian_experience: [SplitPoints; 6],
    pub spouse_canadian_experience: [u32; 6],
}

const fn band(min: u32, max: u32, single: u32, with_spouse: u32) -> AgeBand {
    AgeBand {
        min,
        max,
        points: SplitPoints::new(single, with_spouse),
    }
}

const fn step(min_level: u8, single: u32, with_spouse: u32) -> LevelStep {
    LevelStep {
        min_level,
        points: SplitPoints::new(single, with_spouse),
    }
}

const AGE: [AgeBand; 18] = [
    band(18, 18, 99, 90),
    band(19, 19, 105, 95),
    band(20, 29, 110, 100),
    band(30, 30, 105, 95),
    band(31, 31, 99, 90),
    band(32, 32, 94, 85),
    band(33, 33, 88, 80),
    band(34, 34, 83, 75),
    band(35, 35, 77, 70),
    band(36, 36, 72, 65),
    band(37, 37, 66, 60),
    band(38, 38, 61, 55),
    band(39, 39, 55, 50),
    band(40, 40, 50, 45),
    band(41, 41, 39, 35),
    band(42, 42, 28, 25),
    band(43, 43, 17, 15),
    band(44, 44, 6, 5),
];

const FIRST_LANGUAGE: [LevelStep; 6] = [
    step(10, 34, 32),
    step(9, 31, 29),
    step(8, 23, 22),
    step(7, 17, 16),
    step(6, 9, 8),
    step(4, 6, 6),
];

const SECOND_LANGUAGE: [LevelStep; 3] = [step(9, 6, 6), step(7, 3, 3), step(5, 1, 1)];

const SPOUSE_LANGUAGE: [LevelStep; 3] = [step(9, 5, 5), step(7, 3, 3), step(5, 1, 1)];

pub static TABLES: PointTables = PointTables {
    version: TABLE_VERSION,
    age: &AGE,
    education: [
        SplitPoints::new(0, 0),
        SplitPoints::new(30, 28),
        SplitPoints::new(90, 84),
        SplitPoints::new(98, 91),
        SplitPoints::new(120, 112),
        SplitPoints::new(128, 119),
        SplitPoints::new(135, 126),
        SplitPoints::new(150, 140),
    ],
    spouse_education: [0, 2, 6, 7, 8, 9, 10, 10],
    first_language: &FIRST_LANGUAGE,
    second_language: &SECOND_LANGUAGE,
    spouse_language: &SPOUSE_LANGUAGE,
    canadian_experience: [
        SplitPoints::flat(0),
        SplitPoints::new(40, 35),
        SplitPoints::new(53, 46),
        SplitPoints::new(64, 56),
        SplitPoints::new(72, 63),
        SplitPoints::new(80, 70),
    ],
    spouse_canadian_experience: [0, 5, 7, 8, 9, 10],
};

impl PointTables {
    pub fn current() -> &'static PointTables {
        &TABLES
    }

    pub fn age_points(&self, age: u32, has_spouse: bool) -> u32 {
        self.age
            .iter()
            .find(|band| (band.min..=band.max).contains(&age))
            .map(|band| band.points.pick(has_spouse))
            .unwrap_or(0)
    }

    pub fn education_points(&self, level: EducationLevel, has_spouse: bool) -> u32 {
        level
            .tier()
            .and_then(|tier| self.education.get(tier))
            .map(|points| points.pick(has_spouse))
            .unwrap_or(0)
    }

    pub fn first_language_points(&self, level: u8, has_spouse: bool) -> u32 {
        lookup_step(self.first_language, level, has_spouse)
    }

    pub fn second_language_points(&self, level: u8) -> u32 {
        lookup_step(self.second_language, level, false)
    }

    pub fn spouse_language_points(&self, level: u8) -> u32 {
        lookup_step(self.spouse_language, level, true)
    }

    pub fn canadian_experience_points(&self, years: u8, has_spouse: bool) -> u32 {
        self.canadian_experience
            .get(usize::from(years))
            .map(|points| points.pick(has_spouse))
            .unwrap_or(0)
    }

    pub fn spouse_education_points(&self, level: EducationLevel) -> u32 {
        level
            .tier()
            .and_then(|tier| self.spouse_education.get(tier))
            .copied()
            .unwrap_or(0)
    }

    /// Years beyond the last row earn the last row's points.
    pub fn spouse_canadian_experience_points(&self, years: u8) -> u32 {
        let last = self.spouse_canadian_experience.len() - 1;
        self.spouse_canadian_experience[usize::from(years).min(last)]
    }

    /// Highest tabulated Canadian experience key.
    pub fn max_canadian_experience_years(&self) -> u8 {
        (self.canadian_experience.len() - 1) as u8
    }
}

fn lookup_step(steps: &[LevelStep], level: u8, has_spouse: bool) -> u32 {
    steps
        .iter()
        .find(|step| level >= step.min_level)
        .map(|step| step.points.pick(has_spouse))
        .unwrap_or(0)
}
