//! Score projection over upcoming birthdays and work anniversaries.

use crate::scoring::{self, Overrides};
use crate::types::profile::ApplicantProfile;
use crate::types::scoring::Points;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, trace};

pub const DEFAULT_HORIZON_YEARS: u32 = 5;
pub const DEFAULT_WINDOW_DAYS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionPoint {
    pub date: NaiveDate,
    pub age: u32,
    pub canadian_work_years: u32,
    pub score: Points,
    pub label: String,
}

/// How far ahead to look and how many days either side of each event to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionWindow {
    pub horizon_years: u32,
    pub window_days: u32,
}

impl Default for ProjectionWindow {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Whole years elapsed from `since` to `on`; negative when `on` is earlier.
pub fn completed_years(since: NaiveDate, on: NaiveDate) -> i32 {
    let mut years = on.year() - since.year();
    if (on.month(), on.day()) < (since.month(), since.day()) {
        years -= 1;
    }
    years
}

pub fn age_on(birth_date: NaiveDate, on: NaiveDate) -> u32 {
    completed_years(birth_date, on).max(0) as u32
}

pub fn experience_years_on(start: NaiveDate, on: NaiveDate) -> u32 {
    if on < start {
        return 0;
    }
    completed_years(start, on).max(0) as u32
}

/// The anchor's month and day in `year`. Days past the end of the month roll
/// into the next month, so 29 February becomes 1 March in common years.
fn anniversary_in(anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, anchor.month(), 1)?
        .checked_add_days(Days::new(u64::from(anchor.day() - 1)))
}

/// The next `count` yearly occurrences of `anchor`, starting with the first on or after `today`.
pub fn upcoming_anniversaries(
    anchor: NaiveDate,
    today: NaiveDate,
    count: u32,
) -> Vec<NaiveDate> {
    let mut first_year = today.year();
    if anniversary_in(anchor, first_year).is_some_and(|date| date < today) {
        first_year += 1;
    }
    (0..count)
        .filter_map(|offset| anniversary_in(anchor, first_year + offset as i32))
        .collect()
}

fn sample_offsets(window_days: u32) -> Vec<i64> {
    let days = i64::from(window_days);
    if days == 0 {
        vec![0]
    } else {
        vec![-days, 0, days]
    }
}

fn offset_label(event: &str, offset: i64) -> String {
    match offset {
        0 => event.to_string(),
        days if days < 0 => format!("{event} {days}d"),
        days => format!("{event} +{days}d"),
    }
}

fn shift(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    }
}

struct Projector<'a> {
    profile: &'a ApplicantProfile,
    birth_date: NaiveDate,
    work_start: NaiveDate,
    today: NaiveDate,
    offsets: Vec<i64>,
    points: Vec<ProjectionPoint>,
}

impl Projector<'_> {
    fn sample_around(&mut self, event_date: NaiveDate, event: &str) {
        for &offset in &self.offsets {
            let Some(date) = shift(event_date, offset) else {
                continue;
            };
            if date < self.today {
                continue;
            }
            let age = age_on(self.birth_date, date);
            let canadian_work_years = experience_years_on(self.work_start, date);
            let score = scoring::score_with(
                self.profile,
                Overrides {
                    age: Some(age),
                    canadian_work_years: Some(canadian_work_years),
                },
            )
            .total;
            let label = offset_label(event, offset);
            trace!(%date, age, canadian_work_years, score, label = %label, "projected sample");
            self.points.push(ProjectionPoint {
                date,
                age,
                canadian_work_years,
                score,
                label,
            });
        }
    }
}

/// Projects the grand total at dates around upcoming work anniversaries and
/// birthdays. Returns an empty series when either date is missing.
///
/// The result is sorted by date with one point per calendar date; where an
/// anniversary and a birthday sample coincide the anniversary sample is kept.
pub fn project(
    profile: &ApplicantProfile,
    today: NaiveDate,
    window: ProjectionWindow,
) -> Vec<ProjectionPoint> {
    let (Some(birth_date), Some(work_start)) = (profile.birth_date, profile.canadian_work_start)
    else {
        debug!("projection skipped: birth date or work start date missing");
        return Vec::new();
    };

    let mut projector = Projector {
        profile,
        birth_date,
        work_start,
        today,
        offsets: sample_offsets(window.window_days),
        points: Vec::new(),
    };

    for anniversary in upcoming_anniversaries(work_start, today, window.horizon_years) {
        let event = format!(
            "Work Anniv. (Year {})",
            experience_years_on(work_start, anniversary)
        );
        projector.sample_around(anniversary, &event);
    }
    for birthday in upcoming_anniversaries(birth_date, today, window.horizon_years) {
        let event = format!("Birthday (Age {})", age_on(birth_date, birthday));
        projector.sample_around(birthday, &event);
    }

    let mut points = projector.points;
    points.sort_by_key(|point| point.date);
    points.dedup_by_key(|point| point.date);
    debug!(
        %today,
        horizon_years = window.horizon_years,
        points = points.len(),
        "projection complete"
    );
    points
}
