use serde::Serialize;

pub type Points = u32;

pub const CORE_CAP_SINGLE: Points = 500;
pub const CORE_CAP_WITH_SPOUSE: Points = 460;
pub const SPOUSE_CAP: Points = 40;
pub const SKILL_TRANSFERABILITY_CAP: Points = 100;
pub const ADDITIONAL_CAP: Points = 600;
pub const GRAND_TOTAL_CAP: Points = 1200;

pub fn core_cap(has_spouse: bool) -> Points {
    if has_spouse {
        CORE_CAP_WITH_SPOUSE
    } else {
        CORE_CAP_SINGLE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub core: Points,
    pub spouse: Points,
    pub skill_transferability: Points,
    pub additional: Points,
    pub total: Points,
}

impl ScoreBreakdown {
    pub fn new(
        core: Points,
        spouse: Points,
        skill_transferability: Points,
        additional: Points,
    ) -> Self {
        let total = (core + spouse + skill_transferability + additional).min(GRAND_TOTAL_CAP);
        Self {
            core,
            spouse,
            skill_transferability,
            additional,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_capped_sum_of_sections() {
        let breakdown = ScoreBreakdown::new(480, 0, 100, 600);
        assert_eq!(breakdown.total, GRAND_TOTAL_CAP);

        let breakdown = ScoreBreakdown::new(400, 30, 50, 15);
        assert_eq!(breakdown.total, 495);
    }
}
