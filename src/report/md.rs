use crate::tables::PointTables;
use crate::types::profile::EducationLevel;
use crate::types::report::ScoreReport;
use crate::types::scoring::{
    ADDITIONAL_CAP, CORE_CAP_SINGLE, CORE_CAP_WITH_SPOUSE, GRAND_TOTAL_CAP,
    SKILL_TRANSFERABILITY_CAP, SPOUSE_CAP,
};

pub fn to_markdown(report: &ScoreReport) -> String {
    let breakdown = &report.breakdown;
    let mut output = String::new();
    output.push_str("# CRS Score Report\n\n");
    output.push_str(&format!(
        "Total score: {} / {}\n\n",
        breakdown.total, GRAND_TOTAL_CAP
    ));
    output.push_str("## Sections\n\n");
    output.push_str(&format!(
        "- core human capital: {} (max {}/{})\n- spouse factors: {} (max {})\n- skill transferability: {} (max {})\n- additional points: {} (max {})\n\n",
        breakdown.core,
        CORE_CAP_SINGLE,
        CORE_CAP_WITH_SPOUSE,
        breakdown.spouse,
        SPOUSE_CAP,
        breakdown.skill_transferability,
        SKILL_TRANSFERABILITY_CAP,
        breakdown.additional,
        ADDITIONAL_CAP
    ));

    if let Some(projection) = &report.projection {
        output.push_str("## Projection\n\n");
        if projection.is_empty() {
            output.push_str("- none (birth date and work start date are both required)\n");
        } else {
            output.push_str("| Date | Age | CWE years | Score | Event |\n");
            output.push_str("|------|-----|-----------|-------|-------|\n");
            for point in projection {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    point.date.format("%Y-%m-%d"),
                    point.age,
                    point.canadian_work_years,
                    point.score,
                    point.label
                ));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!("_Point tables: {}_\n", report.table_version));
    output
}

/// Renders the encoded point tables for auditing.
pub fn tables_to_markdown(tables: &PointTables) -> String {
    let mut output = String::new();
    output.push_str(&format!("# CRS Point Tables ({})\n\n", tables.version));

    output.push_str("## Age\n\n| Age | Single | With spouse |\n|-----|--------|-------------|\n");
    for band in tables.age {
        let ages = if band.min == band.max {
            band.min.to_string()
        } else {
            format!("{}-{}", band.min, band.max)
        };
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            ages, band.points.single, band.points.with_spouse
        ));
    }

    output.push_str("\n## Education\n\n| Level | Single | With spouse | Spouse's |\n|-------|--------|-------------|----------|\n");
    for level in EducationLevel::ALL {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            level.key(),
            tables.education_points(level, false),
            tables.education_points(level, true),
            tables.spouse_education_points(level)
        ));
    }

    output.push_str("\n## Language (per ability)\n\n| Level | First (single) | First (with spouse) | Second | Spouse |\n|-------|----------------|---------------------|--------|--------|\n");
    for level in (1..=10u8).rev() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            level,
            tables.first_language_points(level, false),
            tables.first_language_points(level, true),
            tables.second_language_points(level),
            tables.spouse_language_points(level)
        ));
    }

    output.push_str("\n## Canadian work experience\n\n| Years | Single | With spouse | Spouse's |\n|-------|--------|-------------|----------|\n");
    for years in 0..=tables.max_canadian_experience_years() {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            years,
            tables.canadian_experience_points(years, false),
            tables.canadian_experience_points(years, true),
            tables.spouse_canadian_experience_points(years)
        ));
    }

    output
}
