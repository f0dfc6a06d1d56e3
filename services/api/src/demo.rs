use crate::infra::{load_submission, parse_date, parse_format, parse_override};
use chrono::{Local, NaiveDate};
use clap::Args;
use eb1_screener::config::AppConfig;
use eb1_screener::error::AppError;
use eb1_screener::screening::report;
use eb1_screener::screening::{
    report_file_name, screen, AttributeValue, CriterionGroup, FileSink, LabelTable,
    RawAttributes, ReportFormat, ReportSink, RuleId,
};
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Submission file: a JSON object or a two-column key,value CSV
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Set or override one answer, e.g. --set offer=yes (repeatable)
    #[arg(long = "set", value_parser = parse_override)]
    pub(crate) set: Vec<(String, AttributeValue)>,
    /// Report format: text, json or csv
    #[arg(long, value_parser = parse_format, default_value = "text")]
    pub(crate) format: ReportFormat,
    /// Write the report to the configured report directory instead of stdout
    #[arg(long)]
    pub(crate) export: bool,
    /// Directory for exported reports (implies --export)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Date stamped into exported file names (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the narrative report for each sample profile.
    #[arg(long)]
    pub(crate) narrative: bool,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let ScreenArgs {
        input,
        set,
        format,
        export,
        output_dir,
        today,
    } = args;

    let raw = load_submission(input.as_deref(), &set)?;
    let screening = screen(&raw);
    let labels = LabelTable::standard();
    let body = report::render(format, &screening.canonical, &screening.outcome, &labels)?;

    let directory = match output_dir {
        Some(dir) => Some(dir),
        None if export => Some(AppConfig::load()?.export.report_dir),
        None => None,
    };

    match directory {
        Some(directory) => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let sink = FileSink::new(directory);
            let path = sink.write_report(&report_file_name(today, format), body.as_bytes())?;
            println!("{}", screening.outcome.summary());
            println!("Report written to {}", path.display());
        }
        None => print!("{body}"),
    }

    Ok(())
}

pub(crate) fn run_labels() -> Result<(), AppError> {
    let labels = LabelTable::standard();

    for group in CriterionGroup::ordered() {
        println!("{}", group.label());
        for entry in labels.iter().filter(|entry| entry.group == group) {
            println!("  {:<34} {}", entry.key.as_str(), entry.question);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let labels = LabelTable::standard();

    println!("EB-1 screening demo");
    println!(
        "{:<30} {:>4}  {:<12} {:<20} {}",
        "Profile", "Rule", "Category", "Status", "Score"
    );

    for profile in demo_profiles() {
        let screening = screen(&profile.attributes);
        let outcome = &screening.outcome;
        println!(
            "{:<30} {:>4}  {:<12} {:<20} {}",
            profile.name,
            outcome.rule.position(),
            outcome.category.label(),
            outcome.status.label(),
            outcome.score_label
        );
        if outcome.rule != profile.expected {
            warn!(
                profile = profile.name,
                expected = ?profile.expected,
                actual = ?outcome.rule,
                "demo profile matched an unexpected rule"
            );
        }

        if args.narrative {
            let body = report::render(
                ReportFormat::Text,
                &screening.canonical,
                outcome,
                &labels,
            )?;
            println!("\n{body}");
        }
    }

    Ok(())
}

pub(crate) struct DemoProfile {
    pub(crate) name: &'static str,
    pub(crate) expected: RuleId,
    pub(crate) attributes: RawAttributes,
}

impl DemoProfile {
    fn new(name: &'static str, expected: RuleId, attributes: RawAttributes) -> Self {
        Self {
            name,
            expected,
            attributes,
        }
    }
}

fn research_basics() -> RawAttributes {
    RawAttributes::new()
        .with("experience", "3_years")
        .with("offer", "yes")
}

/// One sample submission per row of the rule table.
pub(crate) fn demo_profiles() -> Vec<DemoProfile> {
    vec![
        DemoProfile::new(
            "Nobel laureate",
            RuleId::MajorAwardOverride,
            RawAttributes::new().with("major_award", true),
        ),
        DemoProfile::new(
            "Award-winning architect",
            RuleId::Eb1aExceptional,
            [
                "lesser_awards",
                "membership",
                "publications",
                "judging",
                "original_contributions",
                "authorship",
                "performances",
            ]
            .into_iter()
            .map(|key| (key, true))
            .collect(),
        ),
        DemoProfile::new(
            "Touring cellist",
            RuleId::Eb1aVeryStrong,
            [
                "publications",
                "judging",
                "performances",
                "high_salary",
                "commercial_success",
            ]
            .into_iter()
            .map(|key| (key, true))
            .collect(),
        ),
        DemoProfile::new(
            "Startup founder",
            RuleId::Eb1aQualified,
            ["publications", "original_contributions", "high_salary"]
                .into_iter()
                .map(|key| (key, true))
                .collect(),
        ),
        DemoProfile::new(
            "Tenured chemist",
            RuleId::Eb1bExceptional,
            research_basics()
                .with("tenure", "yes")
                .with("published_articles", true)
                .with("judging_research", true)
                .with("original_contributions_research", true)
                .with("lesser_awards_b", true),
        ),
        DemoProfile::new(
            "Lab director",
            RuleId::Eb1bVeryStrong,
            research_basics()
                .with("published_articles", true)
                .with("judging_research", true)
                .with("original_contributions_research", true),
        ),
        DemoProfile::new(
            "Assistant professor",
            RuleId::Eb1bQualified,
            research_basics()
                .with("tenure", "yes")
                .with("published_articles", true),
        ),
        DemoProfile::new(
            "Regional VP on transfer",
            RuleId::Eb1cQualified,
            RawAttributes::new()
                .with("managerial_role", "yes")
                .with("one_year_exp", "yes")
                .with("transfer", "yes"),
        ),
        DemoProfile::new(
            "Postdoc with offer",
            RuleId::Eb1bNeedsExperience,
            RawAttributes::new()
                .with("offer", "yes")
                .with("published_articles", true)
                .with("judging_research", true),
        ),
        DemoProfile::new(
            "Senior researcher",
            RuleId::Eb1bNeedsJobOffer,
            RawAttributes::new()
                .with("experience", "3_years")
                .with("published_articles", true)
                .with("original_contributions_research", true),
        ),
        DemoProfile::new(
            "Research scientist",
            RuleId::Eb1bOneShort,
            research_basics().with("judging_research", true),
        ),
        DemoProfile::new(
            "Journalist",
            RuleId::Eb1aOneShort,
            ["publications", "authorship"]
                .into_iter()
                .map(|key| (key, true))
                .collect(),
        ),
        DemoProfile::new(
            "Young engineer",
            RuleId::DualPotential,
            RawAttributes::new().with("lesser_awards", true),
        ),
        DemoProfile::new(
            "Well-paid consultant",
            RuleId::WeakProfile,
            RawAttributes::new().with("high_salary", true),
        ),
        DemoProfile::new(
            "Branch manager",
            RuleId::Eb1cIncomplete,
            RawAttributes::new().with("managerial_role", "yes"),
        ),
        DemoProfile::new("Recent graduate", RuleId::NotEligible, RawAttributes::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use eb1_screener::screening::ClassificationEngine;

    #[test]
    fn demo_profiles_land_on_their_rule() {
        for profile in demo_profiles() {
            let outcome = screen(&profile.attributes).outcome;
            assert_eq!(outcome.rule, profile.expected, "profile {}", profile.name);
        }
    }

    #[test]
    fn demo_profiles_cover_every_rule() {
        let covered: Vec<RuleId> = demo_profiles()
            .iter()
            .map(|profile| profile.expected)
            .collect();
        let table: Vec<RuleId> = ClassificationEngine::new()
            .rules()
            .iter()
            .map(|rule| rule.id())
            .collect();

        assert_eq!(covered, table);
    }
}
