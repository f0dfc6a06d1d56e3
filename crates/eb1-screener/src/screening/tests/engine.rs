use super::common::*;
use crate::screening::domain::{AttributeKey, CanonicalAttributes, RawAttributes};
use crate::screening::engine::{ClassificationEngine, RuleId, EB1A_CRITERIA};
use crate::screening::normalize;
use crate::screening::outcome::{Category, StatusLevel};

#[test]
fn major_award_overrides_every_other_counter() {
    let raw = extend(
        eb1b_basics().with("tenure", "yes"),
        &[
            AttributeKey::MajorAward,
            AttributeKey::PublishedArticles,
            AttributeKey::JudgingResearch,
        ],
    );

    let outcome = outcome_for(&raw);

    assert_eq!(outcome.rule, RuleId::MajorAwardOverride);
    assert_eq!(outcome.category, Category::Eb1a);
    assert_eq!(outcome.status, StatusLevel::HighlyLikely);
    assert_eq!(outcome.score_label, "10/10");
}

#[test]
fn major_award_alone_is_enough() {
    let outcome = outcome_for(&flags(&[AttributeKey::MajorAward]));
    assert_eq!(outcome.rule, RuleId::MajorAwardOverride);
}

#[test]
fn three_category_a_flags_qualify_with_score_label() {
    let outcome = outcome_for(&qualified_eb1a());

    assert_eq!(outcome.rule, RuleId::Eb1aQualified);
    assert_eq!(outcome.category, Category::Eb1a);
    assert_eq!(outcome.status, StatusLevel::Qualified);
    assert_eq!(outcome.score_label, "3/10");
}

#[test]
fn category_a_bands_take_the_stronger_band_at_each_threshold() {
    let expectations = [
        (3, RuleId::Eb1aQualified),
        (4, RuleId::Eb1aQualified),
        (5, RuleId::Eb1aVeryStrong),
        (6, RuleId::Eb1aVeryStrong),
        (7, RuleId::Eb1aExceptional),
        (9, RuleId::Eb1aExceptional),
    ];

    for (count, expected) in expectations {
        let outcome = outcome_for(&flags(&EB1A_CRITERIA[..count]));
        assert_eq!(outcome.rule, expected, "count_a = {count}");
        assert_eq!(outcome.score_label, format!("{count}/10"));
    }
}

#[test]
fn seven_criteria_never_report_the_weaker_bands() {
    let canonical = normalize(&flags(&EB1A_CRITERIA[..7]));
    let engine = ClassificationEngine::new();

    let matching = engine.matching_rules(&canonical);

    assert_eq!(matching.first(), Some(&RuleId::Eb1aExceptional));
    assert!(matching.contains(&RuleId::Eb1aVeryStrong));
    assert!(matching.contains(&RuleId::Eb1aQualified));
    assert_eq!(engine.classify(&canonical).rule, RuleId::Eb1aExceptional);
}

#[test]
fn two_b_criteria_with_basics_are_qualified_not_very_strong() {
    let raw = extend(
        eb1b_basics().with("tenure", "yes"),
        &[AttributeKey::PublishedArticles],
    );

    let (canonical, outcome) = classified(&raw);

    assert!(canonical.tenure.is_yes());
    assert_eq!(outcome.rule, RuleId::Eb1bQualified);
    assert_eq!(outcome.category, Category::Eb1b);
    assert_eq!(outcome.score_label, "2/6");
}

#[test]
fn category_b_bands_follow_count_b() {
    let three = extend(
        eb1b_basics(),
        &[
            AttributeKey::PublishedArticles,
            AttributeKey::JudgingResearch,
            AttributeKey::OriginalContributionsResearch,
        ],
    );
    assert_eq!(outcome_for(&three).rule, RuleId::Eb1bVeryStrong);

    let five = extend(three.with("tenure", "yes"), &[AttributeKey::MembershipB]);
    let outcome = outcome_for(&five);
    assert_eq!(outcome.rule, RuleId::Eb1bExceptional);
    assert_eq!(outcome.score_label, "5/6");
}

#[test]
fn category_a_wins_over_category_b_when_both_qualify() {
    let raw = extend(
        eb1b_basics(),
        &[
            AttributeKey::Publications,
            AttributeKey::Judging,
            AttributeKey::HighSalary,
            AttributeKey::PublishedArticles,
            AttributeKey::JudgingResearch,
        ],
    );

    assert_eq!(outcome_for(&raw).rule, RuleId::Eb1aQualified);
}

#[test]
fn full_managerial_answers_qualify_for_category_c() {
    let raw = RawAttributes::new()
        .with("managerial_role", "yes")
        .with("one_year_exp", "Yes")
        .with("transfer", true);

    let outcome = outcome_for(&raw);

    assert_eq!(outcome.rule, RuleId::Eb1cQualified);
    assert_eq!(outcome.category, Category::Eb1c);
    assert_eq!(outcome.score_label, "Met");
    assert!(outcome.status.is_eligible());
}

#[test]
fn partial_managerial_answers_are_incomplete_not_ineligible() {
    let raw = RawAttributes::new()
        .with("managerial_role", "yes")
        .with("one_year_exp", "yes")
        .with("transfer", "no");

    let outcome = outcome_for(&raw);

    assert_eq!(outcome.rule, RuleId::Eb1cIncomplete);
    assert_eq!(outcome.status, StatusLevel::PartialEb1c);
    assert_eq!(outcome.score_label, "Incomplete");
}

#[test]
fn partial_managerial_answers_yield_to_any_criterion() {
    let raw = RawAttributes::new()
        .with("managerial_role", "yes")
        .with("publications", true);

    assert_eq!(outcome_for(&raw).rule, RuleId::WeakProfile);
}

#[test]
fn empty_submission_is_not_eligible() {
    let outcome = outcome_for(&RawAttributes::new());

    assert_eq!(outcome.rule, RuleId::NotEligible);
    assert_eq!(outcome.category, Category::Eb1);
    assert_eq!(outcome.status, StatusLevel::NotEligible);
    assert_eq!(outcome.score_label, "0 criteria");
    assert!(!outcome.recommended_steps.is_empty());
}

#[test]
fn explicit_negatives_match_the_empty_submission() {
    let raw = RawAttributes::new()
        .with("judging", false)
        .with("offer", "no")
        .with("experience", "under_3_years")
        .with("tenure", "No");

    assert_eq!(outcome_for(&raw), outcome_for(&RawAttributes::new()));
}

#[test]
fn missing_experience_blocks_an_otherwise_strong_b_profile() {
    let raw = extend(
        RawAttributes::new().with("offer", "yes"),
        &[AttributeKey::PublishedArticles, AttributeKey::JudgingResearch],
    );

    let outcome = outcome_for(&raw);

    assert_eq!(outcome.rule, RuleId::Eb1bNeedsExperience);
    assert_eq!(outcome.status, StatusLevel::NeedsExperience);
    assert_eq!(outcome.score_label, "2/6");
}

#[test]
fn unrecognized_experience_counts_as_missing() {
    let raw = extend(
        RawAttributes::new()
            .with("offer", "yes")
            .with("experience", "about_two_years"),
        &[AttributeKey::PublishedArticles, AttributeKey::JudgingResearch],
    );

    assert_eq!(outcome_for(&raw).rule, RuleId::Eb1bNeedsExperience);
}

#[test]
fn missing_offer_blocks_an_otherwise_strong_b_profile() {
    let raw = extend(
        RawAttributes::new().with("experience", "3_years"),
        &[AttributeKey::PublishedArticles, AttributeKey::JudgingResearch],
    );

    let outcome = outcome_for(&raw);

    assert_eq!(outcome.rule, RuleId::Eb1bNeedsJobOffer);
    assert_eq!(outcome.status, StatusLevel::NeedsJobOffer);
}

#[test]
fn basics_with_one_criterion_are_one_short() {
    let raw = extend(eb1b_basics(), &[AttributeKey::JudgingResearch]);

    let outcome = outcome_for(&raw);

    assert_eq!(outcome.rule, RuleId::Eb1bOneShort);
    assert_eq!(outcome.status, StatusLevel::OneCriterionShort);
    assert_eq!(outcome.score_label, "1/6");
}

#[test]
fn two_category_a_criteria_are_one_short() {
    let raw = flags(&[AttributeKey::Publications, AttributeKey::Authorship]);

    let outcome = outcome_for(&raw);

    assert_eq!(outcome.rule, RuleId::Eb1aOneShort);
    assert_eq!(outcome.category, Category::Eb1a);
    assert_eq!(outcome.score_label, "2/10");
}

#[test]
fn shared_fact_alone_lands_in_the_dual_pathway() {
    let outcome = outcome_for(&flags(&[AttributeKey::LesserAwardsB]));

    assert_eq!(outcome.rule, RuleId::DualPotential);
    assert_eq!(outcome.category, Category::Eb1aOrEb1b);
    assert_eq!(outcome.score_label, "1 criteria");
    assert!(outcome.narrative.contains("EB-1A (1/10), EB-1B (1/6)"));
}

#[test]
fn dual_pathway_reports_the_larger_counter() {
    let raw = RawAttributes::new()
        .with("publications", true)
        .with("published_articles", true)
        .with("judging_research", true);

    let outcome = outcome_for(&raw);

    assert_eq!(outcome.rule, RuleId::DualPotential);
    assert_eq!(outcome.score_label, "2 criteria");
    assert!(outcome.narrative.contains("EB-1B (2/6)"));
}

#[test]
fn single_criterion_on_one_side_is_a_weak_profile() {
    let only_a = flags(&[AttributeKey::Performances]);
    let only_b = RawAttributes::new().with("tenure", "yes");

    for raw in [only_a, only_b] {
        let outcome = outcome_for(&raw);
        assert_eq!(outcome.rule, RuleId::WeakProfile);
        assert_eq!(outcome.status, StatusLevel::WeakProfile);
        assert_eq!(outcome.score_label, "1 criterion met");
    }
}

#[test]
fn dual_rule_is_checked_before_weak_profile() {
    let canonical = normalize(&flags(&[AttributeKey::Publications, AttributeKey::JudgingResearch]));

    let matching = ClassificationEngine::new().matching_rules(&canonical);

    assert_eq!(
        matching,
        vec![
            RuleId::DualPotential,
            RuleId::WeakProfile,
            RuleId::NotEligible
        ]
    );
}

#[test]
fn classification_only_reads_the_canonical_snapshot() {
    let direct = CanonicalAttributes {
        judging: true,
        authorship: true,
        high_salary: true,
        ..CanonicalAttributes::default()
    };
    let via_raw = flags(&[
        AttributeKey::Judging,
        AttributeKey::Authorship,
        AttributeKey::HighSalary,
    ]);

    assert_eq!(
        ClassificationEngine::new().classify(&direct),
        outcome_for(&via_raw)
    );
}
