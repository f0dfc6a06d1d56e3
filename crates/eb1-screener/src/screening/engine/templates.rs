use super::super::outcome::{Category, OutcomeRecord, SeverityColor, StatusLevel, StrengthTag};
use super::rules::{RuleContext, RuleId};

/// Static half of an outcome; the score label and narrative are filled from live counters.
pub(crate) struct OutcomeTemplate {
    pub(crate) rule: RuleId,
    pub(crate) category: Category,
    pub(crate) status: StatusLevel,
    pub(crate) color: SeverityColor,
    pub(crate) title: &'static str,
    pub(crate) steps: &'static [&'static str],
    pub(crate) strength: StrengthTag,
    pub(crate) processing: &'static str,
}

impl OutcomeTemplate {
    fn render(&self, score_label: String, narrative: String) -> OutcomeRecord {
        OutcomeRecord {
            rule: self.rule,
            category: self.category,
            status: self.status,
            score_label,
            severity_color: self.color,
            title: self.title.to_string(),
            narrative,
            recommended_steps: self.steps.iter().map(|step| step.to_string()).collect(),
            strength: self.strength,
            processing_note: self.processing.to_string(),
        }
    }
}

fn eb1a_score(ctx: &RuleContext<'_>) -> String {
    format!("{}/10", ctx.counters.count_a)
}

fn eb1b_score(ctx: &RuleContext<'_>) -> String {
    format!("{}/6", ctx.counters.count_b)
}

pub(crate) const MAJOR_AWARD_OVERRIDE: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::MajorAwardOverride,
    category: Category::Eb1a,
    status: StatusLevel::HighlyLikely,
    color: SeverityColor::DarkGreen,
    title: "Major Award Override - Exceptional Case",
    steps: &[
        "Gather official award documentation and certificates",
        "Compile media coverage and press releases about your award",
        "Prepare detailed impact statement of your achievement",
        "Document sustained acclaim following the award",
        "Consult with immigration attorney for petition preparation",
        "Prepare expert opinion letters highlighting award significance",
    ],
    strength: StrengthTag::Exceptional,
    processing: "Self-petition possible. Very high approval rate.",
};

pub(crate) fn major_award_override(_ctx: &RuleContext<'_>) -> OutcomeRecord {
    MAJOR_AWARD_OVERRIDE.render(
        "10/10".to_string(),
        "You possess a major internationally recognized award (Nobel Prize, Oscar, Pulitzer \
         Prize, Olympic Medal, Grammy, etc.). This single achievement typically satisfies all \
         EB-1A requirements without needing additional criteria."
            .to_string(),
    )
}

pub(crate) const EB1A_EXCEPTIONAL: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1aExceptional,
    category: Category::Eb1a,
    status: StatusLevel::Exceptional,
    color: SeverityColor::DarkGreen,
    title: "Extraordinary Ability - Exceptional Profile",
    steps: &[
        "Compile comprehensive documentation for all criteria",
        "Obtain 6-10 expert opinion letters from internationally recognized leaders",
        "Prepare detailed CV with emphasis on impact and recognition",
        "Document evidence of sustained acclaim over multiple years",
        "Gather citation reports and impact metrics",
        "Engage experienced immigration attorney for premium processing",
        "Consider expedited processing given strength of case",
    ],
    strength: StrengthTag::Exceptional,
    processing: "Self-petition possible. Extremely high approval probability.",
};

pub(crate) fn eb1a_exceptional(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1A_EXCEPTIONAL.render(
        eb1a_score(ctx),
        format!(
            "You meet {} of 10 EB-1A criteria (only 3 required). This is an exceptionally \
             strong profile demonstrating sustained national or international acclaim at the \
             very top of your field. You exceed requirements by a significant margin.",
            ctx.counters.count_a
        ),
    )
}

pub(crate) const EB1A_VERY_STRONG: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1aVeryStrong,
    category: Category::Eb1a,
    status: StatusLevel::VeryStrong,
    color: SeverityColor::ForestGreen,
    title: "Extraordinary Ability - Very Strong Profile",
    steps: &[
        "Document all criteria with strong evidence",
        "Obtain 5-8 expert opinion letters from field leaders",
        "Prepare comprehensive CV highlighting major achievements",
        "Compile evidence of sustained acclaim and impact",
        "Gather media coverage and recognition documentation",
        "Work with immigration attorney for strategic petition",
        "Consider self-petition for faster processing",
    ],
    strength: StrengthTag::VeryStrong,
    processing: "Self-petition recommended. Very high approval rate.",
};

pub(crate) fn eb1a_very_strong(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1A_VERY_STRONG.render(
        eb1a_score(ctx),
        format!(
            "You meet {} of 10 EB-1A criteria (only 3 required). This is a very strong profile \
             with substantial evidence of extraordinary ability. You significantly exceed \
             minimum requirements.",
            ctx.counters.count_a
        ),
    )
}

pub(crate) const EB1A_QUALIFIED: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1aQualified,
    category: Category::Eb1a,
    status: StatusLevel::Qualified,
    color: SeverityColor::LimeGreen,
    title: "Extraordinary Ability - Meets Requirements",
    steps: &[
        "Focus on quality documentation for all criteria",
        "Obtain 4-6 expert opinion letters from recognized experts",
        "Prepare detailed evidence packages for each criterion",
        "Document sustained acclaim over time",
        "Review criteria you might partially meet for additional evidence",
        "Consult attorney to assess documentation strength",
        "Consider whether criteria meet \"extraordinary ability\" standard",
    ],
    strength: StrengthTag::Qualified,
    processing: "Self-petition possible. Approval depends on evidence quality.",
};

pub(crate) fn eb1a_qualified(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1A_QUALIFIED.render(
        eb1a_score(ctx),
        format!(
            "You meet {} of 10 EB-1A criteria (3 required). You meet the basic requirements for \
             EB-1A. Success depends heavily on the quality and strength of your documentation.",
            ctx.counters.count_a
        ),
    )
}

pub(crate) const EB1B_EXCEPTIONAL: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1bExceptional,
    category: Category::Eb1b,
    status: StatusLevel::Exceptional,
    color: SeverityColor::DarkGreen,
    title: "Outstanding Researcher/Professor - Exceptional",
    steps: &[
        "Secure formal permanent job offer letter on letterhead",
        "Document 3+ years teaching/research experience clearly",
        "Compile comprehensive research achievements portfolio",
        "Obtain letters from 5-7 independent experts in your field",
        "Prepare citation reports and impact metrics",
        "Work closely with employer and attorney for petition",
        "Prepare detailed description of research contributions",
    ],
    strength: StrengthTag::Exceptional,
    processing: "Employer-sponsored petition. Extremely high approval rate.",
};

pub(crate) fn eb1b_exceptional(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1B_EXCEPTIONAL.render(
        eb1b_score(ctx),
        format!(
            "You meet {} of 6 EB-1B criteria (only 2 required) plus all experience and job \
             offer requirements. This is an outstanding academic/research profile.",
            ctx.counters.count_b
        ),
    )
}

pub(crate) const EB1B_VERY_STRONG: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1bVeryStrong,
    category: Category::Eb1b,
    status: StatusLevel::VeryStrong,
    color: SeverityColor::ForestGreen,
    title: "Outstanding Researcher/Professor - Very Strong",
    steps: &[
        "Obtain formal permanent position offer letter",
        "Verify and document 3+ years experience thoroughly",
        "Compile all publications and research documentation",
        "Obtain letters from 4-6 independent field experts",
        "Document impact of research contributions",
        "Coordinate with employer for petition sponsorship",
        "Prepare comprehensive evidence packages",
    ],
    strength: StrengthTag::VeryStrong,
    processing: "Employer-sponsored petition. Very high approval rate.",
};

pub(crate) fn eb1b_very_strong(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1B_VERY_STRONG.render(
        eb1b_score(ctx),
        format!(
            "You meet {} of 6 EB-1B criteria (only 2 required) plus experience and job offer. \
             This is a very strong academic profile.",
            ctx.counters.count_b
        ),
    )
}

pub(crate) const EB1B_QUALIFIED: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1bQualified,
    category: Category::Eb1b,
    status: StatusLevel::Qualified,
    color: SeverityColor::LimeGreen,
    title: "Outstanding Researcher/Professor - Meets Requirements",
    steps: &[
        "Ensure job offer is for permanent research/teaching position",
        "Verify 3+ years experience is properly documented",
        "Gather strong evidence for all criteria met",
        "Obtain letters from 3-5 independent experts",
        "Coordinate closely with employer for petition",
        "Consult attorney for petition strategy and documentation",
        "Ensure research contributions are well-documented",
    ],
    strength: StrengthTag::Qualified,
    processing: "Employer-sponsored petition. Good approval probability.",
};

pub(crate) fn eb1b_qualified(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1B_QUALIFIED.render(
        eb1b_score(ctx),
        format!(
            "You meet {} of 6 EB-1B criteria (2 required) with required experience and job \
             offer. You meet the basic EB-1B requirements.",
            ctx.counters.count_b
        ),
    )
}

pub(crate) const EB1C_QUALIFIED: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1cQualified,
    category: Category::Eb1c,
    status: StatusLevel::Qualified,
    color: SeverityColor::LimeGreen,
    title: "Multinational Manager/Executive - Qualified",
    steps: &[
        "Document 1+ year continuous managerial employment abroad",
        "Verify US position is also managerial/executive level",
        "Confirm parent/subsidiary/affiliate corporate relationship",
        "Prepare organizational charts for foreign and US entities",
        "Document your supervisory and decision-making authority",
        "Work with employer and attorney for petition preparation",
        "Gather evidence of companies qualifying relationship",
    ],
    strength: StrengthTag::Qualified,
    processing: "Employer-sponsored petition. Standard approval rate for qualifying cases.",
};

pub(crate) fn eb1c_qualified(_ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1C_QUALIFIED.render(
        "Met".to_string(),
        "You meet all EB-1C requirements: 1+ year managerial/executive experience abroad with \
         transfer to US affiliate/parent/subsidiary in similar role. This is the most \
         straightforward EB-1 path for qualifying executives."
            .to_string(),
    )
}

pub(crate) const EB1B_NEEDS_EXPERIENCE: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1bNeedsExperience,
    category: Category::Eb1b,
    status: StatusLevel::NeedsExperience,
    color: SeverityColor::DarkOrange,
    title: "Outstanding Researcher - Need 3 Years Experience",
    steps: &[
        "Continue building research/teaching experience to reach 3 years",
        "Maintain job offer or secure new offer when eligible",
        "Continue strengthening research profile during waiting period",
        "Add publications and research contributions",
        "Build citation count and impact metrics",
        "Revisit EB-1B eligibility once 3-year mark is reached",
        "Consider EB-2 or EB-3 as interim pathways",
    ],
    strength: StrengthTag::NeedsExperience,
    processing: "Not yet eligible. Revisit after gaining required experience.",
};

pub(crate) fn eb1b_needs_experience(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1B_NEEDS_EXPERIENCE.render(
        eb1b_score(ctx),
        format!(
            "You meet {} of 6 EB-1B criteria (2 required) and have a job offer, but lack the \
             required 3 years of research/teaching experience. Once you gain sufficient \
             experience, you should qualify.",
            ctx.counters.count_b
        ),
    )
}

pub(crate) const EB1B_NEEDS_JOB_OFFER: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1bNeedsJobOffer,
    category: Category::Eb1b,
    status: StatusLevel::NeedsJobOffer,
    color: SeverityColor::DarkOrange,
    title: "Outstanding Researcher - Need Permanent Job Offer",
    steps: &[
        "Actively seek permanent research/teaching positions in US",
        "Apply to universities and research institutions",
        "Leverage your research profile and publications",
        "Network at academic conferences and institutions",
        "Once offer secured, proceed with EB-1B petition",
        "Consider EB-1A as alternative if outstanding achievements",
        "Maintain and strengthen research credentials during search",
    ],
    strength: StrengthTag::NeedsJobOffer,
    processing: "Not yet eligible. Secure permanent position offer first.",
};

pub(crate) fn eb1b_needs_job_offer(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1B_NEEDS_JOB_OFFER.render(
        eb1b_score(ctx),
        format!(
            "You meet {} of 6 EB-1B criteria (2 required) and have 3+ years experience, but \
             need a permanent research/teaching position offer from a US university or research \
             institution.",
            ctx.counters.count_b
        ),
    )
}

pub(crate) const EB1B_ONE_SHORT: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1bOneShort,
    category: Category::Eb1b,
    status: StatusLevel::OneCriterionShort,
    color: SeverityColor::DarkOrange,
    title: "Outstanding Researcher - Need One More Criterion",
    steps: &[
        "Review all 6 EB-1B criteria carefully for partial matches",
        "Focus on achieving one additional criterion quickly",
        "Publish additional articles in peer-reviewed journals",
        "Seek peer review opportunities in your field",
        "Apply for academic awards and recognition",
        "Join prestigious professional organizations",
        "Consult attorney to assess borderline criteria",
        "Consider EB-2 NIW as backup option",
    ],
    strength: StrengthTag::Borderline,
    processing: "Not currently eligible. Strengthen profile before filing.",
};

pub(crate) fn eb1b_one_short(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1B_ONE_SHORT.render(
        eb1b_score(ctx),
        format!(
            "You have experience and job offer but meet only {} of 6 EB-1B criteria (2 \
             required). You need to strengthen your profile in one more area to qualify.",
            ctx.counters.count_b
        ),
    )
}

pub(crate) const EB1A_ONE_SHORT: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1aOneShort,
    category: Category::Eb1a,
    status: StatusLevel::OneCriterionShort,
    color: SeverityColor::DarkOrange,
    title: "Extraordinary Ability - Need One More Criterion",
    steps: &[
        "Review all 10 criteria carefully for partial matches",
        "Focus on achieving one additional criterion",
        "Pursue awards and recognition in your field",
        "Seek judging/peer review opportunities",
        "Increase media coverage of your work",
        "Join organizations requiring outstanding achievements",
        "Document high salary if applicable",
        "Consult attorney to assess marginal criteria",
        "Consider EB-2 NIW as viable alternative",
        "Revisit EB-1A in 6-12 months",
    ],
    strength: StrengthTag::Borderline,
    processing: "Not currently eligible. One more criterion needed.",
};

pub(crate) fn eb1a_one_short(ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1A_ONE_SHORT.render(
        eb1a_score(ctx),
        format!(
            "You meet {} of 10 EB-1A criteria but need 3 minimum. You are very close to \
             qualifying. With focused effort on one additional criterion, you could become \
             eligible.",
            ctx.counters.count_a
        ),
    )
}

pub(crate) const DUAL_POTENTIAL: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::DualPotential,
    category: Category::Eb1aOrEb1b,
    status: StatusLevel::Potential,
    color: SeverityColor::Orange,
    title: "Multiple EB-1 Pathways Possible - Build Profile",
    steps: &[
        "Choose strategic path: Academic (EB-1B) or General (EB-1A)",
        "For EB-1A: Need 2 more criteria from 10 available",
        "For EB-1B: Need qualifying criteria + experience + offer",
        "Publish in top-tier journals and conferences",
        "Build citation count and research impact",
        "Pursue awards, media coverage, and recognition",
        "Seek peer review and judging opportunities",
        "Consider EB-2 NIW as more realistic current option",
        "Revisit EB-1 eligibility in 1-2 years",
    ],
    strength: StrengthTag::Developing,
    processing: "Not currently eligible. Significant profile building needed.",
};

pub(crate) fn dual_potential(ctx: &RuleContext<'_>) -> OutcomeRecord {
    let counters = &ctx.counters;
    let mut paths = Vec::with_capacity(2);
    if counters.count_a >= 1 {
        paths.push(format!("EB-1A ({}/10)", counters.count_a));
    }
    if counters.count_b >= 1 {
        paths.push(format!("EB-1B ({}/6)", counters.count_b));
    }

    DUAL_POTENTIAL.render(
        format!("{} criteria", counters.count_a.max(counters.count_b)),
        format!(
            "You show potential for multiple EB-1 pathways: {}. However, you need \
             significantly more achievements to qualify for either category.",
            paths.join(", ")
        ),
    )
}

pub(crate) const WEAK_PROFILE: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::WeakProfile,
    category: Category::Eb1,
    status: StatusLevel::WeakProfile,
    color: SeverityColor::Tomato,
    title: "Not Currently Qualified - Significant Development Needed",
    steps: &[
        "Focus on long-term career development (2-3 years)",
        "Build strong publication record in respected venues",
        "Pursue multiple forms of recognition and awards",
        "Develop leadership roles in professional organizations",
        "Seek opportunities for media coverage and speaking",
        "Build citation count and measurable impact",
        "Consider EB-2 or EB-3 as more appropriate pathways",
        "Revisit EB-1 after substantial achievements",
        "Work with career mentor to build profile strategically",
    ],
    strength: StrengthTag::Weak,
    processing: "Not eligible. Consider EB-2/EB-3 alternatives.",
};

pub(crate) fn weak_profile(_ctx: &RuleContext<'_>) -> OutcomeRecord {
    WEAK_PROFILE.render(
        "1 criterion met".to_string(),
        "You meet only 1 EB-1 criterion. EB-1 requires substantially more achievements and \
         recognition. You need significant career development to become competitive for this \
         category."
            .to_string(),
    )
}

pub(crate) const EB1C_INCOMPLETE: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::Eb1cIncomplete,
    category: Category::Eb1c,
    status: StatusLevel::PartialEb1c,
    color: SeverityColor::DarkOrange,
    title: "Multinational Executive - Incomplete Requirements",
    steps: &[
        "Verify you have 1+ year managerial role with foreign entity",
        "Ensure US transfer is to parent/subsidiary/affiliate company",
        "Confirm US position is also managerial/executive level",
        "Once all requirements met, EB-1C is possible",
        "Otherwise, consider EB-2 or EB-3 categories",
        "If not in managerial track, focus on EB-2 NIW",
        "Consult attorney for alternative pathways",
    ],
    strength: StrengthTag::Incomplete,
    processing: "Not fully eligible. Complete all EB-1C requirements.",
};

pub(crate) fn eb1c_incomplete(_ctx: &RuleContext<'_>) -> OutcomeRecord {
    EB1C_INCOMPLETE.render(
        "Incomplete".to_string(),
        "You have some managerial/executive experience but do not meet all EB-1C \
         requirements. EB-1A and EB-1B are not viable based on your profile."
            .to_string(),
    )
}

pub(crate) const NOT_ELIGIBLE: OutcomeTemplate = OutcomeTemplate {
    rule: RuleId::NotEligible,
    category: Category::Eb1,
    status: StatusLevel::NotEligible,
    color: SeverityColor::Crimson,
    title: "Not Qualified for EB-1 - Consider Alternative Categories",
    steps: &[
        "EB-1 is not appropriate at this career stage",
        "Focus on EB-2 NIW (National Interest Waiver) pathway",
        "EB-2 requires advanced degree + exceptional ability",
        "EB-3 is available for skilled workers and professionals",
        "Build career achievements for future EB-1 consideration",
        "Develop publication record and professional recognition",
        "Join professional organizations and seek leadership roles",
        "Consult attorney for EB-2/EB-3 evaluation",
        "Revisit EB-1 after 3-5 years of achievement building",
    ],
    strength: StrengthTag::NotEligible,
    processing: "EB-1 not viable. Pursue EB-2 or EB-3 categories.",
};

pub(crate) fn not_eligible(_ctx: &RuleContext<'_>) -> OutcomeRecord {
    NOT_ELIGIBLE.render(
        "0 criteria".to_string(),
        "Your current profile does not meet EB-1 requirements in any subcategory. EB-1 is the \
         most selective employment-based category, reserved for those with extraordinary \
         ability, outstanding research credentials, or multinational executive experience."
            .to_string(),
    )
}
