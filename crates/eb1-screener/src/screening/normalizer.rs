use tracing::debug;

use super::domain::{
    Answer, AttributeKey, AttributeKind, CanonicalAttributes, Experience, FlagReading,
    RawAttributes,
};

/// Facts that intake collects under more than one key. The canonical key comes first.
const SHARED_FACTS: &[(AttributeKey, &[AttributeKey])] = &[
    (
        AttributeKey::LesserAwards,
        &[AttributeKey::LesserAwards, AttributeKey::LesserAwardsB],
    ),
    (
        AttributeKey::Membership,
        &[AttributeKey::Membership, AttributeKey::MembershipB],
    ),
];

/// Collapses a raw submission into canonical facts.
///
/// Shared facts are OR-reduced across every channel that reports them, so a fact entered only
/// under the category-B question still counts for category A and vice versa. Absent keys take
/// their not-met default; enum values pass through, unrecognized literals included.
pub fn normalize(raw: &RawAttributes) -> CanonicalAttributes {
    let mut canonical = CanonicalAttributes::default();

    for (key, value) in raw.iter() {
        let Some(key) = AttributeKey::from_key(key) else {
            debug!(key, "ignoring unknown screening attribute");
            continue;
        };

        match key.kind() {
            AttributeKind::Flag => {
                if key.is_channel_alias() {
                    continue;
                }
                if let Some(slot) = canonical.flag_mut(key) {
                    *slot = FlagReading::from_value(value).is_met();
                }
            }
            AttributeKind::Experience => canonical.experience = Experience::from_value(value),
            AttributeKind::Answer => {
                let answer = Answer::from_value(value);
                match key {
                    AttributeKey::Offer => canonical.offer = answer,
                    AttributeKey::Tenure => canonical.tenure = answer,
                    AttributeKey::OneYearExp => canonical.one_year_exp = answer,
                    AttributeKey::Transfer => canonical.transfer = answer,
                    AttributeKey::ManagerialRole => canonical.managerial_role = answer,
                    _ => {}
                }
            }
        }
    }

    for (fact, channels) in SHARED_FACTS {
        let merged = channels.iter().any(|channel| channel_met(raw, *channel));
        if let Some(slot) = canonical.flag_mut(*fact) {
            if merged && !*slot {
                debug!(fact = fact.as_str(), "shared fact reported through secondary channel");
            }
            *slot = merged;
        }
    }

    canonical
}

fn channel_met(raw: &RawAttributes, channel: AttributeKey) -> bool {
    raw.get(channel.as_str())
        .map(|value| FlagReading::from_value(value).is_met())
        .unwrap_or(false)
}
