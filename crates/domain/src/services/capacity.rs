//! Capacity presentation: participant-count text and a status sentence with
//! a severity variant. Pure function of counts and event format; no time
//! dependency.

use serde::{Deserialize, Serialize};
use shared::format::group_thousands;

use crate::models::EventFormat;

/// Fixed capacity of a one-to-one event.
const ONE_TO_ONE_CAPACITY: u32 = 2;

/// Fill percentage at which the event counts as full.
const FULL_PERCENT: u64 = 100;

/// Fill percentage at which the event counts as almost full.
const ALMOST_FULL_PERCENT: u64 = 80;

/// Participant counts below this read as a small gathering.
const SMALL_EVENT_LIMIT: u32 = 50;

/// Participant counts at or above this get grouped formatting.
const LARGE_EVENT_LIMIT: u32 = 1_000;

/// Severity variant for the capacity card. Ordered by increasing severity
/// for the fill progression (open, almost full, full).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityVariant {
    Neutral,
    Info,
    Warning,
    Success,
}

/// Presentation data for the capacity card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CapacityDetail {
    pub participants_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_threshold_text: Option<String>,
    pub status_text: String,
    pub status_variant: CapacityVariant,
}

/// Build the capacity card data from counts and the event format.
///
/// Percentage comparisons are inclusive at the boundary (`>=`).
pub fn format_capacity_detail(
    joined_count: u32,
    min_participants: Option<u32>,
    max_participants: Option<u32>,
    format: EventFormat,
) -> CapacityDetail {
    if format == EventFormat::OneToOne {
        return one_to_one_detail(joined_count);
    }

    let min_threshold_text = min_participants.map(|min| format!("at least {min} needed"));

    match (min_participants, max_participants) {
        (None, None) => CapacityDetail {
            participants_text: group_thousands(joined_count),
            min_threshold_text: None,
            status_text: magnitude_status(joined_count),
            status_variant: CapacityVariant::Neutral,
        },
        (None, Some(max)) => {
            let (status_text, status_variant) = fill_status(joined_count, max);
            CapacityDetail {
                participants_text: format!("{joined_count} of {max}"),
                min_threshold_text: None,
                status_text,
                status_variant,
            }
        }
        (Some(min), None) => {
            if joined_count < min {
                CapacityDetail {
                    participants_text: group_thousands(joined_count),
                    min_threshold_text,
                    status_text: below_min_status(joined_count, min, format),
                    status_variant: CapacityVariant::Warning,
                }
            } else {
                CapacityDetail {
                    participants_text: group_thousands(joined_count),
                    min_threshold_text,
                    status_text: magnitude_status(joined_count),
                    status_variant: CapacityVariant::Neutral,
                }
            }
        }
        (Some(min), Some(max)) => {
            let participants_text = format!("{joined_count} of {max}");
            let (status_text, status_variant) = if fill_percent(joined_count, max) >= FULL_PERCENT
            {
                ("Full".to_string(), CapacityVariant::Success)
            } else if joined_count < min {
                (
                    below_min_status(joined_count, min, format),
                    CapacityVariant::Warning,
                )
            } else {
                fill_status(joined_count, max)
            };
            CapacityDetail {
                participants_text,
                min_threshold_text,
                status_text,
                status_variant,
            }
        }
    }
}

fn one_to_one_detail(joined_count: u32) -> CapacityDetail {
    let participants_text = format!("{joined_count} of {ONE_TO_ONE_CAPACITY}");
    if joined_count < ONE_TO_ONE_CAPACITY {
        CapacityDetail {
            participants_text,
            min_threshold_text: None,
            status_text: "Needs 1 more participant".to_string(),
            status_variant: CapacityVariant::Warning,
        }
    } else {
        CapacityDetail {
            participants_text,
            min_threshold_text: None,
            status_text: "Full".to_string(),
            status_variant: CapacityVariant::Success,
        }
    }
}

fn fill_percent(joined_count: u32, max_participants: u32) -> u64 {
    if max_participants == 0 {
        return FULL_PERCENT;
    }
    u64::from(joined_count) * 100 / u64::from(max_participants)
}

fn fill_status(joined_count: u32, max_participants: u32) -> (String, CapacityVariant) {
    let percent = fill_percent(joined_count, max_participants);
    if percent >= FULL_PERCENT {
        ("Full".to_string(), CapacityVariant::Success)
    } else if percent >= ALMOST_FULL_PERCENT {
        ("Almost full".to_string(), CapacityVariant::Warning)
    } else {
        ("Spots available".to_string(), CapacityVariant::Info)
    }
}

fn below_min_status(joined_count: u32, min_participants: u32, format: EventFormat) -> String {
    let missing = min_participants - joined_count;
    match format {
        EventFormat::Group => format!("Needs {missing} more to run"),
        _ => format!("Below minimum ({joined_count} of {min_participants})"),
    }
}

fn magnitude_status(joined_count: u32) -> String {
    if joined_count < SMALL_EVENT_LIMIT {
        format!("{joined_count} joined so far")
    } else if joined_count < LARGE_EVENT_LIMIT {
        format!("{joined_count} people are in")
    } else {
        format!("{} people are in", group_thousands(joined_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_to_one_waiting_for_partner() {
        // Scenario: 1 of 2 with a warning while the pair is incomplete.
        let detail = format_capacity_detail(1, None, None, EventFormat::OneToOne);
        assert_eq!(detail.participants_text, "1 of 2");
        assert_eq!(detail.status_variant, CapacityVariant::Warning);
        assert_eq!(detail.status_text, "Needs 1 more participant");
    }

    #[test]
    fn test_one_to_one_full() {
        let detail = format_capacity_detail(2, None, None, EventFormat::OneToOne);
        assert_eq!(detail.participants_text, "2 of 2");
        assert_eq!(detail.status_variant, CapacityVariant::Success);
        assert_eq!(detail.status_text, "Full");
    }

    #[test]
    fn test_one_to_one_ignores_configured_bounds() {
        let detail = format_capacity_detail(1, Some(5), Some(30), EventFormat::OneToOne);
        assert_eq!(detail.participants_text, "1 of 2");
        assert_eq!(detail.min_threshold_text, None);
    }

    #[test]
    fn test_unlimited_small_count() {
        let detail = format_capacity_detail(12, None, None, EventFormat::Workshop);
        assert_eq!(detail.participants_text, "12");
        assert_eq!(detail.status_text, "12 joined so far");
        assert_eq!(detail.status_variant, CapacityVariant::Neutral);
    }

    #[test]
    fn test_unlimited_mid_count() {
        let detail = format_capacity_detail(250, None, None, EventFormat::Workshop);
        assert_eq!(detail.status_text, "250 people are in");
        assert_eq!(detail.status_variant, CapacityVariant::Neutral);
    }

    #[test]
    fn test_unlimited_large_count_uses_grouping() {
        let detail = format_capacity_detail(12_500, None, None, EventFormat::Workshop);
        assert_eq!(detail.participants_text, "12,500");
        assert_eq!(detail.status_text, "12,500 people are in");
    }

    #[test]
    fn test_magnitude_boundaries_inclusive() {
        assert_eq!(magnitude_status(49), "49 joined so far");
        assert_eq!(magnitude_status(50), "50 people are in");
        assert_eq!(magnitude_status(999), "999 people are in");
        assert_eq!(magnitude_status(1_000), "1,000 people are in");
    }

    #[test]
    fn test_max_only_open() {
        let detail = format_capacity_detail(7, None, Some(10), EventFormat::Workshop);
        assert_eq!(detail.participants_text, "7 of 10");
        assert_eq!(detail.status_text, "Spots available");
        assert_eq!(detail.status_variant, CapacityVariant::Info);
    }

    #[test]
    fn test_max_only_almost_full_at_eighty_percent() {
        let detail = format_capacity_detail(8, None, Some(10), EventFormat::Workshop);
        assert_eq!(detail.status_text, "Almost full");
        assert_eq!(detail.status_variant, CapacityVariant::Warning);
    }

    #[test]
    fn test_max_only_full_at_hundred_percent() {
        let detail = format_capacity_detail(10, None, Some(10), EventFormat::Workshop);
        assert_eq!(detail.status_text, "Full");
        assert_eq!(detail.status_variant, CapacityVariant::Success);
    }

    #[test]
    fn test_max_only_over_capacity_still_full() {
        let detail = format_capacity_detail(14, None, Some(10), EventFormat::Workshop);
        assert_eq!(detail.participants_text, "14 of 10");
        assert_eq!(detail.status_variant, CapacityVariant::Success);
    }

    #[test]
    fn test_severity_monotonic_in_joined_count() {
        // info -> warning -> success as the count climbs toward max.
        let mut last = CapacityVariant::Neutral;
        for joined in 0..=12 {
            let detail = format_capacity_detail(joined, None, Some(10), EventFormat::Workshop);
            assert!(
                detail.status_variant >= last,
                "severity decreased at joined_count={joined}"
            );
            last = detail.status_variant;
        }
    }

    #[test]
    fn test_min_only_below_threshold_warns() {
        let detail = format_capacity_detail(3, Some(5), None, EventFormat::Workshop);
        assert_eq!(detail.status_variant, CapacityVariant::Warning);
        assert_eq!(detail.status_text, "Below minimum (3 of 5)");
        assert_eq!(detail.min_threshold_text.as_deref(), Some("at least 5 needed"));
    }

    #[test]
    fn test_min_only_at_threshold_uses_magnitude() {
        let detail = format_capacity_detail(5, Some(5), None, EventFormat::Workshop);
        assert_eq!(detail.status_variant, CapacityVariant::Neutral);
        assert_eq!(detail.status_text, "5 joined so far");
    }

    #[test]
    fn test_group_below_min_phrasing() {
        let detail = format_capacity_detail(4, Some(6), Some(20), EventFormat::Group);
        assert_eq!(detail.status_text, "Needs 2 more to run");
        assert_eq!(detail.status_variant, CapacityVariant::Warning);
    }

    #[test]
    fn test_workshop_below_min_phrasing() {
        let detail = format_capacity_detail(4, Some(6), Some(20), EventFormat::Workshop);
        assert_eq!(detail.status_text, "Below minimum (4 of 6)");
    }

    #[test]
    fn test_both_bounds_follow_fill_thresholds_above_min() {
        let open = format_capacity_detail(8, Some(5), Some(20), EventFormat::Group);
        assert_eq!(open.status_text, "Spots available");
        assert_eq!(open.status_variant, CapacityVariant::Info);

        let almost = format_capacity_detail(16, Some(5), Some(20), EventFormat::Group);
        assert_eq!(almost.status_text, "Almost full");
        assert_eq!(almost.status_variant, CapacityVariant::Warning);

        let full = format_capacity_detail(20, Some(5), Some(20), EventFormat::Group);
        assert_eq!(full.status_text, "Full");
        assert_eq!(full.status_variant, CapacityVariant::Success);
    }

    #[test]
    fn test_zero_capacity_counts_as_full() {
        let detail = format_capacity_detail(0, None, Some(0), EventFormat::Workshop);
        assert_eq!(detail.status_text, "Full");
        assert_eq!(detail.status_variant, CapacityVariant::Success);
    }

    #[test]
    fn test_formatting_is_pure() {
        assert_eq!(
            format_capacity_detail(7, Some(5), Some(10), EventFormat::Group),
            format_capacity_detail(7, Some(5), Some(10), EventFormat::Group)
        );
    }

    #[test]
    fn test_detail_serde_shape() {
        let detail = format_capacity_detail(8, None, Some(10), EventFormat::Workshop);
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["participants_text"], "8 of 10");
        assert_eq!(json["status_variant"], "warning");
        assert!(json.get("min_threshold_text").is_none());
    }
}
