//! Keyword classifier: the legacy free-text classification contract.
//!
//! Substring heuristics are inherently fragile (negation scope, "not
//! clean" vs "clean"); the lists in [`crate::vocab`] are kept as-is for
//! output compatibility. Anything smarter belongs in a new
//! `AmenityClassifier` implementation, not here.

use roomlens_core::{AmenityClassifier, AmenityFinding, AmenityKey, AmenityStatus};

use crate::vocab;

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// First-match-wins substring classifier over flattened description lines.
///
/// Stateless and pure: identical input lines always produce identical
/// findings.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a single matched line for a key.
    fn status_for_line(key: AmenityKey, line_lower: &str) -> AmenityStatus {
        if key == AmenityKey::NoClutter {
            // Inverted polarity: Missing means clutter WAS found.
            let cluttered = contains_any(line_lower, vocab::CLUTTER_POSITIVE)
                && !contains_any(line_lower, vocab::CLUTTER_TIDY);
            if cluttered {
                AmenityStatus::Missing
            } else {
                AmenityStatus::Present
            }
        } else if contains_any(line_lower, vocab::NEGATIVE_INDICATORS)
            || line_lower.contains(vocab::negated_phrase(key))
        {
            AmenityStatus::Missing
        } else {
            AmenityStatus::Present
        }
    }

    fn finding_for_key(key: AmenityKey, lines: &[&str]) -> AmenityFinding {
        let hit = lines.iter().find_map(|line| {
            let lower = line.to_lowercase();
            contains_any(&lower, vocab::keywords(key)).then(|| (*line, lower))
        });

        match hit {
            Some((line, lower)) => {
                let status = Self::status_for_line(key, &lower);
                let action = (status == AmenityStatus::Missing)
                    .then(|| vocab::fallback_action(key).to_string());
                AmenityFinding {
                    key,
                    status,
                    matched_line: Some(line.to_string()),
                    commentary: line.to_string(),
                    action,
                }
            }
            // No clutter commentary anywhere means no clutter, not unknown.
            None if key == AmenityKey::NoClutter => AmenityFinding {
                key,
                status: AmenityStatus::Present,
                matched_line: None,
                commentary: vocab::TIDY_ROOM_COMMENTARY.to_string(),
                action: None,
            },
            None => AmenityFinding {
                key,
                status: AmenityStatus::Unknown,
                matched_line: None,
                commentary: vocab::fallback_commentary(key).to_string(),
                action: Some(vocab::fallback_action(key).to_string()),
            },
        }
    }
}

impl AmenityClassifier for KeywordClassifier {
    fn classify(&self, lines: &[&str]) -> Vec<AmenityFinding> {
        AmenityKey::ALL
            .iter()
            .map(|&key| Self::finding_for_key(key, lines))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(lines: &[&str]) -> Vec<AmenityFinding> {
        KeywordClassifier::new().classify(lines)
    }

    fn finding(findings: &[AmenityFinding], key: AmenityKey) -> AmenityFinding {
        findings.iter().find(|f| f.key == key).unwrap().clone()
    }

    #[test]
    fn first_matching_line_wins() {
        let findings = classify(&[
            "The pillows are neatly arranged on the bed.",
            "One pillow is visibly out of place.",
        ]);
        let pillows = finding(&findings, AmenityKey::PillowsArranged);
        assert_eq!(pillows.status, AmenityStatus::Present);
        assert_eq!(
            pillows.matched_line.as_deref(),
            Some("The pillows are neatly arranged on the bed.")
        );
    }

    #[test]
    fn negative_indicator_marks_missing() {
        let findings = classify(&["The mirror is dirty and streaked."]);
        let mirror = finding(&findings, AmenityKey::MirrorCleanliness);
        assert_eq!(mirror.status, AmenityStatus::Missing);
        assert_eq!(
            mirror.action.as_deref(),
            Some("Clean the mirror until it is spotless and streak-free.")
        );
    }

    #[test]
    fn key_specific_negation_marks_missing() {
        let findings = classify(&["There is no mirror in the room."]);
        assert_eq!(
            finding(&findings, AmenityKey::MirrorPresent).status,
            AmenityStatus::Missing
        );
    }

    #[test]
    fn unmade_bed_resolves_missing() {
        let findings =
            classify(&["The bed is unmade and covers are wrinkled, not pulled taut."]);
        let bed = finding(&findings, AmenityKey::BedMade);
        assert_eq!(bed.status, AmenityStatus::Missing);
        assert!(bed.matched_line.is_some());
    }

    #[test]
    fn unseen_key_is_unknown_with_fallbacks() {
        let findings = classify(&["The bed covers are smooth and pulled taut."]);
        let towels = finding(&findings, AmenityKey::ToiletriesAndTowelPresent);
        assert_eq!(towels.status, AmenityStatus::Unknown);
        assert!(towels.matched_line.is_none());
        assert_eq!(
            towels.commentary,
            "Some or all standard toiletries and towels are missing or not arranged."
        );
        assert!(towels.action.is_some());
    }

    #[test]
    fn tidy_line_keeps_clutter_present() {
        let findings = classify(&["Room is tidy and free of visible clutter."]);
        let clutter = finding(&findings, AmenityKey::NoClutter);
        assert_eq!(clutter.status, AmenityStatus::Present);
        assert_eq!(
            clutter.matched_line.as_deref(),
            Some("Room is tidy and free of visible clutter.")
        );
    }

    #[test]
    fn clutter_evidence_without_tidy_override_is_missing() {
        let findings = classify(&["Bags and clothing are scattered around the floor."]);
        let clutter = finding(&findings, AmenityKey::NoClutter);
        assert_eq!(clutter.status, AmenityStatus::Missing);
        assert_eq!(
            clutter.action.as_deref(),
            Some("Remove any visible clutter or misplaced items from the room.")
        );
    }

    #[test]
    fn no_clutter_mention_defaults_to_tidy() {
        let findings = classify(&["The bed covers are smooth and pulled taut."]);
        let clutter = finding(&findings, AmenityKey::NoClutter);
        assert_eq!(clutter.status, AmenityStatus::Present);
        assert!(clutter.matched_line.is_none());
        assert_eq!(clutter.commentary, vocab::TIDY_ROOM_COMMENTARY);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let findings = classify(&["THE TOILET LID IS OPEN."]);
        assert_eq!(
            finding(&findings, AmenityKey::ToiletLidClosed).status,
            AmenityStatus::Missing
        );
    }

    #[test]
    fn one_finding_per_key() {
        let findings = classify(&[]);
        assert_eq!(findings.len(), AmenityKey::ALL.len());
    }
}
