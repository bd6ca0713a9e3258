use std::fmt;

use serde::{Deserialize, Serialize};

/// One trackable housekeeping checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityKey {
    BedMade,
    PillowsArranged,
    ExtraBeddingPresent,
    ToiletCleanliness,
    ToiletLidClosed,
    ToiletriesAndTowelPresent,
    MirrorPresent,
    MirrorCleanliness,
    NoClutter,
}

impl AmenityKey {
    /// All keys in classification order.
    pub const ALL: [AmenityKey; 9] = [
        AmenityKey::BedMade,
        AmenityKey::PillowsArranged,
        AmenityKey::ExtraBeddingPresent,
        AmenityKey::ToiletCleanliness,
        AmenityKey::ToiletLidClosed,
        AmenityKey::ToiletriesAndTowelPresent,
        AmenityKey::MirrorPresent,
        AmenityKey::MirrorCleanliness,
        AmenityKey::NoClutter,
    ];

    /// Checklist label shown to housekeeping staff.
    pub fn label(&self) -> &'static str {
        match self {
            AmenityKey::BedMade => "Bed Made",
            AmenityKey::PillowsArranged => "Pillows Arranged",
            AmenityKey::ExtraBeddingPresent => "Extra Pillow/Blanket Present",
            AmenityKey::ToiletCleanliness => "Toilet Cleanliness",
            AmenityKey::ToiletLidClosed => "Toilet Flush Lid Position",
            AmenityKey::ToiletriesAndTowelPresent => "Toiletries and Towel Present",
            AmenityKey::MirrorPresent => "Mirror Present",
            AmenityKey::MirrorCleanliness => "Mirror Cleanliness",
            AmenityKey::NoClutter => "No Clutter",
        }
    }

    /// The display group this key belongs to.
    pub fn group(&self) -> AmenityGroup {
        match self {
            AmenityKey::BedMade
            | AmenityKey::PillowsArranged
            | AmenityKey::ExtraBeddingPresent => AmenityGroup::BedAndPillows,
            AmenityKey::ToiletCleanliness
            | AmenityKey::ToiletLidClosed
            | AmenityKey::ToiletriesAndTowelPresent => AmenityGroup::ToiletAndToiletries,
            AmenityKey::MirrorPresent | AmenityKey::MirrorCleanliness => AmenityGroup::Mirror,
            AmenityKey::NoClutter => AmenityGroup::RoomClutter,
        }
    }
}

impl fmt::Display for AmenityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tri-state outcome for a single checklist key.
///
/// `Unknown` means no description line matched the key's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityStatus {
    Present,
    Missing,
    Unknown,
}

impl AmenityStatus {
    /// Whether the status came from actual evidence in a description.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AmenityStatus::Unknown)
    }
}

/// A display cluster of related checklist keys. Grouping is static
/// configuration, never inferred from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityGroup {
    BedAndPillows,
    ToiletAndToiletries,
    Mirror,
    RoomClutter,
}

impl AmenityGroup {
    /// All groups in report/action display order.
    pub const ALL: [AmenityGroup; 4] = [
        AmenityGroup::BedAndPillows,
        AmenityGroup::ToiletAndToiletries,
        AmenityGroup::Mirror,
        AmenityGroup::RoomClutter,
    ];

    /// The ordered keys owned by this group.
    pub fn keys(&self) -> &'static [AmenityKey] {
        match self {
            AmenityGroup::BedAndPillows => &[
                AmenityKey::BedMade,
                AmenityKey::PillowsArranged,
                AmenityKey::ExtraBeddingPresent,
            ],
            AmenityGroup::ToiletAndToiletries => &[
                AmenityKey::ToiletCleanliness,
                AmenityKey::ToiletLidClosed,
                AmenityKey::ToiletriesAndTowelPresent,
            ],
            AmenityGroup::Mirror => &[AmenityKey::MirrorPresent, AmenityKey::MirrorCleanliness],
            AmenityGroup::RoomClutter => &[AmenityKey::NoClutter],
        }
    }

    /// Display title for checklists and reports.
    pub fn title(&self) -> &'static str {
        match self {
            AmenityGroup::BedAndPillows => "Bed & Pillows",
            AmenityGroup::ToiletAndToiletries => "Toilet & Toiletries/Towel",
            AmenityGroup::Mirror => "Mirror",
            AmenityGroup::RoomClutter => "Room Clutter",
        }
    }

    /// Icon shown next to the group title by renderers.
    pub fn icon(&self) -> &'static str {
        match self {
            AmenityGroup::BedAndPillows => "\u{1F6CF}\u{FE0F}",
            AmenityGroup::ToiletAndToiletries => "\u{1F6BD}",
            AmenityGroup::Mirror => "\u{1FA9E}",
            AmenityGroup::RoomClutter => "\u{1F9F9}",
        }
    }
}

impl fmt::Display for AmenityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Per-key classification outcome produced by an `AmenityClassifier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityFinding {
    pub key: AmenityKey,
    pub status: AmenityStatus,
    /// The description line the key matched, verbatim. `None` when the key
    /// was never mentioned in any description.
    pub matched_line: Option<String>,
    /// Matched line, or the key's fixed fallback sentence when unseen.
    pub commentary: String,
    /// Remediation step for this key when it is unseen or missing.
    pub action: Option<String>,
}

/// One row of the rendered checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub group: AmenityGroup,
    pub visible: bool,
    pub missing: bool,
    pub commentary: String,
}

/// The structured output handed to the renderer: ordered group rows,
/// ordered remediation actions, and the insufficient-view flag.
///
/// Constructed fresh per analysis run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousekeepingReport {
    pub groups: Vec<GroupReport>,
    pub actions: Vec<String>,
    pub insufficient_view: bool,
    /// Single advisory sentence, set only when `insufficient_view` is true.
    pub advisory: Option<String>,
}

impl HousekeepingReport {
    /// Look up the row for a group, if the report carries one.
    pub fn group(&self, group: AmenityGroup) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.group == group)
    }

    /// The groups a renderer should actually show.
    pub fn visible_groups(&self) -> impl Iterator<Item = &GroupReport> {
        self.groups.iter().filter(|g| g.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_belongs_to_exactly_one_group() {
        let mut seen = Vec::new();
        for group in AmenityGroup::ALL {
            for key in group.keys() {
                assert_eq!(key.group(), group);
                assert!(!seen.contains(key), "{key} appears in two groups");
                seen.push(*key);
            }
        }
        assert_eq!(seen.len(), AmenityKey::ALL.len());
    }

    #[test]
    fn group_display_order_is_fixed() {
        assert_eq!(
            AmenityGroup::ALL,
            [
                AmenityGroup::BedAndPillows,
                AmenityGroup::ToiletAndToiletries,
                AmenityGroup::Mirror,
                AmenityGroup::RoomClutter,
            ]
        );
    }

    #[test]
    fn report_serde_round_trip() {
        let report = HousekeepingReport {
            groups: vec![GroupReport {
                group: AmenityGroup::Mirror,
                visible: true,
                missing: true,
                commentary: "The mirror is streaked.".to_string(),
            }],
            actions: vec!["Ensure a clean, visible mirror is present in the room.".to_string()],
            insufficient_view: false,
            advisory: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: HousekeepingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn status_resolution() {
        assert!(AmenityStatus::Present.is_resolved());
        assert!(AmenityStatus::Missing.is_resolved());
        assert!(!AmenityStatus::Unknown.is_resolved());
    }
}
