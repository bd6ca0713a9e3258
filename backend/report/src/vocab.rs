//! Static vocabulary tables for the keyword classifier and report
//! synthesis.
//!
//! These lists are the compatibility contract with the legacy analyzer:
//! they are data, reproduced verbatim, not derived. Matching is
//! case-insensitive substring containment throughout.

use roomlens_core::{AmenityGroup, AmenityKey};

/// Keywords that make a description line a candidate for a key.
pub fn keywords(key: AmenityKey) -> &'static [&'static str] {
    match key {
        AmenityKey::BedMade => &["bed made", "bed covers", "bed sheet", "bed is made", "unmade"],
        AmenityKey::PillowsArranged => &["pillow", "pillows"],
        AmenityKey::ExtraBeddingPresent => &["extra pillow", "blanket"],
        AmenityKey::ToiletCleanliness => &["toilet"],
        AmenityKey::ToiletLidClosed => &["flush lid", "toilet lid", "flush cover"],
        AmenityKey::ToiletriesAndTowelPresent => &["toiletries", "towel", "soap"],
        AmenityKey::MirrorPresent => &["mirror"],
        AmenityKey::MirrorCleanliness => &["mirror"],
        AmenityKey::NoClutter => &["clutter", "bags", "clothing"],
    }
}

/// Phrases that flip a matched line to Missing for every key except
/// `NoClutter` (which has its own polarity tables below).
pub const NEGATIVE_INDICATORS: &[&str] = &[
    "not present",
    "missing",
    "not shown",
    "not visible",
    "not clean",
    "dirty",
    "not plump",
    "not arranged",
    "wrinkle",
    "not pulled taut",
    "out of place",
    "open",
];

/// Key-specific "no <primary-keyword>" negation phrase.
pub fn negated_phrase(key: AmenityKey) -> &'static str {
    match key {
        AmenityKey::BedMade => "no bed",
        AmenityKey::PillowsArranged => "no pillow",
        AmenityKey::ExtraBeddingPresent => "no extra",
        AmenityKey::ToiletCleanliness => "no toilet",
        AmenityKey::ToiletLidClosed => "no flush",
        AmenityKey::ToiletriesAndTowelPresent => "no toiletries",
        AmenityKey::MirrorPresent => "no mirror",
        AmenityKey::MirrorCleanliness => "no mirror",
        AmenityKey::NoClutter => "no clutter",
    }
}

/// Evidence that clutter actually exists in a matched clutter line.
pub const CLUTTER_POSITIVE: &[&str] = &[
    "clutter",
    "bags",
    "clothing",
    "personal items",
    "visible clutter",
    "scattered around",
    "mess",
    "untidy",
];

/// Tidy phrasing that overrides clutter evidence in the same line.
pub const CLUTTER_TIDY: &[&str] = &[
    "no clutter",
    "tidy",
    "free of clutter",
    "no bags",
    "no clothing",
    "no personal items",
    "room is tidy",
];

/// Vocabulary belonging to *other* groups; a commentary candidate
/// containing any of these is rejected to avoid cross-contamination.
pub fn exclusions(group: AmenityGroup) -> &'static [&'static str] {
    match group {
        AmenityGroup::BedAndPillows => {
            &["toilet", "bathroom", "towel", "toiletries", "mirror", "clutter"]
        }
        AmenityGroup::ToiletAndToiletries => &["bed", "pillow", "mirror", "clutter", "headboard"],
        AmenityGroup::Mirror => {
            &["bed", "pillow", "toilet", "bathroom", "towel", "toiletries", "clutter"]
        }
        AmenityGroup::RoomClutter => {
            &["bed", "pillow", "toilet", "bathroom", "towel", "toiletries", "mirror"]
        }
    }
}

/// Fixed per-key commentary substituted when a key is never mentioned.
pub fn fallback_commentary(key: AmenityKey) -> &'static str {
    match key {
        AmenityKey::BedMade => "The bed covers are wrinkled and not pulled taut.",
        AmenityKey::PillowsArranged => {
            "Pillows are not plumped or neatly arranged; one is visibly out of place."
        }
        AmenityKey::ExtraBeddingPresent => {
            "No extra pillow or blanket is visibly available in the room."
        }
        AmenityKey::ToiletCleanliness => {
            "Toilet appears dirty or unclean, or cleanliness could not be determined from the images."
        }
        AmenityKey::ToiletLidClosed => "The toilet flush lid is open or not closed.",
        AmenityKey::ToiletriesAndTowelPresent => {
            "Some or all standard toiletries and towels are missing or not arranged."
        }
        AmenityKey::MirrorPresent => "Mirror not present or not visible in the images.",
        AmenityKey::MirrorCleanliness => "The mirror appears dirty, streaked, or not clean.",
        AmenityKey::NoClutter => TIDY_ROOM_COMMENTARY,
    }
}

/// Fixed per-key remediation step, used when a key is unseen or resolves
/// Missing.
pub fn fallback_action(key: AmenityKey) -> &'static str {
    match key {
        AmenityKey::BedMade => {
            "Smooth out wrinkles on the bed covers and ensure they are pulled taut."
        }
        AmenityKey::PillowsArranged => "Plump and neatly arrange all pillows on the bed.",
        AmenityKey::ExtraBeddingPresent => {
            "Ensure an extra pillow and blanket are placed in the wardrobe or visibly available."
        }
        AmenityKey::ToiletCleanliness => "Clean the toilet and ensure it is spotless.",
        AmenityKey::ToiletLidClosed => "Close the toilet flush lid as required.",
        AmenityKey::ToiletriesAndTowelPresent => {
            "Arrange all standard toiletries and towels neatly in the bathroom."
        }
        AmenityKey::MirrorPresent => "Ensure a mirror is present and visible in the room.",
        AmenityKey::MirrorCleanliness => "Clean the mirror until it is spotless and streak-free.",
        AmenityKey::NoClutter => "Remove any visible clutter or misplaced items from the room.",
    }
}

/// Default commentary when nothing in the batch mentioned clutter.
pub const TIDY_ROOM_COMMENTARY: &str =
    "Room is tidy and free of visible clutter, with no bags, clothing, or personal items left behind.";

/// Group-level commentary used when no matched line survives exclusion
/// filtering but at least one of the group's keys was resolved.
pub fn group_fallback(group: AmenityGroup, missing: bool) -> &'static str {
    match (group, missing) {
        (AmenityGroup::BedAndPillows, false) => {
            "The bed is neatly made with smooth covers, all pillows are plumped and arranged, and an extra pillow/blanket is available as required."
        }
        (AmenityGroup::BedAndPillows, true) => {
            "Bed covers are wrinkled or not pulled taut, pillows are not plumped or arranged, or extra pillow/blanket is missing. Smooth covers, arrange pillows, and ensure extra bedding is available."
        }
        (AmenityGroup::ToiletAndToiletries, false) => {
            "Toilet and bathroom are clean, flush lid is closed, and all standard toiletries and towels are present and neatly arranged."
        }
        (AmenityGroup::ToiletAndToiletries, true) => {
            "Toilet or bathroom is not clean, flush lid is open, or toiletries/towels are missing. Clean thoroughly, close lid, and restock amenities."
        }
        (AmenityGroup::Mirror, false) => {
            "Mirror is present and spotless, with no visible streaks or marks, providing a clear reflection for guests."
        }
        (AmenityGroup::Mirror, true) => {
            "Mirror is missing or dirty. Ensure a mirror is present and clean it thoroughly for a streak-free finish."
        }
        (AmenityGroup::RoomClutter, false) => TIDY_ROOM_COMMENTARY,
        (AmenityGroup::RoomClutter, true) => {
            "Room has visible clutter such as bags, clothing, or personal items. Remove all clutter and tidy the room for the next guest."
        }
    }
}

/// One remediation sentence per group for the Action Required list.
pub fn remediation(group: AmenityGroup) -> &'static str {
    match group {
        AmenityGroup::BedAndPillows => {
            "Smooth out wrinkles, make the bed, and arrange all pillows neatly. Ensure extra pillow/blanket is available."
        }
        AmenityGroup::ToiletAndToiletries => {
            "Clean the toilet, close the flush lid, and ensure all toiletries and towels are present and arranged."
        }
        AmenityGroup::Mirror => "Ensure a clean, visible mirror is present in the room.",
        AmenityGroup::RoomClutter => "Remove any visible clutter or misplaced items from the room.",
    }
}

/// Commentary for a group none of whose keys were mentioned anywhere.
pub fn not_visible_commentary(group: AmenityGroup) -> String {
    format!(
        "{} is not visible in this image, so its condition cannot be assessed.",
        group.title()
    )
}

/// Action list entry when no visible group needs work.
pub const NO_ACTION_REQUIRED: &str = "No immediate action required.";

/// Advisory carried by an insufficient-view report.
pub const INSUFFICIENT_VIEW_ADVISORY: &str =
    "Unable to assess most amenities due to limited or incomplete room view. Please ensure all key areas (bathroom, toilet, mirror, bed, etc.) are visible in the images or video for a complete inspection.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_keywords_and_fallbacks() {
        for key in AmenityKey::ALL {
            assert!(!keywords(key).is_empty());
            assert!(!fallback_commentary(key).is_empty());
            assert!(!fallback_action(key).is_empty());
        }
    }

    #[test]
    fn exclusions_never_contain_own_vocabulary() {
        for group in AmenityGroup::ALL {
            for key in group.keys() {
                for kw in keywords(*key) {
                    for excl in exclusions(group) {
                        assert!(
                            !kw.contains(excl),
                            "{group}: keyword {kw:?} would be rejected by own exclusion {excl:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn tidy_vocabulary_overlaps_clutter_vocabulary() {
        // Tidy lines like "free of clutter" also trip the positive list;
        // the tidy override must win in that case.
        assert!(CLUTTER_TIDY.iter().any(|t| t.contains("clutter")));
        assert!(CLUTTER_POSITIVE.contains(&"clutter"));
    }
}
