//! Inspection prompt construction for the vision model.
//!
//! The prompt asks for one qualitative one-liner per amenity topic, so the
//! downstream reducer can scan the answer line by line. Topics can be
//! restricted when the caller already knows which groups a frame shows.

use roomlens_core::AmenityGroup;

fn topic_instruction(group: AmenityGroup) -> &'static str {
    match group {
        AmenityGroup::BedAndPillows => {
            "1. Bed & Pillows: Provide a single, detailed, actionable, and qualitative one-liner summary (15-25 words) describing the current state, issues, and what is correct or missing, in plain English."
        }
        AmenityGroup::ToiletAndToiletries => {
            "2. Toilet & Toiletries/Towel: Provide a single, detailed, actionable, and qualitative one-liner summary (15-25 words) describing the current state, issues, and what is correct or missing, in plain English."
        }
        AmenityGroup::Mirror => {
            "3. Mirror: Provide a single, detailed, actionable, and qualitative one-liner summary (15-25 words) describing the current state, issues, and what is correct or missing, in plain English."
        }
        AmenityGroup::RoomClutter => {
            "4. Room Clutter: Provide a single, detailed, actionable, and qualitative one-liner summary (15-25 words) describing the current state, issues, and what is correct or missing, in plain English."
        }
    }
}

/// Build the inspector prompt for a subset of amenity topics.
pub fn inspection_prompt(groups: &[AmenityGroup]) -> String {
    let mut prompt = String::from(
        "You are an expert hotel inspector. Given the following room image or video, analyze the state of the room and amenities.\n",
    );
    let sections: Vec<&str> = groups.iter().map(|g| topic_instruction(*g)).collect();
    prompt.push_str(&sections.join("\n"));
    prompt.push_str(
        "\nOnly mention items visible in the image/video. Do not mention or speculate about groups that are not visible.",
    );
    prompt
}

/// The default prompt covering all four amenity topics.
pub fn full_inspection_prompt() -> String {
    inspection_prompt(&AmenityGroup::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_prompt_covers_all_topics() {
        let prompt = full_inspection_prompt();
        assert!(prompt.contains("Bed & Pillows"));
        assert!(prompt.contains("Toilet & Toiletries/Towel"));
        assert!(prompt.contains("Mirror"));
        assert!(prompt.contains("Room Clutter"));
        assert!(prompt.contains("Only mention items visible"));
    }

    #[test]
    fn subset_prompt_omits_other_topics() {
        let prompt = inspection_prompt(&[AmenityGroup::Mirror]);
        assert!(prompt.contains("Mirror"));
        assert!(!prompt.contains("Bed & Pillows"));
    }
}
