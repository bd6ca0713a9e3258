//! Report reducer: ordered description batch in, `HousekeepingReport` out.
//!
//! The reducer is total over any input, holds no state across calls, and
//! performs no I/O. Classification is delegated to an
//! [`AmenityClassifier`]; everything here is group synthesis.

use roomlens_core::{
    AmenityClassifier, AmenityFinding, AmenityGroup, AmenityStatus, GroupReport,
    HousekeepingReport,
};

use crate::classify::{contains_any, KeywordClassifier};
use crate::vocab;

/// Deterministic reducer from description batches to structured reports.
pub struct ReportReducer {
    classifier: Box<dyn AmenityClassifier>,
}

impl ReportReducer {
    /// Reducer with the stock keyword classifier.
    pub fn new() -> Self {
        Self::with_classifier(Box::new(KeywordClassifier::new()))
    }

    /// Reducer with a caller-supplied classification strategy.
    pub fn with_classifier(classifier: Box<dyn AmenityClassifier>) -> Self {
        Self { classifier }
    }

    /// Reduce an ordered batch of descriptions into a report.
    ///
    /// Order matters only as the tie-break for first-match-wins: lines are
    /// scanned in description order, then line order within a description.
    pub fn reduce(&self, descriptions: &[String]) -> HousekeepingReport {
        let lines: Vec<&str> = descriptions
            .iter()
            .flat_map(|d| d.lines())
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        if lines.is_empty() {
            return Self::insufficient_report();
        }

        let findings = self.classifier.classify(&lines);

        let groups: Vec<GroupReport> = AmenityGroup::ALL
            .iter()
            .map(|&group| synthesize_group(group, &findings))
            .collect();

        if groups.iter().all(|g| !g.visible) {
            return Self::insufficient_report();
        }

        let mut actions: Vec<String> = groups
            .iter()
            .filter(|g| g.visible && g.missing)
            .map(|g| vocab::remediation(g.group).to_string())
            .collect();
        if actions.is_empty() {
            actions.push(vocab::NO_ACTION_REQUIRED.to_string());
        }

        HousekeepingReport {
            groups,
            actions,
            insufficient_view: false,
            advisory: None,
        }
    }

    fn insufficient_report() -> HousekeepingReport {
        HousekeepingReport {
            groups: Vec::new(),
            actions: Vec::new(),
            insufficient_view: true,
            advisory: Some(vocab::INSUFFICIENT_VIEW_ADVISORY.to_string()),
        }
    }
}

impl Default for ReportReducer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce with the default keyword classifier.
pub fn reduce(descriptions: &[String]) -> HousekeepingReport {
    ReportReducer::new().reduce(descriptions)
}

fn synthesize_group(group: AmenityGroup, findings: &[AmenityFinding]) -> GroupReport {
    let group_findings: Vec<&AmenityFinding> = group
        .keys()
        .iter()
        .filter_map(|key| findings.iter().find(|f| f.key == *key))
        .collect();

    let visible = group_findings
        .iter()
        .any(|f| f.status.is_resolved() || f.matched_line.is_some());

    if !visible {
        // Nothing in the batch mentioned this group at all.
        return GroupReport {
            group,
            visible: false,
            missing: true,
            commentary: vocab::not_visible_commentary(group),
        };
    }

    let missing = group_findings
        .iter()
        .any(|f| f.status == AmenityStatus::Missing);

    let commentary = group_findings
        .iter()
        .filter_map(|f| f.matched_line.as_deref())
        .find(|line| !contains_any(&line.to_lowercase(), vocab::exclusions(group)))
        .map(str::to_string)
        .unwrap_or_else(|| vocab::group_fallback(group, missing).to_string());

    GroupReport {
        group,
        visible: true,
        missing,
        commentary,
    }
}
