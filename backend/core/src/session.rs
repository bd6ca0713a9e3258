use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::HousekeepingReport;

/// Caller-owned state for one analysis run: the description batch being
/// collected and, once reduced, the resulting report.
///
/// The reducer itself never sees this type; it stays stateless across
/// runs.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    descriptions: Vec<String>,
    report: Option<HousekeepingReport>,
}

impl AnalysisSession {
    /// Begin a fresh session with no collected descriptions.
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            descriptions: Vec::new(),
            report: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append one frame's description, preserving submission order.
    pub fn push_description(&mut self, description: impl Into<String>) {
        self.descriptions.push(description.into());
    }

    /// The collected descriptions in submission order.
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// Record the report produced for the current batch.
    pub fn finish(&mut self, report: HousekeepingReport) {
        self.report = Some(report);
    }

    pub fn report(&self) -> Option<&HousekeepingReport> {
        self.report.as_ref()
    }

    /// Discard the collected batch and any report, keeping the session id.
    pub fn reset(&mut self) {
        self.descriptions.clear();
        self.report = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_descriptions_in_order() {
        let mut session = AnalysisSession::start();
        session.push_description("first frame");
        session.push_description("second frame");
        assert_eq!(session.descriptions(), ["first frame", "second frame"]);
    }

    #[test]
    fn reset_clears_batch_and_report() {
        let mut session = AnalysisSession::start();
        let id = session.id();
        session.push_description("a line");
        session.finish(HousekeepingReport {
            groups: vec![],
            actions: vec![],
            insufficient_view: true,
            advisory: None,
        });
        session.reset();
        assert!(session.descriptions().is_empty());
        assert!(session.report().is_none());
        assert_eq!(session.id(), id);
    }
}
