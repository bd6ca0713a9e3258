//! Terminal output utilities: ANSI formatting, status notes, and the
//! housekeeping report renderer.
//!
//! This is the presentation layer: it consumes the structured report and
//! owns all styling; the reducer supplies only text and booleans.

use roomlens_core::HousekeepingReport;

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM").map(|t| t != "dumb").unwrap_or(false))
}

/// Strip ANSI escape codes from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm'
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Formatted notes
// ---------------------------------------------------------------------------

/// Print a formatted INFO note to stdout.
pub fn note_info(msg: &str) {
    if supports_color() {
        println!("{CYAN}{BOLD}ℹ{RESET} {msg}");
    } else {
        println!("INFO: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Print a formatted SUCCESS note.
pub fn note_success(msg: &str) {
    if supports_color() {
        println!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        println!("OK: {msg}");
    }
}

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

/// Render the housekeeping report as a terminal checklist plus action list.
pub fn render_report(report: &HousekeepingReport) -> String {
    let color = supports_color();
    let mut out = String::new();

    out.push_str(&heading("Overall Housekeeping Summary", color));

    if report.insufficient_view {
        if let Some(advisory) = &report.advisory {
            out.push_str(advisory);
            out.push('\n');
        }
        return out;
    }

    out.push_str(&heading("Inspection Checklist", color));
    for row in report.visible_groups() {
        let (mark, tone) = if row.missing {
            ("✗", RED)
        } else {
            ("✓", GREEN)
        };
        if color {
            out.push_str(&format!(
                "{tone}{mark}{RESET} {} {BOLD}{}{RESET}\n    {DIM}{}{RESET}\n",
                row.group.icon(),
                row.group.title(),
                row.commentary
            ));
        } else {
            out.push_str(&format!(
                "[{mark}] {}\n    {}\n",
                row.group.title(),
                row.commentary
            ));
        }
    }

    out.push_str(&heading("Action Required", color));
    for (i, action) in report.actions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, action));
    }

    out
}

fn heading(title: &str, color: bool) -> String {
    if color {
        format!("\n{BOLD}{YELLOW}{title}{RESET}\n")
    } else {
        format!("\n{title}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomlens_core::{AmenityGroup, GroupReport};

    fn sample_report() -> HousekeepingReport {
        HousekeepingReport {
            groups: vec![
                GroupReport {
                    group: AmenityGroup::BedAndPillows,
                    visible: true,
                    missing: false,
                    commentary: "The bed covers are smooth and pulled taut.".to_string(),
                },
                GroupReport {
                    group: AmenityGroup::Mirror,
                    visible: false,
                    missing: true,
                    commentary: "Mirror is not visible in this image, so its condition cannot be assessed.".to_string(),
                },
            ],
            actions: vec!["No immediate action required.".to_string()],
            insufficient_view: false,
            advisory: None,
        }
    }

    #[test]
    fn strips_ansi() {
        let colored = format!("{GREEN}hello{RESET}");
        assert_eq!(strip_ansi(&colored), "hello");
    }

    #[test]
    fn renders_only_visible_groups() {
        let rendered = strip_ansi(&render_report(&sample_report()));
        assert!(rendered.contains("Bed & Pillows"));
        assert!(!rendered.contains("Mirror is not visible"));
        assert!(rendered.contains("1. No immediate action required."));
    }

    #[test]
    fn renders_advisory_on_insufficient_view() {
        let report = HousekeepingReport {
            groups: vec![],
            actions: vec![],
            insufficient_view: true,
            advisory: Some("Unable to assess most amenities.".to_string()),
        };
        let rendered = strip_ansi(&render_report(&report));
        assert!(rendered.contains("Unable to assess most amenities."));
        assert!(!rendered.contains("Inspection Checklist"));
    }
}
