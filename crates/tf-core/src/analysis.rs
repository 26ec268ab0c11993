//! Distribution analysis
//!
//! Flags tips that look "unlucky" to a human player:
//!
//! - **Parity skew**: every number odd, or every number even
//! - **Consecutive run**: three or more consecutive numbers (e.g. 7, 8, 9)
//!
//! Checks are per tip. The report is observational only; tips are never
//! rejected or regenerated because of it.

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::tip::{Tip, tip_label};

/// Shortest run of consecutive numbers that is reported
pub const MIN_CONSECUTIVE_RUN: usize = 3;

/// Pattern found in a single tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Every number is odd
    OnlyOdd,
    /// Every number is even
    OnlyEven,
    /// `length` consecutive numbers starting at `start`
    ConsecutiveRun { start: u8, length: usize },
}

impl Issue {
    pub fn is_parity(&self) -> bool {
        matches!(self, Issue::OnlyOdd | Issue::OnlyEven)
    }

    pub fn is_consecutive(&self) -> bool {
        matches!(self, Issue::ConsecutiveRun { .. })
    }
}

/// An issue tied to the tip it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// 0-based position in the batch
    pub tip_index: usize,
    pub issue: Issue,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = tip_label(self.tip_index);
        match self.issue {
            Issue::OnlyOdd => write!(f, "Warning: {} has only odd numbers.", label),
            Issue::OnlyEven => write!(f, "Warning: {} has only even numbers.", label),
            Issue::ConsecutiveRun { start, length } => {
                let run: Vec<String> = (0..length).map(|i| (start as usize + i).to_string()).collect();
                write!(
                    f,
                    "Warning: {} has {} consecutive numbers ({}).",
                    label,
                    length,
                    run.join(", ")
                )
            }
        }
    }
}

/// Outcome of analysing one batch
#[derive(Debug, Clone, Default, Serialize)]
pub struct DistributionReport {
    tips_checked: usize,
    findings: Vec<Finding>,
}

impl DistributionReport {
    /// Findings in batch order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// At least one tip is all odd or all even
    pub fn has_parity_skew(&self) -> bool {
        self.findings.iter().any(|f| f.issue.is_parity())
    }

    /// At least one tip contains a run of three or more
    pub fn has_consecutive_run(&self) -> bool {
        self.findings.iter().any(|f| f.issue.is_consecutive())
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Summary line for the parity check
    pub fn parity_summary(&self) -> String {
        let count = self.findings.iter().filter(|f| f.issue.is_parity()).count();
        if count == 0 {
            "No problem regarding distribution of odd / even numbers.".to_string()
        } else {
            format!(
                "Problem: {} of {} tips have only odd or only even numbers.",
                count, self.tips_checked
            )
        }
    }

    /// Summary line for the consecutive-run check
    pub fn consecutive_summary(&self) -> String {
        let count = self
            .findings
            .iter()
            .filter(|f| f.issue.is_consecutive())
            .count();
        if count == 0 {
            format!(
                "No tip has {} or more consecutive numbers. Great!",
                MIN_CONSECUTIVE_RUN
            )
        } else {
            format!(
                "Problem: {} of {} tips have {} or more consecutive numbers.",
                count, self.tips_checked, MIN_CONSECUTIVE_RUN
            )
        }
    }

    /// Human-readable output: one line per finding, then both summaries
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.findings.iter().map(|f| f.to_string()).collect();
        lines.push(self.parity_summary());
        lines.push(self.consecutive_summary());
        lines
    }
}

/// Run both checks over every tip
pub fn analyze_distribution(tips: &[Tip]) -> DistributionReport {
    let mut findings = Vec::new();

    for (tip_index, tip) in tips.iter().enumerate() {
        if let Some(issue) = parity_issue(tip.numbers()) {
            findings.push(Finding { tip_index, issue });
        }
        if let Some(issue) = consecutive_run(tip.numbers()) {
            findings.push(Finding { tip_index, issue });
        }
    }

    for finding in &findings {
        warn!("{}", finding);
    }

    DistributionReport {
        tips_checked: tips.len(),
        findings,
    }
}

/// Parity check for one ascending tip
pub fn parity_issue(numbers: &[u8]) -> Option<Issue> {
    if numbers.is_empty() {
        return None;
    }
    if numbers.iter().all(|n| n % 2 == 1) {
        Some(Issue::OnlyOdd)
    } else if numbers.iter().all(|n| n % 2 == 0) {
        Some(Issue::OnlyEven)
    } else {
        None
    }
}

/// First run of at least [`MIN_CONSECUTIVE_RUN`] consecutive numbers
pub fn consecutive_run(numbers: &[u8]) -> Option<Issue> {
    let mut start = 0;
    let mut length = 1;

    for i in 1..numbers.len() {
        if numbers[i] == numbers[i - 1].wrapping_add(1) {
            length += 1;
        } else {
            start = i;
            length = 1;
        }

        if length >= MIN_CONSECUTIVE_RUN {
            let extra = numbers[i..]
                .windows(2)
                .take_while(|w| w[1] == w[0].wrapping_add(1))
                .count();
            return Some(Issue::ConsecutiveRun {
                start: numbers[start],
                length: length + extra,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    fn swiss(numbers: [u8; 6]) -> Tip {
        Tip::new(Variant::Swisslos, numbers.to_vec()).unwrap()
    }

    #[test]
    fn test_parity() {
        assert_eq!(parity_issue(&[1, 3, 5, 7, 9, 41]), Some(Issue::OnlyOdd));
        assert_eq!(parity_issue(&[2, 4, 10, 20, 30, 42]), Some(Issue::OnlyEven));
        assert_eq!(parity_issue(&[1, 2, 10, 20, 30, 42]), None);
    }

    #[test]
    fn test_consecutive_run() {
        assert_eq!(
            consecutive_run(&[3, 7, 8, 9, 20, 30]),
            Some(Issue::ConsecutiveRun { start: 7, length: 3 })
        );
        assert_eq!(
            consecutive_run(&[1, 2, 3, 4, 5, 40]),
            Some(Issue::ConsecutiveRun { start: 1, length: 5 })
        );
        assert_eq!(consecutive_run(&[1, 2, 4, 5, 7, 8]), None);
        assert_eq!(consecutive_run(&[10, 20]), None);
        assert_eq!(consecutive_run(&[]), None);
    }

    #[test]
    fn test_run_resets_between_pairs() {
        // two pairs separated by a gap never add up to a run of three
        assert_eq!(consecutive_run(&[5, 6, 8, 9, 11]), None);
        assert_eq!(
            consecutive_run(&[5, 6, 8, 9, 10]),
            Some(Issue::ConsecutiveRun { start: 8, length: 3 })
        );
    }

    #[test]
    fn test_report_flags_per_tip() {
        let tips = vec![
            swiss([1, 3, 5, 7, 9, 11]),
            swiss([2, 13, 14, 15, 30, 41]),
            swiss([1, 2, 10, 20, 33, 41]),
        ];
        let report = analyze_distribution(&tips);

        assert!(report.has_parity_skew());
        assert!(report.has_consecutive_run());
        assert_eq!(report.findings().len(), 2);
        assert_eq!(report.findings()[0].tip_index, 0);
        assert_eq!(report.findings()[1].tip_index, 1);

        let lines = report.lines();
        assert_eq!(lines[0], "Warning: Tip 1 has only odd numbers.");
        assert_eq!(lines[1], "Warning: Tip 2 has 3 consecutive numbers (13, 14, 15).");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_mixed_batch_is_not_pooled() {
        // all-odd tip next to all-even tip: pooled numbers are mixed, but each tip is skewed
        let tips = vec![swiss([1, 3, 5, 11, 21, 41]), swiss([2, 4, 6, 12, 22, 42])];
        let report = analyze_distribution(&tips);
        assert_eq!(report.findings().len(), 2);
        assert!(report.has_parity_skew());
        assert!(!report.has_consecutive_run());
    }

    #[test]
    fn test_clean_report() {
        let tips = vec![swiss([1, 2, 10, 21, 33, 40])];
        let report = analyze_distribution(&tips);

        assert!(report.is_clean());
        assert_eq!(
            report.lines(),
            vec![
                "No problem regarding distribution of odd / even numbers.".to_string(),
                "No tip has 3 or more consecutive numbers. Great!".to_string(),
            ]
        );
    }
}
