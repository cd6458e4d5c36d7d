//! Dataset validation.
//!
//! Read-only structural checks over a generated dataset.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::domain::{NumberPlan, ValidationReport};

/// Check cardinality, prefix, length and digit content of `numbers`.
#[must_use]
pub fn validate(numbers: &[String], plan: &NumberPlan) -> ValidationReport {
    let total_count = numbers.len();
    let unique_count = numbers.iter().map(String::as_str).collect::<HashSet<_>>().len();
    let duplicates_found = total_count - unique_count;

    let expected_length = plan.total_length() as usize;
    let correct_prefix = numbers
        .iter()
        .filter(|n| n.starts_with(plan.prefix()))
        .count();
    let correct_length = numbers
        .iter()
        .filter(|n| n.chars().count() == expected_length)
        .count();
    let all_numeric = numbers.iter().filter(|n| is_numeric(n)).count();

    let mut issues = Vec::new();
    if duplicates_found > 0 {
        issues.push(format!("Found {duplicates_found} duplicate(s)"));
    }
    if correct_prefix != total_count {
        issues.push(format!(
            "Incorrect prefix in {} number(s)",
            total_count - correct_prefix
        ));
    }
    if correct_length != total_count {
        issues.push(format!(
            "Incorrect length in {} number(s)",
            total_count - correct_length
        ));
    }
    if all_numeric != total_count {
        issues.push(format!(
            "Non-numeric characters in {} number(s)",
            total_count - all_numeric
        ));
    }

    let passed = issues.is_empty();
    if passed {
        info!(total_count, "Dataset validation passed");
    } else {
        warn!(total_count, issues = issues.len(), "Dataset validation found issues");
    }

    ValidationReport {
        total_count,
        unique_count,
        duplicates_found,
        correct_prefix,
        correct_length,
        all_numeric,
        passed,
        issues,
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> NumberPlan {
        NumberPlan::new("019", 11).unwrap()
    }

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_clean_dataset_passes() {
        let numbers = owned(&["01900000001", "01912345678", "01999999999"]);
        let report = validate(&numbers, &plan());

        assert_eq!(report.total_count, 3);
        assert_eq!(report.unique_count, 3);
        assert_eq!(report.duplicates_found, 0);
        assert_eq!(report.correct_prefix, 3);
        assert_eq!(report.correct_length, 3);
        assert_eq!(report.all_numeric, 3);
        assert!(report.passed);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_issues_are_itemized() {
        let numbers = owned(&[
            "01900000001",
            "01900000001",
            "01700000001",
            "0190000001",
            "0190000000X",
        ]);
        let report = validate(&numbers, &plan());

        assert!(!report.passed);
        assert_eq!(report.duplicates_found, 1);
        assert_eq!(
            report.issues,
            vec![
                "Found 1 duplicate(s)",
                "Incorrect prefix in 1 number(s)",
                "Incorrect length in 1 number(s)",
                "Non-numeric characters in 1 number(s)",
            ]
        );
    }

    #[test]
    fn test_empty_dataset_passes() {
        let report = validate(&[], &plan());
        assert!(report.passed);
        assert_eq!(report.total_count, 0);
    }

    #[test]
    fn test_input_untouched() {
        let numbers = owned(&["01999999999", "01900000000"]);
        let before = numbers.clone();
        let _ = validate(&numbers, &plan());
        assert_eq!(numbers, before);
    }
}
