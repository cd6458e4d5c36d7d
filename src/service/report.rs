//! Text report for a generation run.

use std::fmt::Write;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::domain::{NumberPlan, ValidationReport};

const RULE_WIDTH: usize = 70;
const HEAD_SAMPLES: usize = 5;
const TAIL_SAMPLES: usize = 3;
/// Datasets larger than this also show their last entries.
const TAIL_THRESHOLD: usize = 10;

/// Everything the text report renders.
#[derive(Debug, Clone)]
pub struct GenerationReport<'a> {
    /// Shape of the generated numbers.
    pub plan: &'a NumberPlan,
    /// Generated numbers, in output order.
    pub numbers: &'a [String],
    /// Validation outcome for `numbers`.
    pub validation: &'a ValidationReport,
    /// Time spent sampling.
    pub elapsed: Duration,
    /// When the run happened.
    pub generated_at: DateTime<Local>,
}

impl GenerationReport<'_> {
    /// Render the report as multi-line text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let v = self.validation;

        writeln!(out, "{rule}")?;
        writeln!(out, "MOBILE NUMBERS - GENERATION REPORT")?;
        writeln!(out, "{rule}")?;
        writeln!(
            out,
            "Generated on: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(out, "Generator: mobilegen v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out)?;

        writeln!(out, "DATASET SPECIFICATIONS:")?;
        writeln!(out, "├── Prefix: {}", self.plan.prefix())?;
        writeln!(out, "├── Total digits: {}", self.plan.total_length())?;
        writeln!(out, "├── Format: {}", self.plan.pattern())?;
        writeln!(out, "└── Target count: {}", group_thousands(self.numbers.len() as u64))?;
        writeln!(out)?;

        writeln!(out, "PERFORMANCE METRICS:")?;
        writeln!(
            out,
            "├── Generation time: {:.4} seconds",
            self.elapsed.as_secs_f64()
        )?;
        writeln!(out, "├── Speed: {}", self.speed())?;
        writeln!(out, "└── Algorithm: Sampling without replacement")?;
        writeln!(out)?;

        writeln!(out, "VALIDATION RESULTS:")?;
        writeln!(out, "├── Total numbers: {}", group_thousands(v.total_count as u64))?;
        writeln!(out, "├── Unique numbers: {}", group_thousands(v.unique_count as u64))?;
        writeln!(out, "├── Correct prefix: {}", group_thousands(v.correct_prefix as u64))?;
        writeln!(out, "├── Correct length: {}", group_thousands(v.correct_length as u64))?;
        writeln!(out, "├── All numeric: {}", group_thousands(v.all_numeric as u64))?;
        writeln!(
            out,
            "└── Validation status: {}",
            if v.passed { "PASSED" } else { "FAILED" }
        )?;

        if !v.issues.is_empty() {
            writeln!(out)?;
            writeln!(out, "ISSUES FOUND:")?;
            for issue in &v.issues {
                writeln!(out, "├── {issue}")?;
            }
        }
        writeln!(out)?;

        writeln!(out, "SAMPLE DATA:")?;
        for (i, number) in self.numbers.iter().take(HEAD_SAMPLES).enumerate() {
            writeln!(out, "├── {:>2}. {number}", i + 1)?;
        }
        if self.numbers.len() > TAIL_THRESHOLD {
            writeln!(out, "├── ...")?;
            let start = self.numbers.len() - TAIL_SAMPLES;
            for (i, number) in self.numbers.iter().enumerate().skip(start) {
                writeln!(out, "├── {:>4}. {number}", i + 1)?;
            }
        }

        write!(out, "{rule}")
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn speed(&self) -> String {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return "n/a".to_string();
        }
        let rate = (self.numbers.len() as f64 / secs).round() as u64;
        format!("{} numbers/second", group_thousands(rate))
    }
}

/// Format `n` with comma thousands separators.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
