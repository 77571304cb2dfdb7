use std::fmt::Display;

use crate::{diff::DiffReport, observation::Side};

const NOT_EQUAL: &str = "NOT EQUAL";

/// One line per move in label order: `label: baseline | candidate`, with
/// `NOT EQUAL` appended to mismatches and `-` standing in for the count of a
/// run that never produced the move.
impl Display for DiffReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}, {}",
            moves(self.baseline_len, "baseline"),
            moves(self.candidate_len, "candidate")
        )?;

        let mut lines: Vec<(&str, String)> = self
            .rows()
            .iter()
            .map(|row| {
                let marker = if row.equal { "" } else { NOT_EQUAL };
                (
                    row.label.as_str(),
                    format!("{}: {} | {} {}", row.label, row.baseline, row.candidate, marker),
                )
            })
            .collect();
        lines.extend(self.missing().iter().map(|missing| {
            let (baseline, candidate) = match missing.side {
                Side::Baseline => (missing.count.to_string(), "-".to_owned()),
                Side::Candidate => ("-".to_owned(), missing.count.to_string()),
            };
            (
                missing.label.as_str(),
                format!(
                    "{}: {} | {} MISSING IN {}",
                    missing.label,
                    baseline,
                    candidate,
                    missing.side.other().to_string().to_uppercase()
                ),
            )
        }));
        lines.sort_by(|a, b| a.0.cmp(b.0));

        for (_, line) in lines {
            writeln!(f, "{}", line.trim_end())?;
        }

        let (baseline_total, candidate_total) = self.totals();
        writeln!(f, "Total: {} | {}", baseline_total, candidate_total)?;
        if self.is_clean() {
            write!(f, "clean")
        } else {
            write!(
                f,
                "{} mismatched, {} missing",
                self.mismatches().count(),
                self.missing().len()
            )
        }
    }
}

fn moves(n: usize, side: &str) -> String {
    match n {
        1 => format!("1 {side} move"),
        n => format!("{n} {side} moves"),
    }
}
