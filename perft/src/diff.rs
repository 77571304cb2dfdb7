use std::collections::BTreeMap;

use crate::{
    error::DiffError,
    observation::{Observation, Side},
};

/// A move present in both runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    pub label: String,
    pub baseline: u64,
    pub candidate: u64,
    pub equal: bool,
}

/// A move only one run produced. `side` is the run that has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Missing {
    pub side: Side,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffReport {
    pub(crate) baseline_len: usize,
    pub(crate) candidate_len: usize,
    rows: Vec<DiffRow>,
    missing: Vec<Missing>,
}

impl DiffReport {
    /// Rows for moves found in both runs, sorted by label.
    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }
    /// Moves found in only one run, sorted by label.
    pub fn missing(&self) -> &[Missing] {
        &self.missing
    }
    pub fn mismatches(&self) -> impl Iterator<Item = &DiffRow> {
        self.rows.iter().filter(|row| !row.equal)
    }
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.rows.iter().all(|row| row.equal)
    }
    /// Summed node counts of `(baseline, candidate)`, moves from one side included.
    pub fn totals(&self) -> (u128, u128) {
        let mut totals = self.rows.iter().fold((0u128, 0u128), |(b, c), row| {
            (b + row.baseline as u128, c + row.candidate as u128)
        });
        for missing in &self.missing {
            match missing.side {
                Side::Baseline => totals.0 += missing.count as u128,
                Side::Candidate => totals.1 += missing.count as u128,
            }
        }
        totals
    }
}

/// Compares two divide runs move by move.
///
/// Both inputs are checked for repeated labels before anything is compared.
/// Count mismatches and one-sided moves end up in the report, not in the
/// error.
pub fn diff(baseline: &[Observation], candidate: &[Observation]) -> Result<DiffReport, DiffError> {
    let baseline_counts = count_map(Side::Baseline, baseline)?;
    let candidate_counts = count_map(Side::Candidate, candidate)?;
    log::debug!(
        "comparing {} baseline moves against {} candidate moves",
        baseline_counts.len(),
        candidate_counts.len()
    );

    let mut rows = Vec::with_capacity(baseline_counts.len().min(candidate_counts.len()));
    let mut missing = Vec::new();

    // BTreeMap iterates in label order, so rows come out sorted.
    for (&label, &count) in &baseline_counts {
        match candidate_counts.get(label) {
            Some(&other) => {
                if count != other {
                    log::trace!("{label}: {count} != {other}");
                }
                rows.push(DiffRow {
                    label: label.to_owned(),
                    baseline: count,
                    candidate: other,
                    equal: count == other,
                })
            }
            None => missing.push(Missing {
                side: Side::Baseline,
                label: label.to_owned(),
                count,
            }),
        }
    }
    for (&label, &count) in &candidate_counts {
        if !baseline_counts.contains_key(label) {
            missing.push(Missing {
                side: Side::Candidate,
                label: label.to_owned(),
                count,
            });
        }
    }
    missing.sort_by(|a, b| a.label.cmp(&b.label));

    let report = DiffReport {
        baseline_len: baseline.len(),
        candidate_len: candidate.len(),
        rows,
        missing,
    };
    log::debug!(
        "{} mismatched, {} missing",
        report.mismatches().count(),
        report.missing.len()
    );
    Ok(report)
}

fn count_map(side: Side, observations: &[Observation]) -> Result<BTreeMap<&str, u64>, DiffError> {
    let mut counts = BTreeMap::new();
    for obs in observations {
        if counts.insert(obs.label.as_str(), obs.count).is_some() {
            return Err(DiffError::DuplicateMove {
                side,
                label: obs.label.clone(),
            });
        }
    }
    Ok(counts)
}
