use util::codec::square_for_label;

use crate::{error::ParseError, observation::Observation};

/// Reads divide output into observations.
///
/// Entries are separated by newlines or commas and look like `e2e4: 20` or
/// `e2e4 20`. Blank entries and entries whose label is not a move (summary
/// and statistics lines such as `Total: 60` or `Captures: 12`) are skipped.
/// Input order is kept.
pub fn parse_observations(text: &str) -> Result<Vec<Observation>, ParseError> {
    let mut observations = Vec::new();
    for entry in text.split(['\n', ',']).map(str::trim) {
        if entry.is_empty() {
            continue;
        }
        match parse_observation(entry) {
            Ok(obs) => observations.push(obs),
            Err(ParseError::NotAMove(_)) => log::debug!("skipping '{entry}'"),
            Err(err) => return Err(err),
        }
    }
    Ok(observations)
}

pub fn parse_observation(entry: &str) -> Result<Observation, ParseError> {
    let (label, count) = entry
        .split_once(':')
        .or_else(|| entry.split_once(char::is_whitespace))
        .unwrap_or((entry, ""));

    let label = label.trim();
    if label.is_empty() {
        return Err(ParseError::MissingLabel(entry.to_owned()));
    }
    if !is_move_label(label) {
        return Err(ParseError::NotAMove(entry.to_owned()));
    }
    let count = count.trim();
    if count.is_empty() {
        return Err(ParseError::MissingCount(entry.to_owned()));
    }
    let count = count.parse::<u64>().map_err(|source| ParseError::BadCount {
        entry: entry.to_owned(),
        source,
    })?;

    Ok(Observation::new(label, count))
}

/// Origin and target square, optionally followed by a promotion piece.
fn is_move_label(label: &str) -> bool {
    let is_square = |part: Option<&str>| part.is_some_and(|sq| square_for_label(sq).is_ok());

    matches!(label.get(4..), Some("" | "q" | "r" | "b" | "n"))
        && is_square(label.get(0..2))
        && is_square(label.get(2..4))
}
