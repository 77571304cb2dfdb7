use perft::{
    diff::diff,
    observation::{Observation, Side},
    parse::parse_observations,
};
use util::codec::square_for_label;

// Divide output of the same position from two builds of the generator.
const BASELINE: &str = "\
b4b3: 4622747
c7c6: 4228757
e8f8: 3945744
e8f7: 3283126
h8h4: 4232005
h8g8: 3304883
e7f7: 3290690
e7d8: 3627718
e8g8: 3861082
Total: 34396752
";

const CANDIDATE: &str = "\
c7c6: 4228830
b4b3: 4622822
e8f8: 3945744
e8f7: 3283126
h8g8: 3304883
h8h4: 4232005
e7f7: 3290690
e7d8: 3627788
e8g8: 3861082
";

#[test]
fn finds_the_three_diverging_moves() {
    let baseline = parse_observations(BASELINE).unwrap();
    let candidate = parse_observations(CANDIDATE).unwrap();
    let report = diff(&baseline, &candidate).unwrap();

    let labels: Vec<&str> = report.rows().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["b4b3", "c7c6", "e7d8", "e7f7", "e8f7", "e8f8", "e8g8", "h8g8", "h8h4"]
    );

    let mismatched: Vec<(&str, u64, u64)> = report
        .mismatches()
        .map(|r| (r.label.as_str(), r.baseline, r.candidate))
        .collect();
    assert_eq!(
        mismatched,
        vec![
            ("b4b3", 4622747, 4622822),
            ("c7c6", 4228757, 4228830),
            ("e7d8", 3627718, 3627788),
        ]
    );
    assert!(report.missing().is_empty());
    assert!(!report.is_clean());
    assert_eq!(report.totals().0, 34396752);
}

#[test]
fn diff_against_itself_is_clean() {
    let baseline = parse_observations(BASELINE).unwrap();
    let report = diff(&baseline, &baseline).unwrap();
    assert!(report.is_clean());
    assert!(report.to_string().ends_with("clean"));
}

#[test]
fn dropped_move_is_reported_once() {
    let baseline = parse_observations(BASELINE).unwrap();
    let candidate: Vec<Observation> = parse_observations(BASELINE)
        .unwrap()
        .into_iter()
        .filter(|obs| obs.label != "e8g8")
        .collect();

    let report = diff(&baseline, &candidate).unwrap();
    assert_eq!(report.missing().len(), 1);
    assert_eq!(report.missing()[0].side, Side::Baseline);
    assert_eq!(report.missing()[0].label, "e8g8");
    assert!(report
        .to_string()
        .contains("e8g8: 3861082 | - MISSING IN CANDIDATE"));
}

#[test]
fn move_labels_use_codec_squares() {
    for obs in parse_observations(BASELINE).unwrap() {
        let (from, to) = obs.label.split_at(2);
        assert!(square_for_label(from).is_ok(), "{from}");
        assert!(square_for_label(to).is_ok(), "{to}");
    }
}
