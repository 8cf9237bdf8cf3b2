use std::collections::BTreeSet;

use crate::filtering::{parse_labels, FilterDecision, LabelFilter, LabelOperator};

fn labels(raw: &[&str]) -> BTreeSet<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn proceeds(configured: &[&str], operator: LabelOperator, content: &[&str]) -> bool {
    LabelFilter::new(labels(configured), operator)
        .evaluate(&labels(content))
        .proceeds()
}

#[test]
fn test_parse_labels_normalizes() {
    let parsed = parse_labels(" Bug, ,Needs-Triage ,,feature ");
    assert_eq!(parsed, labels(&["bug", "needs-triage", "feature"]));
    assert!(parse_labels("").is_empty());
}

#[test]
fn test_operator_parsing() {
    assert_eq!("AND".parse::<LabelOperator>().unwrap(), LabelOperator::And);
    assert_eq!(" not ".parse::<LabelOperator>().unwrap(), LabelOperator::Not);
    assert_eq!("or".parse::<LabelOperator>().unwrap(), LabelOperator::Or);
    assert_eq!("xor".parse::<LabelOperator>().unwrap(), LabelOperator::Or);
    assert_eq!("".parse::<LabelOperator>().unwrap(), LabelOperator::Or);
}

#[test]
fn test_and_requires_every_label() {
    assert!(proceeds(&["bug", "p1"], LabelOperator::And, &["bug", "p1", "ui"]));
    assert!(!proceeds(&["bug", "p1"], LabelOperator::And, &["bug"]));
    assert!(proceeds(&[], LabelOperator::And, &["bug"]));
    assert!(proceeds(&[], LabelOperator::And, &[]));
}

#[test]
fn test_not_rejects_any_listed_label() {
    assert!(!proceeds(&["bug"], LabelOperator::Not, &["bug"]));
    assert!(!proceeds(&["bug", "wontfix"], LabelOperator::Not, &["wontfix", "ui"]));
    assert!(proceeds(&["bug"], LabelOperator::Not, &["feature"]));
    assert!(proceeds(&[], LabelOperator::Not, &["bug"]));
}

#[test]
fn test_or_requires_any_label() {
    assert!(proceeds(&["bug", "feature"], LabelOperator::Or, &["feature"]));
    assert!(!proceeds(&["bug", "feature"], LabelOperator::Or, &["docs"]));
    assert!(!proceeds(&["bug"], LabelOperator::Or, &[]));
    assert!(proceeds(&[], LabelOperator::Or, &[]));
}

#[test]
fn test_exhaustive_subsets_match_set_algebra() {
    let universe = ["a", "b", "c"];
    let subsets: Vec<BTreeSet<String>> = (0..8u8)
        .map(|mask| {
            universe
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, l)| l.to_string())
                .collect()
        })
        .collect();

    for configured in &subsets {
        for content in &subsets {
            let intersects = !configured.is_disjoint(content);

            let and = LabelFilter::new(configured.clone(), LabelOperator::And).evaluate(content);
            assert_eq!(and.proceeds(), configured.is_subset(content));

            let not = LabelFilter::new(configured.clone(), LabelOperator::Not).evaluate(content);
            assert_eq!(not.proceeds(), configured.is_empty() || !intersects);

            let or = LabelFilter::new(configured.clone(), LabelOperator::Or).evaluate(content);
            assert_eq!(or.proceeds(), configured.is_empty() || intersects);
        }
    }
}

#[test]
fn test_skip_reason_names_configured_labels() {
    let decision = LabelFilter::new(labels(&["bug", "p1"]), LabelOperator::And).evaluate(&labels(&["bug"]));
    match decision {
        FilterDecision::Skip(reason) => assert!(reason.contains("bug, p1")),
        FilterDecision::Proceed => panic!("Expected a skip"),
    }
}
