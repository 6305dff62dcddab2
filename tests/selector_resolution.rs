use centrisieve::centrifuge::NameTable;
use centrisieve::resolve::resolve_selectors;
use std::collections::HashSet;

fn sample_table() -> NameTable {
    NameTable::from_entries([
        ("Homo sapiens", "9606"),
        ("Mus musculus", "10090"),
        ("Musca domestica", "7370"),
        ("mus", "862507"),
    ])
}

fn ids(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn known_numeric_token_resolves_to_itself() {
    let got = resolve_selectors("9606", &sample_table(), false);
    assert_eq!(got, ids(&["9606"]));
}

#[test]
fn unknown_numeric_token_contributes_nothing() {
    let got = resolve_selectors("12345", &sample_table(), false);
    assert!(got.is_empty());
}

#[test]
fn exact_name_resolves_to_its_id() {
    let got = resolve_selectors("homo sapiens", &sample_table(), false);
    assert_eq!(got, ids(&["9606"]));
}

#[test]
fn tokens_are_case_folded() {
    let got = resolve_selectors("HOMO SAPIENS", &sample_table(), false);
    assert_eq!(got, ids(&["9606"]));
}

#[test]
fn pattern_token_matches_every_prefixed_name() {
    // "mus" is simultaneously an exact name and a prefix of "mus musculus";
    // both strategies contribute, and "musca domestica" joins via the pattern
    let got = resolve_selectors("mus", &sample_table(), false);
    assert_eq!(got, ids(&["862507", "10090", "7370"]));
}

#[test]
fn pattern_matching_is_prefix_anchored() {
    // "sapiens" occurs inside "homo sapiens" but not at the start
    let got = resolve_selectors("sapiens", &sample_table(), false);
    assert!(got.is_empty());
}

#[test]
fn regex_alternation_is_honored() {
    let got = resolve_selectors("homo|musca", &sample_table(), false);
    assert_eq!(got, ids(&["9606", "7370"]));
}

#[test]
fn tokens_union_across_the_selector() {
    let got = resolve_selectors("9606 , musca", &sample_table(), false);
    assert_eq!(got, ids(&["9606", "7370"]));
}

#[test]
fn unmatched_token_does_not_poison_the_rest() {
    let got = resolve_selectors("no such taxon,homo sapiens", &sample_table(), false);
    assert_eq!(got, ids(&["9606"]));
}

#[test]
fn empty_selector_yields_empty_set() {
    assert!(resolve_selectors("", &sample_table(), false).is_empty());
    assert!(resolve_selectors("   ", &sample_table(), false).is_empty());
}

#[test]
fn stray_commas_are_ignored() {
    let got = resolve_selectors("homo sapiens,,", &sample_table(), false);
    assert_eq!(got, ids(&["9606"]));
}

#[test]
fn invalid_regex_token_is_not_fatal() {
    let got = resolve_selectors("(unclosed,homo sapiens", &sample_table(), false);
    assert_eq!(got, ids(&["9606"]));
}
