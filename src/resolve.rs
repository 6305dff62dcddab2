use crate::centrifuge::NameTable;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

pub fn resolve_selectors(selector: &str, table: &NameTable, verbose: bool) -> HashSet<String> {
    let mut resolved = HashSet::new();
    if selector.trim().is_empty() {
        return resolved;
    }

    for token in selector.split(',') {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }

        // BTreeSet keeps the verbose listing stable
        let mut matched: BTreeSet<String> = BTreeSet::new();

        // numeric tokens must already be known taxIDs, never inserted blindly
        if token.bytes().all(|b| b.is_ascii_digit()) && table.is_known_id(&token) {
            matched.insert(token.clone());
        }

        if let Some(id) = table.id_for_name(&token) {
            matched.insert(id.to_string());
        }

        // prefix-anchored: the pattern must match at offset 0 of the name,
        // not necessarily the whole name; an invalid regex contributes nothing
        if let Ok(re) = Regex::new(&token) {
            for (name, id) in table.names() {
                if re.find(name).is_some_and(|m| m.start() == 0) {
                    matched.insert(id.to_string());
                }
            }
        }

        if matched.is_empty() {
            if verbose {
                eprintln!("Cannot find tax \"{token}\"");
            }
        } else {
            if verbose {
                let ids: Vec<&str> = matched.iter().map(String::as_str).collect();
                eprintln!("\"{token}\" = {}", ids.join(", "));
            }
            resolved.extend(matched);
        }
    }

    resolved
}
