//! Prefix completion for variable names
//!
//! The match computation is a pure function over a snapshot of the store's
//! names; the [`dialoguer::Completion`] impl wires it into name prompts.

use dialoguer::Completion;

/// Names starting with `prefix`, sorted lexicographically.
///
/// An empty prefix matches everything.
pub fn matches(prefix: &str, names: &[String]) -> Vec<String> {
    let mut hits: Vec<String> = names
        .iter()
        .filter(|name| name.starts_with(prefix))
        .cloned()
        .collect();
    hits.sort();
    hits
}

/// Tab-completion source for name entry prompts.
///
/// Built from a fresh snapshot of the store's names before each prompt, so
/// candidates always reflect the live set.
pub struct NameCompletion {
    names: Vec<String>,
}

impl NameCompletion {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl Completion for NameCompletion {
    fn get(&self, input: &str) -> Option<String> {
        let hits = matches(input, &self.names);
        match hits.len() {
            0 => None,
            1 => Some(hits[0].clone()),
            _ => {
                let common = longest_common_prefix(&hits);
                (common.len() > input.len()).then_some(common)
            }
        }
    }
}

/// Longest common prefix of a non-empty slice of names.
fn longest_common_prefix(names: &[String]) -> String {
    let mut prefix = names[0].clone();
    for name in &names[1..] {
        let common: usize = prefix
            .chars()
            .zip(name.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        prefix.truncate(common);
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}
