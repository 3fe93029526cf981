//! Glossary lookup
//!
//! Terms are indexed by their lowercase spelling plus a few generated
//! variants (suffix stripping, hyphen/space swaps, naive plurals) so that
//! highlighting "regularized" or "Residuals." still finds the entry.
//! There is no ranking and no fuzzy matching.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content::GlossaryEntry;
use crate::ids::ModuleId;

/// Shortest selection that triggers a lookup, in characters.
pub const MIN_SELECTION_CHARS: usize = 2;
/// Longest selection that triggers a lookup, in characters.
pub const MAX_SELECTION_CHARS: usize = 50;

/// Stems shorter than this are too ambiguous to index.
const MIN_STEM_CHARS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct GlossaryIndex {
    entries: Vec<GlossaryEntry>,
    keys: HashMap<String, usize>,
}

impl GlossaryIndex {
    pub fn build(entries: Vec<GlossaryEntry>) -> Self {
        let mut keys = HashMap::new();
        // Exact terms first so a variant never shadows a real term.
        for (i, entry) in entries.iter().enumerate() {
            keys.entry(normalize(&entry.term)).or_insert(i);
        }
        for (i, entry) in entries.iter().enumerate() {
            for variant in variants(&normalize(&entry.term)) {
                keys.entry(variant).or_insert(i);
            }
        }
        Self { entries, keys }
    }

    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive lookup ignoring one trailing punctuation character.
    pub fn lookup(&self, text: &str) -> Option<&GlossaryEntry> {
        let mut key = normalize(text);
        if key.chars().last().is_some_and(|c| c.is_ascii_punctuation()) {
            key.pop();
            key = key.trim_end().to_string();
        }
        if key.is_empty() {
            return None;
        }
        self.keys.get(&key).map(|i| &self.entries[*i])
    }

    /// Lookup for a text selection; selections outside 2..=50 characters
    /// after trimming never match.
    pub fn lookup_selection(&self, selection: &str) -> Option<&GlossaryEntry> {
        let trimmed = selection.trim();
        let len = trimmed.chars().count();
        if !(MIN_SELECTION_CHARS..=MAX_SELECTION_CHARS).contains(&len) {
            return None;
        }
        self.lookup(trimmed)
    }

    /// Entries named in `entry.related` that exist in the index.
    pub fn related(&self, entry: &GlossaryEntry) -> Vec<&GlossaryEntry> {
        entry
            .related
            .iter()
            .filter_map(|name| self.lookup(name))
            .filter(|related| related.term != entry.term)
            .collect()
    }

    /// Substring search over terms and definitions, optionally limited to one
    /// module, sorted by term. An empty query lists everything.
    pub fn search(&self, query: &str, module: Option<&ModuleId>) -> Vec<&GlossaryEntry> {
        let needle = normalize(query);
        let mut hits: Vec<&GlossaryEntry> = self
            .entries
            .iter()
            .filter(|e| module.is_none_or(|m| &e.module == m))
            .filter(|e| {
                needle.is_empty()
                    || e.term.to_lowercase().contains(&needle)
                    || e.definition.to_lowercase().contains(&needle)
            })
            .collect();
        hits.sort_by_key(|e| e.term.to_lowercase());
        hits
    }
}

/// Lowercase and collapse runs of whitespace to single spaces.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Generated spellings for a normalized term (excluding the term itself).
fn variants(term: &str) -> Vec<String> {
    let mut forms = vec![term.to_string()];
    if term.contains('-') {
        forms.push(term.replace('-', " "));
    }
    if term.contains(' ') {
        forms.push(term.replace(' ', "-"));
    }

    let mut out = Vec::new();
    for form in &forms {
        if form != term {
            out.push(form.clone());
        }
        out.extend(plural_forms(form));
        for suffix in ["ization", "ing", "ion"] {
            if let Some(stem) = form.strip_suffix(suffix) {
                if stem.chars().count() >= MIN_STEM_CHARS {
                    out.push(stem.to_string());
                    // "overfitting" -> "overfitt" -> "overfit"
                    if let Some(single) = undouble(stem) {
                        out.push(single);
                    }
                    if suffix == "ization" {
                        out.push(format!("{stem}ize"));
                        out.push(format!("{stem}ized"));
                    }
                }
            }
        }
    }
    out.retain(|v| v != term);
    out.dedup();
    out
}

fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
        let mut single = stem.to_string();
        single.pop();
        return Some(single);
    }
    None
}

/// Naive singular/plural counterpart of the last word.
fn plural_forms(word: &str) -> Vec<String> {
    if let Some(stem) = word.strip_suffix("ies") {
        return vec![format!("{stem}y")];
    }
    if word.ends_with("ss") {
        return vec![format!("{word}es")];
    }
    if let Some(stem) = word.strip_suffix('s') {
        if stem.chars().count() >= MIN_STEM_CHARS {
            return vec![stem.to_string()];
        }
        return Vec::new();
    }
    if let Some(stem) = word.strip_suffix('y') {
        return vec![format!("{stem}ies"), format!("{word}s")];
    }
    vec![format!("{word}s")]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Top-left corner of a positioned popover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    /// True when the popover sits above the selection
    pub above: bool,
}

/// Distance kept between the popover and the viewport edge or anchor.
pub const POPOVER_MARGIN: f64 = 8.0;

/// Anchor the popover under the selection, flipping above it when there is
/// no room below, and clamp it inside the viewport.
pub fn place_popover(anchor: Rect, popover: Size, viewport: Size) -> Placement {
    let below = anchor.y + anchor.height + POPOVER_MARGIN;
    let above_top = anchor.y - POPOVER_MARGIN - popover.height;
    let fits_below = below + popover.height <= viewport.height - POPOVER_MARGIN;
    let fits_above = above_top >= POPOVER_MARGIN;
    let above = !fits_below && fits_above;
    let top = if above { above_top } else { below };

    let centered = anchor.x + anchor.width / 2.0 - popover.width / 2.0;

    Placement {
        left: clamp_axis(centered, popover.width, viewport.width),
        top: clamp_axis(top, popover.height, viewport.height),
        above,
    }
}

fn clamp_axis(start: f64, extent: f64, limit: f64) -> f64 {
    let max = (limit - extent - POPOVER_MARGIN).max(POPOVER_MARGIN);
    start.clamp(POPOVER_MARGIN, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> GlossaryIndex {
        GlossaryIndex::build(vec![
            GlossaryEntry::new(
                "Regularization",
                "Adding a penalty on model complexity to the loss.",
                "Training wheels that keep a model from wobbling.",
                "module-4",
            )
            .with_related(&["Ridge Regression", "Overfitting"]),
            GlossaryEntry::new(
                "Residual",
                "Difference between an observed value and the prediction.",
                "How far your dart landed from the bullseye.",
                "module-1",
            ),
            GlossaryEntry::new(
                "Overfitting",
                "Learning noise in the training data.",
                "Memorising the answer sheet instead of the subject.",
                "module-3",
            ),
            GlossaryEntry::new(
                "Ridge Regression",
                "Linear regression with an L2 penalty.",
                "A leash on every coefficient.",
                "module-4",
            ),
            GlossaryEntry::new(
                "Train-Test Split",
                "Holding out data to estimate performance on unseen examples.",
                "Keeping some exam questions secret.",
                "module-5",
            ),
        ])
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let idx = index();
        assert_eq!(idx.lookup("RESIDUAL").unwrap().term, "Residual");
        assert_eq!(idx.lookup("residual").unwrap().term, "Residual");
    }

    #[test]
    fn lookup_ignores_one_trailing_punctuation_mark() {
        let idx = index();
        assert_eq!(idx.lookup("Residual.").unwrap().term, "Residual");
        assert_eq!(idx.lookup("overfitting?").unwrap().term, "Overfitting");
        assert!(idx.lookup("residual?!").is_none());
    }

    #[test]
    fn plural_and_suffix_variants_resolve() {
        let idx = index();
        assert_eq!(idx.lookup("residuals").unwrap().term, "Residual");
        assert_eq!(idx.lookup("overfit").unwrap().term, "Overfitting");
        assert_eq!(idx.lookup("regularize").unwrap().term, "Regularization");
        assert_eq!(idx.lookup("regularized").unwrap().term, "Regularization");
    }

    #[test]
    fn hyphen_and_space_spellings_are_interchangeable() {
        let idx = index();
        assert_eq!(idx.lookup("train test split").unwrap().term, "Train-Test Split");
        assert_eq!(idx.lookup("ridge-regression").unwrap().term, "Ridge Regression");
    }

    #[test]
    fn selection_length_bounds() {
        let idx = index();
        assert!(idx.lookup_selection("r").is_none());
        let long = "a".repeat(51);
        assert!(idx.lookup_selection(&long).is_none());
        assert_eq!(
            idx.lookup_selection("  Residual  ").unwrap().term,
            "Residual"
        );
    }

    #[test]
    fn unknown_term_is_none() {
        assert!(index().lookup("gradient boosting").is_none());
    }

    #[test]
    fn related_resolves_existing_names() {
        let idx = index();
        let entry = idx.lookup("regularization").unwrap();
        let related: Vec<&str> = idx.related(entry).iter().map(|e| e.term.as_str()).collect();
        assert_eq!(related, vec!["Ridge Regression", "Overfitting"]);
    }

    #[test]
    fn search_filters_by_text_and_module() {
        let idx = index();
        let hits: Vec<&str> = idx
            .search("penalty", None)
            .iter()
            .map(|e| e.term.as_str())
            .collect();
        assert_eq!(hits, vec!["Regularization", "Ridge Regression"]);

        let module = ModuleId::new("module-1");
        assert_eq!(idx.search("", Some(&module)).len(), 1);
        assert!(idx.search("transformer", None).is_empty());
    }

    #[test]
    fn popover_sits_below_and_centered_when_room() {
        let placement = place_popover(
            Rect {
                x: 400.0,
                y: 100.0,
                width: 100.0,
                height: 20.0,
            },
            Size {
                width: 200.0,
                height: 150.0,
            },
            Size {
                width: 1024.0,
                height: 768.0,
            },
        );
        assert!(!placement.above);
        assert_eq!(placement.left, 350.0);
        assert_eq!(placement.top, 128.0);
    }

    #[test]
    fn popover_flips_above_near_bottom_and_clamps_right_edge() {
        let placement = place_popover(
            Rect {
                x: 1000.0,
                y: 700.0,
                width: 20.0,
                height: 20.0,
            },
            Size {
                width: 200.0,
                height: 150.0,
            },
            Size {
                width: 1024.0,
                height: 768.0,
            },
        );
        assert!(placement.above);
        assert_eq!(placement.top, 542.0);
        assert_eq!(placement.left, 816.0);
    }
}
