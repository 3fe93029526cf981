//! Glossary popover anchored to the learner's text selection
//!
//! A small script reports every mouse-up selection and the Ctrl/Cmd+Shift+G
//! shortcut back to Rust with the selection's bounding box. Lookup and
//! placement happen on the Rust side.

use dioxus::prelude::*;
use regresslab_domain::{place_popover, GlossaryEntry, GlossaryIndex, Placement, Rect, Size};
use serde::Deserialize;

use crate::routes::Route;

/// Footprint used to keep the popover inside the viewport.
const POPOVER_SIZE: Size = Size {
    width: 320.0,
    height: 220.0,
};

const SELECTION_LISTENER: &str = r#"
const previous = window.__regresslabGlossary;
if (previous) {
    document.removeEventListener("mouseup", previous.mouseup);
    document.removeEventListener("keydown", previous.keydown);
}

const report = () => {
    const selection = window.getSelection();
    if (!selection || selection.rangeCount === 0 || selection.isCollapsed) {
        return null;
    }
    const rect = selection.getRangeAt(0).getBoundingClientRect();
    return {
        text: selection.toString(),
        x: rect.left,
        y: rect.top,
        width: rect.width,
        height: rect.height,
        viewport_width: window.innerWidth,
        viewport_height: window.innerHeight,
    };
};

const handlers = {
    mouseup: (event) => {
        if (event.target.closest && event.target.closest(".glossary-popover")) {
            return;
        }
        setTimeout(() => dioxus.send(report()), 0);
    },
    keydown: (event) => {
        if ((event.ctrlKey || event.metaKey) && event.shiftKey && event.key.toLowerCase() === "g") {
            event.preventDefault();
            dioxus.send(report());
        } else if (event.key === "Escape") {
            dioxus.send(null);
        }
    },
};

document.addEventListener("mouseup", handlers.mouseup);
document.addEventListener("keydown", handlers.keydown);
window.__regresslabGlossary = handlers;
"#;

/// What the page reports about the current selection
#[derive(Debug, Clone, Deserialize)]
struct SelectionReport {
    text: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    viewport_width: f64,
    viewport_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Shown {
    entry: GlossaryEntry,
    related: Vec<String>,
    placement: Placement,
}

/// Match a selection against the glossary and place the popover for it.
fn resolve(index: &GlossaryIndex, report: &SelectionReport) -> Option<Shown> {
    let entry = index.lookup_selection(&report.text)?;
    let anchor = Rect {
        x: report.x,
        y: report.y,
        width: report.width,
        height: report.height,
    };
    let viewport = Size {
        width: report.viewport_width,
        height: report.viewport_height,
    };
    Some(Shown {
        entry: entry.clone(),
        related: index
            .related(entry)
            .into_iter()
            .map(|r| r.term.clone())
            .collect(),
        placement: place_popover(anchor, POPOVER_SIZE, viewport),
    })
}

#[component]
pub fn GlossaryPopover() -> Element {
    let mut shown = use_signal(|| None::<Shown>);

    use_future(move || async move {
        let mut listener = document::eval(SELECTION_LISTENER);
        loop {
            match listener.recv::<Option<SelectionReport>>().await {
                Ok(report) => {
                    let next = report.and_then(|p| resolve(regresslab_shared::glossary(), &p));
                    if let Some(found) = &next {
                        tracing::debug!(term = %found.entry.term, "Glossary term selected");
                    }
                    if *shown.peek() != next {
                        shown.set(next);
                    }
                }
                Err(e) => {
                    tracing::warn!("Glossary selection listener stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    let Some(current) = shown() else {
        return rsx! {};
    };
    let Placement { left, top, above } = current.placement;
    let entry = current.entry;
    let related = current.related.join(", ");

    rsx! {
        aside {
            class: if above { "glossary-popover above" } else { "glossary-popover" },
            style: "left: {left}px; top: {top}px; width: {POPOVER_SIZE.width}px;",
            div {
                class: "popover-header",
                h4 { "{entry.term}" }
                button {
                    class: "btn btn-icon",
                    title: "Close",
                    onclick: move |_| shown.set(None),
                    "✕"
                }
            }
            p { "{entry.definition}" }
            p { class: "analogy", em { "Think of it as: " } "{entry.analogy}" }
            if !related.is_empty() {
                p { class: "related", "Related: {related}" }
            }
            Link {
                class: "btn btn-link",
                to: Route::GlossaryRoute {},
                onclick: move |_| shown.set(None),
                "Open the glossary"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> SelectionReport {
        SelectionReport {
            text: text.to_string(),
            x: 100.0,
            y: 100.0,
            width: 80.0,
            height: 18.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn selection_with_trailing_punctuation_finds_the_term() {
        let shown = resolve(regresslab_shared::glossary(), &report("  Overfitting. ")).unwrap();
        assert_eq!(shown.entry.term, "Overfitting");
        assert!(!shown.placement.above);
    }

    #[test]
    fn out_of_range_selections_show_nothing() {
        let index = regresslab_shared::glossary();
        assert!(resolve(index, &report("a")).is_none());
        assert!(resolve(index, &report(&"x".repeat(51))).is_none());
        assert!(resolve(index, &report("not a glossary term")).is_none());
    }

    #[test]
    fn selection_near_the_bottom_flips_above() {
        let mut near_bottom = report("Variance");
        near_bottom.y = 760.0;
        let shown = resolve(regresslab_shared::glossary(), &near_bottom).unwrap();
        assert!(shown.placement.above);
        assert!(shown.placement.top + POPOVER_SIZE.height <= 800.0);
    }

    #[test]
    fn related_terms_are_resolved_names() {
        let shown = resolve(regresslab_shared::glossary(), &report("Regression")).unwrap();
        assert!(shown.related.contains(&"Feature".to_string()));
    }
}
