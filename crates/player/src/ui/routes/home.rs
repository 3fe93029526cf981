//! Home route - module list with progress and entry points

use dioxus::prelude::*;
use regresslab_domain::GameKind;

use super::{use_page_title, Route};
use crate::presentation::components::progress_badge::{ProgressBadge, ProgressBar};
use crate::presentation::state::ProgressState;

#[component]
pub fn HomeRoute() -> Element {
    use_page_title("Learn regression".to_string());

    let mut progress = use_context::<ProgressState>();
    let mut confirm_reset = use_signal(|| false);

    let record = progress.record();
    let ids = regresslab_shared::module_ids();
    let percent = record.read().completion_percentage(&ids);
    let completed = record.read().completed_count();

    rsx! {
        section {
            class: "hero",
            h1 { "Regression, one idea at a time" }
            p {
                "Work through the modules in order, or jump to a game or story. "
                "Select any highlighted term on a page to see its definition."
            }
            ProgressBar { percent, label: "{completed} of {ids.len()} modules complete" }
        }

        section {
            class: "module-list",
            h2 { "Modules" }
            for module in regresslab_shared::modules() {
                Link {
                    key: "{module.id}",
                    class: "module-card",
                    to: Route::ModuleRoute { slug: module.id.to_string() },
                    div {
                        class: "module-card-head",
                        span { class: "module-number", "{module.number}" }
                        h3 { "{module.title}" }
                        ProgressBadge { progress: record.read().module_progress(&module.id) }
                    }
                    p { "{module.summary}" }
                }
            }
        }

        section {
            class: "game-list",
            h2 { "Games" }
            div {
                class: "card-grid",
                for kind in GameKind::ALL {
                    Link {
                        key: "{kind.slug()}",
                        class: "game-card",
                        to: Route::GameRoute { slug: kind.slug().to_string() },
                        h3 { "{kind.title()}" }
                        p { "{kind.intro()}" }
                    }
                }
            }
        }

        section {
            class: "reset-progress",
            if confirm_reset() {
                p { "This clears every read mark, completion and quiz score." }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| {
                        progress.reset();
                        confirm_reset.set(false);
                    },
                    "Yes, reset"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| confirm_reset.set(false),
                    "Cancel"
                }
            } else {
                button {
                    class: "btn btn-secondary",
                    disabled: completed == 0 && record.read().read.is_empty(),
                    onclick: move |_| confirm_reset.set(true),
                    "Reset progress"
                }
            }
        }
    }
}
