//! Module route - lessons, code lab, games, stories and the quiz

use dioxus::prelude::*;
use regresslab_domain::{CourseModule, ModuleId};

use super::{use_page_title, NotFound, Route};
use crate::presentation::components::code_lab_modal::CodeLabModal;
use crate::presentation::components::progress_badge::ProgressBadge;
use crate::presentation::components::quiz::QuizPanel;
use crate::presentation::state::ProgressState;

#[component]
pub fn ModuleRoute(slug: String) -> Element {
    let module = ModuleId::parse(&slug)
        .ok()
        .and_then(|id| regresslab_shared::module(&id));

    match module {
        // Keyed so page state resets when moving between modules
        Some(module) => rsx! {
            ModulePage { key: "{slug}", module: module.clone() }
        },
        None => rsx! {
            NotFound { what: format!("module {slug}") }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct ModulePageProps {
    module: CourseModule,
}

#[component]
fn ModulePage(props: ModulePageProps) -> Element {
    let module = props.module;
    use_page_title(format!("Module {}: {}", module.number, module.title));

    let progress = use_context::<ProgressState>();
    let mut show_lab = use_signal(|| false);

    // Opening a module counts as reading it
    {
        let mut progress = progress.clone();
        let id = module.id.clone();
        use_effect(move || progress.mark_read(&id));
    }

    let status = progress.module(&module.id);
    let exercise = module
        .exercise
        .as_ref()
        .and_then(regresslab_shared::code_exercise)
        .cloned();
    let games = regresslab_shared::games_for_module(&module.id);
    let stories: Vec<_> = regresslab_shared::stories()
        .iter()
        .filter(|s| s.module.as_ref() == Some(&module.id))
        .collect();
    let quiz = regresslab_shared::quiz(&module.id).cloned();

    let modules = regresslab_shared::modules();
    let position = modules.iter().position(|m| m.id == module.id);
    let previous = position
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| modules.get(i));
    let next = position.and_then(|i| modules.get(i + 1));

    let quiz_id = module.id.clone();
    let complete_id = module.id.clone();
    let mut quiz_progress = progress.clone();
    let mut complete_progress = progress.clone();

    rsx! {
        article {
            class: "module-page",

            header {
                class: "module-header",
                span { class: "module-number", "Module {module.number}" }
                h1 { "{module.title}" }
                p { class: "lead", "{module.summary}" }
                ProgressBadge { progress: status }
            }

            for lesson in module.lessons.iter() {
                section {
                    key: "{lesson.heading}",
                    class: "lesson",
                    h2 { "{lesson.heading}" }
                    for (i, paragraph) in lesson.body.split("\n\n").enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }
            }

            if let Some(exercise) = exercise {
                section {
                    class: "lab-callout",
                    h2 { "Code Lab: {exercise.title}" }
                    p { "Walk through the code step by step, put the blocks in order, then run it." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_lab.set(true),
                        "Open the Code Lab"
                    }
                }
                if show_lab() {
                    CodeLabModal {
                        exercise: exercise.clone(),
                        on_close: move |_| show_lab.set(false),
                    }
                }
            }

            if !games.is_empty() || !stories.is_empty() {
                section {
                    class: "practice",
                    h2 { "Practice" }
                    div {
                        class: "card-grid",
                        for kind in games {
                            Link {
                                key: "{kind.slug()}",
                                class: "game-card",
                                to: Route::GameRoute { slug: kind.slug().to_string() },
                                span { class: "card-kind", "Game" }
                                h3 { "{kind.title()}" }
                            }
                        }
                        for story in stories {
                            Link {
                                key: "{story.id}",
                                class: "story-card",
                                to: Route::StoryRoute { slug: story.id.to_string() },
                                span { class: "card-kind", "Story" }
                                h3 { "{story.title}" }
                                p { class: "muted", "{story.subtitle}" }
                            }
                        }
                    }
                }
            }

            if let Some(quiz) = quiz {
                QuizPanel {
                    quiz,
                    on_complete: move |percent: u8| quiz_progress.record_quiz(&quiz_id, percent),
                }
            }

            if !status.completed {
                div {
                    class: "actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| complete_progress.mark_completed(&complete_id),
                        "Mark module complete"
                    }
                }
            }

            nav {
                class: "module-nav",
                if let Some(prev) = previous {
                    Link {
                        class: "btn btn-link",
                        to: Route::ModuleRoute { slug: prev.id.to_string() },
                        "← Module {prev.number}: {prev.title}"
                    }
                }
                if let Some(next) = next {
                    Link {
                        class: "btn btn-link next",
                        to: Route::ModuleRoute { slug: next.id.to_string() },
                        "Module {next.number}: {next.title} →"
                    }
                }
            }
        }
    }
}
