//! Code Lab Modal - explanation cards, ordering exercise, result, playground
//!
//! The playground forwards its listing to the interpreter bridge. Loading
//! the runtime can take a while in the browser, so the modal polls the
//! bridge's loading stage and shows it as a progress bar.

use std::sync::Arc;

use dioxus::prelude::*;
use regresslab_domain::{CodeBlock, CodeExercise, CodeLab, CodeLabStage, LoadingStage, RunState};

use crate::application::services::{CodeRunner, PlatformRandom};
use crate::presentation::components::ordering::{OrderingBoard, OrderingReview};
use crate::presentation::Services;
use crate::{use_platform, Platform};

const LOADING_POLL_MS: u64 = 150;

/// Props for CodeLabModal
#[derive(Props, Clone, PartialEq)]
pub struct CodeLabModalProps {
    pub exercise: CodeExercise,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn CodeLabModal(props: CodeLabModalProps) -> Element {
    let exercise = props.exercise.clone();
    let initial = use_hook(move || {
        CodeLab::new(exercise)
            .map_err(|e| tracing::error!(error = %e, "Code exercise is invalid"))
            .ok()
    });

    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            onclick: move |_| on_close.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal code-lab",
                onclick: |e| e.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { "Code Lab: {props.exercise.title}" }
                    button {
                        class: "btn btn-icon",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                if let Some(initial) = initial {
                    CodeLabBody { initial }
                } else {
                    p { class: "muted", "This exercise is unavailable." }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CodeLabBodyProps {
    initial: CodeLab,
}

#[component]
fn CodeLabBody(props: CodeLabBodyProps) -> Element {
    let platform = use_platform();
    let runner = use_context::<Services>().code_runner;

    let initial = props.initial.clone();
    let mut lab = use_signal(move || initial);
    let loading = use_signal(|| runner.loading_stage());

    let stage = lab.read().stage();
    let running = lab.read().run_state().is_running();

    let body = match stage {
        CodeLabStage::Explanation { step } => {
            let count = lab.read().step_count();
            let Some(card) = lab.read().exercise().steps.get(step).cloned() else {
                return rsx! {};
            };
            let number = step + 1;
            let is_last = number >= count;
            let platform = platform.clone();

            rsx! {
                div {
                    class: "lab-step",
                    span { class: "muted", "Step {number} of {count}" }
                    h3 { "{card.title}" }
                    p { "{card.explanation}" }
                    if !card.code.is_empty() {
                        pre { class: "code", code { "{card.code}" } }
                    }
                }
                div {
                    class: "actions",
                    button {
                        class: "btn btn-secondary",
                        disabled: step == 0,
                        onclick: move |_| {
                            if let Err(e) = lab.write().prev_step() {
                                tracing::debug!(error = %e, "Back ignored");
                            }
                        },
                        "Back"
                    }
                    if is_last {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let mut rng = PlatformRandom::new(platform.clone());
                                if let Err(e) = lab.write().start_exercise(&mut rng) {
                                    tracing::debug!(error = %e, "Exercise start ignored");
                                }
                            },
                            "Try the exercise"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                if let Err(e) = lab.write().next_step() {
                                    tracing::debug!(error = %e, "Next ignored");
                                }
                            },
                            "Next"
                        }
                    }
                }
            }
        }
        CodeLabStage::Exercise => rsx! {
            OrderingBoard {
                lab,
                on_submit: move |_| {
                    match lab.write().submit_exercise() {
                        Ok(result) => tracing::info!(correct = result.is_correct, "Exercise submitted"),
                        Err(e) => tracing::debug!(error = %e, "Submit ignored"),
                    }
                },
            }
        },
        CodeLabStage::Result { passed } => {
            let (blocks, per_position) = {
                let lab = lab.read();
                let blocks: Vec<CodeBlock> = lab
                    .ordering()
                    .map(|o| o.arranged_blocks().into_iter().cloned().collect())
                    .unwrap_or_default();
                let per_position = lab
                    .last_result()
                    .map(|r| r.per_position.clone())
                    .unwrap_or_default();
                (blocks, per_position)
            };
            let right = per_position.iter().filter(|ok| **ok).count();
            let total = per_position.len();
            let result_class = if passed { "lab-result passed" } else { "lab-result failed" };
            let retry_platform = platform.clone();
            let platform = platform.clone();
            let runner = runner.clone();

            rsx! {
                div {
                    class: result_class,
                    h3 {
                        if passed { "Every block is in place!" } else { "Not quite right yet" }
                    }
                    p { "{right} of {total} blocks are in the right position." }
                }
                OrderingReview { blocks, per_position }
                div {
                    class: "actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let mut rng = PlatformRandom::new(retry_platform.clone());
                            if let Err(e) = lab.write().retry_exercise(&mut rng) {
                                tracing::debug!(error = %e, "Retry ignored");
                            }
                        },
                        "Try again"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            if lab.write().open_playground().is_ok() {
                                warm_up(runner.clone(), platform.clone(), loading);
                            }
                        },
                        "Open the playground"
                    }
                }
            }
        }
        CodeLabStage::Playground => rsx! {
            Playground {
                lab,
                loading,
            }
        },
    };

    rsx! {
        div {
            class: "lab-body",
            {body}
            if !matches!(stage, CodeLabStage::Explanation { .. }) {
                button {
                    class: "btn btn-link",
                    disabled: running,
                    onclick: move |_| {
                        if let Err(e) = lab.write().back_to_explanation() {
                            tracing::debug!(error = %e, "Back to explanation ignored");
                        }
                    },
                    "Back to the explanation"
                }
            }
        }
    }
}

/// Start loading the runtime and mirror its stage into `loading`.
fn warm_up(runner: Arc<CodeRunner>, platform: Platform, loading: Signal<LoadingStage>) {
    if runner.is_ready() {
        return;
    }
    let preload = runner.clone();
    spawn(async move {
        preload.preload().await;
    });
    watch_loading(runner, platform, loading);
}

/// Poll the bridge until it settles on ready or failed.
fn watch_loading(runner: Arc<CodeRunner>, platform: Platform, mut loading: Signal<LoadingStage>) {
    spawn(async move {
        loop {
            let stage = runner.loading_stage();
            if *loading.peek() != stage {
                loading.set(stage);
            }
            if matches!(stage, LoadingStage::Ready | LoadingStage::Failed) {
                break;
            }
            platform.sleep_ms(LOADING_POLL_MS).await;
        }
    });
}

#[derive(Props, Clone, PartialEq)]
struct PlaygroundProps {
    lab: Signal<CodeLab>,
    loading: Signal<LoadingStage>,
}

/// Runnable listing with its output pane
#[component]
fn Playground(props: PlaygroundProps) -> Element {
    let platform = use_platform();
    let runner = use_context::<Services>().code_runner;
    let mut lab = props.lab;
    let loading = props.loading;

    let code = lab.read().exercise().playground_code.clone();
    let run_state = lab.read().run_state().clone();
    let stage = loading();
    let busy = run_state.is_running() || stage.is_loading();

    let run = {
        let runner = runner.clone();
        let platform = platform.clone();
        move |_: MouseEvent| {
            let code = match lab.write().begin_run() {
                Ok(code) => code,
                Err(e) => {
                    tracing::debug!(error = %e, "Run ignored");
                    return;
                }
            };
            if !runner.is_ready() {
                watch_loading(runner.clone(), platform.clone(), loading);
            }
            let runner = runner.clone();
            spawn(async move {
                let outcome = runner.execute(&code).await;
                lab.write().finish_run(outcome);
            });
        }
    };

    let output = match &run_state {
        RunState::Idle => rsx! {
            p { class: "muted", "Press Run to execute the listing. Output appears here." }
        },
        RunState::Running => rsx! {
            p { class: "muted", "Running..." }
        },
        RunState::Finished { output } if output.trim().is_empty() => rsx! {
            p { class: "muted", "The program finished without printing anything." }
        },
        RunState::Finished { output } => rsx! {
            pre { class: "output", "{output}" }
        },
        RunState::Failed { message } => rsx! {
            pre { class: "output error", "{message}" }
        },
    };

    rsx! {
        div {
            class: "playground",
            pre { class: "code listing", code { "{code}" } }

            if stage.is_loading() {
                div {
                    class: "progress",
                    div {
                        class: "progress-track",
                        div { class: "progress-fill", style: "width: {stage.progress_percent()}%;" }
                    }
                    span { class: "progress-label", "{stage.label()}" }
                }
            }

            div {
                class: "actions",
                button {
                    class: "btn btn-primary",
                    disabled: busy,
                    onclick: run,
                    if run_state.is_running() { "Running..." } else { "Run" }
                }
                button {
                    class: "btn btn-secondary",
                    disabled: run_state.is_running(),
                    onclick: move |_| runner.clear(&mut lab.write()),
                    "Clear output"
                }
            }

            div { class: "output-pane", {output} }
        }
    }
}
