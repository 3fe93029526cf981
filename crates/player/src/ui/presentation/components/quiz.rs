//! Module quiz: one question at a time with an explanation after each answer

use dioxus::prelude::*;
use regresslab_domain::{FeedbackTier, Quiz, QuizFlow, QuizPhase, PASS_THRESHOLD};

#[derive(Props, Clone, PartialEq)]
pub struct QuizPanelProps {
    pub quiz: Quiz,
    /// Called with the final percentage when the last explanation is acknowledged
    pub on_complete: EventHandler<u8>,
}

#[component]
pub fn QuizPanel(props: QuizPanelProps) -> Element {
    let quiz = props.quiz.clone();
    let mut flow = use_signal(move || QuizFlow::new(quiz));

    let on_complete = props.on_complete;

    let flow_read = flow.read();
    let flow_ref = match flow_read.as_ref() {
        Ok(flow) => flow,
        Err(e) => {
            tracing::error!(error = %e, "Quiz content is invalid");
            return rsx! {
                section { class: "quiz", p { class: "muted", "This quiz is unavailable." } }
            };
        }
    };

    let header = format!(
        "Question {} of {}",
        (flow_ref.index() + 1).min(flow_ref.total()),
        flow_ref.total()
    );

    let body = match flow_ref.phase().clone() {
        QuizPhase::Complete => {
            let percent = flow_ref.percentage();
            let correct = flow_ref.correct_count();
            let total = flow_ref.total();
            let tier = FeedbackTier::from_percentage(percent);
            let verdict = if flow_ref.passed() {
                "You passed. This module is marked complete."
            } else {
                "Not quite there yet. Review the lessons and try again."
            };
            rsx! {
                div {
                    class: "quiz-complete",
                    h3 { "{tier.headline()}" }
                    p { class: "quiz-score", "{correct} / {total} correct ({percent}%)" }
                    p { "{verdict}" }
                    p { class: "muted", "A score of {PASS_THRESHOLD}% or more passes." }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            if let Ok(flow) = flow.write().as_mut() {
                                flow.restart();
                            }
                        },
                        "Restart quiz"
                    }
                }
            }
        }
        phase => {
            let Some(question) = flow_ref.current().cloned() else {
                return rsx! {};
            };
            let revealed = match &phase {
                QuizPhase::ShowingExplanation { selected, correct } => {
                    Some((selected.clone(), *correct))
                }
                _ => None,
            };
            let is_last = flow_ref.is_last_question();

            rsx! {
                div {
                    class: "quiz-question",
                    p { class: "quiz-prompt", "{question.question}" }
                    div {
                        class: "quiz-options",
                        for option in question.options.iter() {
                            {
                                let id = option.id.clone();
                                let class = match &revealed {
                                    Some(_) if option.id == question.correct => "quiz-option correct",
                                    Some((selected, false)) if *selected == option.id => "quiz-option wrong",
                                    Some(_) => "quiz-option dimmed",
                                    None => "quiz-option",
                                };
                                rsx! {
                                    button {
                                        key: "{option.id}",
                                        class,
                                        disabled: revealed.is_some(),
                                        onclick: move |_| {
                                            if let Ok(flow) = flow.write().as_mut() {
                                                if let Err(e) = flow.select(&id) {
                                                    tracing::debug!(error = %e, "Ignored quiz selection");
                                                }
                                            }
                                        },
                                        "{option.text}"
                                    }
                                }
                            }
                        }
                    }

                    if let Some((_, correct)) = revealed {
                        div {
                            class: if correct { "quiz-explanation correct" } else { "quiz-explanation wrong" },
                            strong { if correct { "Correct! " } else { "Not quite. " } }
                            "{question.explanation}"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                let finished = match flow.write().as_mut() {
                                    Ok(flow) => {
                                        if flow.acknowledge().is_ok() && flow.is_complete() {
                                            Some(flow.percentage())
                                        } else {
                                            None
                                        }
                                    }
                                    _ => None,
                                };
                                if let Some(percent) = finished {
                                    on_complete.call(percent);
                                }
                            },
                            if is_last { "See results" } else { "Next question" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "quiz",
            div {
                class: "quiz-header",
                h2 { "Check your understanding" }
                if !matches!(flow_ref.phase(), QuizPhase::Complete) {
                    span { class: "muted", "{header}" }
                }
            }
            {body}
        }
    }
}
