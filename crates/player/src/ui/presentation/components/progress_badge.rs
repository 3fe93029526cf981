//! Progress indicators for modules and the whole course

use dioxus::prelude::*;
use regresslab_domain::ModuleProgress;

#[derive(Props, Clone, PartialEq)]
pub struct ProgressBadgeProps {
    pub progress: ModuleProgress,
}

/// Completed / read / new, plus the last quiz score when there is one
#[component]
pub fn ProgressBadge(props: ProgressBadgeProps) -> Element {
    let (class, label) = if props.progress.completed {
        ("badge badge-complete", "Completed")
    } else if props.progress.read {
        ("badge badge-read", "In progress")
    } else {
        ("badge badge-new", "New")
    };

    rsx! {
        span {
            class: "progress-badges",
            span { class, "{label}" }
            if let Some(score) = props.progress.quiz_score {
                span { class: "badge badge-score", "Quiz {score}%" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    /// 0..=100
    pub percent: u8,
    pub label: String,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let width = props.percent.min(100);

    rsx! {
        div {
            class: "progress",
            div {
                class: "progress-track",
                div { class: "progress-fill", style: "width: {width}%;" }
            }
            span { class: "progress-label", "{props.label}" }
        }
    }
}
