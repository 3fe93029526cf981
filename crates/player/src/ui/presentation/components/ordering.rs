//! Drag-and-drop block ordering for the code lab exercise

use dioxus::prelude::*;
use regresslab_domain::{CodeBlock, CodeLab};

#[derive(Props, Clone, PartialEq)]
pub struct OrderingBoardProps {
    pub lab: Signal<CodeLab>,
    pub on_submit: EventHandler<()>,
}

/// Shuffled blocks the learner drags into order. Arrow buttons move a block
/// one slot for keyboard and touch users.
#[component]
pub fn OrderingBoard(props: OrderingBoardProps) -> Element {
    let mut lab = props.lab;
    let mut drop_target = use_signal(|| None::<usize>);

    let lab_read = lab.read();
    let Some(ordering) = lab_read.ordering() else {
        return rsx! {};
    };
    let blocks: Vec<CodeBlock> = ordering.arranged_blocks().into_iter().cloned().collect();
    let dragging = ordering.dragging();
    let last = blocks.len().saturating_sub(1);
    drop(lab_read);

    rsx! {
        div {
            class: "ordering",
            p { class: "muted", "Drag the blocks into the order the program should run." }
            ol {
                class: "ordering-list",
                for (index, block) in blocks.into_iter().enumerate() {
                    li {
                        key: "{block.id}",
                        class: if dragging == Some(index) {
                            "ordering-block dragging"
                        } else if drop_target() == Some(index) {
                            "ordering-block drop-target"
                        } else {
                            "ordering-block"
                        },
                        draggable: "true",
                        ondragstart: move |_| {
                            if let Some(ordering) = lab.write().ordering_mut() {
                                if let Err(e) = ordering.drag_start(index) {
                                    tracing::debug!(error = %e, "Drag start ignored");
                                }
                            }
                        },
                        ondragover: move |e| {
                            e.prevent_default();
                            if drop_target() != Some(index) {
                                drop_target.set(Some(index));
                            }
                        },
                        ondragleave: move |_| {
                            if drop_target() == Some(index) {
                                drop_target.set(None);
                            }
                        },
                        ondrop: move |e| {
                            e.prevent_default();
                            drop_target.set(None);
                            if let Some(ordering) = lab.write().ordering_mut() {
                                if let Err(e) = ordering.drop_on(index) {
                                    tracing::debug!(error = %e, "Drop ignored");
                                }
                            }
                        },
                        ondragend: move |_| {
                            drop_target.set(None);
                            if let Some(ordering) = lab.write().ordering_mut() {
                                ordering.drag_cancel();
                            }
                        },

                        div {
                            class: "block-head",
                            span { class: "block-handle", "⋮⋮" }
                            span { class: "block-label", "{block.label}" }
                            span {
                                class: "block-moves",
                                button {
                                    class: "btn btn-icon",
                                    title: "Move up",
                                    disabled: index == 0,
                                    onclick: move |_| move_block(lab, index, index.saturating_sub(1)),
                                    "↑"
                                }
                                button {
                                    class: "btn btn-icon",
                                    title: "Move down",
                                    disabled: index == last,
                                    onclick: move |_| move_block(lab, index, index + 1),
                                    "↓"
                                }
                            }
                        }
                        pre { class: "code", code { "{block.code}" } }
                    }
                }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| props.on_submit.call(()),
                "Check my order"
            }
        }
    }
}

fn move_block(mut lab: Signal<CodeLab>, from: usize, to: usize) {
    if let Some(ordering) = lab.write().ordering_mut() {
        if let Err(e) = ordering.move_block(from, to) {
            tracing::debug!(error = %e, "Move ignored");
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct OrderingReviewProps {
    /// Blocks as the learner arranged them
    pub blocks: Vec<CodeBlock>,
    /// Whether each position holds the expected block
    pub per_position: Vec<bool>,
}

/// Submitted arrangement with each slot marked right or wrong
#[component]
pub fn OrderingReview(props: OrderingReviewProps) -> Element {
    rsx! {
        ol {
            class: "ordering-list review",
            for (block, correct) in props.blocks.iter().zip(props.per_position.iter().copied()) {
                li {
                    key: "{block.id}",
                    class: if correct { "ordering-block correct" } else { "ordering-block wrong" },
                    div {
                        class: "block-head",
                        span { class: "block-mark", if correct { "✓" } else { "✗" } }
                        span { class: "block-label", "{block.label}" }
                    }
                }
            }
        }
    }
}
