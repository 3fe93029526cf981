//! Scenario games: intro, a run of scenario cards, then tiered results
//!
//! Every game shares this component. What differs per game is the pool of
//! cards from the catalog and the small visual drawn beside each card.

use dioxus::prelude::*;
use regresslab_domain::games::visuals::preview;
use regresslab_domain::{GameKind, GamePhase, Scenario, ScenarioGame, ScenarioParams};

use crate::application::services::PlatformRandom;
use crate::routes::Route;
use crate::use_platform;

#[derive(Props, Clone, PartialEq)]
pub struct ScenarioGameViewProps {
    pub kind: GameKind,
}

#[component]
pub fn ScenarioGameView(props: ScenarioGameViewProps) -> Element {
    let platform = use_platform();
    let kind = props.kind;

    let mut game = use_signal(move || {
        let pool = regresslab_shared::scenario_pool(kind)?.clone();
        ScenarioGame::new(pool)
            .map_err(|e| tracing::error!(game = kind.slug(), error = %e, "Scenario pool is invalid"))
            .ok()
    });
    let mut hovered = use_signal(|| None::<String>);

    let start = move |_: MouseEvent| {
        let mut rng = PlatformRandom::new(platform.clone());
        if let Some(game) = game.write().as_mut() {
            match game.start(&mut rng) {
                Ok(()) => tracing::debug!(game = kind.slug(), "Game started"),
                Err(e) => tracing::debug!(error = %e, "Start ignored"),
            }
        }
        hovered.set(None);
    };

    let game_read = game.read();
    let Some(state) = game_read.as_ref() else {
        return rsx! {
            p { class: "muted", "This game is unavailable." }
        };
    };

    let body = match state.phase() {
        GamePhase::Intro => rsx! {
            div {
                class: "game-intro",
                p { "{kind.intro()}" }
                p { class: "muted", "{kind.rounds()} rounds. Pick one answer per card." }
                button { class: "btn btn-primary", onclick: start, "Start" }
            }
        },
        GamePhase::Playing => {
            let Some(scenario) = state.current().cloned() else {
                return rsx! {};
            };
            let selected = state.selected().map(str::to_string);
            let round = state.round() + 1;
            let total = state.total_rounds();
            let score = state.score();
            let is_last = round >= total;

            // Preview the hovered choice, else the locked one
            let focus = hovered().or_else(|| selected.clone());
            let focus_value = focus
                .as_deref()
                .and_then(|id| scenario.choice(id))
                .and_then(|c| c.value);

            rsx! {
                div {
                    class: "game-status",
                    span { "Round {round} of {total}" }
                    span { "Score {score}" }
                }
                ScenarioCard {
                    scenario: scenario.clone(),
                    focus_value,
                }
                div {
                    class: "choice-grid",
                    for choice in scenario.choices.iter() {
                        {
                            let id = choice.id.clone();
                            let hover_id = choice.id.clone();
                            let class = match &selected {
                                Some(_) if choice.id == scenario.correct => "choice correct",
                                Some(picked) if *picked == choice.id => "choice wrong",
                                Some(_) => "choice dimmed",
                                None => "choice",
                            };
                            rsx! {
                                button {
                                    key: "{choice.id}",
                                    class,
                                    disabled: selected.is_some(),
                                    onmouseenter: move |_| hovered.set(Some(hover_id.clone())),
                                    onmouseleave: move |_| hovered.set(None),
                                    onclick: move |_| {
                                        if let Some(game) = game.write().as_mut() {
                                            if let Err(e) = game.choose(&id) {
                                                tracing::debug!(error = %e, "Choice ignored");
                                            }
                                        }
                                    },
                                    "{choice.label}"
                                }
                            }
                        }
                    }
                }
                if let Some(picked) = selected.as_ref() {
                    div {
                        class: if *picked == scenario.correct { "game-explanation correct" } else { "game-explanation wrong" },
                        strong {
                            if *picked == scenario.correct { "Correct. " } else { "Not this time. " }
                        }
                        "{scenario.explanation}"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            hovered.set(None);
                            if let Some(game) = game.write().as_mut() {
                                if let Err(e) = game.next() {
                                    tracing::debug!(error = %e, "Next ignored");
                                }
                            }
                        },
                        if is_last { "See results" } else { "Next scenario" }
                    }
                }
            }
        }
        GamePhase::Results => {
            let Some(results) = state.results() else {
                return rsx! {};
            };
            let outcomes = state.outcomes().to_vec();
            let module = regresslab_shared::module_for_game(kind);

            rsx! {
                div {
                    class: "game-results",
                    h3 { "{results.tier.headline()}" }
                    p { class: "game-score", "{results.score} / {results.total} ({results.percentage}%)" }
                    p { "{results.feedback}" }
                    ul {
                        class: "outcome-list",
                        for (round, outcome) in outcomes.iter().enumerate().map(|(i, o)| (i + 1, o)) {
                            li {
                                key: "{outcome.scenario_id}",
                                class: if outcome.correct { "outcome correct" } else { "outcome wrong" },
                                "Round {round}: "
                                if outcome.correct { "correct" } else { "missed" }
                            }
                        }
                    }
                    div {
                        class: "actions",
                        button { class: "btn btn-primary", onclick: start, "Play again" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                if let Some(game) = game.write().as_mut() {
                                    game.restart();
                                }
                            },
                            "Back to intro"
                        }
                        if let Some(module) = module {
                            Link {
                                class: "btn btn-secondary",
                                to: Route::ModuleRoute { slug: module.id.to_string() },
                                "Review module {module.number}"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "scenario-game",
            h1 { "{kind.title()}" }
            {body}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ScenarioCardProps {
    scenario: Scenario,
    /// Numeric value of the highlighted choice
    focus_value: Option<f64>,
}

#[component]
fn ScenarioCard(props: ScenarioCardProps) -> Element {
    let scenario = &props.scenario;
    let bars = preview(&scenario.params, props.focus_value);

    let steps = match &scenario.params {
        ScenarioParams::DataLeakage { steps } => Some(("Pipeline", steps.clone())),
        ScenarioParams::PipelineOrder { completed } => Some(("Done so far", completed.clone())),
        _ => None,
    };

    rsx! {
        div {
            class: "scenario-card",
            p { class: "scenario-prompt", "{scenario.prompt}" }

            if !bars.is_empty() {
                div {
                    class: "bar-chart",
                    for bar in bars {
                        div {
                            key: "{bar.label}",
                            class: "bar",
                            div {
                                class: "bar-track",
                                div { class: "bar-fill", style: format!("height: {:.0}%;", bar.height_pct) }
                            }
                            span { class: "bar-value", "{format_value(bar.value)}" }
                            span { class: "bar-label", "{bar.label}" }
                        }
                    }
                }
            }

            if let Some((heading, items)) = steps {
                div {
                    class: "step-list",
                    span { class: "muted", "{heading}" }
                    if items.is_empty() {
                        p { class: "muted", "Nothing yet." }
                    }
                    ol {
                        for (i, item) in items.iter().enumerate() {
                            li { key: "{i}", "{item}" }
                        }
                    }
                }
            }
        }
    }
}

/// Whole numbers without decimals, large counts with thousands separators
fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() >= 1000.0 {
        let digits = format!("{:.0}", value.abs());
        let mut grouped = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if value < 0.0 {
            grouped.insert(0, '-');
        }
        grouped
    } else if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn values_are_formatted_for_bar_labels() {
        assert_eq!(format_value(25.0), "25");
        assert_eq!(format_value(1_000_000.0), "1,000,000");
        assert_eq!(format_value(950_000.0), "950,000");
        assert_eq!(format_value(0.126), "0.13");
        assert_eq!(format_value(-1500.0), "-1,500");
    }
}
