//! Game route - one scenario game per slug

use dioxus::prelude::*;
use regresslab_domain::GameKind;

use super::{use_page_title, NotFound};
use crate::presentation::components::scenario_game::ScenarioGameView;

#[component]
pub fn GameRoute(slug: String) -> Element {
    match slug.parse::<GameKind>() {
        Ok(kind) => rsx! {
            GamePage { key: "{slug}", kind }
        },
        Err(_) => rsx! {
            NotFound { what: format!("game {slug}") }
        },
    }
}

#[component]
fn GamePage(kind: GameKind) -> Element {
    use_page_title(kind.title().to_string());

    rsx! {
        ScenarioGameView { kind }
    }
}
