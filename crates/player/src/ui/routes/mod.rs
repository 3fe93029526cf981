//! Route table and the course layout shared by every page

use dioxus::prelude::*;

use crate::presentation::components::glossary_popover::GlossaryPopover;
use crate::{use_platform, ShellKind};

mod game;
mod glossary;
mod home;
mod module;
mod stories;

pub use game::GameRoute;
pub use glossary::GlossaryRoute;
pub use home::HomeRoute;
pub use module::ModuleRoute;
pub use stories::{StoriesRoute, StoryRoute};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(CourseLayout)]
        #[route("/")]
        HomeRoute {},
        #[route("/glossary")]
        GlossaryRoute {},
        #[route("/stories")]
        StoriesRoute {},
        #[route("/stories/:slug")]
        StoryRoute { slug: String },
        #[route("/modules/:slug")]
        ModuleRoute { slug: String },
        #[route("/games/:slug")]
        GameRoute { slug: String },
        #[route("/:..segments")]
        NotFoundRoute { segments: Vec<String> },
}

/// Set the document title while a page is shown
pub fn use_page_title(title: String) {
    let platform = use_platform();
    use_effect(use_reactive!(|title| {
        platform.set_page_title(&format!("{title} | RegressLab"));
    }));
}

/// Header, page outlet and the glossary popover
#[component]
fn CourseLayout() -> Element {
    let shell = use_context::<ShellKind>();

    let header = match shell {
        ShellKind::Desktop => rsx! {
            header {
                class: "course-header",
                Link { class: "brand", to: Route::HomeRoute {}, "RegressLab" }
                nav {
                    class: "course-nav",
                    Link { to: Route::HomeRoute {}, "Modules" }
                    Link { to: Route::StoriesRoute {}, "Stories" }
                    Link { to: Route::GlossaryRoute {}, "Glossary" }
                }
                span {
                    class: "shortcut-hint",
                    title: "Select a term and press Ctrl+Shift+G (Cmd+Shift+G on macOS)",
                    "Select a term to look it up"
                }
            }
        },
        ShellKind::Mobile => rsx! {
            MobileHeader {}
        },
    };

    rsx! {
        div {
            class: "course-layout",
            {header}
            main {
                class: "course-main",
                Outlet::<Route> {}
            }
            GlossaryPopover {}
        }
    }
}

/// Compact header whose navigation folds into a menu
#[component]
fn MobileHeader() -> Element {
    let mut menu_open = use_signal(|| false);
    let open = menu_open();

    rsx! {
        header {
            class: "course-header mobile",
            Link { class: "brand", to: Route::HomeRoute {}, "RegressLab" }
            button {
                class: "btn btn-icon menu-toggle",
                aria_expanded: "{open}",
                onclick: move |_| menu_open.toggle(),
                if open { "✕" } else { "☰" }
            }
        }
        if open {
            nav {
                class: "mobile-nav",
                // Following any link folds the menu away
                onclick: move |_| menu_open.set(false),
                Link { to: Route::HomeRoute {}, "Modules" }
                Link { to: Route::StoriesRoute {}, "Stories" }
                Link { to: Route::GlossaryRoute {}, "Glossary" }
            }
        }
    }
}

#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        NotFound { what: path }
    }
}

/// Shown for unknown paths and unknown slugs
#[component]
pub fn NotFound(what: String) -> Element {
    use_page_title("Not found".to_string());

    rsx! {
        section {
            class: "not-found",
            h1 { "Page not found" }
            p { "We couldn't find \"{what}\"." }
            Link { class: "btn btn-primary", to: Route::HomeRoute {}, "Back to the course" }
        }
    }
}
