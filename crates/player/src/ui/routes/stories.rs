//! Story routes - the story list and a single story

use dioxus::prelude::*;
use regresslab_domain::{Story, StoryId};

use super::{use_page_title, NotFound, Route};
use crate::presentation::components::story_section::StorySectionView;

#[component]
pub fn StoriesRoute() -> Element {
    use_page_title("Stories".to_string());

    rsx! {
        section {
            class: "story-index",
            h1 { "Stories" }
            p { class: "lead", "Short tales where a regression idea saves the day, or ruins it." }
            for story in regresslab_shared::stories() {
                Link {
                    key: "{story.id}",
                    class: "story-card",
                    to: Route::StoryRoute { slug: story.id.to_string() },
                    h3 { "{story.title}" }
                    p { class: "muted", "{story.subtitle}" }
                    span { class: "reading-time", "{story.reading_minutes()} min read" }
                }
            }
        }
    }
}

#[component]
pub fn StoryRoute(slug: String) -> Element {
    let story = StoryId::parse(&slug)
        .ok()
        .and_then(|id| regresslab_shared::story(&id));

    match story {
        Some(story) => rsx! {
            StoryPage { key: "{slug}", story: story.clone() }
        },
        None => rsx! {
            NotFound { what: format!("story {slug}") }
        },
    }
}

#[component]
fn StoryPage(story: Story) -> Element {
    use_page_title(story.title.clone());

    let module = story.module.as_ref().and_then(regresslab_shared::module);

    rsx! {
        article {
            class: "story",
            header {
                h1 { "{story.title}" }
                p { class: "lead", "{story.subtitle}" }
                span { class: "reading-time", "{story.reading_minutes()} min read" }
            }
            for (i, section) in story.sections.iter().enumerate() {
                StorySectionView { key: "{i}", section: section.clone() }
            }
            footer {
                class: "story-footer",
                if let Some(module) = module {
                    Link {
                        class: "btn btn-primary",
                        to: Route::ModuleRoute { slug: module.id.to_string() },
                        "Continue with Module {module.number}: {module.title}"
                    }
                }
                Link { class: "btn btn-link", to: Route::StoriesRoute {}, "All stories" }
            }
        }
    }
}
