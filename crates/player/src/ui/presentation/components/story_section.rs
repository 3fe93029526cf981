//! Story section renderer; each section kind has its own look

use dioxus::prelude::*;
use regresslab_domain::StorySection;

#[derive(Props, Clone, PartialEq)]
pub struct StorySectionViewProps {
    pub section: StorySection,
}

#[component]
pub fn StorySectionView(props: StorySectionViewProps) -> Element {
    match props.section {
        StorySection::Narrative { text } => rsx! {
            p { class: "story-narrative", "{text}" }
        },
        StorySection::Dialogue { speaker, text } => rsx! {
            blockquote {
                class: "story-dialogue",
                span { class: "speaker", "{speaker}" }
                p { "{text}" }
            }
        },
        StorySection::Lesson { title, text } => rsx! {
            div {
                class: "story-lesson",
                h4 { "{title}" }
                p { "{text}" }
            }
        },
        StorySection::Revelation { text } => rsx! {
            div {
                class: "story-revelation",
                p { "{text}" }
            }
        },
    }
}
