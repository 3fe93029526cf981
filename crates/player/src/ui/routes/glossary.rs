//! Glossary route - searchable list of every term

use dioxus::prelude::*;
use regresslab_domain::ModuleId;

use super::use_page_title;

#[component]
pub fn GlossaryRoute() -> Element {
    use_page_title("Glossary".to_string());

    let mut query = use_signal(String::new);
    let mut module_filter = use_signal(|| None::<ModuleId>);

    let index = regresslab_shared::glossary();
    let filter = module_filter();
    let hits = index.search(&query.read(), filter.as_ref());
    let total = index.len();

    rsx! {
        section {
            class: "glossary",
            h1 { "Glossary" }
            p { class: "lead", "{total} terms, each with a plain definition and an everyday analogy." }

            div {
                class: "glossary-controls",
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "Search terms and definitions",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                select {
                    class: "input",
                    onchange: move |e| {
                        let value = e.value();
                        module_filter.set(ModuleId::parse(&value).ok());
                    },
                    option { value: "", "All modules" }
                    for module in regresslab_shared::modules() {
                        option {
                            key: "{module.id}",
                            value: "{module.id}",
                            selected: filter.as_ref() == Some(&module.id),
                            "Module {module.number}: {module.title}"
                        }
                    }
                }
            }

            if hits.is_empty() {
                div {
                    class: "empty-state",
                    p { "No terms match \"{query}\"." }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            query.set(String::new());
                            module_filter.set(None);
                        },
                        "Clear search"
                    }
                }
            } else {
                dl {
                    class: "glossary-list",
                    for entry in hits {
                        div {
                            key: "{entry.term}",
                            class: "glossary-entry",
                            dt { "{entry.term}" }
                            dd {
                                p { "{entry.definition}" }
                                p { class: "analogy", em { "Think of it as: " } "{entry.analogy}" }
                                if !entry.related.is_empty() {
                                    p {
                                        class: "related",
                                        "Related: "
                                        for related in index.related(entry) {
                                            {
                                                let term = related.term.clone();
                                                rsx! {
                                                    button {
                                                        key: "{related.term}",
                                                        class: "chip",
                                                        onclick: move |_| query.set(term.clone()),
                                                        "{related.term}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
