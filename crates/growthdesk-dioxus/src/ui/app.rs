use dioxus::prelude::*;
use growthdesk_config::Config;

use super::pages::{
    Dashboard, ExperimentDetail, ExperimentsPage, KnowledgePage, NewsletterPage, PromptDetail,
    PromptsPage, ReviewDetail, ReviewsPage, TermDetail, ToolsPage,
};
use super::services::Services;

const APP_CSS: &str = include_str!("../assets/growthdesk.css");

/// Navigation target. Detail routes carry the page id they show.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Dashboard,
    Newsletter,
    Reviews,
    Review(String),
    Knowledge,
    Term(String),
    Experiments,
    Experiment(String),
    Tools,
    Prompts,
    Prompt(String),
}

const SECTIONS: [(Route, &str); 7] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Newsletter, "My Newsletter"),
    (Route::Reviews, "Reviews"),
    (Route::Knowledge, "Knowledge"),
    (Route::Experiments, "Experiments"),
    (Route::Tools, "Tools & Stack"),
    (Route::Prompts, "Prompt Library"),
];

#[component]
pub fn App(config: Config) -> Element {
    use_context_provider(|| Services::new(config.clone()));
    let mut route = use_signal(|| Route::Dashboard);
    let on_navigate = Callback::new(move |next: Route| route.set(next));

    rsx! {
        style { {APP_CSS} }
        div { class: "app-container",
            nav { class: "sidebar",
                div { class: "sidebar-brand",
                    h1 { "growthdesk" }
                    p { "Ellen's digital garden" }
                }
                ul { class: "nav-list",
                    for (section, label) in SECTIONS {
                        NavItem {
                            section,
                            label,
                            current: route(),
                            on_navigate
                        }
                    }
                }
            }
            main { class: "main-content",
                {page(route(), on_navigate)}
            }
        }
    }
}

#[component]
fn NavItem(
    section: Route,
    label: &'static str,
    current: Route,
    on_navigate: Callback<Route>,
) -> Element {
    let class = if section_of(&current) == section {
        "nav-item active"
    } else {
        "nav-item"
    };
    let target = section.clone();

    rsx! {
        li {
            class: "{class}",
            onclick: move |_| on_navigate.call(target.clone()),
            "{label}"
        }
    }
}

fn page(route: Route, on_navigate: Callback<Route>) -> Element {
    match route {
        Route::Dashboard => rsx! { Dashboard { on_navigate } },
        Route::Newsletter => rsx! { NewsletterPage {} },
        Route::Reviews => rsx! { ReviewsPage { on_navigate } },
        Route::Review(id) => rsx! { ReviewDetail { key: "{id}", id: id.clone(), on_navigate } },
        Route::Knowledge => rsx! { KnowledgePage { on_navigate } },
        Route::Term(id) => rsx! { TermDetail { key: "{id}", id: id.clone(), on_navigate } },
        Route::Experiments => rsx! { ExperimentsPage { on_navigate } },
        Route::Experiment(id) => {
            rsx! { ExperimentDetail { key: "{id}", id: id.clone(), on_navigate } }
        }
        Route::Tools => rsx! { ToolsPage {} },
        Route::Prompts => rsx! { PromptsPage { on_navigate } },
        Route::Prompt(id) => rsx! { PromptDetail { key: "{id}", id: id.clone(), on_navigate } },
    }
}

/// Collapse a detail route to the section it belongs to, for nav highlighting.
fn section_of(route: &Route) -> Route {
    match route {
        Route::Review(_) => Route::Reviews,
        Route::Term(_) => Route::Knowledge,
        Route::Experiment(_) => Route::Experiments,
        Route::Prompt(_) => Route::Prompts,
        other => other.clone(),
    }
}
