//! AI recommendations panel.
//!
//! Fetches `/api/recommendations` whenever the current reading changes and
//! renders the set as lists.

use crate::state::AppState;
use crate::web_fetch::WebSource;
use dioxus::prelude::*;
use zc_core::config::DashboardConfig;
use zc_core::model::RecommendationSet;
use zc_core::recommendations::{RecommendationState, LOADING_MESSAGE, UNAVAILABLE_MESSAGE};
use zc_core::source::DashboardSource;

#[component]
pub fn Recommendations() -> Element {
    let mut state = use_context::<AppState>();
    let config = use_context::<DashboardConfig>();

    // Re-runs whenever `state.current` changes
    use_effect(move || {
        let current = state.current.read().clone();
        let Some(request) = state.recommendations.write().observe(current.as_ref()) else {
            return;
        };
        let source = WebSource::new(config.api_base.clone());
        let team_context = config.team_context.clone();
        spawn(async move {
            let outcome = source.fetch_recommendations(team_context.as_deref()).await;
            state.recommendations.write().complete(request, outcome);
        });
    });

    let rec_state = state.recommendations.read().state().clone();
    match rec_state {
        RecommendationState::Loading => rsx! {
            div { class: "loading-small", "{LOADING_MESSAGE}" }
        },
        RecommendationState::Idle | RecommendationState::Unavailable => rsx! {
            div { class: "no-data", "{UNAVAILABLE_MESSAGE}" }
        },
        RecommendationState::Loaded(set) => rsx! {
            RecommendationList { set }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct RecommendationListProps {
    set: RecommendationSet,
}

#[component]
fn RecommendationList(props: RecommendationListProps) -> Element {
    let summary_heading = RecommendationSet::SUMMARY_HEADING;
    let sections: Vec<(&'static str, Vec<String>)> = props
        .set
        .sections()
        .into_iter()
        .map(|(heading, items)| (heading, items.to_vec()))
        .collect();
    let context = props.set.context().map(str::to_string);

    rsx! {
        div {
            class: "recommendations",
            div {
                class: "rec-section",
                h3 { "{summary_heading}" }
                p { "{props.set.summary}" }
            }
            for (heading, items) in sections.into_iter() {
                div {
                    key: "{heading}",
                    class: "rec-section",
                    h3 { "{heading}" }
                    ul {
                        for (i, item) in items.iter().enumerate() {
                            li { key: "{i}", "{item}" }
                        }
                    }
                }
            }
            if let Some(context) = context {
                div {
                    class: "rec-context",
                    em { "{context}" }
                }
            }
        }
    }
}
