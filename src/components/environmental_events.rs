use dioxus::prelude::*;

use crate::api::eonet_events;
use crate::utils::format::format_local;

const CATEGORY_FILTERS: [&str; 6] = [
    "all",
    "wildfires",
    "storms",
    "floods",
    "volcanoes",
    "drought",
];

/// Natural-events card. Fetched once on mount; EONET data changes on the
/// scale of hours, so this widget does not poll.
#[allow(non_snake_case)]
#[component]
pub fn EnvironmentalEvents() -> Element {
    let payload = use_resource(|| async move { eonet_events().await.ok() });
    let payload_v = payload.read_unchecked().clone().flatten();

    let mut filter = use_signal(|| "all");

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-4",
            div {
                h2 { class: "text-lg font-medium text-slate-200", "Natural Events Tracker" }
                p { class: "text-sm text-slate-400", "Environmental events from NASA EONET" }
            }
            {
                match payload_v {
                    Some(payload) => {
                        let active = *filter.read();
                        let events = payload
                            .events
                            .iter()
                            .filter(|e| {
                                active == "all"
                                    || e.categories
                                        .iter()
                                        .any(|c| c.title.to_lowercase().contains(active))
                            })
                            .take(20)
                            .cloned()
                            .collect::<Vec<_>>();
                        rsx! {
                            div { class: "flex flex-wrap gap-2",
                                {
                                    CATEGORY_FILTERS.iter().copied().map(|cat| {
                                        let cls = if active == cat {
                                            "px-3 py-1 rounded-full text-sm bg-sky-500 text-slate-950"
                                        } else {
                                            "px-3 py-1 rounded-full text-sm bg-slate-800 text-slate-300 hover:bg-slate-700"
                                        };
                                        rsx! {
                                            button {
                                                key: "{cat}",
                                                class: "{cls} transition-colors capitalize",
                                                onclick: move |_| *filter.write() = cat,
                                                "{cat}"
                                            }
                                        }
                                    })
                                }
                            }
                            if let Some(message) = &payload.message {
                                div { class: "p-3 rounded-lg border border-yellow-500/40 bg-yellow-500/10 text-sm text-yellow-300",
                                    "{message}"
                                }
                            }
                            if events.is_empty() {
                                p { class: "text-sm text-slate-400", "No events in this category." }
                            } else {
                                div { class: "max-h-[360px] overflow-y-auto pr-2 space-y-2",
                                    {
                                        events.iter().map(|event| {
                                            let when = event
                                                .geometry
                                                .first()
                                                .map(|g| format_local(&g.date))
                                                .unwrap_or_default();
                                            rsx! {
                                                div { key: "{event.id}", class: "p-3 rounded-lg border border-slate-800",
                                                    div { class: "flex items-start justify-between gap-2",
                                                        div { class: "font-semibold text-sm text-slate-200", "{event.title}" }
                                                        div { class: "flex gap-1",
                                                            {
                                                                event.categories.iter().map(|cat| rsx! {
                                                                    span { key: "{cat.id}", class: "px-2 py-0.5 rounded bg-slate-800 text-xs text-slate-300", "{cat.title}" }
                                                                })
                                                            }
                                                        }
                                                    }
                                                    if let Some(description) = &event.description {
                                                        p { class: "text-xs text-slate-400 mt-1", "{description}" }
                                                    }
                                                    if !when.is_empty() {
                                                        div { class: "text-xs text-slate-500 mt-1", "{when}" }
                                                    }
                                                }
                                            }
                                        })
                                    }
                                }
                            }
                        }
                    }
                    None => rsx! {
                        div { class: "animate-pulse space-y-2",
                            div { class: "h-14 bg-slate-800 rounded" }
                            div { class: "h-14 bg-slate-800 rounded" }
                        }
                    },
                }
            }
        }
    }
}
