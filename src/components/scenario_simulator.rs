use dioxus::prelude::*;

use crate::components::risk_badge_class;
use crate::shared::risk::{simulate, ScenarioInput, ScenarioOutcome};

/// What-if collision risk panel. Pure function of the three sliders; nothing
/// is fetched and no run is persisted.
#[allow(non_snake_case)]
#[component]
pub fn ScenarioSimulator() -> Element {
    let mut satellite_count = use_signal(|| 50u32);
    let mut debris_count = use_signal(|| 100u32);
    let mut maneuver_frequency = use_signal(|| 5u32);
    let mut outcome = use_signal(|| Option::<ScenarioOutcome>::None);

    let run = move |_| {
        let input = ScenarioInput {
            satellite_count: *satellite_count.read(),
            debris_count: *debris_count.read(),
            maneuver_frequency: *maneuver_frequency.read(),
        };
        *outcome.write() = Some(simulate(input));
    };

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-6",
            div {
                h2 { class: "text-lg font-medium text-slate-200", "Scenario Simulator" }
                p { class: "text-sm text-slate-400", "Test different orbital scenarios and assess collision risks" }
            }
            div { class: "space-y-4",
                div { class: "space-y-2",
                    div { class: "flex items-center justify-between text-sm",
                        label { class: "text-slate-300", "Satellite Count" }
                        span { class: "font-mono font-semibold text-slate-200", "{satellite_count}" }
                    }
                    input {
                        r#type: "range", min: "10", max: "200", step: "10",
                        class: "w-full accent-sky-500",
                        value: "{satellite_count}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<u32>() {
                                satellite_count.set(v);
                            }
                        },
                    }
                }
                div { class: "space-y-2",
                    div { class: "flex items-center justify-between text-sm",
                        label { class: "text-slate-300", "Debris Objects" }
                        span { class: "font-mono font-semibold text-slate-200", "{debris_count}" }
                    }
                    input {
                        r#type: "range", min: "50", max: "500", step: "50",
                        class: "w-full accent-sky-500",
                        value: "{debris_count}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<u32>() {
                                debris_count.set(v);
                            }
                        },
                    }
                }
                div { class: "space-y-2",
                    div { class: "flex items-center justify-between text-sm",
                        label { class: "text-slate-300", "Collision Avoidance Maneuvers (per month)" }
                        span { class: "font-mono font-semibold text-slate-200", "{maneuver_frequency}" }
                    }
                    input {
                        r#type: "range", min: "0", max: "20", step: "1",
                        class: "w-full accent-sky-500",
                        value: "{maneuver_frequency}",
                        oninput: move |e| {
                            if let Ok(v) = e.value().parse::<u32>() {
                                maneuver_frequency.set(v);
                            }
                        },
                    }
                }
            }
            button {
                class: "w-full py-2 rounded-lg bg-sky-500 hover:bg-sky-400 text-slate-950 font-semibold transition-colors",
                onclick: run,
                "Run Simulation"
            }
            {
                match &*outcome.read() {
                    Some(result) => {
                        let badge = risk_badge_class(result.risk);
                        let probability_label = format!("{:.3}%", result.collision_probability * 100.0);
                        rsx! {
                            div { class: "space-y-4 pt-4 border-t border-slate-800",
                                div { class: "flex items-center justify-between",
                                    span { class: "text-sm font-medium text-slate-300", "Simulation Results" }
                                    span { class: "px-2 py-0.5 rounded text-xs font-semibold uppercase text-slate-950 {badge}", "{result.risk.label()}" }
                                }
                                div { class: "grid grid-cols-2 gap-4",
                                    div { class: "p-3 rounded-lg bg-slate-900 border border-slate-800",
                                        div { class: "text-sm text-slate-400", "Health Score" }
                                        div { class: "text-2xl font-bold text-slate-200", "{result.score}" }
                                    }
                                    div { class: "p-3 rounded-lg bg-slate-900 border border-slate-800",
                                        div { class: "text-sm text-slate-400", "Collision Probability" }
                                        div { class: "text-2xl font-bold text-slate-200", "{probability_label}" }
                                    }
                                }
                                div { class: "p-4 rounded-lg bg-sky-500/10 border border-sky-500/20",
                                    div { class: "text-sm font-semibold text-slate-200 mb-2", "Recommendation" }
                                    p { class: "text-sm text-slate-400", "{result.recommendation}" }
                                }
                                div { class: "grid grid-cols-3 gap-2 text-xs text-slate-400",
                                    div {
                                        "Satellites: "
                                        span { class: "font-mono font-semibold text-slate-200", "{satellite_count}" }
                                    }
                                    div {
                                        "Debris: "
                                        span { class: "font-mono font-semibold text-slate-200", "{debris_count}" }
                                    }
                                    div {
                                        "Maneuvers: "
                                        span { class: "font-mono font-semibold text-slate-200", "{maneuver_frequency}/mo" }
                                    }
                                }
                            }
                        }
                    }
                    None => rsx!( Fragment {} ),
                }
            }
        }
    }
}
