use dioxus::prelude::*;

use crate::api::orbit_health;
use crate::components::polling::use_polling;
use crate::components::{risk_text_class, ScoreGauge};
use crate::shared::risk::RiskLevel;
use crate::utils::format::format_local;

#[allow(non_snake_case)]
#[component]
pub fn OrbitHealthCard() -> Element {
    // ssr data (server waits), re-polled on the client every 5s
    let health = use_server_future(|| orbit_health(None))?;
    use_polling(health, 5_000);
    let health_v = health.read_unchecked();

    // Force one rerender after hydration so client formatting can apply
    let hydrated = use_signal(|| false);
    #[cfg(feature = "web")]
    {
        use_effect({
            let mut hydrated = hydrated.clone();
            move || {
                hydrated.set(true); // runs once on the client after hydration
            }
        });
    }

    rsx! {
        div { class: "w-full rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-8 space-y-6",
            {
                match &*health_v {
                    Some(Ok(h)) => {
                        let score_class = risk_text_class(RiskLevel::from_score(h.score));
                        let short_class = risk_text_class(h.short_term_risk);
                        let long_class = risk_text_class(h.long_term_risk);
                        let cp_pct = h.collision_probability * 100.0;
                        let dp_pct = h.debris_proximity * 100.0;
                        let cp_label = format!("{:.2}%", cp_pct);
                        let dp_label = format!("{:.1}%", dp_pct);
                        let grade_class = match h.compliance_grade.as_str() {
                            "A" => "bg-green-500",
                            "B" => "bg-yellow-500",
                            "C" => "bg-orange-500",
                            _ => "bg-red-500",
                        };
                        let shown_time = if *hydrated.read() {
                            format_local(&h.last_calculated)
                        } else {
                            h.last_calculated.clone()
                        };
                        let alert = if h.short_term_risk == RiskLevel::Critical
                            || h.long_term_risk == RiskLevel::Critical
                        {
                            Some((
                                "Critical Risk Detected",
                                "Immediate action required. High collision probability detected in LEO. Review satellite trajectories and implement collision avoidance maneuvers.",
                                "border-red-500/40 bg-red-500/10 text-red-300",
                            ))
                        } else if h.short_term_risk == RiskLevel::High
                            || h.long_term_risk == RiskLevel::High
                        {
                            Some((
                                "High Risk Warning",
                                "Elevated collision risk detected. Monitor satellite positions closely and prepare contingency plans.",
                                "border-orange-500/40 bg-orange-500/10 text-orange-300",
                            ))
                        } else {
                            None
                        };
                        rsx! {
                            div { class: "flex items-start justify-between",
                                div {
                                    h2 { class: "text-2xl font-semibold tracking-tight text-slate-200", "Orbit Health Index" }
                                    p { class: "text-sm text-slate-400", "Real-time LEO environmental assessment" }
                                }
                                span { class: "text-xs text-slate-500", "updated {shown_time}" }
                            }
                            div { class: "flex flex-col md:flex-row items-center gap-8",
                                ScoreGauge { score: h.score, size: 200, stroke: 14,
                                    div { class: "text-center",
                                        div { class: "text-5xl font-bold tabular-nums {score_class}", "{h.score}" }
                                        div { class: "text-xs text-slate-400", "out of 100" }
                                    }
                                }
                                div { class: "flex-1 grid grid-cols-1 sm:grid-cols-2 gap-4 w-full",
                                    div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                                        div { class: "text-sm text-slate-400 mb-1", "Short-Term Risk" }
                                        div { class: "text-2xl font-bold capitalize {short_class}", "{h.short_term_risk.label()}" }
                                        div { class: "text-xs text-slate-500 mt-1", "Next 30 days" }
                                    }
                                    div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                                        div { class: "text-sm text-slate-400 mb-1", "Long-Term Risk" }
                                        div { class: "text-2xl font-bold capitalize {long_class}", "{h.long_term_risk.label()}" }
                                        div { class: "text-xs text-slate-500 mt-1", "Next 12 months" }
                                    }
                                    div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                                        div { class: "text-sm text-slate-400 mb-2", "Collision Probability" }
                                        div { class: "text-2xl font-bold text-slate-200", "{cp_label}" }
                                        div { class: "h-2 mt-2 rounded bg-slate-800",
                                            div { class: "h-2 rounded bg-sky-400", style: "width:{cp_pct}%" }
                                        }
                                    }
                                    div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                                        div { class: "text-sm text-slate-400 mb-2", "Debris Proximity" }
                                        div { class: "text-2xl font-bold text-slate-200", "{dp_label}" }
                                        div { class: "h-2 mt-2 rounded bg-slate-800",
                                            div { class: "h-2 rounded bg-sky-400", style: "width:{dp_pct}%" }
                                        }
                                    }
                                }
                            }
                            div { class: "p-4 rounded-lg bg-slate-900 border border-slate-800 flex items-center justify-between",
                                div {
                                    div { class: "text-sm font-medium text-slate-400", "Compliance Grade" }
                                    div { class: "text-xs text-slate-500 mt-1", "ISO 24113 & NASA-STD 8719.14A" }
                                }
                                div { class: "text-4xl font-bold px-4 py-2 rounded-lg text-slate-950 {grade_class}", "{h.compliance_grade}" }
                            }
                            if let Some((title, body, classes)) = alert {
                                div { class: "p-4 rounded-lg border {classes}",
                                    div { class: "font-semibold", "{title}" }
                                    p { class: "text-sm mt-1", "{body}" }
                                }
                            }
                        }
                    }
                    Some(Err(_e)) => rsx! {
                        div { class: "text-center text-slate-300",
                            p { class: "text-lg", "Failed to load orbit health." }
                        }
                    },
                    None => rsx! {
                        div { class: "animate-pulse space-y-3",
                            div { class: "h-9 w-40 bg-slate-800 rounded" }
                            div { class: "h-48 w-48 bg-slate-800 rounded-full mx-auto" }
                            div { class: "h-5 w-64 bg-slate-800 rounded" }
                        }
                    },
                }
            }
        }
    }
}
