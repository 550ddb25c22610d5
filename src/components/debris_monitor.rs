use dioxus::prelude::*;

use crate::api::list_debris;
use crate::components::polling::use_polling;
use crate::components::risk_badge_class;
use crate::shared::risk::RiskLevel;

const ALTITUDE_BANDS: [(&str, f64, f64); 4] = [
    ("200-500 km", 200.0, 500.0),
    ("500-1000 km", 500.0, 1000.0),
    ("1000-1500 km", 1000.0, 1500.0),
    ("1500+ km", 1500.0, f64::INFINITY),
];

#[allow(non_snake_case)]
#[component]
pub fn DebrisMonitor() -> Element {
    let debris = use_resource(|| async move { list_debris(None).await.ok().unwrap_or_default() });
    use_polling(debris, 15_000);
    let objects = debris.read_unchecked().clone().unwrap_or_default();

    let total = objects.len().max(1);
    let count_for = |risk: RiskLevel| objects.iter().filter(|d| d.risk_level == risk).count();
    let risk_rows = [
        ("Low Risk", RiskLevel::Low),
        ("Medium Risk", RiskLevel::Medium),
        ("High Risk", RiskLevel::High),
        ("Critical Risk", RiskLevel::Critical),
    ];

    let mean_confidence = if objects.is_empty() {
        0.0
    } else {
        objects.iter().map(|d| d.tracking_confidence).sum::<f64>() / objects.len() as f64
    };
    let mean_confidence_label = format!("{:.3}", mean_confidence);

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-6",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "text-lg font-medium text-slate-200", "Orbital Debris" }
                    p { class: "text-sm text-slate-400", "Space debris tracking and risk assessment" }
                }
                span { class: "px-2 py-1 rounded border border-slate-700 text-xs font-mono text-slate-300", "{objects.len()} objects" }
            }
            if objects.is_empty() {
                div { class: "animate-pulse space-y-2",
                    div { class: "h-5 bg-slate-800 rounded" }
                    div { class: "h-5 bg-slate-800 rounded" }
                }
            } else {
                div { class: "grid grid-cols-2 gap-4",
                    {
                        risk_rows.iter().map(|(label, risk)| {
                            let count = count_for(*risk);
                            let pct = count as f64 / total as f64 * 100.0;
                            let bar_class = risk_badge_class(*risk);
                            rsx! {
                                div { key: "{label}", class: "space-y-2",
                                    div { class: "flex items-center justify-between text-sm",
                                        span { class: "text-slate-400", "{label}" }
                                        span { class: "font-mono font-semibold text-slate-200", "{count}" }
                                    }
                                    div { class: "h-2 rounded bg-slate-800",
                                        div { class: "h-2 rounded {bar_class}", style: "width:{pct}%" }
                                    }
                                }
                            }
                        })
                    }
                }
                div { class: "pt-4 border-t border-slate-800",
                    h3 { class: "text-sm font-semibold text-slate-300 mb-3", "Debris Distribution" }
                    div { class: "space-y-2",
                        {
                            ALTITUDE_BANDS.iter().map(|(label, lo, hi)| {
                                let count = objects
                                    .iter()
                                    .filter(|d| d.position.altitude >= *lo && d.position.altitude < *hi)
                                    .count();
                                let pct = count as f64 / total as f64 * 100.0;
                                rsx! {
                                    div { key: "{label}", class: "flex items-center justify-between text-sm",
                                        span { class: "text-slate-400", "{label}" }
                                        div { class: "flex items-center gap-2",
                                            div { class: "w-32 h-2 rounded bg-slate-800",
                                                div { class: "h-2 rounded bg-sky-400", style: "width:{pct}%" }
                                            }
                                            span { class: "font-mono font-semibold w-8 text-right text-slate-200", "{count}" }
                                        }
                                    }
                                }
                            })
                        }
                    }
                }
                div { class: "pt-4 border-t border-slate-800 flex items-center justify-between text-sm",
                    span { class: "text-slate-400", "Average Tracking Confidence" }
                    span { class: "font-mono font-semibold text-slate-200", "{mean_confidence_label}" }
                }
            }
        }
    }
}
