use dioxus::prelude::*;

use crate::api::climate_metrics;
use crate::components::polling::use_polling;
use crate::utils::format::{format_compact, format_count};

#[allow(non_snake_case)]
#[component]
pub fn ClimateAnalytics() -> Element {
    let metrics =
        use_resource(|| async move { climate_metrics(None).await.ok().unwrap_or_default() });
    use_polling(metrics, 30_000);
    let rows = metrics.read_unchecked().clone().unwrap_or_default();

    // Selection is by index: the country list is fixed and ordered, so it
    // stays stable across refreshes even though every value changes.
    let mut selected = use_signal(|| 0usize);
    let mut hovered = use_signal(|| Option::<usize>::None);

    if rows.is_empty() {
        return rsx! {
            div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6",
                h2 { class: "text-lg font-medium text-slate-200", "Climate Analytics" }
                p { class: "text-sm text-slate-400", "Loading climate data..." }
            }
        };
    }

    let total_co2: i64 = rows.iter().map(|m| m.co2_emissions).sum();
    let mean_deforestation =
        rows.iter().map(|m| m.deforestation).sum::<f64>() / rows.len() as f64;
    let mean_water_stress =
        rows.iter().map(|m| m.water_stress as f64).sum::<f64>() / rows.len() as f64;
    let total_co2_label = format!("{} MT", format_compact(total_co2));
    let mean_deforestation_label = format!("{:.1}%", mean_deforestation);
    let mean_water_stress_label = format!("{:.0}", mean_water_stress);

    let low_stress = rows.iter().filter(|m| m.water_stress < 33).count();
    let mid_stress = rows
        .iter()
        .filter(|m| (33..66).contains(&m.water_stress))
        .count();
    let high_stress = rows.iter().filter(|m| m.water_stress >= 66).count();

    // CO2 bar chart geometry
    let height = 180.0f64;
    let padding = 24.0f64;
    let bar_w = 44.0f64;
    let bar_gap = 14.0f64;
    let n = rows.len() as f64;
    let width = (n * (bar_w + bar_gap) + padding * 2.0 - bar_gap).ceil();
    let max_co2 = rows.iter().map(|m| m.co2_emissions).max().unwrap_or(1) as f64;
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);

    let detail = rows.get(*selected.read()).cloned();
    let detail_deforestation = detail
        .as_ref()
        .map(|m| format!("{:.1}%", m.deforestation))
        .unwrap_or_default();

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-6",
            div {
                h2 { class: "text-lg font-medium text-slate-200", "Climate Analytics Dashboard" }
                p { class: "text-sm text-slate-400", "Satellite-backed environmental monitoring and analysis" }
            }

            // Headline aggregates
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                    div { class: "text-sm text-slate-400", "Global CO₂ Emissions" }
                    div { class: "text-3xl font-bold text-slate-200", "{total_co2_label}" }
                    div { class: "text-xs text-slate-500 mt-1", "Metric tons annually" }
                }
                div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                    div { class: "text-sm text-slate-400", "Deforestation Rate" }
                    div { class: "text-3xl font-bold text-slate-200", "{mean_deforestation_label}" }
                    div { class: "text-xs text-slate-500 mt-1", "Average annual loss" }
                }
                div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                    div { class: "text-sm text-slate-400", "Water Stress Index" }
                    div { class: "text-3xl font-bold text-slate-200", "{mean_water_stress_label}" }
                    div { class: "text-xs text-slate-500 mt-1", "Global average score" }
                }
            }

            // Country selector
            div { class: "grid grid-cols-2 md:grid-cols-5 gap-2",
                {
                    rows.iter().enumerate().map(|(i, m)| {
                        let cls = if *selected.read() == i {
                            "p-3 rounded-lg border text-left border-sky-500 bg-sky-500/10"
                        } else {
                            "p-3 rounded-lg border text-left border-slate-800 hover:border-slate-600 hover:bg-slate-800/50"
                        };
                        rsx! {
                            button {
                                key: "{m.country_code}",
                                class: "{cls} transition-colors",
                                onclick: move |_| *selected.write() = i,
                                div { class: "font-semibold text-sm text-slate-200", "{m.country}" }
                                div { class: "text-xs text-slate-500 mt-1", "{m.country_code}" }
                            }
                        }
                    })
                }
            }

            // Selected country detail
            if let Some(m) = detail {
                div { class: "p-4 rounded-lg bg-slate-900 border border-slate-800",
                    div { class: "flex items-center justify-between mb-3",
                        h3 { class: "font-semibold text-slate-200", "{m.country} Metrics" }
                        span { class: "px-2 py-0.5 rounded border border-slate-700 text-xs font-mono text-slate-300", "{m.country_code}" }
                    }
                    div { class: "grid grid-cols-2 md:grid-cols-3 gap-4 text-sm",
                        div {
                            div { class: "text-slate-500", "CO₂ Emissions" }
                            div { class: "text-xl font-bold text-slate-200", "{format_count(m.co2_emissions)}" }
                            div { class: "text-xs text-slate-500", "MT/year" }
                        }
                        div {
                            div { class: "text-slate-500", "Deforestation" }
                            div { class: "text-xl font-bold text-slate-200", "{detail_deforestation}" }
                            div { class: "text-xs text-slate-500", "Annual rate" }
                        }
                        div {
                            div { class: "text-slate-500", "Carbon Stock" }
                            div { class: "text-xl font-bold text-slate-200", "{format_count(m.carbon_stock)}" }
                            div { class: "text-xs text-slate-500", "MT stored" }
                        }
                        div {
                            div { class: "text-slate-500", "Water Stress" }
                            div { class: "text-xl font-bold text-slate-200", "{m.water_stress}" }
                            div { class: "text-xs text-slate-500", "Index score" }
                        }
                        div {
                            div { class: "text-slate-500", "Urban Emissions" }
                            div { class: "text-xl font-bold text-slate-200", "{format_count(m.urban_emissions)}" }
                            div { class: "text-xs text-slate-500", "MT/year" }
                        }
                    }
                }
            }

            // CO2 by country
            div { class: "space-y-3",
                div { class: "flex items-end justify-between",
                    h3 { class: "text-sm font-semibold text-slate-300", "CO₂ Emissions by Country" }
                    div { class: "text-xs text-slate-500", "Annual carbon dioxide emissions in metric tons" }
                }
                div { class: "w-full overflow-x-auto",
                    svg { class: "block min-w-full", view_box: "{view_box}", width: "100%", height: "{(height + padding*2.0).to_string()}",
                        line { x1: "{padding}", y1: "{padding + height}", x2: "{width - padding}", y2: "{padding + height}", stroke: "#1f2937", stroke_width: "1" }
                        {
                            rows.iter().enumerate().map(|(i, m)| {
                                let x = padding + (i as f64) * (bar_w + bar_gap);
                                let h = (m.co2_emissions as f64) / max_co2 * height;
                                let y = padding + (height - h);
                                rsx! {
                                    rect {
                                        key: "{m.country_code}", class: "text-sky-400/80", x: "{x}", y: "{y}", width: "{bar_w}", height: "{h}", fill: "currentColor", rx: "3",
                                        onmouseenter: move |_| *hovered.write() = Some(i),
                                        onmouseleave: move |_| *hovered.write() = None,
                                    }
                                    text { x: "{x + bar_w / 2.0}", y: "{height + padding + 14.0}", text_anchor: "middle", class: "fill-current text-slate-400 text-[10px]", "{m.country_code}" }
                                }
                            })
                        }
                        {
                            match *hovered.read() {
                                Some(i) if i < rows.len() => {
                                    let m = &rows[i];
                                    let x = padding + (i as f64) * (bar_w + bar_gap) + bar_w / 2.0;
                                    let h = (m.co2_emissions as f64) / max_co2 * height;
                                    let y = padding + (height - h);
                                    let value_label = format_count(m.co2_emissions);
                                    let cw = 7.0f64; // approx char width at 11px
                                    let content_w = (m.country.len().max(value_label.len()) as f64) * cw + 12.0;
                                    let tip_w = content_w.max(12.0).min(width - padding * 2.0);
                                    let tip_h = 36.0f64; // two lines
                                    let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                                    let tip_y = (y - 10.0 - tip_h).max(6.0);
                                    rsx! {
                                        g { key: "tooltip",
                                            rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                                            text { x: "{tip_x + 8.0}", y: "{tip_y + 16.0}", class: "fill-current text-[11px] text-slate-300", "{m.country}" }
                                            text { x: "{tip_x + 8.0}", y: "{tip_y + 30.0}", class: "fill-current text-[11px] text-slate-200", "{value_label}" }
                                        }
                                    }
                                }
                                _ => rsx!{ Fragment {} }
                            }
                        }
                    }
                }
            }

            // Water stress tiers
            div { class: "grid grid-cols-3 gap-4",
                div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                    div { class: "text-sm text-slate-400", "Low Stress" }
                    div { class: "text-2xl font-bold text-green-400", "{low_stress}" }
                    div { class: "text-xs text-slate-500 mt-1", "Countries" }
                }
                div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                    div { class: "text-sm text-slate-400", "Medium Stress" }
                    div { class: "text-2xl font-bold text-yellow-400", "{mid_stress}" }
                    div { class: "text-xs text-slate-500 mt-1", "Countries" }
                }
                div { class: "p-4 rounded-lg border border-slate-800 bg-slate-900",
                    div { class: "text-sm text-slate-400", "High Stress" }
                    div { class: "text-2xl font-bold text-red-400", "{high_stress}" }
                    div { class: "text-xs text-slate-500 mt-1", "Countries" }
                }
            }
        }
    }
}
