use dioxus::prelude::*;

use crate::api::{list_debris, list_satellites};
use crate::components::polling::use_polling;
use crate::shared::risk::RiskLevel;
use crate::shared::types::SatelliteStatus;

/// Flat ground-track map of the tracked population. Longitude maps straight
/// to x and latitude to y (equirectangular), which is all the fidelity the
/// demo data supports.
#[allow(non_snake_case)]
#[component]
pub fn OrbitMap() -> Element {
    let scene = use_resource(|| async move {
        let satellites = list_satellites(None).await.ok().unwrap_or_default();
        let debris = list_debris(None).await.ok().unwrap_or_default();
        (satellites, debris)
    });
    use_polling(scene, 10_000);
    let (satellites, debris) = scene.read_unchecked().clone().unwrap_or_default();

    let width = 720.0f64;
    let height = 360.0f64;
    let project = |lon: f64, lat: f64| ((lon + 180.0) / 360.0 * width, (90.0 - lat) / 180.0 * height);

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-4",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "text-lg font-medium text-slate-200", "Orbital Population Map" }
                    p { class: "text-sm text-slate-400", "Ground tracks of tracked satellites and debris" }
                }
                div { class: "flex items-center gap-4 text-xs text-slate-400",
                    div { class: "flex items-center gap-1",
                        span { class: "inline-block w-2 h-2 rounded-full bg-sky-400" }
                        "Satellite"
                    }
                    div { class: "flex items-center gap-1",
                        span { class: "inline-block w-2 h-2 rounded-full bg-orange-400" }
                        "Debris"
                    }
                }
            }
            div { class: "w-full overflow-x-auto",
                svg { class: "block min-w-full rounded-lg border border-slate-800 bg-slate-950", view_box: "0 0 {width} {height}", width: "100%",
                    // graticule every 30 degrees
                    {
                        (1..6).map(|i| {
                            let y = i as f64 * height / 6.0;
                            rsx! {
                                line { key: "lat-{i}", x1: "0", y1: "{y}", x2: "{width}", y2: "{y}", stroke: "#1e293b", stroke_width: "1" }
                            }
                        })
                    }
                    {
                        (1..12).map(|i| {
                            let x = i as f64 * width / 12.0;
                            rsx! {
                                line { key: "lon-{i}", x1: "{x}", y1: "0", x2: "{x}", y2: "{height}", stroke: "#1e293b", stroke_width: "1" }
                            }
                        })
                    }
                    {
                        debris.iter().map(|d| {
                            let (x, y) = project(d.position.longitude, d.position.latitude);
                            let cls = match d.risk_level {
                                RiskLevel::Low => "text-slate-500",
                                RiskLevel::Medium => "text-yellow-500/80",
                                RiskLevel::High => "text-orange-400",
                                RiskLevel::Critical => "text-red-400",
                            };
                            rsx! {
                                circle { key: "{d.id}", class: "{cls}", cx: "{x}", cy: "{y}", r: "1.4", fill: "currentColor" }
                            }
                        })
                    }
                    {
                        satellites.iter().map(|sat| {
                            let (x, y) = project(sat.position.longitude, sat.position.latitude);
                            let cls = match sat.status {
                                SatelliteStatus::Operational => "text-sky-400",
                                SatelliteStatus::Degraded => "text-orange-300",
                            };
                            rsx! {
                                circle { key: "{sat.id}", class: "{cls}", cx: "{x}", cy: "{y}", r: "2.4", fill: "currentColor" }
                            }
                        })
                    }
                }
            }
            div { class: "text-xs text-slate-500",
                "{satellites.len()} satellites · {debris.len()} debris objects tracked"
            }
        }
    }
}
