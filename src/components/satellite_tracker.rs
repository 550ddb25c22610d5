use dioxus::prelude::*;

use crate::api::list_satellites;
use crate::components::polling::use_polling;
use crate::shared::types::{SatelliteDto, SatelliteStatus};
use crate::utils::format::format_km;

#[allow(non_snake_case)]
#[component]
pub fn SatelliteTracker() -> Element {
    let satellites =
        use_resource(|| async move { list_satellites(None).await.ok().unwrap_or_default() });
    use_polling(satellites, 10_000);
    let list = satellites.read_unchecked().clone().unwrap_or_default();

    let mut selected = use_signal(|| Option::<SatelliteDto>::None);

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-4",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "text-lg font-medium text-slate-200", "Active Satellites" }
                    p { class: "text-sm text-slate-400", "Real-time Low Earth Orbit satellite tracking" }
                }
                span { class: "px-2 py-1 rounded border border-slate-700 text-xs font-mono text-slate-300", "{list.len()} tracked" }
            }
            if list.is_empty() {
                div { class: "animate-pulse space-y-2",
                    div { class: "h-14 bg-slate-800 rounded" }
                    div { class: "h-14 bg-slate-800 rounded" }
                    div { class: "h-14 bg-slate-800 rounded" }
                }
            } else {
                div { class: "max-h-[400px] overflow-y-auto pr-2 space-y-2",
                    {
                        list.iter().map(|sat| {
                            let sat_cloned = sat.clone();
                            let status_class = match sat.status {
                                SatelliteStatus::Operational => "text-green-400",
                                SatelliteStatus::Degraded => "text-orange-400",
                            };
                            let alt = format_km(sat.position.altitude);
                            let lat = format!("{:.2}°", sat.position.latitude);
                            let lon = format!("{:.2}°", sat.position.longitude);
                            let vel = format!("{:.2} km/s", sat.velocity);
                            rsx! {
                                button {
                                    key: "{sat.id}",
                                    class: "w-full text-left p-3 rounded-lg border border-slate-800 hover:border-slate-600 hover:bg-slate-800/50 transition-colors",
                                    onclick: move |_| *selected.write() = Some(sat_cloned.clone()),
                                    div { class: "flex items-start justify-between",
                                        div { class: "flex-1",
                                            div { class: "font-semibold text-sm text-slate-200", "{sat.name}" }
                                            div { class: "text-xs text-slate-500 font-mono mt-1", "ID: {sat.id} · {sat.operator}" }
                                        }
                                        div { class: "text-right",
                                            span { class: "px-2 py-0.5 rounded bg-slate-800 text-xs font-mono text-slate-300", "{alt}" }
                                            div { class: "text-xs capitalize mt-1 {status_class}", "{sat.status.label()}" }
                                        }
                                    }
                                    div { class: "grid grid-cols-3 gap-2 mt-2 text-xs text-slate-400",
                                        div { "Lat: " span { class: "font-mono text-slate-300", "{lat}" } }
                                        div { "Lon: " span { class: "font-mono text-slate-300", "{lon}" } }
                                        div { "Vel: " span { class: "font-mono text-slate-300", "{vel}" } }
                                    }
                                }
                            }
                        })
                    }
                }
            }
            {
                match &*selected.read() {
                    Some(sat) => {
                        let alt = format_km(sat.position.altitude);
                        let incl = format!("{:.2}°", sat.inclination);
                        let vel = format!("{:.2} km/s", sat.velocity);
                        let lat = format!("{:.4}°", sat.position.latitude);
                        let lon = format!("{:.4}°", sat.position.longitude);
                        rsx! {
                            div { class: "p-4 rounded-lg bg-slate-900 border border-slate-800",
                                h3 { class: "font-semibold text-slate-200 mb-3", "Selected: {sat.name}" }
                                div { class: "grid grid-cols-2 md:grid-cols-3 gap-3 text-sm",
                                    div {
                                        span { class: "text-slate-500", "Type:" }
                                        div { class: "font-mono text-slate-300", "{sat.kind}" }
                                    }
                                    div {
                                        span { class: "text-slate-500", "Altitude:" }
                                        div { class: "font-mono text-slate-300", "{alt}" }
                                    }
                                    div {
                                        span { class: "text-slate-500", "Inclination:" }
                                        div { class: "font-mono text-slate-300", "{incl}" }
                                    }
                                    div {
                                        span { class: "text-slate-500", "Velocity:" }
                                        div { class: "font-mono text-slate-300", "{vel}" }
                                    }
                                    div {
                                        span { class: "text-slate-500", "Latitude:" }
                                        div { class: "font-mono text-slate-300", "{lat}" }
                                    }
                                    div {
                                        span { class: "text-slate-500", "Longitude:" }
                                        div { class: "font-mono text-slate-300", "{lon}" }
                                    }
                                }
                                p { class: "text-xs text-slate-500 mt-3", "{sat.purpose}" }
                            }
                        }
                    }
                    None => rsx!( Fragment {} ),
                }
            }
        }
    }
}
