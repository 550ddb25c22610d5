use dioxus::prelude::*;

use crate::utils::format::format_count;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Kpis {
    active_satellites: i32,
    orbit_health: i32,
    compliance_score: i32,
    data_points: i64,
}

impl Default for Kpis {
    fn default() -> Self {
        Self {
            active_satellites: 48,
            orbit_health: 87,
            compliance_score: 94,
            data_points: 125_000,
        }
    }
}

/// Headline ticker. Purely cosmetic random walk, client-side only; the
/// numbers drift every 3 seconds within fixed bands.
#[allow(non_snake_case)]
#[component]
pub fn KpiBanner() -> Element {
    let kpis = use_signal(Kpis::default);

    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        let interval_handle: Signal<Option<Interval>> = use_signal(|| None);

        use_drop({
            let mut interval_handle = interval_handle.clone();
            move || {
                if let Some(h) = interval_handle.write().take() {
                    h.cancel();
                }
            }
        });

        use_effect({
            let mut interval_handle = interval_handle.clone();
            move || {
                let mut kpis = kpis.clone();
                let handle = Interval::new(3_000, move || {
                    let roll = |n: f64| (js_sys::Math::random() * n).floor() as i32;
                    let mut k = kpis.write();
                    k.active_satellites += roll(3.0) - 1;
                    k.orbit_health = (k.orbit_health + roll(5.0) - 2).clamp(80, 100);
                    k.compliance_score = (k.compliance_score + roll(3.0) - 1).clamp(90, 100);
                    k.data_points += roll(100.0) as i64;
                });
                interval_handle.set(Some(handle));
            }
        });
    }

    let k = *kpis.read();
    let data_points = format_count(k.data_points);

    rsx! {
        div { class: "border-y border-slate-800 bg-slate-900/40 py-4",
            div { class: "max-w-7xl mx-auto px-4 grid grid-cols-2 md:grid-cols-4 gap-6",
                div { class: "flex items-center gap-3",
                    div { class: "p-2 rounded-lg bg-sky-500/10 text-sky-400 text-lg", "🛰" }
                    div {
                        div { class: "text-2xl font-bold font-mono text-slate-200", "{k.active_satellites}" }
                        div { class: "text-xs text-slate-400", "Active Satellites" }
                    }
                }
                div { class: "flex items-center gap-3",
                    div { class: "p-2 rounded-lg bg-green-500/10 text-green-400 text-lg", "♥" }
                    div {
                        div { class: "text-2xl font-bold font-mono text-slate-200", "{k.orbit_health}%" }
                        div { class: "text-xs text-slate-400", "Orbit Health" }
                    }
                }
                div { class: "flex items-center gap-3",
                    div { class: "p-2 rounded-lg bg-blue-500/10 text-blue-400 text-lg", "🛡" }
                    div {
                        div { class: "text-2xl font-bold font-mono text-slate-200", "{k.compliance_score}%" }
                        div { class: "text-xs text-slate-400", "Compliance" }
                    }
                }
                div { class: "flex items-center gap-3",
                    div { class: "p-2 rounded-lg bg-purple-500/10 text-purple-400 text-lg", "📈" }
                    div {
                        div { class: "text-2xl font-bold font-mono text-slate-200", "{data_points}" }
                        div { class: "text-xs text-slate-400", "Data Points" }
                    }
                }
            }
        }
    }
}
