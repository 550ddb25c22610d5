use dioxus::prelude::*;

use crate::components::{
    ClimateAnalytics, ComplianceChecker, DebrisMonitor, EnvironmentalEvents, KpiBanner,
    OrbitHealthCard, OrbitMap, SatelliteTracker, ScenarioSimulator,
};
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        div { class: "min-h-screen bg-slate-950 text-slate-100",
            header { class: "max-w-7xl mx-auto px-6 pt-10 pb-6",
                h1 { class: "text-3xl font-semibold tracking-tight text-slate-100", "LEO Environmental Lab" }
                p { class: "text-slate-400 mt-1", "Orbital debris, satellite and climate telemetry at a glance" }
            }
            KpiBanner {}
            main { class: "max-w-7xl mx-auto px-6 py-8 space-y-8",
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8 items-start",
                    OrbitHealthCard {}
                    ScenarioSimulator {}
                }
                OrbitMap {}
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8 items-start",
                    SatelliteTracker {}
                    DebrisMonitor {}
                }
                ClimateAnalytics {}
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8 items-start",
                    EnvironmentalEvents {}
                    ComplianceChecker {}
                }
            }
        }
    }
}
