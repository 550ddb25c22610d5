use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComplianceStatus {
    Compliant,
    NonCompliant,
    Warning,
}

impl ComplianceStatus {
    fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::NonCompliant => "non-compliant",
            ComplianceStatus::Warning => "warning",
        }
    }

    fn classes(self) -> (&'static str, &'static str) {
        match self {
            ComplianceStatus::Compliant => ("text-green-400", "✓"),
            ComplianceStatus::NonCompliant => ("text-red-400", "✗"),
            ComplianceStatus::Warning => ("text-yellow-400", "!"),
        }
    }
}

struct ComplianceItem {
    id: &'static str,
    standard: &'static str,
    requirement: &'static str,
    status: ComplianceStatus,
    description: &'static str,
}

const ITEMS: [ComplianceItem; 8] = [
    ComplianceItem {
        id: "iso-1",
        standard: "ISO 24113",
        requirement: "Orbital Debris Mitigation",
        status: ComplianceStatus::Compliant,
        description: "Satellite design includes end-of-life disposal plan",
    },
    ComplianceItem {
        id: "iso-2",
        standard: "ISO 24113",
        requirement: "Collision Avoidance",
        status: ComplianceStatus::Compliant,
        description: "Active collision avoidance system operational",
    },
    ComplianceItem {
        id: "nasa-1",
        standard: "NASA-STD 8719.14A",
        requirement: "Post-Mission Disposal",
        status: ComplianceStatus::Warning,
        description: "Disposal timeline within acceptable range but approaching limit",
    },
    ComplianceItem {
        id: "nasa-2",
        standard: "NASA-STD 8719.14A",
        requirement: "Debris Release Prevention",
        status: ComplianceStatus::Compliant,
        description: "No unintended debris release detected",
    },
    ComplianceItem {
        id: "iso-3",
        standard: "ISO 24113",
        requirement: "Passivation",
        status: ComplianceStatus::Compliant,
        description: "All energy sources can be safely depleted",
    },
    ComplianceItem {
        id: "nasa-3",
        standard: "NASA-STD 8719.14A",
        requirement: "Trackability",
        status: ComplianceStatus::Compliant,
        description: "Satellite meets minimum size requirements for tracking",
    },
    ComplianceItem {
        id: "iso-4",
        standard: "ISO 24113",
        requirement: "Operational Procedures",
        status: ComplianceStatus::Compliant,
        description: "Documented procedures for anomaly response",
    },
    ComplianceItem {
        id: "nasa-4",
        standard: "NASA-STD 8719.14A",
        requirement: "Casualty Risk Assessment",
        status: ComplianceStatus::Compliant,
        description: "Re-entry casualty risk below 1:10,000 threshold",
    },
];

#[allow(non_snake_case)]
#[component]
pub fn ComplianceChecker() -> Element {
    let compliant = ITEMS
        .iter()
        .filter(|i| i.status == ComplianceStatus::Compliant)
        .count();

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-4",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "text-lg font-medium text-slate-200", "Compliance Checker" }
                    p { class: "text-sm text-slate-400", "Debris mitigation standards assessment" }
                }
                span { class: "px-2 py-1 rounded border border-slate-700 text-xs font-mono text-slate-300",
                    "{compliant}/{ITEMS.len()} compliant"
                }
            }
            div { class: "space-y-2",
                {
                    ITEMS.iter().map(|item| {
                        let (status_class, glyph) = item.status.classes();
                        rsx! {
                            div { key: "{item.id}", class: "p-3 rounded-lg border border-slate-800 flex items-start gap-3",
                                span { class: "font-bold text-lg leading-none mt-0.5 {status_class}", "{glyph}" }
                                div { class: "flex-1",
                                    div { class: "flex items-center justify-between",
                                        div { class: "font-semibold text-sm text-slate-200", "{item.requirement}" }
                                        span { class: "text-xs uppercase {status_class}", "{item.status.label()}" }
                                    }
                                    div { class: "text-xs text-slate-500 font-mono mt-0.5", "{item.standard}" }
                                    p { class: "text-xs text-slate-400 mt-1", "{item.description}" }
                                }
                            }
                        }
                    })
                }
            }
        }
    }
}
