pub mod climate_analytics;
pub mod compliance_checker;
pub mod debris_monitor;
pub mod environmental_events;
pub mod gauge;
pub mod kpi_banner;
pub mod orbit_health_card;
pub mod orbit_map;
pub mod polling;
pub mod satellite_tracker;
pub mod scenario_simulator;

pub use climate_analytics::ClimateAnalytics;
pub use compliance_checker::ComplianceChecker;
pub use debris_monitor::DebrisMonitor;
pub use environmental_events::EnvironmentalEvents;
pub use gauge::ScoreGauge;
pub use kpi_banner::KpiBanner;
pub use orbit_health_card::OrbitHealthCard;
pub use orbit_map::OrbitMap;
pub use satellite_tracker::SatelliteTracker;
pub use scenario_simulator::ScenarioSimulator;

use crate::shared::risk::RiskLevel;

pub(crate) fn risk_text_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "text-green-400",
        RiskLevel::Medium => "text-yellow-400",
        RiskLevel::High => "text-orange-400",
        RiskLevel::Critical => "text-red-400",
    }
}

pub(crate) fn risk_badge_class(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "bg-green-500",
        RiskLevel::Medium => "bg-yellow-500",
        RiskLevel::High => "bg-orange-500",
        RiskLevel::Critical => "bg-red-500",
    }
}
