use serde::{Deserialize, Serialize};

use crate::shared::risk::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionDto {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SatelliteStatus {
    Operational,
    Degraded,
}

impl SatelliteStatus {
    pub fn label(self) -> &'static str {
        match self {
            SatelliteStatus::Operational => "operational",
            SatelliteStatus::Degraded => "degraded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteDto {
    pub id: String,
    pub name: String,
    pub operator: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub purpose: String,
    pub position: PositionDto,
    pub velocity: f64,
    pub inclination: f64,
    pub status: SatelliteStatus,
    #[serde(rename = "launchDate")]
    pub launch_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebrisDto {
    pub id: String,
    pub source: String,
    pub position: PositionDto,
    pub size: f64,
    pub velocity: f64,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "trackingConfidence")]
    pub tracking_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateMetricDto {
    pub country: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    #[serde(rename = "co2Emissions")]
    pub co2_emissions: i64,
    pub deforestation: f64,
    #[serde(rename = "carbonStock")]
    pub carbon_stock: i64,
    #[serde(rename = "waterStress")]
    pub water_stress: i32,
    #[serde(rename = "urbanEmissions")]
    pub urban_emissions: i64,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitHealthDto {
    pub score: i32,
    #[serde(rename = "shortTermRisk")]
    pub short_term_risk: RiskLevel,
    #[serde(rename = "longTermRisk")]
    pub long_term_risk: RiskLevel,
    #[serde(rename = "collisionProbability")]
    pub collision_probability: f64,
    #[serde(rename = "debrisProximity")]
    pub debris_proximity: f64,
    #[serde(rename = "complianceGrade")]
    pub compliance_grade: String,
    #[serde(rename = "lastCalculated")]
    pub last_calculated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCategoryDto {
    pub id: String,
    pub title: String,
}

// EONET geometry is heterogeneous (points are [lon, lat], polygons nest
// deeper), so coordinates stay an opaque JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventGeometryDto {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<EventCategoryDto>,
    #[serde(default)]
    pub geometry: Vec<EventGeometryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsPayload {
    #[serde(default)]
    pub events: Vec<EventDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApodDto {
    pub date: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    pub media_type: String,
    pub service_version: String,
    pub title: String,
    pub url: String,
}
