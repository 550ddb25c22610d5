#![cfg(feature = "server")]
//! Random sample generators behind the dashboard routes. Every record is
//! regenerated per call; nothing persists between requests. Each generator
//! takes its RNG explicitly so callers (and tests) can pin a seed.

use chrono::{TimeZone, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::shared::risk::{self, RiskLevel};
use crate::shared::types::{
    ClimateMetricDto, DebrisDto, OrbitHealthDto, PositionDto, SatelliteDto, SatelliteStatus,
};

pub const SATELLITE_COUNT: usize = 50;
pub const DEBRIS_COUNT: usize = 100;

const OPERATORS: [&str; 6] = ["SpaceX", "NASA", "ESA", "ISRO", "JAXA", "Commercial"];

const SATELLITE_TYPES: [&str; 5] = [
    "Communication",
    "Earth Observation",
    "Navigation",
    "Scientific",
    "Weather",
];

// Indexed in lockstep with SATELLITE_TYPES.
const SATELLITE_PURPOSES: [&str; 5] = [
    "Global internet coverage and connectivity",
    "Climate monitoring and environmental research",
    "GPS and navigation services",
    "Space exploration and research",
    "Weather forecasting and disaster monitoring",
];

const DEBRIS_SOURCES: [&str; 5] = [
    "Rocket Body",
    "Satellite Fragment",
    "Collision Debris",
    "Mission-Related",
    "Unknown",
];

pub const COUNTRIES: [(&str, &str); 10] = [
    ("United States", "USA"),
    ("China", "CHN"),
    ("India", "IND"),
    ("Brazil", "BRA"),
    ("Russia", "RUS"),
    ("Indonesia", "IDN"),
    ("Japan", "JPN"),
    ("Germany", "DEU"),
    ("Canada", "CAN"),
    ("Australia", "AUS"),
];

pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

pub fn generate_satellites(rng: &mut StdRng) -> Vec<SatelliteDto> {
    (0..SATELLITE_COUNT)
        .map(|i| {
            let type_index = rng.gen_range(0..SATELLITE_TYPES.len());
            let kind = SATELLITE_TYPES[type_index];
            let launch_year = 2020 + rng.gen_range(0..4);
            let launch_month = rng.gen_range(1..=12);
            let launch_date = Utc
                .with_ymd_and_hms(launch_year, launch_month, 1, 0, 0, 0)
                .single()
                .expect("valid launch date")
                .to_rfc3339();
            SatelliteDto {
                id: format!("SAT-{:03}", i + 1),
                name: format!("{}-{}", kind, i + 1),
                operator: OPERATORS[rng.gen_range(0..OPERATORS.len())].to_string(),
                kind: kind.to_string(),
                purpose: SATELLITE_PURPOSES[type_index].to_string(),
                position: PositionDto {
                    latitude: rng.gen_range(-90.0..90.0),
                    longitude: rng.gen_range(-180.0..180.0),
                    altitude: 400.0 + rng.gen_range(0.0..600.0),
                },
                velocity: 7.5 + rng.gen_range(0.0..0.5),
                inclination: 45.0 + rng.gen_range(0.0..60.0),
                status: if rng.gen_bool(0.9) {
                    SatelliteStatus::Operational
                } else {
                    SatelliteStatus::Degraded
                },
                launch_date,
            }
        })
        .collect()
}

pub fn generate_debris(rng: &mut StdRng) -> Vec<DebrisDto> {
    (0..DEBRIS_COUNT)
        .map(|i| {
            let roll: f64 = rng.gen();
            let risk_level = if roll > 0.7 {
                RiskLevel::High
            } else if roll > 0.4 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            DebrisDto {
                id: format!("DEB-{:04}", i + 1),
                source: DEBRIS_SOURCES[rng.gen_range(0..DEBRIS_SOURCES.len())].to_string(),
                position: PositionDto {
                    latitude: rng.gen_range(-90.0..90.0),
                    longitude: rng.gen_range(-180.0..180.0),
                    altitude: 300.0 + rng.gen_range(0.0..800.0),
                },
                size: rng.gen_range(0.0..10.0),
                velocity: 7.0 + rng.gen_range(0.0..1.0),
                risk_level,
                tracking_confidence: 0.6 + rng.gen_range(0.0..0.4),
            }
        })
        .collect()
}

pub fn generate_climate(rng: &mut StdRng) -> Vec<ClimateMetricDto> {
    let now = Utc::now().to_rfc3339();
    COUNTRIES
        .iter()
        .map(|(country, code)| ClimateMetricDto {
            country: country.to_string(),
            country_code: code.to_string(),
            co2_emissions: rng.gen_range(1_000_000..10_000_000),
            deforestation: rng.gen_range(0.0..5.0),
            carbon_stock: rng.gen_range(50_000..250_000),
            water_stress: rng.gen_range(20..80),
            urban_emissions: rng.gen_range(500_000..4_500_000),
            last_updated: now.clone(),
        })
        .collect()
}

pub fn orbit_health_snapshot(rng: &mut StdRng) -> OrbitHealthDto {
    let collision_probability = rng.gen_range(0.0..0.05);
    let debris_proximity = rng.gen_range(0.0..0.3);
    let score = risk::orbit_health_score(collision_probability, debris_proximity);
    let bucket = RiskLevel::from_score(score);
    OrbitHealthDto {
        score,
        short_term_risk: bucket,
        long_term_risk: bucket,
        collision_probability,
        debris_proximity,
        compliance_grade: risk::compliance_grade(score).to_string(),
        last_calculated: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satellites_stay_inside_their_domains() {
        let mut rng = rng_for(Some(7));
        let sats = generate_satellites(&mut rng);
        assert_eq!(sats.len(), SATELLITE_COUNT);
        assert_eq!(sats[0].id, "SAT-001");
        assert_eq!(sats[49].id, "SAT-050");
        for sat in &sats {
            assert!((-90.0..90.0).contains(&sat.position.latitude));
            assert!((-180.0..180.0).contains(&sat.position.longitude));
            assert!((400.0..1000.0).contains(&sat.position.altitude));
            assert!((7.5..8.0).contains(&sat.velocity));
            assert!((45.0..105.0).contains(&sat.inclination));
            assert!(SATELLITE_TYPES.contains(&sat.kind.as_str()));
            assert!(OPERATORS.contains(&sat.operator.as_str()));
        }
    }

    #[test]
    fn debris_stays_inside_its_domains() {
        let mut rng = rng_for(Some(11));
        let debris = generate_debris(&mut rng);
        assert_eq!(debris.len(), DEBRIS_COUNT);
        assert_eq!(debris[0].id, "DEB-0001");
        for d in &debris {
            assert!((300.0..1100.0).contains(&d.position.altitude));
            assert!((0.0..10.0).contains(&d.size));
            assert!((7.0..8.0).contains(&d.velocity));
            assert!((0.6..1.0).contains(&d.tracking_confidence));
            assert!(DEBRIS_SOURCES.contains(&d.source.as_str()));
            assert_ne!(d.risk_level, RiskLevel::Critical);
        }
    }

    #[test]
    fn debris_is_reproducible_per_seed_and_independent_across_seeds() {
        let a = generate_debris(&mut rng_for(Some(42)));
        let b = generate_debris(&mut rng_for(Some(42)));
        let c = generate_debris(&mut rng_for(Some(43)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn climate_covers_the_fixed_country_list() {
        let mut rng = rng_for(Some(3));
        let metrics = generate_climate(&mut rng);
        assert_eq!(metrics.len(), 10);
        for (metric, (country, code)) in metrics.iter().zip(COUNTRIES.iter()) {
            assert_eq!(metric.country, *country);
            assert_eq!(metric.country_code, *code);
            assert!((1_000_000..10_000_000).contains(&metric.co2_emissions));
            assert!((0.0..5.0).contains(&metric.deforestation));
            assert!((50_000..250_000).contains(&metric.carbon_stock));
            assert!((20..80).contains(&metric.water_stress));
            assert!((500_000..4_500_000).contains(&metric.urban_emissions));
        }
    }

    #[test]
    fn health_snapshot_is_internally_consistent() {
        for seed in 0..64 {
            let snapshot = orbit_health_snapshot(&mut rng_for(Some(seed)));
            assert!((0..=100).contains(&snapshot.score));
            assert!((0.0..0.05).contains(&snapshot.collision_probability));
            assert!((0.0..0.3).contains(&snapshot.debris_proximity));
            let expected = RiskLevel::from_score(snapshot.score);
            assert_eq!(snapshot.short_term_risk, expected);
            assert_eq!(snapshot.long_term_risk, expected);
            assert_eq!(
                snapshot.compliance_grade,
                risk::compliance_grade(snapshot.score)
            );
        }
    }
}
