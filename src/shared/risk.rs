//! Score-to-risk model shared by the health route, the scenario simulator
//! and every widget that colors by risk. The cutoffs are deliberately a
//! single source of truth: 80/60/40 for the risk buckets, 90/80/70 for the
//! compliance grade.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            RiskLevel::Low
        } else if score >= 60 {
            RiskLevel::Medium
        } else if score >= 40 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

pub fn compliance_grade(score: i32) -> &'static str {
    if score >= 90 {
        "A"
    } else if score >= 80 {
        "B"
    } else if score >= 70 {
        "C"
    } else {
        "D"
    }
}

/// Clamp a raw score into [0, 100] and round ties to even, so 62.5 -> 62.
pub fn round_score(raw: f64) -> i32 {
    raw.clamp(0.0, 100.0).round_ties_even() as i32
}

/// 100 minus the weighted collision/proximity penalties, clamped.
pub fn orbit_health_score(collision_probability: f64, debris_proximity: f64) -> i32 {
    round_score(100.0 - collision_probability * 1000.0 - debris_proximity * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioInput {
    pub satellite_count: u32,
    pub debris_count: u32,
    /// Collision avoidance maneuvers per month, 0..=20.
    pub maneuver_frequency: u32,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            satellite_count: 50,
            debris_count: 100,
            maneuver_frequency: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioOutcome {
    pub score: i32,
    pub collision_probability: f64,
    pub risk: RiskLevel,
    pub recommendation: &'static str,
}

/// Linear collision model behind the scenario simulator. Total over the
/// slider domains and fully deterministic; nothing is persisted.
pub fn simulate(input: ScenarioInput) -> ScenarioOutcome {
    let base_probability = 0.01;
    let satellite_factor = input.satellite_count as f64 / 50.0;
    let debris_factor = input.debris_count as f64 / 100.0;
    let maneuver_reduction = 1.0 - input.maneuver_frequency as f64 / 20.0;

    let collision_probability =
        base_probability * satellite_factor * debris_factor * maneuver_reduction;
    let score = round_score(100.0 - collision_probability * 5000.0);
    let risk = RiskLevel::from_score(score);

    ScenarioOutcome {
        score,
        collision_probability,
        risk,
        recommendation: recommendation_for(risk),
    }
}

fn recommendation_for(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Critical => {
            "Immediate action required: Reduce satellite density or increase collision avoidance maneuvers"
        }
        RiskLevel::High => "High risk detected: Consider implementing additional safety measures",
        RiskLevel::Medium => "Moderate risk: Continue monitoring and maintain current protocols",
        RiskLevel::Low => "Low risk: Current operations within safe parameters",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bucket_cutoffs() {
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(80), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(79), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(59), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Critical);
    }

    #[test]
    fn compliance_grade_cutoffs() {
        assert_eq!(compliance_grade(95), "A");
        assert_eq!(compliance_grade(90), "A");
        assert_eq!(compliance_grade(89), "B");
        assert_eq!(compliance_grade(80), "B");
        assert_eq!(compliance_grade(79), "C");
        assert_eq!(compliance_grade(70), "C");
        assert_eq!(compliance_grade(69), "D");
    }

    #[test]
    fn scores_clamp_and_round_ties_even() {
        assert_eq!(round_score(62.5), 62);
        assert_eq!(round_score(63.5), 64);
        assert_eq!(round_score(-12.0), 0);
        assert_eq!(round_score(140.0), 100);
    }

    #[test]
    fn orbit_health_score_weights_penalties() {
        assert_eq!(orbit_health_score(0.0, 0.0), 100);
        assert_eq!(orbit_health_score(0.05, 0.0), 50);
        assert_eq!(orbit_health_score(0.0, 0.3), 70);
        // worst corner of the input domain still clamps into range
        assert_eq!(orbit_health_score(0.05, 0.3), 20);
    }

    #[test]
    fn baseline_scenario_matches_fixture() {
        let outcome = simulate(ScenarioInput {
            satellite_count: 50,
            debris_count: 100,
            maneuver_frequency: 5,
        });
        assert!((outcome.collision_probability - 0.0075).abs() < 1e-12);
        assert_eq!(outcome.score, 62);
        assert_eq!(outcome.risk, RiskLevel::Medium);
    }

    #[test]
    fn maxed_maneuvers_zero_out_the_probability() {
        let outcome = simulate(ScenarioInput {
            satellite_count: 200,
            debris_count: 500,
            maneuver_frequency: 20,
        });
        assert_eq!(outcome.collision_probability, 0.0);
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.risk, RiskLevel::Low);
    }

    #[test]
    fn crowded_scenario_goes_critical() {
        let outcome = simulate(ScenarioInput {
            satellite_count: 200,
            debris_count: 500,
            maneuver_frequency: 0,
        });
        assert_eq!(outcome.risk, RiskLevel::Critical);
        assert_eq!(outcome.score, 0);
        assert_eq!(
            outcome.recommendation,
            recommendation_for(RiskLevel::Critical)
        );
    }
}
