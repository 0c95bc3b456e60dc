//! Risk scoring over validated patient fields.
//!
//! Each function maps one reading to a small tier; [`RiskProfile::total`]
//! aggregates the tiers as a plain sum.

/// Per-patient risk tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RiskProfile {
    pub blood_pressure: u8,
    pub temperature: u8,
    pub age: u8,
}

impl RiskProfile {
    /// Combined score: the sum of the three tiers (range 0–7).
    pub fn total(&self) -> u8 {
        self.blood_pressure + self.temperature + self.age
    }
}

/// Blood-pressure tier, 0–3.
///
/// Stage 2 (≥140 systolic or ≥90 diastolic) scores 3, stage 1 (≥130 or ≥80)
/// scores 2, elevated systolic (≥120) scores 1, normal scores 0.
pub fn blood_pressure_risk(systolic: i64, diastolic: i64) -> u8 {
    if systolic >= 140 || diastolic >= 90 {
        3
    } else if systolic >= 130 || diastolic >= 80 {
        2
    } else if systolic >= 120 {
        1
    } else {
        0
    }
}

/// Temperature tier, 0–2: high fever at 101.0 °F, low-grade at 99.5 °F.
pub fn temperature_risk(value: f64) -> u8 {
    if value >= 101.0 {
        2
    } else if value >= 99.5 {
        1
    } else {
        0
    }
}

/// Age tier, 0–2: over 65 scores 2, 40 through 65 scores 1.
pub fn age_risk(age: i64) -> u8 {
    if age > 65 {
        2
    } else if age >= 40 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{age_risk, blood_pressure_risk, temperature_risk, RiskProfile};

    #[test]
    fn blood_pressure_tiers() {
        assert_eq!(blood_pressure_risk(110, 70), 0);
        assert_eq!(blood_pressure_risk(125, 70), 1);
        assert_eq!(blood_pressure_risk(132, 70), 2);
        assert_eq!(blood_pressure_risk(110, 85), 2);
        assert_eq!(blood_pressure_risk(145, 70), 3);
        assert_eq!(blood_pressure_risk(110, 95), 3);
    }

    #[test]
    fn temperature_tiers() {
        assert_eq!(temperature_risk(98.6), 0);
        assert_eq!(temperature_risk(99.5), 1);
        assert_eq!(temperature_risk(100.9), 1);
        assert_eq!(temperature_risk(101.0), 2);
    }

    #[test]
    fn age_tiers() {
        assert_eq!(age_risk(25), 0);
        assert_eq!(age_risk(40), 1);
        assert_eq!(age_risk(65), 1);
        assert_eq!(age_risk(66), 2);
    }

    #[test]
    fn total_is_sum_of_tiers() {
        let profile = RiskProfile {
            blood_pressure: blood_pressure_risk(150, 95),
            temperature: temperature_risk(101.5),
            age: age_risk(70),
        };
        assert_eq!(profile.total(), 7);
    }

    #[test]
    fn default_profile_scores_zero() {
        assert_eq!(RiskProfile::default().total(), 0);
    }
}
