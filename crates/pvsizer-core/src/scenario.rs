//! Scenario parameters
//!
//! Immutable inputs of one sizing run: the hourly load and PV capacity-factor
//! series, cost coefficients, battery efficiencies and the charge time
//! constant. Validation happens here so the model builder never sees a
//! malformed scenario.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Ordered hourly steps `0..steps` with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeIndex {
    steps: usize,
}

impl TimeIndex {
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    pub fn iter(&self) -> std::ops::Range<usize> {
        0..self.steps
    }
}

/// Inputs of a single sizing scenario.
///
/// `steps` is carried explicitly and must equal the length of both series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Human-readable scenario label
    #[serde(default = "default_name")]
    pub name: String,
    /// Number of hourly steps in the horizon
    pub steps: usize,
    /// Energy demand per step (kWh)
    pub load_kwh: Vec<f64>,
    /// Fraction of installed PV capacity producible per step, in [0, 1]
    pub capacity_factor: Vec<f64>,
    /// PV investment cost (€/kWp)
    pub pv_cost_per_kwp: f64,
    /// Battery investment cost (€/kWh)
    pub battery_cost_per_kwh: f64,
    /// Fraction of charged energy that reaches the cells, in (0, 1]
    pub charge_efficiency: f64,
    /// Fraction of withdrawn cell energy delivered to the load, in (0, 1]
    pub discharge_efficiency: f64,
    /// Hours needed to fully charge or discharge the battery
    pub charge_time_hours: f64,
    /// Optional site limit on installed PV (kWp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pv_capacity_kwp: Option<f64>,
    /// Optional site limit on installed storage (kWh)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_battery_capacity_kwh: Option<f64>,
}

fn default_name() -> String {
    "scenario".to_string()
}

impl ScenarioParameters {
    /// Create a scenario from equal-length series.
    ///
    /// `steps` is taken from the load series; a capacity-factor series of a
    /// different length is rejected by [`validate`](Self::validate).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        load_kwh: Vec<f64>,
        capacity_factor: Vec<f64>,
        pv_cost_per_kwp: f64,
        battery_cost_per_kwh: f64,
        charge_efficiency: f64,
        discharge_efficiency: f64,
        charge_time_hours: f64,
    ) -> Self {
        Self {
            name: name.into(),
            steps: load_kwh.len(),
            load_kwh,
            capacity_factor,
            pv_cost_per_kwp,
            battery_cost_per_kwh,
            charge_efficiency,
            discharge_efficiency,
            charge_time_hours,
            max_pv_capacity_kwp: None,
            max_battery_capacity_kwh: None,
        }
    }

    /// Limit the installable PV capacity
    pub fn with_max_pv_capacity(mut self, kwp: f64) -> Self {
        self.max_pv_capacity_kwp = Some(kwp);
        self
    }

    /// Limit the installable battery capacity
    pub fn with_max_battery_capacity(mut self, kwh: f64) -> Self {
        self.max_battery_capacity_kwh = Some(kwh);
        self
    }

    /// Same scenario with the PV cost scaled by `factor`
    pub fn with_pv_cost_scaled(&self, factor: f64) -> Self {
        let mut scaled = self.clone();
        scaled.pv_cost_per_kwp *= factor;
        scaled
    }

    pub fn time_index(&self) -> TimeIndex {
        TimeIndex::new(self.steps)
    }

    /// Maximum charge or discharge energy per step, as a fraction of capacity
    pub fn rate_fraction(&self) -> f64 {
        1.0 / self.charge_time_hours
    }

    pub fn total_load_kwh(&self) -> f64 {
        self.load_kwh.iter().sum()
    }

    /// Check every invariant the model builder relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.steps == 0 {
            return Err(ValidationError::EmptyHorizon);
        }
        if self.load_kwh.len() != self.steps {
            return Err(ValidationError::LengthMismatch {
                series: "load",
                expected: self.steps,
                actual: self.load_kwh.len(),
            });
        }
        if self.capacity_factor.len() != self.steps {
            return Err(ValidationError::LengthMismatch {
                series: "capacity factor",
                expected: self.steps,
                actual: self.capacity_factor.len(),
            });
        }

        for (step, &value) in self.load_kwh.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidLoad { step, value });
            }
        }
        for (step, &value) in self.capacity_factor.iter().enumerate() {
            // NaN fails the range check too
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::CapacityFactorOutOfRange { step, value });
            }
        }

        check_cost("pv cost per kWp", self.pv_cost_per_kwp)?;
        check_cost("battery cost per kWh", self.battery_cost_per_kwh)?;
        check_efficiency("charge efficiency", self.charge_efficiency)?;
        check_efficiency("discharge efficiency", self.discharge_efficiency)?;

        if !self.charge_time_hours.is_finite() || self.charge_time_hours <= 0.0 {
            return Err(ValidationError::NonPositiveChargeTime(self.charge_time_hours));
        }

        if let Some(limit) = self.max_pv_capacity_kwp {
            check_limit("max PV capacity", limit)?;
        }
        if let Some(limit) = self.max_battery_capacity_kwh {
            check_limit("max battery capacity", limit)?;
        }

        Ok(())
    }
}

fn check_cost(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::NegativeCost { name, value });
    }
    Ok(())
}

fn check_efficiency(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(ValidationError::EfficiencyOutOfRange { name, value });
    }
    Ok(())
}

fn check_limit(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidCapacityLimit { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(steps: usize) -> ScenarioParameters {
        ScenarioParameters::new(
            "flat",
            vec![10.0; steps],
            vec![0.5; steps],
            2500.0,
            1000.0,
            0.95,
            0.95,
            4.0,
        )
    }

    #[test]
    fn test_valid_scenario_passes() {
        let params = flat(24);
        assert!(params.validate().is_ok());
        assert_eq!(params.time_index().len(), 24);
        assert_eq!(params.rate_fraction(), 0.25);
        assert_eq!(params.total_load_kwh(), 240.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut params = flat(24);
        params.capacity_factor.pop();
        assert_eq!(
            params.validate(),
            Err(ValidationError::LengthMismatch {
                series: "capacity factor",
                expected: 24,
                actual: 23,
            })
        );

        let mut params = flat(24);
        params.steps = 25;
        assert!(matches!(
            params.validate(),
            Err(ValidationError::LengthMismatch { series: "load", .. })
        ));
    }

    #[test]
    fn test_capacity_factor_range() {
        let mut params = flat(4);
        params.capacity_factor[2] = 1.2;
        assert_eq!(
            params.validate(),
            Err(ValidationError::CapacityFactorOutOfRange { step: 2, value: 1.2 })
        );

        params.capacity_factor[2] = -0.01;
        assert!(params.validate().is_err());

        params.capacity_factor[2] = f64::NAN;
        assert!(params.validate().is_err());

        params.capacity_factor[2] = 1.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_scalar_checks() {
        let mut params = flat(4);
        params.pv_cost_per_kwp = -1.0;
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NegativeCost { .. })
        ));

        let mut params = flat(4);
        params.discharge_efficiency = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ValidationError::EfficiencyOutOfRange { name: "discharge efficiency", .. })
        ));

        let mut params = flat(4);
        params.charge_efficiency = 1.01;
        assert!(params.validate().is_err());

        let mut params = flat(4);
        params.charge_time_hours = 0.0;
        assert_eq!(
            params.validate(),
            Err(ValidationError::NonPositiveChargeTime(0.0))
        );

        let params = flat(4).with_max_battery_capacity(-5.0);
        assert!(matches!(
            params.validate(),
            Err(ValidationError::InvalidCapacityLimit { .. })
        ));
    }

    #[test]
    fn test_empty_and_negative_load() {
        let params = flat(0);
        assert_eq!(params.validate(), Err(ValidationError::EmptyHorizon));

        let mut params = flat(3);
        params.load_kwh[1] = -2.0;
        assert_eq!(
            params.validate(),
            Err(ValidationError::InvalidLoad { step: 1, value: -2.0 })
        );
    }

    #[test]
    fn test_pv_cost_scaling_returns_copy() {
        let params = flat(4);
        let scaled = params.with_pv_cost_scaled(2.0);
        assert_eq!(scaled.pv_cost_per_kwp, 5000.0);
        assert_eq!(params.pv_cost_per_kwp, 2500.0);
        assert_eq!(scaled.load_kwh, params.load_kwh);
    }

    #[test]
    fn test_serde_defaults() {
        let json = r#"{
            "steps": 2,
            "load_kwh": [1.0, 2.0],
            "capacity_factor": [0.0, 0.5],
            "pv_cost_per_kwp": 2500.0,
            "battery_cost_per_kwh": 1000.0,
            "charge_efficiency": 0.95,
            "discharge_efficiency": 0.95,
            "charge_time_hours": 4.0
        }"#;
        let params: ScenarioParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.name, "scenario");
        assert!(params.max_pv_capacity_kwp.is_none());
        assert!(params.validate().is_ok());
    }
}
