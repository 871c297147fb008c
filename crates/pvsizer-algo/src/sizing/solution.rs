//! Result extraction
//!
//! Reads a certified assignment back into physical quantities. Every expected
//! variable must carry a finite value; anything missing is an error rather than
//! a silent zero.

use super::builder::SizingProblem;
use pvsizer_core::{Assignment, Euros, KilowattHours, Kilowatts, SizerError, SizerResult, VarId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Optimal sizing and dispatch of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub scenario: String,
    /// Backend that produced the solution
    pub solver: String,
    pub steps: usize,

    pub pv_capacity: Kilowatts,
    pub battery_capacity: KilowattHours,

    pub load: Vec<KilowattHours>,
    /// `pv_capacity * capacity_factor[t]`, the producible energy per step
    pub pv_available: Vec<KilowattHours>,
    pub pv_production: Vec<KilowattHours>,
    pub battery_soc: Vec<KilowattHours>,
    pub battery_charge: Vec<KilowattHours>,
    pub battery_discharge: Vec<KilowattHours>,

    pub pv_capex: Euros,
    pub battery_capex: Euros,
    pub total_cost: Euros,

    #[serde(default)]
    pub solve_time: Duration,
}

impl SizingResult {
    pub fn total_load(&self) -> KilowattHours {
        self.load.iter().sum()
    }

    pub fn total_pv_production(&self) -> KilowattHours {
        self.pv_production.iter().sum()
    }

    /// Producible PV energy that was not used
    pub fn curtailment(&self) -> KilowattHours {
        self.pv_available
            .iter()
            .zip(&self.pv_production)
            .map(|(&available, &used)| (available - used).max(KilowattHours::ZERO))
            .sum()
    }

    /// Energy drawn from the battery over the horizon
    pub fn battery_throughput(&self) -> KilowattHours {
        self.battery_discharge.iter().sum()
    }

    /// Largest `|production + discharge - charge - load|` over all steps
    pub fn max_balance_residual(&self) -> f64 {
        (0..self.steps)
            .map(|t| {
                (self.pv_production[t] + self.battery_discharge[t]
                    - self.battery_charge[t]
                    - self.load[t])
                    .value()
                    .abs()
            })
            .fold(0.0, f64::max)
    }

    pub fn to_json(&self) -> SizerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Multi-line human-readable summary
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!(
            "Scenario '{}' ({} steps, solver {})\n",
            self.scenario, self.steps, self.solver
        ));
        s.push_str(&format!("  PV capacity:        {:.2}\n", self.pv_capacity));
        s.push_str(&format!("  Battery capacity:   {:.2}\n", self.battery_capacity));
        s.push_str(&format!("  PV capex:           {:.2}\n", self.pv_capex));
        s.push_str(&format!("  Battery capex:      {:.2}\n", self.battery_capex));
        s.push_str(&format!("  Total cost:         {:.2}\n", self.total_cost));
        s.push_str(&format!("  Load served:        {:.2}\n", self.total_load()));
        s.push_str(&format!("  PV production:      {:.2}\n", self.total_pv_production()));
        s.push_str(&format!("  PV curtailment:     {:.2}\n", self.curtailment()));
        s.push_str(&format!("  Battery throughput: {:.2}\n", self.battery_throughput()));
        s.push_str(&format!("  Solve time:         {:?}\n", self.solve_time));
        s
    }
}

/// Read the sizing and dispatch out of a certified assignment.
///
/// Non-negative quantities that come back slightly negative (interior-point
/// noise within `tolerance`) are clamped to zero. Larger negatives and
/// missing values fail with [`SizerError::Extraction`].
pub fn extract(
    problem: &SizingProblem,
    assignment: &Assignment,
    solver: &str,
    tolerance: f64,
) -> SizerResult<SizingResult> {
    let lp = problem.lp();
    let read = |var: VarId| -> SizerResult<f64> {
        let name = lp
            .variable(var)
            .map(|def| def.name.as_str())
            .unwrap_or("<unknown>");
        let value = assignment
            .get(var)
            .ok_or_else(|| SizerError::Extraction(format!("no value for variable '{name}'")))?;
        if value >= 0.0 {
            Ok(value)
        } else if value >= -tolerance.max(0.0) * (1.0 + value.abs()) {
            Ok(0.0)
        } else {
            Err(SizerError::Extraction(format!(
                "variable '{name}' is negative ({value:e})"
            )))
        }
    };

    let scenario = problem.scenario();
    let vars = problem.variables();

    let pv_capacity = Kilowatts(read(vars.pv_capacity)?);
    let battery_capacity = KilowattHours(read(vars.battery_capacity)?);

    let mut pv_production = Vec::with_capacity(scenario.steps);
    let mut battery_soc = Vec::with_capacity(scenario.steps);
    let mut battery_charge = Vec::with_capacity(scenario.steps);
    let mut battery_discharge = Vec::with_capacity(scenario.steps);
    for step in &vars.steps {
        pv_production.push(KilowattHours(read(step.pv_production)?));
        battery_soc.push(KilowattHours(read(step.battery_soc)?));
        battery_charge.push(KilowattHours(read(step.battery_charge)?));
        battery_discharge.push(KilowattHours(read(step.battery_discharge)?));
    }

    let pv_capex = pv_capacity.cost_at(scenario.pv_cost_per_kwp);
    let battery_capex = battery_capacity.cost_at(scenario.battery_cost_per_kwh);

    Ok(SizingResult {
        scenario: scenario.name.clone(),
        solver: solver.to_string(),
        steps: scenario.steps,
        pv_capacity,
        battery_capacity,
        load: scenario.load_kwh.iter().copied().map(KilowattHours).collect(),
        pv_available: scenario
            .capacity_factor
            .iter()
            .map(|&cf| pv_capacity.energy_at(cf))
            .collect(),
        pv_production,
        battery_soc,
        battery_charge,
        battery_discharge,
        pv_capex,
        battery_capex,
        total_cost: pv_capex + battery_capex,
        solve_time: Duration::ZERO,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::builder::build_problem;
    use pvsizer_core::ScenarioParameters;

    fn problem() -> SizingProblem {
        build_problem(&ScenarioParameters::new(
            "two",
            vec![4.0, 6.0],
            vec![0.5, 0.0],
            100.0,
            10.0,
            1.0,
            1.0,
            2.0,
        ))
        .unwrap()
    }

    // Layout: pv_capacity, battery_capacity, then (prod, charge, discharge, soc) per step
    fn assignment(values: [f64; 10]) -> Assignment {
        Assignment::from_values(values)
    }

    #[test]
    fn test_extracts_series_and_costs() {
        let p = problem();
        let a = assignment([20.0, 12.0, 10.0, 6.0, 0.0, 6.0, 0.0, 0.0, 6.0, 6.0]);
        let result = extract(&p, &a, "fake", 1e-6).unwrap();

        assert_eq!(result.pv_capacity, Kilowatts(20.0));
        assert_eq!(result.battery_capacity, KilowattHours(12.0));
        assert_eq!(result.pv_production, vec![KilowattHours(10.0), KilowattHours(0.0)]);
        assert_eq!(result.battery_charge[0], KilowattHours(6.0));
        assert_eq!(result.battery_discharge[1], KilowattHours(6.0));
        assert_eq!(result.pv_available, vec![KilowattHours(10.0), KilowattHours(0.0)]);
        assert_eq!(result.pv_capex, Euros(2000.0));
        assert_eq!(result.battery_capex, Euros(120.0));
        assert_eq!(result.total_cost, Euros(2120.0));
        assert_eq!(result.solver, "fake");
        assert_eq!(result.max_balance_residual(), 0.0);
        assert_eq!(result.curtailment(), KilowattHours(0.0));
        assert_eq!(result.battery_throughput(), KilowattHours(6.0));
        assert!(result.summary().contains("Total cost:"));
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let p = problem();
        let mut values: Vec<Option<f64>> = vec![Some(1.0); 10];
        values[4] = None;
        let err = extract(&p, &Assignment::new(values), "fake", 1e-6).unwrap_err();
        match err {
            SizerError::Extraction(msg) => assert!(msg.contains("battery_discharge[0]")),
            other => panic!("unexpected error {other:?}"),
        }

        let short = Assignment::from_values([1.0, 1.0]);
        assert!(extract(&p, &short, "fake", 1e-6).is_err());
    }

    #[test]
    fn test_negative_noise_is_clamped() {
        let p = problem();
        let a = assignment([20.0, 12.0, 10.0, 6.0, -1e-9, 6.0, 0.0, 0.0, 6.0, 6.0]);
        let result = extract(&p, &a, "fake", 1e-6).unwrap();
        assert_eq!(result.battery_discharge[0], KilowattHours(0.0));

        let bad = assignment([20.0, 12.0, 10.0, 6.0, -0.5, 6.0, 0.0, 0.0, 6.0, 6.0]);
        assert!(matches!(
            extract(&p, &bad, "fake", 1e-6),
            Err(SizerError::Extraction(_))
        ));
    }

    #[test]
    fn test_json_contains_capacities() {
        let p = problem();
        let a = assignment([20.0, 12.0, 10.0, 6.0, 0.0, 6.0, 0.0, 0.0, 6.0, 6.0]);
        let json = extract(&p, &a, "fake", 1e-6).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pv_capacity"], 20.0);
        assert_eq!(value["battery_capacity"], 12.0);
        assert_eq!(value["steps"], 2);
    }
}
