//! Sizing model builder
//!
//! Turns [`ScenarioParameters`] into a complete [`SizingProblem`]: the LP plus
//! typed handles for every decision variable and a tag for every constraint
//! row. The returned value is self-contained; nothing is registered on a shared
//! model object.

use pvsizer_core::{
    Domain, LinearExpr, LpProblem, ScenarioParameters, Sense, SizerResult, VarId,
};
use std::collections::BTreeMap;
use tracing::debug;

/// State of charge at step 0, as a fraction of the sized battery capacity.
///
/// Multiplies the `BatteryCapacity` decision variable, so the initial state is
/// optimised together with the capacity.
pub const INITIAL_SOC_FRACTION: f64 = 0.5;

/// How the state of charge at a step is tied to the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// `soc[0] == INITIAL_SOC_FRACTION * battery_capacity`
    Initial,
    /// `soc[t] == soc[previous] + charge[t]*eff_in - discharge[t]/eff_out`
    Step { previous: usize },
}

impl Transition {
    pub fn at(step: usize) -> Self {
        match step {
            0 => Transition::Initial,
            t => Transition::Step { previous: t - 1 },
        }
    }
}

/// Role of a constraint row in the sizing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    SocUpper,
    SocLower,
    StateTransition(Transition),
    PvCeiling,
    ChargeRate,
    DischargeRate,
    EnergyBalance,
    PvCapacityLimit,
    BatteryCapacityLimit,
}

impl ConstraintKind {
    pub fn label(&self) -> &'static str {
        match self {
            ConstraintKind::SocUpper => "soc_upper",
            ConstraintKind::SocLower => "soc_lower",
            ConstraintKind::StateTransition(_) => "state_transition",
            ConstraintKind::PvCeiling => "pv_ceiling",
            ConstraintKind::ChargeRate => "charge_rate",
            ConstraintKind::DischargeRate => "discharge_rate",
            ConstraintKind::EnergyBalance => "energy_balance",
            ConstraintKind::PvCapacityLimit => "pv_capacity_limit",
            ConstraintKind::BatteryCapacityLimit => "battery_capacity_limit",
        }
    }
}

/// Constraint row metadata, aligned with `LpProblem::constraints()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintTag {
    pub kind: ConstraintKind,
    /// Time step the row belongs to; `None` for scalar limits
    pub step: Option<usize>,
    /// Row position in the LP
    pub row: usize,
}

/// Per-step decision variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepVariables {
    pub pv_production: VarId,
    pub battery_charge: VarId,
    pub battery_discharge: VarId,
    pub battery_soc: VarId,
}

/// Handles of every decision variable in the sizing LP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizingVariables {
    pub pv_capacity: VarId,
    pub battery_capacity: VarId,
    pub steps: Vec<StepVariables>,
}

/// A fully built sizing problem.
#[derive(Debug, Clone)]
pub struct SizingProblem {
    scenario: ScenarioParameters,
    lp: LpProblem,
    variables: SizingVariables,
    tags: Vec<ConstraintTag>,
}

impl SizingProblem {
    pub fn scenario(&self) -> &ScenarioParameters {
        &self.scenario
    }

    pub fn lp(&self) -> &LpProblem {
        &self.lp
    }

    pub fn variables(&self) -> &SizingVariables {
        &self.variables
    }

    pub fn tags(&self) -> &[ConstraintTag] {
        &self.tags
    }

    pub fn num_variables(&self) -> usize {
        self.lp.num_variables()
    }

    pub fn num_constraints(&self) -> usize {
        self.lp.num_constraints()
    }

    /// Tags of every row whose kind has the given label
    pub fn constraints_of(&self, label: &str) -> Vec<ConstraintTag> {
        self.tags
            .iter()
            .filter(|tag| tag.kind.label() == label)
            .copied()
            .collect()
    }

    /// Row count per constraint kind, keyed by label
    pub fn constraint_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for tag in &self.tags {
            *counts.entry(tag.kind.label()).or_insert(0) += 1;
        }
        counts
    }

    /// Multi-line description of the model dimensions
    pub fn describe(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!(
            "Sizing model '{}'\n{}\n",
            self.scenario.name,
            "=".repeat(40)
        ));
        s.push_str(&format!("Time steps: {}\n", self.scenario.steps));
        s.push_str(&format!("Variables: {}\n", self.num_variables()));
        s.push_str(&format!("Constraints: {}\n", self.num_constraints()));
        for (label, count) in self.constraint_counts() {
            s.push_str(&format!("  {label}: {count}\n"));
        }
        s
    }
}

/// Build the sizing LP for a scenario.
///
/// Fails with a validation error before any variable is created when the
/// scenario is malformed.
pub fn build_problem(params: &ScenarioParameters) -> SizerResult<SizingProblem> {
    params.validate()?;

    let mut lp = LpProblem::new();
    let pv_capacity = lp.add_variable("pv_capacity", Domain::NonNegative);
    let battery_capacity = lp.add_variable("battery_capacity", Domain::NonNegative);

    let steps: Vec<StepVariables> = params
        .time_index()
        .iter()
        .map(|t| StepVariables {
            pv_production: lp.add_variable(format!("pv_production[{t}]"), Domain::NonNegative),
            battery_charge: lp.add_variable(format!("battery_charge[{t}]"), Domain::NonNegative),
            battery_discharge: lp
                .add_variable(format!("battery_discharge[{t}]"), Domain::NonNegative),
            // Sign is enforced by the soc_lower rows, not the declaration
            battery_soc: lp.add_variable(format!("battery_soc[{t}]"), Domain::Free),
        })
        .collect();

    let eff_in = params.charge_efficiency;
    let eff_out = params.discharge_efficiency;
    let rate = params.rate_fraction();

    let mut tags = Vec::with_capacity(params.steps * 7 + 2);
    let mut push = |lp: &mut LpProblem,
                    kind: ConstraintKind,
                    step: Option<usize>,
                    lhs: LinearExpr,
                    sense: Sense,
                    rhs: f64| {
        let name = match step {
            Some(t) => format!("{}[{t}]", kind.label()),
            None => kind.label().to_string(),
        };
        let row = lp.add_constraint(name, lhs, sense, rhs);
        tags.push(ConstraintTag { kind, step, row });
    };

    for (t, vars) in steps.iter().enumerate() {
        let step = Some(t);

        push(
            &mut lp,
            ConstraintKind::SocUpper,
            step,
            LinearExpr::var(vars.battery_soc).minus(1.0, battery_capacity),
            Sense::LessEqual,
            0.0,
        );

        push(
            &mut lp,
            ConstraintKind::SocLower,
            step,
            LinearExpr::var(vars.battery_soc),
            Sense::GreaterEqual,
            0.0,
        );

        let transition = Transition::at(t);
        let dynamics = match transition {
            Transition::Initial => {
                LinearExpr::var(vars.battery_soc).minus(INITIAL_SOC_FRACTION, battery_capacity)
            }
            Transition::Step { previous } => LinearExpr::var(vars.battery_soc)
                .minus(1.0, steps[previous].battery_soc)
                .minus(eff_in, vars.battery_charge)
                .plus(1.0 / eff_out, vars.battery_discharge),
        };
        push(
            &mut lp,
            ConstraintKind::StateTransition(transition),
            step,
            dynamics,
            Sense::Equal,
            0.0,
        );

        push(
            &mut lp,
            ConstraintKind::PvCeiling,
            step,
            LinearExpr::var(vars.pv_production).minus(params.capacity_factor[t], pv_capacity),
            Sense::LessEqual,
            0.0,
        );

        push(
            &mut lp,
            ConstraintKind::ChargeRate,
            step,
            LinearExpr::var(vars.battery_charge).minus(rate, battery_capacity),
            Sense::LessEqual,
            0.0,
        );

        push(
            &mut lp,
            ConstraintKind::DischargeRate,
            step,
            LinearExpr::var(vars.battery_discharge).minus(rate, battery_capacity),
            Sense::LessEqual,
            0.0,
        );

        push(
            &mut lp,
            ConstraintKind::EnergyBalance,
            step,
            LinearExpr::var(vars.pv_production)
                .plus(1.0, vars.battery_discharge)
                .minus(1.0, vars.battery_charge),
            Sense::Equal,
            params.load_kwh[t],
        );
    }

    if let Some(limit) = params.max_pv_capacity_kwp {
        push(
            &mut lp,
            ConstraintKind::PvCapacityLimit,
            None,
            LinearExpr::var(pv_capacity),
            Sense::LessEqual,
            limit,
        );
    }
    if let Some(limit) = params.max_battery_capacity_kwh {
        push(
            &mut lp,
            ConstraintKind::BatteryCapacityLimit,
            None,
            LinearExpr::var(battery_capacity),
            Sense::LessEqual,
            limit,
        );
    }

    lp.set_objective(
        LinearExpr::new()
            .plus(params.pv_cost_per_kwp, pv_capacity)
            .plus(params.battery_cost_per_kwh, battery_capacity),
    );

    debug!(
        scenario = %params.name,
        variables = lp.num_variables(),
        constraints = lp.num_constraints(),
        "built sizing LP"
    );

    Ok(SizingProblem {
        scenario: params.clone(),
        lp,
        variables: SizingVariables {
            pv_capacity,
            battery_capacity,
            steps,
        },
        tags,
    })
}
