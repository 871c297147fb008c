//! Solver-neutral linear program representation
//!
//! An [`LpProblem`] is a plain value: a list of continuous variables with their
//! sign domain, a list of named linear constraints and a linear objective to
//! minimise. Backends translate it into their own model type; nothing in here
//! knows which solver runs it.
//!
//! ```text
//! minimize    c·x
//! subject to  a_i·x  {<=, >=, ==}  b_i      for every constraint i
//!             x_j >= 0                      for every NonNegative variable j
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a variable inside one [`LpProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VarId(pub usize);

impl VarId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Sign restriction declared with a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    /// `x >= 0`
    NonNegative,
    /// Unrestricted in sign
    Free,
}

impl Domain {
    pub fn lower_bound(&self) -> Option<f64> {
        match self {
            Domain::NonNegative => Some(0.0),
            Domain::Free => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
    pub name: String,
    pub domain: Domain,
}

/// `Σ coefficient · variable + constant`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
    constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constant(value: f64) -> Self {
        Self {
            terms: Vec::new(),
            constant: value,
        }
    }

    pub fn var(var: VarId) -> Self {
        Self::new().plus(1.0, var)
    }

    /// Add `coefficient · var`
    pub fn plus(mut self, coefficient: f64, var: VarId) -> Self {
        self.terms.push((var, coefficient));
        self
    }

    /// Add `-coefficient · var`
    pub fn minus(self, coefficient: f64, var: VarId) -> Self {
        self.plus(-coefficient, var)
    }

    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    pub fn constant_term(&self) -> f64 {
        self.constant
    }

    /// Evaluate with a value lookup; `None` if any referenced variable is missing.
    pub fn evaluate(&self, value_of: impl Fn(VarId) -> Option<f64>) -> Option<f64> {
        self.terms
            .iter()
            .try_fold(self.constant, |acc, &(var, coef)| {
                value_of(var).map(|v| acc + coef * v)
            })
    }

    /// Sum of `|coefficient · value|`, used to scale feasibility tolerances.
    pub fn magnitude(&self, value_of: impl Fn(VarId) -> Option<f64>) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coef)| (coef * value_of(var).unwrap_or(0.0)).abs())
            .sum::<f64>()
            + self.constant.abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sense::LessEqual => write!(f, "<="),
            Sense::GreaterEqual => write!(f, ">="),
            Sense::Equal => write!(f, "=="),
        }
    }
}

/// `lhs sense rhs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub name: String,
    pub lhs: LinearExpr,
    pub sense: Sense,
    pub rhs: f64,
}

impl LinearConstraint {
    /// How far the constraint is from holding at the given point (0 when satisfied).
    pub fn violation(&self, value_of: impl Fn(VarId) -> Option<f64>) -> Option<f64> {
        let lhs = self.lhs.evaluate(value_of)?;
        let gap = lhs - self.rhs;
        Some(match self.sense {
            Sense::LessEqual => gap.max(0.0),
            Sense::GreaterEqual => (-gap).max(0.0),
            Sense::Equal => gap.abs(),
        })
    }
}

/// A complete minimisation problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LpProblem {
    variables: Vec<VariableDef>,
    constraints: Vec<LinearConstraint>,
    objective: LinearExpr,
}

impl LpProblem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(&mut self, name: impl Into<String>, domain: Domain) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(VariableDef {
            name: name.into(),
            domain,
        });
        id
    }

    /// Add a constraint and return its position.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        lhs: LinearExpr,
        sense: Sense,
        rhs: f64,
    ) -> usize {
        self.constraints.push(LinearConstraint {
            name: name.into(),
            lhs,
            sense,
            rhs,
        });
        self.constraints.len() - 1
    }

    pub fn set_objective(&mut self, objective: LinearExpr) {
        self.objective = objective;
    }

    pub fn variables(&self) -> &[VariableDef] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> Option<&VariableDef> {
        self.variables.get(id.0)
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &LinearExpr {
        &self.objective
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_evaluation() {
        let x = VarId(0);
        let y = VarId(1);
        let expr = LinearExpr::constant(1.0).plus(2.0, x).minus(0.5, y);
        let values = [3.0, 4.0];
        let value = expr.evaluate(|v| values.get(v.index()).copied());
        assert_eq!(value, Some(5.0));
        assert_eq!(expr.magnitude(|v| values.get(v.index()).copied()), 9.0);

        let missing = LinearExpr::var(VarId(7)).evaluate(|v| values.get(v.index()).copied());
        assert_eq!(missing, None);
    }

    #[test]
    fn test_constraint_violation_by_sense() {
        let x = VarId(0);
        let at = |value: f64| move |_: VarId| Some(value);
        let le = LinearConstraint {
            name: "le".into(),
            lhs: LinearExpr::var(x),
            sense: Sense::LessEqual,
            rhs: 2.0,
        };
        assert_eq!(le.violation(at(1.0)), Some(0.0));
        assert_eq!(le.violation(at(3.0)), Some(1.0));

        let ge = LinearConstraint {
            sense: Sense::GreaterEqual,
            ..le.clone()
        };
        assert_eq!(ge.violation(at(1.0)), Some(1.0));
        assert_eq!(ge.violation(at(3.0)), Some(0.0));

        let eq = LinearConstraint {
            sense: Sense::Equal,
            ..le
        };
        assert_eq!(eq.violation(at(1.5)), Some(0.5));
    }

    #[test]
    fn test_problem_registration() {
        let mut lp = LpProblem::new();
        let x = lp.add_variable("x", Domain::NonNegative);
        let y = lp.add_variable("y", Domain::Free);
        let row = lp.add_constraint("sum", LinearExpr::var(x).plus(1.0, y), Sense::Equal, 1.0);
        lp.set_objective(LinearExpr::var(x));

        assert_eq!(row, 0);
        assert_eq!(lp.num_variables(), 2);
        assert_eq!(lp.num_constraints(), 1);
        assert_eq!(lp.variable(y).map(|v| v.domain), Some(Domain::Free));
        assert_eq!(Domain::NonNegative.lower_bound(), Some(0.0));
        assert_eq!(lp.constraints()[0].sense.to_string(), "==");
    }
}
