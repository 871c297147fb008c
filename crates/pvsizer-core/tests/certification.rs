use pvsizer_core::{
    certify, Assignment, CertificationFailure, Domain, LinearExpr, LpProblem, Sense, SolveOutcome,
    SizerError,
};

/// One-step storage toy: `soc = 0.5 * cap`, `discharge <= cap / 4`, `discharge = 3`.
fn toy() -> LpProblem {
    let mut lp = LpProblem::new();
    let cap = lp.add_variable("cap", Domain::NonNegative);
    let soc = lp.add_variable("soc", Domain::Free);
    let discharge = lp.add_variable("discharge", Domain::NonNegative);
    lp.add_constraint(
        "initial",
        LinearExpr::var(soc).minus(0.5, cap),
        Sense::Equal,
        0.0,
    );
    lp.add_constraint(
        "rate",
        LinearExpr::var(discharge).minus(0.25, cap),
        Sense::LessEqual,
        0.0,
    );
    lp.add_constraint("balance", LinearExpr::var(discharge), Sense::Equal, 3.0);
    lp.set_objective(LinearExpr::new().plus(1000.0, cap));
    lp
}

#[test]
fn optimal_point_certifies() {
    let lp = toy();
    assert!(certify(&lp, &Assignment::from_values([12.0, 6.0, 3.0]), 1e-6).is_ok());
    // Interior-point noise well inside the scaled tolerance
    assert!(certify(&lp, &Assignment::from_values([12.0, 6.0 + 1e-9, 3.0]), 1e-6).is_ok());
}

#[test]
fn worst_row_is_reported() {
    let lp = toy();
    // discharge exceeds cap / 4 by 1
    let failure = certify(&lp, &Assignment::from_values([8.0, 4.0, 3.0]), 1e-6).unwrap_err();
    match failure {
        CertificationFailure::ConstraintViolation { constraint, .. } => {
            assert_eq!(constraint, "rate")
        }
        other => panic!("unexpected failure {other}"),
    }
}

#[test]
fn domains_are_checked() {
    let lp = toy();
    let failure = certify(&lp, &Assignment::from_values([-1.0, -0.5, 3.0]), 1e-6).unwrap_err();
    assert!(matches!(
        failure,
        CertificationFailure::DomainViolation { ref variable, .. } if variable == "cap"
    ));

    let failure = certify(&lp, &Assignment::new(vec![Some(12.0), None, Some(3.0)]), 1e-6)
        .unwrap_err();
    assert_eq!(failure.to_string(), "solver reported no value for soc");
}

#[test]
fn outcomes_map_to_errors() {
    let infeasible = SolveOutcome::Infeasible("no point".into());
    assert_eq!(infeasible.status(), "infeasible");
    assert!(matches!(
        infeasible.into_assignment(),
        Err(SizerError::Infeasible(msg)) if msg == "no point"
    ));
    assert!(SolveOutcome::Optimal(Assignment::from_values([1.0]))
        .into_assignment()
        .is_ok());
}
