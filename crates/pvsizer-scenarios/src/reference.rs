use pvsizer_core::ScenarioParameters;

/// Hourly demand of the reference site (kWh).
pub const REFERENCE_LOAD_KWH: [f64; 24] = [
    99.0, 93.0, 88.0, 87.0, 87.0, 88.0, 109.0, 127.0, 140.0, 142.0, 142.0, 140.0, 140.0, 140.0,
    137.0, 139.0, 146.0, 148.0, 148.0, 142.0, 134.0, 123.0, 108.0, 93.0,
];

/// Hourly PV capacity factor of the reference site.
pub const REFERENCE_CAPACITY_FACTOR: [f64; 24] = [
    0.0, 0.0, 0.0, 0.0, 0.000_980, 0.024_7, 0.095_1, 0.150, 0.229, 0.298, 0.352, 0.415, 0.458,
    0.373, 0.260, 0.219, 0.199, 0.088, 0.070_3, 0.039, 0.009_92, 1.39e-6, 0.0, 0.0,
];

/// One-day reference scenario: 2500 €/kWp, 1000 €/kWh, 95 % charge and
/// discharge efficiency, 4 h to fully charge.
pub fn reference_scenario() -> ScenarioParameters {
    ScenarioParameters::new(
        "reference",
        REFERENCE_LOAD_KWH.to_vec(),
        REFERENCE_CAPACITY_FACTOR.to_vec(),
        2500.0,
        1000.0,
        0.95,
        0.95,
        4.0,
    )
}
