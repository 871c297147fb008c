use pvsizer_algo::SizingResult;

/// The two headline lines: optimal PV and battery capacity.
pub fn capacity_lines(result: &SizingResult) -> [String; 2] {
    [
        format!("Optimal PV : {:.2} kWp", result.pv_capacity.value()),
        format!(
            "Optimal Battery Capacity : {:.2} kWh",
            result.battery_capacity.value()
        ),
    ]
}

/// Headline lines followed by the result summary.
pub fn render_report(result: &SizingResult) -> String {
    let [pv, battery] = capacity_lines(result);
    format!("{pv}\n{battery}\n\n{}", result.summary())
}
