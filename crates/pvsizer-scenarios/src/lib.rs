pub mod file;
pub mod reference;

pub use file::{load_scenario_from_path, parse_scenario, write_scenario, ScenarioFormat};
pub use reference::{reference_scenario, REFERENCE_CAPACITY_FACTOR, REFERENCE_LOAD_KWH};
