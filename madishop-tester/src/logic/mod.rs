pub mod cart_tester;
pub mod reports;
pub mod scenarios;
pub mod seeds;
pub mod tester;

pub use cart_tester::CartTester;
pub use scenarios::{get_scenario, list_scenarios};
pub use seeds::resolve_seed_inputs;
pub use tester::{LogicTester, ScenarioResult};
