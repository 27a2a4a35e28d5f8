//! Ruler CLI support library
//!
//! Headless tooling around [`ruler_slider`]: TOML configuration, scripted
//! gesture runs with JSON reports, and a text renderer for the ruler.

pub mod ascii;
pub mod config;
pub mod report;
pub mod runner;
pub mod scenario;

pub use config::RulerConfig;
pub use report::{FinalState, ReportStatus, SimulationReport};
pub use runner::{run_script, run_script_json};
pub use scenario::{Script, ScriptStep};
