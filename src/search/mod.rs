mod console_interface;
mod graph;
mod json_export;
mod models;
mod solve;

pub use console_interface::*;
pub use json_export::get_json_data;
pub use models::{Edge, Outcome, SearchStep, SolveConfig, StateGraph};
pub use solve::{Solver, solve};
