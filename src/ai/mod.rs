mod agent;
pub mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::{choose_column, Decision, HeuristicAgent, Rule};
pub use random::RandomAgent;
