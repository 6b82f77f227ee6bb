pub mod runner;

pub use runner::{Action, BatchRunner, Decision, InboundMessage, RunStats};
