//! Layered message classification: sender-domain lookup, phrase and keyword
//! scoring, confidence calibration and optional remote providers.

pub mod confidence;
pub mod engine;
pub mod labels;
pub mod local;
pub mod scorer;

pub use engine::{ClassificationEngine, ClassifyError, Strategy};
pub use labels::LabelContext;
pub use local::{LocalClassifier, ScoringStores};
