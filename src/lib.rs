// Public API for the service probes

pub mod config;
pub mod errors;
pub mod inference;
pub mod synthesis;
pub mod trace;

// Re-export commonly used types
pub use config::Config;
pub use errors::{ProbeError, Result};
pub use inference::probe::{InferenceOutcome, InferenceProbe};
pub use synthesis::probe::{SynthesisProbe, SynthesisReport};
