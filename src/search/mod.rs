mod orchestrator;

pub use orchestrator::{SearchOrchestrator, SearchOutcome, SearchPhase};
