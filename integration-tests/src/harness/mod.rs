pub mod fixtures;
pub mod tracing;

pub use fixtures::{LogLine, Workspace};
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
