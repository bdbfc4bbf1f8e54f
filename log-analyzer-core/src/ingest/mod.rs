//! Log ingestion
//!
//! Everything between a log directory on disk and a stream of parsed
//! observations:
//!
//! ```text
//! log directory
//!   -> locate_latest     -> LogFileDescriptor
//!   -> LogLines          -> one String per line
//!   -> parse_line        -> Option<ParsedObservation>
//! ```
//!
//! `ErrorBudget` sits next to `parse_line` and decides, once the whole file has
//! been read, whether too many lines were unparseable to trust the result.

mod budget;
mod constants;
mod decode;
mod error;
mod locate;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use budget::{BudgetVerdict, ErrorBudget};
pub use decode::LogLines;
pub use error::{AnalyzeError, BudgetExceeded};
pub use locate::{LogFileDescriptor, locate_latest};
pub use parse::parse_line;
pub use types::{Compression, ParsedObservation};
