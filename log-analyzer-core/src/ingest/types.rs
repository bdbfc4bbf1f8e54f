use std::fmt;

/// One successfully parsed access log line.
///
/// The url borrows from the line it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedObservation<'a> {
    pub url: &'a str,
    /// Request duration in seconds.
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Compression {
    Plain,
    Gzip,
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Plain => f.write_str("plain"),
            Compression::Gzip => f.write_str("gz"),
        }
    }
}
