use crate::ingest::constants::LOG_LINE;
use crate::ingest::types::ParsedObservation;

/// Extracts the request url and duration from one access log line.
///
/// Leading and trailing whitespace is ignored. Any line that does not follow
/// the access log format, including one without a trailing request time,
/// yields `None`; counting failures is left to the caller.
pub fn parse_line(line: &str) -> Option<ParsedObservation<'_>> {
    let caps = LOG_LINE.captures(line.trim())?;

    let url = caps.name("url")?.as_str();
    let duration = caps.name("request_time")?.as_str().parse::<f64>().ok()?;

    Some(ParsedObservation { url, duration })
}
