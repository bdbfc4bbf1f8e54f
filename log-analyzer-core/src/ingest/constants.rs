use once_cell::sync::Lazy;
use regex::Regex;

pub const LOG_FILE_DATE_FORMAT: &str = "%Y%m%d";

/// `nginx-access-ui.log-YYYYMMDD` with an optional `.gz` suffix.
pub static LOG_FILE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^nginx-access-ui\.log-(?P<date>\d{8})(?P<gz>\.gz)?$")
        .expect("log file name pattern must compile")
});

// The pattern is anchored at the start only. Anything after the duration is
// ignored, so a line with trailing garbage still counts as parsed.
pub static LOG_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<remote_addr>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s+",
        r"(?P<remote_user>-|\S+)\s+",
        r"(?P<http_x_real_ip>-|\S+)\s+",
        r"\[(?P<time_local>[^\]]+)\]\s+",
        r#""(?P<method>GET|POST|PUT|DELETE|PATCH|OPTIONS|HEAD)\s+"#,
        r#"(?P<url>\S+)\s+HTTP/\d+\.\d+"\s+"#,
        r"(?P<status>\d{3})\s+",
        r"(?P<body_bytes_sent>\d+|-)\s+",
        r#""(?P<http_referer>[^"]*)"\s+"#,
        r#""(?P<http_user_agent>[^"]*)"\s+"#,
        r#""(?P<http_x_forwarded_for>[^"]*)"\s+"#,
        r#""(?P<http_x_request_id>[^"]*)"\s+"#,
        r#""(?P<http_x_rb_user>[^"]*)"\s*"#,
        r"(?P<request_time>\d+\.\d+)",
    ))
    .expect("log line pattern must compile")
});
