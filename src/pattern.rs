//! Regex-based parsing.

use crate::parser::LineParser;
use crate::record::{LogRecord, RequestLine};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Fields are separated by runs of whitespace. identd is the longest run that
// still leaves a user before the timestamp bracket, the referer is the
// shortest quoted run, and the user agent runs to the end of the line.
static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<ip>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})\s+",
        r"(?P<identd>.+)\s+",
        r"(?P<user>.+)\s+",
        r"\[(?P<day>[^/:\s\]]+)/(?P<month>[^/:\s\]]+)/(?P<year>[^/:\s\]]+)",
        r":(?P<time>\d{2}:\d{2}:\d{2})\s+(?P<timezone>[^\s\]]+)\]\s+",
        r#""(?P<resource>.*)"\s+"#,
        r"(?P<status>\d+)\s+",
        r"(?P<size>\d+|-)\s+",
        r#""(?P<referer>.*?)"\s+"#,
        r#""(?P<user_agent>.*)"$"#,
    ))
    .expect("combined log pattern is valid")
});

static RESOURCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<method>[A-Z]+) (?P<url>.+?) HTTP/(?P<http_ver>\d+\.\d+)")
        .expect("request line pattern is valid")
});

/// Parser that matches each line against one anchored regular expression.
///
/// Tolerant of repeated whitespace between fields and of spaces inside the
/// quoted request, referer and user agent. Slower than [`TokenParser`](crate::TokenParser).
///
/// # Example
///
/// ```rust
/// use rsalp::{LineParser, PatternParser};
///
/// let line = r#"110.83.152.234 - -  [03/Jan/2012:23:45:25 +0800]   "-" 400 0 "-" "-""#;
/// let record = PatternParser.parse_line(line).unwrap();
///
/// assert_eq!(record.resource(), "-");
/// assert_eq!(record.status(), "400");
/// assert!(PatternParser.parse_resource(record.resource()).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternParser;

fn group(captures: &Captures<'_>, name: &str) -> Option<String> {
    captures.name(name).map(|m| m.as_str().to_string())
}

impl LineParser for PatternParser {
    fn parse_line(&self, line: &str) -> Option<LogRecord> {
        let Some(captures) = LINE_REGEX.captures(line) else {
            tracing::trace!(parser = "pattern", line, "line does not match");
            return None;
        };

        Some(LogRecord {
            ip: group(&captures, "ip")?,
            identd: group(&captures, "identd")?,
            user: group(&captures, "user")?,
            day: group(&captures, "day")?,
            month: group(&captures, "month")?,
            year: group(&captures, "year")?,
            time: group(&captures, "time")?,
            timezone: group(&captures, "timezone")?,
            resource: group(&captures, "resource")?,
            status: group(&captures, "status")?,
            size: group(&captures, "size")?,
            referer: group(&captures, "referer")?,
            user_agent: group(&captures, "user_agent")?,
        })
    }

    fn parse_resource(&self, resource: &str) -> Option<RequestLine> {
        let Some(captures) = RESOURCE_REGEX.captures(resource) else {
            tracing::trace!(parser = "pattern", resource, "request line does not match");
            return None;
        };

        Some(RequestLine {
            method: group(&captures, "method")?,
            url: group(&captures, "url")?,
            http_ver: group(&captures, "http_ver")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800] "GET /some/url/on/your/site HTTP/1.1" 200 5876 "-" "User agent like Mozilla chrome or even spider(+http://www.spider.com/docs/help/webmasters.htm#07)""#;

    #[test]
    fn test_parse_sample_line() {
        let record = PatternParser.parse_line(SAMPLE).unwrap();

        assert_eq!(record.ip(), "123.126.50.69");
        assert_eq!(record.identd(), "-");
        assert_eq!(record.user(), "-");
        assert_eq!(record.day(), "03");
        assert_eq!(record.month(), "Jan");
        assert_eq!(record.year(), "2012");
        assert_eq!(record.time(), "00:00:02");
        assert_eq!(record.timezone(), "+0800");
        assert_eq!(record.resource(), "GET /some/url/on/your/site HTTP/1.1");
        assert_eq!(record.status(), "200");
        assert_eq!(record.size(), "5876");
        assert_eq!(record.referer(), "-");
        assert_eq!(
            record.user_agent(),
            "User agent like Mozilla chrome or even spider(+http://www.spider.com/docs/help/webmasters.htm#07)"
        );
    }

    #[test]
    fn test_irregular_spacing() {
        let line = "10.1.2.3  -\tbob   [25/Dec/2013:14:30:00 +0000]  \"POST /login HTTP/1.1\"  201 45  \"-\"  \"curl/7.64.1\"";
        let record = PatternParser.parse_line(line).unwrap();

        assert_eq!(record.user(), "bob");
        assert_eq!(record.resource(), "POST /login HTTP/1.1");
        assert_eq!(record.user_agent(), "curl/7.64.1");
    }

    #[test]
    fn test_dash_size_and_empty_referer() {
        let line = r#"10.1.2.3 - - [25/Dec/2013:14:30:00 +0000] "HEAD / HTTP/1.1" 304 - "" "probe""#;
        let record = PatternParser.parse_line(line).unwrap();

        assert_eq!(record.size(), "-");
        assert_eq!(record.referer(), "");
    }

    #[test]
    fn test_user_agent_with_quotes() {
        let line = r#"10.1.2.3 - - [25/Dec/2013:14:30:00 +0000] "GET / HTTP/1.1" 200 1 "-" "say "hi" to me""#;
        let record = PatternParser.parse_line(line).unwrap();

        assert_eq!(record.referer(), "-");
        assert_eq!(record.user_agent(), r#"say "hi" to me"#);
    }

    #[test]
    fn test_rejects_malformed_lines() {
        let cases = [
            "",
            "123.126.50.69",
            // missing closing timestamp bracket
            r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800 "GET / HTTP/1.1" 200 5876 "-" "-""#,
            // hostname instead of address
            r#"example.com - - [03/Jan/2012:00:00:02 +0800] "GET / HTTP/1.1" 200 5876 "-" "-""#,
            // non-numeric status
            r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800] "GET / HTTP/1.1" OK 5876 "-" "-""#,
            // common log format, no referer or user agent
            r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800] "GET / HTTP/1.1" 200 5876"#,
            // unbalanced quotes
            r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800] "GET / HTTP/1.1 200 5876 "-" "-"#,
        ];

        for line in cases {
            assert!(PatternParser.parse_line(line).is_none(), "matched {line:?}");
        }
    }

    #[test]
    fn test_parse_resource() {
        let request = PatternParser
            .parse_resource("GET /some/url/on/your/site HTTP/1.1")
            .unwrap();

        assert_eq!(request.method(), "GET");
        assert_eq!(request.url(), "/some/url/on/your/site");
        assert_eq!(request.http_ver(), "1.1");
    }

    #[test]
    fn test_parse_resource_url_with_spaces() {
        let request = PatternParser
            .parse_resource("GET /a b c HTTP/2.0")
            .unwrap();
        assert_eq!(request.url(), "/a b c");
        assert_eq!(request.http_ver(), "2.0");
    }

    #[test]
    fn test_parse_resource_ignores_trailing_text() {
        let request = PatternParser
            .parse_resource("GET /a HTTP/1.1 extra")
            .unwrap();
        assert_eq!(request.method(), "GET");
        assert_eq!(request.url(), "/a");
        assert_eq!(request.http_ver(), "1.1");
    }

    #[test]
    fn test_identd_takes_the_longest_run() {
        let line = r#"10.0.0.1 - john doe [03/Jan/2012:00:00:02 +0800] "GET /a HTTP/1.1" 200 1 "-" "curl""#;
        let record = PatternParser.parse_line(line).unwrap();
        assert_eq!(record.identd(), "- john");
        assert_eq!(record.user(), "doe");
    }

    #[test]
    fn test_parse_resource_rejects() {
        for resource in ["-", "", "get / HTTP/1.1", "GET /", "GET / HTTP/x", "GET  HTTP/1.1"] {
            assert!(
                PatternParser.parse_resource(resource).is_none(),
                "matched {resource:?}"
            );
        }
    }
}
