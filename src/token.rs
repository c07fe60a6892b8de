//! Whitespace-split positional parsing.

use crate::parser::LineParser;
use crate::record::{split_date, LogRecord, RequestLine};

/// Token count at which the request line is assumed to span three tokens
/// (`"METHOD`, `URL`, `HTTP/x.y"`) instead of a lone `"-"`.
const FULL_REQUEST_TOKENS: usize = 12;

/// Parser that splits each line on whitespace and picks fields by position.
///
/// Much faster than [`PatternParser`](crate::PatternParser), but it only knows
/// two layouts: a three-token request line, or the single token `"-"`. Extra
/// whitespace inside identd, user, the request or the referer shifts every
/// later index; such lines usually come back as `None` and are never repaired.
/// Runs of whitespace inside the user agent are collapsed to single spaces.
///
/// # Example
///
/// ```rust
/// use rsalp::{LineParser, TokenParser};
///
/// let line = r#"110.83.152.234 - - [03/Jan/2012:23:45:25 +0800] "-" 400 0 "-" "-""#;
/// let record = TokenParser.parse_line(line).unwrap();
///
/// assert_eq!(record.resource(), "-");
/// assert_eq!(record.size(), "0");
/// assert!(TokenParser.parse_resource(record.resource()).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenParser;

impl TokenParser {
    fn split_line(line: &str) -> Option<LogRecord> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (resource, rest) = if tokens.len() >= FULL_REQUEST_TOKENS {
            (tokens.get(5..8)?.join(" "), tokens.get(8..)?)
        } else {
            (tokens.get(5)?.to_string(), tokens.get(6..)?)
        };
        let [status, size, referer, user_agent @ ..] = rest else {
            return None;
        };

        // "[03/Jan/2012:00:00:02" then "+0800]"
        let stamp = tokens.get(3)?.strip_prefix('[')?;
        let (date, time) = stamp.split_once(':')?;
        let (day, month, year) = split_date(date)?;
        let timezone = tokens.get(4)?.strip_suffix(']')?;

        Some(LogRecord {
            ip: tokens.first()?.to_string(),
            identd: tokens.get(1)?.to_string(),
            user: tokens.get(2)?.to_string(),
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
            time: time.to_string(),
            timezone: timezone.to_string(),
            resource: unquote(&resource)?.to_string(),
            status: status.to_string(),
            size: size.to_string(),
            referer: unquote(referer)?.to_string(),
            user_agent: unquote(&user_agent.join(" "))?.to_string(),
        })
    }
}

/// Strip one pair of surrounding double quotes.
fn unquote(s: &str) -> Option<&str> {
    s.strip_prefix('"')?.strip_suffix('"')
}

impl LineParser for TokenParser {
    fn parse_line(&self, line: &str) -> Option<LogRecord> {
        let record = Self::split_line(line);
        if record.is_none() {
            tracing::trace!(parser = "token", line, "line does not match");
        }
        record
    }

    fn parse_resource(&self, resource: &str) -> Option<RequestLine> {
        let tokens: Vec<&str> = resource.split_whitespace().collect();
        let [method, url, version] = tokens.as_slice() else {
            tracing::trace!(parser = "token", resource, "request line does not match");
            return None;
        };

        Some(RequestLine {
            method: method.to_string(),
            url: url.to_string(),
            // drop the "HTTP/" prefix
            http_ver: version.get(5..)?.to_string(),
        })
    }
}
