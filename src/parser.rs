//! The shared parsing interface and strategy selection.

use crate::error::{Error, Result};
use crate::pattern::PatternParser;
use crate::record::{LogRecord, RequestLine};
use crate::token::TokenParser;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for parsing combined log lines and their request lines.
///
/// Implementations are pure: every call depends only on its input and
/// returns a freshly owned value. `None` means the input does not have the
/// expected shape; it is the normal outcome for malformed lines, never a
/// failure, and no input makes an implementation panic.
pub trait LineParser: Send + Sync {
    /// Parse a full log line.
    fn parse_line(&self, line: &str) -> Option<LogRecord>;

    /// Parse a `METHOD URL HTTP/VERSION` request line.
    fn parse_resource(&self, resource: &str) -> Option<RequestLine>;

    /// Parse the request line carried by a record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsalp::{LineParser, Strategy};
    ///
    /// let parser = Strategy::Token;
    /// let line = r#"10.0.0.1 - - [03/Jan/2012:00:00:02 +0800] "GET /a HTTP/1.1" 200 5 "-" "-""#;
    /// let record = parser.parse_line(line).unwrap();
    /// let request = parser.request_line(&record).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.url(), "/a");
    /// ```
    fn request_line(&self, record: &LogRecord) -> Option<RequestLine> {
        self.parse_resource(record.resource())
    }
}

impl<P: LineParser + ?Sized> LineParser for &P {
    fn parse_line(&self, line: &str) -> Option<LogRecord> {
        (**self).parse_line(line)
    }

    fn parse_resource(&self, resource: &str) -> Option<RequestLine> {
        (**self).parse_resource(resource)
    }
}

impl<P: LineParser + ?Sized> LineParser for Box<P> {
    fn parse_line(&self, line: &str) -> Option<LogRecord> {
        (**self).parse_line(line)
    }

    fn parse_resource(&self, resource: &str) -> Option<RequestLine> {
        (**self).parse_resource(resource)
    }
}

/// Which parser to use.
///
/// `Pattern` tolerates irregular spacing and is the default. `Token` is
/// several times faster but only understands the two standard layouts (a
/// three-token request line, or a lone `"-"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    #[default]
    Pattern,
    Token,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Pattern => "pattern",
            Strategy::Token => "token",
        }
    }
}

impl LineParser for Strategy {
    fn parse_line(&self, line: &str) -> Option<LogRecord> {
        match self {
            Strategy::Pattern => PatternParser.parse_line(line),
            Strategy::Token => TokenParser.parse_line(line),
        }
    }

    fn parse_resource(&self, resource: &str) -> Option<RequestLine> {
        match self {
            Strategy::Pattern => PatternParser.parse_resource(resource),
            Strategy::Token => TokenParser.parse_resource(resource),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" | "regex" => Ok(Strategy::Pattern),
            "token" | "fast" => Ok(Strategy::Token),
            _ => Err(Error::unknown_strategy(s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
