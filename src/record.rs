//! Core data structures for representing parsed log lines.

use crate::error::{Error, Result};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plain field-name to value mapping.
/// All values are kept as strings, with type conversion on demand.
pub type Fields = HashMap<String, String>;

/// A parsed combined log line.
///
/// Every value is the verbatim text found in the line. Status and size are
/// left as strings because servers write sentinels such as `-` into them;
/// use [`LogRecord::int_field`] when a number is wanted.
///
/// Records are produced by a [`LineParser`](crate::LineParser) and are
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogRecord {
    pub(crate) ip: String,
    pub(crate) identd: String,
    pub(crate) user: String,
    pub(crate) day: String,
    pub(crate) month: String,
    pub(crate) year: String,
    pub(crate) time: String,
    pub(crate) timezone: String,
    pub(crate) resource: String,
    pub(crate) status: String,
    pub(crate) size: String,
    pub(crate) referer: String,
    pub(crate) user_agent: String,
}

impl LogRecord {
    /// Field names in the order they appear in a combined log line.
    pub const FIELD_NAMES: [&'static str; 13] = [
        "ip",
        "identd",
        "user",
        "day",
        "month",
        "year",
        "time",
        "timezone",
        "resource",
        "status",
        "size",
        "referer",
        "user_agent",
    ];

    /// Client address, captured verbatim.
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// RFC 1413 identity, almost always `-`.
    pub fn identd(&self) -> &str {
        &self.identd
    }

    /// Authenticated user, `-` when absent.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Day of month, two digits.
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Abbreviated month name such as `Jan`.
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Four-digit year.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// The `DD/Mon/YYYY` date token rebuilt from day, month and year.
    ///
    /// ```rust
    /// use rsalp::{LineParser, PatternParser};
    ///
    /// let line = r#"10.0.0.1 - - [03/Jan/2012:00:00:02 +0800] "GET / HTTP/1.1" 200 5 "-" "-""#;
    /// let record = PatternParser.parse_line(line).unwrap();
    /// assert_eq!(record.date(), "03/Jan/2012");
    /// ```
    pub fn date(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }

    /// Local time as `HH:MM:SS`.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// UTC offset such as `+0800`.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// The raw request line, without its surrounding quotes.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// HTTP status code.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Response body size in bytes, or `-`.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// The `Referer` header, `-` when absent.
    pub fn referer(&self) -> &str {
        &self.referer
    }

    /// The `User-Agent` header.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Get a field value by name.
    ///
    /// Accepts every name in [`LogRecord::FIELD_NAMES`], the composite `date`,
    /// and the historical aliases `foo` (identd) and `bar` (user).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsalp::{LineParser, TokenParser};
    ///
    /// let line = r#"10.0.0.1 - - [03/Jan/2012:00:00:02 +0800] "GET / HTTP/1.1" 200 5 "-" "-""#;
    /// let record = TokenParser.parse_line(line).unwrap();
    ///
    /// assert_eq!(record.field("status").unwrap(), "200");
    /// assert!(record.field("nonexistent").is_err());
    /// ```
    pub fn field(&self, name: &str) -> Result<std::borrow::Cow<'_, str>> {
        use std::borrow::Cow;

        let value = match name {
            "ip" => &self.ip,
            "identd" | "foo" => &self.identd,
            "user" | "bar" => &self.user,
            "date" => return Ok(Cow::Owned(self.date())),
            "day" => &self.day,
            "month" => &self.month,
            "year" => &self.year,
            "time" => &self.time,
            "timezone" => &self.timezone,
            "resource" => &self.resource,
            "status" => &self.status,
            "size" => &self.size,
            "referer" => &self.referer,
            "user_agent" => &self.user_agent,
            _ => return Err(Error::field_not_found(name)),
        };
        Ok(Cow::Borrowed(value.as_str()))
    }

    /// Get a field value as a 64-bit integer.
    ///
    /// Fails with [`Error::FieldParseError`] for values such as a `-` size.
    pub fn int_field(&self, name: &str) -> Result<i64> {
        let value = self.field(name)?;
        value
            .parse::<i64>()
            .map_err(|e| Error::field_parse_error(name, &*value, "i64", e))
    }

    /// Copy the record into a plain field mapping.
    pub fn to_fields(&self) -> Fields {
        let values = [
            &self.ip,
            &self.identd,
            &self.user,
            &self.day,
            &self.month,
            &self.year,
            &self.time,
            &self.timezone,
            &self.resource,
            &self.status,
            &self.size,
            &self.referer,
            &self.user_agent,
        ];
        Self::FIELD_NAMES
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl From<LogRecord> for Fields {
    fn from(record: LogRecord) -> Self {
        record.to_fields()
    }
}

/// The `METHOD URL HTTP/VERSION` request line, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RequestLine {
    pub(crate) method: String,
    pub(crate) url: String,
    pub(crate) http_ver: String,
}

impl RequestLine {
    pub const FIELD_NAMES: [&'static str; 3] = ["method", "url", "http_ver"];

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Protocol version without the `HTTP/` prefix, e.g. `1.1`.
    pub fn http_ver(&self) -> &str {
        &self.http_ver
    }

    /// Get a field value by name.
    pub fn field(&self, name: &str) -> Result<&str> {
        match name {
            "method" => Ok(&self.method),
            "url" => Ok(&self.url),
            "http_ver" => Ok(&self.http_ver),
            _ => Err(Error::field_not_found(name)),
        }
    }

    /// Copy the request line into a plain field mapping.
    pub fn to_fields(&self) -> Fields {
        Self::FIELD_NAMES
            .iter()
            .zip([&self.method, &self.url, &self.http_ver])
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl From<RequestLine> for Fields {
    fn from(request: RequestLine) -> Self {
        request.to_fields()
    }
}

/// Split a `DD/Mon/YYYY` token into exactly three parts.
pub(crate) fn split_date(date: &str) -> Option<(&str, &str, &str)> {
    let mut parts = date.split('/');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((day, month, year))
}
