//! # rsalp - Rust Apache Log Parser
//!
//! A Rust library for parsing Apache/Nginx "combined" access log lines.
//!
//! Two interchangeable parsers implement the [`LineParser`] trait:
//! - [`PatternParser`] matches each line against one regular expression. It
//!   tolerates irregular spacing and is the default.
//! - [`TokenParser`] splits on whitespace and picks fields by position. It is
//!   much faster but only understands the standard layout.
//!
//! Both return `None` for lines they cannot match; nothing panics on bad input.
//!
//! ## Quick Start
//!
//! ```rust
//! use rsalp::{LineParser, PatternParser, TokenParser};
//!
//! let line = r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800] "GET /some/url/on/your/site HTTP/1.1" 200 5876 "-" "Mozilla/5.0""#;
//!
//! let record = PatternParser.parse_line(line).unwrap();
//! assert_eq!(record, TokenParser.parse_line(line).unwrap());
//!
//! assert_eq!(record.ip(), "123.126.50.69");
//! assert_eq!(record.date(), "03/Jan/2012");
//!
//! let request = PatternParser.parse_resource(record.resource()).unwrap();
//! assert_eq!(request.method(), "GET");
//! assert_eq!(request.http_ver(), "1.1");
//!
//! assert!(PatternParser.parse_line("not a log line").is_none());
//! ```
//!
//! ## Features
//!
//! - **Two Strategies**: Pick [`Strategy::Pattern`] or [`Strategy::Token`] at runtime, e.g. from configuration
//! - **String Fields**: Values are kept verbatim, with integer conversion on demand
//! - **Reader**: Iterate over any `Read` source line by line with [`Reader`]
//! - **Error Handling**: Error types using `thiserror` for everything around the parsers
//! - **Optional Serde Support**: Serialize/deserialize records when the `serde` feature is enabled

pub mod error;
pub mod parser;
pub mod pattern;
pub mod reader;
pub mod record;
pub mod token;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use parser::{LineParser, Strategy};
pub use pattern::PatternParser;
pub use reader::Reader;
pub use record::{Fields, LogRecord, RequestLine};
pub use token::TokenParser;
