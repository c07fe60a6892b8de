//! Basic usage example for the rsalp library.
//!
//! This example parses the same combined log lines with both parsers, splits
//! their request lines, and reads a small log through `Reader`.
//!
//! Set `RUST_LOG=rsalp=trace` to see which lines each parser rejects.

use rsalp::{LineParser, PatternParser, Reader, Strategy, TokenParser};
use std::io::Cursor;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800] "GET /some/url/on/your/site HTTP/1.1" 200 5876 "-" "User agent like Mozilla chrome or even spider(+http://www.spider.com/docs/help/webmasters.htm#07)""#;
const DASH_REQUEST: &str = r#"110.83.152.234 - - [03/Jan/2012:23:45:25 +0800] "-" 400 0 "-" "-""#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== rsalp Basic Usage Example ===\n");

    // Example 1: Both parsers on the same lines
    parsing_example()?;

    // Example 2: Request line decomposition
    resource_example();

    // Example 3: Reading many lines
    reader_example()?;

    // Example 4: Error handling
    error_handling_example();

    Ok(())
}

fn print_record<P: LineParser>(name: &str, parser: P, line: &str) -> rsalp::Result<()> {
    match parser.parse_line(line) {
        Some(record) => {
            println!("{} parser:", name);
            for field in rsalp::LogRecord::FIELD_NAMES {
                println!("  {:<11} {}", field, record.field(field)?);
            }
        }
        None => println!("{} parser: no match", name),
    }
    println!();
    Ok(())
}

/// Example 1: Parsing a line with the regex parser and the tokenizer
fn parsing_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Line Parsing");
    println!("---------------");

    for line in [SAMPLE, DASH_REQUEST] {
        println!("Log line: {}", line);
        println!();
        print_record("Pattern", PatternParser, line)?;
        print_record("Token", TokenParser, line)?;
    }

    println!();
    Ok(())
}

/// Example 2: Splitting request lines
fn resource_example() {
    println!("2. Request Lines");
    println!("----------------");

    for resource in ["GET /some/url/on/your/site HTTP/1.1", "-"] {
        for strategy in [Strategy::Pattern, Strategy::Token] {
            match strategy.parse_resource(resource) {
                Some(request) => println!(
                    "  {:<7} {:?} -> method={} url={} http_ver={}",
                    strategy,
                    resource,
                    request.method(),
                    request.url(),
                    request.http_ver()
                ),
                None => println!("  {:<7} {:?} -> no match", strategy, resource),
            }
        }
    }

    println!("\n");
}

/// Example 3: Processing multiple log lines
fn reader_example() -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Processing Multiple Lines");
    println!("----------------------------");

    let log_data = format!(
        "{SAMPLE}\n{DASH_REQUEST}\nthis is not a log line\n\
         10.0.0.1 - admin [03/Jan/2012:23:50:11 +0800] \"POST /admin/login HTTP/1.1\" 302 - \"-\" \"curl/7.64.1\"\n"
    );

    let strategy: Strategy = "token".parse()?;
    println!("Processing {} lines with the {} parser...", log_data.lines().count(), strategy);
    println!();

    let (records, skipped) = Reader::with_parser(Cursor::new(log_data), strategy).collect_lenient()?;

    let mut status_counts = std::collections::BTreeMap::new();
    let mut total_bytes = 0;
    for record in &records {
        *status_counts.entry(record.status()).or_insert(0) += 1;
        // "-" means no body was sent
        total_bytes += record.int_field("size").unwrap_or(0);
    }

    println!("Statistics:");
    println!("  Parsed lines:  {}", records.len());
    println!("  Skipped lines: {}", skipped);
    println!("  Total bytes:   {}", total_bytes);
    println!("  Status codes:");
    for (status, count) in status_counts {
        println!("    {}: {} times", status, count);
    }

    println!("\n");
    Ok(())
}

/// Example 4: Error handling scenarios
fn error_handling_example() {
    println!("4. Error Handling");
    println!("-----------------");

    println!("4a. Unknown strategy:");
    if let Err(e) = "split".parse::<Strategy>() {
        println!("  Error: {}", e);
    }

    println!("\n4b. Line that does not match:");
    let mut reader = Reader::new(Cursor::new("This is not a valid log line"));
    match reader.read() {
        Some(Ok(_)) => println!("  Unexpected success"),
        Some(Err(e)) => println!("  Error: {}", e),
        None => println!("  No data"),
    }

    println!("\n4c. Field not found:");
    if let Some(record) = PatternParser.parse_line(SAMPLE) {
        if let Err(e) = record.field("nonexistent_field") {
            println!("  Error: {}", e);
        }
    }

    println!("\n4d. Type conversion error:");
    if let Some(record) = TokenParser.parse_line(SAMPLE) {
        if let Err(e) = record.int_field("referer") {
            println!("  Error: {}", e);
        }
    }

    println!("\n");
}
