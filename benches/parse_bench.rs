//! Parser throughput benchmarks.
//!
//! Compares the regex parser against the positional tokenizer on the same
//! lines. The tokenizer exists only to be faster, so this is where that claim
//! gets checked.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `parse_line` | Full line parsing for a typical and a `"-"` request line |
//! | `parse_resource` | Request line decomposition |
//! | `rejected` | Cost of turning a malformed line into a no-match |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench parse_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rsalp::{LineParser, Strategy};
use std::hint::black_box;

const TYPICAL: &str = r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800] "GET /some/url/on/your/site HTTP/1.1" 200 5876 "-" "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36""#;
const DASH_REQUEST: &str = r#"110.83.152.234 - - [03/Jan/2012:23:45:25 +0800] "-" 400 0 "-" "-""#;
const MALFORMED: &str = r#"123.126.50.69 - - [03/Jan/2012:00:00:02 +0800 "GET /some/url/on/your/site HTTP/1.1" 200 5876 "-" "-""#;

const STRATEGIES: [Strategy; 2] = [Strategy::Pattern, Strategy::Token];

fn parse_line_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");
    group.throughput(Throughput::Elements(1));

    for strategy in STRATEGIES {
        for (name, line) in [("typical", TYPICAL), ("dash_request", DASH_REQUEST)] {
            group.bench_with_input(BenchmarkId::new(strategy.name(), name), &line, |b, line| {
                b.iter(|| strategy.parse_line(black_box(line)))
            });
        }
    }

    group.finish();
}

fn parse_resource_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_resource");
    group.throughput(Throughput::Elements(1));

    let resource = "GET /some/url/on/your/site?with=query&and=more HTTP/1.1";
    for strategy in STRATEGIES {
        group.bench_with_input(
            BenchmarkId::new(strategy.name(), "get"),
            &resource,
            |b, resource| b.iter(|| strategy.parse_resource(black_box(resource))),
        );
    }

    group.finish();
}

fn rejected_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejected");

    for strategy in STRATEGIES {
        group.bench_with_input(
            BenchmarkId::new(strategy.name(), "missing_bracket"),
            &MALFORMED,
            |b, line| b.iter(|| strategy.parse_line(black_box(line))),
        );
    }

    group.finish();
}

criterion_group!(benches, parse_line_bench, parse_resource_bench, rejected_bench);
criterion_main!(benches);
