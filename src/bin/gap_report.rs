//! Compares a reference product page against competitor pages on disk.
//!
//! Usage: `gap_report [--top N] [--json] [--rows] [--delimiter D] REFERENCE.html COMPETITOR.html...`
//!
//! Prints the gap report, the consolidated frequency report and corpus
//! insights. `--rows` prints flat export rows instead, list fields joined
//! by the delimiter. Logs go to stderr, filtered by `RUST_LOG`.

use std::env;
use std::error::Error;
use std::fs;
use std::io;

use rs_product_gap::encoding::decode_html;
use rs_product_gap::pipeline::{ExtractionPipeline, Fetcher};
use rs_product_gap::summary::{build_report, summarize};
use rs_product_gap::{AnalysisOptions, Options, ProductRecord};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Reads pages from the local filesystem, treating each "URL" as a path.
struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, url: &str) -> rs_product_gap::Result<String> {
        let bytes = fs::read(url)?;
        Ok(decode_html(&bytes))
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    reference: &'a ProductRecord,
    competitors: &'a [ProductRecord],
    gaps: &'a rs_product_gap::gap::GapReport,
    report: Vec<rs_product_gap::summary::ReportRow>,
    insights: rs_product_gap::summary::Insights,
}

struct Args {
    analysis: AnalysisOptions,
    options: Options,
    json: bool,
    rows: bool,
    reference: String,
    competitors: Vec<String>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut analysis = AnalysisOptions::default();
    let mut options = Options::default();
    let mut json = false;
    let mut rows = false;
    let mut paths = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--top" => {
                let value = args.next().ok_or("--top needs a value")?;
                analysis.top_n = value.parse()?;
            }
            "--json" => json = true,
            "--rows" => rows = true,
            "--delimiter" => {
                options.export_delimiter = args.next().ok_or("--delimiter needs a value")?;
            }
            _ => paths.push(arg),
        }
    }

    if paths.len() < 2 {
        return Err("usage: gap_report [--top N] [--json] [--rows] [--delimiter D] REFERENCE.html COMPETITOR.html...".into());
    }
    let reference = paths.remove(0);
    Ok(Args { analysis, options, json, rows, reference, competitors: paths })
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;
    let pipeline = ExtractionPipeline::new(args.options);
    let comparison = pipeline.compare(&FileFetcher, &args.reference, &args.competitors)?;

    for failure in &comparison.competitors.failures {
        eprintln!("skipped {}: {}", failure.url, failure.error);
    }

    let mut corpus = vec![comparison.reference.clone()];
    corpus.extend(comparison.competitors.records.iter().cloned());

    if args.rows {
        println!("{}", serde_json::to_string_pretty(&pipeline.export_rows(&corpus))?);
        return Ok(());
    }

    let report = build_report(&corpus, pipeline.lexicon(), args.analysis.top_n);
    let insights = summarize(&corpus, pipeline.lexicon(), args.analysis.top_n);

    if args.json {
        let output = JsonOutput {
            reference: &comparison.reference,
            competitors: &comparison.competitors.records,
            gaps: &comparison.report,
            report,
            insights,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Reference: {}", comparison.reference.title);
    println!("Competitors: {}", comparison.competitors.records.len());
    println!();
    print!("{}", comparison.report);
    println!();
    println!("{:<8} {:<40} {:>9}", "kind", "item", "frequency");
    for row in &report {
        println!("{:<8} {:<40} {:>9}", row.kind.to_string(), row.item, row.frequency);
    }
    println!();
    println!("Products: {}", insights.product_count);
    println!("Price transparency: {:.1}%", insights.price_transparency);
    println!("Average features: {:.1}", insights.average_features);
    if let Some((term, count)) = &insights.top_term {
        println!("Top term: {term} ({count})");
    }
    if let Some((word, count)) = &insights.top_feature_word {
        println!("Top feature word: {word} ({count})");
    }
    if let Some((label, count)) = &insights.top_filter {
        println!("Top filter: {label} ({count})");
    }
    for (kind, matches) in [
        ("term", &insights.term_categories),
        ("filter", &insights.filter_categories),
        ("feature", &insights.feature_categories),
    ] {
        for found in matches {
            println!("{kind} bucket {}: {}", found.bucket, found.items.join(", "));
        }
    }

    Ok(())
}
