//! Reads a product page from stdin and prints its record as JSON.
//!
//! Usage: `extract_stdin [URL] < page.html`
//!
//! The optional URL sets `source_url`, the domain and the base for image
//! resolution. Logs go to stderr, filtered by `RUST_LOG`.

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use rs_product_gap::{extract_bytes_with_options, Lexicon, Options};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let options = Options {
        url: env::args().nth(1),
        ..Options::default()
    };
    let lexicon = Lexicon::new(&options.languages);
    let record = extract_bytes_with_options(&html, &options, &lexicon);

    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize record: {err}");
            return ExitCode::FAILURE;
        }
    }

    if record.is_successful() {
        ExitCode::SUCCESS
    } else {
        tracing::warn!("no product title found");
        ExitCode::from(2)
    }
}
