//! Fetches URLs and prints the first paragraph of each.
//!
//! URLs come from the command line, or one per line on stdin when none are
//! given. Each successful excerpt is printed as it arrives; a JSON array with
//! one entry per attempted URL (`null` on failure) follows at the end.
//!
//! Usage: `fetch_excerpts [--count N] [--min-spaces N] [--truncate N] [URL...]`

use rs_lede::url_utils::url_queue;
use rs_lede::{BatchOptions, Collector, FetchConfig, HttpFetcher, Truncate};
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

struct Args {
    urls: Vec<String>,
    count: Option<usize>,
    options: BatchOptions,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut parsed = Args {
        urls: Vec::new(),
        count: None,
        options: BatchOptions {
            truncate: Truncate::Line,
            ..BatchOptions::default()
        },
    };
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => parsed.count = Some(args.next().ok_or("--count needs a value")?.parse()?),
            "--min-spaces" => {
                parsed.options.extract.min_spaces =
                    args.next().ok_or("--min-spaces needs a value")?.parse()?;
            }
            "--truncate" => {
                let chars = args.next().ok_or("--truncate needs a value")?.parse()?;
                parsed.options.truncate = Truncate::Chars(chars);
            }
            other => parsed.urls.push(other.to_string()),
        }
    }

    Ok(parsed)
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = parse_args()?;
    if args.urls.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                args.urls.push(line);
            }
        }
    }

    let mut queue = url_queue(args.urls.iter().map(String::as_str));

    let count = args.count.unwrap_or(queue.len());
    let fetcher = HttpFetcher::new(FetchConfig::default())?;

    let stdout = io::stdout();
    let mut sink = |index: usize, text: &str, truncate: Truncate| {
        let mut out = stdout.lock();
        if let Err(err) = writeln!(out, "[{index}] {}", truncate.apply(text)) {
            warn!(error = %err, "failed to write excerpt");
        }
    };

    let results = Collector::new(&fetcher)
        .options(args.options)
        .sink(&mut sink)
        .collect(&mut queue, count);

    println!("{}", serde_json::to_string_pretty(&results)?);
    if !queue.is_empty() {
        eprintln!("{} URL(s) left unfetched", queue.len());
    }

    Ok(())
}
