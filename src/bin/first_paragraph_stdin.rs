//! Reads HTML from stdin (or a file) and prints the first paragraph as JSON.
//!
//! Usage: `first_paragraph_stdin [FILE] [--strip TEXT | --strip-pattern REGEX] [--min-spaces N]`

use rs_lede::encoding::decode_body;
use rs_lede::paragraph::first_paragraph_report;
use rs_lede::{ExtractOptions, PlainTextRenderer, Strip};
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn parse_args() -> Result<(Option<String>, ExtractOptions), Box<dyn Error>> {
    let mut path = None;
    let mut options = ExtractOptions::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strip" => {
                let text = args.next().ok_or("--strip needs a value")?;
                options.strip = Some(Strip::literal(text));
            }
            "--strip-pattern" => {
                let pattern = args.next().ok_or("--strip-pattern needs a value")?;
                options.strip = Some(Strip::pattern(&pattern)?);
            }
            "--min-spaces" => {
                let value = args.next().ok_or("--min-spaces needs a value")?;
                options.min_spaces = value.parse()?;
            }
            other if path.is_none() => path = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {other}").into()),
        }
    }

    Ok((path, options))
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let (path, options) = parse_args()?;

    let html = match path {
        Some(path) => decode_body(&fs::read(path)?, None),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            decode_body(&buffer, None)
        }
    };

    let excerpt = first_paragraph_report(&html, &options, &PlainTextRenderer::default());
    println!("{}", serde_json::to_string_pretty(&excerpt)?);

    Ok(())
}
