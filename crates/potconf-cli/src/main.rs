use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use potconf::decode::scanner;
use potconf::{ArrayLayout, ConfigTable, ConfigValue, ParseStats};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// `{"key": "value", "list": ["a", "b"]}`
    Debug,
    Json,
    /// Canonical config text
    Conf,
}

#[derive(Parser, Debug)]
#[command(
    name = "potconf",
    about = "Parse a pothole config file and print the resulting table",
    version
)]
struct Args {
    /// Output rendering
    #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// One array element per line (conf output)
    #[arg(long, default_value_t = false)]
    multiline: bool,

    /// Print the entries read before a fatal parse error (still exits non-zero)
    #[arg(long, default_value_t = false)]
    allow_partial: bool,

    /// Print parse statistics to stderr
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn render(table: &ConfigTable, args: &Args) -> Result<String> {
    let out = match args.format {
        FormatArg::Debug => render_debug(table),
        FormatArg::Json => {
            let value = potconf::to_json_value(table)?;
            if args.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            }
        }
        FormatArg::Conf => {
            let options = potconf::Options {
                array_layout: if args.multiline {
                    ArrayLayout::Multiline
                } else {
                    ArrayLayout::Inline
                },
                ..potconf::Options::default()
            };
            let s = potconf::encode_to_string(table, &options)?;
            s.trim_end_matches('\n').to_string()
        }
    };
    Ok(out)
}

fn render_debug(table: &ConfigTable) -> String {
    let entries: Vec<String> = table
        .iter()
        .map(|(k, v)| match v {
            ConfigValue::Scalar(s) => format!("{k:?}: {s:?}"),
            ConfigValue::Array(items) => format!("{k:?}: {items:?}"),
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn print_stats(stats: &ParseStats) {
    eprintln!(
        "lines: {} (content {}, comment {}, blank {}, malformed {})",
        stats.lines, stats.content_lines, stats.comment_lines, stats.blank_lines, stats.malformed_lines
    );
    eprintln!(
        "entries: {} ({} overwritten), array chars: {}",
        stats.entries, stats.overwrites, stats.chars
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let mut parser = potconf::Parser::new();
    for line in scanner::iter(&buf) {
        parser.feed(line);
    }
    let stats = *parser.stats();
    let (table, outcome) = parser.finish();

    if args.stats {
        print_stats(&stats);
    }

    if let Err(err) = outcome {
        if args.allow_partial {
            println!("{}", render(&table, &args)?);
        }
        return Err(err).context("parse failed");
    }

    println!("{}", render(&table, &args)?);
    Ok(())
}
