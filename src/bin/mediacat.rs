//! Command-line interface for querying media catalog files.
//!
//! Flags compose left to right, each narrowing the working catalog before
//! the next is applied; `--dupes` only reports and does not filter.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use mediacat::{Catalog, CatalogQueries, CatalogReader};
use std::fs::File;
use std::io::Write;

fn cli() -> Command {
    Command::new("mediacat")
        .about("Query media catalog files in the line-oriented dialect")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .required(true)
                .help("Catalog file to load"),
        )
        .arg(
            Arg::new("find")
                .long("find")
                .value_name("SUBSTR")
                .action(ArgAction::Append)
                .help("Keep records whose title or author contains SUBSTR (case-insensitive)"),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .value_name("TAG")
                .action(ArgAction::Append)
                .help("Keep records carrying TAG exactly (case-sensitive)"),
        )
        .arg(
            Arg::new("top")
                .long("top")
                .value_name("N")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(i64))
                .help("Keep only the N highest-rated records"),
        )
        .arg(
            Arg::new("dupes")
                .long("dupes")
                .action(ArgAction::Count)
                .help("Report duplicate title|author|year keys (does not filter)"),
        )
}

/// One query operation, tagged with its position on the command line so the
/// left-to-right composition order survives clap's by-flag grouping.
#[derive(Debug, PartialEq)]
enum Op {
    Find(String),
    Tag(String),
    Top(i64),
    Dupes,
}

fn collect_ops(matches: &ArgMatches) -> Vec<(usize, Op)> {
    let mut ops = Vec::new();
    if let (Some(values), Some(indices)) = (
        matches.get_many::<String>("find"),
        matches.indices_of("find"),
    ) {
        for (value, index) in values.zip(indices) {
            ops.push((index, Op::Find(value.clone())));
        }
    }
    if let (Some(values), Some(indices)) =
        (matches.get_many::<String>("tag"), matches.indices_of("tag"))
    {
        for (value, index) in values.zip(indices) {
            ops.push((index, Op::Tag(value.clone())));
        }
    }
    if let (Some(values), Some(indices)) =
        (matches.get_many::<i64>("top"), matches.indices_of("top"))
    {
        for (value, index) in values.zip(indices) {
            ops.push((index, Op::Top(*value)));
        }
    }
    if let Some(indices) = matches.indices_of("dupes") {
        for index in indices {
            ops.push((index, Op::Dupes));
        }
    }
    ops.sort_by_key(|(index, _)| *index);
    ops
}

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn print_catalog(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    writeln!(
        out,
        "{:<20}{:<20}{:<6}{:<6}TAGS",
        "TITLE", "AUTHOR", "YEAR", "RATE"
    )?;
    for record in catalog {
        writeln!(
            out,
            "{:<20}{:<20}{:<6}{:<6.1}{}",
            truncate(&record.title, 18),
            truncate(&record.author, 18),
            record.year,
            record.rating,
            record.tags.join(" ")
        )?;
    }
    Ok(())
}

fn execute(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("file")
        .context("FILE argument missing")?;

    // Unreadable input is fatal at the CLI surface even though the library
    // degrades it to an empty catalog. Opening a directory can succeed, so
    // a read failure must be fatal as well, not just a failed open.
    let file = File::open(path).with_context(|| format!("cannot open {path}"))?;
    let mut reader = CatalogReader::new(file);
    let mut catalog = reader
        .read_catalog()
        .with_context(|| format!("cannot read {path}"))?;
    for message in &reader.report().diagnostics {
        eprintln!("warning: {message}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (_, op) in collect_ops(matches) {
        match op {
            Op::Find(substr) => catalog = catalog.search(&substr),
            Op::Tag(tag) => catalog = catalog.filter_by_tag(&tag),
            Op::Top(n) => catalog = catalog.top_n(n),
            Op::Dupes => {
                for (key, count) in catalog.find_duplicates() {
                    writeln!(out, "Duplicate: {key} ({count})")?;
                }
            }
        }
    }

    print_catalog(&mut out, &catalog)
}

fn main() {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // Help and version print to stdout and exit cleanly; anything
            // else (unknown flag, missing FILE) is exit code 1.
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = execute(&matches) {
        eprintln!("mediacat: {e:#}");
        std::process::exit(1);
    }
}
