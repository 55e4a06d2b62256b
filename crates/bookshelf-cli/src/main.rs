use anyhow::{Context, Result};
use bookshelf::{Catalog, Record};
use clap::Parser;
use regex::RegexBuilder;
use serde_json::json;
use std::io::{self, Write};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog name shown in the report banner
    #[arg(long, default_value = "Books and Books and Books")]
    name: String,

    /// Substring used for the title-filter and removal sections
    #[arg(long, default_value = "the")]
    filter: String,

    /// Any year inside the decade to report on
    #[arg(long, default_value_t = 2000)]
    decade: i32,

    /// Year for the existence check
    #[arg(long, default_value_t = 1950)]
    year: i32,

    /// Word counted across titles
    #[arg(long, default_value_t = String::from("heart"))]
    word: String,

    /// Lower bound of the percentage year range
    #[arg(long, default_value_t = 1940)]
    from: i32,

    /// Upper bound of the percentage year range
    #[arg(long, default_value_t = 1950)]
    to: i32,

    /// Title character length to match
    #[arg(long, default_value_t = 15)]
    length: usize,

    /// Extra section: titles matching this regular expression
    #[arg(long, value_name = "REGEX")]
    matching: Option<String>,

    /// Emit the report as a single JSON object instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut catalog = Catalog::classics(cli.name.as_str())
        .with_context(|| format!("Unable to open catalog: {:?}", cli.name))?;

    let pattern = match &cli.matching {
        Some(raw) => Some(
            RegexBuilder::new(raw)
                .case_insensitive(true)
                .size_limit(1024 * 100) // 100 kb
                .build()
                .with_context(|| format!("Invalid pattern: {}", raw))?,
        ),
        None => None,
    };

    if cli.json {
        return print_json_report(&mut catalog, &cli, pattern.as_ref());
    }

    print_text_report(&mut catalog, &cli, pattern.as_ref())
}

fn print_text_report(
    catalog: &mut Catalog,
    cli: &Cli,
    pattern: Option<&regex::Regex>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = Report::new(stdout.lock());

    out.line(format!("Welcome to {}", catalog.name()))?;

    out.section("All of the book titles in UPPERCASE")?;
    for title in catalog.all_titles_uppercased() {
        out.line(title)?;
    }

    out.section(format!("Book titles containing \"{}\"", cli.filter))?;
    for title in catalog.titles_containing(&cli.filter) {
        out.line(title)?;
    }

    out.section("All titles in alphabetical order")?;
    for title in catalog.titles_sorted_alphabetically() {
        out.line(title)?;
    }

    out.section(format!("Books from the {}s", (cli.decade / 10) * 10))?;
    for title in catalog.titles_in_decade_of(cli.decade) {
        out.line(title)?;
    }

    out.section("Longest book title")?;
    out.line(catalog.longest_title()?)?;

    out.section(format!("Is there a book written in {}?", cli.year))?;
    out.line(catalog.exists_with_year(cli.year).to_string())?;

    out.section(format!("How many books contain \"{}\"?", cli.word))?;
    out.line(catalog.count_containing(&cli.word).to_string())?;

    out.section(format!(
        "Percentage of books written between {} and {}",
        cli.from, cli.to
    ))?;
    out.line(format!("{}%", catalog.percent_between(cli.from, cli.to)?))?;

    out.section("Oldest book")?;
    let oldest = catalog.oldest()?;
    out.line(format!(
        "{} by {}, {}",
        oldest.title, oldest.author, oldest.year_published
    ))?;

    out.section(format!("Titles with {} characters", cli.length))?;
    for record in catalog.with_title_length(cli.length) {
        out.line(&record.title)?;
    }

    if let Some(pattern) = pattern {
        out.section(format!("Titles matching /{}/", pattern.as_str()))?;
        for title in catalog.titles_matching(pattern) {
            out.line(title)?;
        }
    }

    out.section("All titles through the index")?;
    for title in catalog.indexed_titles_in_order() {
        out.line(title)?;
    }

    catalog.remove_titles_containing(&cli.filter);

    out.section(format!(
        "All titles with \"{}\" filtered out",
        cli.filter
    ))?;
    for record in catalog.indexed_records_in_order() {
        out.line(record.to_string())?;
    }

    out.finish()
}

fn print_json_report(
    catalog: &mut Catalog,
    cli: &Cli,
    pattern: Option<&regex::Regex>,
) -> Result<()> {
    fn owned(titles: Vec<&str>) -> Vec<String> {
        titles.into_iter().map(str::to_string).collect()
    }

    let uppercased: Vec<String> = catalog.all_titles_uppercased().collect();
    let containing = owned(catalog.titles_containing(&cli.filter));
    let alphabetical = owned(catalog.titles_sorted_alphabetically());
    let in_decade = owned(catalog.titles_in_decade_of(cli.decade));
    let longest = catalog.longest_title()?.to_string();
    let exists = catalog.exists_with_year(cli.year);
    let count = catalog.count_containing(&cli.word);
    let percent = catalog.percent_between(cli.from, cli.to)?;
    let oldest = catalog.oldest()?.clone();
    let with_length: Vec<Record> = catalog
        .with_title_length(cli.length)
        .into_iter()
        .cloned()
        .collect();
    let matching: Option<Vec<String>> =
        pattern.map(|pattern| owned(catalog.titles_matching(pattern)));
    let indexed: Vec<String> = catalog
        .indexed_titles_in_order()
        .map(str::to_string)
        .collect();

    let removed = catalog.remove_titles_containing(&cli.filter);
    let surviving: Vec<String> = catalog
        .indexed_titles_in_order()
        .map(str::to_string)
        .collect();

    let report = json!({
        "name": catalog.name(),
        "uppercased": uppercased,
        "containing": containing,
        "alphabetical": alphabetical,
        "in_decade": in_decade,
        "longest": longest,
        "exists_with_year": exists,
        "count_containing": count,
        "percent_between": percent,
        "oldest": oldest,
        "with_title_length": with_length,
        "matching": matching,
        "indexed": indexed,
        "indexed_after_removal": {
            "removed": removed,
            "titles": surviving,
        },
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Labeled-section writer over stdout that tolerates a closed pipe.
struct Report<W: Write> {
    out: W,
    pipe_closed: bool,
}

impl<W: Write> Report<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            pipe_closed: false,
        }
    }

    fn section(&mut self, label: impl AsRef<str>) -> Result<()> {
        self.write(format!("\n{}", label.as_ref()))
    }

    fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        self.write(text.as_ref().to_string())
    }

    fn write(&mut self, text: String) -> Result<()> {
        if self.pipe_closed {
            return Ok(());
        }
        match writeln!(self.out, "{}", text) {
            Ok(_) => Ok(()),
            Err(err) if should_ignore_pipe_error(&err) => {
                self.pipe_closed = true;
                Ok(())
            }
            Err(err) => Err(err).context(format!("Failed to print line: {}", text)),
        }
    }

    fn finish(&mut self) -> Result<()> {
        if self.pipe_closed {
            return Ok(());
        }
        match self.out.flush() {
            Ok(_) => Ok(()),
            Err(err) if should_ignore_pipe_error(&err) => Ok(()),
            Err(err) => Err(err).context("Failed to flush stdout"),
        }
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
