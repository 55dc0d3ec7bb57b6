use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "colhash")]
#[command(about = "Replace selected CSV columns with salted SHA-256 digests")]
struct Cli {
    /// Path to the input CSV file
    input: PathBuf,
    /// Column names to hash; skips the interactive prompt
    #[arg(long, num_args = 1..)]
    columns: Option<Vec<String>>,
    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ if s == "\\t" => Ok(b'\t'),
        _ => Err(format!("expected a single ASCII character, got '{}'", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let opts = colhash::anonymize::Options {
        input: cli.input,
        columns: cli.columns,
        delimiter: cli.delimiter,
    };

    if let Err(e) = colhash::anonymize::run(&opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
