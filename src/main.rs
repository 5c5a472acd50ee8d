use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use log::{debug, warn, LevelFilter};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use wordcheck::cli::output::{self, OutputFormat};
use wordcheck::config::Overrides;
use wordcheck::{Config, Dictionary, ExitStatus, SpellChecker};

#[derive(Parser, Debug)]
#[command(name = "wordcheck")]
#[command(version, about = "Check a document against a word list, line by line", long_about = None)]
struct Cli {
    /// Document to check
    #[arg(value_name = "DOCUMENT")]
    document: Option<PathBuf>,

    /// Word list, one word per line (defaults to /usr/share/dict/words)
    #[arg(value_name = "DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print a one-line summary to stderr
    #[arg(long)]
    summary: bool,

    /// Check lines on all cores
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() {
    let mut cli = Cli::parse();
    init_logger(cli.verbose);

    let document = match (cli.completion, cli.document.take()) {
        (Some(shell), _) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "wordcheck", &mut io::stdout());
            return;
        }
        (None, Some(document)) => document,
        // Usage error, exits with 2
        (None, None) => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "the following required arguments were not provided:\n  <DOCUMENT>",
            )
            .exit(),
    };

    let status = match run(document, cli) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("error: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("  caused by: {}", cause);
            }
            ExitStatus::IoError
        }
    };

    process::exit(status.code());
}

fn run(document: PathBuf, cli: Cli) -> Result<ExitStatus> {
    let config = Config::load(Overrides {
        dictionary: cli.dictionary,
        format: cli.format,
        no_color: cli.no_color,
        parallel: cli.parallel,
    })?;
    debug!("Resolved config: {:?}", config);

    let checker = SpellChecker::new(Dictionary::load(&config.dictionary_path())?);
    if checker.dictionary().is_empty() {
        warn!("Dictionary is empty; every word will be reported");
    }

    let report = checker.check_file(&document, config.parallel)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, &document, &report, config.color, config.format)?;
    out.flush()?;

    if cli.summary {
        eprintln!("{}", output::summary_line(&report, config.color));
    }

    Ok(ExitStatus::from_report(&report))
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
