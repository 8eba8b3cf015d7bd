//! Word Filter - Main entrypoint.
//!
//! Loads configuration and a vocabulary file, builds the filter and answers
//! prefix/suffix queries from the command line.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_filter_lib::config::filter::AlphabetKind;
use word_filter_lib::config::{ConfigLoader, LogConfig, WordFilterConfig, ENV_PREFIX};
use word_filter_lib::data_structures::affix_trie::{Alphabet, CharMap, LowercaseAscii};
use word_filter_lib::data_structures::word_filter::FilterStats;
use word_filter_lib::error::config::ConfigError;
use word_filter_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, TracingErrorReporter, WordFilterError,
    WordFilterResult,
};
use word_filter_lib::{vocabulary, WordFilter};

/// Command line arguments for the word filter.
#[derive(Parser, Debug)]
#[clap(name = "word_filter", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the vocabulary file (overrides `vocabulary.path`)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Find the last word with the given prefix and suffix
    Query {
        /// Required prefix (empty matches everything)
        #[clap(short, long, default_value = "")]
        prefix: String,

        /// Required suffix (empty matches everything)
        #[clap(short, long, default_value = "")]
        suffix: String,
    },

    /// Print index statistics
    Stats {
        /// Print as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration and the vocabulary
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> WordFilterResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| {
        WordFilterError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Resolves the vocabulary path from the command line or configuration.
fn vocabulary_path<'a>(
    args: &'a Args,
    config: &'a WordFilterConfig,
) -> WordFilterResult<&'a Path> {
    args.words
        .as_deref()
        .or(config.vocabulary.path.as_deref())
        .ok_or_else(|| ConfigError::MissingValue("vocabulary.path".to_string()).into())
}

/// Subcommands that need a built filter.
#[derive(Debug, Clone, Copy)]
enum FilterCommand<'a> {
    Query { prefix: &'a str, suffix: &'a str },
    Stats { json: bool },
    Validate,
}

/// What a subcommand needs to run.
#[derive(Debug)]
enum Plan<'a> {
    GenerateConfig(&'a Path),
    Filter(FilterCommand<'a>),
}

impl Command {
    fn plan(&self) -> Plan<'_> {
        match self {
            Command::Query { prefix, suffix } => Plan::Filter(FilterCommand::Query {
                prefix: prefix.as_str(),
                suffix: suffix.as_str(),
            }),
            Command::Stats { json } => Plan::Filter(FilterCommand::Stats { json: *json }),
            Command::Validate => Plan::Filter(FilterCommand::Validate),
            Command::GenConfig { output } => Plan::GenerateConfig(output),
        }
    }
}

/// Formats a query answer as `index` or `index<TAB>word`.
fn query_line<A: Alphabet>(filter: &WordFilter<A>, prefix: &str, suffix: &str) -> String {
    let found = filter.find(prefix, suffix);
    let index = found.map_or(-1, |i| i as i64);
    match found.and_then(|i| filter.word(i)) {
        Some(word) => format!("{index}\t{word}"),
        None => index.to_string(),
    }
}

/// Builds a filter over the configured vocabulary and runs `command` on it.
fn run_with_filter<A: Alphabet>(
    command: FilterCommand<'_>,
    args: &Args,
    config: &WordFilterConfig,
) -> WordFilterResult<()> {
    let path = vocabulary_path(args, config)?;
    let words = vocabulary::load(path, &config.vocabulary)?;
    let filter: WordFilter<A> = WordFilter::with_options(words, config.filter.options())?;

    match command {
        FilterCommand::Query { prefix, suffix } => {
            println!("{}", query_line(&filter, prefix, suffix));
        }
        FilterCommand::Stats { json } => {
            let stats: FilterStats = filter.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("words:        {}", stats.words);
                println!("prefix nodes: {}", stats.prefix_nodes);
                println!("suffix nodes: {}", stats.suffix_nodes);
            }
        }
        FilterCommand::Validate => {
            info!(words = filter.len(), "Vocabulary validated successfully");
        }
    }

    Ok(())
}

/// Writes the default configuration as TOML to `output`.
fn generate_config(output: &Path) -> WordFilterResult<()> {
    info!("Generating default configuration");
    let default_config = WordFilterConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| WordFilterError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(args: &Args, config: &WordFilterConfig) -> WordFilterResult<()> {
    let command = match args.command.plan() {
        Plan::GenerateConfig(output) => return generate_config(output),
        Plan::Filter(command) => command,
    };

    match config.filter.alphabet {
        AlphabetKind::Unicode => run_with_filter::<CharMap>(command, args, config),
        AlphabetKind::Lowercase => run_with_filter::<LowercaseAscii>(command, args, config),
    }
}

/// Main entry point for the application.
fn main() -> WordFilterResult<()> {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet; fall back to defaults to report
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Err(e) = run(&args, &config) {
        let component = match e {
            WordFilterError::Vocabulary(_) => "vocabulary",
            WordFilterError::Trie(_) => "index",
            WordFilterError::Config(_) => "config",
            _ => "cli",
        };
        get_error_reporting().report(ErrorContext::new(e, component));
        process::exit(1);
    }

    Ok(())
}
