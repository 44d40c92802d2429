use crate::expression::parse_expression;
use crate::solver::{AliasMap, AliasSolver, SolverConfig};
use crate::utils::validate_seed;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Temurah - arithmetic aliases for integers drawn from a digit seed
#[derive(Parser, Debug)]
#[command(name = "temurah")]
#[command(
    about = "Generate short arithmetic expressions over a seed's digit runs for every reachable value"
)]
#[command(version)]
pub struct CliArgs {
    /// Seed digit string the aliases draw from
    pub seed: String,

    /// Only print the aliases for this value
    #[arg(short, long)]
    pub value: Option<i64>,

    /// Max expressions kept per value
    #[arg(long, default_value_t = 3)]
    pub keep_top: usize,

    /// Max distinct values kept per interval
    #[arg(long, default_value_t = 20_000)]
    pub max_results_per_node: usize,

    /// Disable negated leaf terms
    #[arg(long)]
    pub no_unary_minus: bool,

    /// Re-parse and re-evaluate every alias before printing
    #[arg(long)]
    pub verify: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub seed: String,
    pub value: Option<i64>,
    pub solver: SolverConfig,
    pub verify: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Validate seed
    validate_seed(&args.seed).context("Invalid seed")?;

    Ok(CliConfig {
        seed: args.seed,
        value: args.value,
        solver: SolverConfig {
            allow_unary_minus: !args.no_unary_minus,
            keep_top_k_by_len: args.keep_top,
            max_results_per_node: args.max_results_per_node,
        },
        verify: args.verify,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = AliasSolver::with_config(config.solver);

    info!("Generating aliases from seed '{}'", config.seed);

    let aliases = solver
        .alias_map(&config.seed)
        .context("Alias search failed")?;

    if config.verify {
        verify_aliases(&aliases);
    }

    match config.value {
        Some(value) => match aliases.get(&value) {
            Some(texts) => println!("{}", texts.join(", ")),
            None => {
                warn!("Value {} is not reachable from '{}'", value, config.seed);
                println!("Unknown.");
            }
        },
        None => {
            for (value, texts) in &aliases {
                println!("{}: {}", value, texts.join(", "));
            }
        }
    }
    Ok(())
}

fn verify_aliases(aliases: &AliasMap) {
    for (value, texts) in aliases {
        for text in texts {
            let found = parse_expression(text)
                .ok()
                .and_then(|expr| expr.evaluate().ok());
            if found != Some(*value) {
                warn!("Alias '{}' for {} failed verification", text, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_seed() {
        let result = validate_seed("123");
        assert!(result.is_ok());

        let result = validate_seed("12a3");
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs {
            seed: "352".to_string(),
            value: Some(37),
            keep_top: 3,
            max_results_per_node: 20_000,
            no_unary_minus: false,
            verify: false,
            log_level: LogLevel::Warn,
        };

        assert_eq!(args.seed, "352");
        assert_eq!(args.value, Some(37));
        assert!(!args.no_unary_minus);
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
