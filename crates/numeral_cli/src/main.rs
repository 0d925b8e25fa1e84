//! Command-line front end for the numeral converter.
//!
//! # Responsibility
//! - Drive `numeral_api` request handlers from argv.
//! - Print the JSON response body; exit code reflects the response status.

use clap::{Parser, Subcommand, ValueEnum};
use numeral_api::{
    AdapterConfig, CasePolicy, ConversionResponse, MessageLocale, RequestAdapter, Route,
};
use numeral_core::{core_version, default_log_level, init_logging};
use std::process::ExitCode;

const EXIT_OK: u8 = 0;
const EXIT_REJECTED: u8 = 2;

#[derive(Parser)]
#[command(name = "numeral")]
#[command(about = "Convert between arabic integers (1-3999) and Roman numerals")]
#[command(version)]
struct Cli {
    /// Case handling for Roman input (overrides NUMERAL_CASE_POLICY).
    #[arg(long, global = true, value_enum)]
    case_policy: Option<CasePolicyArg>,

    /// Language of error messages (overrides NUMERAL_LOCALE).
    #[arg(long, global = true, value_enum)]
    locale: Option<LocaleArg>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "NUMERAL_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "NUMERAL_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an arabic integer as a Roman numeral.
    ToRoman {
        /// Base-10 digits only.
        #[arg(allow_hyphen_values = true)]
        arabic: String,
    },
    /// Decode a canonical Roman numeral.
    ToArabic {
        /// Uppercase Roman numeral, unless the case policy is `fold`.
        #[arg(allow_hyphen_values = true)]
        roman: String,
    },
    /// Print the core crate version.
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum CasePolicyArg {
    Strict,
    Fold,
}

impl From<CasePolicyArg> for CasePolicy {
    fn from(value: CasePolicyArg) -> Self {
        match value {
            CasePolicyArg::Strict => CasePolicy::Strict,
            CasePolicyArg::Fold => CasePolicy::Fold,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    En,
    Es,
}

impl From<LocaleArg> for MessageLocale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::En => MessageLocale::English,
            LocaleArg::Es => MessageLocale::Spanish,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = match load_config(&cli, |key: &str| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let Some(response) = respond(&cli.command, &RequestAdapter::new(config)) else {
        println!("numeral_core version={}", core_version());
        return ExitCode::SUCCESS;
    };

    match response.to_json() {
        Ok(body) => println!("{body}"),
        Err(err) => {
            eprintln!("failed to render response: {err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::from(exit_code(&response))
}

/// Reads adapter config through `lookup`, then applies flag overrides.
///
/// # Errors
/// - An environment value outside its accepted set.
fn load_config(
    cli: &Cli,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AdapterConfig, String> {
    AdapterConfig::from_lookup(lookup).map(|base| resolve_config(cli, base))
}

/// Flags win over the environment-derived `base`.
fn resolve_config(cli: &Cli, base: AdapterConfig) -> AdapterConfig {
    AdapterConfig {
        case_policy: cli.case_policy.map_or(base.case_policy, CasePolicy::from),
        locale: cli.locale.map_or(base.locale, MessageLocale::from),
    }
}

/// Runs a conversion command; `None` for commands that bypass the adapter.
fn respond(command: &Commands, adapter: &RequestAdapter) -> Option<ConversionResponse> {
    let (route, raw) = match command {
        Commands::ToRoman { arabic } => (Route::ArabicToRoman, arabic),
        Commands::ToArabic { roman } => (Route::RomanToArabic, roman),
        Commands::Version => return None,
    };
    Some(adapter.handle(route, Some(raw.as_str())))
}

fn exit_code(response: &ConversionResponse) -> u8 {
    if response.is_success() {
        EXIT_OK
    } else {
        EXIT_REJECTED
    }
}
