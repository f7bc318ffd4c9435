//! Secure Password Generator CLI
//!
//! Command-line consumer of the generation engine: reads settings from
//! flags and an optional TOML file, prints passwords and a strength
//! meter.

use clap::{Parser, ValueEnum};
use secure_passgen::{
    config::{ConfigError, FileConfig},
    display::{render_meter, system_prefers_dark, ThemePreference, ThemeState},
    generator::{GenerationConfig, GenerationError, PasswordGenerator},
    metrics::{MetricsError, MetricsRegistry, MetricsSnapshot},
    CharacterClass, StrengthReport,
};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use zeroize::Zeroizing;

#[derive(Debug, Parser)]
#[command(name = "secure-passgen", version, about = "Generate passwords from a secure random source")]
struct Cli {
    /// Password length (1-1024)
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude lowercase letters
    #[arg(long)]
    no_lowercase: bool,

    /// Exclude uppercase letters
    #[arg(long)]
    no_uppercase: bool,

    /// Exclude digits
    #[arg(long)]
    no_digits: bool,

    /// Include symbols
    #[arg(long)]
    symbols: bool,

    /// Keep look-alike characters such as O/0 and l/1
    #[arg(long)]
    allow_ambiguous: bool,

    /// Guarantee at least one character of this class (repeatable)
    #[arg(long = "require", value_name = "CLASS")]
    require: Vec<CharacterClass>,

    /// Replace the symbol alphabet
    #[arg(long, value_name = "CHARS")]
    custom_symbols: Option<String>,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour theme for the strength meter
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Print passwords only
    #[arg(short, long)]
    quiet: bool,

    /// Print Prometheus metrics to stderr when done
    #[arg(long)]
    metrics: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Auto,
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => ThemePreference::Auto,
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    info!("Secure Password Generator v{}", secure_passgen::VERSION);

    let file = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            FileConfig::from_file(path)?
        }
        None => FileConfig::default(),
    };

    let config = apply_flags(file.generation, &cli);
    let report = StrengthReport::for_config(&config);

    let preference = cli.theme.map(ThemePreference::from).unwrap_or(file.display.theme);
    let theme = ThemeState::initialize(preference.stored(), system_prefers_dark());
    let color = file.display.color
        && io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    let mut generator = PasswordGenerator::from_os_entropy();
    let result = generator.generate_many(&config, cli.count);

    let (generated, errors) = match &result {
        Ok(passwords) => (passwords.len() as u64, 0),
        Err(_) => (0, 1),
    };

    if cli.metrics {
        let registry = MetricsRegistry::new()?;
        registry.update(&MetricsSnapshot::from_components(
            generator.stats(),
            &report,
            generated,
            errors,
        ));
        eprint!("{}", registry.encode()?);
    }

    write_passwords(&mut io::stdout().lock(), result?)?;

    if !cli.quiet {
        println!();
        println!(
            "{}",
            render_meter(&report, file.display.meter_width, theme.current(), color)
        );
        println!("Pool: {} characters", report.pool_size);
    }

    Ok(())
}

/// Writes one password per line, wiping each once written.
fn write_passwords(out: &mut impl Write, passwords: Vec<String>) -> io::Result<()> {
    for password in passwords.into_iter().map(Zeroizing::new) {
        writeln!(out, "{}", password.as_str())?;
    }
    out.flush()
}

/// Layers command-line flags over the file configuration.
fn apply_flags(mut config: GenerationConfig, cli: &Cli) -> GenerationConfig {
    if let Some(length) = cli.length {
        config.length = length;
    }
    if cli.no_lowercase {
        config = config.disable(CharacterClass::Lowercase);
    }
    if cli.no_uppercase {
        config = config.disable(CharacterClass::Uppercase);
    }
    if cli.no_digits {
        config = config.disable(CharacterClass::Digit);
    }
    if cli.symbols {
        config = config.enable(CharacterClass::Symbol);
    }
    if cli.allow_ambiguous {
        config.avoid_ambiguous = false;
    }
    if !cli.require.is_empty() {
        config = config.require(cli.require.iter().copied());
    }
    if let Some(symbols) = &cli.custom_symbols {
        config = config.with_custom_symbols(symbols.clone());
    }
    config
}
