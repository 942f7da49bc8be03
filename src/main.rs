use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pump_hydraulics_toolbox::app::{self, AppContext, AppError, OutputFormat};
use pump_hydraulics_toolbox::config::{self, Config};
use pump_hydraulics_toolbox::i18n::{self, keys, Translator};

#[derive(Parser)]
#[command(name = "pump-hydraulics")]
#[command(about = "Pumped pipeline hydraulics: losses, NPSH, power, water hammer, pump curves", long_about = None)]
struct Cli {
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// 표시 언어 (en/fr/ko/auto)
    #[arg(long, global = true)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the calculation and print the report
    Calc {
        /// Parameter TOML file (defaults to the reference installation)
        params: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Write results.csv and singular_losses.csv to a directory
    Export {
        params: Option<PathBuf>,
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Write the 50 Hz pump curve CSV template
    Template {
        #[arg(default_value = "pump_curve_template.csv")]
        path: PathBuf,
    },
    /// Scale a 50 Hz pump curve CSV to other drive frequencies
    Curve {
        /// Pump curve CSV file
        #[arg(long)]
        curve: PathBuf,
        /// Target frequency in Hz (repeatable, defaults to config)
        #[arg(long = "frequency", short = 'f')]
        frequencies: Vec<f64>,
        /// CSV field delimiter (one ASCII character)
        #[arg(long, default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,
    },
    /// Print the system curve for a parameter file
    SystemCurve { params: Option<PathBuf> },
    /// List built-in materials, fluids and fittings
    References,
    /// Write the default parameter file
    InitParams {
        #[arg(default_value = "params.toml")]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(cli.config.as_deref())?;
    init_tracing(&cfg);

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, Some(Path::new("locales")));
    let ctx = AppContext::new(cfg, tr);

    match cli.command {
        Commands::Calc { params, format } => {
            let format = match format {
                Format::Text => OutputFormat::Text,
                Format::Csv => OutputFormat::Csv,
            };
            print!("{}", app::cmd_calc(&ctx, params.as_deref(), format)?);
        }
        Commands::Export { params, output } => {
            for path in app::cmd_export(&ctx, params.as_deref(), &output)? {
                println!("{}: {}", ctx.tr.t(keys::CLI_EXPORT_WRITTEN), path.display());
            }
        }
        Commands::Template { path } => {
            app::cmd_template(&path)?;
            println!("{}: {}", ctx.tr.t(keys::CLI_TEMPLATE_WRITTEN), path.display());
        }
        Commands::Curve {
            curve,
            frequencies,
            delimiter,
        } => {
            print!("{}", app::cmd_curve(&ctx, &curve, &frequencies, delimiter)?);
        }
        Commands::SystemCurve { params } => {
            print!("{}", app::cmd_system_curve(&ctx, params.as_deref())?);
        }
        Commands::References => print!("{}", app::cmd_references(&ctx.tr)),
        Commands::InitParams { path } => {
            app::cmd_init_params(&path)?;
            println!("{}: {}", ctx.tr.t(keys::CLI_PARAMS_WRITTEN), path.display());
        }
    }
    Ok(())
}

/// CSV 구분자는 ASCII 한 글자만 허용한다.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
    }
}

/// RUST_LOG가 있으면 우선하고, 없으면 설정의 log_level을 쓴다.
fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_accepts_single_ascii_only() {
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("\t"), Ok(b'\t'));
        assert!(parse_delimiter("é").is_err());
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("").is_err());
    }

    #[test]
    fn curve_command_rejects_non_ascii_delimiter() {
        let parsed = Cli::try_parse_from([
            "pump-hydraulics",
            "curve",
            "--curve",
            "pump.csv",
            "--delimiter",
            "§",
        ]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["pump-hydraulics", "curve", "--curve", "pump.csv"])
            .expect("default delimiter");
        match cli.command {
            Commands::Curve { delimiter, .. } => assert_eq!(delimiter, b','),
            _ => panic!("expected curve command"),
        }
    }
}
