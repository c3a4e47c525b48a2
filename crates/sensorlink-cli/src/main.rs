use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use sensorlink_core::{AnalyzeOptions, DEFAULT_PORT, DecodeError, PAYLOAD_LEN, Report};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SENSORLINK_BUILD_COMMIT"),
    " ",
    env!("SENSORLINK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sensorlink")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decoder for sensor uplink payloads (header, voltage, temperature).",
    long_about = None,
    after_help = "Examples:\n  sensorlink decode 01c8012c\n  sensorlink decode 02C8012C --port 2 --pretty\n  sensorlink log analyse device.log -o report.json\n  sensorlink log analyze device.log --stdout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one hex payload and print the reading as JSON.
    Decode {
        /// Payload bytes as hex digits (e.g. 01c8012c)
        payload: String,

        /// LoRaWAN FPort the payload arrived on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u8,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Operations on device AT-console logs.
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
}

#[derive(Subcommand, Debug)]
enum LogCommands {
    /// Decode every `$SEND:` line of a console log into a versioned JSON report.
    #[command(alias = "analyze")]
    #[command(
        after_help = "Examples:\n  sensorlink log analyse device.log -o report.json\n  sensorlink log analyze 'logs/*.log' --stdout --pretty"
    )]
    Analyse {
        /// Path to a console log (a glob must match exactly one file)
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// FPort assumed for every uplink in the log
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u8,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any uplink failed to decode
        #[arg(long)]
        strict: bool,

        /// List uplinks that failed to decode after analysis
        #[arg(long)]
        list_failures: bool,
    },
}

#[derive(Debug, Clone, Copy)]
struct OutputFlags {
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    strict: bool,
    list_failures: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_filter = match &cli.command {
        Commands::Log {
            command: LogCommands::Analyse { quiet: true, .. },
        } => "error",
        _ => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Decode {
            payload,
            port,
            pretty,
        } => cmd_decode(&payload, port, pretty),
        Commands::Log { command } => match command {
            LogCommands::Analyse {
                input,
                report,
                stdout,
                port,
                pretty,
                compact,
                quiet,
                strict,
                list_failures,
            } => cmd_log_analyse(
                input,
                report,
                port,
                OutputFlags {
                    stdout,
                    pretty,
                    compact,
                    quiet,
                    strict,
                    list_failures,
                },
            ),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_decode(payload: &str, port: u8, pretty: bool) -> Result<(), CliError> {
    let bytes = sensorlink_core::parse_hex_payload(payload).map_err(|err| {
        CliError::new(
            format!("invalid payload '{}': {}", payload, err),
            Some("pass the payload as hex digits, e.g. 01c8012c".to_string()),
        )
    })?;

    let reading = sensorlink_core::decode(&bytes, port).map_err(|err| match err {
        DecodeError::OutOfRange { available, .. } => CliError::new(
            format!("cannot decode payload '{}': {}", payload, err),
            Some(format!(
                "payloads carry {PAYLOAD_LEN} bytes (header, voltage, temperature); got {available}"
            )),
        ),
    })?;
    log::debug!("port {port}: {} -> {:?}", payload, reading.header_kind());

    let json = if pretty {
        serde_json::to_string_pretty(&reading)
    } else {
        serde_json::to_string(&reading)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn cmd_log_analyse(
    input: PathBuf,
    report: Option<PathBuf>,
    port: u8,
    flags: OutputFlags,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;

    let report_path = if flags.stdout {
        None
    } else {
        let path = report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?;
        ensure_report_differs_from_input(&path, &input_abs)?;
        Some(path)
    };

    let rep = sensorlink_core::analyze_log_file(&resolved_input, &AnalyzeOptions { port })
        .context("console log analysis failed")?;
    let json = serialize_report(&rep, flags.pretty, flags.compact)?;

    match report_path {
        None => print!("{}", json),
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(&path, json)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            if !flags.quiet {
                eprintln!(
                    "OK: {} of {} uplinks decoded, report written -> {}",
                    rep.summary.decoded,
                    rep.summary.uplinks_total,
                    path.display()
                );
            }
        }
    }

    if flags.list_failures && !flags.quiet {
        print_failures(&rep);
    }
    if flags.strict && rep.summary.failed > 0 {
        return Err(CliError::new(
            format!("{} uplinks failed to decode", rep.summary.failed),
            Some("use --list-failures to inspect".to_string()),
        ));
    }
    Ok(())
}

fn ensure_report_differs_from_input(report: &Path, input_abs: &Path) -> Result<(), CliError> {
    let parent = match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A report directory that does not exist yet cannot contain the input.
    let Ok(report_dir) = fs::canonicalize(parent) else {
        return Ok(());
    };
    let file_name = report
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid report path: {}", report.display()))?;
    if report_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("report path must differ from input: {}", report.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn print_failures(rep: &Report) {
    eprintln!("Decode failures:");
    for failure in &rep.failures {
        eprintln!(
            "  line {} '{}': {}",
            failure.line, failure.payload_hex, failure.error
        );
    }
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a device console log captured from the AT interface".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a single log file, not a directory".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}{}",
                    pattern, count, listed, more
                ),
                Some("pass a single log file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
