// crates/trust-center-cli/src/main.rs
// ============================================================================
// Module: Trust Center CLI Entry Point
// Description: Command dispatcher for the trust center API and YAML tooling.
// Purpose: Serve the HTTP API and validate or render documents offline.
// Dependencies: clap, serde_json, thiserror, tokio, trust-center-*
// ============================================================================

//! ## Overview
//! The `trust-center` binary starts the HTTP API (`serve`) and offers offline
//! tooling over trust center YAML documents: `validate`, `render`, `template`,
//! and `schema`. All user-facing strings are routed through the message
//! catalog. Input files are untrusted and read with a size limit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use serde_json::Value;
use thiserror::Error;
use trust_center_cli::input::MAX_DOCUMENT_BYTES;
use trust_center_cli::input::ReadLimitError;
use trust_center_cli::input::read_text_with_limit;
use trust_center_cli::serve_policy::BindOutcome;
use trust_center_cli::serve_policy::enforce_local_only;
use trust_center_cli::serve_policy::resolve_allow_non_loopback;
use trust_center_cli::t;
use trust_center_config::TrustCenterServerConfig;
use trust_center_core::DEFAULT_TRUST_YAML;
use trust_center_core::TrustCenterConfig;
use trust_center_core::build_page;
use trust_center_core::parse_trust_center;
use trust_center_core::resolve_sections;
use trust_center_core::trust_center_schema;
use trust_center_server::ServerError;
use trust_center_server::TrustCenterServer;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "trust-center", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the trust center HTTP API.
    Serve(ServeCommand),
    /// Validate a trust center YAML document.
    Validate(DocumentCommand),
    /// Print the render description of a trust center YAML document as JSON.
    Render(DocumentCommand),
    /// Print the default trust center YAML template.
    Template,
    /// Print the JSON Schema of the trust center YAML document.
    Schema,
    /// Server configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Optional config file path (defaults to trust-center.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Allow binding to non-loopback addresses (the API has no authentication).
    #[arg(long, action = ArgAction::SetTrue)]
    allow_non_loopback: bool,
}

/// Arguments for commands operating on one YAML document.
#[derive(Args, Debug)]
struct DocumentCommand {
    /// Path to the trust center YAML document.
    #[arg(value_name = "FILE")]
    path: PathBuf,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a server configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to trust-center.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a catalog message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::Validate(command) => command_validate(&command),
        Commands::Render(command) => command_render(&command),
        Commands::Template => command_template(),
        Commands::Schema => command_schema(),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let config = TrustCenterServerConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("serve.config.load_failed", error = err)))?;
    let allow_non_loopback = resolve_allow_non_loopback(command.allow_non_loopback)
        .map_err(|err| CliError::new(err.to_string()))?;
    let bind_outcome = enforce_local_only(&config, allow_non_loopback)
        .map_err(|err| CliError::new(err.to_string()))?;
    warn_bind_outcome(&bind_outcome)?;

    let server = tokio::task::spawn_blocking(move || TrustCenterServer::from_config(&config))
        .await
        .map_err(|err| {
            CliError::new(t!("serve.init_failed", error = format!("init join failed: {err}")))
        })?
        .map_err(|err| CliError::new(t!("serve.init_failed", error = err)))?;
    write_stderr_line(&t!("serve.listening", bind = server.bind_addr()))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    server
        .serve()
        .await
        .map_err(|err: ServerError| CliError::new(t!("serve.failed", error = err)))?;

    Ok(ExitCode::SUCCESS)
}

/// Emits startup warnings for exposed binds and disabled auditing.
fn warn_bind_outcome(outcome: &BindOutcome) -> CliResult<()> {
    if outcome.network_exposed {
        write_stderr_line(&t!("serve.warn.network_exposed", bind = outcome.bind_addr))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    if !outcome.audit_enabled {
        write_stderr_line(&t!("serve.warn.audit_disabled"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Document Commands
// ============================================================================

/// Executes the `validate` command.
fn command_validate(command: &DocumentCommand) -> CliResult<ExitCode> {
    let config = load_document(&command.path)?;
    let sections = resolve_sections(&config).len();
    write_stdout_line(&t!(
        "document.valid",
        company = config.company.name,
        sections = sections
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `render` command.
fn command_render(command: &DocumentCommand) -> CliResult<ExitCode> {
    let config = load_document(&command.path)?;
    let page = serde_json::to_value(build_page(&config))
        .map_err(|err| CliError::new(t!("output.serialize_failed", error = err)))?;
    write_json_pretty(&page)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `template` command.
fn command_template() -> CliResult<ExitCode> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(DEFAULT_TRUST_YAML.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `schema` command.
fn command_schema() -> CliResult<ExitCode> {
    write_json_pretty(&trust_center_schema())?;
    Ok(ExitCode::SUCCESS)
}

/// Reads and parses a trust center YAML document from disk.
fn load_document(path: &Path) -> CliResult<TrustCenterConfig> {
    let yaml = read_text_with_limit(path, MAX_DOCUMENT_BYTES)
        .map_err(|err| CliError::new(read_error_message(path, &err)))?;
    parse_trust_center(&yaml).map_err(|err| CliError::new(t!("document.invalid", error = err)))
}

/// Formats a bounded-read failure for a YAML document.
fn read_error_message(path: &Path, error: &ReadLimitError) -> String {
    let kind = t!("document.kind");
    let path = path.display();
    match error {
        ReadLimitError::Io(err) => {
            t!("input.read_failed", kind = kind, path = path, error = err)
        }
        ReadLimitError::TooLarge {
            size,
            limit,
        } => t!("input.read_too_large", kind = kind, path = path, size = size, limit = limit),
        ReadLimitError::NotUtf8 => t!("input.not_utf8", kind = kind, path = path),
    }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = TrustCenterServerConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes pretty-printed JSON to stdout with a trailing newline.
fn write_json_pretty(value: &Value) -> CliResult<()> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(t!("output.serialize_failed", error = err)))?;
    write_stdout_line(&output).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a catalog output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
