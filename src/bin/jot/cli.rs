//! # Cli
//!
//! This module contains everything needed for parsing the CLI arguments for Jot.

use clap::{Parser, ValueEnum};

use jot_lang::dumper::Format;

/// Struct containing the CLI configuration for Jot.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Parse the given expression instead of reading a file.
    #[arg(short, long)]
    pub expression: Option<String>,

    /// The path to the Jot source file. Standard input is read when
    /// neither an expression nor a file is given.
    #[arg(short, long, conflicts_with = "expression")]
    pub file: Option<std::path::PathBuf>,

    /// The output format for the AST dump.
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    /// Specify the log level of the driver.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

#[derive(ValueEnum, Clone, Copy, Default, Debug)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Yaml => Format::Yaml,
            OutputFormat::Json => Format::Json,
        }
    }
}

/// Enum for specifying the log level of Jot.
#[derive(ValueEnum, Clone, Copy, Default, Debug)]
pub enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// Also log warnings.
    #[value(alias("1"))]
    Warn,

    /// Also log information about what the driver is doing.
    #[value(alias("2"))]
    Info,

    /// Log everything which happens internally.
    #[value(alias("3"))]
    Debug,

    /// Log extra information.
    #[value(alias("4"))]
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
