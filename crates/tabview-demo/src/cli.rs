#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `TABVIEW_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use crate::error::DemoError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
tabview-demo: browse delimited text in a scrollable table

USAGE:
    tabview-demo [OPTIONS] [FILE]

Reads FILE, or standard input when FILE is omitted or '-'.

OPTIONS:
    --separator=S    Field separator (default: ',')
    --width=N        Visible columns (default: 20)
    --height=N       Visible rows (default: 20)
    --col-width=N    Width of every column in cells (default: 12)
    --header         Use the first line as column titles
    --cell           Start in cell-select mode
    --help, -h       Show this help message
    --version, -V    Show version

KEYBINDINGS:
    up/k down/j      Move one row
    left/h right/l   Pan (row mode) or move one cell (cell mode)
    b/pgup f/pgdn    Page up / down
    u d              Half page up / down
    g/home G/end     First / last row
    t                Toggle cell selection
    enter            Quit and print the selection
    q / esc / ctrl+c Quit

ENVIRONMENT VARIABLES:
    TABVIEW_SEPARATOR   Override --separator
    TABVIEW_WIDTH       Override --width
    TABVIEW_HEIGHT      Override --height
    TABVIEW_LOG         Write debug logs to this file";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Field separator.
    pub separator: String,
    /// Visible column count.
    pub width: usize,
    /// Visible row count.
    pub height: usize,
    /// Display width of each column.
    pub col_width: usize,
    /// First input line holds column titles.
    pub header: bool,
    /// Start in cell-select mode.
    pub cell_mode: bool,
    /// Input file; `None` reads stdin.
    pub input: Option<PathBuf>,
    /// Log file; `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            separator: ",".into(),
            width: 20,
            height: 20,
            col_width: 12,
            header: false,
            cell_mode: false,
            input: None,
            log_file: None,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse the process arguments and environment.
    ///
    /// `--help` and `--version` print and exit.
    pub fn parse() -> Result<Self, DemoError> {
        let args = env::args().skip(1);
        match Self::parse_from(args, |key| env::var(key).ok())? {
            Command::Run(opts) => Ok(opts),
            Command::Help => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Command::Version => {
                println!("tabview-demo {VERSION}");
                process::exit(0);
            }
        }
    }

    /// Parse `args` with `env` as the environment lookup.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags. Malformed environment values are
    /// ignored; malformed flags are a usage error.
    pub fn parse_from<I, F>(args: I, env: F) -> Result<Command, DemoError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("TABVIEW_SEPARATOR") {
            opts.separator = val;
        }
        if let Some(val) = env("TABVIEW_WIDTH")
            && let Ok(n) = val.parse()
        {
            opts.width = n;
        }
        if let Some(val) = env("TABVIEW_HEIGHT")
            && let Ok(n) = val.parse()
        {
            opts.height = n;
        }
        if let Some(val) = env("TABVIEW_LOG")
            && !val.is_empty()
        {
            opts.log_file = Some(PathBuf::from(val));
        }

        // Parse command-line args (override env vars)
        let mut input_given = false;
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--header" => opts.header = true,
                "--cell" => opts.cell_mode = true,
                "-" => set_input(&mut opts.input, &mut input_given, None, &arg)?,
                other => {
                    if let Some(val) = other.strip_prefix("--separator=") {
                        opts.separator = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = parse_number("--width", val)?;
                    } else if let Some(val) = other.strip_prefix("--height=") {
                        opts.height = parse_number("--height", val)?;
                    } else if let Some(val) = other.strip_prefix("--col-width=") {
                        opts.col_width = parse_number("--col-width", val)?;
                    } else if other.starts_with('-') {
                        return Err(DemoError::Usage(format!("Unknown argument: {other}")));
                    } else {
                        let path = Some(PathBuf::from(other));
                        set_input(&mut opts.input, &mut input_given, path, other)?;
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

/// Record the input source. Only one may be given, `-` included.
fn set_input(
    input: &mut Option<PathBuf>,
    given: &mut bool,
    path: Option<PathBuf>,
    arg: &str,
) -> Result<(), DemoError> {
    if *given {
        return Err(DemoError::Usage(format!("Unexpected extra input: {arg}")));
    }
    *given = true;
    *input = path;
    Ok(())
}

fn parse_number<T: FromStr>(flag: &str, val: &str) -> Result<T, DemoError> {
    val.parse()
        .map_err(|_| DemoError::Usage(format!("Invalid {flag} value: {val}")))
}
