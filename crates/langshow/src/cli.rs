#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args by hand (`--flag=value` form). Environment variables with the
//! `LANGSHOW_` prefix override defaults; explicit flags override both.

use std::env;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use langshow_syntax::samples::SampleError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
langshow - syntax-highlight gink code samples

USAGE:
    langshow [OPTIONS] [FILE]

    FILE is a source file to highlight, or '-' for stdin. Without FILE the
    first bundled syntax-explorer tab is shown.

OPTIONS:
    --sample=N           Show bundled syntax tab N, 1-indexed
    --feature=N          Show bundled feature card N, 1-indexed
    --list               List bundled samples
    --lang=NAME          Language name or extension (default: gink, or the
                         file extension when FILE is given)
    --theme=MODE         'dark' (default) or 'light'
    --format=FMT         'ansi', 'html' or 'plain' (default: ansi on a
                         terminal, plain otherwise)
    --start-line=N       Number the first line N+1 (default: 0)
    --no-line-numbers    Hide the line-number gutter
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    LANGSHOW_THEME          Override --theme
    LANGSHOW_FORMAT         Override --format
    LANGSHOW_LANG           Override --lang
    LANGSHOW_LINE_NUMBERS   '0' or 'false' hides the gutter
    LANGSHOW_LOG            Log filter for stderr diagnostics (default: warn)";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ansi,
    Html,
    Plain,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ansi" | "color" | "term" => Ok(Self::Ansi),
            "html" => Ok(Self::Html),
            "plain" | "text" | "txt" => Ok(Self::Plain),
            _ => Err(()),
        }
    }
}

/// Where the code comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Bundled syntax tab (0-indexed).
    Tab(usize),
    /// Bundled feature card (0-indexed).
    Feature(usize),
    Path(PathBuf),
    Stdin,
}

/// Parsed rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub source: Source,
    /// Explicit language; `None` means infer.
    pub lang: Option<String>,
    pub dark: bool,
    /// Explicit format; `None` means pick by terminal.
    pub format: Option<OutputFormat>,
    pub line_numbers: bool,
    pub start_line: usize,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            source: Source::Tab(0),
            lang: None,
            dark: true,
            format: None,
            line_numbers: true,
            start_line: 0,
        }
    }
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    List,
    Render(Opts),
}

/// Errors from argument parsing and running the CLI.
#[derive(Debug)]
pub enum CliError {
    UnknownArgument(String),
    InvalidValue { flag: &'static str, value: String },
    /// More than one input was named.
    ConflictingSources,
    Io { path: String, source: io::Error },
    Samples(SampleError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            Self::InvalidValue { flag, value } => write!(f, "invalid {flag} value: {value}"),
            Self::ConflictingSources => {
                f.write_str("give at most one of FILE, --sample and --feature")
            }
            Self::Io { path, source } => write!(f, "{path}: {source}"),
            Self::Samples(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Samples(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SampleError> for CliError {
    fn from(e: SampleError) -> Self {
        Self::Samples(e)
    }
}

fn parse_theme(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

fn parse_index(flag: &'static str, value: &str) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CliError::InvalidValue {
            flag,
            value: value.to_string(),
        }),
    }
}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command, CliError> {
        Self::parse_from(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Parse `args` (without the program name), reading environment
    /// overrides through `var`.
    pub fn parse_from<I, S, F>(args: I, var: F) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment defaults first. Bad values are ignored, as a stale
        // shell export should not break every invocation.
        if let Some(dark) = var("LANGSHOW_THEME").as_deref().and_then(parse_theme) {
            opts.dark = dark;
        }
        if let Some(val) = var("LANGSHOW_FORMAT")
            && let Ok(format) = val.parse()
        {
            opts.format = Some(format);
        }
        if let Some(val) = var("LANGSHOW_LANG")
            && !val.is_empty()
        {
            opts.lang = Some(val);
        }
        if let Some(val) = var("LANGSHOW_LINE_NUMBERS") {
            opts.line_numbers = !matches!(val.to_ascii_lowercase().as_str(), "0" | "false" | "no");
        }

        let mut source: Option<Source> = None;
        let mut set_source = |next: Source| -> Result<(), CliError> {
            if source.replace(next).is_some() {
                return Err(CliError::ConflictingSources);
            }
            Ok(())
        };

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--list" => return Ok(Command::List),
                "--no-line-numbers" => opts.line_numbers = false,
                "-" => set_source(Source::Stdin)?,
                other => {
                    if let Some(val) = other.strip_prefix("--sample=") {
                        set_source(Source::Tab(parse_index("--sample", val)?))?;
                    } else if let Some(val) = other.strip_prefix("--feature=") {
                        set_source(Source::Feature(parse_index("--feature", val)?))?;
                    } else if let Some(val) = other.strip_prefix("--lang=") {
                        opts.lang = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--theme=") {
                        opts.dark = parse_theme(val).ok_or_else(|| CliError::InvalidValue {
                            flag: "--theme",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        let format = val.parse().map_err(|()| CliError::InvalidValue {
                            flag: "--format",
                            value: val.to_string(),
                        })?;
                        opts.format = Some(format);
                    } else if let Some(val) = other.strip_prefix("--start-line=") {
                        opts.start_line = val.parse().map_err(|_| CliError::InvalidValue {
                            flag: "--start-line",
                            value: val.to_string(),
                        })?;
                    } else if other.starts_with('-') {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    } else {
                        set_source(Source::Path(PathBuf::from(other)))?;
                    }
                }
            }
        }

        if let Some(source) = source {
            opts.source = source;
        }
        Ok(Command::Render(opts))
    }

    /// The output format, falling back to ANSI on a terminal and plain text
    /// otherwise.
    pub fn resolve_format(&self, is_terminal: bool) -> OutputFormat {
        self.format.unwrap_or(if is_terminal {
            OutputFormat::Ansi
        } else {
            OutputFormat::Plain
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(args: &[&str]) -> Result<Command, CliError> {
        Opts::parse_from(args.iter().copied(), |_| None)
    }

    fn parse_env(args: &[&str], env: &[(&str, &str)]) -> Result<Command, CliError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Opts::parse_from(args.iter().copied(), |k| env.get(k).cloned())
    }

    fn render(cmd: Result<Command, CliError>) -> Opts {
        match cmd {
            Ok(Command::Render(opts)) => opts,
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = render(parse(&[]));
        assert_eq!(opts, Opts::default());
        assert_eq!(opts.source, Source::Tab(0));
        assert!(opts.dark);
        assert!(opts.line_numbers);
    }

    #[test]
    fn help_version_list() {
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Command::Version);
        assert_eq!(parse(&["--list"]).unwrap(), Command::List);
    }

    #[test]
    fn flags_are_applied() {
        let opts = render(parse(&[
            "--sample=3",
            "--theme=light",
            "--format=html",
            "--lang=txt",
            "--start-line=9",
            "--no-line-numbers",
        ]));
        assert_eq!(opts.source, Source::Tab(2));
        assert!(!opts.dark);
        assert_eq!(opts.format, Some(OutputFormat::Html));
        assert_eq!(opts.lang.as_deref(), Some("txt"));
        assert_eq!(opts.start_line, 9);
        assert!(!opts.line_numbers);
    }

    #[test]
    fn positional_path_and_stdin() {
        assert_eq!(
            render(parse(&["main.gink"])).source,
            Source::Path(PathBuf::from("main.gink"))
        );
        assert_eq!(render(parse(&["-"])).source, Source::Stdin);
        assert_eq!(render(parse(&["--feature=2"])).source, Source::Feature(1));
    }

    #[test]
    fn conflicting_sources_rejected() {
        assert!(matches!(
            parse(&["a.gink", "--sample=1"]),
            Err(CliError::ConflictingSources)
        ));
    }

    #[test]
    fn invalid_values_rejected() {
        for args in [
            ["--sample=0"],
            ["--sample=x"],
            ["--theme=blue"],
            ["--format=pdf"],
            ["--start-line=-1"],
        ] {
            let err = parse(&args).unwrap_err();
            assert!(
                matches!(err, CliError::InvalidValue { .. }),
                "{args:?} gave {err}"
            );
        }
        assert_eq!(
            parse(&["--theme=blue"]).unwrap_err().to_string(),
            "invalid --theme value: blue"
        );
    }

    #[test]
    fn unknown_argument() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --bogus");
    }

    #[test]
    fn env_overrides_defaults() {
        let opts = render(parse_env(
            &[],
            &[
                ("LANGSHOW_THEME", "light"),
                ("LANGSHOW_FORMAT", "plain"),
                ("LANGSHOW_LANG", "gk"),
                ("LANGSHOW_LINE_NUMBERS", "false"),
            ],
        ));
        assert!(!opts.dark);
        assert_eq!(opts.format, Some(OutputFormat::Plain));
        assert_eq!(opts.lang.as_deref(), Some("gk"));
        assert!(!opts.line_numbers);
    }

    #[test]
    fn flags_override_env() {
        let opts = render(parse_env(
            &["--theme=dark", "--format=ansi"],
            &[("LANGSHOW_THEME", "light"), ("LANGSHOW_FORMAT", "html")],
        ));
        assert!(opts.dark);
        assert_eq!(opts.format, Some(OutputFormat::Ansi));
    }

    #[test]
    fn bad_env_values_are_ignored() {
        let opts = render(parse_env(&[], &[("LANGSHOW_THEME", "sepia")]));
        assert!(opts.dark);
    }

    #[test]
    fn format_resolution() {
        let opts = Opts::default();
        assert_eq!(opts.resolve_format(true), OutputFormat::Ansi);
        assert_eq!(opts.resolve_format(false), OutputFormat::Plain);
        let html = Opts {
            format: Some(OutputFormat::Html),
            ..Opts::default()
        };
        assert_eq!(html.resolve_format(true), OutputFormat::Html);
    }

    #[test]
    fn help_text_mentions_env_vars() {
        assert!(HELP_TEXT.contains("LANGSHOW_THEME"));
        assert!(HELP_TEXT.contains("LANGSHOW_LOG"));
        assert!(!VERSION.is_empty());
    }
}
