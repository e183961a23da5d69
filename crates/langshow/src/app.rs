#![forbid(unsafe_code)]

//! Runs a parsed [`Command`] against the highlighter and writes the result.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use langshow_syntax::export::{HtmlExporter, TextExporter};
use langshow_syntax::samples::{SAMPLE_LANG, Showcase};
use langshow_syntax::tokenizer::split_lines;
use langshow_syntax::{HighlightTheme, SyntaxHighlighter};

use crate::cli::{CliError, Command, HELP_TEXT, Opts, OutputFormat, Source, VERSION};

/// Execute `cmd`, reading stdin from `input` and writing to `out`.
///
/// `is_terminal` picks the output format when none was given.
pub fn run<R: Read, W: Write>(
    cmd: &Command,
    input: R,
    out: &mut W,
    is_terminal: bool,
) -> Result<(), CliError> {
    match cmd {
        Command::Help => writeln!(out, "{HELP_TEXT}").map_err(stdout_error),
        Command::Version => writeln!(out, "langshow {VERSION}").map_err(stdout_error),
        Command::List => list(&Showcase::embedded()?, out).map_err(stdout_error),
        Command::Render(opts) => {
            let output = render(opts, input, is_terminal)?;
            out.write_all(output.as_bytes()).map_err(stdout_error)?;
            out.flush().map_err(stdout_error)
        }
    }
}

fn stdout_error(source: io::Error) -> CliError {
    CliError::Io {
        path: "<stdout>".to_string(),
        source,
    }
}

fn list<W: Write>(showcase: &Showcase, out: &mut W) -> io::Result<()> {
    writeln!(out, "Syntax tabs (--sample=N):")?;
    for (i, tab) in showcase.tabs.iter().enumerate() {
        writeln!(out, "  {:>2}  {}", i + 1, tab.label)?;
    }
    writeln!(out, "Feature cards (--feature=N):")?;
    for (i, feature) in showcase.features.iter().enumerate() {
        writeln!(out, "  {:>2}  {} [{}]", i + 1, feature.title, feature.tag)?;
    }
    if !showcase.traits.is_empty() {
        writeln!(out, "Traits: {}", showcase.traits.join(", "))?;
    }
    Ok(())
}

/// Drop a single trailing line terminator so files ending in a newline do
/// not render an extra empty numbered line.
fn strip_trailing_newline(mut code: String) -> String {
    if code.ends_with('\n') {
        code.pop();
        if code.ends_with('\r') {
            code.pop();
        }
    }
    code
}

/// Load the code to highlight and the language to use when none is given.
fn load<R: Read>(source: &Source, mut input: R) -> Result<(String, Cow<'static, str>), CliError> {
    match source {
        Source::Tab(index) => {
            let showcase = Showcase::embedded()?;
            let code = showcase.tab(*index)?.code.clone();
            Ok((code, Cow::Borrowed(SAMPLE_LANG)))
        }
        Source::Feature(index) => {
            let showcase = Showcase::embedded()?;
            let code = showcase.feature(*index)?.code.clone();
            Ok((code, Cow::Borrowed(SAMPLE_LANG)))
        }
        Source::Path(path) => {
            let code = fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.display().to_string(),
                source,
            })?;
            Ok((strip_trailing_newline(code), language_for_path(path)))
        }
        Source::Stdin => {
            let mut code = String::new();
            input
                .read_to_string(&mut code)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok((strip_trailing_newline(code), Cow::Borrowed(SAMPLE_LANG)))
        }
    }
}

fn language_for_path(path: &Path) -> Cow<'static, str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => Cow::Owned(ext.to_string()),
        None => Cow::Borrowed(SAMPLE_LANG),
    }
}

/// Highlight according to `opts` and return the exported output.
pub fn render<R: Read>(opts: &Opts, input: R, is_terminal: bool) -> Result<String, CliError> {
    let (code, inferred) = load(&opts.source, input)?;
    let lang = opts.lang.as_deref().unwrap_or(&*inferred);
    let format = opts.resolve_format(is_terminal);
    tracing::debug!(source = ?opts.source, lang, ?format, dark = opts.dark, "rendering");

    // The last line number must fit in a usize.
    if opts.line_numbers
        && opts
            .start_line
            .checked_add(split_lines(&code).count())
            .is_none()
    {
        return Err(CliError::InvalidValue {
            flag: "--start-line",
            value: opts.start_line.to_string(),
        });
    }

    let hl = SyntaxHighlighter::with_theme(HighlightTheme::for_mode(opts.dark));
    let text = if opts.line_numbers {
        hl.highlight_numbered(&code, lang, opts.start_line)
    } else {
        hl.highlight(&code, lang)
    };

    Ok(match format {
        OutputFormat::Html => {
            let mut html = HtmlExporter::default().export(&text, hl.theme());
            html.push('\n');
            html
        }
        OutputFormat::Ansi => TextExporter::ansi().export(&text, hl.theme()),
        OutputFormat::Plain => TextExporter::plain().export(&text, hl.theme()),
    })
}
