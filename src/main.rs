use std::{fs::read_to_string, path::PathBuf, process::ExitCode, sync::Arc, time::Instant};

use clap::{Parser, ValueEnum};
use gomix_highlight::{
    errors::errors::{Error, ErrorImpl},
    format_error,
    render::render::{render_document_ansi, render_document_html},
    tokenize_document, Position, Theme,
};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "gomix-highlight")]
#[command(about = "Syntax highlighter for Go-Mix source files")]
struct Cli {
    /// Input Go-Mix file
    input: PathBuf,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,
    /// Theme override file (`label = #RRGGBB` per line)
    #[arg(short, long)]
    theme: Option<PathBuf>,
    /// Log timings to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Ansi,
    Html,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{}", with_final_newline(output));
            ExitCode::SUCCESS
        }
        Err((error, source)) => {
            eprint!("{}", format_error(&error, source.as_deref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, (Error, Option<String>)> {
    let theme = match &cli.theme {
        Some(path) => {
            let loaded = Theme::load(path);
            loaded.map_err(|e| (e, read_to_string(path).ok()))?
        }
        None => Theme::default(),
    };

    let file_name = cli.input.to_string_lossy().to_string();
    let source = read_to_string(&cli.input).map_err(|e| {
        (
            Error::new(
                ErrorImpl::ReadError {
                    path: file_name.clone(),
                    message: e.to_string(),
                },
                Position(0, Arc::new(file_name.clone())),
            ),
            None,
        )
    })?;

    let start = Instant::now();
    let lines = tokenize_document(&source);
    debug!(lines = lines.len(), elapsed = ?start.elapsed(), "tokenized {}", file_name);

    let render_start = Instant::now();
    let output = match cli.format {
        Format::Ansi => render_document_ansi(&lines, &theme),
        Format::Html => render_document_html(&lines, &theme),
        Format::Json => serde_json::to_string_pretty(&lines).map_err(|e| {
            (
                Error::new(
                    ErrorImpl::SerializeError {
                        message: e.to_string(),
                    },
                    Position(0, Arc::new(file_name.clone())),
                ),
                None,
            )
        })?,
    };
    debug!(elapsed = ?render_start.elapsed(), "rendered");

    Ok(output)
}

/// Ends `output` with exactly the newline it needs. A source ending in `\n`
/// already renders with one, since its last line is empty.
fn with_final_newline(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::with_final_newline;
    use gomix_highlight::{
        render::render::{render_document_ansi, render_document_html},
        tokenize_document, Theme,
    };

    #[test]
    fn test_no_extra_blank_line_after_trailing_newline() {
        let lines = tokenize_document("x\n");
        let output = with_final_newline(render_document_ansi(&lines, &Theme::default()));

        assert!(output.ends_with("\x1b[0m\n"));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn test_final_newline_added_when_missing() {
        let lines = tokenize_document("x");

        assert!(with_final_newline(render_document_ansi(&lines, &Theme::default())).ends_with('\n'));
        assert!(with_final_newline(render_document_html(&lines, &Theme::default())).ends_with("</pre>\n"));

        let json = serde_json::to_string_pretty(&lines).unwrap();
        assert_eq!(with_final_newline(json.clone()), format!("{}\n", json));
    }
}
