//! Parses input links and writes them out.

use std::io::{self, BufRead, Write};

use weblink_core::config::OutputFormat;
use weblink_rfc::rfc::AnyLink;

use crate::config::RenderOptions;
use crate::error::AppResult;

/// ## Summary
/// Formats a parsed link as a canonical string or a JSON object.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render(link: &AnyLink, options: &RenderOptions) -> AppResult<String> {
    let text = link.generate_link(options.include_prefix);

    match options.format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => {
            let fields = match link {
                AnyLink::Mail(mail) => serde_json::to_value(mail)?,
                AnyLink::Tel(tel) => serde_json::to_value(tel)?,
            };
            let value = serde_json::json!({
                "kind": link.kind(),
                "link": text,
                "fields": fields,
            });
            Ok(value.to_string())
        }
    }
}

/// ## Summary
/// Parses every link in `links`, or every non-blank line of `input` when
/// `links` is empty, writing results to `out` and failures to `err`.
///
/// Input lines that are not valid UTF-8 are reported and counted as
/// failures. Processing continues with the next line.
///
/// Returns the number of links that failed to parse.
///
/// ## Errors
/// Returns an error if reading input or writing output fails.
#[tracing::instrument(skip_all, fields(args = links.len()))]
pub fn run<R, W, E>(
    links: &[String],
    input: R,
    options: &RenderOptions,
    out: &mut W,
    err: &mut E,
) -> AppResult<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut count = 0;
    let mut failures = 0;

    if links.is_empty() {
        for (idx, line) in input.lines().enumerate() {
            match line {
                Ok(raw) => {
                    count += 1;
                    if !process_line(&raw, options, out, err)? {
                        failures += 1;
                    }
                }
                Err(read_err) if read_err.kind() == io::ErrorKind::InvalidData => {
                    count += 1;
                    failures += 1;
                    tracing::warn!(line = idx + 1, error = %read_err, "Skipping unreadable input line");
                    writeln!(err, "line {}: {read_err}", idx + 1)?;
                }
                Err(read_err) => return Err(read_err.into()),
            }
        }
    } else {
        for raw in links {
            count += 1;
            if !process_line(raw, options, out, err)? {
                failures += 1;
            }
        }
    }

    tracing::debug!(count, failures, "Processed links");

    Ok(failures)
}

/// Parses and writes one link. Blank lines are skipped and count as handled.
///
/// Returns `false` if the link failed to parse.
fn process_line<W: Write, E: Write>(
    raw: &str,
    options: &RenderOptions,
    out: &mut W,
    err: &mut E,
) -> AppResult<bool> {
    if raw.trim().is_empty() {
        return Ok(true);
    }

    match AnyLink::parse(raw) {
        Ok(link) => {
            writeln!(out, "{}", render(&link, options)?)?;
            Ok(true)
        }
        Err(parse_err) => {
            tracing::warn!(error = %parse_err, "Failed to parse link");
            writeln!(err, "{}: {parse_err}", raw.trim())?;
            Ok(false)
        }
    }
}
