//! `owui-urls [address]` – normalize, pick formats, render and write.

use anyhow::Result;
use chrono::NaiveDate;
use owui_urls_core::config::GeneratorConfig;
use owui_urls_core::origin::Origin;
use owui_urls_core::output::{self, OutputFormat};
use owui_urls_core::render::{json, markdown};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::prompt::prompt_line;

const ADDRESS_PROMPT: &str = "Enter your OpenWebUI instance URL (e.g., chat.example.com): ";
const FORMAT_PROMPT: &str = "Choose output format (1 for Markdown, 2 for JSON, 3 for both) [3]: ";

/// Answer to the format prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatChoice {
    Markdown,
    Json,
    Both,
}

impl FormatChoice {
    /// Parse a trimmed answer; empty means `Both`. Anything else unknown is `None`.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(FormatChoice::Markdown),
            "2" => Some(FormatChoice::Json),
            "" | "3" => Some(FormatChoice::Both),
            _ => None,
        }
    }

    pub fn formats(self) -> &'static [OutputFormat] {
        match self {
            FormatChoice::Markdown => &[OutputFormat::Markdown],
            FormatChoice::Json => &[OutputFormat::Json],
            FormatChoice::Both => &[OutputFormat::Markdown, OutputFormat::Json],
        }
    }
}

/// Absolute paths of the files a run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Generated {
    pub markdown: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

fn render(format: OutputFormat, origin: &Origin, date: NaiveDate) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(markdown::render(origin, date)),
        OutputFormat::Json => json::render(origin, date),
    }
}

/// Run the interactive flow. `address` skips the address prompt when given.
pub fn run_generate<R: BufRead, W: Write>(
    address: Option<&str>,
    cfg: &GeneratorConfig,
    date: NaiveDate,
    input: &mut R,
    out: &mut W,
) -> Result<Generated> {
    writeln!(out, "OpenWebUI URL Generator")?;
    writeln!(out, "======================")?;

    let raw = match address {
        Some(a) => a.to_string(),
        None => prompt_line(input, out, ADDRESS_PROMPT)?,
    };
    let origin = Origin::normalize(&raw);
    tracing::info!("normalized {:?} to {}", raw, origin);

    let answer = prompt_line(input, out, FORMAT_PROMPT)?;
    let choice = FormatChoice::parse(&answer);
    match choice {
        Some(c) => tracing::debug!("format choice {:?}", c),
        // An unrecognized answer renders nothing rather than erroring.
        None => tracing::warn!("unrecognized format choice {:?}; nothing rendered", answer),
    }

    let dir = cfg.resolve_output_dir()?;
    let mut generated = Generated::default();
    for &format in choice.map(FormatChoice::formats).unwrap_or_default() {
        let content = render(format, &origin, date)?;
        let path = output::write_document(&dir, &cfg.file_prefix, &origin, format, &content)?;
        writeln!(
            out,
            "{} URLs have been saved to {}",
            format.label(),
            output::file_name(&cfg.file_prefix, &origin, format)
        )?;
        match format {
            OutputFormat::Markdown => generated.markdown = Some(path),
            OutputFormat::Json => generated.json = Some(path),
        }
    }

    writeln!(out)?;
    writeln!(out, "Success! Your OpenWebUI URLs have been generated.")?;
    if let Some(path) = &generated.markdown {
        writeln!(out, "Markdown: {}", path.display())?;
    }
    if let Some(path) = &generated.json {
        writeln!(out, "JSON: {}", path.display())?;
    }

    Ok(generated)
}
