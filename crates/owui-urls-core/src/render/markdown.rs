//! Human-readable Markdown reference table.

use chrono::NaiveDate;
use std::fmt::{self, Write};

use crate::catalog;
use crate::origin::Origin;

/// Render the catalog as a Markdown document for `origin`.
pub fn render(origin: &Origin, date: NaiveDate) -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible.
    let _ = write_markdown(&mut out, origin, date);
    out
}

/// Write the Markdown document to any `fmt::Write` sink.
///
/// The section name appears (bold) only on the first row of each section.
pub fn write_markdown<W: Write>(out: &mut W, origin: &Origin, date: NaiveDate) -> fmt::Result {
    writeln!(out, "# OpenWebUI URLs for {origin}")?;
    writeln!(out)?;
    writeln!(out, "*Generated on: {}*", super::format_date(date))?;
    writeln!(out)?;
    writeln!(out, "## URL Reference Table")?;
    writeln!(out)?;
    writeln!(out, "| Section | Function | URL |")?;
    writeln!(out, "|---------|----------|-----|")?;

    for section in catalog::sections() {
        for (i, endpoint) in section.endpoints.iter().enumerate() {
            if i == 0 {
                write!(out, "| **{}** ", section.name)?;
            } else {
                write!(out, "| ")?;
            }
            writeln!(
                out,
                "| {} | `{}` |",
                endpoint.function,
                endpoint.full_url(origin)
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "## Notes")?;
    writeln!(out)?;
    for param in catalog::placeholders() {
        writeln!(out, "- {}", param.hint)?;
    }

    Ok(())
}
