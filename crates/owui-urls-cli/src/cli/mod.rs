//! CLI for the OpenWebUI URL reference generator.

mod generate;
mod prompt;

use anyhow::Result;
use clap::Parser;
use owui_urls_core::config;
use std::io;

use generate::run_generate;

/// Generate a Markdown and/or JSON reference of OpenWebUI frontend URLs for one instance.
#[derive(Debug, Parser)]
#[command(name = "owui-urls", version)]
#[command(about = "OpenWebUI URL reference generator", long_about = None)]
pub struct Cli {
    /// Instance address, e.g. chat.example.com. Prompted for when omitted.
    pub address: Option<String>,

    /// Anything after the address is ignored.
    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default()?;
        tracing::debug!("loaded config: {:?}", cfg);
        if !cli.ignored.is_empty() {
            tracing::debug!("ignoring extra arguments: {:?}", cli.ignored);
        }

        let today = chrono::Local::now().date_naive();
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_generate(
            cli.address.as_deref(),
            &cfg,
            today,
            &mut stdin.lock(),
            &mut stdout.lock(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
