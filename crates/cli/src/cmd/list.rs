//! List command implementation
//!
//! Display every declared path with its resolved location.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use project_paths::{AbsPath, Registry};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::IsTerminal;

use crate::command::Command;
use crate::common::RuntimeContext;

/// List command arguments
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl Command for ListCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        let registry = context.registry()?;
        let color = std::io::stdout().is_terminal();
        print!("{}", render(&registry, self.json, color)?);
        Ok(())
    }
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
struct ListData<'a> {
    config: &'a AbsPath,
    root: AbsPath,
    paths: BTreeMap<&'a str, &'a AbsPath>,
}

/// Render a registry, sorted by name
pub fn render(registry: &Registry, json: bool, color: bool) -> Result<String> {
    if json {
        let data = ListData {
            config: registry.config_path(),
            root: registry.project_root(),
            paths: registry.iter().collect(),
        };
        let mut out = serde_json::to_string_pretty(&data)?;
        out.push('\n');
        return Ok(out);
    }

    Ok(render_pretty(registry, color))
}

fn render_pretty(registry: &Registry, color: bool) -> String {
    let mut out = String::new();
    let config = registry.config_path().to_string();

    if registry.is_empty() {
        let line = format!("No paths declared in {config}");
        let _ = writeln!(out, "{}", if color { line.dimmed().to_string() } else { line });
        return out;
    }

    let count = registry.len();
    let noun = if count == 1 { "path" } else { "paths" };
    if color {
        let _ = writeln!(
            out,
            "{} {} {} {}\n",
            "Found".bright_white(),
            count.to_string().bright_cyan(),
            noun.bright_white(),
            format!("in {config}").dimmed()
        );
    } else {
        let _ = writeln!(out, "Found {count} {noun} in {config}\n");
    }

    // Pad before styling so escape codes do not skew the columns
    let width = registry.names().iter().map(|n| n.len()).max().unwrap_or(0);
    let sorted: BTreeMap<&str, &AbsPath> = registry.iter().collect();

    for (name, path) in sorted {
        let padded = format!("{name:<width$}");
        if color {
            let _ = writeln!(out, "  {}  {}", padded.bright_cyan(), path);
        } else {
            let _ = writeln!(out, "  {padded}  {path}");
        }
    }

    out
}
