//! Output formats

use clap::{Args, ValueEnum};
use tagtree::{render, render_with, Element, RenderOptions};

/// An output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Compact markup on one line
    Markup,
    /// Indented markup, one element per line
    Pretty,
    /// The element tree as JSON
    Json,
}

/// Output flags shared by every command.
#[derive(Args, Clone, Copy, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markup)]
    pub format: Format,

    /// Spaces per level for pretty output
    #[arg(long, default_value_t = 2)]
    pub indent: usize,
}

impl OutputArgs {
    /// Format `element` according to these flags.
    pub fn format_element(&self, element: &Element) -> serde_json::Result<String> {
        Ok(match self.format {
            Format::Markup => render(element),
            Format::Pretty => render_with(element, &RenderOptions::pretty(self.indent)),
            Format::Json => serde_json::to_string_pretty(element)?,
        })
    }
}

/// Print `text` so that it always ends with exactly one newline.
pub fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}
