use std::path::PathBuf;

use clap::Parser;
use jinja_loader::{AutoEscape, RendererConfig, DEFAULT_TEMPLATE_DIRECTORY};

/// Render a template from a directory with a JSON or YAML context file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template name, relative to the template directory
    #[arg(long)]
    pub template: String,

    /// Directory templates are loaded from
    #[arg(long, default_value = DEFAULT_TEMPLATE_DIRECTORY)]
    pub template_dir: PathBuf,

    /// Context file (.json, otherwise parsed as YAML)
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Write the rendered template here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Fail on undefined variables
    #[arg(long)]
    pub strict: bool,

    #[arg(long)]
    pub trim_blocks: bool,

    #[arg(long)]
    pub lstrip_blocks: bool,

    #[arg(long)]
    pub keep_trailing_newline: bool,

    /// HTML-escape values in .html, .htm and .xml templates
    #[arg(long)]
    pub autoescape: bool,
}

impl Cli {
    pub fn renderer_config(&self) -> RendererConfig {
        let auto_escape = if self.autoescape {
            AutoEscape::ByExtension
        } else {
            AutoEscape::Disabled
        };

        RendererConfig::new(&self.template_dir)
            .with_strict_undefined(self.strict)
            .with_trim_blocks(self.trim_blocks)
            .with_lstrip_blocks(self.lstrip_blocks)
            .with_keep_trailing_newline(self.keep_trailing_newline)
            .with_auto_escape(auto_escape)
    }
}
