mod cli;
mod context;

use crate::cli::Cli;
use crate::context::load_context;

use anyhow::Result;
use clap::Parser;
use jinja_loader::{load_template, set_renderer, Renderer};
use log::info;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();
    let args = Cli::parse();

    set_renderer(Renderer::with_config(args.renderer_config()));

    let page = load_template(&args.template).wrap_async(|path: Option<PathBuf>| async move {
        load_context(path.as_deref()).await
    });
    let rendered = page(args.context.clone()).await?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &rendered).await?;
            info!("Wrote '{}' to {}", args.template, path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
