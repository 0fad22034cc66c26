//! Process-wide renderer used by [`load_template`](crate::load_template).
//!
//! The active [`Renderer`] is held behind an `RwLock<Arc<_>>`. Readers take a
//! snapshot of the `Arc` and render without holding the lock, so replacing the
//! renderer never affects a render that is already in progress.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use log::info;
use once_cell::sync::Lazy;

use crate::renderer::Renderer;

/// Directory templates are loaded from until another one is set.
pub const DEFAULT_TEMPLATE_DIRECTORY: &str = "templates";

static ACTIVE: Lazy<RwLock<Arc<Renderer>>> =
    Lazy::new(|| RwLock::new(Arc::new(Renderer::new(DEFAULT_TEMPLATE_DIRECTORY))));

/// Load templates from `path` from now on.
///
/// The path is not checked here. A directory that does not exist makes every
/// later render fail with [`Error::TemplateNotFound`](crate::Error::TemplateNotFound).
pub fn set_template_directory(path: impl AsRef<Path>) {
    set_renderer(Renderer::new(path));
}

/// Replace the process-wide renderer.
pub fn set_renderer(renderer: Renderer) {
    info!("Loading templates from {}", renderer.directory().display());
    let renderer = Arc::new(renderer);
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = renderer;
}

/// Snapshot of the renderer that is active right now.
pub fn current_renderer() -> Arc<Renderer> {
    ACTIVE.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Directory the active renderer loads templates from.
pub fn template_directory() -> PathBuf {
    current_renderer().directory().to_path_buf()
}
