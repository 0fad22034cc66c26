//! Render minijinja templates from the values returned by request handlers.
//!
//! A handler returns the context for a page; wrapping it with
//! [`load_template`] turns that context into the rendered template text.
//! Templates are read from a directory, `templates` (relative to the working
//! directory) unless [`set_template_directory`] picks another one.
//!
//! ```no_run
//! use jinja_loader::{load_template, set_template_directory, Error};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Index {
//!     name: &'static str,
//!     name_list: Vec<&'static str>,
//! }
//!
//! set_template_directory("../resources/templates");
//!
//! let index = load_template("test.html").wrap(|_: ()| {
//!     Ok::<_, Error>(Index {
//!         name: "derp",
//!         name_list: vec!["bleep", "blerp", "herp"],
//!     })
//! });
//! let page = index(())?;
//!
//! // Static pages can return nothing at all.
//! let about = load_template("about.html").wrap(|_: ()| Ok::<_, Error>(()));
//! let about_page = about(())?;
//! # Ok::<(), Error>(())
//! ```
//!
//! Components that prefer not to rely on process-wide state can build a
//! [`Renderer`] themselves and bind it with [`render_with`].

mod decorator;
mod error;
mod global;
mod renderer;

pub use decorator::{load_template, render_with, RenderTemplate};
pub use error::{Error, Result};
pub use global::{
    current_renderer, set_renderer, set_template_directory, template_directory,
    DEFAULT_TEMPLATE_DIRECTORY,
};
pub use renderer::{AutoEscape, Renderer, RendererConfig};
