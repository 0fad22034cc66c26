//! Template environment bound to a single directory.
//!
//! A [`Renderer`] owns a minijinja [`Environment`] whose loader reads
//! templates from one directory. Construction never touches the file system;
//! a missing or unreadable directory only shows up once a template is
//! requested.

use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use minijinja::value::{Value, ValueKind};
use minijinja::{context, path_loader, Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;

use crate::error::{Error, Result};

/// Auto-escaping policy applied to rendered templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutoEscape {
    /// Escape HTML for `.html`, `.htm` and `.xml` templates only.
    ByExtension,
    /// Escape HTML for every template.
    Html,
    /// Output values as they are, like a plain Jinja2 `Environment`.
    #[default]
    Disabled,
}

/// Options used to build a [`Renderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    pub directory: PathBuf,
    /// Fail on undefined variables instead of rendering them as empty.
    pub strict_undefined: bool,
    pub trim_blocks: bool,
    pub lstrip_blocks: bool,
    pub keep_trailing_newline: bool,
    pub auto_escape: AutoEscape,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::new(crate::global::DEFAULT_TEMPLATE_DIRECTORY)
    }
}

impl RendererConfig {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            strict_undefined: false,
            trim_blocks: false,
            lstrip_blocks: false,
            keep_trailing_newline: false,
            auto_escape: AutoEscape::default(),
        }
    }

    pub fn with_strict_undefined(mut self, strict: bool) -> Self {
        self.strict_undefined = strict;
        self
    }

    pub fn with_trim_blocks(mut self, enabled: bool) -> Self {
        self.trim_blocks = enabled;
        self
    }

    pub fn with_lstrip_blocks(mut self, enabled: bool) -> Self {
        self.lstrip_blocks = enabled;
        self
    }

    pub fn with_keep_trailing_newline(mut self, enabled: bool) -> Self {
        self.keep_trailing_newline = enabled;
        self
    }

    pub fn with_auto_escape(mut self, auto_escape: AutoEscape) -> Self {
        self.auto_escape = auto_escape;
        self
    }
}

/// Resolves template names under one directory and renders them.
#[derive(Debug)]
pub struct Renderer {
    config: RendererConfig,
    env: Environment<'static>,
}

impl Renderer {
    /// Create a renderer for `directory` with default options.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self::with_config(RendererConfig::new(directory))
    }

    pub fn with_config(config: RendererConfig) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(&config.directory));
        if config.strict_undefined {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }
        env.set_trim_blocks(config.trim_blocks);
        env.set_lstrip_blocks(config.lstrip_blocks);
        env.set_keep_trailing_newline(config.keep_trailing_newline);
        match config.auto_escape {
            AutoEscape::ByExtension => {}
            AutoEscape::Html => env.set_auto_escape_callback(|_| minijinja::AutoEscape::Html),
            AutoEscape::Disabled => env.set_auto_escape_callback(|_| minijinja::AutoEscape::None),
        }

        Self { config, env }
    }

    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Check whether `name` resolves to a loadable template.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Render the template `name` with `context`.
    ///
    /// The template is resolved first, so a missing template is reported as
    /// [`Error::TemplateNotFound`] whatever the context. A context serializing
    /// to none (`()`, `None`, JSON `null`) renders as an empty map; any other
    /// non-map context is rejected with [`Error::InvalidContext`].
    pub fn render<S: Serialize + ?Sized>(&self, name: &str, context: &S) -> Result<String> {
        debug!("Rendering template '{}' from {}", name, self.directory().display());
        let tmpl = self.env.get_template(name).map_err(|e| self.load_error(name, e))?;
        let ctx = to_context(name, context)?;
        tmpl.render(ctx).map_err(|source| Error::Render {
            name: name.to_string(),
            source,
        })
    }

    fn load_error(&self, name: &str, err: minijinja::Error) -> Error {
        if err.kind() == ErrorKind::TemplateNotFound || is_io_error(&err) {
            debug!("Template '{}' not found in {}: {}", name, self.directory().display(), err);
            Error::TemplateNotFound {
                name: name.to_string(),
                directory: self.config.directory.clone(),
            }
        } else {
            Error::Render {
                name: name.to_string(),
                source: err,
            }
        }
    }
}

fn is_io_error(err: &minijinja::Error) -> bool {
    std::error::Error::source(err).is_some_and(|source| source.is::<io::Error>())
}

fn to_context<S: Serialize + ?Sized>(name: &str, context: &S) -> Result<Value> {
    let value = Value::from_serialize(&context)
        .validate()
        .map_err(|source| Error::Render {
            name: name.to_string(),
            source,
        })?;
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(context!()),
        ValueKind::Map => Ok(value),
        kind => Err(Error::InvalidContext {
            name: name.to_string(),
            kind,
        }),
    }
}
