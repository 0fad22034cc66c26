//! Wrap handlers so their return value becomes a rendered template.
//!
//! ```no_run
//! use std::collections::HashMap;
//! use jinja_loader::{load_template, Error};
//!
//! let index = load_template("index.html").wrap(|name: &str| {
//!     Ok::<_, Error>(HashMap::from([("name", name.to_string())]))
//! });
//! let body = index("derp")?;
//! # Ok::<(), Error>(())
//! ```

use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::global;
use crate::renderer::Renderer;

/// A template name bound to a renderer, ready to wrap handlers.
///
/// Built by [`load_template`], which resolves the process-wide renderer each
/// time a wrapped handler runs, or by [`render_with`], which keeps the
/// renderer it was given.
#[derive(Debug, Clone)]
pub struct RenderTemplate {
    template_name: Arc<str>,
    renderer: Option<Arc<Renderer>>,
}

/// Render `template_name` with the process-wide renderer.
///
/// The renderer is looked up when the wrapped handler is called, so a later
/// [`set_template_directory`](crate::set_template_directory) applies to
/// handlers that were already wrapped.
pub fn load_template(template_name: impl Into<String>) -> RenderTemplate {
    RenderTemplate {
        template_name: template_name.into().into(),
        renderer: None,
    }
}

/// Render `template_name` with an explicit renderer.
pub fn render_with(template_name: impl Into<String>, renderer: Arc<Renderer>) -> RenderTemplate {
    RenderTemplate {
        template_name: template_name.into().into(),
        renderer: Some(renderer),
    }
}

impl RenderTemplate {
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    fn renderer(&self) -> Arc<Renderer> {
        match &self.renderer {
            Some(renderer) => Arc::clone(renderer),
            None => global::current_renderer(),
        }
    }

    /// Render the bound template with an already computed context.
    pub fn render<S: Serialize + ?Sized>(&self, context: &S) -> Result<String> {
        self.renderer().render(&self.template_name, context)
    }

    /// Wrap `handler` so that calling it returns the rendered template.
    ///
    /// The handler runs first with the arguments it was given. Its error is
    /// returned as is and nothing is rendered. Its value becomes the template
    /// context; rendering failures are converted into `E`.
    pub fn wrap<A, T, E, F>(&self, handler: F) -> impl Fn(A) -> std::result::Result<String, E>
    where
        F: Fn(A) -> std::result::Result<T, E>,
        T: Serialize,
        E: From<Error>,
    {
        let bound = self.clone();
        move |args| {
            let context = handler(args)?;
            bound.render(&context).map_err(E::from)
        }
    }

    /// Like [`wrap`](Self::wrap) for handlers returning a future.
    pub fn wrap_async<A, T, E, F, Fut>(
        &self,
        handler: F,
    ) -> impl Fn(A) -> BoxFuture<'static, std::result::Result<String, E>>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
        T: Serialize + Send + 'static,
        E: From<Error> + Send + 'static,
    {
        let bound = self.clone();
        move |args| {
            let pending = handler(args);
            let bound = bound.clone();
            async move {
                let context = pending.await?;
                bound.render(&context).map_err(E::from)
            }
            .boxed()
        }
    }
}
