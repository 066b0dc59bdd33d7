//! Server-side rendering of catalog pages.
//!
//! Templates are compiled into the binary and registered once at startup, so a
//! broken template fails the boot instead of a request.

use std::fmt;
use std::sync::{Arc, LazyLock};

use anyhow::Context;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::error::AppError;

/// Every page the catalog can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    GameList,
    GameDetail,
    GameForm,
    GenreList,
    GenreDetail,
    PublisherList,
    PublisherDetail,
    PublisherForm,
    NotFound,
    Error,
}

impl View {
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::GameList,
        Self::GameDetail,
        Self::GameForm,
        Self::GenreList,
        Self::GenreDetail,
        Self::PublisherList,
        Self::PublisherDetail,
        Self::PublisherForm,
        Self::NotFound,
        Self::Error,
    ];

    /// Registry name of the template.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::GameList => "games/list",
            Self::GameDetail => "games/detail",
            Self::GameForm => "games/form",
            Self::GenreList => "genres/list",
            Self::GenreDetail => "genres/detail",
            Self::PublisherList => "publishers/list",
            Self::PublisherDetail => "publishers/detail",
            Self::PublisherForm => "publishers/form",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Home => include_str!("../../templates/home.hbs"),
            Self::GameList => include_str!("../../templates/games/list.hbs"),
            Self::GameDetail => include_str!("../../templates/games/detail.hbs"),
            Self::GameForm => include_str!("../../templates/games/form.hbs"),
            Self::GenreList => include_str!("../../templates/genres/list.hbs"),
            Self::GenreDetail => include_str!("../../templates/genres/detail.hbs"),
            Self::PublisherList => include_str!("../../templates/publishers/list.hbs"),
            Self::PublisherDetail => include_str!("../../templates/publishers/detail.hbs"),
            Self::PublisherForm => include_str!("../../templates/publishers/form.hbs"),
            Self::NotFound => include_str!("../../templates/not_found.hbs"),
            Self::Error => include_str!("../../templates/error.hbs"),
        }
    }
}

/// Shared partials available to every page.
const PARTIALS: [(&str, &str); 2] = [
    ("layout", include_str!("../../templates/partials/layout.hbs")),
    ("game_rows", include_str!("../../templates/partials/game_rows.hbs")),
];

/// Registry used by error responses, which have no access to the app state.
static ERROR_VIEWS: LazyLock<Option<Views>> = LazyLock::new(|| {
    Views::new()
        .inspect_err(|err| tracing::error!("error page templates unavailable: {err:#}"))
        .ok()
});

/// Compiled template registry, cheap to clone into request handlers.
#[derive(Clone)]
pub struct Views {
    registry: Arc<Handlebars<'static>>,
}

impl fmt::Debug for Views {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Views")
            .field("templates", &self.registry.get_templates().len())
            .finish()
    }
}

impl Views {
    /// Compile every partial and page template.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first template that fails to parse.
    pub fn new() -> anyhow::Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_dev_mode(false);

        for (name, source) in PARTIALS {
            registry
                .register_partial(name, source)
                .with_context(|| format!("registering partial `{name}`"))?;
        }

        for view in View::ALL {
            registry
                .register_template_string(view.name(), view.source())
                .with_context(|| format!("registering template `{}`", view.name()))?;
        }

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Render a page with status 200.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if rendering fails.
    pub fn render<T: Serialize>(&self, view: View, data: &T) -> Result<Response, AppError> {
        self.render_with_status(StatusCode::OK, view, data)
    }

    /// Render a page with an explicit status code, e.g. a 404 detail page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if rendering fails.
    pub fn render_with_status<T: Serialize>(
        &self,
        status: StatusCode,
        view: View,
        data: &T,
    ) -> Result<Response, AppError> {
        let html = self
            .registry
            .render(view.name(), data)
            .with_context(|| format!("rendering view `{}`", view.name()))?;

        Ok((status, Html(html)).into_response())
    }

    /// Render the error page for `status`, falling back to a plain-text body.
    pub(crate) fn error_page(status: StatusCode, message: &str) -> Response {
        let data = json!({
            "code": status.as_u16(),
            "reason": status.canonical_reason().unwrap_or("Error"),
            "message": message,
        });

        let html = ERROR_VIEWS.as_ref().and_then(|views| {
            views
                .registry
                .render(View::Error.name(), &data)
                .inspect_err(|err| tracing::error!("rendering error page: {err}"))
                .ok()
        });

        match html {
            Some(html) => (status, Html(html)).into_response(),
            None => (status, message.to_string()).into_response(),
        }
    }
}
