//! Template rendering seam.
//!
//! Handlers build a typed view, serialize it into a data mapping and hand it to a
//! `Renderer` together with the template to use. Markup generation lives behind this
//! trait; the server only decides which template gets which data.

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::server::{error::AppError, model::view::Template};

/// Response header naming the template a page was rendered with.
pub const TEMPLATE_HEADER: &str = "x-template";

pub trait Renderer: Send + Sync {
    /// Renders `template` with `context` into a complete response.
    fn render(&self, template: Template, context: Value) -> Result<Response, AppError>;
}

/// Renders a typed view through `renderer`.
pub fn render_view<V: Serialize>(
    renderer: &dyn Renderer,
    template: Template,
    view: &V,
) -> Result<Response, AppError> {
    let context = serde_json::to_value(view)?;
    renderer.render(template, context)
}

/// Renderer emitting the template name and data mapping as a JSON document.
///
/// Body shape: `{ "template": "<name>", "context": { ... } }`.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, template: Template, context: Value) -> Result<Response, AppError> {
        let body = json!({
            "template": template.name(),
            "context": context,
        });

        Ok((
            [(TEMPLATE_HEADER, HeaderValue::from_static(template.name()))],
            Json(body),
        )
            .into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::view::StudentView;

    #[test]
    fn json_renderer_tags_template() {
        let view = StudentView {
            person: None,
            squads: &[],
        };

        let response = render_view(&JsonRenderer, Template::Student, &view).unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()[TEMPLATE_HEADER], "student");
    }
}
