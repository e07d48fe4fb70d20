use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Redirect, Response},
    Form,
};
use percent_encoding::utf8_percent_encode;
use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::view::SearchView,
    render::render_view,
    service::{person::PersonService, search, PATH_SEGMENT},
    state::AppState,
};

#[derive(Deserialize)]
pub struct SearchForm {
    pub search: Option<String>,
}

/// POST /search - Turn a submitted search form into a shareable URL
///
/// # Form Fields
/// - `search`: Free-text search term
///
/// # Returns
/// - `303 See Other` to `/search/{term}` when the term has non-whitespace content
/// - `303 See Other` to `/` for a missing, empty or whitespace-only term
pub async fn submit(form: Result<Form<SearchForm>, FormRejection>) -> Redirect {
    let raw = form.ok().and_then(|Form(form)| form.search);

    match search::submitted_term(raw.as_deref()) {
        Some(term) => Redirect::to(&format!(
            "/search/{}",
            utf8_percent_encode(term, PATH_SEGMENT)
        )),
        None => Redirect::to("/"),
    }
}

/// GET /search/{term} - Search results across all searchable attributes
///
/// The reserved term renders the `koop` template instead of `search`; the query is the
/// same either way.
///
/// # Returns
/// - `200 OK`: `search` or `koop` template with `persons`, `searchTerm` and `squads`
pub async fn results(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Response, AppError> {
    let persons = PersonService::new(&state.client).search(&term).await;
    let template = search::template_for(&term);

    let view = SearchView {
        persons,
        search_term: term,
        squads: &state.site.squads,
    };

    render_view(state.renderer.as_ref(), template, &view)
}
