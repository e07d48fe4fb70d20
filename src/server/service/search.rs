//! Free-text search expansion.
//!
//! A search term is matched case-insensitively against every searchable attribute by
//! building one `_icontains` entry per attribute inside an `_or` group. The collection
//! API parses the group by index, so indices are taken from the field list position and
//! are always contiguous from zero.

use crate::server::model::{query::QueryParams, view::Template};

/// Attributes a search term is matched against, in OR-group order.
pub const SEARCHABLE_FIELDS: [&str; 10] = [
    "name",
    "nickname",
    "github_handle",
    "residency",
    "fav_season",
    "fav_animal",
    "fav_property",
    "fav_feature",
    "vibe_emoji",
    "custom",
];

/// Search term that switches the results page to the easter egg template.
pub const EASTER_EGG_TERM: &str = "koop";

/// Expands `term` into the OR-combined contains filter.
///
/// The raw term is used as the value; case folding is left to `_icontains`.
pub fn expand(term: &str) -> QueryParams {
    SEARCHABLE_FIELDS
        .iter()
        .enumerate()
        .map(|(index, field)| (or_filter_key(index, field), term))
        .collect()
}

fn or_filter_key(index: usize, field: &str) -> String {
    format!("filter[_or][{index}][{field}][_icontains]")
}

/// Whether `term` is the reserved easter egg term, ignoring case and surrounding whitespace.
pub fn is_easter_egg(term: &str) -> bool {
    term.trim().to_lowercase() == EASTER_EGG_TERM
}

/// Template used to render results for `term`.
pub fn template_for(term: &str) -> Template {
    if is_easter_egg(term) {
        Template::Koop
    } else {
        Template::Search
    }
}

/// Returns the submitted term if it is worth searching for.
///
/// `None` for a missing, empty or whitespace-only submission.
pub fn submitted_term(raw: Option<&str>) -> Option<&str> {
    raw.filter(|term| !term.trim().is_empty())
}
