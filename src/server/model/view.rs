//! Data mappings handed to the template renderer, one per template.

use serde::Serialize;

use crate::server::model::{person::Person, squad::Squad};

/// Templates the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Home listing of everyone in the tribe.
    Index,
    /// Standard search results.
    Search,
    /// Easter egg search results for the reserved search term.
    Koop,
    /// Single person detail page.
    Student,
    /// Listing of everyone with one role.
    All,
}

impl Template {
    pub fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Search => "search",
            Self::Koop => "koop",
            Self::Student => "student",
            Self::All => "all",
        }
    }
}

#[derive(Serialize)]
pub struct IndexView<'a> {
    pub persons: Vec<Person>,
    pub squads: &'a [Squad],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView<'a> {
    pub persons: Vec<Person>,
    pub search_term: String,
    pub squads: &'a [Squad],
}

/// `person` is `None` when the API returned nothing for the requested id; templates
/// show that as an empty detail page.
#[derive(Serialize)]
pub struct StudentView<'a> {
    pub person: Option<Person>,
    pub squads: &'a [Squad],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleView<'a> {
    pub persons: Vec<Person>,
    pub role_name: String,
    pub squads: &'a [Squad],
}
