//! Static lookup tables translating route vocabulary into collection API values.
//!
//! Role slugs appear as the final path segment of role listings (`/students`) and sort
//! keys arrive as the `?sort=` query parameter. Both are resolved here before any query
//! is built, so an unknown value never reaches the remote API.

/// Cohort every person and squad query is scoped to.
pub const COHORT: &str = "2526";

/// Tribe every squad query and the home listing are scoped to.
pub const TRIBE_NAME: &str = "FDND Jaar 1";

/// Sort field used when no sort key is given or the key is unknown.
pub const DEFAULT_SORT_FIELD: &str = "name";

/// Role slug to role id.
pub const ROLE_MAP: [(&str, u32); 7] = [
    ("teachers", 1),
    ("leaders", 2),
    ("tribes", 3),
    ("students", 4),
    ("experts", 5),
    ("owners", 6),
    ("officers", 7),
];

/// Sort key to remote sort field.
pub const SORT_MAP: [(&str, &str); 11] = [
    ("baldness", "is_bold"),
    ("a-z", "name"),
    ("shoe-size", "shoe_size"),
    ("season", "fav_season"),
    ("age", "birthdate"),
    ("fav-css", "fav_property"),
    ("nickname", "nickname"),
    ("git-handle", "github_handle"),
    ("fav-color", "fav_color"),
    ("residency", "residency"),
    ("z-a", "-name"),
];

/// Resolves a role slug to its numeric role id.
///
/// # Arguments
/// - `slug` - Path segment such as `"students"`
///
/// # Returns
/// - `Some(u32)` - Role id for a known slug
/// - `None` - Slug is not a role; the caller should defer to the next handler
pub fn role_id(slug: &str) -> Option<u32> {
    ROLE_MAP
        .iter()
        .find(|(known, _)| *known == slug)
        .map(|(_, id)| *id)
}

/// Resolves an optional sort key to the remote sort field.
///
/// Unknown and absent keys both resolve to `DEFAULT_SORT_FIELD`.
pub fn sort_field(key: Option<&str>) -> &'static str {
    key.and_then(|key| {
        SORT_MAP
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, field)| *field)
    })
    .unwrap_or(DEFAULT_SORT_FIELD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolves_every_known_role_slug() {
        assert_eq!(role_id("teachers"), Some(1));
        assert_eq!(role_id("students"), Some(4));
        assert_eq!(role_id("officers"), Some(7));
    }

    #[test]
    fn unknown_role_slug_resolves_to_none() {
        assert_eq!(role_id("student"), None);
        assert_eq!(role_id("Students"), None);
        assert_eq!(role_id(""), None);
        assert_eq!(role_id("favicon.ico"), None);
    }

    #[test]
    fn role_slugs_and_ids_are_unique() {
        let slugs: HashSet<_> = ROLE_MAP.iter().map(|(slug, _)| slug).collect();
        let ids: HashSet<_> = ROLE_MAP.iter().map(|(_, id)| id).collect();

        assert_eq!(slugs.len(), ROLE_MAP.len());
        assert_eq!(ids.len(), ROLE_MAP.len());
    }

    #[test]
    fn resolves_every_known_sort_key() {
        for (key, field) in SORT_MAP {
            assert_eq!(sort_field(Some(key)), field, "sort key {key}");
        }
    }

    #[test]
    fn unknown_or_missing_sort_key_falls_back_to_name() {
        assert_eq!(sort_field(None), "name");
        assert_eq!(sort_field(Some("")), "name");
        assert_eq!(sort_field(Some("shoe_size")), "name");
        assert_eq!(sort_field(Some("-name")), "name");
    }

    #[test]
    fn only_z_a_sorts_descending() {
        let descending: Vec<_> = SORT_MAP
            .iter()
            .filter(|(_, field)| field.starts_with('-'))
            .map(|(key, _)| *key)
            .collect();

        assert_eq!(descending, vec!["z-a"]);
    }
}
