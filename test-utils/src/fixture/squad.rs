//! Squad fixtures for creating in-memory collection API records.

use serde_json::{json, Value};

/// Default cohort for squads.
pub const DEFAULT_COHORT: &str = "2526";

/// Creates a squad record in the default cohort.
///
/// # Arguments
/// - `id` - Squad id
/// - `name` - Squad name, e.g. `"1G"`
pub fn entity(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "cohort": DEFAULT_COHORT,
    })
}

/// The squads of a typical first-year tribe.
pub fn roster() -> Vec<Value> {
    vec![entity(1, "1G"), entity(2, "1H"), entity(3, "1I")]
}
