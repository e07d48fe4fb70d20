//! Server-side domain models and parameter types.
//!
//! Records from the collection API (`Person`, `Squad`) are read-only views of remote
//! data. `QueryParams` and the lookup tables describe how route input is translated
//! into remote query directives. `view` holds the data mappings handed to the renderer.

pub mod api;
pub mod lookup;
pub mod person;
pub mod query;
pub mod squad;
pub mod view;
