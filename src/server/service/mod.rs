//! Service layer between controllers and the collection API.
//!
//! `collection` owns outbound requests and their failure policy. `person` and `squad`
//! translate resolved route input into query parameters for their collections, and
//! `search` expands free-text terms. Services never fail: they return an empty result
//! when the remote API does.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

pub mod collection;
pub mod person;
pub mod search;
pub mod squad;

#[cfg(test)]
mod test;

/// Characters escaped when a value is placed in a single URL path segment.
///
/// Leaves the unreserved marks `encodeURIComponent` leaves, so redirect targets look
/// the same as those produced by browsers.
pub const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
