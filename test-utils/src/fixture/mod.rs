//! Test fixtures providing reusable collection API records without a mock server.
//!
//! Fixture functions build JSON records shaped like the collection API's responses.
//! Unlike factories, fixtures do NOT register anything on the mock server.
//!
//! # When to Use Fixtures
//!
//! - **Response bodies**: Pass to `TestBuilder::with_persons` and friends
//! - **Expectations**: Compare rendered contexts against the records that were served
//! - **Default values**: Provide consistent defaults for factory builders
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let person = fixture::person::entity();
//!
//! let student = fixture::person::entity_builder()
//!     .name("Ada")
//!     .role_name("Student")
//!     .build();
//! ```

pub mod person;
pub mod squad;
