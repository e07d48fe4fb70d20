//! Roster Test Utils
//!
//! Provides shared testing utilities for the roster server. This crate offers a builder
//! for test contexts backed by a mock collection API (`wiremock`) and a temporary public
//! asset directory, plus fixtures and factories for collection records.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring mock API responses and assets
//! - **TestContext**: Running mock server plus public directory
//! - **fixture**: In-memory person and squad records
//! - **factory**: Records mounted directly on the mock server
//! - **TestError**: Errors that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_role_listing() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_squads(fixture::squad::roster())
//!         .with_role_persons(4, vec![fixture::person::entity()])
//!         .build()
//!         .await?;
//!
//!     let api_base = test.api_base();
//!     // Point the collection client at `api_base` and exercise routes...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
