//! Factory methods for registering test data on the mock collection API.
//!
//! Factories build records with sensible defaults (through the fixtures) and mount them
//! on a `wiremock::MockServer`, reducing boilerplate in route tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let test = TestBuilder::new().build().await.unwrap();
//!
//!     // Mount with defaults
//!     let person = factory::create_person(&test.server).await;
//!
//!     // Mount with custom values
//!     let ada = factory::person::PersonFactory::new(&test.server)
//!         .id(12)
//!         .name("Ada")
//!         .mount()
//!         .await;
//! }
//! ```

pub mod helpers;
pub mod person;

pub use person::create_person;
