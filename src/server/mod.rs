//! Directory server for the cohort roster.
//!
//! This module contains the complete server: routing, request handlers, query
//! construction against the remote collection API and the rendering seam. The server
//! is a stateless read-through translator; it never stores or mutates roster data.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers resolving route input and rendering views
//! - **Service Layer** (`service/`) - Query construction, search expansion and the collection client
//! - **Model Layer** (`model/`) - Records, lookup tables, query parameters and view mappings
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Static asset precedence ahead of routing
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration (`PORT`)
//! - **State** (`state`) - Shared state: collection client, site context, renderer
//! - **Startup** (`startup`) - HTTP client setup, one-time squad roster load, listener binding
//! - **Router** (`router`) - Route table and precedence
//! - **Render** (`render`) - Template renderer trait and the JSON renderer
//!
//! # Request Flow
//!
//! 1. **Middleware** serves the request directly if it names a public file
//! 2. **Router** picks the handler by path
//! 3. **Controller** resolves role slugs and sort keys through the lookup tables
//! 4. **Service** builds query parameters and calls the collection API
//! 5. **Controller** renders the chosen template with the results and the squad roster

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod render;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
