//! Browser-facing HTML layer.
//!
//! Uses Askama templates for server-side rendering; the page talks to the
//! JSON API with `fetch` for create and delete.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
