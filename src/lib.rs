//! Call QA Console
//!
//! Leptos CSR frontend over the call QA REST API:
//! - api: HTTP client, query builders, error type
//! - router/context/store: navigation, session and shared state
//! - components/pages: views

pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod context;
pub mod format;
pub mod latest;
pub mod models;
pub mod pages;
pub mod router;
pub mod store;
