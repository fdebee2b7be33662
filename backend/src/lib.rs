//! Bookshelf - in-memory books/authors GraphQL services
//!
//! One binary, three independent APIs selected at startup: a catalog with
//! `bookAdded` subscriptions, a catalog with CRUD mutations, and a static
//! users query. All operations are exposed via GraphQL at /graphql.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod graphql;
pub mod logging;
pub mod service_kind;

pub use app::{AppState, build_app, run};
pub use config::Config;
