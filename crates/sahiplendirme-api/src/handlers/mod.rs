//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod health;
pub mod listing;
pub mod user;
