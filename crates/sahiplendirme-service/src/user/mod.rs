//! User registration and admin CRUD.

mod service;

pub use service::{UserProfile, UserService};
