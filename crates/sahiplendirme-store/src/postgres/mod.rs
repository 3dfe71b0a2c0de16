//! PostgreSQL implementations of the store traits.

pub mod counter;
pub mod listing;
pub mod user;

pub use counter::PgCounterStore;
pub use listing::PgListingStore;
pub use user::PgUserStore;
