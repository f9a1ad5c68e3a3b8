//! CAIL job board core: offers, applications, accounts, profiles and notifications.

pub mod applications;
pub mod auth;
pub mod notifications;
pub mod offers;
pub mod profiles;
pub mod report;
pub mod repository;
pub mod seed;
pub mod state;
pub mod tone;
pub mod validation;

pub use repository::RepositoryError;
pub use tone::Tone;
pub use validation::ValidationError;
