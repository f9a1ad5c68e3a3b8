//! Job offers: the employer-managed catalogue, its status lifecycle and candidate discovery.

pub mod domain;
pub mod filter;
pub mod import;
pub mod lifecycle;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{JobOffer, Modality, OfferDraft, OfferEdit, OfferId, OfferStatus, Priority};
pub use filter::{filter_offers, DiscoveryQuery, FilterState, Selector};
pub use import::{OfferImportError, OfferImporter};
pub use lifecycle::{LifecycleError, OfferAction};
pub use repository::{InMemoryOfferRepository, OfferRepository};
pub use router::offer_router;
pub use service::{OfferService, OfferServiceError};
