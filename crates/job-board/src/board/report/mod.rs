mod summary;
pub mod views;

pub use summary::{first_seen_counts, OfferSummary, StatusCounts, StatusKey};
pub use views::{
    ApplicationBoardReport, DiscoveryView, OfferBoardReport, OfferView, ReceivedApplicationView,
    TrackedApplicationView,
};
