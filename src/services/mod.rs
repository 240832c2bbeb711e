pub mod error;
pub mod lifecycle;
pub mod marketplace;
pub mod rating;

pub use error::MarketError;
pub use lifecycle::LifecycleService;
pub use marketplace::MarketplaceService;
pub use rating::RatingService;
