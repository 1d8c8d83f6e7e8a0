mod repository;
mod service;

pub use self::repository::{DynListingRepository, ListingRepositoryTrait};
pub use self::service::{DynListingService, ListingServiceTrait};
