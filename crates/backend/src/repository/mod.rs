mod listing;

pub use self::listing::{ListingRepository, check_columns};
