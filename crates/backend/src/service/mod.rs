mod listing;

pub use self::listing::ListingService;
