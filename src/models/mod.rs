pub mod dataset;
pub mod listing;

pub use dataset::Dataset;
pub use listing::{Column, JobListing, LOCATION_DEFAULT, NOT_INFORMED};
