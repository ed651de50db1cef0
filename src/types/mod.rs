//! Type definitions for teatrack

mod error;
mod record;
mod stats;

pub use error::*;
pub use record::*;
pub use stats::*;

/// Storage key of the records blob
pub const RECORDS_KEY: &str = "bubble_tea_records_v1";

/// Storage key of the brand list blob
pub const BRANDS_KEY: &str = "bubble_tea_brands_v2";
