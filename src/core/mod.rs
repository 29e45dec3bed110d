//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod currency;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use convert::{checked_convert, convert};
pub use currency::{BASE_CURRENCY, Rate, RateSource};
pub use rates::{Conversion, RateTable, RefreshStatus};
