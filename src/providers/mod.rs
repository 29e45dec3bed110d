pub mod nbu;

pub use nbu::NbuRateProvider;
