//! Exchange-rate retrieval and caching.

pub mod error;
pub mod provider;
pub mod source;

pub use error::RateError;
pub use provider::RateProvider;
pub use source::{FrankfurterSource, RateSource};
