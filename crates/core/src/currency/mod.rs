//! Multi-currency handling and exchange rates.

pub mod conversion;
pub mod snapshot;

#[cfg(test)]
mod props;

pub use conversion::convert;
pub use snapshot::RateSnapshot;
