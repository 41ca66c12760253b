//! Aggregation: fan-out, fan-in, and result composition

mod aggregator;
mod session;

pub use aggregator::{AggregateError, Aggregator};
pub use session::SearchSession;
