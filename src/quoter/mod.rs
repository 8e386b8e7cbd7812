//! The Quote Runner
//!
//! Responsible for:
//! - Building quoteExactInput calldata for each candidate route
//! - Submitting sequential read-only calls to the quoter contract
//! - Tracking the route with the highest decoded output amount

mod rpc;
mod runner;

pub use rpc::{EthCall, HttpRpc};
pub use runner::{BestRoute, QuoteRunner};
