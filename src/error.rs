//! Error kinds for the quote scan
//!
//! No local recovery anywhere: every variant aborts the run and surfaces
//! through the binary's top-level reporter with a nonzero exit code.

use thiserror::Error;

/// Everything that can go wrong between a route description and a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Route shape violations: hop/fee counts, unparseable identifiers,
    /// fee tiers that don't fit 3 bytes, empty candidate lists.
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    /// Malformed intermediate hex during path construction. Unreachable
    /// with well-formed inputs; guards the byte-pair parse.
    #[error("path encoding failed: {0}")]
    Encoding(String),

    /// RPC call failure (timeout, connection refused, revert). Not retried.
    #[error("rpc call failed: {0}")]
    Network(String),

    /// Response bytes do not match the quoter's ABI shape.
    #[error("failed to decode quoter response: {0}")]
    Decoding(String),

    /// Every candidate route quoted an output amount of zero.
    #[error("no viable route: every candidate quoted zero output")]
    NoViableRoute,
}
