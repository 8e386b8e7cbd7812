//! Candidate swap routes
//!
//! A route is an ordered list of hop identifiers plus the fee tier of each
//! pool between consecutive hops. Shape invariants are enforced at
//! construction; a `Route` that exists is well-formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::QuoteError;

/// Largest fee tier that fits the path encoding's 3-byte slot.
pub const MAX_FEE: u32 = 1 << 24;

/// An immutable multi-hop swap route: N hop identifiers, N-1 fee tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RouteSpec", into = "RouteSpec")]
pub struct Route {
    tokens: Vec<String>,
    fees: Vec<u32>,
}

/// Wire/config form of a route, before shape validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSpec {
    pub tokens: Vec<String>,
    pub fees: Vec<u32>,
}

impl Route {
    pub fn new(tokens: Vec<String>, fees: Vec<u32>) -> Result<Self, QuoteError> {
        if tokens.len() < 2 {
            return Err(QuoteError::InvalidRoute(format!(
                "route needs at least 2 hops, got {}",
                tokens.len()
            )));
        }
        if fees.len() != tokens.len() - 1 {
            return Err(QuoteError::InvalidRoute(format!(
                "route with {} hops needs {} fees, got {}",
                tokens.len(),
                tokens.len() - 1,
                fees.len()
            )));
        }
        if let Some(fee) = fees.iter().find(|f| **f >= MAX_FEE) {
            return Err(QuoteError::InvalidRoute(format!(
                "fee tier {fee} does not fit in 3 bytes"
            )));
        }
        Ok(Self { tokens, fees })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn fees(&self) -> &[u32] {
        &self.fees
    }
}

impl TryFrom<RouteSpec> for Route {
    type Error = QuoteError;

    fn try_from(spec: RouteSpec) -> Result<Self, Self::Error> {
        Route::new(spec.tokens, spec.fees)
    }
}

impl From<Route> for RouteSpec {
    fn from(route: Route) -> Self {
        RouteSpec { tokens: route.tokens, fees: route.fees }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" → "))
    }
}
