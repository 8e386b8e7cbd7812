//! Best-route selection over the quoter contract
//!
//! One eth_call per candidate route, strictly sequential and in input
//! order. Any failure aborts the whole scan; there is no partial result.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall};
use tracing::{debug, info};

use super::EthCall;
use crate::error::QuoteError;
use crate::path::encode_path;
use crate::resolve::ResolveAddress;
use crate::route::Route;

sol! {
    /// SaucerSwap QuoterV2 interface (Uniswap V3 QuoterV2 ABI)
    #[derive(Debug)]
    interface IQuoterV2 {
        function quoteExactInput(bytes memory path, uint256 amountIn)
            external
            returns (
                uint256 amountOut,
                uint160[] memory sqrtPriceX96AfterList,
                uint32[] memory initializedTicksCrossedList,
                uint256 gasEstimate
            );
    }
}

/// The winning route of a scan.
#[derive(Debug, Clone)]
pub struct BestRoute {
    pub index: usize,
    pub route: Route,
    pub amount_out: U256,
}

/// Runs quoteExactInput across candidate routes and keeps the maximum.
pub struct QuoteRunner<C> {
    client: C,
    quoter: Address,
}

impl<C: EthCall> QuoteRunner<C> {
    pub fn new(client: C, quoter: Address) -> Self {
        Self { client, quoter }
    }

    /// Quote a single route, returning the decoded output amount.
    pub async fn quote(
        &self,
        route: &Route,
        amount_in: U256,
        resolver: &impl ResolveAddress,
    ) -> Result<U256, QuoteError> {
        let path = encode_path(route, resolver)?;
        let calldata = IQuoterV2::quoteExactInputCall { path, amountIn: amount_in }.abi_encode();

        let output = self.client.call(self.quoter, calldata.into()).await?;

        let decoded = IQuoterV2::quoteExactInputCall::abi_decode_returns(&output)
            .map_err(|e| QuoteError::Decoding(e.to_string()))?;

        // sqrtPriceX96AfterList / initializedTicksCrossedList / gasEstimate
        // decode with the tuple but only amountOut matters here
        Ok(decoded.amountOut)
    }

    /// Evaluate every route in input order and return the one with the
    /// greatest output amount. Ties keep the earlier route; a scan where
    /// every route quotes zero is an error, not a best route.
    pub async fn best_route(
        &self,
        routes: &[Route],
        amount_in: U256,
        resolver: &impl ResolveAddress,
    ) -> Result<BestRoute, QuoteError> {
        if routes.is_empty() {
            return Err(QuoteError::InvalidRoute("no candidate routes".into()));
        }

        let mut best_amount = U256::ZERO;
        let mut best_index: Option<usize> = None;

        for (index, route) in routes.iter().enumerate() {
            debug!("executing quote for route {} ({route})", index + 1);
            let amount_out = self.quote(route, amount_in, resolver).await?;
            info!("route {}: output amount {amount_out}", index + 1);

            if amount_out > best_amount {
                best_amount = amount_out;
                best_index = Some(index);
            }
        }

        match best_index {
            Some(index) => Ok(BestRoute {
                index,
                route: routes[index].clone(),
                amount_out: best_amount,
            }),
            None => Err(QuoteError::NoViableRoute),
        }
    }
}
