//! Read-only RPC transport
//!
//! One trait, one operation: `eth_call` against a contract. The runner is
//! generic over it so tests can swap in a canned client with no network.

use alloy_primitives::{Address, Bytes};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use tracing::trace;

use crate::error::QuoteError;

/// Read-only contract call capability.
pub trait EthCall {
    fn call(
        &self,
        to: Address,
        calldata: Bytes,
    ) -> impl std::future::Future<Output = Result<Bytes, QuoteError>> + Send;
}

/// JSON-RPC client over HTTP. Issues exactly one request per call; nothing
/// is batched or retried.
pub struct HttpRpc {
    rpc_url: String,
}

impl HttpRpc {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self { rpc_url: rpc_url.into() }
    }
}

impl EthCall for HttpRpc {
    async fn call(&self, to: Address, calldata: Bytes) -> Result<Bytes, QuoteError> {
        let provider = ProviderBuilder::new().on_http(
            self.rpc_url
                .parse()
                .map_err(|e| QuoteError::Network(format!("invalid rpc url: {e}")))?,
        );

        let tx = TransactionRequest::default().to(to).input(calldata.into());

        trace!("eth_call to {to}");
        let result = provider
            .call(tx)
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        Ok(result)
    }
}
