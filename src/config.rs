//! Configuration for the quote scan
//!
//! Settings come from the environment (with .env support) or a TOML file.
//! The built-in defaults reproduce the SaucerSwap mainnet scan: two
//! HBAR-denominated candidate routes against the QuoterV2 contract.

use alloy_primitives::{Address, U256};
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::resolve::{HederaResolver, ResolveAddress};
use crate::route::{Route, MAX_FEE};

/// Main configuration for a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // ========== Network Settings ==========
    /// JSON-RPC endpoint (Hashio or any Hedera EVM-compatible provider)
    pub rpc_url: String,

    /// Quoter contract, as a `shard.realm.num` entity ID or 0x address
    pub quoter_contract_id: String,

    // ========== Scan Settings ==========
    /// Fixed input amount in the first hop's smallest unit, as a decimal
    /// string so amounts beyond u64 stay lossless
    pub input_amount: String,

    /// Candidate routes, evaluated in order
    pub routes: Vec<Route>,
}

impl Config {
    /// Load configuration from environment variables and .env file.
    /// Routes always come from the defaults or a config file; there is no
    /// sane env encoding for them.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            rpc_url: env::var("RPC_URL")
                .unwrap_or_else(|_| "https://mainnet.hashio.io/api".to_string()),
            quoter_contract_id: env::var("QUOTER_CONTRACT_ID")
                .unwrap_or_else(|_| "0.0.3949424".to_string()),
            input_amount: env::var("INPUT_AMOUNT")
                .unwrap_or_else(|_| "70000000".to_string()),
            routes: Self::default_routes(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default candidate routes: direct HBAR→SAUCE and the 2-hop variant
    /// through USDC.
    fn default_routes() -> Vec<Route> {
        vec![
            Route::new(
                vec!["0.0.731861".to_string(), "0.0.456858".to_string()],
                vec![3000],
            )
            .expect("default route is well-formed"),
            Route::new(
                vec![
                    "0.0.731861".to_string(),
                    "0.0.1456986".to_string(),
                    "0.0.456858".to_string(),
                ],
                vec![3000, 1500],
            )
            .expect("default route is well-formed"),
        ]
    }

    /// The input amount as a 256-bit integer.
    pub fn amount_in(&self) -> Result<U256> {
        let amount: U256 = self.input_amount.parse().map_err(|e| {
            eyre::eyre!(
                "INPUT_AMOUNT '{}' is not a decimal integer: {e}",
                self.input_amount
            )
        })?;
        if amount == U256::ZERO {
            return Err(eyre::eyre!("INPUT_AMOUNT must be positive"));
        }
        Ok(amount)
    }

    /// Resolve the quoter contract to its wire-level address.
    pub fn quoter_address(&self) -> Result<Address> {
        HederaResolver
            .resolve(&self.quoter_contract_id)
            .map_err(|e| eyre::eyre!("QUOTER_CONTRACT_ID: {e}"))
    }

    /// Validate configuration before a scan.
    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.is_empty() {
            return Err(eyre::eyre!("RPC_URL must not be empty"));
        }
        self.quoter_address()?;
        self.amount_in()?;

        if self.routes.is_empty() {
            return Err(eyre::eyre!("at least one candidate route is required"));
        }
        // Route::new already enforced shape; re-check ids resolve so a bad
        // config file fails before the first RPC call
        for route in &self.routes {
            for token in route.tokens() {
                HederaResolver
                    .resolve(token)
                    .map_err(|e| eyre::eyre!("route {route}: {e}"))?;
            }
            debug_assert!(route.fees().iter().all(|f| *f < MAX_FEE));
        }

        Ok(())
    }

    /// Print configuration summary.
    pub fn print_summary(&self) {
        println!("╔════════════════════════════════════════════════════════════╗");
        println!("║                 SCOUT - CONFIGURATION                      ║");
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║ RPC:           {:<43} ║", truncated(&self.rpc_url, 43));
        println!("║ Quoter:        {:<43} ║", self.quoter_contract_id);
        println!("║ Input Amount:  {:<43} ║", self.input_amount);
        println!("║ Routes:        {:<43} ║", self.routes.len());
        println!("╚════════════════════════════════════════════════════════════╝");
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "https://mainnet.hashio.io/api".to_string(),
            quoter_contract_id: "0.0.3949424".to_string(),
            input_amount: "70000000".to_string(),
            routes: Self::default_routes(),
        }
    }
}

fn truncated(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.amount_in().unwrap(), U256::from(70_000_000u64));
    }

    #[test]
    fn test_quoter_resolves_at_startup() {
        let config = Config::default();
        let quoter = config.quoter_address().unwrap();
        assert_eq!(
            format!("{quoter:?}"),
            "0x00000000000000000000000000000000003c4370"
        );
    }

    #[test]
    fn test_zero_amount_rejected() {
        let config = Config { input_amount: "0".to_string(), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let config = Config { input_amount: "70e6".to_string(), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_routes_rejected() {
        let config = Config { routes: vec![], ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.routes, config.routes);
        assert_eq!(parsed.rpc_url, config.rpc_url);
    }

    #[test]
    fn test_malformed_route_in_file_rejected() {
        // 3 hops but only 1 fee: must fail at deserialization
        let toml = r#"
            rpc_url = "https://mainnet.hashio.io/api"
            quoter_contract_id = "0.0.3949424"
            input_amount = "70000000"

            [[routes]]
            tokens = ["0.0.1", "0.0.2", "0.0.3"]
            fees = [3000]
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }
}
