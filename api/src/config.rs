use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

/// Value the vault address holds until a real deployment is filled in.
pub const ADDRESS_PLACEHOLDER: &str = "YOUR_VAULT_CONTRACT_ADDRESS";
/// Global the browser wallet is injected under.
pub const DEFAULT_PROVIDER_KEY: &str = "ethereum";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("VAULT_ABI is not a JSON array of ABI entries: {0}")]
    Abi(#[from] serde_json::Error),
}

/// One entry of a contract ABI. Only the fields the UI displays are kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Vault contract the actions would target once they stop being simulated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractConfig {
    pub address: String,
    pub abi: Vec<AbiEntry>,
}

impl ContractConfig {
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.abi
            .iter()
            .filter(|e| e.kind == "function")
            .filter_map(|e| e.name.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultConfig {
    contract: Option<ContractConfig>,
    provider_key: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl VaultConfig {
    /// Reads configuration baked in at build time.
    ///
    /// # Build-time variables
    /// - `VAULT_ADDRESS`: contract address. Unset, blank or the placeholder
    ///   means no contract.
    /// - `VAULT_ABI`: JSON array of ABI entries.
    /// - `WALLET_PROVIDER_KEY`: injected global, defaults to `ethereum`.
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("VAULT_ADDRESS"),
            option_env!("VAULT_ABI"),
            option_env!("WALLET_PROVIDER_KEY"),
        )
    }

    /// A contract is only configured when both the address and a valid ABI
    /// are present. A malformed ABI is logged and ignored.
    pub fn from_vars(
        address: Option<&str>,
        abi: Option<&str>,
        provider_key: Option<&str>,
    ) -> Self {
        let address = address
            .map(str::trim)
            .filter(|a| !a.is_empty() && *a != ADDRESS_PLACEHOLDER);

        let contract = match (address, abi) {
            (Some(address), Some(abi)) => match parse_abi(abi) {
                Ok(abi) => Some(ContractConfig {
                    address: address.to_string(),
                    abi,
                }),
                Err(e) => {
                    warn!("ignoring vault contract {}: {}", address, e);
                    None
                }
            },
            (Some(address), None) => {
                warn!("vault contract {} has no VAULT_ABI; ignoring it", address);
                None
            }
            _ => None,
        };

        let provider_key = provider_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(DEFAULT_PROVIDER_KEY)
            .to_string();

        Self {
            contract,
            provider_key,
        }
    }

    pub fn contract(&self) -> Option<&ContractConfig> {
        self.contract.as_ref()
    }

    pub fn provider_key(&self) -> &str {
        &self.provider_key
    }

    /// One-line description for the page footer.
    pub fn contract_notice(&self) -> String {
        match &self.contract {
            Some(c) => {
                let functions = c.function_names().collect::<Vec<_>>();
                let functions = match functions.is_empty() {
                    true => "no functions".to_string(),
                    false => functions.join(", "),
                };
                format!(
                    "Vault contract {} ({} ABI entries: {}) - actions are simulated",
                    c.address,
                    c.abi.len(),
                    functions
                )
            }
            None => "Vault contract: not configured - actions are simulated".to_string(),
        }
    }
}

fn parse_abi(raw: &str) -> Result<Vec<AbiEntry>, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}
