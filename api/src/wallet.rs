//! Wallet connection: the provider seam, the connector and the per-flow
//! connection state.

use async_trait::async_trait;
use dioxus_logger::tracing::debug;
use std::fmt;

/// EIP-1193 error code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Account address granted by the wallet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Returns `None` for blank input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `0x1234...abcd` form, or the full address when it is too short to shorten.
    pub fn abbreviated(&self) -> String {
        const PREFIX: usize = 6;
        const SUFFIX: usize = 4;

        if self.0.len() < 12 || !self.0.is_ascii() {
            return self.0.clone();
        }
        format!(
            "{}...{}",
            &self.0[..PREFIX],
            &self.0[self.0.len() - SUFFIX..]
        )
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Connection state of a single flow. There is no disconnect path.
#[derive(Clone, Debug, Default, PartialEq, Eq, strum::EnumIs)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected(WalletAddress),
}

impl ConnectionState {
    pub fn address(&self) -> Option<&WalletAddress> {
        match self {
            ConnectionState::Connected(address) => Some(address),
            ConnectionState::Disconnected => None,
        }
    }

    /// Text for the `walletAddress` field.
    pub fn status_text(&self) -> String {
        match self {
            ConnectionState::Connected(address) => format!("Connected: {address}"),
            ConnectionState::Disconnected => String::new(),
        }
    }
}

/// Error reported by the wallet itself, e.g. a rejected prompt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("provider error{}: {message}", code_suffix(.code))]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|c| format!(" {c}")).unwrap_or_default()
}

impl ProviderError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("MetaMask not detected. Please install it.")]
    ProviderMissing,

    #[error("User denied connection.")]
    UserRejected,

    #[error("wallet returned no accounts")]
    NoAccounts,

    #[error("account request failed: {0}")]
    Request(String),
}

impl From<ProviderError> for ConnectionError {
    fn from(e: ProviderError) -> Self {
        if e.is_user_rejection() {
            ConnectionError::UserRejected
        } else {
            ConnectionError::Request(e.message)
        }
    }
}

/// An account-authorizing wallet, normally the object the browser injects.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Asks the user to authorize the page and returns the granted
    /// accounts, most relevant first.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;
}

/// Connects a flow to whatever provider the environment offered.
///
/// `provider` is `None` when nothing was injected, which is known before
/// any request is made.
pub struct WalletConnector<P> {
    provider: Option<P>,
}

impl<P: WalletProvider> WalletConnector<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self { provider }
    }

    /// Requests authorization and returns the first granted account.
    ///
    /// Calling this again while connected re-requests authorization and
    /// yields the address the wallet grants now.
    pub async fn connect(&self) -> Result<WalletAddress, ConnectionError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(ConnectionError::ProviderMissing)?;

        let accounts = provider.request_accounts().await?;
        debug!("wallet granted {} account(s)", accounts.len());

        let first = accounts.into_iter().next().ok_or(ConnectionError::NoAccounts)?;
        WalletAddress::new(first)
            .ok_or_else(|| ConnectionError::Request("blank account address".to_string()))
    }
}
