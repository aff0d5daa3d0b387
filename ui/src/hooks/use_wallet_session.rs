use crate::injected;
use crate::notify;
use api::wallet::{ConnectionError, ConnectionState, WalletAddress, WalletConnector, WalletProvider};
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

/// The connection state owned by one flow.
///
/// Each flow creates its own session; flows never see each other's state.
#[derive(Clone, Copy, PartialEq)]
pub struct WalletSession {
    state: Signal<ConnectionState>,
}

impl WalletSession {
    /// Returns the signal for the connection state.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn state(&self) -> Signal<ConnectionState> {
        self.state
    }

    /// Requests authorization from the wallet the page was given.
    pub async fn connect(self, provider_key: String) {
        self.connect_with(injected::connector(&provider_key)).await
    }

    /// Requests wallet authorization through `connector`.
    /// - On success the first account becomes the connected address.
    /// - On failure the state is left as it was and the error is reported.
    pub async fn connect_with<P: WalletProvider>(self, connector: WalletConnector<P>) {
        let result = connector.connect().await;
        self.apply(result);
    }

    fn apply(mut self, result: Result<WalletAddress, ConnectionError>) {
        match result {
            Ok(address) => {
                info!("wallet connected: {}", address);
                self.state.set(ConnectionState::Connected(address));
            }
            Err(e) => notify::report(e),
        }
    }
}

pub fn use_wallet_session() -> WalletSession {
    WalletSession {
        state: use_signal(ConnectionState::default),
    }
}
