use crate::components::pico::{Button, ButtonType};
use crate::hooks::WalletSession;
use crate::AppState;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// Connect button plus the `walletAddress` status line for one flow.
#[component]
pub fn WalletPanel(session: WalletSession) -> Element {
    let provider_key = use_context::<AppState>().config.provider_key().to_string();
    let state = session.state();

    let status = state.read().status_text();
    let tooltip = state
        .read()
        .address()
        .map(|a| a.abbreviated())
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 1rem; flex-wrap: wrap;",
            Button {
                id: "connectButton",
                button_type: ButtonType::Secondary,
                on_click: move |_| {
                    spawn_forever(session.connect(provider_key.clone()));
                },
                "Connect Wallet"
            }
            code {
                id: "walletAddress",
                title: "{tooltip}",
                style: "word-break: break-all;",
                "{status}"
            }
        }
    }
}
