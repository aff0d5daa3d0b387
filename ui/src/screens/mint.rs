//=============================================================================
// File: src/screens/mint.rs
//=============================================================================
use crate::components::action_controls::{ActionButton, ActionStatus};
use crate::components::pico::Card;
use crate::components::wallet_panel::WalletPanel;
use crate::hooks::Flow;
use api::action::{MINT_AMOUNT, TOKEN_A, TOKEN_B};
use dioxus::prelude::*;

#[component]
pub fn MintScreen(flow: Flow) -> Element {
    let Flow { session, action } = flow;
    let connection = session.state();
    let trigger = action.trigger();

    rsx! {
        Card {
            h3 { "Mint a Pair" }
            p { "Receive {MINT_AMOUNT} {TOKEN_A} + {MINT_AMOUNT} {TOKEN_B} from the vault." }
            WalletPanel { session }
            hr {}
            ActionButton {
                trigger,
                connection,
                on_click: move |_| action.fire_mint(&connection.peek()),
            }
            ActionStatus { trigger }
        }
    }
}
