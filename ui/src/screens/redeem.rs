//=============================================================================
// File: src/screens/redeem.rs
//=============================================================================
use crate::components::action_controls::{ActionButton, ActionStatus};
use crate::components::pico::{Card, Input};
use crate::components::wallet_panel::WalletPanel;
use crate::hooks::Flow;
use dioxus::prelude::*;

#[component]
pub fn RedeemScreen(flow: Flow) -> Element {
    let Flow { session, action } = flow;
    let connection = session.state();
    let trigger = action.trigger();

    // Raw text; it is only parsed when the button is clicked.
    let mut pair_count = use_signal(String::new);

    rsx! {
        Card {
            h3 { "Redeem Pairs" }
            p { "Burn EGG$/CHI pairs and receive $2.00 in crypto for each one." }
            WalletPanel { session }
            hr {}
            Input {
                label: "Number of pairs".to_string(),
                id: "pairCount",
                input_type: "number",
                min: "1",
                placeholder: "e.g. 3",
                value: "{pair_count}",
                on_input: move |evt: FormEvent| pair_count.set(evt.value()),
            }
            ActionButton {
                trigger,
                connection,
                on_click: move |_| action.fire_redeem(&connection.peek(), &pair_count.peek()),
            }
            ActionStatus { trigger }
        }
    }
}
