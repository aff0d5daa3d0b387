use crate::components::pico::Button;
use api::action::ActionTrigger;
use api::wallet::ConnectionState;
use dioxus::prelude::*;

/// The mint/redeem button. Disabled until connected, and again once started.
#[component]
pub fn ActionButton(
    trigger: Signal<ActionTrigger>,
    connection: Signal<ConnectionState>,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let t = trigger.read();
    let enabled = t.is_enabled(&connection.read());

    rsx! {
        Button {
            id: t.kind().button_id(),
            disabled: !enabled,
            on_click: move |evt| on_click.call(evt),
            "{t.label()}"
        }
    }
}

/// Result line written once the action is done.
#[component]
pub fn ActionStatus(trigger: Signal<ActionTrigger>) -> Element {
    let t = trigger.read();
    let message = t.status().unwrap_or_default();

    rsx! {
        p {
            id: t.kind().status_id(),
            role: "status",
            strong { "{message}" }
        }
    }
}
