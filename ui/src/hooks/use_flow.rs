use super::{use_simulated_action, use_wallet_session, SimulatedAction, WalletSession};
use api::action::ActionKind;

/// Everything one flow owns: its wallet session and its action trigger.
///
/// Created once by the app shell and handed to the flow's screen, so the
/// state outlives the screen being switched away from.
#[derive(Clone, PartialEq)]
pub struct Flow {
    pub session: WalletSession,
    pub action: SimulatedAction,
}

pub fn use_flow(kind: ActionKind) -> Flow {
    Flow {
        session: use_wallet_session(),
        action: use_simulated_action(kind),
    }
}
