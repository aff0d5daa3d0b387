use crate::compat;
use crate::notify;
use api::action::{ActionKind, ActionTicket, ActionTrigger, TriggerError};
use api::simulate::{run_cancellable, SIMULATED_DELAY};
use api::wallet::ConnectionState;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use tokio_util::sync::CancellationToken;

/// An action button's state plus the task that finishes it.
#[derive(Clone)]
pub struct SimulatedAction {
    trigger: Signal<ActionTrigger>,
    cancel: CancellationToken,
}

// The token belongs to the trigger it was created with.
impl PartialEq for SimulatedAction {
    fn eq(&self, other: &Self) -> bool {
        self.trigger == other.trigger
    }
}

impl SimulatedAction {
    pub fn trigger(&self) -> Signal<ActionTrigger> {
        self.trigger
    }

    pub fn fire_mint(&self, connection: &ConnectionState) {
        let mut trigger = self.trigger;
        let started = trigger.with_mut(|t| t.begin_mint(connection));
        self.run(started);
    }

    pub fn fire_redeem(&self, connection: &ConnectionState, pair_count: &str) {
        let mut trigger = self.trigger;
        let started = trigger.with_mut(|t| t.begin_redeem(connection, pair_count));
        self.run(started);
    }

    fn run(&self, started: Result<ActionTicket, TriggerError>) {
        let ticket = match started {
            Ok(ticket) => ticket,
            Err(e) => return notify::report(e),
        };

        let mut trigger = self.trigger;
        let token = self.cancel.clone();
        // Owned by the root scope so switching tabs does not drop the run.
        spawn_forever(async move {
            if let Err(e) = run_cancellable(compat::sleep(SIMULATED_DELAY), &token).await {
                return notify::report(e);
            }
            let id = ticket.id();
            match trigger.with_mut(|t| t.complete(ticket)) {
                Ok(()) => info!("{} ticket {} done", trigger.peek().kind(), id),
                Err(e) => notify::report(e),
            }
        });
    }
}

/// Creates the trigger for one flow. A pending run is cancelled when the
/// calling component is dropped, so call this where the flow should live.
pub fn use_simulated_action(kind: ActionKind) -> SimulatedAction {
    let trigger = use_signal(|| ActionTrigger::new(kind));
    let cancel = use_hook(CancellationToken::new);

    let on_drop = cancel.clone();
    use_drop(move || on_drop.cancel());

    SimulatedAction { trigger, cancel }
}
