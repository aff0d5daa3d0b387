//! Running the simulated transaction as a cancellable task.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How long a simulated mint or redeem takes. Fixed.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("simulated action was cancelled")]
pub struct Cancelled;

/// Drives `work` to completion unless `token` is cancelled first.
///
/// The work is whatever stands in for the transaction; today that is a
/// sleep of [`SIMULATED_DELAY`].
pub async fn run_cancellable<F>(
    work: F,
    token: &CancellationToken,
) -> Result<F::Output, Cancelled>
where
    F: Future,
{
    if token.is_cancelled() {
        return Err(Cancelled);
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => Err(Cancelled),
        output = work => Ok(output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionKind, ActionTrigger};
    use crate::wallet::{ConnectionState, WalletAddress};
    use tokio::time::{self, Instant};

    fn connected() -> ConnectionState {
        let address = WalletAddress::new("0x00000000000000000000000000000000000000aa");
        ConnectionState::Connected(address.unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_only_after_fixed_delay() {
        let connection = connected();
        let mut trigger = ActionTrigger::new(ActionKind::Mint);
        let token = CancellationToken::new();

        let started = Instant::now();
        let ticket = trigger.begin_mint(&connection).unwrap();
        let labels_seen = vec![trigger.label()];

        let delay = run_cancellable(time::sleep(SIMULATED_DELAY), &token);
        tokio::pin!(delay);

        let early = time::timeout(SIMULATED_DELAY - Duration::from_millis(1), &mut delay).await;
        assert!(early.is_err(), "finished before the delay elapsed");
        assert!(trigger.state().is_busy());
        assert_eq!(trigger.status(), None);

        delay.await.unwrap();
        assert!(started.elapsed() >= SIMULATED_DELAY);

        trigger.complete(ticket).unwrap();
        assert_eq!(labels_seen, vec!["⏳ Minting..."]);
        assert_eq!(trigger.label(), "✅ Pair Minted");
        assert_eq!(trigger.status(), Some("You received 500 EGG$ + 500 CHI"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_redeem_scenario_three_pairs() {
        let connection = connected();
        let mut trigger = ActionTrigger::new(ActionKind::Redeem);
        let token = CancellationToken::new();

        let ticket = trigger.begin_redeem(&connection, "3").unwrap();
        run_cancellable(time::sleep(SIMULATED_DELAY), &token)
            .await
            .unwrap();
        trigger.complete(ticket).unwrap();

        assert_eq!(trigger.status(), Some("You received 3x $2.00 in crypto = $6"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts_pending_delay() {
        let token = CancellationToken::new();
        let canceller = token.clone();

        let started = Instant::now();
        let run = run_cancellable(time::sleep(SIMULATED_DELAY), &token);
        let cancel = async move {
            time::sleep(Duration::from_millis(500)).await;
            canceller.cancel();
        };

        let (result, ()) = tokio::join!(run, cancel);
        assert_eq!(result, Err(Cancelled));
        assert!(started.elapsed() < SIMULATED_DELAY);
    }

    #[tokio::test]
    async fn test_already_cancelled_token_skips_work() {
        let token = CancellationToken::new();
        token.cancel();

        let result = run_cancellable(async { 42 }, &token).await;
        assert_eq!(result, Err(Cancelled));
    }

    #[tokio::test]
    async fn test_returns_work_output() {
        let token = CancellationToken::new();
        assert_eq!(run_cancellable(async { 42 }, &token).await, Ok(42));
    }
}
