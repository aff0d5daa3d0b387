use crate::action::TriggerError;
use crate::simulate::Cancelled;
use crate::wallet::ConnectionError;

/// Where a failure is shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs)]
pub enum Surface {
    /// Blocking browser alert.
    Alert,
    /// Diagnostic log entry only.
    Log,
}

/// Every failure a flow can hit. All of them are handled where they occur;
/// none is fatal to the page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Trigger(#[from] TriggerError),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl FlowError {
    pub fn surface(&self) -> Surface {
        match self {
            FlowError::Connection(ConnectionError::ProviderMissing)
            | FlowError::Trigger(TriggerError::NotConnected)
            | FlowError::Trigger(TriggerError::InvalidInput) => Surface::Alert,
            _ => Surface::Log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;

    #[test]
    fn test_alerts() {
        for e in [
            FlowError::from(ConnectionError::ProviderMissing),
            FlowError::from(TriggerError::NotConnected),
            FlowError::from(TriggerError::InvalidInput),
        ] {
            assert!(e.surface().is_alert(), "{e}");
        }
    }

    #[test]
    fn test_log_only() {
        for e in [
            FlowError::from(ConnectionError::UserRejected),
            FlowError::from(ConnectionError::NoAccounts),
            FlowError::from(ConnectionError::Request("boom".to_string())),
            FlowError::from(TriggerError::InFlight(ActionKind::Mint)),
            FlowError::from(TriggerError::AlreadyCompleted(ActionKind::Redeem)),
            FlowError::from(TriggerError::StaleTicket(3)),
            FlowError::from(TriggerError::WrongKind(ActionKind::Redeem)),
            FlowError::from(Cancelled),
        ] {
            assert!(e.surface().is_log(), "{e}");
        }
    }

    #[test]
    fn test_message_passes_through() {
        assert_eq!(
            FlowError::from(ConnectionError::UserRejected).to_string(),
            "User denied connection."
        );
    }
}
