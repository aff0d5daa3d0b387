//! Wallet-gated simulated actions (mint and redeem a token pair).

use crate::wallet::ConnectionState;
use dioxus_logger::tracing::warn;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Pair tokens granted by a mint.
pub const TOKEN_A: &str = "EGG$";
pub const TOKEN_B: &str = "CHI";
/// Units of each token granted by a mint.
pub const MINT_AMOUNT: u64 = 500;
/// Dollars paid out per redeemed pair.
pub const REDEEM_DOLLARS_PER_PAIR: u64 = 2;

/// Forward-only state of an action button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumIs, strum::Display)]
pub enum ButtonState {
    #[default]
    Idle,
    Busy,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIs, strum::Display)]
pub enum ActionKind {
    Mint,
    Redeem,
}

impl ActionKind {
    pub fn label(&self, state: ButtonState) -> &'static str {
        match (self, state) {
            (ActionKind::Mint, ButtonState::Idle) => "Mint Pair",
            (ActionKind::Mint, ButtonState::Busy) => "⏳ Minting...",
            (ActionKind::Mint, ButtonState::Done) => "✅ Pair Minted",
            (ActionKind::Redeem, ButtonState::Idle) => "Redeem Pair",
            (ActionKind::Redeem, ButtonState::Busy) => "⏳ Burning...",
            (ActionKind::Redeem, ButtonState::Done) => "✅ Redeem Complete",
        }
    }

    pub fn button_id(&self) -> &'static str {
        match self {
            ActionKind::Mint => "mintButton",
            ActionKind::Redeem => "redeemButton",
        }
    }

    pub fn status_id(&self) -> &'static str {
        match self {
            ActionKind::Mint => "mintStatus",
            ActionKind::Redeem => "redeemStatus",
        }
    }
}

/// Number of pairs to redeem. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairCount(NonZeroU64);

impl PairCount {
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    pub fn payout_dollars(&self) -> u64 {
        // bounded at parse time
        self.get() * REDEEM_DOLLARS_PER_PAIR
    }
}

impl FromStr for PairCount {
    type Err = TriggerError;

    /// Lenient integer parse: surrounding whitespace and trailing junk are
    /// ignored, so `" 3"`, `"3abc"` and `"3.7"` all give 3. A `0x` prefix
    /// switches to hexadecimal (`"0x1f"` gives 31).
    ///
    /// The field is a `type="number"` input, so a browser only ever hands
    /// over a well-formed number or an empty string. The leniency matters for
    /// programmatic callers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (radix, unsigned) = match unsigned.get(..2) {
            Some("0x" | "0X") => (16, &unsigned[2..]),
            _ => (10, unsigned),
        };
        let digits_end = unsigned
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..digits_end];

        if digits.is_empty() || negative {
            return Err(TriggerError::InvalidInput);
        }

        let value =
            u64::from_str_radix(digits, radix).map_err(|_| TriggerError::InvalidInput)?;
        value
            .checked_mul(REDEEM_DOLLARS_PER_PAIR)
            .ok_or(TriggerError::InvalidInput)?;
        NonZeroU64::new(value)
            .map(PairCount)
            .ok_or(TriggerError::InvalidInput)
    }
}

/// A validated request, created per click and dropped once completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionRequest {
    Mint,
    Redeem(PairCount),
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::Mint => ActionKind::Mint,
            ActionRequest::Redeem(_) => ActionKind::Redeem,
        }
    }

    /// Status text shown once the simulated action finished.
    pub fn completion_message(&self) -> String {
        match self {
            ActionRequest::Mint => {
                format!("You received {MINT_AMOUNT} {TOKEN_A} + {MINT_AMOUNT} {TOKEN_B}")
            }
            ActionRequest::Redeem(pairs) => format!(
                "You received {}x $2.00 in crypto = ${}",
                pairs.get(),
                pairs.payout_dollars()
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
    #[error("Please connect your wallet first")]
    NotConnected,

    #[error("Enter a valid number of pairs")]
    InvalidInput,

    #[error("{0} is already in progress")]
    InFlight(ActionKind),

    #[error("{0} has already completed")]
    AlreadyCompleted(ActionKind),

    #[error("completion ticket {0} does not match the action in flight")]
    StaleTicket(u64),

    #[error("a {0} trigger cannot start this action")]
    WrongKind(ActionKind),
}

/// Proof that an action was started; handed back to [`ActionTrigger::complete`].
#[derive(Debug, PartialEq, Eq)]
pub struct ActionTicket {
    id: u64,
    request: ActionRequest,
}

impl ActionTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn request(&self) -> &ActionRequest {
        &self.request
    }
}

/// One action button together with its status field.
///
/// Holds an explicit in-flight ticket so a second start, routed through the
/// button or not, is refused while the first one is pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionTrigger {
    kind: ActionKind,
    state: ButtonState,
    in_flight: Option<u64>,
    next_ticket: u64,
    status: Option<String>,
}

impl ActionTrigger {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            state: ButtonState::Idle,
            in_flight: None,
            next_ticket: 1,
            status: None,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        self.kind.label(self.state)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The button is clickable only while connected and idle. It stays
    /// disabled once the action has run.
    pub fn is_enabled(&self, connection: &ConnectionState) -> bool {
        connection.is_connected() && self.state.is_idle()
    }

    pub fn begin_mint(
        &mut self,
        connection: &ConnectionState,
    ) -> Result<ActionTicket, TriggerError> {
        self.check_ready(ActionKind::Mint, connection)?;
        self.start(ActionRequest::Mint)
    }

    /// The connection is checked before the input is looked at.
    pub fn begin_redeem(
        &mut self,
        connection: &ConnectionState,
        pair_count: &str,
    ) -> Result<ActionTicket, TriggerError> {
        self.check_ready(ActionKind::Redeem, connection)?;
        let pairs = pair_count.parse::<PairCount>()?;
        self.start(ActionRequest::Redeem(pairs))
    }

    /// Moves `Busy` to `Done` and writes the completion message.
    pub fn complete(&mut self, ticket: ActionTicket) -> Result<(), TriggerError> {
        if self.in_flight != Some(ticket.id) || !self.state.is_busy() {
            warn!(
                "{} ignored completion for ticket {} (in flight: {:?})",
                self.kind, ticket.id, self.in_flight
            );
            return Err(TriggerError::StaleTicket(ticket.id));
        }

        self.in_flight = None;
        self.state = ButtonState::Done;
        self.status = Some(ticket.request.completion_message());
        Ok(())
    }

    fn check_ready(
        &self,
        requested: ActionKind,
        connection: &ConnectionState,
    ) -> Result<(), TriggerError> {
        if requested != self.kind {
            return Err(TriggerError::WrongKind(self.kind));
        }
        if !connection.is_connected() {
            return Err(TriggerError::NotConnected);
        }
        match self.state {
            ButtonState::Idle => Ok(()),
            ButtonState::Busy => Err(TriggerError::InFlight(self.kind)),
            ButtonState::Done => Err(TriggerError::AlreadyCompleted(self.kind)),
        }
    }

    fn start(&mut self, request: ActionRequest) -> Result<ActionTicket, TriggerError> {
        let id = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(id);
        self.state = ButtonState::Busy;
        Ok(ActionTicket { id, request })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::WalletAddress;

    fn connected() -> ConnectionState {
        let address = WalletAddress::new("0xabc0000000000000000000000000000000000def");
        ConnectionState::Connected(address.unwrap())
    }

    #[test]
    fn test_mint_while_disconnected_changes_nothing() {
        let mut trigger = ActionTrigger::new(ActionKind::Mint);
        let before = trigger.clone();

        let result = trigger.begin_mint(&ConnectionState::Disconnected);

        assert_eq!(result, Err(TriggerError::NotConnected));
        assert_eq!(trigger, before);
        assert_eq!(trigger.label(), "Mint Pair");
        assert_ne!(trigger.label(), "⏳ Minting...");
        assert_eq!(
            TriggerError::NotConnected.to_string(),
            "Please connect your wallet first"
        );
    }

    #[test]
    fn test_redeem_checks_connection_before_input() {
        let mut trigger = ActionTrigger::new(ActionKind::Redeem);
        assert_eq!(
            trigger.begin_redeem(&ConnectionState::Disconnected, "abc"),
            Err(TriggerError::NotConnected)
        );
        assert!(trigger.state().is_idle());
    }

    #[test]
    fn test_redeem_rejects_bad_input_without_state_change() {
        let connection = connected();
        for input in ["", "   ", "abc", "0", "-3", "+0", "-0", ".5", "99999999999999999999"] {
            let mut trigger = ActionTrigger::new(ActionKind::Redeem);
            assert_eq!(
                trigger.begin_redeem(&connection, input),
                Err(TriggerError::InvalidInput),
                "input {input:?}"
            );
            assert_eq!(trigger, ActionTrigger::new(ActionKind::Redeem));
        }
        assert_eq!(
            TriggerError::InvalidInput.to_string(),
            "Enter a valid number of pairs"
        );
    }

    #[test]
    fn test_pair_count_lenient_parse() {
        let parse = |s: &str| s.parse::<PairCount>().map(|p| p.get());
        assert_eq!(parse("3"), Ok(3));
        assert_eq!(parse("  12 "), Ok(12));
        assert_eq!(parse("+5"), Ok(5));
        assert_eq!(parse("3abc"), Ok(3));
        assert_eq!(parse("3.7"), Ok(3));
        assert_eq!(parse("007"), Ok(7));
    }

    #[test]
    fn test_pair_count_hex_prefix() {
        let parse = |s: &str| s.parse::<PairCount>().map(|p| p.get());
        assert_eq!(parse("0x3"), Ok(3));
        assert_eq!(parse("0X1f"), Ok(31));
        assert_eq!(parse("+0xAzz"), Ok(10));
        assert_eq!(parse("0x"), Err(TriggerError::InvalidInput));
        assert_eq!(parse("0xg"), Err(TriggerError::InvalidInput));
        assert_eq!(parse("0x0"), Err(TriggerError::InvalidInput));
        assert_eq!(parse("-0x3"), Err(TriggerError::InvalidInput));
    }

    #[test]
    fn test_pair_count_rejects_overflowing_payout() {
        let max = u64::MAX / REDEEM_DOLLARS_PER_PAIR;
        assert_eq!(max.to_string().parse::<PairCount>().map(|p| p.get()), Ok(max));
        assert_eq!(
            (max + 1).to_string().parse::<PairCount>(),
            Err(TriggerError::InvalidInput)
        );
    }

    #[test]
    fn test_mint_runs_idle_busy_done() {
        let connection = connected();
        let mut trigger = ActionTrigger::new(ActionKind::Mint);
        assert!(trigger.is_enabled(&connection));

        let ticket = trigger.begin_mint(&connection).unwrap();
        assert!(trigger.state().is_busy());
        assert_eq!(trigger.label(), "⏳ Minting...");
        assert!(!trigger.is_enabled(&connection));
        assert_eq!(trigger.status(), None);

        trigger.complete(ticket).unwrap();
        assert!(trigger.state().is_done());
        assert_eq!(trigger.label(), "✅ Pair Minted");
        assert_eq!(trigger.status(), Some("You received 500 EGG$ + 500 CHI"));
        assert!(!trigger.is_enabled(&connection));
    }

    #[test]
    fn test_redeem_three_pairs_message() {
        let connection = connected();
        let mut trigger = ActionTrigger::new(ActionKind::Redeem);

        let ticket = trigger.begin_redeem(&connection, "3").unwrap();
        assert_eq!(trigger.label(), "⏳ Burning...");
        trigger.complete(ticket).unwrap();

        assert_eq!(trigger.label(), "✅ Redeem Complete");
        assert_eq!(trigger.status(), Some("You received 3x $2.00 in crypto = $6"));
    }

    #[test]
    fn test_redeem_message_formula() {
        for n in [1u64, 2, 10, 250, 1_000_000] {
            let pairs: PairCount = n.to_string().parse().unwrap();
            assert_eq!(
                ActionRequest::Redeem(pairs).completion_message(),
                format!("You received {n}x $2.00 in crypto = ${}", n * 2)
            );
        }
    }

    #[test]
    fn test_second_start_is_refused_while_busy() {
        let connection = connected();
        let mut trigger = ActionTrigger::new(ActionKind::Mint);

        let ticket = trigger.begin_mint(&connection).unwrap();
        assert_eq!(
            trigger.begin_mint(&connection),
            Err(TriggerError::InFlight(ActionKind::Mint))
        );

        trigger.complete(ticket).unwrap();
        assert_eq!(
            trigger.begin_mint(&connection),
            Err(TriggerError::AlreadyCompleted(ActionKind::Mint))
        );
    }

    #[test]
    fn test_foreign_ticket_is_stale() {
        let connection = connected();
        let mut first = ActionTrigger::new(ActionKind::Redeem);
        let mut second = ActionTrigger::new(ActionKind::Redeem);

        let _ticket = first.begin_redeem(&connection, "1").unwrap();
        let other = second.begin_redeem(&connection, "2").unwrap();
        second.complete(other).unwrap();

        let replay = ActionTicket {
            id: 7,
            request: ActionRequest::Mint,
        };
        assert_eq!(first.complete(replay), Err(TriggerError::StaleTicket(7)));
        assert!(first.state().is_busy());
        assert_eq!(first.status(), None);
    }

    #[test]
    fn test_trigger_refuses_the_other_action() {
        let connection = connected();

        let mut redeem = ActionTrigger::new(ActionKind::Redeem);
        assert_eq!(
            redeem.begin_mint(&connection),
            Err(TriggerError::WrongKind(ActionKind::Redeem))
        );
        assert_eq!(redeem, ActionTrigger::new(ActionKind::Redeem));

        let mut mint = ActionTrigger::new(ActionKind::Mint);
        assert_eq!(
            mint.begin_redeem(&connection, "3"),
            Err(TriggerError::WrongKind(ActionKind::Mint))
        );
        assert!(mint.state().is_idle());
        assert!(mint.begin_mint(&connection).is_ok());
    }

    #[test]
    fn test_button_disabled_until_connected() {
        let trigger = ActionTrigger::new(ActionKind::Redeem);
        assert!(!trigger.is_enabled(&ConnectionState::Disconnected));
        assert!(trigger.is_enabled(&connected()));
    }

    #[test]
    fn test_dom_ids() {
        assert_eq!(ActionKind::Mint.button_id(), "mintButton");
        assert_eq!(ActionKind::Redeem.status_id(), "redeemStatus");
    }
}
