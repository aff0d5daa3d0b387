pub mod use_flow;
pub mod use_simulated_action;
pub mod use_wallet_session;

pub use use_flow::use_flow;
pub use use_flow::Flow;
pub use use_simulated_action::use_simulated_action;
pub use use_simulated_action::SimulatedAction;
pub use use_wallet_session::use_wallet_session;
pub use use_wallet_session::WalletSession;
