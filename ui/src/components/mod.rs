//! Shared components used by both flow screens.
pub mod action_controls;
pub mod pico;
pub mod wallet_panel;
