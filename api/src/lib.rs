//! Platform-independent core of the pair vault front-end.
//!
//! Nothing in here touches the DOM. The `ui` crate owns rendering and the
//! browser bridge and drives the types defined here.

pub mod action;
pub mod config;
pub mod error;
pub mod simulate;
pub mod wallet;

pub use error::FlowError;
pub use error::Surface;
