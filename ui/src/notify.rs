use crate::compat;
use api::FlowError;
use api::Surface;
use dioxus_logger::tracing::{debug, error, warn};

/// Shows or logs a flow failure. This is where every flow error ends up.
pub fn report(err: impl Into<FlowError>) {
    report_to(err.into(), compat::alert);
}

/// Routes `err` by its surface; alerts go through `alert`.
fn report_to(err: FlowError, alert: impl FnOnce(&str)) {
    match err.surface() {
        Surface::Alert => alert(&err.to_string()),
        Surface::Log => match &err {
            FlowError::Connection(_) => error!("{}", err),
            FlowError::Cancelled(_) => debug!("{}", err),
            FlowError::Trigger(_) => warn!("{}", err),
        },
    }
}
