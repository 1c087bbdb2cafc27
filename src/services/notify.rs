//! Success notification collaborator.
//!
//! All workflow mutations are total once validation passes, so the contract
//! is fire-and-forget: there is no failure notification path.

/// Sink for user-visible success confirmations
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn success(&self, message: &str);
}

/// Default notifier: logs confirmations through tracing
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
