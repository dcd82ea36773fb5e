use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use thiserror::Error;

use super::form::{ContactFormData, SUCCESS_MESSAGE};
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Submission failed: {0}")]
    Rejected(String),
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<String, SubmitError>>>>;

/// Where a validated inquiry goes. On success the future resolves to the
/// confirmation shown to the visitor.
pub trait SubmissionGateway {
    fn submit(&self, inquiry: ContactFormData) -> SubmitFuture;
}

/// Stand-in until the site has an inquiry endpoint: waits, then accepts everything.
pub struct SimulatedGateway {
    delay_ms: u32,
}

impl SimulatedGateway {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(config::SUBMIT_DELAY_MS)
    }
}

impl SubmissionGateway for SimulatedGateway {
    fn submit(&self, inquiry: ContactFormData) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            match serde_json::to_string(&inquiry) {
                Ok(payload) => debug!("Simulating inquiry submission: {}", payload),
                Err(e) => debug!("Could not serialize inquiry: {}", e),
            }
            TimeoutFuture::new(delay_ms).await;
            info!("Inquiry from {} accepted", inquiry.email);
            Ok(SUCCESS_MESSAGE.to_string())
        })
    }
}

/// Shared handle so a gateway can be passed as a component prop.
#[derive(Clone)]
pub struct GatewayHandle(Rc<dyn SubmissionGateway>);

impl GatewayHandle {
    pub fn new(gateway: impl SubmissionGateway + 'static) -> Self {
        Self(Rc::new(gateway))
    }

    pub fn submit(&self, inquiry: ContactFormData) -> SubmitFuture {
        self.0.submit(inquiry)
    }
}

impl Default for GatewayHandle {
    fn default() -> Self {
        Self::new(SimulatedGateway::default())
    }
}

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_gateway_uses_configured_delay() {
        assert_eq!(SimulatedGateway::default().delay_ms, config::SUBMIT_DELAY_MS);
        assert_eq!(SimulatedGateway::new(5).delay_ms, 5);
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = GatewayHandle::default();
        let b = a.clone();
        assert!(a == b);
        assert!(a != GatewayHandle::default());
    }

    #[test]
    fn submit_error_message() {
        let e = SubmitError::Rejected("offline".into());
        assert_eq!(e.to_string(), "Submission failed: offline");
    }
}
