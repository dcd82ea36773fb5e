pub mod form;
pub mod gateway;

pub use form::{ContactFormState, FormEffect, FormField, FormMsg};
pub use gateway::GatewayHandle;
