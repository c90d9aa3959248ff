pub mod bundle_store;
pub mod log_redact;
pub mod logging;
