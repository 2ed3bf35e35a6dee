//! External service connectors.
//!
//! All outbound integrations go through a connector trait so route handlers
//! never depend on HTTP details and tests can swap in an offline
//! implementation:
//!
//! 1. Trait + HTTP client live in `{service}.rs`
//! 2. Configuration decides which implementation `init` hands out
//! 3. Routes receive the trait object via `web::Data<Arc<dyn ...>>`

pub mod describe_service;
pub mod errors;

pub use describe_service::{init as init_describe, DescribeClient, DescribeConnector, TemplateDescribe};
pub use errors::ConnectorError;
