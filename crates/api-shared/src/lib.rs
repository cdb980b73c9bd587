//! # API Shared
//!
//! Response types shared by the lab record API surfaces.
//!
//! Contains:
//! - Health and service-info responses (`HealthService`, `ServiceInfo`)
//! - The error body returned on failures (`ErrorRes`)

pub mod health;
pub mod info;

pub use health::{HealthRes, HealthService};
pub use info::{ErrorRes, ServiceInfo, ServiceInfoRes};
