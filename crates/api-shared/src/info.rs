use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_MESSAGE: &str = "Lab Record Generator API";
pub const SERVICE_STATUS: &str = "running";
pub const SERVICE_VERSION: &str = "1.0";

/// Body returned by the service root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoRes {
    pub message: String,
    pub status: String,
    pub version: String,
    /// Whether the configured logo file exists on the server.
    pub logo_uploaded: bool,
}

/// Body returned by failed requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}

impl ErrorRes {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

pub struct ServiceInfo;

impl ServiceInfo {
    pub fn describe(logo_uploaded: bool) -> ServiceInfoRes {
        ServiceInfoRes {
            message: SERVICE_MESSAGE.into(),
            status: SERVICE_STATUS.into(),
            version: SERVICE_VERSION.into(),
            logo_uploaded,
        }
    }
}
