use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Common `{ success, message, data }` wrapper used by the gateway's public endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default = "Option::default")]
    pub(crate) data: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    pub(crate) fn parse(endpoint: &str, body: &str) -> Result<Self, AppError> {
        serde_json::from_str(body).map_err(|source| AppError::Payload {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Unwrap `data`, turning `success: false` into an API error.
    pub(crate) fn into_data(self, endpoint: &str) -> Result<Option<T>, AppError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(AppError::Api {
                endpoint: endpoint.to_string(),
                message: self
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }
}
