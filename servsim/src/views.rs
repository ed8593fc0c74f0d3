//! Wire format of imported and exported simulation data.
//!
//! ```json
//! {
//!   "data": [
//!     {
//!       "request": { "requestType": "template", "path": "/api", "method": "GET" },
//!       "response": { "status": 200, "body": "ok", "encodedBody": false }
//!     }
//!   ]
//! }
//! ```

use crate::data::Headers;
use serde::{Deserialize, Serialize};

pub const REQUEST_TYPE_TEMPLATE: &str = "template";
pub const REQUEST_TYPE_RECORDING: &str = "recording";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResponsePairPayload {
    pub data: Vec<RequestResponsePairView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResponsePairView {
    pub request: RequestDetailsView,
    pub response: ResponseDetailsView,
}

/// Request attributes as they appear on the wire. A field that was not sent is
/// `None`; a field sent as `""` is `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetailsView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
}

impl RequestDetailsView {
    pub fn is_template(&self) -> bool {
        self.request_type.as_deref() == Some(REQUEST_TYPE_TEMPLATE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDetailsView {
    pub status: u16,
    /// Literal text, or base64 when `encoded_body` is set.
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    #[serde(default)]
    pub encoded_body: bool,
}
