use std::collections::HashMap;

/// Header name to its values, in the order they were received. Names are kept
/// exactly as received, so lookups are case-sensitive.
pub type Headers = HashMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDetails {
    pub path: String,
    pub method: String,
    pub destination: String,
    pub scheme: String,
    pub query: String,
    pub body: String,
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseDetails {
    pub status: u16,
    /// Raw bytes as they went over the wire. Compressed bodies stay compressed.
    pub body: Vec<u8>,
    pub headers: Headers,
}

/// A literal recording: the request has to match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestResponsePair {
    pub request: RequestDetails,
    pub response: ResponseDetails,
}

/// Request matcher where every `None` field matches any value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTemplate {
    pub path: Option<String>,
    pub method: Option<String>,
    pub destination: Option<String>,
    pub scheme: Option<String>,
    pub query: Option<String>,
    pub body: Option<String>,
    pub headers: Option<Headers>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateResponsePair {
    pub request_template: RequestTemplate,
    pub response: ResponseDetails,
}
