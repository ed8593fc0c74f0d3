use crate::{
    data::{Headers, RequestDetails, RequestResponsePair, ResponseDetails},
    error::Result,
    views::{
        RequestDetailsView, RequestResponsePairPayload, RequestResponsePairView,
        ResponseDetailsView, REQUEST_TYPE_RECORDING,
    },
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const OCTET_STREAM: &str = "application/octet-stream";

const CONTENT_ENCODING: &str = "Content-Encoding";
const COMPRESSED_ENCODINGS: [&str; 2] = ["gzip", "deflate"];
const TEXT_MIME_MARKERS: [&str; 7] = ["text", "plain", "css", "html", "json", "xml", "javascript"];

/// Parses a `{"data": [...]}` envelope. Malformed input fails the whole batch.
pub fn decode_batch(bytes: &[u8]) -> Result<Vec<RequestResponsePairView>> {
    let payload: RequestResponsePairPayload = serde_json::from_slice(bytes)?;
    Ok(payload.data)
}

pub fn to_domain_response(view: ResponseDetailsView) -> Result<ResponseDetails> {
    let body = if view.encoded_body {
        STANDARD.decode(view.body.as_bytes())?
    } else {
        view.body.into_bytes()
    };

    Ok(ResponseDetails {
        status: view.status,
        body,
        headers: view.headers.unwrap_or_default(),
    })
}

/// Builds the wire view of a response. Bodies flagged as gzip/deflate and
/// bodies that don't look like text are base64 encoded; the bytes themselves
/// are never decompressed.
pub fn to_view_response(response: &ResponseDetails) -> ResponseDetailsView {
    let literal = if has_compressed_encoding(&response.headers) || is_binary(&response.body) {
        None
    } else {
        std::str::from_utf8(&response.body).ok()
    };

    let (body, encoded_body) = match literal {
        Some(text) => (text.to_owned(), false),
        None => (STANDARD.encode(&response.body), true),
    };

    ResponseDetailsView {
        status: response.status,
        body,
        headers: non_empty_headers(&response.headers),
        encoded_body,
    }
}

/// Guesses the content type of a request body that came without one. A body
/// that parses as JSON wins over anything signature sniffing would say.
pub fn infer_content_type(body: &[u8]) -> &'static str {
    if is_json(body) {
        APPLICATION_JSON
    } else {
        sniff_content_type(body)
    }
}

/// Magic-number based detection, falling back to plain text for printable
/// UTF-8 and to `application/octet-stream` for everything else.
pub fn sniff_content_type(body: &[u8]) -> &'static str {
    if let Some(kind) = infer::get(body) {
        return kind.mime_type();
    }

    match std::str::from_utf8(body) {
        Ok(_) if !body.iter().copied().any(is_binary_byte) => TEXT_PLAIN,
        _ => OCTET_STREAM,
    }
}

pub fn is_binary(body: &[u8]) -> bool {
    let mime = sniff_content_type(body);
    std::str::from_utf8(body).is_err() || !TEXT_MIME_MARKERS.iter().any(|m| mime.contains(m))
}

fn is_json(body: &[u8]) -> bool {
    matches!(
        serde_json::from_slice::<serde_json::Value>(body),
        Ok(serde_json::Value::Object(_)) | Ok(serde_json::Value::Array(_))
    )
}

// Control characters that never show up in text documents.
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

fn has_compressed_encoding(headers: &Headers) -> bool {
    headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case(CONTENT_ENCODING))
        .flat_map(|(_, values)| values)
        .any(|value| {
            COMPRESSED_ENCODINGS
                .iter()
                .any(|encoding| value.trim().eq_ignore_ascii_case(encoding))
        })
}

fn non_empty_headers(headers: &Headers) -> Option<Headers> {
    if headers.is_empty() {
        None
    } else {
        Some(headers.clone())
    }
}

impl RequestDetails {
    /// Missing attributes become empty strings, missing headers an empty map.
    pub fn from_view(view: RequestDetailsView) -> Self {
        RequestDetails {
            path: view.path.unwrap_or_default(),
            method: view.method.unwrap_or_default(),
            destination: view.destination.unwrap_or_default(),
            scheme: view.scheme.unwrap_or_default(),
            query: view.query.unwrap_or_default(),
            body: view.body.unwrap_or_default(),
            headers: view.headers.unwrap_or_default(),
        }
    }

    pub fn to_view(&self) -> RequestDetailsView {
        RequestDetailsView {
            request_type: Some(REQUEST_TYPE_RECORDING.into()),
            path: Some(self.path.clone()),
            method: Some(self.method.clone()),
            destination: Some(self.destination.clone()),
            scheme: Some(self.scheme.clone()),
            query: Some(self.query.clone()),
            body: Some(self.body.clone()),
            headers: non_empty_headers(&self.headers),
        }
    }
}

impl RequestResponsePair {
    pub fn from_view(view: RequestResponsePairView) -> Result<Self> {
        Ok(RequestResponsePair {
            request: RequestDetails::from_view(view.request),
            response: to_domain_response(view.response)?,
        })
    }

    pub fn to_view(&self) -> RequestResponsePairView {
        RequestResponsePairView {
            request: self.request.to_view(),
            response: to_view_response(&self.response),
        }
    }
}
