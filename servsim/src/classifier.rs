use crate::{
    codec::{infer_content_type, to_domain_response},
    data::{RequestDetails, RequestResponsePair, RequestTemplate, TemplateResponsePair},
    error::Result,
    views::{RequestDetailsView, RequestResponsePairView},
};

pub const CONTENT_TYPE: &str = "Content-Type";

/// A decoded record, sorted into the kind of simulation data it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Template(TemplateResponsePair),
    Recording(RequestResponsePair),
}

pub fn classify(view: RequestResponsePairView) -> Result<Record> {
    let RequestResponsePairView { request, response } = view;
    let response = to_domain_response(response)?;

    if request.is_template() {
        return Ok(Record::Template(TemplateResponsePair {
            request_template: RequestTemplate::from_view(request),
            response,
        }));
    }

    let mut request = RequestDetails::from_view(request);
    if !request.headers.contains_key(CONTENT_TYPE) {
        let content_type = infer_content_type(request.body.as_bytes());
        request
            .headers
            .insert(CONTENT_TYPE.to_string(), vec![content_type.to_string()]);
    }

    Ok(Record::Recording(RequestResponsePair { request, response }))
}

impl RequestTemplate {
    pub fn from_view(view: RequestDetailsView) -> Self {
        RequestTemplate {
            path: view.path,
            method: view.method,
            destination: view.destination,
            scheme: view.scheme,
            query: view.query,
            body: view.body,
            headers: view.headers,
        }
    }
}
