mod classifier;
mod codec;
mod configuration;
mod data;
mod encoder;
mod error;
mod hooks;
mod import;
mod source;
mod store;
mod views;

pub use classifier::{classify, Record, CONTENT_TYPE};
pub use codec::{
    decode_batch, infer_content_type, is_binary, sniff_content_type, to_domain_response,
    to_view_response, APPLICATION_JSON, OCTET_STREAM, TEXT_PLAIN,
};
pub use configuration::ImportConfiguration;
pub use data::{
    Headers, RequestDetails, RequestResponsePair, RequestTemplate, ResponseDetails,
    TemplateResponsePair,
};
pub use encoder::{JsonPairEncoder, PairEncoder};
pub use error::{Error, Result};
pub use hooks::{ActionType, Entry, HookNotifier, NoHooks};
pub use import::{ImportSummary, Importer};
pub use source::{default_http_client, is_url, read_local, Source, SourceResolver};
pub use store::{MemoryPairStore, PairStore, SimulationStore};
pub use views::{
    RequestDetailsView, RequestResponsePairPayload, RequestResponsePairView, ResponseDetailsView,
    REQUEST_TYPE_RECORDING, REQUEST_TYPE_TEMPLATE,
};
