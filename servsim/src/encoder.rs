use crate::data::RequestResponsePair;
use std::fmt::Debug;

/// Produces the persistable byte form of a pair; the same bytes are handed to
/// capture hooks.
pub trait PairEncoder: Debug {
    fn encode(
        &self,
        pair: &RequestResponsePair,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Encodes pairs in the import wire format, so encoded pairs can be imported
/// again.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPairEncoder;

impl PairEncoder for JsonPairEncoder {
    fn encode(
        &self,
        pair: &RequestResponsePair,
    ) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(serde_json::to_vec(&pair.to_view())?)
    }
}
