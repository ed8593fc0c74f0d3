use crate::{
    encoder::{JsonPairEncoder, PairEncoder},
    error::Result,
    hooks::{HookNotifier, NoHooks},
    source::default_http_client,
};
use std::sync::Arc;

type ReqwestClient = reqwest::blocking::Client;

#[derive(Debug, Clone)]
pub struct ImportConfiguration {
    http_client: Option<ReqwestClient>,
    hooks: Arc<dyn HookNotifier + Send + Sync>,
    pair_encoder: Arc<dyn PairEncoder + Send + Sync>,
}

impl ImportConfiguration {
    pub fn new() -> Self {
        Self {
            http_client: None,
            hooks: Arc::new(NoHooks),
            pair_encoder: Arc::new(JsonPairEncoder),
        }
    }

    /// Client used to fetch remote payloads. Timeouts, proxies and TLS
    /// settings all come from here.
    pub fn set_http_client(&mut self, client: ReqwestClient) {
        self.http_client = Some(client);
    }

    /// The configured client, or one without a request timeout.
    pub fn http_client(&self) -> Result<ReqwestClient> {
        match &self.http_client {
            Some(client) => Ok(client.clone()),
            None => default_http_client(),
        }
    }

    pub fn set_hooks(&mut self, hooks: Arc<dyn HookNotifier + Send + Sync>) {
        self.hooks = hooks;
    }

    pub fn hooks(&self) -> Arc<dyn HookNotifier + Send + Sync> {
        self.hooks.clone()
    }

    pub fn set_pair_encoder(&mut self, pair_encoder: Arc<dyn PairEncoder + Send + Sync>) {
        self.pair_encoder = pair_encoder;
    }

    pub fn pair_encoder(&self) -> Arc<dyn PairEncoder + Send + Sync> {
        self.pair_encoder.clone()
    }
}

impl Default for ImportConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
