use crate::{
    data::{RequestResponsePair, TemplateResponsePair},
    error::{Error, Result},
};
use std::{
    fmt::Debug,
    sync::{Arc, PoisonError, RwLock},
};

/// Persistent storage for recorded pairs.
pub trait PairStore: Debug {
    fn save(
        &self,
        pair: RequestResponsePair,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Default)]
pub struct MemoryPairStore {
    pairs: RwLock<Vec<RequestResponsePair>>,
}

impl MemoryPairStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pairs(&self) -> Result<Vec<RequestResponsePair>> {
        Ok(self.pairs.read()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.pairs.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl PairStore for MemoryPairStore {
    fn save(
        &self,
        pair: RequestResponsePair,
    ) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.pairs
            .write()
            .map_err(|_| Error::PoisonedLock)?
            .push(pair);
        Ok(())
    }
}

/// Everything the matching layer answers from: templates in registration
/// order, and the recorded pairs behind a [`PairStore`].
///
/// Every append or save is visible to readers as a whole, but an import in
/// progress can be observed half done.
#[derive(Debug)]
pub struct SimulationStore {
    templates: RwLock<Vec<TemplateResponsePair>>,
    pairs: Arc<dyn PairStore + Send + Sync>,
}

impl SimulationStore {
    pub fn new(pairs: Arc<dyn PairStore + Send + Sync>) -> Self {
        Self {
            templates: RwLock::new(Vec::new()),
            pairs,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryPairStore::new()))
    }

    pub fn append_template(&self, template: TemplateResponsePair) {
        // push can't be interrupted halfway, so a poisoned Vec is still whole
        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(template);
    }

    /// Snapshot of the templates, first registered first.
    pub fn templates(&self) -> Vec<TemplateResponsePair> {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn template_count(&self) -> usize {
        self.templates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn save(&self, pair: RequestResponsePair) -> Result<()> {
        self.pairs.save(pair).map_err(Error::Store)
    }
}

impl Default for SimulationStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
