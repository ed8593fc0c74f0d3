use crate::{
    classifier::{classify, Record},
    codec::decode_batch,
    configuration::ImportConfiguration,
    data::RequestResponsePair,
    error::{Error, Result},
    hooks::{ActionType, Entry},
    source::{read_local, SourceResolver},
    store::SimulationStore,
    views::RequestResponsePairView,
};
use std::{path::Path, sync::Arc};
use tracing::{error, info};

const IMPORTED_MESSAGE: &str = "imported";

/// Outcome of a batch. Individual failures never turn into an `Err`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ImportSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

/// Loads simulation data into a [`SimulationStore`].
#[derive(Debug)]
pub struct Importer {
    configuration: ImportConfiguration,
    resolver: SourceResolver,
    store: Arc<SimulationStore>,
}

impl Importer {
    pub fn new(configuration: ImportConfiguration, store: Arc<SimulationStore>) -> Result<Self> {
        let resolver = SourceResolver::new(configuration.http_client()?);

        Ok(Self {
            configuration,
            resolver,
            store,
        })
    }

    pub fn store(&self) -> Arc<SimulationStore> {
        self.store.clone()
    }

    /// Imports from a URL or a `.json` file. Only resolution, decoding and
    /// empty batches are reported as errors.
    pub fn import(&self, uri: &str) -> Result<ImportSummary> {
        let payload = self.resolver.resolve(uri)?;
        self.import_payload(&payload)
    }

    pub fn import_from_url(&self, url: &str) -> Result<ImportSummary> {
        let payload = self.resolver.fetch(url)?;
        self.import_payload(&payload)
    }

    pub fn import_from_disk<P: AsRef<Path>>(&self, path: P) -> Result<ImportSummary> {
        let payload = read_local(path)?;
        self.import_payload(&payload)
    }

    fn import_payload(&self, payload: &[u8]) -> Result<ImportSummary> {
        let views = decode_batch(payload)?;
        self.import_views(views)
    }

    /// Processes records one at a time, in order. A failing record is counted
    /// and logged, and the rest of the batch carries on.
    pub fn import_views(&self, views: Vec<RequestResponsePairView>) -> Result<ImportSummary> {
        if views.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let mut summary = ImportSummary {
            total: views.len(),
            ..ImportSummary::default()
        };

        for view in views {
            match self.import_record(view) {
                Ok(()) => summary.success += 1,
                Err(e) => {
                    error!(error = %e, "Failed to import payload");
                    summary.failed += 1;
                }
            }
        }

        info!(
            total = summary.total,
            successful = summary.success,
            failed = summary.failed,
            "payloads imported"
        );

        Ok(summary)
    }

    fn import_record(&self, view: RequestResponsePairView) -> Result<()> {
        match classify(view)? {
            Record::Template(template) => {
                self.store.append_template(template);
                Ok(())
            }
            Record::Recording(pair) => self.import_recording(pair),
        }
    }

    // The capture hook fires before the save is attempted.
    fn import_recording(&self, pair: RequestResponsePair) -> Result<()> {
        let pair_bytes = self
            .configuration
            .pair_encoder()
            .encode(&pair)
            .map_err(|e| Error::Encode(e.to_string()))?;

        self.notify(Entry::new(
            ActionType::RequestCaptured,
            IMPORTED_MESSAGE,
            pair_bytes,
        ));

        self.store.save(pair)
    }

    fn notify(&self, entry: Entry) {
        if let Err(e) = self.configuration.hooks().fire(entry.action_type, &entry) {
            error!(
                error = %e,
                message = %entry.message,
                action_type = %entry.action_type,
                "failed to fire hook"
            );
        }
    }
}
