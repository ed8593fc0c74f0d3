#[cfg(test)]
mod tests {
    use hyper::{
        service::{make_service_fn, service_fn},
        Body, Request, Response, Server, StatusCode,
    };
    use servsim::{
        ActionType, Entry, Error, HookNotifier, ImportConfiguration, Importer, MemoryPairStore,
        PairStore, RequestResponsePair, RequestResponsePairPayload, RequestResponsePairView,
        SimulationStore, CONTENT_TYPE,
    };
    use std::{
        convert::Infallible,
        io::Write,
        net::TcpListener,
        sync::{Arc, Mutex},
        thread,
    };
    use tokio::runtime::Runtime;

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    const SIMULATION: &str = r#"{
        "data": [
            {
                "request": {
                    "requestType": "template",
                    "path": "/api/bookings",
                    "method": "POST"
                },
                "response": {"status": 201, "body": "{\"bookingId\": 1}"}
            },
            {
                "request": {
                    "path": "/api/image",
                    "method": "GET",
                    "destination": "www.example.com",
                    "scheme": "http",
                    "query": "",
                    "body": ""
                },
                "response": {
                    "status": 200,
                    "body": "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAAAAAA6fptVAAAACklEQVR4nGP6DwABBQECz6AuzQAAAABJRU5ErkJggg==",
                    "encodedBody": true,
                    "headers": {"Content-Type": ["image/png"]}
                }
            },
            {
                "request": {
                    "path": "/api/bookings/1",
                    "method": "PUT",
                    "body": "{\"seats\": 2}"
                },
                "response": {
                    "status": 200,
                    "body": "H4sIAAAJbogA/w==",
                    "encodedBody": true,
                    "headers": {"Content-Encoding": ["gzip"]}
                }
            }
        ]
    }"#;

    /// Serves `body` for every request on a background runtime, the way a
    /// remote simulation source would.
    fn serve(status: StatusCode, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            Runtime::new().unwrap().block_on(async move {
                let server = Server::from_tcp(listener)
                    .unwrap()
                    .serve(make_service_fn(move |_| async move {
                        Ok::<_, Infallible>(service_fn(move |_: Request<Body>| async move {
                            let mut response = Response::new(Body::from(body));
                            *response.status_mut() = status;
                            Ok::<_, Infallible>(response)
                        }))
                    }));

                if let Err(e) = server.await {
                    eprintln!("Simulation source error: {}", e);
                }
            });
        });

        format!("http://{}/simulation.json", addr)
    }

    fn importer_with(pairs: Arc<dyn PairStore + Send + Sync>) -> (Importer, Arc<SimulationStore>) {
        importer_with_hooks(pairs, ImportConfiguration::new())
    }

    fn importer_with_hooks(
        pairs: Arc<dyn PairStore + Send + Sync>,
        configuration: ImportConfiguration,
    ) -> (Importer, Arc<SimulationStore>) {
        let store = Arc::new(SimulationStore::new(pairs));
        (Importer::new(configuration, store.clone()).unwrap(), store)
    }

    #[derive(Debug, Default)]
    struct CapturedEntries(Mutex<Vec<Entry>>);

    impl HookNotifier for CapturedEntries {
        fn fire(&self, _: ActionType, entry: &Entry) -> Result<(), BoxError> {
            self.0.lock().unwrap().push(entry.clone());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct ReadOnlyStore;

    impl PairStore for ReadOnlyStore {
        fn save(&self, _: RequestResponsePair) -> Result<(), BoxError> {
            Err("store is read only".into())
        }
    }

    fn assert_simulation_loaded(store: &SimulationStore, pairs: &MemoryPairStore) {
        let templates = store.templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].request_template.path.as_deref(),
            Some("/api/bookings")
        );
        assert_eq!(templates[0].request_template.destination, None);
        assert_eq!(templates[0].response.status, 201);

        let pairs = pairs.pairs().unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].request.path, "/api/image");
        assert_eq!(&pairs[0].response.body[1..4], b"PNG");
        assert_eq!(
            pairs[0].request.headers.get(CONTENT_TYPE),
            Some(&vec!["text/plain; charset=utf-8".to_string()])
        );
        assert_eq!(
            pairs[1].response.body,
            vec![0x1f, 0x8b, 0x08, 0x00, 0x00, 0x09, 0x6e, 0x88, 0x00, 0xff]
        );
        assert_eq!(
            pairs[1].request.headers.get(CONTENT_TYPE),
            Some(&vec!["application/json".to_string()])
        );
    }

    #[test]
    fn imports_simulation_from_url() {
        let url = serve(StatusCode::OK, SIMULATION);
        let pairs = Arc::new(MemoryPairStore::new());
        let (importer, store) = importer_with(pairs.clone());

        let summary = importer.import(&url).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.success, 3);
        assert_eq!(summary.failed, 0);
        assert_simulation_loaded(&store, &pairs);
    }

    #[test]
    fn imports_simulation_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SIMULATION.as_bytes()).unwrap();
        let pairs = Arc::new(MemoryPairStore::new());
        let (importer, store) = importer_with(pairs.clone());

        let summary = importer.import(file.path().to_str().unwrap()).unwrap();

        assert_eq!(summary.success, 3);
        assert_simulation_loaded(&store, &pairs);
    }

    #[test]
    fn malformed_remote_payload_fails_the_whole_import() {
        let url = serve(StatusCode::OK, r#"{"data": [{"request": "#);
        let pairs = Arc::new(MemoryPairStore::new());
        let (importer, store) = importer_with(pairs.clone());

        match importer.import_from_url(&url) {
            Err(Error::Parse(_)) => (),
            other => panic!("expected a parse error, got {:?}", other),
        }
        assert!(pairs.is_empty().unwrap());
        assert_eq!(store.template_count(), 0);
    }

    #[test]
    fn empty_remote_batch_is_an_error() {
        let url = serve(StatusCode::OK, r#"{"data": []}"#);
        let (importer, _) = importer_with(Arc::new(MemoryPairStore::new()));

        assert!(matches!(importer.import(&url), Err(Error::EmptyBatch)));
    }

    #[test]
    fn unreachable_source_is_a_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/simulation.json", listener.local_addr().unwrap());
        drop(listener);
        let (importer, _) = importer_with(Arc::new(MemoryPairStore::new()));

        let error = importer.import(&url).unwrap_err();

        assert!(matches!(error, Error::Fetch { .. }));
        assert!(error.is_resolution_error());
    }

    #[test]
    fn failed_saves_still_report_a_successful_import() {
        let url = serve(StatusCode::OK, SIMULATION);
        let (importer, store) = importer_with(Arc::new(ReadOnlyStore));

        let summary = importer.import(&url).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(store.template_count(), 1);
    }

    #[test]
    fn captured_entries_can_be_imported_again() {
        let hooks = Arc::new(CapturedEntries::default());
        let mut configuration = ImportConfiguration::new();
        configuration.set_hooks(hooks.clone());
        let first_pairs = Arc::new(MemoryPairStore::new());
        let (importer, _) = importer_with_hooks(first_pairs.clone(), configuration);

        importer
            .import_views(servsim::decode_batch(SIMULATION.as_bytes()).unwrap())
            .unwrap();

        let entries = hooks.0.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .all(|e| e.action_type == ActionType::RequestCaptured && e.message == "imported"));

        let exported = RequestResponsePairPayload {
            data: entries
                .iter()
                .map(|e| serde_json::from_slice::<RequestResponsePairView>(&e.data).unwrap())
                .collect(),
        };
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(&serde_json::to_vec(&exported).unwrap()).unwrap();

        let second_pairs = Arc::new(MemoryPairStore::new());
        let (reimporter, _) = importer_with(second_pairs.clone());
        reimporter.import_from_disk(file.path()).unwrap();

        assert_eq!(second_pairs.pairs().unwrap(), first_pairs.pairs().unwrap());
    }
}
