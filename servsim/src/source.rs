use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::info;

type ReqwestClient = reqwest::blocking::Client;

const MAX_URL_LENGTH: usize = 2083;
const MIN_URL_LENGTH: usize = 3;
const PAYLOAD_EXTENSION: &str = "json";

lazy_static! {
    static ref URL_REGEX: Regex = Regex::new(
        "^((ftp|https?)://)(\\S+(:\\S*)?@)?\
        ((([1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])(\\.(1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}(?:\\.([0-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4]))\
        |(([a-zA-Z0-9]+([-.][a-zA-Z0-9]+)*)|((www\\.)?))?\
        (([a-z\\x{00a1}-\\x{ffff}0-9]+-?-?)*[a-z\\x{00a1}-\\x{ffff}0-9]+)\
        (?:\\.([a-z\\x{00a1}-\\x{ffff}]{2,}))?))\
        (:([0-9]{1,5}))?((/|\\?|#)[^\\s]*)?$"
    )
    .unwrap();
}

/// Where a payload lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    Local(PathBuf),
}

impl Source {
    /// Anything that doesn't look like a URL is treated as a path.
    pub fn classify(uri: &str) -> Self {
        if is_url(uri) {
            Source::Remote(uri.to_string())
        } else {
            Source::Local(PathBuf::from(uri))
        }
    }
}

pub fn is_url(uri: &str) -> bool {
    if uri.is_empty()
        || uri.len() >= MAX_URL_LENGTH
        || uri.len() <= MIN_URL_LENGTH
        || uri.starts_with('.')
    {
        return false;
    }

    let (host, path) = match url::Url::parse(uri) {
        Ok(parsed) => (
            parsed.host_str().unwrap_or_default().to_string(),
            parsed.path().to_string(),
        ),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = uri.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
            (String::new(), path.to_string())
        }
        Err(_) => return false,
    };

    if host.starts_with('.') {
        return false;
    }
    if host.is_empty() && !path.is_empty() && !path.contains('.') {
        return false;
    }

    URL_REGEX.is_match(uri)
}

/// A blocking client that waits for a remote source as long as it takes.
pub fn default_http_client() -> Result<ReqwestClient> {
    // reqwest's blocking client gives up after 30 seconds unless told otherwise
    ReqwestClient::builder()
        .timeout(None)
        .build()
        .map_err(Error::Client)
}

/// Fetches the raw payload bytes behind a URI, either over HTTP or from disk.
#[derive(Debug, Clone)]
pub struct SourceResolver {
    http: ReqwestClient,
}

impl SourceResolver {
    pub fn new(http: ReqwestClient) -> Self {
        Self { http }
    }

    pub fn resolve(&self, uri: &str) -> Result<Vec<u8>> {
        let source = Source::classify(uri);
        let is_url = matches!(source, Source::Remote(_));
        info!(is_url, import_from = uri, "resolving payload source");

        match source {
            Source::Remote(url) => self.fetch(&url),
            Source::Local(path) => read_local(&path),
        }
    }

    /// Blocks until the whole body has been read, bounded only by whatever
    /// timeout the client was built with.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

        let body = response.bytes().map_err(Error::ReadBody)?;
        Ok(body.to_vec())
    }
}

pub fn read_local<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();

    if path.extension().and_then(|e| e.to_str()) != Some(PAYLOAD_EXTENSION) {
        return Err(Error::UnsupportedFormat(path.display().to_string()));
    }

    if let Err(source) = fs::metadata(path) {
        return Err(match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Stat {
                path: path.to_path_buf(),
                source,
            },
        });
    }

    Ok(fs::read(path)?)
}
