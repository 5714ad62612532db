use crate::error::{Result, VoucherError};
use crate::models::AirportRecord;
use arc_swap::ArcSwap;
use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/mwgg/Airports/master/airports.json";

/// Airports keyed by code, in dataset order
pub type AirportMap = IndexMap<String, AirportRecord>;

/// Where the airport dataset is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirportSource {
    Remote(String),
    File(PathBuf),
}

impl AirportSource {
    /// `http(s)://` locations are fetched, anything else is a local path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            AirportSource::Remote(location.to_string())
        } else {
            AirportSource::File(PathBuf::from(location))
        }
    }
}

impl Default for AirportSource {
    fn default() -> Self {
        AirportSource::Remote(DEFAULT_DATASET_URL.to_string())
    }
}

/// Dataset value; extra fields such as coordinates are ignored
#[derive(Debug, Deserialize)]
struct DatasetEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    country: String,
}

/// HTTP client used for the dataset fetch
pub fn http_client() -> anyhow::Result<Client> {
    use anyhow::Context;

    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("travel-voucher/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")
}

/// In-memory airport lookup shared by the autocomplete fields.
///
/// Starts empty and is filled by a single [`AirportDirectory::load`]. Readers
/// always see a complete snapshot: either the previous mapping or the newly
/// loaded one, never a partial load.
pub struct AirportDirectory {
    airports: ArcSwap<AirportMap>,
}

impl Default for AirportDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl AirportDirectory {
    pub fn new() -> Self {
        Self {
            airports: ArcSwap::from_pointee(AirportMap::new()),
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = AirportRecord>) -> Self {
        let directory = Self::new();
        directory.replace(
            records
                .into_iter()
                .map(|record| (record.code.clone(), record))
                .collect(),
        );
        directory
    }

    /// Current mapping; empty until a load succeeds
    pub fn snapshot(&self) -> Arc<AirportMap> {
        self.airports.load_full()
    }

    pub fn lookup(&self, code: &str) -> Option<AirportRecord> {
        self.airports.load().get(code).cloned()
    }

    pub fn len(&self) -> usize {
        self.airports.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.load().is_empty()
    }

    pub fn replace(&self, airports: AirportMap) {
        self.airports.store(Arc::new(airports));
    }

    /// Fetch the whole dataset once and swap it in.
    ///
    /// On any failure the directory is left empty and
    /// [`VoucherError::DatasetUnavailable`] is returned; callers keep running
    /// without suggestions. No retry is attempted.
    pub async fn load(&self, client: &Client, source: &AirportSource) -> Result<usize> {
        match fetch(client, source).await {
            Ok(airports) => {
                let count = airports.len();
                self.replace(airports);
                info!("✈️  Loaded {} airports", count);
                Ok(count)
            }
            Err(err) => {
                self.replace(AirportMap::new());
                warn!("Airport dataset unavailable: {}", err);
                Err(err)
            }
        }
    }
}

async fn fetch(client: &Client, source: &AirportSource) -> Result<AirportMap> {
    let bytes = match source {
        AirportSource::Remote(url) => {
            debug!("Fetching airport dataset from {}", url);
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| VoucherError::DatasetUnavailable(e.to_string()))?;

            if !response.status().is_success() {
                return Err(VoucherError::DatasetUnavailable(format!(
                    "{} returned status {}",
                    url,
                    response.status()
                )));
            }

            response
                .bytes()
                .await
                .map_err(|e| VoucherError::DatasetUnavailable(e.to_string()))?
                .to_vec()
        }
        AirportSource::File(path) => {
            debug!("Reading airport dataset from {}", path.display());
            tokio::fs::read(path).await.map_err(|e| {
                VoucherError::DatasetUnavailable(format!("{}: {}", path.display(), e))
            })?
        }
    };

    debug!("Downloaded {} bytes of airport data", bytes.len());
    parse_dataset(&bytes)
}

fn parse_dataset(bytes: &[u8]) -> Result<AirportMap> {
    let entries: IndexMap<String, DatasetEntry> = serde_json::from_slice(bytes)
        .map_err(|e| VoucherError::DatasetUnavailable(format!("invalid dataset: {e}")))?;

    Ok(entries
        .into_iter()
        .map(|(code, entry)| {
            let record = AirportRecord {
                code: code.clone(),
                name: entry.name,
                city: entry.city,
                country: entry.country,
            };
            (code, record)
        })
        .collect())
}
