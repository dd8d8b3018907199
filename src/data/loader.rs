use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::aggregate::MutationData;
use super::model::{records_from_value, MutationEnvelope, MutationPayload, MutationRecord};

/// 100 most recent GBM-US mutations from the ICGC data portal.
pub const DEFAULT_SOURCE_URL: &str = "https://dcc.icgc.org/api/v1/projects/GBM-US/mutations?field=id,mutation,type,chromosome,start,end&size=100&order=desc";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },
    #[error("expected a JSON object with `hits` or a JSON array of records, got {0}")]
    UnexpectedShape(&'static str),
    #[error("table is missing the '{0}' column")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where mutation records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    /// Interpret a command-line argument: `http(s)://` is a URL, anything
    /// else a local path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            DataSource::Url(arg.to_string())
        } else {
            DataSource::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Url(url) => url.clone(),
            DataSource::File(path) => path.display().to_string(),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

pub fn load(source: &DataSource) -> Result<MutationData> {
    match source {
        DataSource::Url(url) => fetch_url(url),
        DataSource::File(path) => load_file(path),
    }
}

/// Fetch a mutation payload over HTTP (blocking).
pub fn fetch_url(url: &str) -> Result<MutationData> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("building HTTP client")?;
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("requesting {url}"))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    let body = resp.text().context("reading response body")?;
    let payload = parse_payload(&body)?;
    Ok(MutationData::from(payload))
}

/// Load mutation records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – API envelope `{ "hits": [...] }` or a bare array of records
/// * `.csv` / `.tsv` – header row with at least `chromosome` and `type`
pub fn load_file(path: &Path) -> Result<MutationData> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_delimited(path, b','),
        "tsv" => load_delimited(path, b'\t'),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Decide between the envelope and bare-list shapes by the JSON root kind.
pub fn parse_payload(text: &str) -> Result<MutationPayload> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    match root {
        JsonValue::Object(_) => {
            let envelope: MutationEnvelope =
                serde_json::from_value(root).context("decoding mutation envelope")?;
            Ok(MutationPayload::Envelope(envelope))
        }
        JsonValue::Array(_) => Ok(MutationPayload::Records(records_from_value(root))),
        JsonValue::Null => Err(LoadError::UnexpectedShape("null").into()),
        JsonValue::Bool(_) => Err(LoadError::UnexpectedShape("a boolean").into()),
        JsonValue::Number(_) => Err(LoadError::UnexpectedShape("a number").into()),
        JsonValue::String(_) => Err(LoadError::UnexpectedShape("a string").into()),
    }
}

fn load_json(path: &Path) -> Result<MutationData> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let payload = parse_payload(&text)?;
    Ok(MutationData::from(payload))
}

// ---------------------------------------------------------------------------
// CSV / TSV
// ---------------------------------------------------------------------------

/// One table row.  `study` holds semicolon-separated study names.  Positions
/// are read as text so an unparsable value becomes `None` instead of failing
/// the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TableRow {
    id: String,
    chromosome: String,
    #[serde(rename = "type")]
    mutation_type: String,
    mutation: String,
    start: String,
    end: String,
    study: String,
}

impl From<TableRow> for MutationRecord {
    fn from(row: TableRow) -> Self {
        let study = row
            .study
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        MutationRecord {
            id: row.id,
            chromosome: row.chromosome,
            mutation_type: row.mutation_type,
            mutation: row.mutation,
            start: row.start.parse().ok(),
            end: row.end.parse().ok(),
            study,
        }
    }
}

fn load_delimited(path: &Path, delimiter: u8) -> Result<MutationData> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening table")?;

    let headers = reader.headers().context("reading table headers")?.clone();
    for required in ["chromosome", "type"] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<TableRow>().enumerate() {
        let row = result.with_context(|| format!("table row {row_no}"))?;
        records.push(MutationRecord::from(row));
    }

    Ok(MutationData::from_records(records))
}
