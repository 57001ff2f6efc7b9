// src/dataset.rs
//
// Read-only member dataset. Loaded once at startup from a DataSource and
// handed around as a cheap, immutable handle.

use std::{fs, io, sync::Arc};

use serde_json::Value;
use thiserror::Error;

use crate::config::consts::HEADER_SENTINEL;
use crate::config::options::DataSource;
use crate::core::net;
use crate::record::{field, Record};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("HTTP error! status: {status}")]
    Http { status: String },
    #[error("malformed HTTP response")]
    MalformedResponse,
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unexpected dataset shape: {0}")]
    Shape(String),
}

/// Immutable record set. Clones share the same storage.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records: records.into() }
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn get(&self, ix: usize) -> Option<&Record> { self.records.get(ix) }
}

/// Read the dataset from its source and normalize it.
pub fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    let res = read_source(source).and_then(|text| parse(&text));
    match &res {
        Ok(ds) => logf!("Data: Loaded {} record(s) from {}", ds.len(), source.describe()),
        Err(e) => loge!("Data: Load failed from {}: {}", source.describe(), e),
    }
    res
}

fn read_source(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => Ok(fs::read_to_string(path)?),
        DataSource::Http { host, port, path } => net::http_get(host, *port, path),
    }
}

/// Parse a JSON array of member objects, dropping a leading header row.
pub fn parse(text: &str) -> Result<Dataset, LoadError> {
    let raw: Value = serde_json::from_str(text)?;
    let Value::Array(entries) = raw else {
        return Err(LoadError::Shape(s!("top level is not an array")));
    };

    let mut records = Vec::with_capacity(entries.len());
    for (ix, entry) in entries.into_iter().enumerate() {
        match entry {
            Value::Object(map) => records.push(Record::from_map(map)),
            other => {
                return Err(LoadError::Shape(format!(
                    "entry {} is not an object ({})",
                    ix,
                    kind_of(&other)
                )));
            }
        }
    }

    if records.first().is_some_and(is_header_row) {
        logd!("Data: Dropping header row");
        records.remove(0);
    }

    Ok(Dataset::new(records))
}

fn is_header_row(rec: &Record) -> bool {
    rec.text(field::NAME) == Some(HEADER_SENTINEL)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
