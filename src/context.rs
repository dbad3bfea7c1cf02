//! Provide a [`Context`] for per-request resolver execution.
//!
//! The context is an explicit accumulator: every update consumes the previous
//! value and returns a new, extended one, so ordering guarantees never depend
//! on in-place mutation. Cloning is cheap; a fresh context is built for each
//! request and nothing is shared mutably between requests.

use crate::prelude::graphql::*;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tower::BoxError;

#[derive(Clone, Debug, Default)]
pub struct Context {
    schema: Option<Arc<ExecutableSchema>>,
    data_sources: Arc<DataSourceRegistry>,
    entries: Arc<IndexMap<String, Value>>,
}

impl Context {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get<K, V>(&self, key: K) -> Result<Option<V>, BoxError>
    where
        K: AsRef<str>,
        V: for<'de> serde::Deserialize<'de>,
    {
        self.entries
            .get(key.as_ref())
            .map(|v| serde_json_bytes::from_value(v.clone()))
            .transpose()
            .map_err(|e| e.into())
    }

    /// Return a context extended with one entry; an existing entry of the
    /// same key is overwritten.
    pub fn with_value<K, V>(self, key: K, value: V) -> Result<Self, BoxError>
    where
        K: Into<String>,
        V: Serialize,
    {
        let value = serde_json_bytes::to_value(value)?;
        Ok(self.with_entry(key.into(), value))
    }

    pub(crate) fn with_entry(mut self, key: String, value: Value) -> Self {
        Arc::make_mut(&mut self.entries).insert(key, value);
        self
    }

    /// Return a context extended with a map of fields, in the map's order;
    /// later fields overwrite existing entries of the same key.
    pub fn extend(mut self, fields: Object) -> Self {
        let entries = Arc::make_mut(&mut self.entries);
        for (key, value) in fields {
            entries.insert(key.as_str().to_string(), value);
        }
        self
    }

    pub(crate) fn with_schema(mut self, schema: Arc<ExecutableSchema>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// The active schema for execution, once stage A has run.
    pub fn schema(&self) -> Option<&Arc<ExecutableSchema>> {
        self.schema.as_ref()
    }

    pub(crate) fn with_data_sources(mut self, data_sources: Arc<DataSourceRegistry>) -> Self {
        self.data_sources = data_sources;
        self
    }

    pub fn data_sources(&self) -> &DataSourceRegistry {
        &self.data_sources
    }

    /// The session identifier derived from the request, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.entries
            .get(crate::SESSION_ID_CONTEXT_KEY)
            .and_then(Value::as_str)
    }
}
