use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A named external dependency (e.g. a backing service client) exposed to
/// resolvers through the context. Opaque to this layer.
pub type DataSource = Arc<dyn Any + Send + Sync>;

/// Registry of named data sources.
///
/// Built once at composition time by overlaying each connector's contribution
/// in registration order; read-only for the rest of the process lifetime.
#[derive(Clone, Default)]
pub struct DataSourceRegistry {
    sources: IndexMap<String, DataSource>,
}

impl fmt::Debug for DataSourceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug = f.debug_tuple("DataSourceRegistry");
        for name in self.sources.keys() {
            debug.field(name);
        }
        debug.finish()
    }
}

impl DataSourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Default::default(),
        }
    }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            sources: IndexMap::with_capacity(size),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, source: DataSource) {
        self.sources.insert(name.into(), source);
    }

    /// Overlay a connector's contribution; later entries silently overwrite
    /// earlier ones of the same name.
    pub(crate) fn overlay(&mut self, sources: IndexMap<String, DataSource>) {
        for (name, source) in sources {
            if self.sources.insert(name.clone(), source).is_some() {
                tracing::debug!(%name, "data source overridden");
            }
        }
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&DataSource> {
        self.sources.get(name.as_ref())
    }

    /// Typed retrieval by downcast.
    pub fn get_as<T: Any + Send + Sync>(&self, name: impl AsRef<str>) -> Option<Arc<T>> {
        self.get(name)
            .cloned()
            .and_then(|source| source.downcast::<T>().ok())
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.sources.contains_key(name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}
