use crate::base;
use crate::prelude::graphql::*;
use std::fmt;
use std::sync::Arc;

/// Assembles one executable schema and one request pipeline from an ordered
/// list of connectors.
///
/// Composition runs once, synchronously, at startup. Registration order is
/// preserved exactly: the base fragments come first, then each connector's
/// contributions in the order the connectors were added.
#[derive(Default)]
pub struct Composer {
    connectors: Vec<Box<dyn Connector>>,
}

impl fmt::Debug for Composer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut debug = f.debug_tuple("Composer");
        for connector in &self.connectors {
            debug.field(&connector.name());
        }
        debug.finish()
    }
}

impl Composer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_connector(mut self, connector: impl Connector) -> Self {
        self.connectors.push(Box::new(connector));
        self
    }

    /// Merge every connector's contributions and build the pipeline.
    ///
    /// A connector missing one of the two mandatory capabilities aborts
    /// composition with a [`ConfigurationError`] before any schema is built.
    /// Schema build failures propagate unmodified as [`SchemaError`].
    pub fn compose(self) -> Result<RequestPipeline, ComposeError> {
        let mut type_defs = vec![base::base_type_defs()];
        let mut resolver_maps = vec![base::base_resolvers()];
        let mut data_sources = DataSourceRegistry::with_capacity(self.connectors.len());
        let mut context_extensions = Vec::new();

        for connector in &self.connectors {
            let name = connector.name();
            let defs = connector
                .type_defs()
                .ok_or_else(|| ConfigurationError::MissingTypeDefs {
                    connector: name.to_string(),
                })?;
            let resolvers = connector
                .resolvers()
                .ok_or_else(|| ConfigurationError::MissingResolvers {
                    connector: name.to_string(),
                })?;

            tracing::debug!(
                connector = name,
                type_defs = defs.len(),
                resolvers = resolvers.len(),
                "registering connector"
            );
            type_defs.extend(defs);
            resolver_maps.extend(resolvers);

            if let Some(extension) = connector.context_extension() {
                context_extensions.push(extension);
            }
            if let Some(sources) = connector.data_sources() {
                data_sources.overlay(sources);
            }
        }

        let schema = ExecutableSchema::build(&type_defs, resolver_maps)?;
        tracing::debug!(
            connectors = self.connectors.len(),
            resolvers = schema.resolver_count(),
            data_sources = data_sources.len(),
            "composed schema"
        );

        Ok(RequestPipeline::new(
            Arc::new(schema),
            Arc::new(data_sources),
            context_extensions,
        ))
    }
}
