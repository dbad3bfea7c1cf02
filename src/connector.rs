use crate::prelude::graphql::*;
use indexmap::IndexMap;
use std::sync::Arc;
use tower::BoxError;

/// A function from the context built so far to a map of additional context
/// fields. Registered by connectors and invoked once per request, in
/// connector registration order.
pub type ContextExtension = Arc<dyn Fn(&Context) -> Result<Object, BoxError> + Send + Sync>;

/// A pluggable contributor to the composed server.
///
/// Providing type definitions and resolvers is mandatory; the composer fails
/// with a [`ConfigurationError`] when either returns `None`. The context
/// extension and data sources are optional capabilities, and presence is
/// queried through the `Option` return rather than any runtime reflection.
pub trait Connector: Send + Sync + 'static {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Ordered type-definition fragments this connector contributes.
    fn type_defs(&self) -> Option<Vec<TypeDefs>> {
        None
    }

    /// Ordered resolver maps this connector contributes.
    fn resolvers(&self) -> Option<Vec<ResolverMap>> {
        None
    }

    /// Additional per-request context fields.
    fn context_extension(&self) -> Option<ContextExtension> {
        None
    }

    /// Named data sources to expose to resolvers through the context.
    fn data_sources(&self) -> Option<IndexMap<String, DataSource>> {
        None
    }
}
