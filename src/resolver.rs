use crate::prelude::graphql::*;
use futures::future::BoxFuture;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tower::BoxError;

/// The future a resolver evaluates to.
pub type ResolverFuture = BoxFuture<'static, Result<Value, BoxError>>;

/// An opaque field resolver value.
///
/// Resolvers are contributed by connectors and only carried here; evaluation
/// belongs to the execution engine. A resolver is an async function from the
/// per-request [`Context`] and the coerced field arguments to a json value.
#[derive(Clone)]
pub struct Resolver(Arc<dyn Fn(Context, Object) -> ResolverFuture + Send + Sync>);

impl Resolver {
    pub fn new(
        resolve: impl Fn(Context, Object) -> ResolverFuture + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(resolve))
    }

    /// A resolver that always yields the same value.
    pub fn from_value(value: Value) -> Self {
        Self::new(move |_context, _arguments| {
            let value = value.clone();
            Box::pin(async move { Ok(value) })
        })
    }

    pub fn resolve(&self, context: Context, arguments: Object) -> ResolverFuture {
        (self.0)(context, arguments)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Resolver")
    }
}

/// One connector's resolver contribution: `"Type.field"` to resolver,
/// insertion ordered.
pub type ResolverMap = IndexMap<String, Resolver>;
