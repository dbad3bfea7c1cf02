use crate::prelude::graphql::*;
use http::HeaderMap;
use std::fmt;
use std::future::Ready;
use std::sync::Arc;
use std::task::Poll;
use tower::{BoxError, Service};

/// Name of the inbound header carrying the session identifier.
pub const SESSION_HEADER: &str = "x-fronnt-session";

/// Context entry under which the session identifier is attached.
pub const SESSION_ID_CONTEXT_KEY: &str = "sessionId";

/// The composed request pipeline.
///
/// Produced once by [`Composer::compose`] and then used for every request:
/// [`RequestPipeline::context_for`] builds the per-request [`Context`] through
/// four ordered stages. The pipeline is also a [`tower::Service`] so it slots
/// into the surrounding service stack.
#[derive(Clone)]
pub struct RequestPipeline {
    schema: Arc<ExecutableSchema>,
    data_sources: Arc<DataSourceRegistry>,
    context_extensions: Vec<ContextExtension>,
}

impl fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RequestPipeline")
            .field("schema", &self.schema)
            .field("data_sources", &self.data_sources)
            .field("context_extensions", &self.context_extensions.len())
            .finish()
    }
}

impl RequestPipeline {
    pub(crate) fn new(
        schema: Arc<ExecutableSchema>,
        data_sources: Arc<DataSourceRegistry>,
        context_extensions: Vec<ContextExtension>,
    ) -> Self {
        Self {
            schema,
            data_sources,
            context_extensions,
        }
    }

    pub fn schema(&self) -> &Arc<ExecutableSchema> {
        &self.schema
    }

    pub fn data_sources(&self) -> &Arc<DataSourceRegistry> {
        &self.data_sources
    }

    /// Build the context for one request.
    ///
    /// Stages, in order: attach the active schema, attach the data-source
    /// registry, run each registered context extension, then derive the
    /// session identifier from the request headers. Every extension receives
    /// the same stage-B context; their outputs accumulate separately and are
    /// merged once after all of them ran, later keys overwriting earlier
    /// ones. Extension failures propagate unmodified.
    pub fn context_for<B>(&self, request: &http::Request<B>) -> Result<Context, BoxError> {
        let context = Context::new()
            .with_schema(Arc::clone(&self.schema))
            .with_data_sources(Arc::clone(&self.data_sources));

        let mut extensions = Object::new();
        for extension in &self.context_extensions {
            for (key, value) in extension(&context)? {
                extensions.insert(key, value);
            }
        }
        let context = context.extend(extensions);

        context.with_value(SESSION_ID_CONTEXT_KEY, session_id(request.headers()))
    }
}

/// First header value wins; an empty value or one that is not visible ASCII
/// is treated as an absent header.
fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl Service<http::Request<Request>> for RequestPipeline {
    type Response = Context;
    type Error = BoxError;
    type Future = Ready<Result<Context, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), BoxError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<Request>) -> Self::Future {
        std::future::ready(self.context_for(&req))
    }
}
