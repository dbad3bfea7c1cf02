//! Composition layer for the Fronnt GraphQL server.
//!
//! An ordered list of [`Connector`]s is merged by a [`Composer`] into one
//! [`ExecutableSchema`] plus one [`RequestPipeline`]. Connectors contribute
//! type-definition fragments and resolver maps (mandatory), and optionally a
//! context extension and named data sources. Schema parsing and validation
//! are delegated to `apollo-compiler`; execution and transport live outside
//! this crate.

mod base;
mod composer;
mod connector;
mod context;
mod data_source;
mod error;
mod json_ext;
mod pipeline;
mod request;
mod resolver;
mod schema;

pub use composer::*;
pub use connector::*;
pub use context::*;
pub use data_source::*;
pub use error::*;
pub use json_ext::*;
pub use pipeline::*;
pub use request::*;
pub use resolver::*;
pub use schema::*;

pub mod prelude {
    pub mod graphql {
        pub use crate::*;
    }
}
