use crate::prelude::graphql::*;
use apollo_compiler::validation::DiagnosticList;
use apollo_compiler::validation::WithErrors;
use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Connector validation failures.
///
/// These are raised synchronously while composing, before any schema is built,
/// and are fatal: a server must not start serving requests with a
/// misconfigured connector.
#[derive(Error, Display, Debug, Clone, Eq, PartialEq)]
pub enum ConfigurationError {
    /// connector '{connector}' must provide type definitions
    MissingTypeDefs {
        /// The connector missing the capability.
        connector: String,
    },

    /// connector '{connector}' must provide resolvers
    MissingResolvers {
        /// The connector missing the capability.
        connector: String,
    },
}

/// Schema build failures, carried over unmodified from the schema collaborator.
#[derive(Error, Display, Debug)]
pub enum SchemaError {
    /// GraphQL parser error(s): {0}
    Parse(ParseErrors),
    /// GraphQL validation error(s): {0}
    Validate(ValidationErrors),
}

/// Collection of schema parse errors.
#[derive(Debug)]
pub struct ParseErrors {
    pub(crate) errors: DiagnosticList,
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut errors = self.errors.iter();
        for (i, error) in errors.by_ref().take(5).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", error)?;
        }
        let remaining = errors.count();
        if remaining > 0 {
            write!(f, "\n...and {remaining} other errors")?;
        }
        Ok(())
    }
}

impl<T> From<WithErrors<T>> for ParseErrors {
    fn from(WithErrors { errors, .. }: WithErrors<T>) -> Self {
        Self { errors }
    }
}

/// Collection of schema validation errors.
#[derive(Debug)]
pub struct ValidationErrors {
    pub(crate) errors: DiagnosticList,
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut errors = self.errors.iter();
        for (i, error) in errors.by_ref().take(5).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", error)?;
        }
        let remaining = errors.count();
        if remaining > 0 {
            write!(f, "\n...and {remaining} other errors")?;
        }
        Ok(())
    }
}

impl<T> From<WithErrors<T>> for ValidationErrors {
    fn from(WithErrors { errors, .. }: WithErrors<T>) -> Self {
        Self { errors }
    }
}

/// Any failure that can abort composition.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Any error, in the shape the graphql response format expects.
#[derive(Error, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Default)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The error message.
    pub message: String,

    /// The locations of the error from the originating request.
    pub locations: Vec<Location>,

    /// The optional graphql extensions.
    #[serde(default, skip_serializing_if = "Object::is_empty")]
    pub extensions: Object,
}

/// A location in the request that triggered a graphql error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// The line number.
    pub line: u32,

    /// The column number.
    pub column: u32,
}
