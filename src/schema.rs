use crate::prelude::graphql::*;
use apollo_compiler::ast;
use apollo_compiler::validation::Valid;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A single type-definition contribution to the composed schema.
#[derive(Clone, Debug)]
pub enum TypeDefs {
    /// A raw schema-language fragment.
    Sdl(String),
    /// A pre-parsed document.
    Document(ast::Document),
}

impl TypeDefs {
    pub(crate) fn as_sdl(&self) -> String {
        match self {
            TypeDefs::Sdl(sdl) => sdl.clone(),
            TypeDefs::Document(document) => document.to_string(),
        }
    }
}

impl From<&str> for TypeDefs {
    fn from(sdl: &str) -> Self {
        TypeDefs::Sdl(sdl.to_string())
    }
}

impl From<String> for TypeDefs {
    fn from(sdl: String) -> Self {
        TypeDefs::Sdl(sdl)
    }
}

impl From<ast::Document> for TypeDefs {
    fn from(document: ast::Document) -> Self {
        TypeDefs::Document(document)
    }
}

/// The composed executable schema.
///
/// Holds the merged raw SDL (base fragment first, then every connector's
/// fragments in registration order), the validated type system, and the merged
/// resolver registry the execution engine draws from.
pub struct ExecutableSchema {
    raw_sdl: Arc<String>,
    definitions: Valid<apollo_compiler::Schema>,
    resolvers: IndexMap<String, Resolver>,
}

impl fmt::Debug for ExecutableSchema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ExecutableSchema")
            .field("raw_sdl", &self.raw_sdl)
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}

impl ExecutableSchema {
    /// Merge the accumulated fragments and hand them to the schema
    /// collaborator. Parse and validation failures propagate unmodified.
    pub(crate) fn build(
        type_defs: &[TypeDefs],
        resolver_maps: Vec<ResolverMap>,
    ) -> Result<Self, SchemaError> {
        let raw_sdl = type_defs
            .iter()
            .map(TypeDefs::as_sdl)
            .collect::<Vec<_>>()
            .join("\n");

        let mut parser = apollo_compiler::parser::Parser::new();
        let result = parser.parse_ast(&raw_sdl, "composed.graphql");

        let recursion_limit = parser.recursion_reached();
        tracing::trace!(?recursion_limit, "recursion limit data");

        let definitions = result
            .map_err(|invalid| SchemaError::Parse(invalid.into()))?
            .to_schema_validate()
            .map_err(|errors| SchemaError::Validate(errors.into()))?;

        // Later maps overwrite earlier ones on "Type.field" collision.
        let mut resolvers = IndexMap::new();
        for map in resolver_maps {
            resolvers.extend(map);
        }

        Ok(Self {
            raw_sdl: Arc::new(raw_sdl),
            definitions,
            resolvers,
        })
    }

    pub fn raw_sdl(&self) -> &Arc<String> {
        &self.raw_sdl
    }

    pub fn definitions(&self) -> &Valid<apollo_compiler::Schema> {
        &self.definitions
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.definitions.types.contains_key(name)
    }

    pub fn resolver(&self, type_name: &str, field_name: &str) -> Option<&Resolver> {
        self.resolvers.get(&format!("{type_name}.{field_name}"))
    }

    pub fn resolver_count(&self) -> usize {
        self.resolvers.len()
    }
}
