//! Built-in base schema every composed server starts from. Connectors extend
//! the root types with their own fields.

use crate::prelude::graphql::*;
use serde_json_bytes::json;

const BASE_TYPE_DEFS: &str = r#"
"The composed Fronnt graph."
type Query {
  "Liveness field, always resolvable."
  health: String!
}
"#;

pub(crate) fn base_type_defs() -> TypeDefs {
    TypeDefs::Sdl(BASE_TYPE_DEFS.to_string())
}

pub(crate) fn base_resolvers() -> ResolverMap {
    let mut resolvers = ResolverMap::new();
    resolvers.insert("Query.health".to_string(), Resolver::from_value(json!("ok")));
    resolvers
}
