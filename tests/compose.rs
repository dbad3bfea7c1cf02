use fronnt_core::prelude::graphql::*;
use indexmap::IndexMap;
use serde_json_bytes::json;
use std::sync::Arc;
use tower::ServiceExt;

fn graphql_request(session: Option<&str>) -> http::Request<Request> {
    let mut builder = http::Request::builder().method("POST").uri("/graphql");
    if let Some(session) = session {
        builder = builder.header(SESSION_HEADER, session);
    }
    builder
        .body(Request::builder().query("{ health }".to_string()).build())
        .expect("valid request")
}

struct Users;

impl Connector for Users {
    fn name(&self) -> &'static str {
        "users"
    }

    fn type_defs(&self) -> Option<Vec<TypeDefs>> {
        Some(vec![TypeDefs::from(
            r#"
type User {
  id: ID!
  name: String!
}

extend type Query {
  user(id: ID!): User
}
"#,
        )])
    }

    fn resolvers(&self) -> Option<Vec<ResolverMap>> {
        let mut resolvers = ResolverMap::new();
        resolvers.insert(
            "Query.user".to_string(),
            Resolver::from_value(json!({"id": "1", "name": "Ada"})),
        );
        Some(vec![resolvers])
    }

    fn context_extension(&self) -> Option<ContextExtension> {
        Some(Arc::new(|_context| {
            let mut fields = Object::new();
            fields.insert("tenant", json!("users"));
            fields.insert("usersReady", json!(true));
            Ok(fields)
        }))
    }

    fn data_sources(&self) -> Option<IndexMap<String, DataSource>> {
        let mut sources = IndexMap::new();
        sources.insert(
            "store".to_string(),
            Arc::new("users-store".to_string()) as DataSource,
        );
        Some(sources)
    }
}

struct Reviews;

impl Connector for Reviews {
    fn name(&self) -> &'static str {
        "reviews"
    }

    fn type_defs(&self) -> Option<Vec<TypeDefs>> {
        Some(vec![TypeDefs::from(
            r#"
type Review {
  id: ID!
  body: String!
}

extend type Query {
  reviews: [Review!]!
}
"#,
        )])
    }

    fn resolvers(&self) -> Option<Vec<ResolverMap>> {
        let mut resolvers = ResolverMap::new();
        resolvers.insert(
            "Query.reviews".to_string(),
            Resolver::from_value(json!([{"id": "10", "body": "great"}])),
        );
        Some(vec![resolvers])
    }

    fn context_extension(&self) -> Option<ContextExtension> {
        Some(Arc::new(|context| {
            // Extensions all receive the stage-B context, so another
            // extension's output is never visible here.
            let ready: Option<bool> = context.get("usersReady")?;
            let mut fields = Object::new();
            fields.insert("tenant", json!("reviews"));
            fields.insert("sawUsers", json!(ready == Some(true)));
            Ok(fields)
        }))
    }

    fn data_sources(&self) -> Option<IndexMap<String, DataSource>> {
        let mut sources = IndexMap::new();
        sources.insert(
            "store".to_string(),
            Arc::new("reviews-store".to_string()) as DataSource,
        );
        Some(sources)
    }
}

struct NoTypeDefs;

impl Connector for NoTypeDefs {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn resolvers(&self) -> Option<Vec<ResolverMap>> {
        Some(Vec::new())
    }
}

struct NoResolvers;

impl Connector for NoResolvers {
    fn name(&self) -> &'static str {
        "half-baked"
    }

    fn type_defs(&self) -> Option<Vec<TypeDefs>> {
        Some(vec![TypeDefs::from("extend type Query { nothing: String }")])
    }
}

struct FailingExtension;

impl Connector for FailingExtension {
    fn name(&self) -> &'static str {
        "failing-extension"
    }

    fn type_defs(&self) -> Option<Vec<TypeDefs>> {
        Some(vec![TypeDefs::from("extend type Query { broken: String }")])
    }

    fn resolvers(&self) -> Option<Vec<ResolverMap>> {
        Some(Vec::new())
    }

    fn context_extension(&self) -> Option<ContextExtension> {
        Some(Arc::new(|_context| Err("extension blew up".into())))
    }
}

struct RedefinesQuery;

impl Connector for RedefinesQuery {
    fn type_defs(&self) -> Option<Vec<TypeDefs>> {
        Some(vec![TypeDefs::from("type Query { health: String! }")])
    }

    fn resolvers(&self) -> Option<Vec<ResolverMap>> {
        Some(Vec::new())
    }
}

#[test_log::test]
fn composing_zero_connectors_yields_the_base_schema() {
    let pipeline = Composer::new().compose().expect("composes");

    let schema = pipeline.schema();
    assert!(schema.has_type("Query"));
    assert!(schema.raw_sdl().contains("health"));
    assert_eq!(schema.resolver_count(), 1);
    assert!(schema.resolver("Query", "health").is_some());
    assert!(pipeline.data_sources().is_empty());

    let context = pipeline
        .context_for(&graphql_request(None))
        .expect("builds context");
    assert!(context.schema().is_some());
    assert!(context.session_id().is_none());
    assert_eq!(
        context.get::<_, Value>("sessionId").unwrap(),
        Some(Value::Null)
    );
}

#[test_log::test]
fn contributions_merge_in_registration_order() {
    let pipeline = Composer::new()
        .with_connector(Users)
        .with_connector(Reviews)
        .compose()
        .expect("composes");

    let schema = pipeline.schema();
    assert!(schema.has_type("User"));
    assert!(schema.has_type("Review"));
    assert!(schema.resolver("Query", "user").is_some());
    assert!(schema.resolver("Query", "reviews").is_some());

    let sdl = schema.raw_sdl();
    let base = sdl.find("health").expect("base fragment present");
    let users = sdl.find("type User").expect("users fragment present");
    let reviews = sdl.find("type Review").expect("reviews fragment present");
    assert!(base < users);
    assert!(users < reviews);
}

#[test_log::test]
fn missing_type_defs_aborts_composition() {
    let err = Composer::new()
        .with_connector(NoTypeDefs)
        .compose()
        .expect_err("must not compose");
    assert!(matches!(
        err,
        ComposeError::Configuration(ConfigurationError::MissingTypeDefs { ref connector })
            if connector == "broken"
    ));
}

#[test_log::test]
fn missing_resolvers_aborts_composition() {
    let err = Composer::new()
        .with_connector(NoResolvers)
        .compose()
        .expect_err("must not compose");
    assert!(matches!(
        err,
        ComposeError::Configuration(ConfigurationError::MissingResolvers { ref connector })
            if connector == "half-baked"
    ));
}

#[test_log::test]
fn capability_checks_run_before_any_valid_connector_is_built_into_a_schema() {
    // The misconfigured connector is registered last and still aborts compose.
    let err = Composer::new()
        .with_connector(Users)
        .with_connector(NoTypeDefs)
        .compose()
        .expect_err("must not compose");
    assert!(matches!(err, ComposeError::Configuration(_)));
}

#[test_log::test]
fn schema_conflicts_propagate_from_the_schema_builder() {
    let err = Composer::new()
        .with_connector(RedefinesQuery)
        .compose()
        .expect_err("must not compose");
    assert!(matches!(err, ComposeError::Schema(_)));
}

#[test_log::test]
fn later_data_sources_win_on_name_collision() {
    let pipeline = Composer::new()
        .with_connector(Users)
        .with_connector(Reviews)
        .compose()
        .expect("composes");

    assert_eq!(pipeline.data_sources().len(), 1);
    assert_eq!(
        pipeline.data_sources().get_as::<String>("store").as_deref(),
        Some(&"reviews-store".to_string())
    );
}

#[test_log::test]
fn later_context_extensions_win_on_key_collision() {
    let pipeline = Composer::new()
        .with_connector(Users)
        .with_connector(Reviews)
        .compose()
        .expect("composes");

    let context = pipeline
        .context_for(&graphql_request(None))
        .expect("builds context");
    assert_eq!(context.get("tenant").unwrap(), Some("reviews".to_string()));
}

#[test_log::test]
fn context_extensions_do_not_observe_each_others_outputs() {
    let pipeline = Composer::new()
        .with_connector(Users)
        .with_connector(Reviews)
        .compose()
        .expect("composes");

    // Users writes `usersReady` and Reviews reads it, but both extensions run
    // against the pre-extension context, so Reviews never sees it.
    let context = pipeline
        .context_for(&graphql_request(None))
        .expect("builds context");
    assert_eq!(context.get("usersReady").unwrap(), Some(true));
    assert_eq!(context.get("sawUsers").unwrap(), Some(false));
}

#[test_log::test]
fn failing_context_extensions_abort_the_context_build() {
    let pipeline = Composer::new()
        .with_connector(FailingExtension)
        .compose()
        .expect("composes");

    let err = pipeline
        .context_for(&graphql_request(None))
        .expect_err("must not build a context");
    assert_eq!(err.to_string(), "extension blew up");
}

#[test_log::test]
fn session_header_becomes_the_session_id() {
    let pipeline = Composer::new().compose().expect("composes");

    let context = pipeline
        .context_for(&graphql_request(Some("abc123")))
        .expect("builds context");
    assert_eq!(context.session_id(), Some("abc123"));

    let context = pipeline
        .context_for(&graphql_request(None))
        .expect("builds context");
    assert_eq!(context.session_id(), None);

    let context = pipeline
        .context_for(&graphql_request(Some("")))
        .expect("builds context");
    assert_eq!(context.session_id(), None);
    assert_eq!(
        context.get::<_, Value>("sessionId").unwrap(),
        Some(Value::Null)
    );
}

#[test_log::test]
fn request_context_exposes_data_sources_to_resolvers() {
    let pipeline = Composer::new()
        .with_connector(Users)
        .compose()
        .expect("composes");

    let context = pipeline
        .context_for(&graphql_request(None))
        .expect("builds context");
    assert_eq!(
        context.data_sources().get_as::<String>("store").as_deref(),
        Some(&"users-store".to_string())
    );
}

#[test_log::test(tokio::test)]
async fn pipeline_is_a_tower_service() {
    let pipeline = Composer::new()
        .with_connector(Users)
        .compose()
        .expect("composes");

    let context = pipeline
        .clone()
        .oneshot(graphql_request(Some("abc123")))
        .await
        .expect("builds context");
    assert_eq!(context.session_id(), Some("abc123"));
    assert!(context.schema().is_some());
}

#[test_log::test(tokio::test)]
async fn contributed_resolvers_run_against_the_built_context() {
    let pipeline = Composer::new()
        .with_connector(Users)
        .compose()
        .expect("composes");

    let context = pipeline
        .context_for(&graphql_request(None))
        .expect("builds context");
    let resolver = pipeline
        .schema()
        .resolver("Query", "user")
        .expect("registered")
        .clone();
    let resolved = resolver
        .resolve(context, Object::new())
        .await
        .expect("resolves");
    assert_eq!(resolved, json!({"id": "1", "name": "Ada"}));
}
