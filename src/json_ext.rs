//! Shared json aliases over `serde_json_bytes`.

use serde_json_bytes::Map;

pub use serde_json_bytes::ByteString;
pub use serde_json_bytes::Value;

/// A json object, insertion ordered.
pub type Object = Map<ByteString, Value>;
