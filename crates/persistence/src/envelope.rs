//! Resource envelope stamping.
//!
//! Every write goes through [`stamp`], which validates the payload against
//! its target collection and writes the store-controlled fields: `id`,
//! `meta.versionId` and `meta.lastUpdated`. Any other `meta` fields supplied
//! by the caller (profiles, tags, ...) are carried through untouched.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::error::{StorageResult, ValidationError};
use crate::types::stored_resource::format_instant;
use crate::types::{ResourceType, StoredResource};

/// Longest logical id accepted by the store.
pub const MAX_ID_LENGTH: usize = 64;

/// Stamps a payload for storage under `target`.
///
/// With no `prior` record the result is version 1 and keeps the payload's
/// `id` (or a freshly generated one). With a `prior` record the result keeps
/// the prior id, whatever the payload says, and is `prior.version() + 1`.
/// The payload is replaced wholesale; nothing from the prior content other
/// than the id survives.
///
/// # Errors
///
/// * `ValidationError::TypeMismatch` - `resourceType` is absent or differs from `target`
/// * `ValidationError::InvalidResource` - the payload is not an object, or
///   carries a malformed `meta`, or (creates only) a malformed `id`. On
///   update the payload `id` is replaced by the prior id and never checked.
pub fn stamp(
    target: ResourceType,
    payload: Value,
    prior: Option<&StoredResource>,
) -> StorageResult<StoredResource> {
    let mut object = validate(target, payload, prior.is_none())?;

    let id = match prior {
        Some(prior) => prior.id().to_string(),
        None => object
            .get("id")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
    };
    let version = prior.map_or(1, |p| p.version() + 1);
    let now = Utc::now();

    let mut meta = match object.remove("meta") {
        Some(Value::Object(meta)) => meta,
        _ => Map::new(),
    };
    meta.insert("versionId".to_string(), Value::String(version.to_string()));
    meta.insert("lastUpdated".to_string(), Value::String(format_instant(now)));

    object.insert("id".to_string(), Value::String(id.clone()));
    object.insert("meta".to_string(), Value::Object(meta));

    Ok(StoredResource::from_parts(
        target,
        id,
        version,
        now,
        Value::Object(object),
    ))
}

/// Checks a payload against the collection it is about to be stored in.
fn validate(
    target: ResourceType,
    payload: Value,
    check_id: bool,
) -> StorageResult<Map<String, Value>> {
    let Value::Object(object) = payload else {
        return Err(ValidationError::InvalidResource {
            message: "resource must be a JSON object".to_string(),
        }
        .into());
    };

    match object.get("resourceType").and_then(Value::as_str) {
        Some(declared) if declared == target.as_str() => {}
        declared => {
            return Err(ValidationError::TypeMismatch {
                expected: target,
                found: declared.map(String::from),
            }
            .into());
        }
    }

    match object.get("id").filter(|_| check_id) {
        None => {}
        Some(Value::String(id)) if is_valid_id(id) => {}
        Some(other) => {
            return Err(ValidationError::InvalidResource {
                message: format!("invalid resource id: {}", other),
            }
            .into());
        }
    }

    match object.get("meta") {
        None | Some(Value::Object(_)) => {}
        Some(_) => {
            return Err(ValidationError::InvalidResource {
                message: "meta must be a JSON object".to_string(),
            }
            .into());
        }
    }

    Ok(object)
}

/// Returns `true` if `id` is a well-formed logical id: 1-64 characters
/// drawn from ASCII letters, digits, `-` and `.`.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LENGTH
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}
