//! Placeholder resolution.
//!
//! Configuration strings may embed one `${<artifact>::<file>[::<field>]}`
//! placeholder. Resolving it fetches `<file>` out of the named input
//! artifact's zip archive and substitutes its content — the whole file as
//! UTF-8 text, or, when a field is named, one value out of the file decoded
//! as a JSON object.
//!
//! Only the first placeholder in a string is resolved; any later
//! placeholder-like text is left as-is. A string with no placeholder
//! resolves to itself.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::archive::fetch_member;
use crate::artifact::input_artifact_location;
use crate::error::{RelayError, RelayResult};
use crate::job::Job;
use crate::store::ObjectStore;

// Artifact and file names exclude `:` and `}`; the optional field name only
// excludes `}` and may contain `:`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^:}]+)::([^:}]+)(?:::([^}]+))?\}").expect("placeholder pattern")
});

/// Resolve the first placeholder in `template`, if any, against the job's
/// input artifacts.
pub async fn resolve_object_key(
    store: &dyn ObjectStore,
    template: &str,
    job: &Job,
) -> RelayResult<String> {
    let Some(captures) = PLACEHOLDER.captures(template) else {
        return Ok(template.to_string());
    };

    let matched = captures.get(0).expect("whole match");
    let artifact_name = &captures[1];
    let file_name = &captures[2];
    let field_name = captures.get(3).map(|m| m.as_str());

    debug!(
        artifact = artifact_name,
        file = file_name,
        field = field_name,
        "resolving placeholder"
    );

    let location = input_artifact_location(artifact_name, job).ok_or_else(|| {
        RelayError::UnresolvedArtifact {
            name: artifact_name.to_string(),
        }
    })?;
    let bytes = fetch_member(store, &location, file_name).await?;

    let replacement = match field_name {
        None => String::from_utf8(bytes).map_err(|_| RelayError::BadEncoding {
            file: file_name.to_string(),
        })?,
        Some(field) => {
            let document: Value =
                serde_json::from_slice(&bytes).map_err(|err| RelayError::BadDocument {
                    file: file_name.to_string(),
                    message: err.to_string(),
                })?;
            field_value(&document, field, file_name)?
        },
    };

    let mut resolved = String::with_capacity(template.len() + replacement.len());
    resolved.push_str(&template[..matched.start()]);
    resolved.push_str(&replacement);
    resolved.push_str(&template[matched.end()..]);
    Ok(resolved)
}

// A field that is absent or holds a falsy value is treated as missing.
// That folds legitimate `0` / `""` / `false` values into the error path;
// kept until the pipeline contract says otherwise.
fn field_value(document: &Value, field: &str, file_name: &str) -> RelayResult<String> {
    let value = document.get(field).filter(|value| !is_falsy(value));
    match value {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(RelayError::MissingField {
            field: field.to_string(),
            file: file_name.to_string(),
        }),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
