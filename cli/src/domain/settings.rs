//! Docker Desktop settings snapshot.
//!
//! The daemon owns the settings document; clutch only reads it whole,
//! flips individual flags in memory, and hands the whole document back.

use serde_json::{Map, Value};

use crate::domain::error::ClusterError;

/// Flag that turns the Docker Desktop Kubernetes cluster on or off.
pub const KUBERNETES_ENABLED: &str = "kubernetesEnabled";

/// Dotted paths used by older settings schemas for the same flag.
const LEGACY_ALIASES: &[(&str, &str)] = &[(KUBERNETES_ENABLED, "vm.kubernetes.enabled")];

/// Full settings document as returned by one read from the daemon.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSnapshot(Map<String, Value>);

impl SettingsSnapshot {
    /// Wrap a settings document. Anything other than a JSON object is rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, ClusterError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ClusterError::InvalidSettings(format!(
                "expected a JSON object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Parse a snapshot from a raw response body.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` if the body is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, ClusterError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ClusterError::InvalidSettings(format!("malformed JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Serialize the whole document for writing back.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` if serialization fails.
    pub fn to_vec(&self) -> Result<Vec<u8>, ClusterError> {
        serde_json::to_vec(&self.0)
            .map_err(|e| ClusterError::InvalidSettings(format!("cannot serialize: {e}")))
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Current value of a boolean flag, if present.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        let leaf = self.resolve(name)?;
        match leaf {
            Value::Bool(b) => Some(*b),
            Value::Object(wrapper) => wrapper.get("value").and_then(Value::as_bool),
            _ => None,
        }
    }

    /// Set a boolean flag in place.
    ///
    /// Returns `Ok(false)` when the flag already held `value`; the caller must
    /// then skip the write.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` if the flag is missing, is not a boolean, or
    /// is locked by an administrator and would change.
    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<bool, ClusterError> {
        let leaf = self
            .resolve_mut(name)
            .ok_or_else(|| ClusterError::InvalidSettings(format!("setting '{name}' not found")))?;

        match leaf {
            Value::Bool(current) => {
                if *current == value {
                    return Ok(false);
                }
                *current = value;
                Ok(true)
            }
            Value::Object(wrapper) => {
                let Some(current) = wrapper.get("value").and_then(Value::as_bool) else {
                    return Err(ClusterError::InvalidSettings(format!(
                        "setting '{name}' is not a boolean"
                    )));
                };
                if current == value {
                    return Ok(false);
                }
                if wrapper.get("locked").and_then(Value::as_bool) == Some(true) {
                    return Err(ClusterError::InvalidSettings(format!(
                        "setting '{name}' is locked by an administrator"
                    )));
                }
                wrapper.insert("value".to_string(), Value::Bool(value));
                Ok(true)
            }
            other => Err(ClusterError::InvalidSettings(format!(
                "setting '{name}' is not a boolean (got {})",
                json_type(other)
            ))),
        }
    }

    fn resolve(&self, name: &str) -> Option<&Value> {
        if let Some(v) = self.0.get(name) {
            return Some(v);
        }
        let path = legacy_path(name)?;
        let mut segments = path.split('.');
        let first = self.0.get(segments.next()?)?;
        segments.try_fold(first, |node, seg| node.get(seg))
    }

    fn resolve_mut(&mut self, name: &str) -> Option<&mut Value> {
        if self.0.contains_key(name) {
            return self.0.get_mut(name);
        }
        let path = legacy_path(name)?;
        let mut segments = path.split('.');
        let first = self.0.get_mut(segments.next()?)?;
        segments.try_fold(first, |node, seg| node.get_mut(seg))
    }
}

fn legacy_path(name: &str) -> Option<&'static str> {
    LEGACY_ALIASES
        .iter()
        .find(|(flag, _)| *flag == name)
        .map(|(_, path)| *path)
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
