mod parser;
pub use parser::{extract_statements, extract_statements_with, extract_values, parse_statement};

use std::convert::TryFrom;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Role policy as it appears on the wire.
///
/// `PolicyName` and `PolicyDocument.Version` are decoded strictly. The
/// `Statement` field stays untyped until [`StatementSource`] resolves it,
/// so shape errors are reported only after the top-level fields pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RolePolicy {
    pub policy_name: String,
    pub policy_document: PolicyDocument,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    #[serde(default)]
    pub statement: Value,
}

/// The IAM grammar allows `Statement` to be a single object or an array of them.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementSource {
    Single(Map<String, Value>),
    Many(Vec<Map<String, Value>>),
}

impl StatementSource {
    pub fn into_objects(self) -> Vec<Map<String, Value>> {
        match self {
            StatementSource::Single(object) => vec![object],
            StatementSource::Many(objects) => objects,
        }
    }
}

impl TryFrom<&Value> for StatementSource {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(StatementSource::Single(object.clone())),
            Value::Array(values) => values
                .iter()
                .map(|value| match value {
                    Value::Object(object) => Ok(object.clone()),
                    other => Err(Error::Type(format!(
                        "statement has to be an object but is {}",
                        json_type(other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(StatementSource::Many),
            other => Err(Error::Type(format!(
                "statements has to be either type of array or object but is {}",
                json_type(other)
            ))),
        }
    }
}

/// A single permission rule with its `Action` and `Resource`
/// normalized to ordered sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    sid: String,
    effect: String,
    action: Vec<String>,
    resource: Vec<String>,
}

impl Statement {
    pub fn sid(&self) -> &str {
        &self.sid
    }

    pub fn effect(&self) -> &str {
        &self.effect
    }

    pub fn action(&self) -> &[String] {
        &self.action
    }

    pub fn resource(&self) -> &[String] {
        &self.resource
    }
}

/// JSON type name used in error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
