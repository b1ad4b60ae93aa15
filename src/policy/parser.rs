use std::convert::TryFrom;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::{json_type, RolePolicy, Statement, StatementSource};
use crate::validator::{DefaultValidator, Field, PolicyValidator};
use crate::{Error, Result};

/// Normalizes an IAM "string or array of strings" field.
///
/// A missing or `null` field yields an empty sequence.
pub fn extract_values(raw: Option<&Value>, field: &str) -> Result<Vec<String>> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(value)) => Ok(vec![value.clone()]),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| match value {
                Value::String(value) => Ok(value.clone()),
                other => Err(Error::Type(format!(
                    "values of {} has to be type of string but are {}",
                    field,
                    json_type(other)
                ))),
            })
            .collect(),
        Some(other) => Err(Error::Type(format!(
            "{} has to be either string or array of strings but is {}",
            field,
            json_type(other)
        ))),
    }
}

pub fn parse_statement(object: &Map<String, Value>) -> Result<Statement> {
    let effect = match object.get("Effect") {
        Some(Value::String(effect)) => effect.clone(),
        other => {
            return Err(Error::Type(format!(
                "value Effect has to be string but is {}",
                other.map_or("null", json_type)
            )))
        }
    };

    let resource = extract_values(object.get("Resource"), "Resource")?;

    let sid = match object.get("Sid") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(sid)) => sid.clone(),
        Some(other) => {
            return Err(Error::Type(format!(
                "value Sid has to be string but is {}",
                json_type(other)
            )))
        }
    };

    let action = extract_values(object.get("Action"), "Action")?;

    Ok(Statement {
        sid,
        effect,
        action,
        resource,
    })
}

/// Extracts statements and checks every effect with [`DefaultValidator`].
pub fn extract_statements(policy: &RolePolicy) -> Result<Vec<Statement>> {
    extract_statements_with(policy, &DefaultValidator)
}

/// Extracts statements in document order.
///
/// Nothing is returned unless every statement parses and every effect
/// passes `validator`.
pub fn extract_statements_with<V>(policy: &RolePolicy, validator: &V) -> Result<Vec<Statement>>
where
    V: PolicyValidator + ?Sized,
{
    let source = StatementSource::try_from(&policy.policy_document.statement)?;
    let statements = source
        .into_objects()
        .iter()
        .map(parse_statement)
        .collect::<Result<Vec<_>>>()?;

    for statement in &statements {
        trace!(sid = statement.sid(), effect = statement.effect(), "validating effect");
        validator.validate(Field::Effect, statement.effect())?;
    }

    debug!(
        policy_name = %policy.policy_name,
        statements = statements.len(),
        "extracted statements"
    );
    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyDocument;
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use serde_json::json;
    use test_case::test_case;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(object) => object,
            other => panic!("expected object, got {}", other),
        }
    }

    fn role_policy(statement: Value) -> RolePolicy {
        RolePolicy {
            policy_name: "p1".into(),
            policy_document: PolicyDocument {
                version: "2012-10-17".into(),
                statement,
            },
        }
    }

    #[test]
    fn extract_missing_and_null() {
        assert_eq!(Vec::<String>::new(), extract_values(None, "Action").unwrap());
        assert_eq!(
            Vec::<String>::new(),
            extract_values(Some(&Value::Null), "Action").unwrap()
        );
    }

    #[test]
    fn extract_single_string() {
        let value = json!("s3:GetObject");

        assert_eq!(
            vec!["s3:GetObject".to_string()],
            extract_values(Some(&value), "Action").unwrap()
        );
    }

    #[test]
    fn extract_array_keeps_order() {
        let value = json!(["r3", "r1", "r2"]);

        assert_eq!(
            vec!["r3", "r1", "r2"],
            extract_values(Some(&value), "Resource").unwrap()
        );
    }

    #[test_case(json!(1), "Resource has to be either string or array of strings but is number" ; "number")]
    #[test_case(json!(true), "Resource has to be either string or array of strings but is boolean" ; "boolean")]
    #[test_case(json!({"a": "b"}), "Resource has to be either string or array of strings but is object" ; "object")]
    #[test_case(json!(["a", 1]), "values of Resource has to be type of string but are number" ; "mixed array")]
    #[test_case(json!([null]), "values of Resource has to be type of string but are null" ; "null element")]
    fn extract_rejects_wrong_type(value: Value, message: &str) {
        assert_matches!(
            extract_values(Some(&value), "Resource"),
            Err(Error::Type(msg)) if msg == message
        );
    }

    #[test]
    fn parse_full_statement() {
        let statement = parse_statement(&object(json!({
            "Sid": "ReadOnly",
            "Effect": "Allow",
            "Action": "a",
            "Resource": ["r1", "r2"]
        })))
        .unwrap();

        assert_eq!("ReadOnly", statement.sid());
        assert_eq!("Allow", statement.effect());
        assert_eq!(["a"], statement.action());
        assert_eq!(["r1", "r2"], statement.resource());
    }

    #[test]
    fn parse_minimal_statement_uses_defaults() {
        let statement = parse_statement(&object(json!({"Effect": "Deny"}))).unwrap();

        assert_eq!("", statement.sid());
        assert!(statement.action().is_empty());
        assert!(statement.resource().is_empty());
    }

    #[test_case(json!({}), "value Effect has to be string but is null" ; "missing effect")]
    #[test_case(json!({"Effect": 1}), "value Effect has to be string but is number" ; "numeric effect")]
    #[test_case(json!({"Effect": "Allow", "Sid": 7}), "value Sid has to be string but is number" ; "numeric sid")]
    #[test_case(json!({"Effect": "Allow", "Action": {}}), "Action has to be either string or array of strings but is object" ; "object action")]
    fn parse_rejects_wrong_type(value: Value, message: &str) {
        assert_matches!(
            parse_statement(&object(value)),
            Err(Error::Type(msg)) if msg == message
        );
    }

    #[test]
    fn extract_statements_from_single_object() {
        let policy = role_policy(json!({"Effect": "Allow", "Resource": "*"}));

        let statements = extract_statements(&policy).unwrap();

        assert_eq!(1, statements.len());
        assert_eq!(["*"], statements[0].resource());
    }

    #[test]
    fn extract_statements_from_array() {
        let policy = role_policy(json!([
            {"Sid": "one", "Effect": "Allow"},
            {"Sid": "two", "Effect": "Deny"}
        ]));

        let statements = extract_statements(&policy).unwrap();

        let sids: Vec<_> = statements.iter().map(Statement::sid).collect();
        assert_eq!(vec!["one", "two"], sids);
    }

    #[test]
    fn extract_statements_rejects_invalid_effect() {
        let policy = role_policy(json!([
            {"Effect": "Allow"},
            {"Effect": "all"}
        ]));

        assert_matches!(
            extract_statements(&policy),
            Err(Error::Validation(msg)) if msg == "accepted effects are: Allow and Deny but all was given"
        );
    }

    #[test]
    fn extract_statements_parse_error_wins_over_effect() {
        let policy = role_policy(json!([
            {"Effect": "all"},
            {"Effect": "Allow", "Resource": 3}
        ]));

        assert_matches!(extract_statements(&policy), Err(Error::Type(_)));
    }

    #[test]
    fn extract_statements_rejects_missing_statement() {
        let policy = role_policy(Value::Null);

        assert_matches!(
            extract_statements(&policy),
            Err(Error::Type(msg)) if msg == "statements has to be either type of array or object but is null"
        );
    }

    proptest! {
        #[test]
        fn extract_is_idempotent(values in proptest::collection::vec(".*", 0..8)) {
            let first = extract_values(Some(&json!(values)), "Action").unwrap();
            let second = extract_values(Some(&json!(first)), "Action").unwrap();
            prop_assert_eq!(&values, &first);
            prop_assert_eq!(first, second);
        }
    }
}
