mod builder;
pub use builder::VerifierBuilder;

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{Error, Result};
use crate::policy::{extract_statements_with, RolePolicy, Statement};
use crate::validator::{Field, PolicyValidator};
use crate::{DefaultResourceMatcher, DefaultValidator, ResourceMatcher};

/// Role policy linter.
///
/// Verification runs in stages and stops at the first error:
/// - JSON syntax
/// - decoding into [`RolePolicy`]
/// - `PolicyName`, then `Version`
/// - statement extraction, including every `Effect`
///
/// A document that passes all of them is then scanned for forbidden
/// resources. Finding one is a negative verdict, not an error.
#[derive(Debug, Clone)]
pub struct Verifier<V, M> {
    validator: V,
    matcher: M,
}

impl Verifier<DefaultValidator, DefaultResourceMatcher> {
    pub fn builder() -> VerifierBuilder<DefaultValidator, DefaultResourceMatcher> {
        VerifierBuilder::new()
    }
}

impl Default for Verifier<DefaultValidator, DefaultResourceMatcher> {
    fn default() -> Self {
        VerifierBuilder::new().build()
    }
}

impl<V, M> Verifier<V, M>
where
    V: PolicyValidator,
    M: ResourceMatcher,
{
    /// Returns `Ok(false)` if any statement grants a resource flagged by
    /// the matcher, `Ok(true)` otherwise.
    pub fn verify(&self, bytes: &[u8]) -> Result<bool> {
        let value: Value = serde_json::from_slice(bytes).map_err(Error::Syntax)?;
        let policy: RolePolicy = serde_json::from_value(value).map_err(Error::Decode)?;
        debug!(policy_name = %policy.policy_name, "decoded role policy");

        self.validator
            .validate(Field::PolicyName, &policy.policy_name)?;
        self.validator
            .validate(Field::Version, &policy.policy_document.version)?;

        let statements = extract_statements_with(&policy, &self.validator)?;

        let accepted = self.check_resources(&statements);
        info!(policy_name = %policy.policy_name, accepted, "verified role policy");
        Ok(accepted)
    }

    pub fn verify_str(&self, json: &str) -> Result<bool> {
        self.verify(json.as_bytes())
    }

    pub fn verify_file(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), len = bytes.len(), "read policy file");
        self.verify(&bytes)
    }

    fn check_resources(&self, statements: &[Statement]) -> bool {
        for statement in statements {
            for resource in statement.resource() {
                if self.matcher.do_match(statement, resource) {
                    warn!(
                        sid = statement.sid(),
                        resource = resource.as_str(),
                        "statement grants a forbidden resource"
                    );
                    return false;
                }
            }
        }
        true
    }
}

/// Verifies a role policy with the default validator and matcher.
pub fn verify(bytes: &[u8]) -> Result<bool> {
    Verifier::default().verify(bytes)
}

/// Reads and verifies a role policy file with the default validator and matcher.
pub fn verify_file(path: impl AsRef<Path>) -> Result<bool> {
    Verifier::default().verify_file(path)
}
