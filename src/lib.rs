#![deny(rust_2018_idioms)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]
//! Linter for IAM role policy documents.
//!
//! A role policy is accepted when it is well formed, its `PolicyName`,
//! `Version` and every statement `Effect` are valid, and no statement
//! grants the wildcard resource `"*"`.
//!
//! ```no_run
//! let accepted = iam_role_verifier::verify_file("role-policy.json")?;
//! println!("{}", accepted);
//! # Ok::<(), iam_role_verifier::Error>(())
//! ```
mod errors;
mod matcher;
mod policy;
mod validator;
mod verifier;

pub use errors::{Error, Result};
pub use matcher::{DefaultResourceMatcher, ResourceMatcher, WILDCARD_RESOURCE};
pub use policy::{
    extract_statements, extract_statements_with, extract_values, parse_statement,
    PolicyDocument, RolePolicy, Statement, StatementSource,
};
pub use validator::{
    validate_effect, validate_policy_name, validate_version, DefaultValidator, Field,
    PolicyValidator, SUPPORTED_VERSIONS,
};
pub use verifier::{verify, verify_file, Verifier, VerifierBuilder};
