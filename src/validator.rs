use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{Error, Result};

pub const SUPPORTED_VERSIONS: [&str; 2] = ["2012-10-17", "2008-10-17"];

const MAX_POLICY_NAME_LEN: usize = 128;

lazy_static! {
    // `\w` is ASCII-only here to match the IAM character set.
    static ref POLICY_NAME: Regex = Regex::new(r"^[A-Za-z0-9_+=,.@-]+$").unwrap();
}

/// Validates a single top-level or statement field of a role policy.
///
/// The verifier calls it with `Field::PolicyName` and `Field::Version` before
/// statements are extracted, then with `Field::Effect` once per statement.
pub trait PolicyValidator {
    fn validate(&self, field: Field, value: &str) -> Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Field {
    PolicyName,
    Version,
    Effect,
}

/// Enforces the IAM rules for names, versions and effects.
#[derive(Debug, Default, Copy, Clone)]
pub struct DefaultValidator;

impl PolicyValidator for DefaultValidator {
    fn validate(&self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::PolicyName => validate_policy_name(value),
            Field::Version => validate_version(value),
            Field::Effect => validate_effect(value),
        }
    }
}

/// The whole name must match, a valid substring is not enough.
pub fn validate_policy_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > MAX_POLICY_NAME_LEN {
        return Err(Error::Validation(format!(
            "PolicyName length has to be between 1 and {} but is {}",
            MAX_POLICY_NAME_LEN,
            name.len()
        )));
    }
    if !POLICY_NAME.is_match(name) {
        return Err(Error::Validation(
            "PolicyName doesn't match wanted format: `[\\w+=,.@-]+`".into(),
        ));
    }
    Ok(())
}

pub fn validate_version(version: &str) -> Result<()> {
    if !SUPPORTED_VERSIONS.contains(&version) {
        return Err(Error::Validation(format!(
            "accepted versions are: 2012-10-17 and 2008-10-17 but {} was given",
            version
        )));
    }
    Ok(())
}

pub fn validate_effect(effect: &str) -> Result<()> {
    if effect != "Allow" && effect != "Deny" {
        return Err(Error::Validation(format!(
            "accepted effects are: Allow and Deny but {} was given",
            effect
        )));
    }
    Ok(())
}
