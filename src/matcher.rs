use crate::policy::Statement;

/// Decides whether a resource granted by a statement is too broad
/// for the policy to be accepted.
pub trait ResourceMatcher {
    fn do_match(&self, statement: &Statement, resource: &str) -> bool;
}

pub const WILDCARD_RESOURCE: &str = "*";

/// Matches only the literal `"*"` resource. Partial wildcards such as
/// `arn:aws:s3:::bucket/*` are not matched.
#[derive(Debug, Default, Copy, Clone)]
pub struct DefaultResourceMatcher;

impl ResourceMatcher for DefaultResourceMatcher {
    fn do_match(&self, _statement: &Statement, resource: &str) -> bool {
        resource == WILDCARD_RESOURCE
    }
}
