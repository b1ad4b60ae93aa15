use crate::{DefaultResourceMatcher, DefaultValidator, PolicyValidator, ResourceMatcher, Verifier};

/// Configures a [`Verifier`]. Starts with the IAM validator and the
/// literal wildcard matcher; either can be swapped out.
#[derive(Debug, Clone)]
pub struct VerifierBuilder<V, M> {
    validator: V,
    matcher: M,
}

impl VerifierBuilder<DefaultValidator, DefaultResourceMatcher> {
    pub fn new() -> Self {
        Self {
            validator: DefaultValidator,
            matcher: DefaultResourceMatcher,
        }
    }
}

impl Default for VerifierBuilder<DefaultValidator, DefaultResourceMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, M> VerifierBuilder<V, M>
where
    V: PolicyValidator,
    M: ResourceMatcher,
{
    pub fn with_validator<T>(self, validator: T) -> VerifierBuilder<T, M>
    where
        T: PolicyValidator,
    {
        VerifierBuilder {
            validator,
            matcher: self.matcher,
        }
    }

    pub fn with_matcher<T>(self, matcher: T) -> VerifierBuilder<V, T>
    where
        T: ResourceMatcher,
    {
        VerifierBuilder {
            validator: self.validator,
            matcher,
        }
    }

    pub fn build(self) -> Verifier<V, M> {
        Verifier {
            validator: self.validator,
            matcher: self.matcher,
        }
    }
}
