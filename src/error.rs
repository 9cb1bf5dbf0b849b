use thiserror::Error;

use crate::vocab::Namespace;

/// An identifier that is not part of its namespace's vocabulary.
///
/// Raised while building a [`Style`](crate::Style) from names; a constructed
/// style never fails to render.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("unknown {namespace} identifier \"{identifier}\" (expected one of: {})", .namespace.members().join(", "))]
pub struct UnknownIdentifierError {
    namespace: Namespace,
    identifier: String,
}

impl UnknownIdentifierError {
    pub fn new(namespace: Namespace, identifier: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: identifier.into(),
        }
    }

    /// The namespace the identifier was checked against.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// The offending token, verbatim.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The identifiers that would have been accepted.
    pub fn expected(&self) -> &'static [&'static str] {
        self.namespace.members()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_identifier_display() {
        let err = UnknownIdentifierError::new(Namespace::Color, "purple");
        let msg = err.to_string();
        assert!(msg.starts_with("unknown color identifier \"purple\""));
        assert!(msg.contains("grey, red, green"));
    }

    #[test]
    fn test_unknown_identifier_accessors() {
        let err = UnknownIdentifierError::new(Namespace::Attribute, String::from("italic"));
        assert_eq!(err.namespace(), Namespace::Attribute);
        assert_eq!(err.identifier(), "italic");
        assert!(err.expected().contains(&"underline"));
    }
}
