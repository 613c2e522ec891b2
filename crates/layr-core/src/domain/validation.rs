use crate::domain::{entities::ArtifactPlan, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across generators.
pub struct DomainValidator;

impl DomainValidator {
    /// Reject names that would escape or hide inside the target tree.
    ///
    /// This is a filesystem safety check only. Names that are not valid
    /// identifiers in the generated language pass through untouched.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        let reason = if name.trim().is_empty() {
            Some("name cannot be empty")
        } else if name.contains(['/', '\\']) {
            Some("name cannot contain path separators")
        } else if name.starts_with('.') {
            Some("name cannot start with '.'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidName {
                name: name.to_owned(),
                reason,
            }),
            None => Ok(()),
        }
    }

    pub fn validate_plan(plan: &ArtifactPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        for name in ["order", "OrderItem", "order_item", "v2"] {
            assert!(DomainValidator::validate_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_unsafe_names() {
        for name in ["", "   ", "../etc", "a/b", "a\\b", ".hidden", ".."] {
            assert!(
                matches!(
                    DomainValidator::validate_name(name),
                    Err(DomainError::InvalidName { .. })
                ),
                "{name:?}"
            );
        }
    }
}
