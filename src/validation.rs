//! Input validation for participant lists.
//!
//! Checks the participant invariants before allocation. Detects:
//! - Empty names
//! - Participants with no role preference
//!
//! The allocator refuses a participant with no role outright; running
//! these checks first turns that into a user-facing rejection instead.

use std::fmt;

use crate::models::Participant;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The participant name is empty.
    EmptyName,
    /// No level was declared for any role.
    NoRolePreference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a single participant.
pub fn validate_participant(participant: &Participant) -> ValidationResult {
    let errors = check(None, participant);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a whole participant list.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_participants(participants: &[Participant]) -> ValidationResult {
    let errors: Vec<ValidationError> = participants
        .iter()
        .enumerate()
        .flat_map(|(ix, p)| check(Some(ix), p))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check(index: Option<usize>, participant: &Participant) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let at = index.map(|ix| format!(" at position {ix}")).unwrap_or_default();

    if participant.name.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyName,
            format!("Participant{at} has an empty name"),
        ));
    }

    if !participant.has_any_role() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRolePreference,
            format!(
                "Participant '{}'{at} declared no role preference",
                participant.name
            ),
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    #[test]
    fn test_valid_participant() {
        let p = Participant::new("Ayla").with_tank(Level::Willing);
        assert!(validate_participant(&p).is_ok());
    }

    #[test]
    fn test_empty_name() {
        let p = Participant::new("").with_healer(Level::Preferred);
        let errors = validate_participant(&p).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyName);
    }

    #[test]
    fn test_no_role() {
        let p = Participant::new("Bo");
        let errors = validate_participant(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoRolePreference && e.message.contains("Bo")));
    }

    #[test]
    fn test_multiple_errors() {
        let list = vec![
            Participant::new("ok").with_damage(Level::Fallback),
            Participant::new(""), // Empty name and no role
            Participant::new("Cy"),
        ];

        let errors = validate_participants(&list).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].message.contains("position 1"));
        assert!(errors[2].message.contains("position 2"));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_participants(&[]).is_ok());
    }
}
