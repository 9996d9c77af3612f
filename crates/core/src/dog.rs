//! Dog status and gender enums.
//!
//! Both are stored as lowercase codes in the `dogs` table (guarded by `CHECK`
//! constraints) and rendered to clients through [`AdoptionStatus::label`] and
//! [`Gender::label`].

use serde::Serialize;

// ---------------------------------------------------------------------------
// Adoption status
// ---------------------------------------------------------------------------

/// Where a dog is in the adoption process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionStatus {
    Available,
    Pending,
    Adopted,
}

impl AdoptionStatus {
    /// Parse a stored status code. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "available" => Some(Self::Available),
            "pending" => Some(Self::Pending),
            "adopted" => Some(Self::Adopted),
            _ => None,
        }
    }

    /// Symbolic name shown to API clients.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Pending => "PENDING",
            Self::Adopted => "ADOPTED",
        }
    }
}

impl std::fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// A dog's sex as listed on its profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a stored gender code (`male`, `female`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    /// Display form, also the serialized value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn status_parses_stored_codes() {
        assert_matches!(
            AdoptionStatus::from_str("available"),
            Some(AdoptionStatus::Available)
        );
        assert_matches!(
            AdoptionStatus::from_str("pending"),
            Some(AdoptionStatus::Pending)
        );
        assert_matches!(
            AdoptionStatus::from_str("adopted"),
            Some(AdoptionStatus::Adopted)
        );
    }

    #[test]
    fn status_unknown_code_is_rejected() {
        assert_matches!(AdoptionStatus::from_str("AVAILABLE"), None);
        assert_matches!(AdoptionStatus::from_str(""), None);
        assert_matches!(AdoptionStatus::from_str("fostered"), None);
    }

    #[test]
    fn status_serializes_as_label_not_code() {
        for status in [
            AdoptionStatus::Available,
            AdoptionStatus::Pending,
            AdoptionStatus::Adopted,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.label());
            assert_eq!(json, status.to_string());
            assert_ne!(json, status.label().to_lowercase());
        }
    }

    #[test]
    fn gender_parses_stored_codes() {
        assert_matches!(Gender::from_str("male"), Some(Gender::Male));
        assert_matches!(Gender::from_str("female"), Some(Gender::Female));
        assert_matches!(Gender::from_str("Male"), None);
    }

    #[test]
    fn gender_serializes_as_label() {
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), "Female");
        assert_eq!(Gender::Male.to_string(), "Male");
    }
}
