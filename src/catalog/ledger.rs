//! Registration ledger — append-only list of (offering, student) pairs.

use serde::{Deserialize, Serialize};

/// A student registered to an offering, by label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub offering: String,
    pub student_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationLedger {
    registrations: Vec<Registration>,
}

impl RegistrationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registration when `student_name` is non-empty. The offering
    /// need not exist and repeats are allowed.
    pub fn register(&self, offering: &str, student_name: &str) -> Self {
        if student_name.is_empty() {
            return self.clone();
        }
        let mut registrations = self.registrations.clone();
        registrations.push(Registration {
            offering: offering.to_string(),
            student_name: student_name.to_string(),
        });
        Self { registrations }
    }

    /// Registrations whose offering is exactly `offering`, oldest first.
    pub fn list_for<'a>(&'a self, offering: &'a str) -> impl Iterator<Item = &'a Registration> + 'a {
        self.registrations
            .iter()
            .filter(move |r| r.offering == offering)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> + '_ {
        self.registrations.iter()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
