//! Strongly typed identifiers for every entity kind.
//!
//! # Responsibility
//! - Keep department/task/employee/admin ids from being mixed up in
//!   signatures.
//! - Serialize transparently as plain strings in the persisted blob.
//!
//! # Invariants
//! - Fresh ids come from `Environment::fresh_id`, never from this module.
//! - Seed ids (`it-dept`, `1`, ...) are accepted verbatim.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing id value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of a department (`Department.id`).
    DepartmentId
);
entity_id!(
    /// Identifier of a checklist task, template or employee copy.
    TaskId
);
entity_id!(
    /// Identifier of an employee record.
    EmployeeId
);
entity_id!(
    /// Identifier of an admin account.
    AdminId
);

#[cfg(test)]
mod tests {
    use super::DepartmentId;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&DepartmentId::new("it-dept")).unwrap();
        assert_eq!(json, "\"it-dept\"");
        let back: DepartmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "it-dept");
    }
}
