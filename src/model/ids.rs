//! Type-safe identifiers.
//!
//! Identifiers are chosen by the caller (`"S001"`, `"C001"`, `"R101"`) and never reformatted.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a student, teacher, patient or doctor.
    PartyId
);
string_id!(CourseId);
string_id!(RoomId);
string_id!(DepartmentId);
string_id!(AppointmentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_verbatim_and_serialize_as_strings() {
        let id = PartyId::from("S001");
        assert_eq!(id.to_string(), "S001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"S001\"");
        assert_eq!(CourseId::new(String::from("C001")).as_str(), "C001");
    }
}
