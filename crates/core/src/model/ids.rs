use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing an ID from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying u64 value
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map($name::new)
                    .map_err(|_| ParseIdError {
                        kind: stringify!($name),
                    })
            }
        }
    };
}

catalog_id! {
    /// Unique identifier for a user
    UserId
}

catalog_id! {
    /// Unique identifier for a subject
    SubjectId
}

catalog_id! {
    /// Unique identifier for a learning material
    MaterialId
}

catalog_id! {
    /// Unique identifier for a flashcard deck
    DeckId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_id_display_and_parse() {
        let id = MaterialId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<MaterialId>().unwrap(), id);
    }

    #[test]
    fn subject_id_debug_names_the_type() {
        assert_eq!(format!("{:?}", SubjectId::new(7)), "SubjectId(7)");
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-number".parse::<DeckId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse DeckId from string");
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&UserId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
