use crate::error::SchemaError;
use regex::Regex;
use std::fmt;

macro_rules! name_type {
    ($name:ident, $doc:expr, $kind:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Creates a new instance without validation; callers are responsible for conformity.
            pub fn new(value: String) -> Self {
                Self(value)
            }

            /// Parses a validated name from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, SchemaError> {
                let s = value.into();
                if !Regex::new(NAME_PATTERN).expect("invalid regex").is_match(&s) {
                    return Err(SchemaError::InvalidName {
                        kind: $kind,
                        value: s,
                    });
                }
                Ok(Self(s))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Name grammar shared by types and directives (pattern: `[_A-Za-z][_0-9A-Za-z]*`).
const NAME_PATTERN: &str = r"^[_A-Za-z][_0-9A-Za-z]*$";

name_type!(
    TypeName,
    "Unique name of a named type (introspection types use a `__` prefix).",
    "type"
);
name_type!(DirectiveName, "Unique name of a directive.", "directive");
