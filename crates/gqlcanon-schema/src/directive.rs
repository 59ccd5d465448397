use indexmap::IndexMap;
use std::fmt;

use crate::name::DirectiveName;
use crate::types::Argument;

/// Location tag naming where a directive may appear (e.g. `FIELD`,
/// `ARGUMENT_DEFINITION`). Kept as an open string set: consumers sort and
/// carry tags through without interpreting them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectiveLocation(String);

impl DirectiveLocation {
    /// Creates a location tag.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl From<String> for DirectiveLocation {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for DirectiveLocation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Config snapshot of a directive.
#[derive(Debug, Clone)]
pub struct DirectiveConfig {
    /// Directive name.
    pub name: DirectiveName,
    /// Optional description.
    pub description: Option<String>,
    /// Location tags, in declaration order.
    pub locations: Vec<DirectiveLocation>,
    /// Arguments keyed by argument name, in declaration order.
    pub args: IndexMap<String, Argument>,
    /// Whether the directive may be applied repeatedly at one location.
    pub repeatable: bool,
}

/// Directive definition.
#[derive(Debug, Clone)]
pub struct Directive {
    name: DirectiveName,
    description: Option<String>,
    locations: Vec<DirectiveLocation>,
    args: IndexMap<String, Argument>,
    repeatable: bool,
}

impl Directive {
    /// Constructs a directive from its config snapshot.
    pub fn new(config: DirectiveConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            locations: config.locations,
            args: config.args,
            repeatable: config.repeatable,
        }
    }

    /// Directive name.
    pub fn name(&self) -> &DirectiveName {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Location tags, in stored order.
    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    /// Argument map, in stored order.
    pub fn args(&self) -> &IndexMap<String, Argument> {
        &self.args
    }

    /// Whether the directive is repeatable.
    pub fn repeatable(&self) -> bool {
        self.repeatable
    }

    /// Extracts the full constructor-visible state.
    pub fn to_config(&self) -> DirectiveConfig {
        DirectiveConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            locations: self.locations.clone(),
            args: self.args.clone(),
            repeatable: self.repeatable,
        }
    }
}
