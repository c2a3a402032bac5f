use crate::OptionSpec;

/// A coerced option value
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Bool(bool),
    Str(String),
    Int(i64),
    UInt(u64),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Self::UInt(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => b.fmt(f),
            Self::Str(s) => s.fmt(f),
            Self::Int(n) => n.fmt(f),
            Self::UInt(n) => n.fmt(f),
        }
    }
}

/// Values bound during one parse, keyed by the option's long name
///
/// An option is matched exactly when it has a value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matches {
    slots: Vec<(String, Option<Value>)>,
}

impl Matches {
    pub(crate) fn new(options: &[OptionSpec]) -> Self {
        Self {
            slots: options
                .iter()
                .map(|spec| (spec.get_long().to_owned(), None))
                .collect(),
        }
    }

    pub(crate) fn bind(&mut self, index: usize, value: Value) {
        self.slots[index].1 = Some(value);
    }

    pub(crate) fn is_bound(&self, index: usize) -> bool {
        self.slots[index].1.is_some()
    }

    fn slot(&self, long: &str) -> Option<&Value> {
        self.slots
            .iter()
            .find(|(name, _)| name == long)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Whether the option consumed a token in this parse
    pub fn is_matched(&self, long: &str) -> bool {
        self.slot(long).is_some()
    }

    pub fn value(&self, long: &str) -> Option<&Value> {
        self.slot(long)
    }

    /// Boolean options are `false` unless matched
    pub fn get_flag(&self, long: &str) -> bool {
        self.slot(long).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn get_str(&self, long: &str) -> Option<&str> {
        self.slot(long).and_then(Value::as_str)
    }

    pub fn get_int(&self, long: &str) -> Option<i64> {
        self.slot(long).and_then(Value::as_int)
    }

    pub fn get_uint(&self, long: &str) -> Option<u64> {
        self.slot(long).and_then(Value::as_uint)
    }

    /// Matched options in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.slots
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|value| (name.as_str(), value)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Matches {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap as _;

        let mut map = serializer.serialize_map(None)?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Result of a successful parse
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parsed {
    subcommand: Option<String>,
    matches: Matches,
}

impl Parsed {
    pub(crate) fn new(subcommand: Option<String>, matches: Matches) -> Self {
        Self {
            subcommand,
            matches,
        }
    }

    /// The invoked subcommand, `None` for the root command
    pub fn subcommand(&self) -> Option<&str> {
        self.subcommand.as_deref()
    }

    pub fn matches(&self) -> &Matches {
        &self.matches
    }

    pub fn into_matches(self) -> Matches {
        self.matches
    }
}
