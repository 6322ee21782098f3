use std::fmt;

/// The identifying half of an option: a string or a number.
///
/// Used as a rendering key; selection identity compares whole options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// One entry in the option catalog: display label plus identifier.
///
/// Labels need not be unique; the catalog's order defines display and
/// navigation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The controlled selection value, owned by the host.
///
/// The variant fixes the widget's mode: a mismatched shape for the intended
/// mode is unrepresentable, so no runtime validation exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// At most one selected option.
    Single(Option<SelectOption>),
    /// Selected options in the order they were picked, no duplicates.
    Multiple(Vec<SelectOption>),
}

impl Selection {
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Whether `option` is part of the current selection.
    pub fn contains(&self, option: &SelectOption) -> bool {
        match self {
            Self::Single(current) => current.as_ref() == Some(option),
            Self::Multiple(values) => values.contains(option),
        }
    }

    /// The same mode with nothing selected.
    pub fn cleared(&self) -> Self {
        match self {
            Self::Single(_) => Self::Single(None),
            Self::Multiple(_) => Self::Multiple(Vec::new()),
        }
    }

    /// The value that selecting `option` produces.
    ///
    /// Single mode replaces the current option, except that re-selecting it
    /// is a no-op (`None` — no change should be reported). Multiple mode
    /// toggles membership: removal keeps the relative order of the rest,
    /// insertion appends.
    pub fn toggled(&self, option: &SelectOption) -> Option<Self> {
        match self {
            Self::Single(current) => {
                if current.as_ref() == Some(option) {
                    None
                } else {
                    Some(Self::Single(Some(option.clone())))
                }
            }
            Self::Multiple(values) => {
                let next = if values.contains(option) {
                    values.iter().filter(|v| *v != option).cloned().collect()
                } else {
                    let mut next = values.clone();
                    next.push(option.clone());
                    next
                };
                Some(Self::Multiple(next))
            }
        }
    }
}
