use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sort {
    Ascending(String),
    Descending(String),
}

impl Sort {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::Ascending(field.into())
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::Descending(field.into())
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Ascending(field) => write!(f, "{field}"),
            Sort::Descending(field) => write!(f, "-{field}"),
        }
    }
}
