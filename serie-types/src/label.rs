use std::fmt;

/// A column label as delivered by a data source.
///
/// Sources with hierarchical column schemes (e.g. a field name paired with a
/// ticker symbol) produce `Composite` labels; everything else is `Simple`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// A single plain label.
    Simple(String),
    /// An ordered tuple of label levels.
    Composite(Vec<String>),
}

impl Label {
    /// Build a simple label.
    pub fn simple(s: impl Into<String>) -> Self {
        Self::Simple(s.into())
    }

    /// Build a composite label from its levels, outermost first.
    pub fn composite<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Composite(parts.into_iter().map(Into::into).collect())
    }

    /// Join the label into one string.
    ///
    /// Composite parts are joined with a single space in their original order.
    /// Empty parts are kept, so `("Date", "")` flattens to `"Date "`.
    #[must_use]
    pub fn flatten(&self) -> String {
        match self {
            Self::Simple(s) => s.clone(),
            Self::Composite(parts) => parts.join(" "),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten())
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Simple(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Simple(s)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Label {
    fn from((a, b): (A, B)) -> Self {
        Self::Composite(vec![a.into(), b.into()])
    }
}
