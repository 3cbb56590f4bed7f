/// Severity of an [`Event`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

/// A human-readable line describing something that happened during a
/// transition: what flipped, what triggered, what locked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    kind: Kind,
    message: String,
}

impl Event {
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
