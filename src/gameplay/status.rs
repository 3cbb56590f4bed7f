/// Lifecycle of a game.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Won | Status::Lost)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::NotStarted => write!(f, "not started"),
            Status::Playing => write!(f, "playing"),
            Status::Won => write!(f, "won"),
            Status::Lost => write!(f, "lost"),
        }
    }
}
