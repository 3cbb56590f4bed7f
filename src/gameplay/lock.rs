/// Lock state of a play pile.
///
/// A pile locks when a guess on it fails. A Jack seals it instead, which is
/// a stronger lock: Bloodsurge can reopen a plain lock but never a seal.
/// Only a Joker or a reseed clears both.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Lock {
    #[default]
    Open,
    Locked,
    Sealed,
}

impl Lock {
    /// Sealed piles are locked too.
    pub fn is_locked(&self) -> bool {
        !matches!(self, Lock::Open)
    }
    pub fn is_sealed(&self) -> bool {
        matches!(self, Lock::Sealed)
    }
}

impl std::fmt::Display for Lock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Lock::Open => write!(f, "open"),
            Lock::Locked => write!(f, "locked"),
            Lock::Sealed => write!(f, "sealed"),
        }
    }
}
