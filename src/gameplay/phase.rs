/// Where a [`Game`](super::Game) stands. Derived from rounds played.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress(usize),
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::InProgress(n) => write!(f, "round {}", n),
            Self::Finished => write!(f, "finished"),
        }
    }
}
