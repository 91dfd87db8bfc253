//! Session progress state machine
//!
//! ```text
//!   InProgress{i} --choose/skip--> InProgress{i+1} | Complete
//!   InProgress{i} --undo-------->  InProgress{i-1}
//!   Complete      --undo-------->  InProgress{len-1}
//!   any           --reset------->  InProgress{0}   | Complete (fewer than 2 players)
//! ```

/// Where a session is in its pairing sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// `index` points at the pair being shown, `index < len`
    InProgress { index: usize },
    /// Every pair has been decided or skipped
    Complete,
}

impl SessionState {
    /// State of a fresh session over `total` pairs
    pub fn starting(total: usize) -> Self {
        if total == 0 {
            SessionState::Complete
        } else {
            SessionState::InProgress { index: 0 }
        }
    }

    /// Number of pairs already consumed
    pub fn completed(&self, total: usize) -> usize {
        match self {
            SessionState::InProgress { index } => *index,
            SessionState::Complete => total,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SessionState::Complete)
    }

    /// Move past the current pair
    pub fn advanced(self, total: usize) -> Self {
        match self {
            SessionState::InProgress { index } if index + 1 < total => {
                SessionState::InProgress { index: index + 1 }
            }
            _ => SessionState::Complete,
        }
    }

    /// Step back one pair. Leaving `Complete` re-opens the last pair.
    pub fn rewound(self, total: usize) -> Self {
        match self {
            SessionState::InProgress { index } => SessionState::InProgress {
                index: index.saturating_sub(1),
            },
            SessionState::Complete if total > 0 => SessionState::InProgress { index: total - 1 },
            SessionState::Complete => SessionState::Complete,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::InProgress { index } => write!(f, "in progress (pair {})", index + 1),
            SessionState::Complete => write!(f, "complete"),
        }
    }
}
