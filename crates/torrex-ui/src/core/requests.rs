//! Per-family request tokens used to drop superseded responses.
//!
//! # Design
//! - Each family keeps a monotonically increasing generation.
//! - Issuing a token supersedes every earlier token of the same family.
//! - Requests are never aborted; late responses are simply ignored.

/// Families of requests whose responses replace a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// Torrent search results.
    Search,
    /// Torrent detail with comments.
    Detail,
    /// Admin dashboard statistics.
    AdminStats,
    /// Admin custom period statistics.
    PeriodStats,
    /// Admin user search results.
    UserSearch,
}

impl RequestKind {
    const fn slot(self) -> usize {
        match self {
            Self::Search => 0,
            Self::Detail => 1,
            Self::AdminStats => 2,
            Self::PeriodStats => 3,
            Self::UserSearch => 4,
        }
    }
}

/// Token identifying one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    /// Request family.
    pub kind: RequestKind,
    /// Generation within the family.
    pub generation: u64,
}

/// Latest generation per request family.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTokens {
    generations: [u64; 5],
}

impl RequestTokens {
    /// Issue a new token, superseding older tokens of the same family.
    pub fn issue(&mut self, kind: RequestKind) -> RequestToken {
        let slot = &mut self.generations[kind.slot()];
        *slot = slot.wrapping_add(1);
        RequestToken {
            kind,
            generation: *slot,
        }
    }

    /// Whether a response carrying `token` may still be applied.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generations[token.kind.slot()] == token.generation
    }

    /// Supersede any in-flight request of the family without issuing a new one.
    pub fn invalidate(&mut self, kind: RequestKind) {
        let slot = &mut self.generations[kind.slot()];
        *slot = slot.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let mut tokens = RequestTokens::default();
        let first = tokens.issue(RequestKind::Search);
        let second = tokens.issue(RequestKind::Search);
        assert!(!tokens.is_current(first));
        assert!(tokens.is_current(second));
    }

    #[test]
    fn families_are_independent() {
        let mut tokens = RequestTokens::default();
        let search = tokens.issue(RequestKind::Search);
        let detail = tokens.issue(RequestKind::Detail);
        tokens.issue(RequestKind::UserSearch);
        assert!(tokens.is_current(search));
        assert!(tokens.is_current(detail));
    }

    #[test]
    fn invalidate_discards_in_flight() {
        let mut tokens = RequestTokens::default();
        let detail = tokens.issue(RequestKind::Detail);
        tokens.invalidate(RequestKind::Detail);
        assert!(!tokens.is_current(detail));
    }
}
