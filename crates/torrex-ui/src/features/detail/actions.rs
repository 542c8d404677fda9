//! Comment thread actions.

/// Actions emitted by rendered comments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentAction {
    /// Delete a comment by identifier (administrators only).
    Delete(String),
}
