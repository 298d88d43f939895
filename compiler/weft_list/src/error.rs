//! Membership errors for [`OrderedList`](crate::OrderedList).

use crate::NodeId;

/// Error returned when a list operation violates membership rules.
///
/// These are fail-fast: the list is left unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The node is already a member and cannot be linked again.
    #[error("{0:?} is already a member of the list")]
    AlreadyLinked(NodeId),
    /// The node (or the neighbour it was positioned against) is not a member.
    #[error("{0:?} is not a member of the list")]
    NotLinked(NodeId),
    /// The id was never handed out by this list.
    #[error("{0:?} was not allocated by this list")]
    UnknownNode(NodeId),
}
