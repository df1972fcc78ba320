//! Configuration-misuse errors surfaced at validation time.

use thiserror::Error;

/// Contract violations in sidebar or tab configuration.
///
/// These are reported immediately from [`Sidebar::show`](crate::Sidebar::show)
/// (or [`DockSide::parse`](crate::DockSide::parse)) rather than deferred.
/// A `selected` id that matches no tab is deliberately *not* an error; it
/// degrades to "no tab marked active".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SidebarError {
    #[error("sidebar id must not be empty")]
    MissingId,

    #[error("sidebar requires at least one tab")]
    NoTabs,

    #[error("tab id must not be empty")]
    MissingTabId,

    #[error("tab `{id}` has an empty header")]
    MissingTabHeader { id: String },

    #[error("duplicate tab id `{id}`")]
    DuplicateTabId { id: String },

    #[error("unknown dock side `{value}` (expected `left` or `right`)")]
    UnknownDockSide { value: String },
}
