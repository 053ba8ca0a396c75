//! Error types for navigation and URL matching.

use crate::transition::Transition;

/// A boxed domain error raised by a caller-supplied collaborator.
pub type BoxError = Box<dyn core::error::Error + 'static>;

/// Errors surfaced by [`Router`](crate::Router) operations.
///
/// Every variant is reported to the original caller of
/// [`navigate`](crate::Router::navigate) or
/// [`open_url`](crate::Router::open_url); nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// The destination-preparation collaborator failed, cancelling the
    /// navigation before any hierarchy mutation.
    #[error("route preparation failed: {0}")]
    Preparation(#[source] BoxError),

    /// The destination screen is live in the hierarchy but is not an
    /// ancestor of the current screen, so no route to it can be found
    /// automatically.
    #[error(
        "the destination screen is in the hierarchy but is not an ancestor \
         of the current screen, so a route to it could not be found"
    )]
    UnableToFindRoute,

    /// A `push` or `set` transition was requested while the current screen
    /// is not inside a stack container.
    #[error(
        "the `{}` transition requires the current screen to be inside a stack container",
        .0.name()
    )]
    MissingRequiredStack(Transition),

    /// A route factory requested a path parameter the pattern never bound.
    #[error("missing required path parameter `{0}`")]
    MissingRequiredPathParameter(String),

    /// A path parameter was bound but its value does not parse as a base-10
    /// integer.
    #[error("path parameter `{name}` is not an integer (got `{value}`)")]
    ParameterNotAnInteger {
        /// The parameter name.
        name: String,
        /// The raw string value that failed to parse.
        value: String,
    },

    /// The hierarchy has no root screen, so there is no current screen to
    /// navigate from.
    #[error("the presentation hierarchy has no root screen")]
    EmptyHierarchy,
}
