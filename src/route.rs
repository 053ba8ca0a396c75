//! The route abstraction and its caller-supplied collaborators.

use crate::error::BoxError;
use crate::matcher::UrlMatcherGroup;
use crate::screen::{Hierarchy, ScreenId};
use crate::transition::Transition;

/// A named, parameterized navigation target.
///
/// Implemented on a host enum where each variant is one destination:
///
/// ```
/// use rudder::{Route, Transition};
///
/// enum MyRoute {
///     Home,
///     Profile { id: String },
/// }
///
/// impl Route for MyRoute {
///     fn name(&self) -> &str {
///         match self {
///             Self::Home => "home",
///             Self::Profile { .. } => "profile",
///         }
///     }
///
///     fn transition(&self) -> Transition {
///         match self {
///             Self::Home => Transition::Set,
///             Self::Profile { .. } => Transition::Modal,
///         }
///     }
/// }
///
/// // Two routes are the same route when their names match, regardless of
/// // payload. Override `same_route` to make a parameter significant.
/// let a = MyRoute::Profile { id: "7".into() };
/// let b = MyRoute::Profile { id: "8".into() };
/// assert!(a.same_route(&b));
/// ```
pub trait Route {
    /// The route's discriminant tag, e.g. `Profile { id }` is `"profile"`.
    fn name(&self) -> &str;

    /// The transition used to reach this route's destination screen.
    ///
    /// Must be a pure function of the route value.
    fn transition(&self) -> Transition;

    /// Whether two route values identify the same destination.
    ///
    /// Defaults to comparing [`name`](Route::name), so two instances of the
    /// same variant with different parameters are the same route. Override
    /// this when a parameter should indicate uniqueness.
    fn same_route(&self, other: &Self) -> bool {
        self.name() == other.name()
    }

    /// One-time declaration of the URL bindings for this route space.
    ///
    /// Consumed once when a [`Router`](crate::Router) is constructed and
    /// immutable afterwards. Defaults to no bindings, which makes
    /// [`open_url`](crate::Router::open_url) report no match for every URL.
    #[must_use]
    fn url_matchers() -> Option<UrlMatcherGroup<Self>>
    where
        Self: Sized,
    {
        None
    }
}

/// Destination preparation: materializes the screen a route leads to.
///
/// Supplied by the host at [`Router`](crate::Router) construction. For a
/// fresh destination, implementations allocate a screen through
/// [`Hierarchy::insert`] and return its id; returning the id of a live
/// screen instead makes the router reuse or unwind to it.
pub trait Destinations<R: Route> {
    /// Produces the destination screen for `route`, given the currently
    /// visible screen as context.
    ///
    /// Returning an error cancels the navigation before any hierarchy
    /// mutation; the error is surfaced verbatim as
    /// [`RouterError::Preparation`](crate::RouterError::Preparation).
    fn prepare(
        &mut self,
        route: &R,
        hierarchy: &mut dyn Hierarchy,
        from: ScreenId,
    ) -> Result<ScreenId, BoxError>;
}

/// Handler for [`Transition::Custom`] transitions.
///
/// Registered with [`Router::with_custom_transitions`]; custom transitions
/// without a registered handler are dropped.
///
/// [`Router::with_custom_transitions`]: crate::Router::with_custom_transitions
pub trait CustomTransition {
    /// Performs the transition identified by `identifier`, placing `to`
    /// relative to `from` however the host sees fit.
    fn perform_transition(
        &self,
        hierarchy: &mut dyn Hierarchy,
        to: ScreenId,
        from: ScreenId,
        identifier: &str,
        animated: bool,
    );
}
