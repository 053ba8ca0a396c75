//! The navigation resolution engine.

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use tracing::{debug, trace};
use url::Url;

use crate::error::RouterError;
use crate::inspect::{self, Placement};
use crate::matcher::UrlMatcherGroup;
use crate::route::{CustomTransition, Destinations, Route};
use crate::screen::{Hierarchy, ScreenId, ScreenKind};
use crate::transition::Transition;

/// Navigates between the routes of one route space.
///
/// The router resolves where a route's destination sits in the live
/// presentation hierarchy and either short-circuits (already there), unwinds
/// (dismisses the modal chain covering an ancestor), or performs the route's
/// declared transition. See the crate docs for a full example.
///
/// The hierarchy is externally owned and may be shared between several
/// routers; all calls must come from the thread that owns it, and the
/// caller is responsible for not overlapping navigation calls against the
/// same hierarchy.
pub struct Router<R: Route> {
    hierarchy: Rc<RefCell<dyn Hierarchy>>,
    destinations: RefCell<Box<dyn Destinations<R>>>,
    custom_transitions: Option<Box<dyn CustomTransition>>,
    matchers: Option<UrlMatcherGroup<R>>,
}

impl<R: Route> Router<R> {
    /// Creates a router over a shared hierarchy, with `destinations`
    /// supplying the screen each route leads to.
    ///
    /// The route space's URL bindings ([`Route::url_matchers`]) are
    /// consumed here and are immutable afterwards.
    pub fn new(
        hierarchy: Rc<RefCell<dyn Hierarchy>>,
        destinations: impl Destinations<R> + 'static,
    ) -> Self {
        Self {
            hierarchy,
            destinations: RefCell::new(Box::new(destinations)),
            custom_transitions: None,
            matchers: R::url_matchers(),
        }
    }

    /// Registers the handler for [`Transition::Custom`] transitions.
    #[must_use]
    pub fn with_custom_transitions(mut self, handler: impl CustomTransition + 'static) -> Self {
        self.custom_transitions = Some(Box::new(handler));
        self
    }

    /// Navigates to a route, animated.
    ///
    /// Navigating to the screen you are already on (or to its enclosing
    /// stack container) is a successful no-op.
    ///
    /// # Errors
    ///
    /// See [`RouterError`]; preparation and classification failures leave
    /// the hierarchy untouched.
    pub fn navigate(&self, route: &R) -> Result<(), RouterError> {
        self.navigate_animated(route, true)
    }

    /// Navigates to a route with explicit control over animation.
    ///
    /// # Errors
    ///
    /// See [`navigate`](Router::navigate).
    pub fn navigate_animated(&self, route: &R, animated: bool) -> Result<(), RouterError> {
        let mut hierarchy = self.hierarchy.borrow_mut();
        let hierarchy = &mut *hierarchy;

        let root = hierarchy.root().ok_or(RouterError::EmptyHierarchy)?;
        let current = inspect::top_screen(hierarchy, root);

        let destination = self
            .destinations
            .borrow_mut()
            .prepare(route, hierarchy, current)
            .map_err(RouterError::Preparation)?;

        let placement = inspect::classify(hierarchy, current, destination);
        debug!(route = route.name(), ?placement, animated, "navigating");

        match placement {
            Placement::Current => Ok(()),
            Placement::ActiveElsewhere => Err(RouterError::UnableToFindRoute),
            Placement::Ancestor { unwind_from } => {
                // Unwind: one dismissal at the recorded presenter tears
                // down the whole modal chain covering the destination,
                // which can hang off a screen below the container the
                // destination was found in. Reaching the destination
                // through containment alone needs no dismissal.
                if let Some(presenter) = unwind_from {
                    hierarchy.dismiss_presented(presenter, animated);
                }
                // The visible screen may have changed; the dispatcher's
                // already-here check turns a completed unwind into a no-op.
                let current = inspect::top_screen(hierarchy, root);
                self.perform_transition(
                    hierarchy,
                    destination,
                    current,
                    route.transition(),
                    animated,
                )
            }
            Placement::Fresh => self.perform_transition(
                hierarchy,
                destination,
                current,
                route.transition(),
                animated,
            ),
        }
    }

    /// Callback form of [`navigate_animated`](Router::navigate_animated):
    /// `completion` is invoked exactly once with the terminal result.
    pub fn navigate_then(
        &self,
        route: &R,
        animated: bool,
        completion: impl FnOnce(Result<(), RouterError>),
    ) {
        completion(self.navigate_animated(route, animated));
    }

    /// Matches a URL against the registered bindings and navigates to the
    /// resulting route.
    ///
    /// Returns `Ok(false)` when no binding structurally matches; that is
    /// not an error.
    ///
    /// # Errors
    ///
    /// A structurally matched binding whose parameter conversion fails
    /// aborts the attempt with the conversion error; a successful match
    /// then reports any [`navigate`](Router::navigate) error.
    pub fn open_url(&self, url: &Url) -> Result<bool, RouterError> {
        let Some(matchers) = &self.matchers else {
            trace!(%url, "no URL bindings registered");
            return Ok(false);
        };

        match matchers.find_match(url)? {
            Some(route) => {
                debug!(%url, route = route.name(), "URL matched");
                self.navigate(&route)?;
                Ok(true)
            }
            None => {
                trace!(%url, "no binding matched");
                Ok(false)
            }
        }
    }

    /// Dispatches the resolved transition.
    fn perform_transition(
        &self,
        hierarchy: &mut dyn Hierarchy,
        destination: ScreenId,
        current: ScreenId,
        transition: Transition,
        animated: bool,
    ) -> Result<(), RouterError> {
        // Already here, nothing to perform.
        if destination == current || hierarchy.stack_of(current) == Some(destination) {
            return Ok(());
        }

        let anchor = hierarchy.stack_of(current).unwrap_or(current);

        if transition.requires_stack() && hierarchy.kind(anchor) != ScreenKind::Stack {
            return Err(RouterError::MissingRequiredStack(transition));
        }

        match transition {
            Transition::Push => hierarchy.push(anchor, destination, animated),
            Transition::Set => hierarchy.set_stack(anchor, destination, animated),
            Transition::Modal => hierarchy.present(anchor, destination, animated),
            Transition::Custom(identifier) => match &self.custom_transitions {
                Some(handler) => handler.perform_transition(
                    hierarchy,
                    destination,
                    anchor,
                    &identifier,
                    animated,
                ),
                // Custom transitions are opt-in; without a handler the
                // transition is dropped.
                None => debug!(%identifier, "no custom transition handler registered"),
            },
        }
        Ok(())
    }
}

impl<R: Route> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("custom_transitions", &self.custom_transitions.is_some())
            .field("matchers", &self.matchers)
            .finish_non_exhaustive()
    }
}
