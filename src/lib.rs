//! # Rudder
//!
//! A declarative navigation router: declare a finite set of named routes,
//! then navigate between them without manually manipulating the tree of
//! on-screen containers.
//!
//! For each [`navigate`](Router::navigate) call the router materializes the
//! destination screen, classifies it against the live presentation
//! hierarchy ([`inspect::classify`]) and either short-circuits (you are
//! already there), unwinds the modal chain covering an ancestor, or
//! performs the route's declared [`Transition`]. [`Router::open_url`] maps
//! external URLs onto the same route space through declarative
//! [`PathPattern`] bindings.
//!
//! The hierarchy itself is externally owned, shared behind
//! `Rc<RefCell<dyn Hierarchy>>`; [`ScreenTree`] is the bundled arena-backed
//! store. Everything is single-threaded and cooperative: calls must be
//! serialized on the thread that owns the hierarchy.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use rudder::{
//!     BoxError, Destinations, Hierarchy, Route, Router, RouterError, ScreenId, ScreenKind,
//!     ScreenTree, Transition,
//! };
//!
//! enum AppRoute {
//!     Home,
//!     Settings,
//! }
//!
//! impl Route for AppRoute {
//!     fn name(&self) -> &str {
//!         match self {
//!             Self::Home => "home",
//!             Self::Settings => "settings",
//!         }
//!     }
//!
//!     fn transition(&self) -> Transition {
//!         match self {
//!             Self::Home => Transition::Set,
//!             Self::Settings => Transition::Push,
//!         }
//!     }
//! }
//!
//! struct AppDestinations {
//!     home: ScreenId,
//! }
//!
//! impl Destinations<AppRoute> for AppDestinations {
//!     fn prepare(
//!         &mut self,
//!         route: &AppRoute,
//!         hierarchy: &mut dyn Hierarchy,
//!         _from: ScreenId,
//!     ) -> Result<ScreenId, BoxError> {
//!         Ok(match route {
//!             AppRoute::Home => self.home,
//!             AppRoute::Settings => hierarchy.insert(ScreenKind::Plain),
//!         })
//!     }
//! }
//!
//! let mut tree = ScreenTree::new();
//! let stack = tree.insert(ScreenKind::Stack);
//! let home = tree.insert(ScreenKind::Plain);
//! tree.set_root(stack);
//! tree.add_child(stack, home);
//!
//! let tree = Rc::new(RefCell::new(tree));
//! let router = Router::new(tree.clone(), AppDestinations { home });
//!
//! router.navigate(&AppRoute::Settings)?; // pushed onto the stack
//! router.navigate(&AppRoute::Home)?; // stack reset back to home
//! assert_eq!(tree.borrow().children(stack), &[home]);
//! # Ok::<(), RouterError>(())
//! ```

pub mod inspect;

mod error;
mod matcher;
mod route;
mod router;
mod screen;
mod transition;
mod tree;

pub use error::{BoxError, RouterError};
pub use matcher::{MatchedUrl, PathPattern, UrlMatcher, UrlMatcherGroup, UrlPathMapper};
pub use route::{CustomTransition, Destinations, Route};
pub use router::Router;
pub use screen::{Hierarchy, ScreenId, ScreenKind};
pub use transition::Transition;
pub use tree::ScreenTree;

pub use url::Url;
