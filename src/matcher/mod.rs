//! Declarative URL-to-route matching.
//!
//! A [`UrlMatcherGroup`] is an ordered list of [`UrlMatcher`]s, each binding
//! a set of hosts and an ordered list of path patterns to route factories.
//! Matching tries bindings strictly in registration order and returns the
//! first structural match; a factory error inside a structural match aborts
//! the whole search instead of falling through to later bindings.

mod matched;
mod pattern;

use core::fmt;

use tracing::trace;
use url::Url;

pub use matched::MatchedUrl;
pub use pattern::PathPattern;

use crate::error::RouterError;

/// Builds a route value from a structurally matched URL.
///
/// May fail, e.g. when a required parameter does not convert; the failure
/// propagates as a matcher error, not as "no match".
type RouteFactory<R> = Box<dyn Fn(&MatchedUrl<'_>) -> Result<R, RouterError>>;

struct Binding<R> {
    pattern: PathPattern,
    factory: RouteFactory<R>,
}

/// Collects the path-pattern bindings for one host group, in registration
/// order.
pub struct UrlPathMapper<R> {
    bindings: Vec<Binding<R>>,
}

impl<R> UrlPathMapper<R> {
    /// Binds a path pattern to a route factory.
    pub fn map(
        &mut self,
        pattern: impl Into<PathPattern>,
        factory: impl Fn(&MatchedUrl<'_>) -> Result<R, RouterError> + 'static,
    ) {
        self.bindings.push(Binding {
            pattern: pattern.into(),
            factory: Box::new(factory),
        });
    }
}

impl<R> fmt::Debug for UrlPathMapper<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlPathMapper")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

/// Path matching for one set of hosts.
pub struct UrlMatcher<R> {
    hosts: Vec<String>,
    bindings: Vec<Binding<R>>,
}

impl<R> UrlMatcher<R> {
    fn new<H: Into<String>>(
        hosts: impl IntoIterator<Item = H>,
        map_paths: impl FnOnce(&mut UrlPathMapper<R>),
    ) -> Self {
        let mut mapper = UrlPathMapper {
            bindings: Vec::new(),
        };
        map_paths(&mut mapper);
        Self {
            hosts: hosts.into_iter().map(Into::into).collect(),
            bindings: mapper.bindings,
        }
    }

    /// Matches `url` against this matcher's bindings.
    ///
    /// `Ok(None)` when the host is not in this matcher's host set or no
    /// pattern structurally matches; an error only when a structurally
    /// matched binding's factory fails.
    fn match_url(&self, url: &Url) -> Result<Option<R>, RouterError> {
        let Some(host) = url.host_str() else {
            return Ok(None);
        };
        if !self.hosts.iter().any(|candidate| candidate == host) {
            return Ok(None);
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        for binding in &self.bindings {
            if let Some(parameters) = binding.pattern.match_segments(&segments) {
                trace!(pattern = binding.pattern.template(), %url, "pattern matched");
                let matched = MatchedUrl::new(url, parameters);
                return (binding.factory)(&matched).map(Some);
            }
        }
        Ok(None)
    }
}

impl<R> fmt::Debug for UrlMatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlMatcher")
            .field("hosts", &self.hosts)
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

/// An ordered group of URL matchers, declared once per route space.
///
/// ```
/// use rudder::{Route, RouterError, Transition, UrlMatcherGroup};
///
/// enum StoreRoute {
///     ProductsIndex,
///     Products { category: String },
/// }
/// # impl Route for StoreRoute {
/// #     fn name(&self) -> &str { "products" }
/// #     fn transition(&self) -> Transition { Transition::Push }
/// # }
///
/// let group = UrlMatcherGroup::group(["mystore.com", "healthengine.com.au"], |paths| {
///     paths.map("products", |_| Ok(StoreRoute::ProductsIndex));
///     paths.map("products/{category}", |matched| {
///         Ok(StoreRoute::Products {
///             category: matched.param("category")?.to_owned(),
///         })
///     });
/// });
/// ```
pub struct UrlMatcherGroup<R> {
    matchers: Vec<UrlMatcher<R>>,
}

impl<R> UrlMatcherGroup<R> {
    /// Creates a group with bindings for one set of hosts.
    #[must_use]
    pub fn group<H: Into<String>>(
        hosts: impl IntoIterator<Item = H>,
        map_paths: impl FnOnce(&mut UrlPathMapper<R>),
    ) -> Self {
        Self {
            matchers: vec![UrlMatcher::new(hosts, map_paths)],
        }
    }

    /// Appends bindings for another set of hosts. Matching order follows
    /// registration order.
    #[must_use]
    pub fn and_group<H: Into<String>>(
        mut self,
        hosts: impl IntoIterator<Item = H>,
        map_paths: impl FnOnce(&mut UrlPathMapper<R>),
    ) -> Self {
        self.matchers.push(UrlMatcher::new(hosts, map_paths));
        self
    }

    /// Finds the first route whose binding matches `url`.
    ///
    /// # Errors
    ///
    /// Propagates the factory error of the first structurally matched
    /// binding; later bindings are not tried.
    pub fn find_match(&self, url: &Url) -> Result<Option<R>, RouterError> {
        for matcher in &self.matchers {
            if let Some(route) = matcher.match_url(url)? {
                return Ok(Some(route));
            }
        }
        Ok(None)
    }
}

impl<R> fmt::Debug for UrlMatcherGroup<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlMatcherGroup")
            .field("matchers", &self.matchers)
            .finish()
    }
}
