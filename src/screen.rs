//! Screen identity and the presentation-hierarchy seam.

/// An opaque handle to a live screen.
///
/// Screens are owned by the host's [`Hierarchy`] store; the router only ever
/// holds ids and queries relations through the store. Ids are stable for the
/// lifetime of the store, even after a screen leaves the live tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(usize);

impl ScreenId {
    /// Creates an id from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What kind of container (if any) a screen is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenKind {
    /// An ordinary content screen.
    #[default]
    Plain,
    /// A stack container: an ordered, back-navigable list of children whose
    /// last element is the visible top.
    Stack,
    /// A tab container with one selected child.
    Tab,
    /// A split container with one active child.
    Split,
}

/// The externally-owned tree of live screens.
///
/// The router is a pure consumer of this interface: it reads relations to
/// classify a destination and issues the imperative commands below once a
/// transition is resolved. It never owns nodes and never caches relations
/// across calls, so the store is free to mutate between navigations.
///
/// All relations are navigational links, not ownership edges: `presenting`
/// is the back-reference from a modally-presented screen to its presenter,
/// and the enclosing stack/split/tab relations point at the nearest
/// container of each kind. A screen with none of these relations is an
/// orphan (or the root).
pub trait Hierarchy {
    /// The root screen of the application, if any.
    fn root(&self) -> Option<ScreenId>;

    /// The kind of a screen.
    fn kind(&self, id: ScreenId) -> ScreenKind;

    /// The screen that modally presented `id`, if any.
    fn presenting(&self, id: ScreenId) -> Option<ScreenId>;

    /// The screen modally presented by `id`, if any.
    fn presented(&self, id: ScreenId) -> Option<ScreenId>;

    /// The nearest enclosing stack container of `id`, if any.
    fn stack_of(&self, id: ScreenId) -> Option<ScreenId>;

    /// The nearest enclosing split container of `id`, if any.
    fn split_of(&self, id: ScreenId) -> Option<ScreenId>;

    /// The nearest enclosing tab container of `id`, if any.
    fn tab_of(&self, id: ScreenId) -> Option<ScreenId>;

    /// The ordered children of a container screen. Empty for plain screens.
    fn children(&self, id: ScreenId) -> &[ScreenId];

    /// The active child of a container: a stack's top screen, a tab or
    /// split container's selected child.
    fn active_child(&self, id: ScreenId) -> Option<ScreenId>;

    /// Allocates a new detached screen, returning its id.
    ///
    /// Called by [`Destinations`](crate::Destinations) implementations to
    /// construct fresh destination screens; the screen stays outside the
    /// live tree until the router mounts it.
    fn insert(&mut self, kind: ScreenKind) -> ScreenId;

    /// Pushes `screen` onto the stack container `stack`.
    fn push(&mut self, stack: ScreenId, screen: ScreenId, animated: bool);

    /// Replaces the entire content of `stack` with the single `screen`.
    fn set_stack(&mut self, stack: ScreenId, screen: ScreenId, animated: bool);

    /// Presents `screen` modally over `over`.
    fn present(&mut self, over: ScreenId, screen: ScreenId, animated: bool);

    /// Dismisses the whole chain of screens modally presented above `id`.
    /// No-op when `id` presents nothing.
    fn dismiss_presented(&mut self, id: ScreenId, animated: bool);
}
