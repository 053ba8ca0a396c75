//! An arena-backed implementation of [`Hierarchy`].

use crate::screen::{Hierarchy, ScreenId, ScreenKind};

/// One screen's relations inside the arena.
///
/// All links are ids, so a modally-presented pair never forms an ownership
/// cycle: `presenting` is the back-reference to the presenter, `presented`
/// the forward reference, and `parent` the enclosing container (containment
/// only, never crossing a presentation boundary).
#[derive(Debug, Default)]
struct Node {
    kind: ScreenKind,
    presenting: Option<ScreenId>,
    presented: Option<ScreenId>,
    parent: Option<ScreenId>,
    children: Vec<ScreenId>,
    active: usize,
}

/// The default presentation-hierarchy store: a `Vec` arena of screens with
/// id-based relations.
///
/// Hosts build the initial tree with [`insert`](Hierarchy::insert),
/// [`set_root`](ScreenTree::set_root), [`add_child`](ScreenTree::add_child)
/// and [`select`](ScreenTree::select); the router drives the rest through
/// the [`Hierarchy`] commands. Screens detached by a stack reset or a
/// dismissal keep their ids and can be mounted again later.
#[derive(Debug, Default)]
pub struct ScreenTree {
    nodes: Vec<Node>,
    root: Option<ScreenId>,
}

impl ScreenTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as the application's root screen.
    pub fn set_root(&mut self, id: ScreenId) {
        self.root = Some(id);
    }

    /// Adds `child` to the container `container`.
    ///
    /// For a stack this is equivalent to a push; for tab and split
    /// containers the first child added becomes the selected one.
    ///
    /// # Panics
    ///
    /// Panics if `container` is a plain screen.
    pub fn add_child(&mut self, container: ScreenId, child: ScreenId) {
        assert!(
            self.node(container).kind != ScreenKind::Plain,
            "cannot add a child to a plain screen"
        );
        self.node_mut(child).parent = Some(container);
        self.node_mut(container).children.push(child);
    }

    /// Selects the active child of a tab or split container by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn select(&mut self, container: ScreenId, index: usize) {
        assert!(
            index < self.node(container).children.len(),
            "selected child index out of bounds"
        );
        self.node_mut(container).active = index;
    }

    fn node(&self, id: ScreenId) -> &Node {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: ScreenId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Nearest enclosing container of the given kind, walking containment
    /// parents only.
    fn enclosing(&self, id: ScreenId, kind: ScreenKind) -> Option<ScreenId> {
        let mut cursor = self.node(id).parent;
        while let Some(parent) = cursor {
            if self.node(parent).kind == kind {
                return Some(parent);
            }
            cursor = self.node(parent).parent;
        }
        None
    }

    fn detach(&mut self, id: ScreenId) {
        self.node_mut(id).parent = None;
    }
}

impl Hierarchy for ScreenTree {
    fn root(&self) -> Option<ScreenId> {
        self.root
    }

    fn kind(&self, id: ScreenId) -> ScreenKind {
        self.node(id).kind
    }

    fn presenting(&self, id: ScreenId) -> Option<ScreenId> {
        self.node(id).presenting
    }

    fn presented(&self, id: ScreenId) -> Option<ScreenId> {
        self.node(id).presented
    }

    fn stack_of(&self, id: ScreenId) -> Option<ScreenId> {
        self.enclosing(id, ScreenKind::Stack)
    }

    fn split_of(&self, id: ScreenId) -> Option<ScreenId> {
        self.enclosing(id, ScreenKind::Split)
    }

    fn tab_of(&self, id: ScreenId) -> Option<ScreenId> {
        self.enclosing(id, ScreenKind::Tab)
    }

    fn children(&self, id: ScreenId) -> &[ScreenId] {
        &self.node(id).children
    }

    fn active_child(&self, id: ScreenId) -> Option<ScreenId> {
        let node = self.node(id);
        match node.kind {
            ScreenKind::Plain => None,
            // A stack's visible child is its top.
            ScreenKind::Stack => node.children.last().copied(),
            ScreenKind::Tab | ScreenKind::Split => node.children.get(node.active).copied(),
        }
    }

    fn insert(&mut self, kind: ScreenKind) -> ScreenId {
        let id = ScreenId::new(self.nodes.len());
        self.nodes.push(Node {
            kind,
            ..Node::default()
        });
        id
    }

    fn push(&mut self, stack: ScreenId, screen: ScreenId, _animated: bool) {
        debug_assert!(
            !self.node(stack).children.contains(&screen),
            "screen is already on the stack"
        );
        self.node_mut(screen).parent = Some(stack);
        self.node_mut(stack).children.push(screen);
    }

    fn set_stack(&mut self, stack: ScreenId, screen: ScreenId, _animated: bool) {
        let old = core::mem::take(&mut self.node_mut(stack).children);
        for child in old {
            self.detach(child);
        }
        self.node_mut(screen).parent = Some(stack);
        self.node_mut(stack).children = vec![screen];
    }

    fn present(&mut self, over: ScreenId, screen: ScreenId, _animated: bool) {
        debug_assert!(
            self.node(over).presented.is_none(),
            "screen is already presenting"
        );
        self.node_mut(over).presented = Some(screen);
        self.node_mut(screen).presenting = Some(over);
    }

    fn dismiss_presented(&mut self, id: ScreenId, _animated: bool) {
        let mut cursor = id;
        while let Some(presented) = self.node_mut(cursor).presented.take() {
            self.node_mut(presented).presenting = None;
            cursor = presented;
        }
    }
}
