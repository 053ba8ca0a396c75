//! Hierarchy inspection: where a destination sits relative to the current
//! screen.

use tracing::trace;

use crate::screen::{Hierarchy, ScreenId, ScreenKind};

/// The relationship between a candidate destination and the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The candidate is the current screen itself, or the stack container
    /// that owns it as its visible top. A no-op destination.
    Current,
    /// The candidate is an ancestor of the current screen (or sits as a
    /// direct child of one of its ancestors).
    Ancestor {
        /// The presenter of the last presenting relation the walk crossed:
        /// the modal chain covering the candidate hangs off this screen,
        /// which may sit below the container the candidate was found in.
        /// Dismissing its presented chain performs the unwind. `None` when
        /// the candidate was reached through containment alone and no
        /// dismissal is needed.
        unwind_from: Option<ScreenId>,
    },
    /// The candidate is live in the hierarchy but not an ancestor of the
    /// current screen; no route to it can be inferred.
    ActiveElsewhere,
    /// The candidate is not part of the live hierarchy: a newly constructed
    /// screen awaiting insertion.
    Fresh,
}

/// The next screen up the ancestor chain, and whether the hop crosses a
/// presenting relation.
///
/// Relations are tried in priority order: presenting screen, enclosing
/// stack, enclosing split, enclosing tab. Returns `None` for an orphan.
fn next_ancestor(hierarchy: &dyn Hierarchy, id: ScreenId) -> Option<(ScreenId, bool)> {
    if let Some(presenter) = hierarchy.presenting(id) {
        return Some((presenter, true));
    }
    hierarchy
        .stack_of(id)
        .or_else(|| hierarchy.split_of(id))
        .or_else(|| hierarchy.tab_of(id))
        .map(|ancestor| (ancestor, false))
}

/// The root-level ancestor of `id`.
fn root_ancestor(hierarchy: &dyn Hierarchy, id: ScreenId) -> ScreenId {
    let mut cursor = id;
    while let Some((ancestor, _)) = next_ancestor(hierarchy, cursor) {
        cursor = ancestor;
    }
    cursor
}

/// Whether `id` is part of the live hierarchy, i.e. its ancestor chain ends
/// at the application root.
#[must_use]
pub fn is_active(hierarchy: &dyn Hierarchy, id: ScreenId) -> bool {
    hierarchy.root() == Some(root_ancestor(hierarchy, id))
}

/// Walks `current`'s ancestor chain looking for `candidate`, either as an
/// ancestor itself or as a direct child of one (a sibling slot in a stack,
/// tab or split container). The walk is transitive.
///
/// On success returns the presenter of the last presenting relation crossed
/// on the way, if any: the screen whose presented chain covers the
/// candidate. It can sit below the container the candidate was found in, so
/// it is recorded hop by hop rather than derived from the find site.
fn find_ancestor(
    hierarchy: &dyn Hierarchy,
    current: ScreenId,
    candidate: ScreenId,
) -> Option<Option<ScreenId>> {
    let mut unwind_from = None;
    let mut cursor = current;
    while let Some((ancestor, via_presentation)) = next_ancestor(hierarchy, cursor) {
        if via_presentation {
            unwind_from = Some(ancestor);
        }
        if ancestor == candidate || hierarchy.children(ancestor).contains(&candidate) {
            return Some(unwind_from);
        }
        cursor = ancestor;
    }
    None
}

/// The visible leaf screen reached from `base`: the presented screen if one
/// is up, otherwise a container's active child, recursively.
#[must_use]
pub fn top_screen(hierarchy: &dyn Hierarchy, base: ScreenId) -> ScreenId {
    if let Some(presented) = hierarchy.presented(base) {
        return top_screen(hierarchy, presented);
    }
    if hierarchy.kind(base) != ScreenKind::Plain {
        if let Some(active) = hierarchy.active_child(base) {
            return top_screen(hierarchy, active);
        }
    }
    base
}

/// Classifies `candidate` relative to `current` in the live hierarchy.
#[must_use]
pub fn classify(hierarchy: &dyn Hierarchy, current: ScreenId, candidate: ScreenId) -> Placement {
    if candidate == current || hierarchy.stack_of(current) == Some(candidate) {
        return Placement::Current;
    }

    let placement = if is_active(hierarchy, candidate) {
        find_ancestor(hierarchy, current, candidate)
            .map_or(Placement::ActiveElsewhere, |unwind_from| {
                Placement::Ancestor { unwind_from }
            })
    } else {
        Placement::Fresh
    };

    trace!(?current, ?candidate, ?placement, "classified destination");
    placement
}
