//! Transition types describing how a destination screen is reached.

use core::fmt;

/// The mechanism used to place a route's destination screen on screen.
///
/// A transition is declared per route (see [`Route::transition`]) and is a
/// pure function of the route value.
///
/// [`Route::transition`]: crate::Route::transition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Push the destination onto the enclosing stack container.
    ///
    /// Fails with [`RouterError::MissingRequiredStack`] when the current
    /// screen is not inside a stack container.
    ///
    /// [`RouterError::MissingRequiredStack`]: crate::RouterError::MissingRequiredStack
    Push,

    /// Replace the enclosing stack container's entire content with the
    /// destination, leaving it as the single screen on the stack.
    ///
    /// Same stack-container requirement as [`Transition::Push`].
    Set,

    /// Present the destination modally over the current context. Always
    /// valid; the destination must later be explicitly dismissed.
    Modal,

    /// Delegate to the registered [`CustomTransition`] handler, passing the
    /// identifier through verbatim. A `Custom` transition without a
    /// registered handler is a silent no-op.
    ///
    /// [`CustomTransition`]: crate::CustomTransition
    Custom(String),
}

impl Transition {
    /// The variant tag, e.g. `Custom("fade")` is `"custom"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Set => "set",
            Self::Modal => "modal",
            Self::Custom(_) => "custom",
        }
    }

    /// Whether this transition can only be performed from inside a stack
    /// container.
    #[must_use]
    pub const fn requires_stack(&self) -> bool {
        matches!(self, Self::Push | Self::Set)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(identifier) => write!(f, "custom({identifier})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_the_variant_tag() {
        assert_eq!(Transition::Push.name(), "push");
        assert_eq!(Transition::Set.name(), "set");
        assert_eq!(Transition::Modal.name(), "modal");
        assert_eq!(Transition::Custom("fade".into()).name(), "custom");
    }

    #[test]
    fn test_stack_requirement() {
        assert!(Transition::Push.requires_stack());
        assert!(Transition::Set.requires_stack());
        assert!(!Transition::Modal.requires_stack());
        assert!(!Transition::Custom("fade".into()).requires_stack());
    }

    #[test]
    fn test_display_includes_custom_identifier() {
        assert_eq!(Transition::Modal.to_string(), "modal");
        assert_eq!(Transition::Custom("fade".into()).to_string(), "custom(fade)");
    }
}
