//! Command parameters and "not provided" handling
//!
//! A host action can leave a parameter out, give it a literal, or supply a
//! closure that computes it from current automation state. [`Param`] holds
//! one of the three and [`Param::resolve`] evaluates it. Resolution
//! happens once per dispatched command, before anything is applied.
//!
//! Hosts that still encode "not provided" as magic numbers go through
//! [`ShapeUpdate::from_sentinels`], which turns them into `None` once at
//! the boundary so no sentinel ever reaches the engine.
//!
//! ## Example
//!
//! ```
//! use robo_eyes::{Param, ShapeUpdate};
//!
//! let level = || 12u8;
//! assert_eq!(Param::Computed(&level).resolve(), Some(12));
//! assert_eq!(Param::<u8>::Unset.resolve(), None);
//!
//! let shape = ShapeUpdate::from_sentinels(40, -1, -1, -999, Some(true));
//! assert_eq!(shape.width, Some(40));
//! assert_eq!(shape.height, None);
//! assert_eq!(shape.spacing, None);
//! ```

/// Legacy "not provided" value for inter-eye spacing
///
/// Zero and small negatives are valid spacings, so this one value is
/// reserved instead.
pub const SPACING_UNSET: i32 = -999;

/// A command parameter before resolution
pub enum Param<'a, T> {
    /// Not provided
    Unset,
    /// Fixed value
    Literal(T),
    /// Evaluated when the command is dispatched
    Computed(&'a dyn Fn() -> T),
}

impl<T> Default for Param<'_, T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Copy> Param<'_, T> {
    /// Evaluate the parameter, `None` when unset
    pub fn resolve(&self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Literal(value) => Some(*value),
            Self::Computed(compute) => Some(compute()),
        }
    }

    /// Evaluate the parameter, `default` when unset
    pub fn resolve_or(&self, default: T) -> T {
        self.resolve().unwrap_or(default)
    }
}

impl<T> From<T> for Param<'_, T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl<T> core::fmt::Debug for Param<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unset => write!(f, "Unset"),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => write!(f, "Computed"),
        }
    }
}

/// Resolved geometry change; `None` keeps the engine's current value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeUpdate {
    /// Eye width in pixels
    pub width: Option<u8>,
    /// Eye height in pixels
    pub height: Option<u8>,
    /// Corner radius in pixels
    pub radius: Option<u8>,
    /// Gap between the eyes in pixels, may be zero or negative
    pub spacing: Option<i32>,
    /// Single-eye mode
    pub cyclops: Option<bool>,
}

impl ShapeUpdate {
    /// Convert sentinel-encoded host values
    ///
    /// Negative width, height or radius and a spacing of
    /// [`SPACING_UNSET`] mean "not provided". Sizes above 255 saturate.
    pub fn from_sentinels(
        width: i32,
        height: i32,
        radius: i32,
        spacing: i32,
        cyclops: Option<bool>,
    ) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
            radius: non_negative(radius),
            spacing: (spacing != SPACING_UNSET).then_some(spacing),
            cyclops,
        }
    }

    /// Whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_negative(value: i32) -> Option<u8> {
    if value < 0 {
        None
    } else {
        Some(u8::try_from(value).unwrap_or(u8::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_literal_and_unset() {
        assert_eq!(Param::Literal(7u8).resolve(), Some(7));
        assert_eq!(Param::<u8>::Unset.resolve(), None);
        assert_eq!(Param::<u8>::Unset.resolve_or(3), 3);
        assert!(Param::from(true).resolve_or(false));
    }

    #[test]
    fn test_computed_runs_once_per_resolve() {
        let calls = Cell::new(0u32);
        let compute = || {
            calls.set(calls.get() + 1);
            5i32
        };
        let param = Param::Computed(&compute);
        assert_eq!(param.resolve(), Some(5));
        assert_eq!(calls.get(), 1);
        assert_eq!(param.resolve_or(0), 5);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_all_sentinels_is_empty() {
        let shape = ShapeUpdate::from_sentinels(-1, -1, -1, SPACING_UNSET, None);
        assert!(shape.is_empty());
    }

    #[test]
    fn test_zero_and_negative_spacing_are_values() {
        assert_eq!(
            ShapeUpdate::from_sentinels(-1, -1, -1, 0, None).spacing,
            Some(0)
        );
        assert_eq!(
            ShapeUpdate::from_sentinels(-1, -1, -1, -10, None).spacing,
            Some(-10)
        );
    }

    #[test]
    fn test_zero_geometry_is_applied() {
        let shape = ShapeUpdate::from_sentinels(0, 0, 0, SPACING_UNSET, None);
        assert_eq!(shape.width, Some(0));
        assert_eq!(shape.height, Some(0));
        assert_eq!(shape.radius, Some(0));
    }

    #[test]
    fn test_oversized_geometry_saturates() {
        let shape = ShapeUpdate::from_sentinels(300, 256, 255, SPACING_UNSET, None);
        assert_eq!(shape.width, Some(255));
        assert_eq!(shape.height, Some(255));
        assert_eq!(shape.radius, Some(255));
    }

    #[test]
    fn test_debug_hides_closure() {
        let compute = || 1u8;
        assert_eq!(alloc::format!("{:?}", Param::Computed(&compute)), "Computed");
        assert_eq!(alloc::format!("{:?}", Param::Literal(1u8)), "Literal(1)");
    }
}
