use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a fraction lies in the closed unit interval: `0 ≤ x ≤ 1`.
///
/// Used for fractions such as a segment's share of whole-body metabolism or
/// its solar exposure weight.
///
/// # Examples
///
/// ```
/// use thermoreg_models::support::constraint::{Constrained, UnitInterval};
///
/// let share = Constrained::<_, UnitInterval>::new(0.3).unwrap();
/// assert_eq!(share.into_inner(), 0.3);
///
/// assert!(UnitInterval::new(-0.01).is_err());
/// assert!(UnitInterval::new(1.01).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<f64, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value lies outside `[0, 1]` or is not a number.
    pub fn new(value: f64) -> Result<Constrained<f64, UnitInterval>, ConstraintError> {
        Constrained::<f64, UnitInterval>::new(value)
    }
}

impl Constraint<f64> for UnitInterval {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&1.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
