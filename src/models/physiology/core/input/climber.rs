use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::InputError;

/// What the person is doing and wearing.
///
/// Read-only during a step. The validated constructor rejects a non-positive
/// activity level and negative insulation; [`ClimberConfiguration::new_unchecked`]
/// accepts anything and lets the integration produce whatever it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimberConfiguration {
    mets: f64,
    clo: f64,
    is_wet: bool,
    oxygen_support: bool,
}

impl ClimberConfiguration {
    /// Constructs a dry configuration without supplemental oxygen.
    ///
    /// # Errors
    ///
    /// Returns an error if `mets` is not strictly positive or `clo` is negative.
    pub fn new(mets: f64, clo: f64) -> Result<Self, InputError> {
        StrictlyPositive::new(mets).map_err(|source| InputError::Metabolism { mets, source })?;
        NonNegative::new(clo).map_err(|source| InputError::Clothing { clo, source })?;
        Ok(Self::new_unchecked(mets, clo))
    }

    /// Constructs a configuration without validation.
    #[must_use]
    pub fn new_unchecked(mets: f64, clo: f64) -> Self {
        Self {
            mets,
            clo,
            is_wet: false,
            oxygen_support: false,
        }
    }

    /// Sets whether the clothing is soaked (sweat, rain, immersion).
    #[must_use]
    pub fn wet(mut self, is_wet: bool) -> Self {
        self.is_wet = is_wet;
        self
    }

    /// Sets whether the climber breathes supplemental oxygen.
    #[must_use]
    pub fn with_oxygen(mut self, oxygen_support: bool) -> Self {
        self.oxygen_support = oxygen_support;
        self
    }

    /// Requested activity level as a multiple of resting metabolism.
    #[must_use]
    pub fn mets(&self) -> f64 {
        self.mets
    }

    /// Nominal clothing insulation, Clo.
    #[must_use]
    pub fn clo(&self) -> f64 {
        self.clo
    }

    #[must_use]
    pub fn is_wet(&self) -> bool {
        self.is_wet
    }

    #[must_use]
    pub fn oxygen_support(&self) -> bool {
        self.oxygen_support
    }
}

/// Resting in a shell jacket: 1 MET, 1.5 Clo, dry, no oxygen.
impl Default for ClimberConfiguration {
    fn default() -> Self {
        Self::new_unchecked(1.0, 1.5)
    }
}
