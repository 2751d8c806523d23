//! The validated bundle of stochastic financial inputs.

use serde::Serialize;

use crate::distribution::{AssumptionError, Distribution};

/// Named stochastic inputs composed by the financial model.
///
/// Immutable once constructed: [`AssumptionSet::new`] rejects out-of-domain
/// parameters, so a value of this type is always safe to simulate from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssumptionSet {
    base_revenue: f64,
    growth: Distribution,
    cost_ratio: Distribution,
    discount_rate: Distribution,
    tax_rate: f64,
}

impl AssumptionSet {
    /// Build a validated assumption set.
    ///
    /// # Errors
    /// [`AssumptionError`] when base revenue is non-positive, the tax rate is
    /// outside `[0, 1)`, or any distribution's parameters are out of domain.
    pub fn new(
        base_revenue: f64,
        growth: Distribution,
        cost_ratio: Distribution,
        discount_rate: Distribution,
        tax_rate: f64,
    ) -> Result<Self, AssumptionError> {
        if !base_revenue.is_finite() || base_revenue <= 0.0 {
            return Err(AssumptionError::BaseRevenue(base_revenue));
        }
        if !tax_rate.is_finite() || !(0.0..1.0).contains(&tax_rate) {
            return Err(AssumptionError::TaxRate(tax_rate));
        }
        growth.validate()?;
        cost_ratio.validate()?;
        discount_rate.validate()?;

        Ok(Self {
            base_revenue,
            growth,
            cost_ratio,
            discount_rate,
            tax_rate,
        })
    }

    /// Copy of this set with a different growth distribution, revalidated.
    pub fn with_growth(&self, growth: Distribution) -> Result<Self, AssumptionError> {
        Self::new(
            self.base_revenue,
            growth,
            self.cost_ratio,
            self.discount_rate,
            self.tax_rate,
        )
    }

    pub fn base_revenue(&self) -> f64 {
        self.base_revenue
    }

    pub fn growth(&self) -> Distribution {
        self.growth
    }

    pub fn cost_ratio(&self) -> Distribution {
        self.cost_ratio
    }

    pub fn discount_rate(&self) -> Distribution {
        self.discount_rate
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }
}
