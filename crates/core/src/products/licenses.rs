//! Software Licenses

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::products::{ProductUuid, ValidationError, validation};

/// Software license record. Licenses are never shipped, so their weight is
/// always absent or zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareLicense {
    /// License identifier
    pub uuid: ProductUuid,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Always `None` or zero
    pub weight: Option<Decimal>,

    /// When the license was added to the catalog
    pub created_at: Timestamp,

    /// When the license was last written
    pub updated_at: Timestamp,
}

/// Software license write payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareLicenseData {
    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Must be `None` or zero
    pub weight: Option<Decimal>,
}

impl SoftwareLicenseData {
    /// Validate the payload, returning it with normalised fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LicenseWeight`] for any weight other than
    /// `None` or zero, or another [`ValidationError`] for blank names and
    /// out-of-range prices.
    pub fn validate(self) -> Result<Self, ValidationError> {
        if self.weight.is_some_and(|weight| !weight.is_zero()) {
            return Err(ValidationError::LicenseWeight);
        }

        Ok(Self {
            name: validation::text("name", self.name)?,
            price: validation::price(self.price)?,
            weight: validation::weight(self.weight)?,
        })
    }
}

impl SoftwareLicense {
    /// Build a validated license.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `data` fails validation.
    pub fn new(
        uuid: ProductUuid,
        data: SoftwareLicenseData,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let data = data.validate()?;

        Ok(Self {
            uuid,
            name: data.name,
            price: data.price,
            weight: data.weight,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every writable field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `data` fails validation; the license is left untouched.
    pub fn replace(
        &mut self,
        data: SoftwareLicenseData,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        let data = data.validate()?;

        self.name = data.name;
        self.price = data.price;
        self.weight = data.weight;
        self.updated_at = now;

        Ok(())
    }

    /// Human-readable label
    pub fn display_name(&self) -> String {
        format!("License: {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use testresult::TestResult;

    use super::*;

    fn data(weight: Option<Decimal>) -> SoftwareLicenseData {
        SoftwareLicenseData {
            name: "Suite D".to_string(),
            price: Decimal::new(4900, 2),
            weight,
        }
    }

    #[test]
    fn weight_is_rejected() -> TestResult {
        let result = SoftwareLicense::new(
            ProductUuid::new(),
            data(Some(Decimal::from_str("1.5")?)),
            Timestamp::UNIX_EPOCH,
        );

        assert_eq!(result, Err(ValidationError::LicenseWeight));

        Ok(())
    }

    #[test]
    fn zero_or_absent_weight_is_accepted() -> TestResult {
        let without = SoftwareLicense::new(ProductUuid::new(), data(None), Timestamp::UNIX_EPOCH)?;
        let zero = SoftwareLicense::new(
            ProductUuid::new(),
            data(Some(Decimal::ZERO)),
            Timestamp::UNIX_EPOCH,
        )?;

        assert_eq!(without.weight, None);
        assert_eq!(zero.weight, Some(Decimal::ZERO));

        Ok(())
    }

    #[test]
    fn replace_with_weight_is_rejected() -> TestResult {
        let mut license = SoftwareLicense::new(ProductUuid::new(), data(None), Timestamp::UNIX_EPOCH)?;

        let result = license.replace(data(Some(Decimal::ONE)), Timestamp::now());

        assert_eq!(result, Err(ValidationError::LicenseWeight));
        assert_eq!(license.weight, None);

        Ok(())
    }

    #[test]
    fn display_name_uses_name() -> TestResult {
        let license = SoftwareLicense::new(ProductUuid::new(), data(None), Timestamp::UNIX_EPOCH)?;

        assert_eq!(license.display_name(), "License: Suite D");

        Ok(())
    }
}
