//! Sealed device state: price, lock state and credential.
//!
//! Nothing outside this module can name the fields of [`Vault`].  Every
//! mutation goes through a method that validates first and mutates second,
//! so a rejected call never leaves partial state behind.
//!
//! The credential is kept as an HMAC-SHA256 digest keyed by the owning
//! device's name.  Verification uses `hmac_sha256::HMAC::verify`, which
//! compares in constant time.

use log::{debug, warn};

use crate::error::{AccessError, ConstructionError};

/// Longest credential accepted by [`Vault::change_credential`].
pub const MAX_CREDENTIAL_LEN: usize = 16;

/// Discount range accepted by [`Vault::apply_discount`], in percent.
pub const DISCOUNT_RANGE: core::ops::RangeInclusive<f64> = 0.0..=50.0;

pub(in crate::device) struct Vault {
    price: f64,
    locked: bool,
    digest: [u8; 32],
    key: Vec<u8>,
}

impl Vault {
    /// A new vault starts locked.
    pub(in crate::device) fn new(
        owner: &str,
        price: f64,
        credential: &str,
    ) -> Result<Self, ConstructionError> {
        if !price.is_finite() || price < 0.0 {
            return Err(ConstructionError::InvalidPrice(price));
        }
        let key = owner.as_bytes().to_vec();
        let digest = hmac_sha256::HMAC::mac(credential.as_bytes(), &key);
        Ok(Self {
            price,
            locked: true,
            digest,
            key,
        })
    }

    fn matches(&self, credential: &str) -> bool {
        hmac_sha256::HMAC::verify(credential.as_bytes(), &self.key, &self.digest)
    }

    pub(in crate::device) fn unlock(&mut self, credential: &str) -> Result<(), AccessError> {
        if !self.matches(credential) {
            warn!("vault: unlock rejected, credential mismatch");
            return Err(AccessError::CredentialMismatch);
        }
        self.locked = false;
        debug!("vault: unlocked");
        Ok(())
    }

    pub(in crate::device) fn lock(&mut self) {
        self.locked = true;
    }

    pub(in crate::device) fn is_locked(&self) -> bool {
        self.locked
    }

    pub(in crate::device) fn change_credential(
        &mut self,
        old: &str,
        new: &str,
    ) -> Result<(), AccessError> {
        if !self.matches(old) {
            warn!("vault: credential change rejected, current credential mismatch");
            return Err(AccessError::CredentialMismatch);
        }
        if new.is_empty() || new.chars().count() > MAX_CREDENTIAL_LEN {
            warn!("vault: credential change rejected, malformed replacement");
            return Err(AccessError::CredentialMalformed);
        }
        self.digest = hmac_sha256::HMAC::mac(new.as_bytes(), &self.key);
        debug!("vault: credential replaced");
        Ok(())
    }

    /// Multiply the price by `1 - percent/100`.  Calls compound.
    pub(in crate::device) fn apply_discount(&mut self, percent: f64) -> Result<f64, AccessError> {
        if !DISCOUNT_RANGE.contains(&percent) {
            warn!("vault: discount {percent}% rejected");
            return Err(AccessError::DiscountOutOfRange(percent));
        }
        self.price *= 1.0 - percent / 100.0;
        debug!("vault: {percent}% discount applied, price now {:.4}", self.price);
        Ok(self.price)
    }

    /// Display form of the price, rounded to cents.
    pub(in crate::device) fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault(price: f64) -> Vault {
        Vault::new("Apple iPhone 15", price, "1234").unwrap()
    }

    #[test]
    fn starts_locked() {
        assert!(vault(1.0).is_locked());
    }

    #[test]
    fn digest_is_not_plaintext() {
        let v = vault(1.0);
        assert_ne!(&v.digest[..4], b"1234");
    }

    #[test]
    fn unlock_requires_match() {
        let mut v = vault(1.0);
        assert_eq!(v.unlock("0000"), Err(AccessError::CredentialMismatch));
        assert!(v.is_locked());
        v.unlock("1234").unwrap();
        assert!(!v.is_locked());
    }

    #[test]
    fn same_credential_different_owner_differs() {
        let a = Vault::new("a", 1.0, "1234").unwrap();
        let b = Vault::new("b", 1.0, "1234").unwrap();
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn change_credential_rejects_malformed() {
        let mut v = vault(1.0);
        assert_eq!(
            v.change_credential("1234", ""),
            Err(AccessError::CredentialMalformed)
        );
        assert_eq!(
            v.change_credential("1234", &"9".repeat(MAX_CREDENTIAL_LEN + 1)),
            Err(AccessError::CredentialMalformed)
        );
        v.unlock("1234").unwrap();
    }

    #[test]
    fn discount_exact_arithmetic() {
        let mut v = vault(999.0);
        let p = v.apply_discount(10.0).unwrap();
        assert!((p - 899.1).abs() < 1e-9);
        assert!(v.apply_discount(60.0).is_err());
        assert!((v.price - 899.1).abs() < 1e-9);
    }

    #[test]
    fn discount_rejects_nan() {
        let mut v = vault(100.0);
        assert!(v.apply_discount(f64::NAN).is_err());
        assert_eq!(v.price, 100.0);
    }

    #[test]
    fn invalid_price_rejected() {
        assert!(matches!(
            Vault::new("x", -1.0, "1"),
            Err(ConstructionError::InvalidPrice(_))
        ));
        assert!(matches!(
            Vault::new("x", f64::INFINITY, "1"),
            Err(ConstructionError::InvalidPrice(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn discounts_never_increase_price(
            start in 0.0f64..10_000.0,
            steps in proptest::collection::vec(-20.0f64..80.0, 1..20),
        ) {
            let mut v = Vault::new("dev", start, "1234").unwrap();
            let mut expected = start;
            for pct in steps {
                let before = v.price;
                let result = v.apply_discount(pct);
                if DISCOUNT_RANGE.contains(&pct) {
                    expected *= 1.0 - pct / 100.0;
                    prop_assert!(result.is_ok());
                } else {
                    prop_assert!(result.is_err());
                }
                prop_assert!(v.price <= before);
                prop_assert!(v.price >= 0.0);
                prop_assert!((v.price - expected).abs() < 1e-6);
            }
        }
    }
}
