//! Coupon eligibility and discount computation

use crate::core::error::Error;
use crate::core::types::DiscountKind;
use crate::models::Coupon;
use crate::Result;

/// Computes the discount a coupon yields for the given cart subtotal.
///
/// Fails with `MinimumNotMet` when the subtotal is below the coupon's
/// minimum order amount. Percentage discounts are capped at the coupon's
/// `max_discount`; fixed-amount discounts are taken as-is, not scaled by
/// the subtotal. Pure and deterministic.
pub fn evaluate(coupon: &Coupon, cart_subtotal: f64) -> Result<f64> {
    if cart_subtotal < coupon.min_order_amount {
        return Err(Error::MinimumNotMet(coupon.min_order_amount));
    }

    let discount = match coupon.kind {
        DiscountKind::Percentage => {
            let percentage_discount = (cart_subtotal * coupon.discount) / 100.0;
            percentage_discount.min(coupon.max_discount)
        }
        DiscountKind::FixedAmount => coupon.discount,
    };

    Ok(discount)
}

/// The store's static catalog of coupons
#[derive(Debug, Clone)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    /// Creates a CouponBook over the given coupons
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// The store's current standing offers
    pub fn standard_offers() -> Self {
        Self::new(vec![
            Coupon::new(
                "1".to_string(),
                "SAVE10".to_string(),
                "Save 10%".to_string(),
                10.0,
                DiscountKind::Percentage,
            )
            .with_description("Get 10% off on orders above $20".to_string())
            .with_min_order_amount(20.0)
            .with_max_discount(50.0),
            Coupon::new(
                "2".to_string(),
                "FIRST5".to_string(),
                "First Order Discount".to_string(),
                5.0,
                DiscountKind::FixedAmount,
            )
            .with_description("Get $5 off on your first order".to_string())
            .with_min_order_amount(15.0),
            Coupon::new(
                "3".to_string(),
                "WELCOME15".to_string(),
                "Welcome Offer".to_string(),
                15.0,
                DiscountKind::Percentage,
            )
            .with_description("Get 15% off on orders above $30".to_string())
            .with_min_order_amount(30.0)
            .with_max_discount(75.0),
            Coupon::new(
                "4".to_string(),
                "FREESHIP".to_string(),
                "Free Shipping".to_string(),
                2.99,
                DiscountKind::FixedAmount,
            )
            .with_description("Free shipping on all orders".to_string()),
        ])
    }

    /// All coupons that can currently be offered to the customer
    pub fn active(&self) -> Vec<&Coupon> {
        self.coupons.iter().filter(|coupon| coupon.active).collect()
    }

    /// Matches a user-entered code against the active coupons.
    ///
    /// Surrounding whitespace is ignored and the match is case-insensitive.
    pub fn find_by_code(&self, code: &str) -> Result<&Coupon> {
        let code = code.trim();
        self.coupons
            .iter()
            .filter(|coupon| coupon.active)
            .find(|coupon| coupon.code.eq_ignore_ascii_case(code))
            .ok_or(Error::InvalidCouponCode)
    }
}

impl Default for CouponBook {
    fn default() -> Self {
        Self::standard_offers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save10() -> Coupon {
        Coupon::new(
            "1".to_string(),
            "SAVE10".to_string(),
            "Save 10%".to_string(),
            10.0,
            DiscountKind::Percentage,
        )
        .with_min_order_amount(20.0)
        .with_max_discount(50.0)
    }

    fn first5() -> Coupon {
        Coupon::new(
            "2".to_string(),
            "FIRST5".to_string(),
            "First Order Discount".to_string(),
            5.0,
            DiscountKind::FixedAmount,
        )
        .with_min_order_amount(15.0)
    }

    #[test]
    fn test_percentage_discount_uncapped() {
        let discount = evaluate(&save10(), 100.0).unwrap();
        assert!((discount - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_discount_hits_cap() {
        // 10% of 600 would be 60; the coupon caps at 50
        let discount = evaluate(&save10(), 600.0).unwrap();
        assert!((discount - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_minimum_not_met() {
        let result = evaluate(&save10(), 15.0);
        assert!(matches!(result, Err(Error::MinimumNotMet(min)) if min == 20.0));
    }

    #[test]
    fn test_fixed_amount_ignores_subtotal_magnitude() {
        let discount = evaluate(&first5(), 15.0).unwrap();
        assert!((discount - 5.0).abs() < 1e-9);

        let discount = evaluate(&first5(), 500.0).unwrap();
        assert!((discount - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let coupon = save10();
        assert_eq!(
            evaluate(&coupon, 100.0).unwrap(),
            evaluate(&coupon, 100.0).unwrap()
        );
    }

    #[test]
    fn test_code_lookup_is_case_insensitive_and_trims() {
        let book = CouponBook::standard_offers();

        assert_eq!(book.find_by_code("save10").unwrap().code, "SAVE10");
        assert_eq!(book.find_by_code("  First5 ").unwrap().code, "FIRST5");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let book = CouponBook::standard_offers();
        assert!(matches!(
            book.find_by_code("BOGUS99"),
            Err(Error::InvalidCouponCode)
        ));
    }

    #[test]
    fn test_inactive_coupons_are_not_selectable() {
        let book = CouponBook::new(vec![save10().inactive(), first5()]);

        assert!(book.find_by_code("SAVE10").is_err());
        assert_eq!(book.active().len(), 1);
    }
}
