use bigdecimal::BigDecimal;
use num_traits::Signed;

/// Number of fraction digits a catalog price may carry.
pub const PRICE_SCALE: i64 = 2;

/// Prices are stored as `NUMERIC(10, 2)`, leaving eight integer digits.
const PRICE_INTEGER_DIGITS: i64 = 8;

/// Checks a catalog price: non-negative, at most two fraction digits and
/// small enough for the storage column.
///
/// Works on the digit count and exponent only, so inputs like `1e999999999`
/// are rejected without being expanded.
pub fn is_valid_price(price: &BigDecimal) -> bool {
    if price.is_negative() {
        return false;
    }

    let normalized = price.normalized();
    let (_, scale) = normalized.as_bigint_and_exponent();
    if scale > PRICE_SCALE {
        return false;
    }

    normalized.digits() as i64 - scale <= PRICE_INTEGER_DIGITS
}
