//! Token value conversion

use crate::shared::error::LinkError;

/// Convert a token amount using the given unit price: `token_value / token_price`.
///
/// The price is not validated. A zero price yields an infinite result (or NaN
/// for a zero value), following IEEE-754 division.
pub fn convert_value(token_value: f64, token_price: f64) -> f64 {
    token_value / token_price
}

/// Like [`convert_value`], but rejects a price that is zero, negative or not finite.
pub fn try_convert_value(token_value: f64, token_price: f64) -> Result<f64, LinkError> {
    if !token_price.is_finite() || token_price <= 0.0 {
        return Err(LinkError::InvalidPrice(token_price));
    }
    Ok(convert_value(token_value, token_price))
}
