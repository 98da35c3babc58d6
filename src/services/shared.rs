pub mod env;
pub mod logger;

use rust_decimal::Decimal;

pub fn round_to_decimals(input: Decimal) -> Decimal {
    input.round_dp(2)
}
