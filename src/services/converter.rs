use rust_decimal::Decimal;
use tracing::debug;

use super::{
    currencies::CurrencyCode, errors::FxError, market_data::fx_rates::RateTable,
    shared::round_to_decimals,
};

/// Converts `amount` by pivoting through the rate table's base currency and
/// rounds the result to two decimals.
///
/// Fails with [`FxError::UnsupportedCurrency`] when either code is missing
/// from `rates`, without saying which one, and with
/// [`FxError::AmountOutOfRange`] when the result overflows.
pub fn convert_currency(
    amount: Decimal,
    currency_from: &CurrencyCode,
    currency_to: &CurrencyCode,
    rates: &RateTable,
) -> Result<Decimal, FxError> {
    let unsupported = || FxError::UnsupportedCurrency {
        from: currency_from.clone(),
        to: currency_to.clone(),
    };
    let out_of_range = || FxError::AmountOutOfRange {
        amount,
        from: currency_from.clone(),
        to: currency_to.clone(),
    };

    let amount_in_base = if currency_from == rates.base() {
        amount
    } else {
        let rate_from = rates.rate(currency_from).ok_or_else(unsupported)?;
        amount.checked_div(rate_from).ok_or_else(out_of_range)?
    };

    let rate_to = rates.rate(currency_to).ok_or_else(unsupported)?;
    let converted_amount = amount_in_base
        .checked_mul(rate_to)
        .ok_or_else(out_of_range)?;

    debug!(
        "{} {} -> {} {} via {}",
        amount,
        currency_from,
        converted_amount,
        currency_to,
        rates.base()
    );
    Ok(round_to_decimals(converted_amount))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn code(c: &str) -> CurrencyCode {
        CurrencyCode::new(c)
    }

    fn usd_rates(pairs: &[(&str, Decimal)]) -> RateTable {
        RateTable::new(
            code("USD"),
            pairs.iter().map(|(c, rate)| (code(c), *rate)),
        )
    }

    #[test]
    fn converts_from_the_base_currency() {
        let rates = usd_rates(&[("NGN", dec!(1500))]);
        let result = convert_currency(dec!(100), &code("USD"), &code("NGN"), &rates).unwrap();
        assert_eq!(result, dec!(150000.00));
    }

    #[test]
    fn converts_into_the_base_currency_with_rounding() {
        let rates = usd_rates(&[("NGN", dec!(1500))]);
        let result = convert_currency(dec!(100), &code("NGN"), &code("USD"), &rates).unwrap();
        assert_eq!(result, dec!(0.07));
    }

    #[test]
    fn cross_rates_pivot_through_the_base() {
        let rates = usd_rates(&[("EUR", dec!(0.8)), ("GBP", dec!(0.5))]);
        let result = convert_currency(dec!(40), &code("EUR"), &code("GBP"), &rates).unwrap();
        assert_eq!(result, dec!(25.00));
    }

    #[test]
    fn same_code_conversion_returns_the_rounded_amount() {
        let rates = usd_rates(&[("JPY", dec!(149.37)), ("KES", dec!(3)), ("USD", dec!(1))]);
        for (c, amount, expected) in [
            ("JPY", dec!(1234.567), dec!(1234.57)),
            ("KES", dec!(100), dec!(100.00)),
            ("KES", dec!(0.333), dec!(0.33)),
            ("USD", dec!(19.999), dec!(20.00)),
        ] {
            let result = convert_currency(amount, &code(c), &code(c), &rates).unwrap();
            assert_eq!(result, expected, "converting {amount} {c} to itself");
        }
    }

    #[test]
    fn missing_codes_fail_regardless_of_amount() {
        let rates = usd_rates(&[("NGN", dec!(1500)), ("USD", dec!(1))]);
        for amount in [dec!(0.01), dec!(1), dec!(1000000)] {
            let missing_source = convert_currency(amount, &code("XYZ"), &code("NGN"), &rates);
            let missing_target = convert_currency(amount, &code("NGN"), &code("XYZ"), &rates);
            let missing_target_from_base =
                convert_currency(amount, &code("USD"), &code("XYZ"), &rates);

            for result in [missing_source, missing_target, missing_target_from_base] {
                assert!(result.unwrap_err().is_unsupported_currency());
            }
        }
    }

    #[test]
    fn overflowing_results_are_out_of_range_not_unsupported() {
        let rates = usd_rates(&[("NGN", dec!(1500)), ("VND", dec!(0.0000001))]);
        let huge = dec!(100000000000000000000000000);

        let err = convert_currency(huge, &code("USD"), &code("NGN"), &rates).unwrap_err();
        assert!(matches!(err, FxError::AmountOutOfRange { .. }));

        let err = convert_currency(huge, &code("VND"), &code("USD"), &rates).unwrap_err();
        assert!(matches!(err, FxError::AmountOutOfRange { .. }));
        assert!(!err.is_unsupported_currency());
    }

    #[test]
    fn failure_carries_both_codes() {
        let rates = usd_rates(&[("NGN", dec!(1500))]);
        let err = convert_currency(dec!(5), &code("ABC"), &code("NGN"), &rates).unwrap_err();
        match err {
            FxError::UnsupportedCurrency { from, to } => {
                assert_eq!(from.as_str(), "ABC");
                assert_eq!(to.as_str(), "NGN");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
