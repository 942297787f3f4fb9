use mathcheck_formatter::format_number;
use proptest::prelude::*;

proptest! {
    #[test]
    fn fixed_mode_prints_exactly_the_requested_places(
        value in -1.0e6f64..1.0e6,
        places in 0usize..12,
    ) {
        let output = format_number(value, Some(places));
        match output.split_once('.') {
            Some((_, frac)) => prop_assert_eq!(frac.len(), places),
            None => prop_assert_eq!(places, 0),
        }
        prop_assert!(!output.starts_with("-0") || output.trim_start_matches(['-', '0', '.']).len() > 0);
    }

    #[test]
    fn adaptive_mode_keeps_ten_significant_digits(
        mantissa in 1.0f64..10.0,
        exponent in -300i32..300,
        negative in any::<bool>(),
    ) {
        let sign = if negative { -1.0 } else { 1.0 };
        let value = sign * mantissa * 10f64.powi(exponent);
        let output = format_number(value, None);
        let parsed: f64 = output.parse().unwrap();
        let relative = ((parsed - value) / value).abs();
        prop_assert!(relative <= 1e-9, "{} rendered as {}", value, output);
        prop_assert!(!output.contains('+'));
        prop_assert!(!output.contains('e'));
    }
}
