// ============================================================================
// Property Tests
// Digit-array arithmetic checked against rust_decimal and native integers
// ============================================================================

use digit_calculator::engine::resolve_signs;
use digit_calculator::prelude::*;
use proptest::prelude::*;
use quickcheck::quickcheck;
use rust_decimal::Decimal;
use std::sync::Arc;

fn decimal() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000, 0u32..5)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn sequence(value: Decimal) -> DigitSequence {
    DigitSequence::from_decimal(value, b'.').unwrap()
}

/// Same path the calculator takes on `=`
fn evaluate(operation: Operation, first: &DigitSequence, second: &DigitSequence) -> DigitSequence {
    let notation = Notation::default();
    let resolved = resolve_signs(operation, first.clone(), second.clone()).unwrap();
    OperatorTable::standard()
        .find(resolved.operation)
        .unwrap()
        .compute(&notation, &resolved.first, &resolved.second)
        .unwrap()
}

proptest! {
    #[test]
    fn leveled_operands_line_up(a in decimal(), b in decimal()) {
        let (first, second) = level_up_numbers(&sequence(a), &sequence(b));

        prop_assert_eq!(first.len(), second.len());
        let (first_int, first_frac) = first.split_at_separator();
        let (second_int, second_frac) = second.split_at_separator();
        prop_assert_eq!(first_int.len(), second_int.len());
        prop_assert_eq!(first_frac.len(), second_frac.len());

        prop_assert_eq!(first.to_decimal(Radix::DECIMAL).unwrap(), a);
        prop_assert_eq!(second.to_decimal(Radix::DECIMAL).unwrap(), b);
    }

    #[test]
    fn addition_matches_decimal(a in decimal(), b in decimal()) {
        let sum = evaluate(Operation::Add, &sequence(a), &sequence(b));
        prop_assert_eq!(sum.to_decimal(Radix::DECIMAL).unwrap(), a + b);
    }

    #[test]
    fn subtraction_matches_decimal(a in decimal(), b in decimal()) {
        let difference = evaluate(Operation::Subtract, &sequence(a), &sequence(b));
        prop_assert_eq!(difference.to_decimal(Radix::DECIMAL).unwrap(), a - b);
    }

    #[test]
    fn addition_commutes(a in decimal(), b in decimal()) {
        let (a, b) = (sequence(a), sequence(b));
        prop_assert_eq!(evaluate(Operation::Add, &a, &b), evaluate(Operation::Add, &b, &a));
    }

    #[test]
    fn results_have_no_padding(a in decimal(), b in decimal()) {
        let sum = evaluate(Operation::Add, &sequence(a), &sequence(b));
        let (integer, fraction) = sum.split_at_separator();

        prop_assert!(integer.len() == 1 || integer[0] != b'0');
        prop_assert!(fraction.is_empty() || fraction.iter().any(|&s| s != b'0'));
    }

    #[test]
    fn hexadecimal_sum_matches_integers(a in any::<u32>(), b in any::<u32>()) {
        let mut calc = CalculatorBuilder::hexadecimal()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        calc.submit_str(&format!("{:X}+{:X}=", a, b)).unwrap();

        prop_assert_eq!(calc.first().digits(), format!("{:X}", u64::from(a) + u64::from(b)));
    }

    #[test]
    fn keyed_session_matches_decimal(
        a in 0u32..1_000_000,
        b in 0u32..1_000_000,
        negate in any::<bool>(),
    ) {
        let mut calc =
            create_from_config(CalculatorConfig::standard(), Arc::new(NoOpEventHandler)).unwrap();
        calc.submit_str(&a.to_string()).unwrap();
        if negate {
            calc.toggle_sign();
        }
        calc.submit_str(&format!("+{}=", b)).unwrap();

        let a = if negate { -i64::from(a) } else { i64::from(a) };
        let expected = Decimal::from(a + i64::from(b));
        prop_assert_eq!(calc.first().to_decimal(Radix::DECIMAL).unwrap(), expected);
    }
}

quickcheck! {
    fn typed_digits_drop_leading_zeroes(keys: Vec<u8>) -> bool {
        let typed: String = keys.iter().take(13).map(|k| char::from(b'0' + k % 10)).collect();

        let mut calc =
            create_from_config(CalculatorConfig::standard(), Arc::new(NoOpEventHandler)).unwrap();
        calc.submit_str(&typed).unwrap();

        let expected = match typed.trim_start_matches('0') {
            "" if typed.is_empty() => String::new(),
            "" => "0".to_string(),
            rest => rest.to_string(),
        };
        calc.first().digits() == expected
    }
}
