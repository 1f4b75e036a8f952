//! Property-based tests for the keypad state machine
//!
//! Arbitrary press sequences must never break the display or pending
//! operation invariants.

use proptest::prelude::*;
use simple_calculator::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// Any button on the keypad
fn button_action_strategy() -> impl Strategy<Value = ButtonAction> {
    prop_oneof![
        4 => digit_strategy().prop_map(ButtonAction::Digit),
        1 => Just(ButtonAction::Decimal),
        2 => operation_strategy().prop_map(ButtonAction::Operator),
        1 => Just(ButtonAction::Equals),
        1 => Just(ButtonAction::SquareRoot),
        1 => Just(ButtonAction::Clear),
    ]
}

/// Digit and decimal point presses only
fn entry_strategy() -> impl Strategy<Value = Vec<ButtonAction>> {
    prop::collection::vec(
        prop_oneof![
            4 => digit_strategy().prop_map(ButtonAction::Digit),
            1 => Just(ButtonAction::Decimal),
        ],
        0..20,
    )
}

fn press_all(calc: &mut Calculator, actions: &[ButtonAction]) {
    for action in actions {
        calc.press(*action);
    }
}

fn enter_number(calc: &mut Calculator, n: u64) {
    for c in n.to_string().chars() {
        calc.press(ButtonAction::Digit(c as u8 - b'0'));
    }
}

// ===== Entry =====

proptest! {
    /// Display is the concatenation of the keys, minus repeated points
    #[test]
    fn prop_entry_concatenates(actions in entry_strategy()) {
        let mut calc = Calculator::new();
        press_all(&mut calc, &actions);

        let mut expected = String::new();
        for action in &actions {
            let label = action.label();
            if label == "." && expected.contains('.') {
                continue;
            }
            expected.push_str(&label);
        }
        prop_assert_eq!(calc.display(), expected.as_str());
        prop_assert!(calc.display().matches('.').count() <= 1);
    }
}

// ===== State invariants over arbitrary sequences =====

proptest! {
    /// "C" resets from any state
    #[test]
    fn prop_clear_always_idles(actions in prop::collection::vec(button_action_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        press_all(&mut calc, &actions);
        calc.press(ButtonAction::Clear);
        prop_assert!(calc.state().is_idle());
    }

    /// An operator on an empty display leaves the pending operation alone
    #[test]
    fn prop_operator_on_empty_display_is_noop(
        actions in prop::collection::vec(button_action_strategy(), 0..40),
        op in operation_strategy(),
    ) {
        let mut calc = Calculator::new();
        press_all(&mut calc, &actions);
        if calc.display().is_empty() {
            let before = calc.state().clone();
            calc.press(ButtonAction::Operator(op));
            prop_assert_eq!(calc.state(), &before);
        }
    }

    /// Computed results never carry trailing zeros or a trailing point
    #[test]
    fn prop_results_are_normalized(actions in prop::collection::vec(button_action_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for action in actions {
            let had_pending = calc.state().pending().is_some();
            calc.press(action);
            let computed = match action {
                ButtonAction::Equals => had_pending,
                ButtonAction::SquareRoot => true,
                _ => false,
            };
            if computed && !calc.is_error() {
                let display = calc.display();
                prop_assert!(!display.ends_with('.'), "trailing point in {}", display);
                if display.contains('.') {
                    prop_assert!(!display.ends_with('0'), "trailing zero in {}", display);
                }
            }
        }
    }

    /// A successful "=" always consumes the pending operation
    #[test]
    fn prop_equals_success_consumes_pending(actions in prop::collection::vec(button_action_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        press_all(&mut calc, &actions);
        if calc.state().pending().is_some() {
            calc.press(ButtonAction::Equals);
            prop_assert!(calc.is_error() || calc.state().pending().is_none());
        }
    }
}

// ===== Arithmetic through the keypad =====

proptest! {
    #[test]
    fn prop_keypad_addition(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let mut calc = Calculator::new();
        enter_number(&mut calc, u64::from(a));
        calc.press(ButtonAction::Operator(Operation::Add));
        enter_number(&mut calc, u64::from(b));
        calc.press(ButtonAction::Equals);
        let expected = (u64::from(a) + u64::from(b)).to_string();
        prop_assert_eq!(calc.display(), expected.as_str());
    }

    #[test]
    fn prop_keypad_subtraction(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let mut calc = Calculator::new();
        enter_number(&mut calc, u64::from(a));
        calc.press(ButtonAction::Operator(Operation::Subtract));
        enter_number(&mut calc, u64::from(b));
        calc.press(ButtonAction::Equals);
        let expected = (i64::from(a) - i64::from(b)).to_string();
        prop_assert_eq!(calc.display(), expected.as_str());
    }

    #[test]
    fn prop_keypad_multiplication(a in 0u32..1_000_000, b in 0u32..1_000_000) {
        let mut calc = Calculator::new();
        enter_number(&mut calc, u64::from(a));
        calc.press(ButtonAction::Operator(Operation::Multiply));
        enter_number(&mut calc, u64::from(b));
        calc.press(ButtonAction::Equals);
        let expected = (u64::from(a) * u64::from(b)).to_string();
        prop_assert_eq!(calc.display(), expected.as_str());
    }

    #[test]
    fn prop_keypad_division_by_zero(a in 0u32..1_000_000) {
        let mut calc = Calculator::new();
        enter_number(&mut calc, u64::from(a));
        calc.press(ButtonAction::Operator(Operation::Divide));
        calc.press(ButtonAction::Digit(0));
        calc.press(ButtonAction::Equals);
        prop_assert!(calc.is_error());
        prop_assert!(calc.state().pending().is_some());
    }

    #[test]
    fn prop_keypad_sqrt_of_square(n in 0u64..100_000) {
        let mut calc = Calculator::new();
        enter_number(&mut calc, n * n);
        calc.press(ButtonAction::SquareRoot);
        let expected = n.to_string();
        prop_assert_eq!(calc.display(), expected.as_str());
    }
}

// ===== Button labels =====

proptest! {
    #[test]
    fn prop_label_round_trip(action in button_action_strategy()) {
        prop_assert_eq!(ButtonAction::from_label(&action.label()), Some(action));
    }
}
