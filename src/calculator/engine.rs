//! State transitions, one per kind of key press.
//!
//! Every transition is total: it takes the current state by value and returns
//! the next one. Computation failures are turned into an error display here
//! and never reach the caller.

use tracing::{debug, trace};

use super::error::CalcError;
use super::format::{display_number, format_number};
use super::ops::{BinaryOp, Digit, MemoryOp, ScientificOp, calculate};
use super::state::{CalculatorState, HistoryEntry, Mode};
use crate::input::Input;

/// Apply one input event.
pub fn reduce(state: CalculatorState, input: Input) -> CalculatorState {
    trace!(?input, display = %state.display_value, "applying input");

    match input {
        Input::Digit(d) => digit(state, d),
        Input::Decimal => decimal(state),
        Input::Backspace => backspace(state),
        Input::Operator(op) => operator(state, op),
        Input::Equals => equals(state),
        Input::Clear => clear(state),
        Input::Scientific(op) => scientific(state, op),
        Input::Memory(op) => memory(state, op),
        Input::SetMode(mode) => set_mode(state, mode),
    }
}

impl CalculatorState {
    /// Method form of [`reduce`].
    pub fn apply(self, input: Input) -> Self {
        reduce(self, input)
    }
}

/// Type a digit.
pub fn digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.waiting_for_second_operand {
        return CalculatorState {
            display_value: digit.to_string(),
            waiting_for_second_operand: false,
            ..state
        };
    }

    let display_value = if state.display_value == "0" {
        digit.to_string()
    } else {
        let mut text = state.display_value;
        text.push(digit.as_char());
        text
    };

    CalculatorState {
        display_value,
        ..state
    }
}

/// Type a decimal point. A second point in the same number is ignored.
pub fn decimal(state: CalculatorState) -> CalculatorState {
    if state.waiting_for_second_operand {
        return CalculatorState {
            display_value: "0.".to_string(),
            waiting_for_second_operand: false,
            ..state
        };
    }

    if state.display_value.contains('.') {
        return state;
    }

    let mut display_value = state.display_value;
    display_value.push('.');
    CalculatorState {
        display_value,
        ..state
    }
}

/// Delete the last typed character.
pub fn backspace(state: CalculatorState) -> CalculatorState {
    if state.waiting_for_second_operand {
        return state;
    }

    let mut display_value = state.display_value;
    display_value.pop();
    // A lone sign is not a number.
    if display_value.is_empty() || display_value == "-" {
        display_value = "0".to_string();
    }

    CalculatorState {
        display_value,
        ..state
    }
}

/// Choose a binary operator, folding any pending operation first.
pub fn operator(state: CalculatorState, op: BinaryOp) -> CalculatorState {
    let input_value = display_number(&state.display_value);

    if let (Some(first), Some(pending)) = (state.first_operand, state.current_operator)
        && !state.waiting_for_second_operand
    {
        return match calculate(first, input_value, pending) {
            Ok(result) => {
                let shown = format_number(result);
                CalculatorState {
                    expression_string: format!("{} {}", shown, op),
                    display_value: shown,
                    first_operand: Some(result),
                    current_operator: Some(op),
                    waiting_for_second_operand: true,
                    ..state
                }
            }
            Err(err) => fail(state, err),
        };
    }

    CalculatorState {
        first_operand: Some(input_value),
        current_operator: Some(op),
        waiting_for_second_operand: true,
        expression_string: format!("{} {}", format_number(input_value), op),
        ..state
    }
}

/// Complete the pending operation. Without one this does nothing.
pub fn equals(state: CalculatorState) -> CalculatorState {
    let (Some(first), Some(op)) = (state.first_operand, state.current_operator) else {
        return state;
    };
    let input_value = display_number(&state.display_value);

    match calculate(first, input_value, op) {
        Ok(result) => {
            let expression = format!(
                "{} {} {} =",
                format_number(first),
                op,
                format_number(input_value)
            );
            let state = record(state, &expression, result);
            CalculatorState {
                display_value: format_number(result),
                expression_string: expression,
                first_operand: Some(result),
                current_operator: None,
                waiting_for_second_operand: true,
                ..state
            }
        }
        Err(err) => fail(state, err),
    }
}

/// Reset the calculation. Memory, history and mode survive.
pub fn clear(state: CalculatorState) -> CalculatorState {
    CalculatorState {
        display_value: "0".to_string(),
        first_operand: None,
        second_operand: None,
        current_operator: None,
        waiting_for_second_operand: false,
        expression_string: String::new(),
        ..state
    }
}

/// Apply a unary function to the display value.
///
/// An error on the display is cleared first, so the function sees `0`.
pub fn scientific(state: CalculatorState, op: ScientificOp) -> CalculatorState {
    let state = if state.is_error() { clear(state) } else { state };
    let input_value = display_number(&state.display_value);

    match op.apply(input_value) {
        Ok(result) => {
            let expression = op.render(&format_number(input_value));
            let state = if op.is_constant() {
                state
            } else {
                record(state, &expression, result)
            };
            CalculatorState {
                display_value: format_number(result),
                expression_string: expression,
                first_operand: Some(result),
                waiting_for_second_operand: true,
                ..state
            }
        }
        Err(err) => fail(state, err),
    }
}

/// Operate on the memory register.
pub fn memory(state: CalculatorState, op: MemoryOp) -> CalculatorState {
    match op {
        MemoryOp::Add => CalculatorState {
            memory: state.memory + display_number(&state.display_value),
            waiting_for_second_operand: true,
            ..state
        },
        MemoryOp::Subtract => CalculatorState {
            memory: state.memory - display_number(&state.display_value),
            waiting_for_second_operand: true,
            ..state
        },
        MemoryOp::Recall => CalculatorState {
            display_value: format_number(state.memory),
            waiting_for_second_operand: true,
            ..state
        },
        MemoryOp::Clear => CalculatorState {
            memory: 0.0,
            ..state
        },
    }
}

/// Switch keypads. The calculation in progress is kept.
pub fn set_mode(state: CalculatorState, mode: Mode) -> CalculatorState {
    CalculatorState { mode, ..state }
}

/// Append a history entry when the current mode records history.
fn record(mut state: CalculatorState, expression: &str, result: f64) -> CalculatorState {
    if state.mode.keeps_history() {
        state.history.push(HistoryEntry {
            expression: expression.to_string(),
            result: format_number(result),
        });
    }
    state
}

/// Put the error on the display and drop the pending operation.
fn fail(state: CalculatorState, err: CalcError) -> CalculatorState {
    debug!(error = %err, display = %state.display_value, "calculation failed");

    let message = err.to_string();
    CalculatorState {
        display_value: message.clone(),
        expression_string: message,
        first_operand: None,
        current_operator: None,
        waiting_for_second_operand: true,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::state::initial_state;

    fn d(n: u8) -> Input {
        Input::Digit(Digit::new(n).unwrap())
    }

    fn press(state: CalculatorState, inputs: &[Input]) -> CalculatorState {
        inputs.iter().fold(state, |state, &input| reduce(state, input))
    }

    fn simple() -> CalculatorState {
        initial_state(Mode::Simple)
    }

    fn scientific_state() -> CalculatorState {
        initial_state(Mode::Scientific)
    }

    #[test]
    fn test_leading_zeros_suppressed() {
        let state = press(simple(), &[d(0), d(0), d(5)]);
        assert_eq!(state.display_value, "5");
    }

    #[test]
    fn test_digits_append() {
        let state = press(simple(), &[d(1), d(2), d(0), d(7)]);
        assert_eq!(state.display_value, "1207");
    }

    #[test]
    fn test_decimal_idempotent() {
        let once = press(simple(), &[d(3), Input::Decimal]);
        assert_eq!(once.display_value, "3.");
        let twice = press(once.clone(), &[Input::Decimal]);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_decimal_while_waiting() {
        let state = press(simple(), &[d(3), Input::Operator(BinaryOp::Add), Input::Decimal]);
        assert_eq!(state.display_value, "0.");
        assert!(!state.waiting_for_second_operand);
    }

    #[test]
    fn test_decimal_on_zero() {
        let state = press(simple(), &[Input::Decimal, d(5)]);
        assert_eq!(state.display_value, "0.5");
    }

    #[test]
    fn test_backspace_converges_to_zero() {
        let state = press(simple(), &[d(5), Input::Backspace]);
        assert_eq!(state.display_value, "0");
        let state = press(state, &[Input::Backspace, Input::Backspace]);
        assert_eq!(state.display_value, "0");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let state = press(simple(), &[d(1), d(2), Input::Decimal, Input::Backspace]);
        assert_eq!(state.display_value, "12");
    }

    #[test]
    fn test_backspace_ignored_while_waiting() {
        let state = press(simple(), &[d(1), d(2), Input::Operator(BinaryOp::Add)]);
        let after = press(state.clone(), &[Input::Backspace]);
        assert_eq!(after, state);
    }

    #[test]
    fn test_backspace_never_leaves_lone_sign() {
        let state = CalculatorState {
            display_value: "-4".to_string(),
            ..simple()
        };
        assert_eq!(backspace(state).display_value, "0");
    }

    #[test]
    fn test_first_operator_captures_display() {
        let state = press(simple(), &[d(1), d(2), Input::Operator(BinaryOp::Multiply)]);
        assert_eq!(state.first_operand, Some(12.0));
        assert_eq!(state.current_operator, Some(BinaryOp::Multiply));
        assert!(state.waiting_for_second_operand);
        assert_eq!(state.expression_string, "12 ×");
    }

    #[test]
    fn test_chained_operators_fold_left_to_right() {
        let add = Input::Operator(BinaryOp::Add);
        let state = press(simple(), &[d(2), add, d(3), add]);
        assert_eq!(state.display_value, "5");
        assert_eq!(state.expression_string, "5 +");

        let state = press(state, &[d(4), Input::Equals]);
        assert_eq!(state.display_value, "9");
        assert_eq!(state.expression_string, "5 + 4 =");
    }

    #[test]
    fn test_changing_operator_does_not_fold() {
        let state = press(
            simple(),
            &[
                d(6),
                Input::Operator(BinaryOp::Add),
                Input::Operator(BinaryOp::Subtract),
                d(2),
                Input::Equals,
            ],
        );
        assert_eq!(state.display_value, "4");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let state = press(simple(), &[d(7)]);
        assert_eq!(equals(state.clone()), state);
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        let state = press(simple(), &[d(2), Input::Operator(BinaryOp::Add), d(2), Input::Equals]);
        assert_eq!(equals(state.clone()), state);
    }

    #[test]
    fn test_divide_by_zero_recovers() {
        let state = press(
            simple(),
            &[d(5), Input::Operator(BinaryOp::Divide), d(0), Input::Equals],
        );
        assert_eq!(state.display_value, "Cannot divide by zero");
        assert_eq!(state.expression_string, "Cannot divide by zero");
        assert_eq!(state.first_operand, None);
        assert_eq!(state.current_operator, None);
        assert!(state.waiting_for_second_operand);

        let state = press(state, &[d(7)]);
        assert_eq!(state.display_value, "7");
    }

    #[test]
    fn test_divide_by_zero_during_fold() {
        let state = press(
            simple(),
            &[
                d(5),
                Input::Operator(BinaryOp::Divide),
                d(0),
                Input::Operator(BinaryOp::Add),
            ],
        );
        assert_eq!(state.display_value, "Cannot divide by zero");
        assert_eq!(state.current_operator, None);
        assert!(state.is_error());
    }

    #[test]
    fn test_power_and_modulo() {
        let state = press(
            scientific_state(),
            &[d(2), Input::Operator(BinaryOp::Power), d(8), Input::Equals],
        );
        assert_eq!(state.display_value, "256");

        let state = press(
            scientific_state(),
            &[d(1), d(7), Input::Operator(BinaryOp::Modulo), d(5), Input::Equals],
        );
        assert_eq!(state.display_value, "2");
    }

    #[test]
    fn test_clear_keeps_memory_and_history() {
        let state = press(
            scientific_state(),
            &[
                d(3),
                Input::Memory(MemoryOp::Add),
                Input::Operator(BinaryOp::Add),
                d(1),
                Input::Equals,
                Input::Clear,
            ],
        );
        assert_eq!(state.display_value, "0");
        assert_eq!(state.expression_string, "");
        assert_eq!(state.first_operand, None);
        assert!(!state.waiting_for_second_operand);
        assert_eq!(state.memory, 3.0);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_sqrt_of_negative() {
        let state = press(
            scientific_state(),
            &[
                d(4),
                Input::Scientific(ScientificOp::Negate),
                Input::Scientific(ScientificOp::Sqrt),
            ],
        );
        assert_eq!(state.display_value, "Invalid input");
        assert_eq!(state.first_operand, None);
        assert!(state.waiting_for_second_operand);
    }

    #[test]
    fn test_scientific_sets_expression_and_history() {
        let state = press(
            scientific_state(),
            &[d(1), d(6), Input::Scientific(ScientificOp::Sqrt)],
        );
        assert_eq!(state.display_value, "4");
        assert_eq!(state.expression_string, "sqrt(16)");
        assert_eq!(state.first_operand, Some(4.0));
        assert!(state.waiting_for_second_operand);
        assert_eq!(
            state.history,
            vec![HistoryEntry {
                expression: "sqrt(16)".to_string(),
                result: "4".to_string(),
            }]
        );
    }

    #[test]
    fn test_constants_skip_history() {
        let state = press(
            scientific_state(),
            &[
                Input::Scientific(ScientificOp::Pi),
                Input::Scientific(ScientificOp::E),
            ],
        );
        assert_eq!(state.display_value, format_number(std::f64::consts::E));
        assert_eq!(state.expression_string, "e");
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_scientific_clears_error_first() {
        let state = press(
            scientific_state(),
            &[
                d(1),
                Input::Operator(BinaryOp::Divide),
                d(0),
                Input::Equals,
                Input::Scientific(ScientificOp::Cos),
            ],
        );
        assert_eq!(state.display_value, "1");
        assert_eq!(state.expression_string, "cos(0)");
    }

    #[test]
    fn test_reciprocal_of_zero() {
        let state = press(scientific_state(), &[Input::Scientific(ScientificOp::Reciprocal)]);
        assert_eq!(state.display_value, "Cannot divide by zero");
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_function_result_feeds_next_operator() {
        let state = press(
            scientific_state(),
            &[
                d(3),
                Input::Scientific(ScientificOp::Square),
                Input::Operator(BinaryOp::Add),
                d(1),
                Input::Equals,
            ],
        );
        assert_eq!(state.display_value, "10");
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[1].expression, "9 + 1 =");
    }

    #[test]
    fn test_memory_round_trip() {
        let state = press(
            scientific_state(),
            &[
                d(9),
                Input::Memory(MemoryOp::Add),
                Input::Clear,
                Input::Memory(MemoryOp::Recall),
            ],
        );
        assert_eq!(state.display_value, "9");
        assert_eq!(state.memory, 9.0);
        assert!(state.waiting_for_second_operand);

        let state = memory(state, MemoryOp::Clear);
        assert_eq!(state.memory, 0.0);
        assert_eq!(state.display_value, "9");
    }

    #[test]
    fn test_memory_subtract() {
        let state = press(
            scientific_state(),
            &[d(5), Input::Memory(MemoryOp::Subtract), d(2), Input::Memory(MemoryOp::Add)],
        );
        assert_eq!(state.memory, -3.0);
        assert_eq!(state.display_value, "2");
    }

    #[test]
    fn test_simple_mode_keeps_no_history() {
        let state = press(simple(), &[d(2), Input::Operator(BinaryOp::Add), d(2), Input::Equals]);
        assert_eq!(state.display_value, "4");
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_set_mode_preserves_calculation() {
        let state = press(simple(), &[d(8), Input::Operator(BinaryOp::Subtract), d(3)]);
        let switched = set_mode(state.clone(), Mode::Scientific);
        assert_eq!(switched.mode, Mode::Scientific);
        assert_eq!(
            CalculatorState {
                mode: Mode::Simple,
                ..switched.clone()
            },
            state
        );
        assert_eq!(equals(switched).display_value, "5");
    }
}
