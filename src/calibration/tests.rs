use crate::calibration::{compare_strategies, parse_lines, solve_equations, sum_satisfiable};
use crate::equation::EquationError;
use crate::solver::{OperatorSet, Strategy};

const SAMPLE: [&str; 9] = [
    "190: 10 19",
    "3267: 81 40 27",
    "83: 17 5",
    "156: 15 6",
    "7290: 6 8 6 15",
    "161011: 16 10 13",
    "192: 17 8 14",
    "21037: 9 7 18 13",
    "292: 11 6 16 20",
];

#[test]
fn test_basic_aggregate() {
    let lines = ["3: 3", "9876: 6 6 823", "4: 1 1 4 2 3"];
    let result = sum_satisfiable(lines, Strategy::Breadth, OperatorSet::Basic);
    assert!(result.is_ok());
    if let Ok(total) = result {
        assert_eq!(total, 9879);
    }
}

#[test]
fn test_sample_input_basic_mode() {
    for strategy in Strategy::ALL {
        let result = sum_satisfiable(SAMPLE, strategy, OperatorSet::Basic);
        assert_eq!(result, Ok(3749), "{} strategy", strategy);
    }
}

#[test]
fn test_sample_input_extended_mode() {
    for strategy in Strategy::ALL {
        let result = sum_satisfiable(SAMPLE, strategy, OperatorSet::Extended);
        assert_eq!(result, Ok(11387), "{} strategy", strategy);
    }
}

#[test]
fn test_blank_lines_are_skipped() {
    let lines = ["", "190: 10 19", "   ", "83: 17 5", ""];
    let result = parse_lines(lines);
    assert!(result.is_ok());
    if let Ok(equations) = result {
        assert_eq!(equations.len(), 2);
    }
}

#[test]
fn test_malformed_line_aborts_the_run() {
    let lines = ["190: 10 19", "not an equation", "83: 17 5"];
    let result = sum_satisfiable(lines, Strategy::Breadth, OperatorSet::Basic);
    assert!(matches!(result, Err(EquationError::MalformedLine(_))));
}

#[test]
fn test_solve_equations_empty_input() {
    assert_eq!(
        solve_equations(&[], Strategy::Buffered, OperatorSet::Extended),
        0
    );
}

#[test]
fn test_compare_strategies_agree_end_to_end() {
    let equations = parse_lines(SAMPLE).unwrap_or_default();
    let reports = compare_strategies(&equations, OperatorSet::Extended);

    assert_eq!(reports.len(), Strategy::ALL.len());
    for report in &reports {
        assert_eq!(report.total, 11387, "{} strategy", report.strategy);
    }
}
