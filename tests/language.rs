use std::fs;

use numerate::{
    Calculator, Options,
    ast::Expr,
    calculate,
    error::{CalcError, ErrorCategory},
    interpreter::registry::{
        BUILTIN_CONSTANTS, BUILTIN_FUNCTIONS, Builtins, NumericFn, Registry, builtin,
    },
    lex, parse,
};
use walkdir::WalkDir;

/// One line of a `.calc` case file.
enum Expectation {
    Value(f64),
    Failure { code: String, position: Option<usize> },
}

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "calc")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, line) in content.lines().enumerate() {
            let Some((source, expectation)) = parse_case(line) else {
                continue;
            };
            count += 1;
            let result = calculate(source);

            match expectation {
                Expectation::Value(expected) => match result {
                    Ok(value) => assert!(same_number(value, expected),
                                         "{path:?}:{}: {source:?} gave {value}, expected \
                                          {expected}",
                                         line_number + 1),
                    Err(e) => panic!("{path:?}:{}: {source:?} failed: {e}", line_number + 1),
                },
                Expectation::Failure { code, position } => match result {
                    Ok(value) => panic!("{path:?}:{}: {source:?} gave {value}, expected {code}",
                                        line_number + 1),
                    Err(e) => {
                        assert_eq!((e.code(), e.position),
                                   (code.as_str(), position),
                                   "{path:?}:{}: {source:?} failed with {e}",
                                   line_number + 1);
                    },
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expr => value` or `expr !! Code@position`. Blank lines and `#`
/// comments yield `None`.
fn parse_case(line: &str) -> Option<(&str, Expectation)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if let Some((source, value)) = line.rsplit_once(" => ") {
        let value = value.trim()
                         .parse()
                         .unwrap_or_else(|e| panic!("Bad expected value in {line:?}: {e}"));
        return Some((source.trim(), Expectation::Value(value)));
    }

    let (source, failure) =
        line.rsplit_once(" !! ").unwrap_or_else(|| panic!("Malformed case line {line:?}"));
    let (code, position) =
        failure.trim().split_once('@').unwrap_or_else(|| panic!("Missing position in {line:?}"));
    let position = match position {
        "-" => None,
        p => Some(p.parse().unwrap_or_else(|e| panic!("Bad position in {line:?}: {e}"))),
    };
    Some((source.trim(), Expectation::Failure { code: code.to_string(), position }))
}

fn same_number(actual: f64, expected: f64) -> bool {
    (actual.is_nan() && expected.is_nan()) || actual == expected
}

fn assert_value(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => {
            assert!(same_number(value, expected), "{src:?} gave {value}, expected {expected}");
        },
        Err(e) => panic!("Expression failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match calculate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => {
            assert!(!e.is_internal(), "{src:?} raised an internal error: {e}");
            e
        },
    }
}

fn tree(src: &str) -> String {
    let tokens = lex(src).unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}")).to_string()
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2**3**2", 512.0);
    assert_value("2-3-4", -5.0);
    assert_value("-2**2", 4.0);
}

#[test]
fn runs_fold_by_associativity() {
    assert_eq!(tree("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(tree("1 - 2 + 3 - 4"), "(((1 - 2) + 3) - 4)");
    assert_eq!(tree("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
    assert_eq!(tree("2 ** 3 ** 2 ** 1"), "(2 ** (3 ** (2 ** 1)))");
    assert_eq!(tree("1 + 2 * 3 - 4"), "((1 + (2 * 3)) - 4)");
    assert_eq!(tree("1 * 2 + 3 * 4"), "((1 * 2) + (3 * 4))");
    assert_eq!(tree("1 - 2 * 3 - 4"), "((1 - (2 * 3)) - 4)");
    assert_eq!(tree("2 ** 3 * 4"), "((2 ** 3) * 4)");
    assert_eq!(tree("1 | 2 ^ 3 & 4 << 5 + 6"), "(1 | (2 ^ (3 & (4 << (5 + 6)))))");
}

#[test]
fn barriers_isolate_groups_and_arguments() {
    assert_eq!(tree("2 * (3 + 4)"), "(2 * (3 + 4))");
    assert_eq!(tree("2 - (3 - 4) - 5"), "((2 - (3 - 4)) - 5)");
    assert_eq!(tree("10 - max(1 + 2, 3 * 4) - 1"), "((10 - max((1 + 2), (3 * 4))) - 1)");
    assert_eq!(tree("max(1 - 2, 3) * 2"), "(max((1 - 2), 3) * 2)");
}

#[test]
fn unary_operators_bind_to_one_operand() {
    assert_eq!(tree("-2 ** 2"), "(-2 ** 2)");
    assert_eq!(tree("-2 * -3"), "(-2 * -3)");
    assert_eq!(tree("√4 + 5"), "(√4 + 5)");
    assert_eq!(tree("~(1 | 2)"), "~(1 | 2)");
    assert_value("-2 * -3", 6.0);
    assert_value("~~5", 5.0);
}

#[test]
fn operator_aliases_share_a_tree() {
    assert_eq!(tree("6 × 2 ÷ 3"), tree("6 * 2 / 3"));
}

#[test]
fn names_are_case_insensitive() {
    let tokens = lex("Max(PI, E)").unwrap();
    let expr = parse(&tokens).unwrap();

    assert_eq!(expr.to_string(), "max(pi, e)");
    assert_eq!(tokens[0].text, "Max");
    assert_eq!(tokens[2].text, "PI");
}

#[test]
fn tree_nodes_carry_positions() {
    let expr = parse(&lex("  1 + max(2)").unwrap()).unwrap();
    assert_eq!(expr.position(), 2);

    let Expr::BinaryOp { right, .. } = &expr else {
        panic!("Expected a binary node, got {expr:?}");
    };
    assert_eq!(right.position(), 6);
}

#[test]
fn decimal_correction() {
    assert_value("0.1+0.2", 0.3);
    assert_value("1995126616 * 597128371", 1_191_346_706_150_822_700.0);
    assert_value("196410203 / 1143072785", 0.171_826_506_218_499_46);
    assert_value("0.1 * 0.2", 0.02);
    assert_value("1.21 / 1.1", 1.1);
    assert_value("10.5 - 0.25", 10.25);
}

#[test]
fn radix_literals() {
    assert_value("0xFF", 255.0);
    assert_value("0b101", 5.0);
    assert_value("0o17", 15.0);

    let e = assert_failure("0b12");
    assert_eq!(e.code(), "PositionNotationError");
    assert_eq!(e.position, Some(3));
    assert_eq!(e.to_string(), "Error at position 3: '2' is not a valid binary digit.");
}

#[test]
fn functions_and_constants() {
    assert_value("max(1,5,3)", 5.0);
    assert_value("pi", std::f64::consts::PI);
    assert_value("gcd(12,18)", 6.0);
    assert_value("floor(log10(12345))", 4.0);
}

#[test]
fn random_functions_stay_in_range() {
    for _ in 0..100 {
        let r = calculate("random()").unwrap();
        assert!((0.0..1.0).contains(&r));

        let n = calculate("irandom(1, 6)").unwrap();
        assert!((1.0..=6.0).contains(&n) && n.fract() == 0.0);

        let reversed = calculate("irandom(6, 1)").unwrap();
        assert!((1.0..=6.0).contains(&reversed) && reversed.fract() == 0.0);
    }
}

#[test]
fn irandom_floors_both_bounds() {
    let mut seen = [false; 3];
    for _ in 0..500 {
        let n = calculate("irandom(1.5, 3.5)").unwrap();
        assert!([1.0, 2.0, 3.0].contains(&n), "irandom(1.5, 3.5) gave {n}");
        seen[n as usize - 1] = true;
    }
    assert_eq!(seen, [true; 3]);
}

#[test]
fn functions_receive_every_argument() {
    assert!(calculate("abs()").unwrap().is_nan());
    assert!(calculate("avg()").unwrap().is_nan());
    assert!(calculate("pow(2)").unwrap().is_nan());
    assert_value("sqrt(4, 5)", 2.0);
    assert_value("max(1) + abs(2, 3)", 3.0);
    assert_value("pow(2, 3, 4)", 8.0);

    let r = calculate("random(1)").unwrap();
    assert!((0.0..1.0).contains(&r));
}

#[test]
fn exponent_edges_give_nan() {
    for src in ["1 ** nan", "1 ** inf", "(-1) ** inf", "1 ** -inf", "pow(1, nan)", "pow(-1, ∞)"] {
        assert!(calculate(src).unwrap().is_nan(), "{src} should be NaN");
    }
    assert_value("nan ** 0", 1.0);
    assert_value("2 ** inf", f64::INFINITY);
    assert_value("0.5 ** inf", 0.0);
}

#[test]
fn error_locality() {
    assert_eq!(assert_failure("(1+2").code(), "MissingCloseParenthesis");

    let e = assert_failure("1+2)");
    assert_eq!((e.code(), e.position), ("ExtraTrailingTokens", Some(3)));

    let e = assert_failure("1 $ 2");
    assert_eq!((e.code(), e.position), ("InvalidCharacter", Some(2)));
    assert_eq!(e.category(), ErrorCategory::Lexer);
}

#[test]
fn empty_input_is_missing_expressions() {
    for src in ["", "   ", "\t\n"] {
        let e = assert_failure(src);
        assert_eq!(e.code(), "MissingExpressions");
        assert_eq!(e.position, None);
        assert_eq!(e.category(), ErrorCategory::Parser);
    }
}

#[test]
fn positions_count_characters() {
    let e = assert_failure("√√ $");
    assert_eq!(e.position, Some(3));

    let e = assert_failure("π + 1)");
    assert_eq!(e.position, Some(5));
}

#[test]
fn nesting_is_bounded() {
    let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_value(&deep, 1.0);

    let too_deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(assert_failure(&too_deep).code(), "NestingTooDeep");

    let negations = format!("{}1", "-".repeat(10_000));
    assert_eq!(assert_failure(&negations).code(), "NestingTooDeep");

    let chain = vec!["1"; 100].join(" + ");
    assert_value(&chain, 100.0);
}

#[test]
fn long_chains_need_a_higher_max_depth() {
    let chain = vec!["1"; 257].join(" + ");
    assert_eq!(assert_failure(&chain).code(), "NestingTooDeep");

    let calculator = Calculator::new().options(Options { max_depth: 300 });
    assert_eq!(calculator.calculate(&chain).unwrap(), 257.0);
}

#[test]
fn max_depth_is_configurable() {
    let calculator = Calculator::new().options(Options { max_depth: 2 });

    assert_eq!(calculator.calculate("(1)").unwrap(), 1.0);
    let e = calculator.calculate("((1))").unwrap_err();
    assert_eq!(e.code(), "NestingTooDeep");
    assert_eq!(e.position, Some(2));
}

/// A registry with one constant and one function.
struct Answers;

impl Registry for Answers {
    fn constant(&self, name: &str) -> Option<f64> {
        (name == "answer").then_some(42.0)
    }

    fn function(&self, name: &str) -> Option<NumericFn> {
        (name == "double").then_some(double as NumericFn)
    }
}

fn double(args: &[f64]) -> f64 {
    builtin::arg(args, 0) * 2.0
}

#[test]
fn registry_is_injected() {
    let calculator = Calculator::with_registry(Answers);

    assert_eq!(calculator.calculate("double(ANSWER) + 1").unwrap(), 85.0);
    assert_eq!(calculator.calculate("pi").unwrap_err().code(), "InvalidToken");
    assert_eq!(calculator.calculate("double(1, 2)").unwrap(), 2.0);
    assert!(calculator.calculate("double()").unwrap().is_nan());
}

#[test]
fn evaluating_with_another_registry_reports_unknown_names() {
    let answers = Calculator::with_registry(Answers);

    let constant = parse(&lex("1 + pi").unwrap()).unwrap();
    let e = answers.evaluate(&constant).unwrap_err();
    assert_eq!((e.code(), e.position), ("UnknownConstant", Some(4)));
    assert_eq!(e.category(), ErrorCategory::Evaluator);

    let function = parse(&lex("max(1)").unwrap()).unwrap();
    assert_eq!(answers.evaluate(&function).unwrap_err().code(), "UnknownFunction");
}

#[test]
fn evaluation_is_repeatable() {
    let calculator = Calculator::new();
    let expr = calculator.parse(&calculator.lex("sum(0.1, 0.2) * 3 ** 2 / 7").unwrap()).unwrap();

    let first = calculator.evaluate(&expr).unwrap();
    for _ in 0..10 {
        assert_eq!(calculator.evaluate(&expr).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn builtin_names_resolve() {
    for name in BUILTIN_CONSTANTS {
        assert!(Builtins.is_constant(name), "{name} is not a constant");
        assert!(!Builtins.is_function(name), "{name} is both a constant and a function");
        assert_eq!(name.to_lowercase(), *name);
    }
    for name in BUILTIN_FUNCTIONS {
        assert!(Builtins.is_function(name), "{name} is not a function");
        assert_eq!(name.to_lowercase(), *name);
    }
}
