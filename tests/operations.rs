use quadcalc::{
    error::CalculatorError,
    number::Number,
    operations::{add::Addition,
                 core::{OVERFLOW_LIMIT, Operation},
                 div::Division,
                 mul::Multiplication,
                 sub::Subtraction},
    operator::OperatorSymbol,
};

#[test]
fn addition_handles_signs_and_zero() {
    assert_eq!(Addition.compute(Number::Integer(5), Number::Integer(3)).unwrap(),
               Number::Integer(8));
    assert_eq!(Addition.compute(Number::Integer(-5), Number::Integer(-3)).unwrap(),
               Number::Integer(-8));
    assert_eq!(Addition.compute(Number::Integer(-5), Number::Integer(3)).unwrap(),
               Number::Integer(-2));
    assert_eq!(Addition.compute(Number::Integer(5), Number::Integer(0)).unwrap(),
               Number::Integer(5));
}

#[test]
fn subtraction_handles_signs() {
    assert_eq!(Subtraction.compute(Number::Integer(10), Number::Integer(4)).unwrap(),
               Number::Integer(6));
    assert_eq!(Subtraction.compute(Number::Integer(-10), Number::Integer(-4)).unwrap(),
               Number::Integer(-6));
    assert_eq!(Subtraction.compute(Number::Integer(-5), Number::Integer(3)).unwrap(),
               Number::Integer(-8));
}

#[test]
fn multiplication_handles_signs_and_zero() {
    assert_eq!(Multiplication.compute(Number::Integer(3), Number::Integer(7)).unwrap(),
               Number::Integer(21));
    assert_eq!(Multiplication.compute(Number::Integer(-3), Number::Integer(-7)).unwrap(),
               Number::Integer(21));
    assert_eq!(Multiplication.compute(Number::Integer(-3), Number::Integer(7)).unwrap(),
               Number::Integer(-21));
    assert_eq!(Multiplication.compute(Number::Integer(5), Number::Integer(0)).unwrap(),
               Number::Integer(0));
}

#[test]
fn division_always_produces_reals() {
    assert_eq!(Division.compute(Number::Integer(15), Number::Integer(3)).unwrap(),
               Number::Real(5.0));
    assert_eq!(Division.compute(Number::Integer(-15), Number::Integer(-3)).unwrap(),
               Number::Real(5.0));
    assert_eq!(Division.compute(Number::Integer(-15), Number::Integer(3)).unwrap(),
               Number::Real(-5.0));
    assert_eq!(Division.compute(Number::Integer(7), Number::Integer(2)).unwrap(),
               Number::Real(3.5));
}

#[test]
fn division_by_any_zero_is_rejected() {
    for zero in [Number::Integer(0), Number::Real(0.0), Number::Real(-0.0)] {
        let error = Division.compute(Number::Integer(10), zero).unwrap_err();

        assert!(matches!(error, CalculatorError::DivisionByZero));
        assert_eq!(error.to_string(), "Division by zero is not allowed");
        assert_eq!(error.category(), "Math Error");
    }
}

#[test]
fn mixed_operands_produce_reals() {
    assert_eq!(Addition.compute(Number::Integer(5), Number::Real(0.5)).unwrap(),
               Number::Real(5.5));
    assert_eq!(Subtraction.compute(Number::Real(10.0), Number::Integer(4)).unwrap(),
               Number::Real(6.0));
    assert_eq!(Multiplication.compute(Number::Real(2.5), Number::Integer(4)).unwrap(),
               Number::Real(10.0));
}

#[test]
fn addition_widens_when_integers_overflow() {
    let result = Addition.compute(Number::Integer(i64::MAX), Number::Integer(1)).unwrap();

    assert!(result.is_real());
    assert!(result.as_real() > 9.2e18);
}

#[test]
fn subtraction_widens_when_integers_overflow() {
    let result = Subtraction.compute(Number::Integer(i64::MIN), Number::Integer(1)).unwrap();

    assert!(result.is_real());
    assert!(result.as_real() < -9.2e18);
}

#[test]
fn multiplication_widens_when_integers_overflow() {
    let result = Multiplication.compute(Number::Integer(i64::MAX), Number::Integer(2)).unwrap();

    assert!(result.is_real());
    assert!(result.as_real() > 1.8e19);
}

#[test]
fn results_beyond_the_limit_overflow() {
    let error = Addition.compute(Number::Real(1e308), Number::Real(1e308)).unwrap_err();
    assert_eq!(error.to_string(), "Addition overflow: 1e308 + 1e308");
    assert_eq!(error.category(), "Overflow Error");

    let error = Subtraction.compute(Number::Real(1e308), Number::Real(-1e308)).unwrap_err();
    assert_eq!(error.to_string(), "Subtraction overflow: 1e308 - -1e308");

    let error = Multiplication.compute(Number::Real(1e200), Number::Real(1e200)).unwrap_err();
    assert_eq!(error.to_string(), "Multiplication overflow: 1e200 * 1e200");

    let error = Division.compute(Number::Real(1e308), Number::Real(1e-308)).unwrap_err();
    assert_eq!(error.to_string(), "Division overflow: 1e308 / 1e-308");
}

#[test]
fn results_at_the_limit_pass() {
    assert_eq!(Addition.compute(Number::Real(OVERFLOW_LIMIT), Number::Real(0.0)).unwrap(),
               Number::Real(1e308));
    assert_eq!(Subtraction.compute(Number::Real(OVERFLOW_LIMIT), Number::Integer(0)).unwrap(),
               Number::Real(1e308));
}

#[test]
fn operations_expose_symbols_and_names() {
    assert_eq!(Addition.symbol(), OperatorSymbol::Add);
    assert_eq!(Addition.name(), "addition");
    assert_eq!(Subtraction.symbol(), OperatorSymbol::Sub);
    assert_eq!(Subtraction.name(), "subtraction");
    assert_eq!(Multiplication.symbol(), OperatorSymbol::Mul);
    assert_eq!(Multiplication.name(), "multiplication");
    assert_eq!(Division.symbol(), OperatorSymbol::Div);
    assert_eq!(Division.name(), "division");
}

#[test]
fn numbers_render_like_the_literals() {
    assert_eq!(Number::Integer(8).to_string(), "8");
    assert_eq!(Number::Integer(-8).to_string(), "-8");
    assert_eq!(Number::Real(5.0).to_string(), "5.0");
    assert_eq!(Number::Real(3.5).to_string(), "3.5");
    assert_eq!(Number::Real(-0.5).to_string(), "-0.5");
    assert_eq!(Number::Real(1e308).to_string(), "1e308");
}
