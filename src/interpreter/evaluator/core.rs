use log::debug;

use crate::{
    ast::Expr,
    error::{CalcError, CalcResult, ErrorKind},
    interpreter::registry::Registry,
};

/// Evaluates a tree against a registry.
///
/// The registry must be the one the tree was parsed with; a name it does not
/// know is reported as `UnknownConstant` or `UnknownFunction`.
///
/// # Example
/// ```
/// use numerate::{
///     interpreter::{evaluator::evaluate, registry::Builtins},
///     lex, parse,
/// };
///
/// let tree = parse(&lex("0.1 + 0.2").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree, &Builtins).unwrap(), 0.3);
/// ```
pub fn evaluate(expr: &Expr, registry: &dyn Registry) -> CalcResult<f64> {
    let value = Evaluator::new(registry).eval(expr)?;
    debug!("evaluated {expr} = {value}");
    Ok(value)
}

/// Walks an expression tree and computes its value.
///
/// The evaluator holds nothing but a shared reference to the registry, so one
/// instance can evaluate any number of trees, and evaluating the same tree
/// twice gives the same result.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    registry: &'a dyn Registry,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator that resolves names through `registry`.
    #[must_use]
    pub const fn new(registry: &'a dyn Registry) -> Self {
        Self { registry }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Dispatches on the node variant. Operands and arguments are evaluated
    /// left to right before the operator or function is applied.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric value. Arithmetic never fails; infinities and NaN are
    /// ordinary results.
    pub fn eval(&self, expr: &Expr) -> CalcResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(value.0),
            Expr::UnaryOp { op, operand, .. } => Ok(Self::eval_unary(*op, self.eval(operand)?)),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::Constant { name, position } => self.eval_constant(name, *position),
            Expr::FunctionCall { name, arguments, position } => {
                self.eval_call(name, arguments, *position)
            },
        }
    }

    fn eval_constant(&self, name: &str, position: usize) -> CalcResult<f64> {
        self.registry
            .constant(name)
            .ok_or_else(|| CalcError::at(ErrorKind::UnknownConstant { name: name.to_string() },
                                         position))
    }

    /// Calls a registry function with every argument of the call.
    fn eval_call(&self, name: &str, arguments: &[Expr], position: usize) -> CalcResult<f64> {
        let Some(function) = self.registry.function(name) else {
            return Err(CalcError::at(ErrorKind::UnknownFunction { name: name.to_string() },
                                     position));
        };

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<CalcResult<Vec<_>>>()?;
        Ok(function(&values))
    }
}
