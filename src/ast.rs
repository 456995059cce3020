use std::fmt;

use ordered_float::OrderedFloat;

/// An expression tree node produced by the parser.
///
/// Every variant records the source position (character offset) of its
/// leftmost token. The tree is immutable once built: the evaluator only reads
/// it, and the same tree can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A numeric literal such as `3`, `.5` or `0xFF`.
    Number {
        /// The literal value.
        value:    OrderedFloat<f64>,
        /// Offset of the literal in the source.
        position: usize,
    },
    /// A prefix operator applied to a single operand.
    UnaryOp {
        /// The operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Offset of the operator in the source.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Offset of the leftmost token of `left`.
        position: usize,
    },
    /// Reference to a named constant, stored under its lowercase name.
    Constant {
        /// Canonical (lowercase) name of the constant.
        name:     String,
        /// Offset of the name in the source.
        position: usize,
    },
    /// Call of a named function (e.g. `max(1, 2, 3)`).
    FunctionCall {
        /// Canonical (lowercase) name of the function.
        name:      String,
        /// Arguments in source order. May be empty.
        arguments: Vec<Self>,
        /// Offset of the name in the source.
        position:  usize,
    },
}

impl Expr {
    /// Creates a number node.
    #[must_use]
    pub const fn number(value: f64, position: usize) -> Self {
        Self::Number { value: OrderedFloat(value),
                       position }
    }

    /// Creates a binary node positioned at its left operand.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        let position = left.position();
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }

    /// Gets the source position from `self`.
    ///
    /// ## Example
    /// ```
    /// use numerate::ast::Expr;
    ///
    /// let expr = Expr::Constant { name:     "pi".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Constant { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Renders the tree fully parenthesized, one pair of parentheses per binary
/// node, so that the grouping chosen by the parser is visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{}", value.0),
            Self::UnaryOp { op, operand, .. } => write!(f, "{op}{operand}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Constant { name, .. } => write!(f, "{name}"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Grouping direction for a run of operators that share one precedence level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ** b ** c` groups as `a ** (b ** c)`.
    Right,
}

/// Represents a binary operator.
///
/// `×` and `÷` are spellings of [`BinaryOperator::Mul`] and
/// [`BinaryOperator::Div`]; the tree only keeps the canonical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Exponentiation (`**`)
    Pow,
    /// Multiplication (`*`, `×`)
    Mul,
    /// Division (`/`, `÷`)
    Div,
    /// Truncating remainder (`%`)
    Rem,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Left shift (`<<`)
    Shl,
    /// Arithmetic right shift (`>>`)
    Shr,
    /// Logical right shift (`>>>`)
    UShr,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise or (`|`)
    BitOr,
}

impl BinaryOperator {
    /// Maps an operator symbol to its binary operator, if it has one.
    ///
    /// # Example
    /// ```
    /// use numerate::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("×"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("~"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "**" => Self::Pow,
            "*" | "×" => Self::Mul,
            "/" | "÷" => Self::Div,
            "%" => Self::Rem,
            "+" => Self::Add,
            "-" => Self::Sub,
            "<<" => Self::Shl,
            ">>" => Self::Shr,
            ">>>" => Self::UShr,
            "&" => Self::BitAnd,
            "^" => Self::BitXor,
            "|" => Self::BitOr,
            _ => return None,
        };
        Some(op)
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 13,
            Self::Mul | Self::Div | Self::Rem => 12,
            Self::Add | Self::Sub => 11,
            Self::Shl | Self::Shr | Self::UShr => 10,
            Self::BitAnd => 7,
            Self::BitXor => 6,
            Self::BitOr => 5,
        }
    }

    /// Only `**` groups to the right.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Pow => "**",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// 32-bit bitwise complement (`~x`).
    Not,
    /// Principal square root (`√x`).
    Sqrt,
}

impl UnaryOperator {
    /// Maps an operator symbol to its unary operator, if it has one.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Plus,
            "-" => Self::Negate,
            "~" => Self::Not,
            "√" => Self::Sqrt,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "~",
            Self::Sqrt => "√",
        };
        write!(f, "{operator}")
    }
}
