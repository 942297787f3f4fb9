use std::fmt;

/// Named constants accepted by the equation grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
        }
    }
}

/// Single-argument functions accepted by the equation grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    Abs,
}

impl Function {
    pub fn name(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
        }
    }

    /// Look up a function by its ASCII name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Function::Sqrt),
            "abs" => Some(Function::Abs),
            _ => None,
        }
    }
}

/// Expression over the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Var,
    Constant(Constant),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Function(Function, Box<Expr>),
}

impl Expr {
    // Helper constructors for cleaner code
    pub fn num(n: f64) -> Self {
        Expr::Number(n)
    }

    pub fn var() -> Self {
        Expr::Var
    }

    pub fn pi() -> Self {
        Expr::Constant(Constant::Pi)
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Expr::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Expr::Sub(Box::new(lhs), Box::new(rhs))
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Expr::Mul(Box::new(lhs), Box::new(rhs))
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Expr::Div(Box::new(lhs), Box::new(rhs))
    }

    pub fn pow(base: Expr, exp: Expr) -> Self {
        Expr::Pow(Box::new(base), Box::new(exp))
    }

    pub fn neg(expr: Expr) -> Self {
        Expr::Neg(Box::new(expr))
    }

    pub fn sqrt(arg: Expr) -> Self {
        Expr::Function(Function::Sqrt, Box::new(arg))
    }

    pub fn abs(arg: Expr) -> Self {
        Expr::Function(Function::Abs, Box::new(arg))
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Var | Expr::Constant(_) => 1,
            Expr::Neg(e) | Expr::Function(_, e) => 1 + e.node_count(),
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => 1 + l.node_count() + r.node_count(),
        }
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Var | Expr::Constant(_) => 1,
            Expr::Neg(e) | Expr::Function(_, e) => 1 + e.depth(),
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Recursion depth needed to evaluate the tree.
    ///
    /// Chains of `+ - * /` are walked along their left spine without
    /// recursing, so a flat sum of many terms counts as one level.
    pub fn nesting_depth(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Var | Expr::Constant(_) => 1,
            Expr::Neg(e) | Expr::Function(_, e) => 1 + e.nesting_depth(),
            Expr::Pow(l, r) => 1 + l.nesting_depth().max(r.nesting_depth()),
            Expr::Add(..) | Expr::Sub(..) | Expr::Mul(..) | Expr::Div(..) => {
                let mut node = self;
                let mut deepest = 0;
                while let Some((l, r)) = node.arithmetic_operands() {
                    deepest = deepest.max(r.nesting_depth());
                    node = l;
                }
                1 + deepest.max(node.nesting_depth())
            }
        }
    }

    /// Operands of `+ - * /`; `None` for every other node.
    pub(crate) fn arithmetic_operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::Add(l, r) | Expr::Sub(l, r) | Expr::Mul(l, r) | Expr::Div(l, r) => Some((l, r)),
            _ => None,
        }
    }

    /// True when the variable occurs anywhere in the tree.
    pub fn contains_var(&self) -> bool {
        match self {
            Expr::Var => true,
            Expr::Number(_) | Expr::Constant(_) => false,
            Expr::Neg(e) | Expr::Function(_, e) => e.contains_var(),
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => l.contains_var() || r.contains_var(),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(_, _) | Expr::Sub(_, _) => 1,
            Expr::Mul(_, _) | Expr::Div(_, _) => 2,
            Expr::Neg(_) => 3,
            Expr::Pow(_, _) => 4,
            Expr::Function(_, _) | Expr::Number(_) | Expr::Var | Expr::Constant(_) => 5,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parent: u8, strict: bool) -> fmt::Result {
        let prec = self.precedence();
        let wrap = if strict { prec <= parent } else { prec < parent };
        // Negative literals read like a unary minus
        let wrap = wrap || matches!(self, Expr::Number(n) if *n < 0.0 && parent >= 3);
        if wrap {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let my_prec = self.precedence();
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Var => write!(f, "x"),
            Expr::Constant(Constant::Pi) => write!(f, "pi"),
            Expr::Add(l, r) | Expr::Mul(l, r) => {
                let op = if matches!(self, Expr::Add(..)) { "+" } else { "*" };
                l.fmt_operand(f, my_prec, false)?;
                write!(f, " {} ", op)?;
                r.fmt_operand(f, my_prec, false)
            }
            // Left-associative and non-commutative: same precedence on the right needs parens
            Expr::Sub(l, r) | Expr::Div(l, r) => {
                let op = if matches!(self, Expr::Sub(..)) { "-" } else { "/" };
                l.fmt_operand(f, my_prec, false)?;
                write!(f, " {} ", op)?;
                r.fmt_operand(f, my_prec, true)
            }
            // Right-associative
            Expr::Pow(b, e) => {
                b.fmt_operand(f, my_prec, true)?;
                write!(f, "^")?;
                e.fmt_operand(f, my_prec, false)
            }
            Expr::Neg(e) => {
                write!(f, "-")?;
                e.fmt_operand(f, my_prec, false)
            }
            Expr::Function(func, arg) => write!(f, "{}({})", func.name(), arg),
        }
    }
}
