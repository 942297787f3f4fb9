//! Compiler for the ASCII equation dialect.
//!
//! The grammar is parsed into a [`mathcheck_ast::Expr`] with nom and then
//! evaluated by walking the tree; no input text is ever executed.
//!
//! ```text
//! expr     := term (('+' | '-') term)*
//! term     := unary (('*' | '/') unary | <implicit> power)*
//! unary    := ('-' | '+') unary | power
//! power    := atom ('^' exponent)?
//! exponent := ('-' | '+') exponent | power
//! atom     := number | 'x' | 'pi' | ('sqrt' | 'abs') '(' expr ')' | '(' expr ')'
//! ```

use crate::error::CompileError;
use mathcheck_ast::{eval_f64, Expr, Function};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0, one_of},
    combinator::{map, opt},
    error::ErrorKind,
    multi::fold_many0,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use std::fmt;

/// Longest side accepted, in bytes.
pub const MAX_INPUT_LEN: usize = 4096;
/// Deepest parenthesis nesting accepted.
pub const MAX_NESTING: usize = 64;
/// Longest run of consecutive sign characters accepted.
pub const MAX_SIGN_RUN: usize = 16;
/// Most `^` operators accepted in one side.
pub const MAX_POWERS: usize = 64;
/// Deepest evaluation nesting accepted after parsing. Flat `+ - * /` chains
/// count as one level (see [`Expr::nesting_depth`]).
pub const MAX_TREE_DEPTH: usize = 256;

/// Kind of token a parsed fragment ends with. Implicit multiplication is
/// decided from this and the next character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trailing {
    Digit,
    Var,
    Close,
    Other,
}

type Parsed = (Expr, Trailing);

/// One compiled side of an equation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSide {
    expr: Expr,
}

impl CompiledSide {
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Value at `x`. Domain errors and division by zero give `NaN`.
    pub fn eval(&self, x: f64) -> f64 {
        eval_f64(&self.expr, x)
    }
}

/// `LHS(x) - RHS(x)` for a compiled equation.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationEvaluator {
    lhs: CompiledSide,
    rhs: CompiledSide,
}

impl EquationEvaluator {
    pub fn lhs(&self) -> &CompiledSide {
        &self.lhs
    }

    pub fn rhs(&self) -> &CompiledSide {
        &self.rhs
    }

    /// Residual at `x`; `NaN` whenever either side is not finite.
    pub fn eval(&self, x: f64) -> f64 {
        let left = self.lhs.eval(x);
        let right = self.rhs.eval(x);
        if !left.is_finite() || !right.is_finite() {
            return f64::NAN;
        }
        left - right
    }
}

impl fmt::Display for EquationEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs.expr, self.rhs.expr)
    }
}

/// Compile `LHS = RHS`. The text must contain exactly one `=`.
pub fn build_equation_evaluator(equation: &str) -> Result<EquationEvaluator, CompileError> {
    let parts: Vec<&str> = equation.split('=').collect();
    if parts.len() != 2 {
        return Err(CompileError::NotAnEquation { parts: parts.len() });
    }

    let lhs = compile_side(parts[0])?;
    let rhs = compile_side(parts[1])?;
    tracing::debug!(lhs = %lhs.expr, rhs = %rhs.expr, "compiled equation");

    Ok(EquationEvaluator { lhs, rhs })
}

/// Compile one side of an equation.
pub fn compile_side(expr: &str) -> Result<CompiledSide, CompileError> {
    let source = unify_minus(expr);
    let source = source.trim();
    if source.is_empty() {
        return Err(CompileError::EmptySide);
    }
    check_limits(source)?;

    let (remaining, (expr, _)) =
        parse_expr(source).map_err(|e| CompileError::Syntax(format!("{}", e)))?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(CompileError::UnconsumedInput(remaining.to_string()));
    }

    let depth = expr.nesting_depth();
    if depth > MAX_TREE_DEPTH {
        return Err(CompileError::TooDeep { depth });
    }

    Ok(CompiledSide { expr })
}

fn unify_minus(s: &str) -> String {
    s.replace(['\u{2212}', '\u{2013}', '\u{2014}', '\u{2012}'], "-")
}

/// Reject inputs whose shape alone would make the recursive parser go deep.
fn check_limits(source: &str) -> Result<(), CompileError> {
    if source.len() > MAX_INPUT_LEN {
        return Err(CompileError::TooLong { len: source.len() });
    }

    let mut nesting = 0usize;
    let mut max_nesting = 0usize;
    let mut sign_run = 0usize;
    let mut powers = 0usize;

    for c in source.chars() {
        match c {
            '(' => {
                nesting += 1;
                max_nesting = max_nesting.max(nesting);
            }
            ')' => nesting = nesting.saturating_sub(1),
            '^' => powers += 1,
            _ => {}
        }
        match c {
            '+' | '-' => {
                sign_run += 1;
                if sign_run > MAX_SIGN_RUN {
                    return Err(CompileError::TooDeep { depth: sign_run });
                }
            }
            c if c.is_whitespace() => {}
            _ => sign_run = 0,
        }
    }

    if max_nesting > MAX_NESTING {
        return Err(CompileError::TooDeep { depth: max_nesting });
    }
    if powers > MAX_POWERS {
        return Err(CompileError::TooDeep { depth: powers });
    }
    Ok(())
}

fn fail(input: &str, kind: ErrorKind) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(input, kind))
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

// Numeric literals: 123, 8.2, .5, 8., 1.5E3, 2e-4
fn parse_number(input: &str) -> IResult<&str, Parsed> {
    let (remaining, (int_part, maybe_frac)) = pair(
        take_while(is_digit),
        opt(pair(tag("."), take_while(is_digit))),
    )(input)?;

    let frac_part = maybe_frac.map(|(_, frac)| frac).unwrap_or("");
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(fail(input, ErrorKind::Digit));
    }

    // Exponent only when digits follow, so `2ex` is not swallowed
    let (remaining, _) = opt(tuple((
        one_of("eE"),
        opt(one_of("+-")),
        take_while1(is_digit),
    )))(remaining)?;

    let literal = &input[..input.len() - remaining.len()];
    let value: f64 = literal
        .parse()
        .map_err(|_| fail(input, ErrorKind::Float))?;
    Ok((remaining, (Expr::num(value), Trailing::Digit)))
}

// Identifiers start with a letter or underscore, then letters, digits, underscores
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    let len = input
        .char_indices()
        .find(|&(i, c)| {
            let ok = if i == 0 {
                c.is_ascii_alphabetic() || c == '_'
            } else {
                c.is_ascii_alphanumeric() || c == '_'
            };
            !ok
        })
        .map(|(i, _)| i)
        .unwrap_or(input.len());

    if len == 0 {
        return Err(fail(input, ErrorKind::Alpha));
    }
    Ok((&input[len..], &input[..len]))
}

// `x`, `pi`, `sqrt(..)`, `abs(..)`; every other name is rejected
fn parse_named(input: &str) -> IResult<&str, Parsed> {
    let (rest, name) = parse_identifier(input)?;
    match name {
        "x" => Ok((rest, (Expr::var(), Trailing::Var))),
        "pi" => Ok((rest, (Expr::pi(), Trailing::Other))),
        _ => {
            let func = Function::from_name(name).ok_or_else(|| fail(input, ErrorKind::Tag))?;
            let (rest, (arg, _)) = delimited(
                preceded(multispace0, char('(')),
                parse_expr,
                preceded(multispace0, char(')')),
            )(rest)?;
            Ok((rest, (Expr::Function(func, Box::new(arg)), Trailing::Close)))
        }
    }
}

fn parse_parens(input: &str) -> IResult<&str, Parsed> {
    map(
        delimited(char('('), parse_expr, preceded(multispace0, char(')'))),
        |(expr, _)| (expr, Trailing::Close),
    )(input)
}

fn parse_atom(input: &str) -> IResult<&str, Parsed> {
    preceded(multispace0, alt((parse_number, parse_named, parse_parens)))(input)
}

// Power - right associative: 2^3^2 = 2^(3^2)
fn parse_power(input: &str) -> IResult<&str, Parsed> {
    let (input, (base, trailing)) = parse_atom(input)?;

    let caret: IResult<&str, char> = preceded(multispace0, char('^'))(input);
    match caret {
        Ok((input, _)) => {
            let (input, (exp, trailing)) = parse_power_exponent(input)?;
            Ok((input, (Expr::pow(base, exp), trailing)))
        }
        Err(_) => Ok((input, (base, trailing))),
    }
}

// Exponents accept a sign prefix: x^-2, x^-(a+b)
fn parse_power_exponent(input: &str) -> IResult<&str, Parsed> {
    preceded(
        multispace0,
        alt((
            map(preceded(char('-'), parse_power_exponent), |(e, t)| {
                (Expr::neg(e), t)
            }),
            preceded(char('+'), parse_power_exponent),
            parse_power,
        )),
    )(input)
}

// Unary minus binds looser than `^`: -x^2 = -(x^2)
fn parse_unary(input: &str) -> IResult<&str, Parsed> {
    alt((
        map(
            preceded(preceded(multispace0, char('-')), parse_unary),
            |(e, t)| (Expr::neg(e), t),
        ),
        preceded(preceded(multispace0, char('+')), parse_unary),
        parse_power,
    ))(input)
}

/// Implicit multiplication: digit before `x` or `(`, `x` before `(`,
/// `)` before `(`, `x` or a digit.
fn implicit_factor_follows(trailing: Trailing, next: Option<char>) -> bool {
    match (trailing, next) {
        (Trailing::Digit, Some(c)) => c == 'x' || c == '(',
        (Trailing::Var, Some(c)) => c == '(',
        (Trailing::Close, Some(c)) => c == '(' || c == 'x' || c.is_ascii_digit(),
        _ => false,
    }
}

// Term - explicit `*` and `/` plus implicit multiplication: 2x, 3(x+1), (x+1)(x-1)
fn parse_term(input: &str) -> IResult<&str, Parsed> {
    let (mut input, (mut acc, mut trailing)) = parse_unary(input)?;

    loop {
        let op: IResult<&str, char> = preceded(multispace0, one_of("*/"))(input);
        if let Ok((rest, op)) = op {
            let (rest, (rhs, rhs_trailing)) = parse_unary(rest)?;
            acc = if op == '*' {
                Expr::mul(acc, rhs)
            } else {
                Expr::div(acc, rhs)
            };
            trailing = rhs_trailing;
            input = rest;
            continue;
        }

        if implicit_factor_follows(trailing, input.trim_start().chars().next()) {
            if let Ok((rest, (rhs, rhs_trailing))) = parse_power(input) {
                acc = Expr::mul(acc, rhs);
                trailing = rhs_trailing;
                input = rest;
                continue;
            }
        }

        return Ok((input, (acc, trailing)));
    }
}

fn parse_expr(input: &str) -> IResult<&str, Parsed> {
    let (input, init) = parse_term(input)?;
    fold_many0(
        pair(preceded(multispace0, one_of("+-")), parse_term),
        move || init.clone(),
        |(acc, _), (op, (rhs, trailing))| {
            let expr = if op == '+' {
                Expr::add(acc, rhs)
            } else {
                Expr::sub(acc, rhs)
            };
            (expr, trailing)
        },
    )(input)
}
