//! Parameter expressions for variational circuits.
//!
//! A gate angle is either a plain number or an expression over named symbols.
//! Optimizers bind the symbols to concrete values before each evaluation.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::error::{IrError, IrResult};

/// Symbol-to-value assignment used when binding a circuit.
pub type Bindings = FxHashMap<String, f64>;

/// A symbolic or concrete parameter expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// A symbolic parameter.
    Symbol(String),
    /// The constant π.
    Pi,
    /// Negation.
    Neg(Box<ParameterExpression>),
    /// Addition.
    Add(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Subtraction.
    Sub(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Multiplication.
    Mul(Box<ParameterExpression>, Box<ParameterExpression>),
    /// Division.
    Div(Box<ParameterExpression>, Box<ParameterExpression>),
}

impl ParameterExpression {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        ParameterExpression::Symbol(name.into())
    }

    /// Create a π constant.
    pub fn pi() -> Self {
        ParameterExpression::Pi
    }

    /// `factor * self`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        ParameterExpression::constant(factor) * self
    }

    /// Check if this expression contains any symbols.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Symbol(_) => true,
            ParameterExpression::Constant(_) | ParameterExpression::Pi => false,
            ParameterExpression::Neg(e) => e.is_symbolic(),
            ParameterExpression::Add(a, b)
            | ParameterExpression::Sub(a, b)
            | ParameterExpression::Mul(a, b)
            | ParameterExpression::Div(a, b) => a.is_symbolic() || b.is_symbolic(),
        }
    }

    /// Try to evaluate as a concrete f64 value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Symbol(_) => None,
            ParameterExpression::Pi => Some(PI),
            ParameterExpression::Neg(e) => e.as_f64().map(|v| -v),
            ParameterExpression::Add(a, b) => Some(a.as_f64()? + b.as_f64()?),
            ParameterExpression::Sub(a, b) => Some(a.as_f64()? - b.as_f64()?),
            ParameterExpression::Mul(a, b) => Some(a.as_f64()? * b.as_f64()?),
            ParameterExpression::Div(a, b) => {
                let divisor = b.as_f64()?;
                if divisor == 0.0 {
                    return None;
                }
                Some(a.as_f64()? / divisor)
            }
        }
    }

    /// Evaluate, reporting the first unbound symbol on failure.
    pub fn value(&self) -> IrResult<f64> {
        self.as_f64().ok_or_else(|| {
            let name = self
                .symbols()
                .into_iter()
                .min()
                .unwrap_or_else(|| self.to_string());
            IrError::UnboundParameter(name)
        })
    }

    /// Get all symbol names in this expression.
    pub fn symbols(&self) -> FxHashSet<String> {
        let mut set = FxHashSet::default();
        self.collect_symbols(&mut set);
        set
    }

    fn collect_symbols(&self, set: &mut FxHashSet<String>) {
        match self {
            ParameterExpression::Constant(_) | ParameterExpression::Pi => {}
            ParameterExpression::Symbol(name) => {
                set.insert(name.clone());
            }
            ParameterExpression::Neg(e) => e.collect_symbols(set),
            ParameterExpression::Add(a, b)
            | ParameterExpression::Sub(a, b)
            | ParameterExpression::Mul(a, b)
            | ParameterExpression::Div(a, b) => {
                a.collect_symbols(set);
                b.collect_symbols(set);
            }
        }
    }

    /// Bind a symbol to a value, returning a new expression.
    pub fn bind(&self, name: &str, value: f64) -> Self {
        self.map_symbols(&|n| (n == name).then_some(value))
    }

    /// Bind every symbol found in `bindings`; others stay symbolic.
    pub fn bind_all(&self, bindings: &Bindings) -> Self {
        self.map_symbols(&|n| bindings.get(n).copied())
    }

    fn map_symbols(&self, lookup: &dyn Fn(&str) -> Option<f64>) -> Self {
        match self {
            ParameterExpression::Symbol(n) => match lookup(n) {
                Some(v) => ParameterExpression::Constant(v),
                None => self.clone(),
            },
            ParameterExpression::Constant(_) | ParameterExpression::Pi => self.clone(),
            ParameterExpression::Neg(e) => ParameterExpression::Neg(Box::new(e.map_symbols(lookup))),
            ParameterExpression::Add(a, b) => ParameterExpression::Add(
                Box::new(a.map_symbols(lookup)),
                Box::new(b.map_symbols(lookup)),
            ),
            ParameterExpression::Sub(a, b) => ParameterExpression::Sub(
                Box::new(a.map_symbols(lookup)),
                Box::new(b.map_symbols(lookup)),
            ),
            ParameterExpression::Mul(a, b) => ParameterExpression::Mul(
                Box::new(a.map_symbols(lookup)),
                Box::new(b.map_symbols(lookup)),
            ),
            ParameterExpression::Div(a, b) => ParameterExpression::Div(
                Box::new(a.map_symbols(lookup)),
                Box::new(b.map_symbols(lookup)),
            ),
        }
    }

    /// Simplify the expression by evaluating constant subexpressions.
    pub fn simplify(&self) -> Self {
        if let Some(v) = self.as_f64() {
            return ParameterExpression::Constant(v);
        }
        match self {
            ParameterExpression::Neg(e) => ParameterExpression::Neg(Box::new(e.simplify())),
            ParameterExpression::Add(a, b) => {
                ParameterExpression::Add(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            ParameterExpression::Sub(a, b) => {
                ParameterExpression::Sub(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            ParameterExpression::Mul(a, b) => {
                ParameterExpression::Mul(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            ParameterExpression::Div(a, b) => {
                ParameterExpression::Div(Box::new(a.simplify()), Box::new(b.simplify()))
            }
            _ => self.clone(),
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Symbol(name) => write!(f, "{name}"),
            ParameterExpression::Pi => write!(f, "π"),
            ParameterExpression::Neg(e) => write!(f, "-({e})"),
            ParameterExpression::Add(a, b) => write!(f, "({a} + {b})"),
            ParameterExpression::Sub(a, b) => write!(f, "({a} - {b})"),
            ParameterExpression::Mul(a, b) => write!(f, "({a} * {b})"),
            ParameterExpression::Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<i32> for ParameterExpression {
    fn from(value: i32) -> Self {
        ParameterExpression::Constant(f64::from(value))
    }
}

impl From<&str> for ParameterExpression {
    fn from(name: &str) -> Self {
        ParameterExpression::Symbol(name.to_string())
    }
}

impl std::ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ParameterExpression::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Sub for ParameterExpression {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        ParameterExpression::Sub(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        ParameterExpression::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Div for ParameterExpression {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        ParameterExpression::Div(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        ParameterExpression::Neg(Box::new(self))
    }
}
