//! Solver settings

use num_traits::Float;

//

/// Pivoting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pivot
{
    /// Column pivoting.
    Column,
    /// Row pivoting.
    Row,
}

/// Entering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule
{
    /// Most negative reduced cost.
    Dantzig,
    /// Largest objective improvement.
    MaxImprovement,
}

impl core::fmt::Display for Pivot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            Pivot::Column => "column",
            Pivot::Row    => "row",
        })
    }
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            Rule::Dantzig        => "Dantzig",
            Rule::MaxImprovement => "maxImprovement",
        })
    }
}

//

fn pow2<F: Float>(e: i32) -> F
{
    (F::one() + F::one()).powi(e)
}

/// Solver settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings<F: Float>
{
    /// Max iteration number.
    pub max_iter: usize,
    /// Tolerance of pivots and feasibility.
    pub tol: F,
    /// Tolerance of reduced costs and gradients.
    pub tol_g: F,
    /// Pivoting strategy.
    pub pivot: Pivot,
    /// Entering rule.
    pub rule: Rule,
}

impl<F: Float> Settings<F>
{
    const MAX_ITER: usize = 7777;

    /// Defaults for standard precision: `tol` \\(2^{-26}\\), `tol_g` \\(2^{-33}\\).
    pub fn standard() -> Self
    {
        Settings {
            max_iter: Self::MAX_ITER,
            tol: pow2(-26),
            tol_g: pow2(-33),
            pivot: Pivot::Column,
            rule: Rule::Dantzig,
        }
    }

    /// Defaults for extended precision: `tol` \\(2^{-76}\\), `tol_g` \\(2^{-87}\\).
    pub fn extended() -> Self
    {
        let s = Settings {
            max_iter: Self::MAX_ITER,
            tol: pow2(-76),
            tol_g: pow2(-87),
            pivot: Pivot::Column,
            rule: Rule::Dantzig,
        };

        if s.tol < F::epsilon() {
            log::debug!("extended tolerances are below machine epsilon of this float type");
        }

        s
    }

    /// Changes settings.
    ///
    /// * `f` is a function to change settings given as its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut Settings<F>)
    {
        f(&mut self);
        self
    }
}

impl<F: Float> Default for Settings<F>
{
    fn default() -> Self
    {
        Self::standard()
    }
}
