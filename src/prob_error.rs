/// Problem construction errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbError
{
    /// An array has a size disagreeing with the problem dimensions.
    DimensionMismatch {
        /// Name of the offending array.
        name: &'static str,
        /// Size as given.
        dims: (usize, usize),
        /// Size as required.
        expected: (usize, usize),
    },
    /// \\(Ax=b\\) has no solution.
    Infeasible,
    /// Rows of \\(A\\) are linearly dependent.
    RedundantConstraints,
    /// Lower and upper bounds of a variable are equal.
    DegenerateBound {
        /// Index of the variable.
        index: usize,
    },
    /// A bound is NaN.
    NotANumber {
        /// Name of the offending array.
        name: &'static str,
        /// Index of the variable.
        index: usize,
    },
    /// Neither an inequality nor a finite bound exists.
    Underconstrained,
    /// Quadratic term has a negative eigenvalue beyond the tolerance.
    NotPSD {
        /// Smallest eigenvalue found.
        min_eig: f64,
    },
}

impl core::fmt::Display for ProbError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            ProbError::DimensionMismatch {name, dims, expected} =>
                write!(f, "DimensionMismatch: {} is {}x{}, expected {}x{}", name, dims.0, dims.1, expected.0, expected.1),
            ProbError::Infeasible =>
                write!(f, "Infeasible: equality constraints have no solution"),
            ProbError::RedundantConstraints =>
                write!(f, "RedundantConstraints: equality constraints are linearly dependent"),
            ProbError::DegenerateBound {index} =>
                write!(f, "DegenerateBound: lower and upper bounds of variable {} are equal", index),
            ProbError::NotANumber {name, index} =>
                write!(f, "NotANumber: element {} of {} is NaN", index, name),
            ProbError::Underconstrained =>
                write!(f, "Underconstrained: no inequality and no finite bound"),
            ProbError::NotPSD {min_eig} =>
                write!(f, "NotPSD: quadratic term has eigenvalue {:.3e}", min_eig),
        }
    }
}

impl std::error::Error for ProbError {}

//

/// Non-fatal diagnostics reported while constructing a problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbWarning
{
    /// Lower bound was greater than upper bound; they have been swapped.
    BoundOrder {
        /// Index of the variable.
        index: usize,
        /// Lower bound as given.
        lower: f64,
        /// Upper bound as given.
        upper: f64,
    },
}

impl core::fmt::Display for ProbWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            ProbWarning::BoundOrder {index, lower, upper} =>
                write!(f, "BoundOrder: swapped bounds of variable {} (given lower {:.3e} > upper {:.3e})", index, lower, upper),
        }
    }
}

//

#[test]
fn test_prob_error_display()
{
    let e = ProbError::DimensionMismatch {name: "G", dims: (2, 3), expected: (2, 4)};
    assert_eq!(e.to_string(), "DimensionMismatch: G is 2x3, expected 2x4");

    let e = ProbError::NotANumber {name: "u", index: 1};
    assert_eq!(e.to_string(), "NotANumber: element 1 of u is NaN");

    let w = ProbWarning::BoundOrder {index: 0, lower: 5., upper: 1.};
    assert!(w.to_string().starts_with("BoundOrder: swapped bounds of variable 0"));
}
