/*!
Validated LP/QP problem definitions for active-set solvers.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate for Rust provides **standard-form LP and QP** whose data is checked and normalized
at construction, so that nothing ill-posed, redundant or dimensionally inconsistent
reaches a simplex or critical-line solver.

# General usage

1. Choose a [`totsu_core::LinAlgEx`] implementation, e.g. [`prelude::FloatGeneric`].
1. Construct the data with matrices using [`MatBuild`].
1. Create a [`ProbLP`] or [`ProbQP`]; either you get a well-posed problem or a [`ProbError`].
1. Derive other QPs by [`ProbQP::with_linear`], [`ProbQP::with_equality`] or [`ProbQP::from_lp`].
1. Pick [`Settings`] and hand everything over to a solver,
   which reports its progress as a sequence of [`Event`].

# Examples

A QP in the portfolio form, where \\(\mathbb{1}^T z = 1\\) and \\(z \succeq 0\\) by default:

```
use float_eq::assert_float_eq;
use activeset::prelude::*;
use activeset::*;

//env_logger::init(); // Use any logger crate as `activeset` uses `log` crate.

type La = FloatGeneric<f64>;
type AMatBuild = MatBuild<La>;
type AProbQP = ProbQP<La>;

let n = 2;

// not symmetric, stored as its symmetric part
let mat_v = AMatBuild::new(MatType::General(n, n)).iter_rowmaj(&[
    1., 2.,
    0., 3.,
]);

let qp = AProbQP::new(mat_v, ProbQPOpt::default()).unwrap();

assert_eq!((qp.n(), qp.m(), qp.j()), (2, 1, 0));
assert_float_eq!(qp.sym_v()[(0, 1)], 1., abs <= 0.);
assert_float_eq!(qp.sym_v()[(1, 0)], 1., abs <= 0.);

let qp_mu = qp.with_equality(0.1, &AMatBuild::from_vec(&[1., 1.])).unwrap();
assert_eq!(qp_mu.m(), 2);

let s = Settings::<f64>::standard().par(|s| {
    s.max_iter = 100;
});
assert_eq!(s.rule, Rule::Dantzig);
```
*/

mod matbuild;

pub use matbuild::*;

//

mod prob_error;

pub use prob_error::*;

//

mod problem;

pub use problem::*;

//

mod settings;
mod status;

pub use settings::*;
pub use status::*;

/// Prelude
pub mod prelude
{
    pub use totsu_core::{FloatGeneric, LinAlgEx, MatType};
}
