use num_traits::Float;
use totsu_core::LinAlgEx;
use crate::{MatBuild, ProbError, ProbWarning};
use super::cons::{ProbCons, check_vec};

//

/// Options of [`ProbLP::new`].
///
/// Each `None` is resolved in the field order below,
/// since the defaults after `n` are sized by it.
pub struct ProbLPOpt<L: LinAlgEx>
{
    /// Number of variables \\(N\\). Defaults to the length of \\(c\\).
    pub n: Option<usize>,
    /// Upper bounds \\(u\\). Defaults to \\(+\infty\\).
    pub vec_u: Option<MatBuild<L>>,
    /// Lower bounds \\(d\\). Defaults to \\(0\\).
    pub vec_d: Option<MatBuild<L>>,
    /// \\(G\\). Defaults to no inequality; shall be given together with `vec_g`.
    pub mat_g: Option<MatBuild<L>>,
    /// \\(g\\). Defaults to no inequality; shall be given together with `mat_g`.
    pub vec_g: Option<MatBuild<L>>,
}

impl<L: LinAlgEx> Default for ProbLPOpt<L>
{
    fn default() -> Self
    {
        ProbLPOpt {
            n: None,
            vec_u: None,
            vec_d: None,
            mat_g: None,
            vec_g: None,
        }
    }
}

//

/// Linear program
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The problem is
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & c^T x \\\\
/// {\rm subject \ to} & A x = b \\\\
/// & G x \preceq g \\\\
/// & d \preceq x \preceq u,
/// \end{array}
/// \\]
/// where
/// - variables \\( x \in \mathbb{R}^N \\)
/// - \\( c \in \mathbb{R}^N \\)
/// - \\( A \in \mathbb{R}^{M \times N},\ b \in \mathbb{R}^M \\)
/// - \\( G \in \mathbb{R}^{J \times N},\ g \in \mathbb{R}^J \\)
/// - \\( d, u \in (\mathbb{R} \cup \lbrace \pm\infty \rbrace)^N \\).
///
/// A constructed instance always satisfies:
/// - \\( {\rm rank}(A) = {\rm rank}([A\ b]) = M \\);
/// - \\( d_i < u_i \\) for every \\( i \\);
/// - \\( J > 0 \\) or at least one of \\( d, u \\) has a finite element.
#[derive(Clone)]
pub struct ProbLP<L: LinAlgEx>
{
    pub(crate) vec_c: MatBuild<L>,
    pub(crate) cons: ProbCons<L>,
}

impl<L: LinAlgEx> ProbLP<L>
{
    /// Creates a LP with given data.
    ///
    /// Returns a [`ProbLP`] instance, or [`ProbError`] if the data is ill-posed.
    /// Swapped bounds are repaired with a logged warning; use [`ProbLP::new_diag`] to receive them.
    /// * `vec_c` is \\(c\\).
    /// * `mat_a` is \\(A\\).
    /// * `vec_b` is \\(b\\).
    /// * `opt` is the rest of the data, see [`ProbLPOpt`].
    pub fn new(
        vec_c: MatBuild<L>,
        mat_a: MatBuild<L>, vec_b: MatBuild<L>,
        opt: ProbLPOpt<L>) -> Result<Self, ProbError>
    {
        Self::new_diag(vec_c, mat_a, vec_b, opt, &mut Vec::new())
    }

    /// Same as [`ProbLP::new`], also collecting non-fatal diagnostics into `diag`.
    pub fn new_diag(
        vec_c: MatBuild<L>,
        mat_a: MatBuild<L>, vec_b: MatBuild<L>,
        opt: ProbLPOpt<L>,
        diag: &mut Vec<ProbWarning>) -> Result<Self, ProbError>
    {
        let n = opt.n.unwrap_or(vec_c.size().0);

        check_vec("c", &vec_c, n)?;

        let cons = ProbCons::new(
            n, mat_a, vec_b,
            opt.mat_g, opt.vec_g, opt.vec_d, opt.vec_u,
            diag
        )?;

        log::debug!("LP: N {}, M {}, J {}", cons.n(), cons.m(), cons.j());

        Ok(ProbLP {
            vec_c,
            cons,
        })
    }

    /// \\(c\\)
    pub fn vec_c(&self) -> &MatBuild<L>
    {
        &self.vec_c
    }

    /// Constraints.
    pub fn cons(&self) -> &ProbCons<L>
    {
        &self.cons
    }

    /// Number of variables \\(N\\).
    pub fn n(&self) -> usize
    {
        self.cons.n()
    }

    /// Number of equality constraints \\(M\\).
    pub fn m(&self) -> usize
    {
        self.cons.m()
    }

    /// Number of inequality constraints \\(J\\).
    pub fn j(&self) -> usize
    {
        self.cons.j()
    }
}

impl<L: LinAlgEx> PartialEq for ProbLP<L>
{
    fn eq(&self, other: &Self) -> bool
    {
        self.vec_c == other.vec_c && self.cons == other.cons
    }
}

impl<L: LinAlgEx> core::fmt::Debug for ProbLP<L>
where L::F: core::fmt::Debug
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        f.debug_struct("ProbLP")
         .field("vec_c", &self.vec_c)
         .field("cons", &self.cons)
         .finish()
    }
}

impl<L: LinAlgEx> core::fmt::Display for ProbLP<L>
where L::F: Float + core::fmt::LowerExp
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        writeln!(f, "LP (N {}, M {}, J {})", self.n(), self.m(), self.j())?;
        writeln!(f, "c: {}", self.vec_c)?;
        write!(f, "{}", self.cons)
    }
}
