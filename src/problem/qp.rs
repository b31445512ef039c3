use num_traits::{Float, Zero, One, ToPrimitive};
use totsu_core::{LinAlgEx, MatType};
use crate::{MatBuild, ProbError, ProbWarning, ProbLP};
use super::cons::{ProbCons, check_size, check_vec, eps_eig, fail};

//

/// Options of [`ProbQP::new`].
///
/// Each `None` is resolved in the field order below,
/// since the defaults after `n` are sized by it.
pub struct ProbQPOpt<L: LinAlgEx>
{
    /// Number of variables \\(N\\). Defaults to the number of rows of \\(V\\).
    pub n: Option<usize>,
    /// Upper bounds \\(u\\). Defaults to \\(+\infty\\).
    pub vec_u: Option<MatBuild<L>>,
    /// Lower bounds \\(d\\). Defaults to \\(0\\).
    pub vec_d: Option<MatBuild<L>>,
    /// \\(G\\). Defaults to no inequality; shall be given together with `vec_g`.
    pub mat_g: Option<MatBuild<L>>,
    /// \\(g\\). Defaults to no inequality; shall be given together with `mat_g`.
    pub vec_g: Option<MatBuild<L>>,
    /// \\(q\\). Defaults to \\(0\\).
    pub vec_q: Option<MatBuild<L>>,
    /// \\(A\\). Defaults to \\(\mathbb{1}^T\\), a single row of ones.
    pub mat_a: Option<MatBuild<L>>,
    /// \\(b\\). Defaults to \\(1\\).
    pub vec_b: Option<MatBuild<L>>,
}

impl<L: LinAlgEx> Default for ProbQPOpt<L>
{
    fn default() -> Self
    {
        ProbQPOpt {
            n: None,
            vec_u: None,
            vec_d: None,
            mat_g: None,
            vec_g: None,
            vec_q: None,
            mat_a: None,
            vec_b: None,
        }
    }
}

//

/// Quadratic program
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The problem is
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & {1 \over 2} z^T V z + q^T z \\\\
/// {\rm subject \ to} & A z = b \\\\
/// & G z \preceq g \\\\
/// & d \preceq z \preceq u,
/// \end{array}
/// \\]
/// where
/// - variables \\( z \in \mathbb{R}^N \\)
/// - \\( V \in \mathcal{S}_{+}^N,\ q \in \mathbb{R}^N \\)
/// - \\( A \in \mathbb{R}^{M \times N},\ b \in \mathbb{R}^M \\)
/// - \\( G \in \mathbb{R}^{J \times N},\ g \in \mathbb{R}^J \\)
/// - \\( d, u \in (\mathbb{R} \cup \lbrace \pm\infty \rbrace)^N \\).
///
/// Besides the invariants of [`crate::ProbLP`],
/// \\( V \\) is stored symmetric as [`MatType::SymPack`]
/// and its smallest eigenvalue is not below \\( -\sqrt{\epsilon} \\).
#[derive(Clone)]
pub struct ProbQP<L: LinAlgEx>
{
    sym_v: MatBuild<L>,
    vec_q: MatBuild<L>,
    cons: ProbCons<L>,
}

impl<L: LinAlgEx> ProbQP<L>
{
    /// Creates a QP with given data.
    ///
    /// Returns a [`ProbQP`] instance, or [`ProbError`] if the data is ill-posed.
    /// Swapped bounds are repaired with a logged warning; use [`ProbQP::new_diag`] to receive them.
    /// * `mat_v` is \\(V\\), either [`MatType::General`] or [`MatType::SymPack`].
    ///   It is replaced by \\({1 \over 2}(V + V^T)\\).
    /// * `opt` is the rest of the data, see [`ProbQPOpt`].
    pub fn new(mat_v: MatBuild<L>, opt: ProbQPOpt<L>) -> Result<Self, ProbError>
    {
        Self::new_diag(mat_v, opt, &mut Vec::new())
    }

    /// Same as [`ProbQP::new`], also collecting non-fatal diagnostics into `diag`.
    pub fn new_diag(
        mat_v: MatBuild<L>,
        opt: ProbQPOpt<L>,
        diag: &mut Vec<ProbWarning>) -> Result<Self, ProbError>
    {
        let n = opt.n.unwrap_or(mat_v.size().0);

        check_size("V", &mat_v, (n, n))?;

        let vec_q = opt.vec_q.unwrap_or_else(|| MatBuild::new(MatType::General(n, 1)));
        let mat_a = opt.mat_a.unwrap_or_else(|| MatBuild::filled(MatType::General(1, n), L::F::one()));
        let vec_b = opt.vec_b.unwrap_or_else(|| MatBuild::filled(MatType::General(1, 1), L::F::one()));

        check_vec("q", &vec_q, n)?;

        let sym_v = mat_v.sym_part();

        let cons = ProbCons::new(
            n, mat_a, vec_b,
            opt.mat_g, opt.vec_g, opt.vec_d, opt.vec_u,
            diag
        )?;

        Self::check_psd(&sym_v)?;

        log::debug!("QP: N {}, M {}, J {}", cons.n(), cons.m(), cons.j());

        Ok(ProbQP {
            sym_v,
            vec_q,
            cons,
        })
    }

    fn check_psd(sym_v: &MatBuild<L>) -> Result<(), ProbError>
    {
        let eigs = sym_v.eig_vals(eps_eig::<L::F>());
        let min_eig = eigs.iter().fold(L::F::infinity(), |m, e| m.min(*e));
        log::trace!("min eigenvalue of V {:?}", min_eig.to_f64());

        if min_eig < -L::F::epsilon().sqrt() {
            fail(ProbError::NotPSD {min_eig: min_eig.to_f64().unwrap_or(f64::NAN)})
        }
        else {
            Ok(())
        }
    }

    /// Creates a QP of the same data except for the linear term.
    ///
    /// Returns a new [`ProbQP`] whose linear term is \\(-\lambda q\\).
    /// \\(V\\) and the constraints are already known valid and are not checked again.
    /// * `vec_q` is \\(q\\).
    /// * `lambda` is \\(\lambda\\).
    pub fn with_linear(&self, vec_q: &MatBuild<L>, lambda: L::F) -> Result<Self, ProbError>
    {
        check_vec("q", vec_q, self.n())?;

        Ok(ProbQP {
            sym_v: self.sym_v.clone(),
            vec_q: vec_q.clone().scale(-lambda),
            cons: self.cons.clone(),
        })
    }

    /// Creates a QP with an equality \\(q^T z = \mu\\) appended and a zero linear term.
    ///
    /// Returns a new [`ProbQP`] with \\(M + 1\\) equality constraints.
    /// Independence of the appended row from the rows of \\(A\\) is not checked;
    /// the caller shall make sure that the augmented \\(A\\) keeps full row rank.
    /// * `mu` is \\(\mu\\).
    /// * `vec_q` is \\(q\\).
    pub fn with_equality(&self, mu: L::F, vec_q: &MatBuild<L>) -> Result<Self, ProbError>
    {
        let n = self.n();

        check_vec("q", vec_q, n)?;
        log::debug!("equality appended as row {} without rank check", self.m());

        let cons = ProbCons {
            mat_a: self.cons.mat_a.vcat_row(vec_q),
            vec_b: self.cons.vec_b.vcat_row(&MatBuild::from_vec(&[mu])),
            ..self.cons.clone()
        };

        Ok(ProbQP {
            sym_v: self.sym_v.clone(),
            vec_q: MatBuild::new(MatType::General(n, 1)),
            cons,
        })
    }

    /// Creates a QP from a LP.
    ///
    /// Returns a [`ProbQP`] with \\(V = {\bf diag}(|c| + {1 \over 2})\\), a zero linear term
    /// and the constraints of `lp` as they are.
    pub fn from_lp(lp: &ProbLP<L>) -> Self
    {
        let n = lp.n();
        let f0 = L::F::zero();
        let f1 = L::F::one();
        let half = f1 / (f1 + f1);

        let diag_v: Vec<L::F> = lp.vec_c.as_ref().iter().map(|c| c.abs() + half).collect();

        ProbQP {
            sym_v: MatBuild::diag(&diag_v),
            vec_q: MatBuild::filled(MatType::General(n, 1), f0),
            cons: lp.cons.clone(),
        }
    }

    /// \\(V\\), as [`MatType::SymPack`].
    pub fn sym_v(&self) -> &MatBuild<L>
    {
        &self.sym_v
    }

    /// \\(q\\)
    pub fn vec_q(&self) -> &MatBuild<L>
    {
        &self.vec_q
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

impl<L: LinAlgEx> From<&ProbLP<L>> for ProbQP<L>
{
    fn from(lp: &ProbLP<L>) -> Self
    {
        ProbQP::from_lp(lp)
    }
}

impl<L: LinAlgEx> PartialEq for ProbQP<L>
{
    fn eq(&self, other: &Self) -> bool
    {
        self.sym_v == other.sym_v && self.vec_q == other.vec_q && self.cons == other.cons
    }
}

impl<L: LinAlgEx> core::fmt::Debug for ProbQP<L>
where L::F: core::fmt::Debug
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        f.debug_struct("ProbQP")
         .field("sym_v", &self.sym_v)
         .field("vec_q", &self.vec_q)
         .field("cons", &self.cons)
         .finish()
    }
}

impl<L: LinAlgEx> core::fmt::Display for ProbQP<L>
where L::F: Float + core::fmt::LowerExp
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        writeln!(f, "QP (N {}, M {}, J {})", self.n(), self.m(), self.j())?;
        writeln!(f, "V: {}", self.sym_v)?;
        writeln!(f, "q: {}", self.vec_q)?;
        write!(f, "{}", self.cons)
    }
}
