use num_traits::{Float, Zero, ToPrimitive};
use totsu_core::{LinAlgEx, MatType};
use crate::{MatBuild, ProbError, ProbWarning};

//

pub(crate) fn fail<T>(e: ProbError) -> Result<T, ProbError>
{
    log::error!("{}", e);
    Err(e)
}

pub(crate) fn check_size<L: LinAlgEx>(name: &'static str, mat: &MatBuild<L>, expected: (usize, usize)) -> Result<(), ProbError>
{
    let dims = mat.size();

    if dims != expected {
        fail(ProbError::DimensionMismatch {name, dims, expected})
    }
    else {
        Ok(())
    }
}

// a vector shall be a `General` matrix of one column
pub(crate) fn check_vec<L: LinAlgEx>(name: &'static str, vec: &MatBuild<L>, len: usize) -> Result<(), ProbError>
{
    if vec.is_vec() {
        check_size(name, vec, (len, 1))
    }
    else {
        fail(ProbError::DimensionMismatch {name, dims: vec.size(), expected: (len, 1)})
    }
}

// tolerance of the Jacobi sweeps behind rank and PSD checks
pub(crate) fn eps_eig<F: Float>() -> F
{
    let eps = F::epsilon();
    eps.sqrt() * eps.sqrt().sqrt()
}

fn to_f64<F: Float>(v: F) -> f64
{
    v.to_f64().unwrap_or(f64::NAN)
}

//

/// Constraints shared by [`crate::ProbLP`] and [`crate::ProbQP`]
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// \\[
/// A x = b,\quad G x \preceq g,\quad d \preceq x \preceq u
/// \\]
/// with \\( A \in \mathbb{R}^{M \times N} \\) of full row rank,
/// \\( G \in \mathbb{R}^{J \times N} \\) and \\( d_i < u_i \\) for every \\( i \\).
#[derive(Clone)]
pub struct ProbCons<L: LinAlgEx>
{
    pub(crate) mat_a: MatBuild<L>,
    pub(crate) vec_b: MatBuild<L>,
    pub(crate) mat_g: MatBuild<L>,
    pub(crate) vec_g: MatBuild<L>,
    pub(crate) vec_d: MatBuild<L>,
    pub(crate) vec_u: MatBuild<L>,
}

impl<L: LinAlgEx> ProbCons<L>
{
    /// Validates and normalizes constraint data of `n` variables.
    ///
    /// Defaults: \\(u = +\infty\\), \\(d = 0\\), no inequality.
    pub(crate) fn new(
        n: usize,
        mat_a: MatBuild<L>, vec_b: MatBuild<L>,
        mat_g: Option<MatBuild<L>>, vec_g: Option<MatBuild<L>>,
        vec_d: Option<MatBuild<L>>, vec_u: Option<MatBuild<L>>,
        diag: &mut Vec<ProbWarning>) -> Result<Self, ProbError>
    {
        let f0 = L::F::zero();
        let finf = L::F::infinity();

        let mut vec_u = vec_u.unwrap_or_else(|| MatBuild::filled(MatType::General(n, 1), finf));
        let mut vec_d = vec_d.unwrap_or_else(|| MatBuild::filled(MatType::General(n, 1), f0));
        let (mat_g, vec_g) = match (mat_g, vec_g) {
            (Some(mat_g), Some(vec_g)) => (mat_g, vec_g),
            (None, None) => (
                MatBuild::new(MatType::General(0, n)),
                MatBuild::new(MatType::General(0, 1)),
            ),
            (Some(mat_g), None) => {
                return fail(ProbError::DimensionMismatch {name: "g", dims: (0, 0), expected: (mat_g.size().0, 1)});
            },
            (None, Some(vec_g)) => {
                return fail(ProbError::DimensionMismatch {name: "G", dims: (0, 0), expected: (vec_g.size().0, n)});
            },
        };

        let m = vec_b.size().0;
        let j = vec_g.size().0;

        check_vec("b", &vec_b, m)?;
        check_size("A", &mat_a, (m, n))?;
        check_vec("g", &vec_g, j)?;
        check_size("G", &mat_g, (j, n))?;
        check_vec("d", &vec_d, n)?;
        check_vec("u", &vec_u, n)?;

        Self::check_nan("d", &vec_d)?;
        Self::check_nan("u", &vec_u)?;

        Self::check_rank(&mat_a, &vec_b)?;

        Self::repair_bounds(&mut vec_d, &mut vec_u, diag);
        Self::check_bounds(&vec_d, &vec_u, j)?;

        Ok(ProbCons {
            mat_a, vec_b, mat_g, vec_g, vec_d, vec_u,
        })
    }

    fn check_rank(mat_a: &MatBuild<L>, vec_b: &MatBuild<L>) -> Result<(), ProbError>
    {
        let m = vec_b.size().0;
        let eps_zero = eps_eig::<L::F>();

        let rank_a = mat_a.rank(eps_zero);
        let rank_ab = mat_a.hcat_col(vec_b).rank(eps_zero);
        log::trace!("rank(A) {}, rank([A|b]) {}, M {}", rank_a, rank_ab, m);

        if rank_ab > rank_a {
            fail(ProbError::Infeasible)
        }
        else if rank_a < m {
            fail(ProbError::RedundantConstraints)
        }
        else {
            Ok(())
        }
    }

    fn check_nan(name: &'static str, vec: &MatBuild<L>) -> Result<(), ProbError>
    {
        match vec.as_ref().iter().position(|v| v.is_nan()) {
            Some(index) => fail(ProbError::NotANumber {name, index}),
            None => Ok(()),
        }
    }

    fn repair_bounds(vec_d: &mut MatBuild<L>, vec_u: &mut MatBuild<L>, diag: &mut Vec<ProbWarning>)
    {
        for i in 0.. vec_d.size().0 {
            let (d, u) = (vec_d[(i, 0)], vec_u[(i, 0)]);

            if u < d {
                let w = ProbWarning::BoundOrder {index: i, lower: to_f64(d), upper: to_f64(u)};
                log::warn!("{}", w);
                diag.push(w);

                vec_d[(i, 0)] = u;
                vec_u[(i, 0)] = d;
            }
        }
    }

    fn check_bounds(vec_d: &MatBuild<L>, vec_u: &MatBuild<L>, j: usize) -> Result<(), ProbError>
    {
        let n = vec_d.size().0;

        if let Some(index) = (0.. n).find(|&i| vec_d[(i, 0)] == vec_u[(i, 0)]) {
            return fail(ProbError::DegenerateBound {index});
        }

        let bounded = (0.. n).any(|i| vec_d[(i, 0)].is_finite() || vec_u[(i, 0)].is_finite());
        if j == 0 && !bounded {
            return fail(ProbError::Underconstrained);
        }

        Ok(())
    }

    /// Number of variables \\(N\\).
    pub fn n(&self) -> usize
    {
        self.mat_a.size().1
    }

    /// Number of equality constraints \\(M\\).
    pub fn m(&self) -> usize
    {
        self.vec_b.size().0
    }

    /// Number of inequality constraints \\(J\\).
    pub fn j(&self) -> usize
    {
        self.vec_g.size().0
    }

    /// \\(A\\)
    pub fn mat_a(&self) -> &MatBuild<L>
    {
        &self.mat_a
    }

    /// \\(b\\)
    pub fn vec_b(&self) -> &MatBuild<L>
    {
        &self.vec_b
    }

    /// \\(G\\)
    pub fn mat_g(&self) -> &MatBuild<L>
    {
        &self.mat_g
    }

    /// \\(g\\)
    pub fn vec_g(&self) -> &MatBuild<L>
    {
        &self.vec_g
    }

    /// Lower bounds \\(d\\).
    pub fn vec_d(&self) -> &MatBuild<L>
    {
        &self.vec_d
    }

    /// Upper bounds \\(u\\).
    pub fn vec_u(&self) -> &MatBuild<L>
    {
        &self.vec_u
    }
}

impl<L: LinAlgEx> PartialEq for ProbCons<L>
{
    fn eq(&self, other: &Self) -> bool
    {
        self.mat_a == other.mat_a && self.vec_b == other.vec_b &&
        self.mat_g == other.mat_g && self.vec_g == other.vec_g &&
        self.vec_d == other.vec_d && self.vec_u == other.vec_u
    }
}

impl<L: LinAlgEx> core::fmt::Debug for ProbCons<L>
where L::F: core::fmt::Debug
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        f.debug_struct("ProbCons")
         .field("mat_a", &self.mat_a)
         .field("vec_b", &self.vec_b)
         .field("mat_g", &self.mat_g)
         .field("vec_g", &self.vec_g)
         .field("vec_d", &self.vec_d)
         .field("vec_u", &self.vec_u)
         .finish()
    }
}

impl<L: LinAlgEx> core::fmt::Display for ProbCons<L>
where L::F: Float + core::fmt::LowerExp
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        writeln!(f, "A: {}", self.mat_a)?;
        writeln!(f, "b: {}", self.vec_b)?;
        writeln!(f, "G: {}", self.mat_g)?;
        writeln!(f, "g: {}", self.vec_g)?;
        writeln!(f, "d: {}", self.vec_d)?;
        write!(f, "u: {}", self.vec_u)
    }
}

//

#[test]
fn test_cons_defaults()
{
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let mut diag = Vec::new();
    let cons = ProbCons::<L>::new(
        2,
        MatBuild::new(MatType::General(0, 2)), MatBuild::new(MatType::General(0, 1)),
        None, None, None, None,
        &mut diag,
    ).unwrap();

    assert_eq!((cons.n(), cons.m(), cons.j()), (2, 0, 0));
    assert_eq!(cons.vec_d().as_ref(), &[0., 0.]);
    assert!(cons.vec_u().as_ref().iter().all(|u| *u == f64::INFINITY));
    assert!(diag.is_empty());
}

#[test]
fn test_cons_mat_g_alone()
{
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let rslt = ProbCons::<L>::new(
        2,
        MatBuild::new(MatType::General(0, 2)), MatBuild::new(MatType::General(0, 1)),
        Some(MatBuild::new(MatType::General(1, 2))), None, None, None,
        &mut Vec::new(),
    );

    assert_eq!(rslt.unwrap_err(), ProbError::DimensionMismatch {name: "g", dims: (0, 0), expected: (1, 1)});
}

#[test]
fn test_cons_vec_shape()
{
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let rslt = ProbCons::<L>::new(
        2,
        MatBuild::new(MatType::General(1, 2)).iter_rowmaj(&[1., 1.]),
        MatBuild::new(MatType::SymPack(1)).iter_colmaj(&[1.]),
        None, None, None, None,
        &mut Vec::new(),
    );
    assert_eq!(rslt.unwrap_err(), ProbError::DimensionMismatch {name: "b", dims: (1, 1), expected: (1, 1)});

    let rslt = ProbCons::<L>::new(
        2,
        MatBuild::new(MatType::General(0, 2)), MatBuild::new(MatType::General(0, 1)),
        None, None, Some(MatBuild::new(MatType::General(1, 2))), None,
        &mut Vec::new(),
    );
    assert_eq!(rslt.unwrap_err(), ProbError::DimensionMismatch {name: "d", dims: (1, 2), expected: (2, 1)});
}
