use std::cell::RefCell;
use std::ops::{Index, IndexMut, Deref};
use num_traits::{Float, NumCast, Zero, One};
use totsu_core::solver::SliceLike;
use totsu_core::{LinAlgEx, MatType, MatOp};

//

/// Matrix builder
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js"></script>
///
/// Owned matrix data used for every coefficient array of [`crate::ProbLP`] and [`crate::ProbQP`].
/// Data is stored in column-major order ([`MatType::General`])
/// or as the upper triangle packed by columns ([`MatType::SymPack`]).
/// A vector is a [`MatType::General`] matrix with one column.
#[derive(Clone)]
pub struct MatBuild<L: LinAlgEx>
{
    typ: MatType,
    array: Vec<L::F>,
}

impl<L: LinAlgEx> MatBuild<L>
{
    /// Creates an instance.
    ///
    /// Returns the [`MatBuild`] instance with zero data.
    /// * `typ` is Matrix type and size.
    pub fn new(typ: MatType) -> Self
    {
        MatBuild {
            typ,
            array: vec![L::F::zero(); typ.len()],
        }
    }

    /// Creates an instance with every element set to `value`.
    pub fn filled(typ: MatType, value: L::F) -> Self
    {
        MatBuild {
            typ,
            array: vec![value; typ.len()],
        }
    }

    /// Creates a column vector.
    ///
    /// * `v` is data of the vector.
    pub fn from_vec(v: &[L::F]) -> Self
    {
        MatBuild {
            typ: MatType::General(v.len(), 1),
            array: v.to_vec(),
        }
    }

    /// Creates a diagonal matrix \\({\bf diag}(v)\\) as [`MatType::SymPack`].
    pub fn diag(v: &[L::F]) -> Self
    {
        let f0 = L::F::zero();

        MatBuild::new(MatType::SymPack(v.len())).by_fn(|r, c| {
            if r == c {v[r]} else {f0}
        })
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        self.typ.size()
    }

    /// Matrix type.
    pub fn typ(&self) -> MatType
    {
        self.typ
    }

    /// Converted as [`totsu_core::MatOp`].
    ///
    /// Returns the [`totsu_core::MatOp`] borrowing the internal data array.
    pub fn as_op(&self) -> MatOp<'_, L>
    {
        MatOp::new(self.typ, &self.array)
    }

    /// Checks if symmetric packed.
    ///
    /// Returns `true` if [`MatType::SymPack`], `false` otherwise.
    pub fn is_sympack(&self) -> bool
    {
        matches!(self.typ, MatType::SymPack(_))
    }

    /// Checks if a column vector, that is a [`MatType::General`] with one column.
    pub fn is_vec(&self) -> bool
    {
        matches!(self.typ, MatType::General(_, 1))
    }

    /// Data by a function.
    ///
    /// * `func` takes a row and a column of the matrix and returns data of each element.
    ///   Only the upper triangle is visited for [`MatType::SymPack`].
    pub fn set_by_fn<M>(&mut self, mut func: M)
    where M: FnMut(usize, usize) -> L::F
    {
        match self.typ {
            MatType::General(nr, nc) => {
                for c in 0.. nc {
                    for r in 0.. nr {
                        self[(r, c)] = func(r, c);
                    }
                }
            },
            MatType::SymPack(n) => {
                for c in 0.. n {
                    for r in 0..= c {
                        self[(r, c)] = func(r, c);
                    }
                }
            },
        };
    }
    /// Builder pattern of [`MatBuild::set_by_fn`].
    pub fn by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize, usize) -> L::F
    {
        self.set_by_fn(func);
        self
    }

    /// Data by an iterator in column-major.
    ///
    /// * `iter` iterates matrix data in column-major.
    pub fn set_iter_colmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        let mut i = iter.into_iter();
        let (nr, nc) = self.typ.size();

        for c in 0.. nc {
            for r in 0.. nr {
                match i.next() {
                    Some(v) => self[(r, c)] = *v,
                    None => return,
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_colmaj`].
    pub fn iter_colmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        self.set_iter_colmaj(iter);
        self
    }

    /// Data by an iterator in row-major.
    ///
    /// * `iter` iterates matrix data in row-major.
    pub fn set_iter_rowmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        let mut i = iter.into_iter();
        let (nr, nc) = self.typ.size();

        for r in 0.. nr {
            for c in 0.. nc {
                match i.next() {
                    Some(v) => self[(r, c)] = *v,
                    None => return,
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_rowmaj`].
    pub fn iter_rowmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        self.set_iter_rowmaj(iter);
        self
    }

    /// Scales by \\(\alpha\\).
    ///
    /// * `alpha` is a scalar \\(\alpha\\).
    pub fn set_scale(&mut self, alpha: L::F)
    {
        L::scale(alpha, &mut L::Sl::new_mut(&mut self.array));
    }
    /// Builder pattern of [`MatBuild::set_scale`].
    pub fn scale(mut self, alpha: L::F) -> Self
    {
        self.set_scale(alpha);
        self
    }

    /// Symmetric part \\({1 \over 2}(X + X^T)\\) as [`MatType::SymPack`].
    ///
    /// A [`MatType::SymPack`] matrix is returned as it is.
    /// A [`MatType::General`] matrix shall be square.
    pub fn sym_part(&self) -> Self
    {
        match self.typ {
            MatType::SymPack(_) => self.clone(),
            MatType::General(nr, nc) => {
                assert_eq!(nr, nc);

                let f2 = L::F::one() + L::F::one();
                MatBuild::new(MatType::SymPack(nr)).by_fn(|r, c| {
                    (self[(r, c)] + self[(c, r)]) / f2
                })
            },
        }
    }

    /// Jordan-Wielandt matrix \\(\left[ \begin{array}{cc} 0 & X \\\\ X^T & 0 \end{array} \right]\\) as [`MatType::SymPack`].
    ///
    /// Its eigenvalues are \\(\pm\sigma_i\\), the singular values of \\(X\\), padded with zeros.
    pub fn jordan_wielandt(&self) -> Self
    {
        let (nr, nc) = self.size();
        let f0 = L::F::zero();

        MatBuild::new(MatType::SymPack(nr + nc)).by_fn(|r, c| {
            if r < nr && c >= nr {self[(r, c - nr)]} else {f0}
        })
    }

    /// Eigenvalues of a symmetric matrix.
    ///
    /// Returns the eigenvalues in no particular order.
    /// A [`MatType::General`] matrix is replaced by its [`MatBuild::sym_part`].
    /// * `eps_zero` is the convergence tolerance passed to [`totsu_core::LinAlgEx::map_eig`].
    ///   The matrix is normalized by its largest absolute element beforehand,
    ///   so the tolerance is relative to that element.
    pub fn eig_vals(&self, eps_zero: L::F) -> Vec<L::F>
    {
        if !self.is_sympack() {
            return self.sym_part().eig_vals(eps_zero);
        }

        let f0 = L::F::zero();
        let n = self.size().0;
        if n == 0 {
            return Vec::new();
        }

        let amax = self.array.iter().fold(f0, |m, v| m.max(v.abs()));
        if amax == f0 {
            return vec![f0; n];
        }

        let mut array = self.array.clone();
        L::scale(amax.recip(), &mut L::Sl::new_mut(&mut array));

        let mut work_vec = vec![f0; L::map_eig_worklen(n)];
        let mut work = L::Sl::new_mut(&mut work_vec);

        // map_eig overwrites `array`; only the eigenvalues are kept
        let eigs = RefCell::new(Vec::with_capacity(n));
        L::map_eig(&mut L::Sl::new_mut(&mut array), None, eps_zero, &mut work, |e| {
            eigs.borrow_mut().push(e * amax);
            None
        });

        eigs.into_inner()
    }

    /// Numerical row rank.
    ///
    /// Counts singular values of the matrix greater than
    /// \\((M + N) \max(\epsilon, \epsilon_0) \sigma_{\rm max}\\),
    /// where \\(\epsilon\\) is the machine epsilon and \\(\epsilon_0\\) is `eps_zero`.
    /// The singular values are taken from [`MatBuild::jordan_wielandt`],
    /// so the condition number is not squared.
    /// * `eps_zero` is passed to [`MatBuild::eig_vals`].
    pub fn rank(&self, eps_zero: L::F) -> usize
    {
        let (nr, nc) = self.size();
        if nr == 0 || nc == 0 {
            return 0;
        }

        let f0 = L::F::zero();
        let sigmas: Vec<L::F> = self.jordan_wielandt().eig_vals(eps_zero).into_iter()
            .filter(|e| *e > f0)
            .collect();
        let s_max = sigmas.iter().fold(f0, |m, s| m.max(*s));
        if s_max <= f0 {
            return 0;
        }

        let dim: L::F = NumCast::from(nr + nc).unwrap_or(L::F::one());
        let thr = s_max * dim * eps_zero.max(L::F::epsilon());
        sigmas.iter().filter(|s| **s > thr).count()
    }

    /// Appends a column: \\([X\ v]\\).
    ///
    /// * `col` shall be a column vector with as many rows as the matrix.
    pub fn hcat_col(&self, col: &MatBuild<L>) -> Self
    {
        let (nr, nc) = self.size();
        assert!(col.is_vec());
        assert_eq!(col.size().0, nr);

        MatBuild::new(MatType::General(nr, nc + 1)).by_fn(|r, c| {
            if c < nc {self[(r, c)]} else {col[(r, 0)]}
        })
    }

    /// Appends a row: \\(\left[ \begin{array}{c} X \\\\ v^T \end{array} \right]\\).
    ///
    /// * `row` shall be a column vector with as many rows as the matrix has columns.
    pub fn vcat_row(&self, row: &MatBuild<L>) -> Self
    {
        let (nr, nc) = self.size();
        assert!(row.is_vec());
        assert_eq!(row.size().0, nc);

        MatBuild::new(MatType::General(nr + 1, nc)).by_fn(|r, c| {
            if r < nr {self[(r, c)]} else {row[(c, 0)]}
        })
    }

    fn index(&self, (r, c): (usize, usize)) -> usize
    {
        let i = match self.typ {
            MatType::General(nr, nc) => {
                assert!(r < nr);
                assert!(c < nc);
                c * nr + r
            },
            MatType::SymPack(n) => {
                assert!(r < n);
                assert!(c < n);
                let (r, c) = if r <= c {
                    (r, c)
                }
                else {
                    (c, r)
                };
                c * (c + 1) / 2 + r
            },
        };

        assert!(i < self.array.len());
        i
    }
}

//

impl<L: LinAlgEx> Index<(usize, usize)> for MatBuild<L>
{
    type Output = L::F;
    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        let i = self.index(index);

        &self.array[i]
    }
}

impl<L: LinAlgEx> IndexMut<(usize, usize)> for MatBuild<L>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output
    {
        let i = self.index(index);

        &mut self.array[i]
    }
}

impl<L: LinAlgEx> AsRef<[L::F]> for MatBuild<L>
{
    fn as_ref(&self) -> &[L::F]
    {
        &self.array
    }
}

impl<L: LinAlgEx> core::fmt::Debug for MatBuild<L>
where L::F: core::fmt::Debug
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        f.debug_struct("MatBuild")
         .field("typ", &self.typ)
         .field("array", &self.array)
         .finish()
    }
}

// bitwise for floats: a stored NaN compares unequal
impl<L: LinAlgEx> PartialEq for MatBuild<L>
{
    fn eq(&self, other: &Self) -> bool
    {
        self.typ == other.typ && self.array == other.array
    }
}

//

impl<L: LinAlgEx> core::fmt::Display for MatBuild<L>
where L::F: Float + core::fmt::LowerExp
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let (nr, nc) = self.size();
        if nr == 0 || nc == 0 {
            write!(f, "[ ]")?;
        }
        else {
            write!(f, "[ {:.3e}", self[(0, 0)])?;
            if nc > 2 {
                write!(f, " ...")?;
            }
            if nc > 1 {
                write!(f, " {:.3e}", self[(0, nc - 1)])?;
            }

            if nr > 2 {
                write!(f, " ;...")?;
            }

            if nr > 1 {
                write!(f, " ; {:.3e}", self[(nr - 1, 0)])?;
                if nc > 2 {
                    write!(f, " ...")?;
                }
                if nc > 1 {
                    write!(f, " {:.3e}", self[(nr - 1, nc - 1)])?;
                }
            }
            write!(f, " ]")?;
        }

        write!(f, " ({} x {})", nr, nc)
    }
}

//

#[test]
fn test_matbuild_sym_part()
{
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let m = MatBuild::<L>::new(MatType::General(2, 2)).iter_rowmaj(&[
        1., 2.,
        0., 3.,
    ]);
    let s = m.sym_part();

    assert!(s.is_sympack());
    assert_eq!(s.as_ref(), &[1., 1., 3.]);
    assert_eq!(s[(1, 0)], s[(0, 1)]);
}

#[test]
fn test_matbuild_eig_vals()
{
    use float_eq::assert_float_eq;
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let m = MatBuild::<L>::new(MatType::SymPack(2)).iter_colmaj(&[
        0.,
        1., 0.,
    ]);
    let mut e = m.eig_vals(1e-12);
    e.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_float_eq!(AsRef::<[f64]>::as_ref(&e), [-1., 1.].as_ref(), abs_all <= 1e-9);
}

#[test]
fn test_matbuild_rank()
{
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let full = MatBuild::<L>::new(MatType::General(2, 3)).iter_rowmaj(&[
        1., 0., 2.,
        0., 1., 1.,
    ]);
    assert_eq!(full.rank(1e-12), 2);

    let dup = MatBuild::<L>::new(MatType::General(2, 2)).iter_rowmaj(&[
        1., 1.,
        2., 2.,
    ]);
    assert_eq!(dup.rank(1e-12), 1);

    let aug = dup.hcat_col(&MatBuild::from_vec(&[1., 3.]));
    assert_eq!(aug.size(), (2, 3));
    assert_eq!(aug.rank(1e-12), 2);

    assert_eq!(MatBuild::<L>::new(MatType::General(2, 2)).rank(1e-12), 0);
    assert_eq!(MatBuild::<L>::new(MatType::General(0, 2)).rank(1e-12), 0);
}

#[test]
fn test_matbuild_rank_scaled()
{
    use totsu_core::FloatGeneric;

    type L = FloatGeneric<f64>;

    let rows = MatBuild::<L>::new(MatType::General(2, 2)).iter_rowmaj(&[
        1e4, 0.,
        0., 1.,
    ]);
    assert_eq!(rows.rank(1e-12), 2);

    let near = MatBuild::<L>::new(MatType::General(2, 2)).iter_rowmaj(&[
        1., 1.,
        1., 1.0001,
    ]);
    assert_eq!(near.rank(1e-12), 2);

    let tiny = MatBuild::<L>::new(MatType::General(2, 3)).iter_rowmaj(&[
        1e-6, 2e-6, 0.,
        3e-6, 6e-6, 0.,
    ]);
    assert_eq!(tiny.rank(1e-12), 1);

    let jw = tiny.jordan_wielandt();
    assert_eq!(jw.size(), (5, 5));
    assert_eq!(jw[(3, 1)], 6e-6);
    assert_eq!(jw[(0, 0)], 0.);
}

#[test]
fn test_matbuild_vcat_row()
{
    use totsu_core::FloatGeneric;
    use totsu_core::solver::Operator;

    type L = FloatGeneric<f64>;

    let m = MatBuild::<L>::filled(MatType::General(1, 2), 1.)
            .vcat_row(&MatBuild::from_vec(&[3., 4.]));

    assert_eq!(m.size(), (2, 2));
    assert_eq!(m.as_ref(), &[1., 3., 1., 4.]);
    assert_eq!(m.as_op().size(), (2, 2));
}
