use float_eq::assert_float_eq;
use activeset::prelude::*;
use activeset::*;

type La = FloatGeneric<f64>;

type AMatBuild = MatBuild<La>;
type AProbLP = ProbLP<La>;
type AProbQP = ProbQP<La>;

fn sample_qp() -> AProbQP
{
    let mat_v = AMatBuild::new(MatType::General(3, 3)).iter_rowmaj(&[
        2., 0., 0.,
        0., 1., 0.,
        0., 0., 3.,
    ]);
    let mat_g = AMatBuild::new(MatType::General(1, 3)).iter_rowmaj(&[
        1., -1., 0.,
    ]);

    AProbQP::new(mat_v, ProbQPOpt {
        vec_u: Some(AMatBuild::from_vec(&[1., 1., 1.])),
        mat_g: Some(mat_g),
        vec_g: Some(AMatBuild::from_vec(&[0.2])),
        vec_q: Some(AMatBuild::from_vec(&[-1., 0.5, 0.])),
        ..Default::default()
    }).unwrap()
}

//

#[test]
fn test_qp_symmetrize()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mat_v = AMatBuild::new(MatType::General(2, 2)).iter_rowmaj(&[
        1., 2.,
        0., 3.,
    ]);
    let qp = AProbQP::new(mat_v, ProbQPOpt::default()).unwrap();

    let sym_v = qp.sym_v();
    assert!(sym_v.is_sympack());
    for (r, c, v) in [(0, 0, 1.), (0, 1, 1.), (1, 0, 1.), (1, 1, 3.)] {
        assert_eq!(sym_v[(r, c)], v);
    }

    // portfolio defaults: sum of weights is one, no short sales
    assert_eq!(qp.cons().mat_a().as_ref(), &[1., 1.]);
    assert_eq!(qp.cons().vec_b().as_ref(), &[1.]);
    assert_eq!(qp.cons().vec_d().as_ref(), &[0., 0.]);
    assert_eq!(qp.vec_q().as_ref(), &[0., 0.]);
}

//

#[test]
fn test_qp_sympack_input()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let sym_v = AMatBuild::new(MatType::SymPack(2)).iter_colmaj(&[
        2.,
        1., 2.,
    ]);
    let qp = AProbQP::new(sym_v.clone(), ProbQPOpt::default()).unwrap();

    assert!(qp.sym_v() == &sym_v);
}

//

#[test]
fn test_qp_not_psd()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mat_v = AMatBuild::new(MatType::General(2, 2)).iter_rowmaj(&[
        0., 1.,
        1., 0.,
    ]);
    let rslt = AProbQP::new(mat_v, ProbQPOpt::default());

    match rslt.err() {
        Some(ProbError::NotPSD {min_eig}) => assert_float_eq!(min_eig, -1., abs <= 1e-9),
        e => panic!("unexpected {:?}", e),
    }

    // tiny negative curvature within tolerance
    let mat_v = AMatBuild::new(MatType::General(2, 2)).iter_rowmaj(&[
        1., 0.,
        0., -1e-12,
    ]);
    assert!(AProbQP::new(mat_v, ProbQPOpt::default()).is_ok());
}

//

#[test]
fn test_qp_checks()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let eye = AMatBuild::diag(&[1., 1.]);

    let rslt = AProbQP::new(eye.clone(), ProbQPOpt {
        vec_d: Some(AMatBuild::from_vec(&[0., 0.])),
        vec_u: Some(AMatBuild::from_vec(&[0., 1.])),
        ..Default::default()
    });
    assert_eq!(rslt.err(), Some(ProbError::DegenerateBound {index: 0}));

    let rslt = AProbQP::new(eye.clone(), ProbQPOpt {
        mat_a: Some(AMatBuild::new(MatType::General(2, 2)).iter_rowmaj(&[1., 1., 1., 1.])),
        vec_b: Some(AMatBuild::from_vec(&[1., 1.])),
        ..Default::default()
    });
    assert_eq!(rslt.err(), Some(ProbError::RedundantConstraints));

    let rslt = AProbQP::new(eye.clone(), ProbQPOpt {
        vec_q: Some(AMatBuild::from_vec(&[1., 1., 1.])),
        ..Default::default()
    });
    assert_eq!(rslt.err(), Some(ProbError::DimensionMismatch {name: "q", dims: (3, 1), expected: (2, 1)}));

    let rslt = AProbQP::new(eye.clone(), ProbQPOpt {
        vec_q: Some(AMatBuild::new(MatType::General(1, 2))),
        ..Default::default()
    });
    assert_eq!(rslt.err(), Some(ProbError::DimensionMismatch {name: "q", dims: (1, 2), expected: (2, 1)}));

    let rslt = AProbQP::new(AMatBuild::new(MatType::General(2, 3)), ProbQPOpt::default());
    assert_eq!(rslt.err(), Some(ProbError::DimensionMismatch {name: "V", dims: (2, 3), expected: (2, 2)}));

    let mut diag = Vec::new();
    let qp = AProbQP::new_diag(eye, ProbQPOpt {
        vec_d: Some(AMatBuild::from_vec(&[0., 2.])),
        vec_u: Some(AMatBuild::from_vec(&[1., -1.])),
        ..Default::default()
    }, &mut diag).unwrap();
    assert_eq!(qp.cons().vec_d().as_ref(), &[0., -1.]);
    assert_eq!(qp.cons().vec_u().as_ref(), &[1., 2.]);
    assert_eq!(diag.len(), 1);
}

//

#[test]
fn test_qp_from_lp()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let lp = AProbLP::new(
        AMatBuild::from_vec(&[3., -2.]),
        AMatBuild::new(MatType::General(1, 2)).iter_rowmaj(&[1., 1.]),
        AMatBuild::from_vec(&[1.]),
        ProbLPOpt {
            vec_u: Some(AMatBuild::from_vec(&[0.7, 0.8])),
            ..Default::default()
        },
    ).unwrap();

    let qp = AProbQP::from_lp(&lp);

    assert!(qp.sym_v() == &AMatBuild::diag(&[3.5, 2.5]));
    assert_eq!(qp.vec_q().as_ref(), &[0., 0.]);
    assert!(qp.cons() == lp.cons());
    assert_eq!((qp.n(), qp.m(), qp.j()), (lp.n(), lp.m(), lp.j()));

    assert!(AProbQP::from(&lp) == qp);
}

//

#[test]
fn test_qp_with_linear()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let qp = sample_qp();
    let vec_mu = AMatBuild::from_vec(&[1., 2., -4.]);

    let qp_l = qp.with_linear(&vec_mu, 0.5).unwrap();
    assert_float_eq!(qp_l.vec_q().as_ref(), [-0.5, -1., 2.].as_ref(), abs_all <= 1e-15);
    assert!(qp_l.sym_v() == qp.sym_v());
    assert!(qp_l.cons() == qp.cons());

    let qp_0 = qp.with_linear(&vec_mu, 0.).unwrap();
    assert!(qp_0.vec_q().as_ref().iter().all(|q| *q == 0.));

    // source is untouched
    assert_eq!(qp.vec_q().as_ref(), &[-1., 0.5, 0.]);

    let rslt = qp.with_linear(&AMatBuild::from_vec(&[1.]), 1.);
    assert_eq!(rslt.err(), Some(ProbError::DimensionMismatch {name: "q", dims: (1, 1), expected: (3, 1)}));
}

//

#[test]
fn test_qp_with_equality()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let qp = sample_qp();
    let vec_mu = AMatBuild::from_vec(&[0.1, 0.3, 0.2]);

    let qp_e = qp.with_equality(0.1, &vec_mu).unwrap();

    assert_eq!(qp_e.m(), qp.m() + 1);
    assert_eq!(qp_e.cons().mat_a().size(), (2, 3));
    for c in 0.. 3 {
        assert_eq!(qp_e.cons().mat_a()[(0, c)], 1.);
        assert_eq!(qp_e.cons().mat_a()[(1, c)], vec_mu[(c, 0)]);
    }
    assert_eq!(qp_e.cons().vec_b().as_ref(), &[1., 0.1]);
    assert_eq!(qp_e.vec_q().as_ref(), &[0., 0., 0.]);

    assert!(qp_e.sym_v() == qp.sym_v());
    assert!(qp_e.cons().mat_g() == qp.cons().mat_g());
    assert!(qp_e.cons().vec_g() == qp.cons().vec_g());
    assert!(qp_e.cons().vec_d() == qp.cons().vec_d());
    assert!(qp_e.cons().vec_u() == qp.cons().vec_u());
    assert_eq!((qp_e.n(), qp_e.j()), (qp.n(), qp.j()));

    // a row dependent on the existing one is not rejected
    let qp_dup = qp.with_equality(0.1, &AMatBuild::from_vec(&[1., 1., 1.])).unwrap();
    assert_eq!(qp_dup.m(), 2);
}

//

#[test]
fn test_qp_idempotent()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let qp1 = sample_qp();
    let qp2 = sample_qp();

    assert!(qp1 == qp2);
    assert!(format!("{}", qp1).starts_with("QP (N 3, M 1, J 1)"));
}
