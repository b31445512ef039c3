mod cons;
mod lp;
mod qp;

pub use cons::ProbCons;
pub use lp::*;
pub use qp::*;
