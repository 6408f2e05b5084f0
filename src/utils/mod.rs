pub mod convergence;
pub mod metric;
pub mod patches;

pub use convergence::{EigenEstimate, IterationLog};
pub use metric::nrmsd;
pub use patches::PatchTransform;
