pub mod options;

pub use options::{ConstraintOptions, PowerIterOptions};
