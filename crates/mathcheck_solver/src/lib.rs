//! Numeric verification of model-written answers to one-variable equations.
//!
//! [`verify_and_augment_math_answer`] is the integration point: it returns
//! the answer with a checked `Final Answer:` line, or `None` when the answer
//! carries no usable equation or no root can be confirmed. The stages are
//! exposed individually for diagnostics.

pub mod candidates;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod reassemble;
pub mod scan;
pub mod verify;

pub use candidates::extract_candidates;
pub use error::VerifyError;
pub use options::{BisectionOptions, ScanOptions, VerifyOptions};
pub use pipeline::{verify_and_augment_math_answer, verify_math_answer, Verification};
pub use reassemble::{final_answer_line, reassemble, Root};
pub use scan::{bisection, scan_for_roots, scan_range};
pub use verify::verify_candidates;
