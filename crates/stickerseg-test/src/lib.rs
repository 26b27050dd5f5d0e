//! stickerseg-test - Regression test framework for stickerseg
//!
//! Supports two modes, selected with the `REGTEST_MODE` environment variable:
//!
//! - **Compare** (default): run every check and report failures
//! - **Display**: additionally write intermediate images to `tests/regout`
//!
//! # Usage
//!
//! ```ignore
//! use stickerseg_test::RegParams;
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(2.0, regions.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // stickerseg-test is at crates/stickerseg-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
