//! chromaseg-test - Regression test harness
//!
//! Every crate's `tests/*_reg.rs` drives its public API through a
//! [`RegParams`], which numbers each check, records failures instead of
//! panicking on the first one, and reports them all at the end.
//!
//! Three modes are supported:
//!
//! - **Compare** (default): check values and images, comparing written
//!   files with golden copies
//! - **Generate**: write golden copies of every checked file
//! - **Display**: run the checks and keep the written outputs for
//!   inspection without golden comparison
//!
//! # Usage
//!
//! ```ignore
//! use chromaseg_test::RegParams;
//!
//! let mut rp = RegParams::new("distribution");
//! rp.compare_values(1.0, hist.total() as f64, 1e-5);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare`, `generate` or `display`
//! - `REGTEST_LOG`: log level (`error` .. `trace`) to print library logs

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Workspace root, two levels above this crate
fn workspace_root() -> String {
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Directory holding golden files
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Directory receiving regression outputs
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
