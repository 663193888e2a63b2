//! Per-test bookkeeping

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use chromaseg_core::{Pix, logger};
use chromaseg_io::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// What happens to files written by a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Outputs become the new golden copies
    Generate,
    #[default]
    Compare,
    /// Outputs stay in the regout directory, nothing is compared
    Display,
}

impl RegTestMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Case-insensitive; unknown names fall back to `Compare`.
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("generate") {
            Self::Generate
        } else if name.eq_ignore_ascii_case("display") {
            Self::Display
        } else {
            Self::Compare
        }
    }
}

/// Numbered checks of one `*_reg` test
///
/// A failing check is logged and remembered; the test carries on so that
/// [`RegParams::cleanup`] can list every failure at once.
pub struct RegParams {
    pub test_name: String,
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Open a test named `test_name`.
    ///
    /// Makes sure the golden and regout directories exist and hooks up the
    /// stderr logger when `REGTEST_LOG` holds a level name.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        for dir in [golden_dir(), regout_dir()] {
            let _ = fs::create_dir_all(dir);
        }
        let level = std::env::var("REGTEST_LOG")
            .ok()
            .and_then(|v| logger::parse_level(&v));
        if let Some(level) = level {
            let _ = logger::init_with_level(level);
        }
        eprintln!("\n--- {}_reg, {:?} mode ---", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Count one check and remember it when `detail` is present.
    fn record(&mut self, detail: Option<String>) -> bool {
        self.index += 1;
        match detail {
            None => true,
            Some(detail) => {
                let line = format!("{}_reg #{}: {}", self.test_name, self.index, detail);
                eprintln!("{}", line);
                self.failures.push(line);
                false
            }
        }
    }

    /// `actual` must lie within `delta` of `expected`; NaN never does.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        let within = diff <= delta;
        let detail = (!within).then(|| {
            format!(
                "wanted {} +/- {}, got {} (off by {})",
                expected, delta, actual, diff
            )
        });
        self.record(detail)
    }

    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.record((!ok).then(|| format!("not true: {}", what)))
    }

    /// Images must agree in size, depth and every pixel.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.record(first_difference(pix1, pix2))
    }

    /// Save `pix` under the regout directory, then handle it per mode.
    ///
    /// Compare mode decodes both files when their bytes differ, so two
    /// encodings of the same pixels still match.
    pub fn write_pix_and_check(&mut self, pix: &Pix, format: ImageFormat) -> TestResult<()> {
        let number = self.index + 1;
        let out = self.numbered(&regout_dir(), "", number, format.extension());
        chromaseg_io::write_image(pix, &out, format).map_err(|e| TestError::ImageWrite {
            path: out.display().to_string(),
            message: e.to_string(),
        })?;

        let golden = self.numbered(&golden_dir(), "_golden", number, format.extension());
        let detail = match self.mode {
            RegTestMode::Display => None,
            RegTestMode::Generate => {
                fs::copy(&out, &golden)?;
                eprintln!("wrote golden {}", golden.display());
                None
            }
            RegTestMode::Compare if !golden.exists() => {
                Some(format!("no golden file at {}", golden.display()))
            }
            RegTestMode::Compare => (fs::read(&out)? != fs::read(&golden)?
                && !same_pixels(&out, &golden))
            .then(|| format!("{} does not match {}", out.display(), golden.display())),
        };
        self.record(detail);
        Ok(())
    }

    fn numbered(&self, dir: &str, tag: &str, number: usize, ext: &str) -> PathBuf {
        Path::new(dir).join(format!("{}{}.{:02}.{}", self.test_name, tag, number, ext))
    }

    /// Print the summary; true when no check failed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("{}_reg passed {} checks\n", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "{}_reg failed {} of {} checks:",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for line in &self.failures {
            eprintln!("    {}", line);
        }
        eprintln!();
        false
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn first_difference(pix1: &Pix, pix2: &Pix) -> Option<String> {
    let shape = |p: &Pix| (p.width(), p.height(), p.depth().bits());
    if shape(pix1) != shape(pix2) {
        return Some(format!(
            "shapes differ: {:?} vs {:?} (width, height, bpp)",
            shape(pix1),
            shape(pix2)
        ));
    }
    (0..pix1.height()).find_map(|y| {
        let (row1, row2) = (pix1.row_data(y), pix2.row_data(y));
        row1.iter().zip(row2).position(|(a, b)| a != b).map(|x| {
            format!(
                "pixels differ at ({}, {}): {:#010x} vs {:#010x}",
                x, y, row1[x], row2[x]
            )
        })
    })
}

fn same_pixels(path1: &Path, path2: &Path) -> bool {
    match (chromaseg_io::read_image(path1), chromaseg_io::read_image(path2)) {
        (Ok(a), Ok(b)) => first_difference(&a, &b).is_none(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaseg_core::Color;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Generate);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("bogus"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(1.0, f64::NAN, 1.0));
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert_eq!(rp.failures().len(), 2);
        assert_eq!(rp.index(), 3);
    }

    #[test]
    fn test_compare_pix() {
        let mut rp = RegParams::new("params");
        let a = Pix::new_filled(4, 3, Color::RED).unwrap();
        let copy: Pix = a.to_mut().into();
        assert!(rp.compare_pix(&a, &copy));
        let mut bm = a.to_mut();
        bm.set_rgb(2, 1, 0, 0, 0).unwrap();
        let b: Pix = bm.into();
        assert!(!rp.compare_pix(&a, &b));
        assert!(rp.failures()[0].contains("(2, 1)"));
        let c = Pix::new_filled(3, 4, Color::RED).unwrap();
        assert!(!rp.compare_pix(&a, &c));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_check_numbers_failures() {
        let mut rp = RegParams::new("params");
        rp.check(true, "fine");
        rp.check(false, "broken");
        assert!(rp.failures()[0].contains("#2"));
        assert!(!rp.cleanup());
    }
}
