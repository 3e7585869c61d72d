//! Regression test parameters and operations

use pixmosaic_core::Raster;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed results against expectations (default)
    #[default]
    Compare,
    /// Display mode - narrate results without failing the test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: the test name, the running
/// comparison index, the mode, and the recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "square")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode.
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record_failure(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two RGB triples for exact equality.
    pub fn compare_rgb(&mut self, expected: (u8, u8, u8), actual: (u8, u8, u8)) -> bool {
        self.index += 1;
        if expected != actual {
            self.record_failure(format!(
                "Failure in {}_reg: color comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rasters for identical dimensions and pixel content.
    pub fn compare_rasters(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.index += 1;
        if !expected.sizes_equal(actual) {
            self.record_failure(format!(
                "Failure in {}_reg: raster size mismatch for index {}\n\
                 expected = {}x{}, actual = {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }
        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let want = expected.get_rgb_unchecked(x, y);
                let got = actual.get_rgb_unchecked(x, y);
                if want != got {
                    self.record_failure(format!(
                        "Failure in {}_reg: raster comparison for index {}\n\
                         first difference at ({}, {}): expected {:?}, actual {:?}",
                        self.test_name, self.index, x, y, want, got
                    ));
                    return false;
                }
            }
        }
        true
    }

    /// Record a labelled boolean check.
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if !ok {
            self.record_failure(format!(
                "Failure in {}_reg: check for index {}: {}",
                self.test_name, self.index, what
            ));
        }
        ok
    }

    /// Print the summary and return the overall status.
    ///
    /// Display mode always reports success so exploratory runs do not
    /// fail the suite.
    pub fn cleanup(&mut self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} comparisons)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} comparisons failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success || self.display()
    }
}
