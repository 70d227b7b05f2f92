//! Adapter for the external partitioning solver.
//!
//! The solver is a black box with an hMETIS-style positional CLI contract:
//! `binary graph nparts ubfactor nruns ctype rtype vcycles reconst dbglvl`.
//! This module replaces that stringly-typed argv with a validated
//! configuration object, invokes the process synchronously, and scrapes
//! labelled metrics out of its diagnostic text.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use regex::Regex;
use tracing::{debug, instrument};

use crate::error::SolverError;

/// Diagnostic label under which hMETIS reports the total cut weight.
pub const HYPEREDGE_CUT_LABEL: &str = "Hyperedge Cut";

/// Validated configuration for one solver invocation.
///
/// Construct via [`SolverConfigBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    binary: PathBuf,
    partitions: u32,
    imbalance: u32,
    runs: u32,
    coarsening: u32,
    refinement: u32,
    vcycles: u32,
    reconstruct: bool,
    debug_level: u32,
}

/// Configures and constructs [`SolverConfig`] instances.
///
/// Tuning knobs default to the solver's documented values: 10 runs,
/// coarsening scheme 1, refinement scheme 1, 3 V-cycles, reconstruction
/// off, debug level 0, imbalance factor 5.
///
/// # Examples
/// ```
/// use cutline_core::SolverConfigBuilder;
///
/// let config = SolverConfigBuilder::new("/opt/hmetis/hmetis")
///     .with_partitions(4)
///     .with_imbalance(10)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(config.partitions(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfigBuilder {
    binary: PathBuf,
    partitions: u32,
    imbalance: u32,
    runs: u32,
    coarsening: u32,
    refinement: u32,
    vcycles: u32,
    reconstruct: bool,
    debug_level: u32,
}

impl SolverConfigBuilder {
    /// Creates a builder for the solver at `binary` with default tuning.
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            partitions: 2,
            imbalance: 5,
            runs: 10,
            coarsening: 1,
            refinement: 1,
            vcycles: 3,
            reconstruct: false,
            debug_level: 0,
        }
    }

    /// Sets the requested partition count.
    #[must_use]
    pub const fn with_partitions(mut self, partitions: u32) -> Self {
        self.partitions = partitions;
        self
    }

    /// Sets the imbalance (UBfactor) bound on uneven block sizes.
    #[must_use]
    pub const fn with_imbalance(mut self, imbalance: u32) -> Self {
        self.imbalance = imbalance;
        self
    }

    /// Sets the number of independent solver runs.
    #[must_use]
    pub const fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the coarsening scheme selector.
    #[must_use]
    pub const fn with_coarsening(mut self, coarsening: u32) -> Self {
        self.coarsening = coarsening;
        self
    }

    /// Sets the refinement scheme selector.
    #[must_use]
    pub const fn with_refinement(mut self, refinement: u32) -> Self {
        self.refinement = refinement;
        self
    }

    /// Sets the V-cycle count.
    #[must_use]
    pub const fn with_vcycles(mut self, vcycles: u32) -> Self {
        self.vcycles = vcycles;
        self
    }

    /// Enables or disables hyperedge reconstruction during uncoarsening.
    #[must_use]
    pub const fn with_reconstruct(mut self, reconstruct: bool) -> Self {
        self.reconstruct = reconstruct;
        self
    }

    /// Sets the solver's debug verbosity.
    #[must_use]
    pub const fn with_debug_level(mut self, debug_level: u32) -> Self {
        self.debug_level = debug_level;
        self
    }

    /// Validates the configuration and constructs a [`SolverConfig`].
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidPartCount`] when fewer than two
    /// partitions are requested and [`SolverError::InvalidImbalance`] when
    /// the imbalance factor leaves the solver's `1..=49` domain.
    pub fn build(self) -> Result<SolverConfig, SolverError> {
        if self.partitions < 2 {
            return Err(SolverError::InvalidPartCount {
                got: self.partitions,
            });
        }
        if !(1..=49).contains(&self.imbalance) {
            return Err(SolverError::InvalidImbalance {
                got: self.imbalance,
            });
        }
        Ok(SolverConfig {
            binary: self.binary,
            partitions: self.partitions,
            imbalance: self.imbalance,
            runs: self.runs,
            coarsening: self.coarsening,
            refinement: self.refinement,
            vcycles: self.vcycles,
            reconstruct: self.reconstruct,
            debug_level: self.debug_level,
        })
    }
}

impl SolverConfig {
    /// Returns the requested partition count.
    #[must_use]
    pub const fn partitions(&self) -> u32 {
        self.partitions
    }

    /// Positional argument vector for the solver, numbers as strings.
    #[must_use]
    pub fn args(&self, graph: &Path) -> Vec<String> {
        vec![
            graph.display().to_string(),
            self.partitions.to_string(),
            self.imbalance.to_string(),
            self.runs.to_string(),
            self.coarsening.to_string(),
            self.refinement.to_string(),
            self.vcycles.to_string(),
            u32::from(self.reconstruct).to_string(),
            self.debug_level.to_string(),
        ]
    }

    /// Location where the solver writes its assignment for `graph`:
    /// `<graph>.part.<partitions>`.
    #[must_use]
    pub fn part_file(&self, graph: &Path) -> PathBuf {
        let mut name = graph.as_os_str().to_os_string();
        name.push(format!(".part.{}", self.partitions));
        PathBuf::from(name)
    }

    /// Runs the solver on `graph`, blocking until it exits.
    ///
    /// No timeout is enforced; an unresponsive solver blocks the caller
    /// indefinitely.
    ///
    /// # Errors
    /// Returns [`SolverError::Launch`] when the process cannot be spawned
    /// and [`SolverError::NonZeroExit`] when it exits unsuccessfully.
    #[instrument(name = "solver.invoke", err, skip(self), fields(graph = %graph.display()))]
    pub fn invoke(&self, graph: &Path) -> Result<SolverOutput, SolverError> {
        debug!(binary = %self.binary.display(), args = ?self.args(graph), "launching solver");
        let output = Command::new(&self.binary)
            .args(self.args(graph))
            .output()
            .map_err(|source| SolverError::Launch {
                binary: self.binary.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(SolverError::NonZeroExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(SolverOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Captured diagnostic text from one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutput {
    stdout: String,
}

impl SolverOutput {
    /// Wraps raw diagnostic text.
    #[must_use]
    pub const fn new(stdout: String) -> Self {
        Self { stdout }
    }

    /// Returns the raw captured standard output.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Extracts a labelled numeric metric from a `Label: <integer>` line.
    ///
    /// When the label occurs more than once, the last occurrence wins,
    /// matching the final-summary placement of solver diagnostics.
    ///
    /// # Errors
    /// Returns [`SolverError::MetricNotFound`] when no matching line
    /// exists. Callers treat this as a recoverable condition.
    ///
    /// # Examples
    /// ```
    /// use cutline_core::SolverOutput;
    ///
    /// let output = SolverOutput::new("...\nHyperedge Cut:   7\n".to_owned());
    /// assert_eq!(output.metric("Hyperedge Cut")?, 7);
    /// # Ok::<(), cutline_core::SolverError>(())
    /// ```
    pub fn metric(&self, label: &str) -> Result<u64, SolverError> {
        let pattern = format!(r"{}:\s+(\d+)", regex::escape(label));
        let matcher = Regex::new(&pattern).map_err(|_| SolverError::MetricNotFound {
            label: label.to_owned(),
        })?;
        matcher
            .captures_iter(&self.stdout)
            .last()
            .and_then(|captures| captures.get(1))
            .and_then(|value| value.as_str().parse::<u64>().ok())
            .ok_or_else(|| SolverError::MetricNotFound {
                label: label.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverErrorCode;
    use rstest::rstest;

    #[test]
    fn builder_applies_defaults_from_the_solver_contract() {
        let config = SolverConfigBuilder::new("hmetis")
            .with_partitions(3)
            .build()
            .expect("configuration is valid");
        assert_eq!(
            config.args(Path::new("graph.hgr")),
            vec!["graph.hgr", "3", "5", "10", "1", "1", "3", "0", "0"],
        );
    }

    #[test]
    fn reconstruct_flag_serialises_as_one() {
        let config = SolverConfigBuilder::new("hmetis")
            .with_partitions(2)
            .with_reconstruct(true)
            .with_debug_level(8)
            .build()
            .expect("configuration is valid");
        let args = config.args(Path::new("g.hgr"));
        assert_eq!(args[7], "1");
        assert_eq!(args[8], "8");
    }

    #[rstest]
    #[case::too_few_parts(1, 5, SolverErrorCode::InvalidPartCount)]
    #[case::zero_imbalance(2, 0, SolverErrorCode::InvalidImbalance)]
    #[case::excessive_imbalance(2, 50, SolverErrorCode::InvalidImbalance)]
    fn builder_rejects_out_of_domain_fields(
        #[case] partitions: u32,
        #[case] imbalance: u32,
        #[case] expected: SolverErrorCode,
    ) {
        let err = SolverConfigBuilder::new("hmetis")
            .with_partitions(partitions)
            .with_imbalance(imbalance)
            .build()
            .expect_err("configuration must be rejected");
        assert_eq!(err.code(), expected);
    }

    #[test]
    fn part_file_appends_partition_suffix() {
        let config = SolverConfigBuilder::new("hmetis")
            .with_partitions(4)
            .build()
            .expect("configuration is valid");
        assert_eq!(
            config.part_file(Path::new("work/graph.hgr")),
            PathBuf::from("work/graph.hgr.part.4"),
        );
    }

    #[rstest]
    #[case::plain("Hyperedge Cut: 12\n", 12)]
    #[case::padded("summary\nHyperedge Cut:    3\ntrailer\n", 3)]
    #[case::last_wins("Hyperedge Cut: 9\nHyperedge Cut: 4\n", 4)]
    fn extracts_labelled_metric(#[case] stdout: &str, #[case] expected: u64) {
        let output = SolverOutput::new(stdout.to_owned());
        assert_eq!(
            output.metric(HYPEREDGE_CUT_LABEL).expect("metric present"),
            expected
        );
    }

    #[test]
    fn missing_metric_is_reported_with_its_label() {
        let output = SolverOutput::new("no diagnostics here\n".to_owned());
        let err = output
            .metric(HYPEREDGE_CUT_LABEL)
            .expect_err("metric is absent");
        assert_eq!(err.code(), SolverErrorCode::MetricNotFound);
    }

    #[test]
    fn launch_failure_surfaces_distinctly() {
        let config = SolverConfigBuilder::new("/nonexistent/solver/binary")
            .with_partitions(2)
            .build()
            .expect("configuration is valid");
        let err = config
            .invoke(Path::new("graph.hgr"))
            .expect_err("binary does not exist");
        assert_eq!(err.code(), SolverErrorCode::Launch);
    }
}
