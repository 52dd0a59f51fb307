//! Parallel batch driver.
//!
//! Icons are compiled on rayon's global pool. One failing icon never aborts
//! the run: its error is recorded with the icon name and the remaining icons
//! carry on. Results keep input order.

use crate::error::{IconError, Result};
use crate::pipeline::{CompiledIcon, Compiler, IconSource};
use iconforge_codegen::{GeneratedFile, GenerationConfig, RuntimeGlue};
use rayon::prelude::*;
use tracing::{info, instrument, warn};

/// Outcome of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Successfully compiled icons, in input order.
    pub icons: Vec<CompiledIcon>,
    /// Per-icon failures, each carrying the icon name.
    pub failures: Vec<IconError>,
    /// Shared stylesheet and theme accessor, when a feature needs them.
    pub runtime: Option<RuntimeGlue>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.icons.iter().map(|icon| icon.warnings.len()).sum()
    }

    /// Every generated file: per-icon files first, then the runtime glue.
    pub fn files(&self) -> Vec<GeneratedFile> {
        let mut files: Vec<GeneratedFile> = self
            .icons
            .iter()
            .flat_map(|icon| icon.files.iter().cloned())
            .collect();
        if let Some(runtime) = &self.runtime {
            files.extend(runtime.files());
        }
        files
    }
}

/// Batch compiler over one configuration.
pub struct Batch {
    compiler: Compiler,
}

impl Batch {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        Ok(Self {
            compiler: Compiler::new(config)?,
        })
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    /// Compile every icon in parallel.
    ///
    /// Only configuration-level failures (runtime glue rendering) fail the
    /// whole run; icon failures land in [`BatchReport::failures`].
    #[instrument(level = "info", skip_all, fields(icons = sources.len()))]
    pub fn run(&self, sources: &[IconSource]) -> Result<BatchReport> {
        let results: Vec<Result<CompiledIcon>> = sources
            .par_iter()
            .map(|source| {
                self.compiler
                    .compile(source)
                    .map_err(|err| err.for_icon(&source.name))
            })
            .collect();

        let mut icons = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(icon) => icons.push(icon),
                Err(err) => {
                    warn!(error = %err, offset = err.offset(), "icon failed");
                    failures.push(err);
                }
            }
        }

        let runtime = self.compiler.runtime()?;

        let report = BatchReport {
            icons,
            failures,
            runtime,
        };
        info!(
            compiled = report.icons.len(),
            failed = report.failures.len(),
            warnings = report.warning_count(),
            runtime = report.runtime.is_some(),
            "batch complete"
        );
        Ok(report)
    }
}
