use crate::core::pipeline::SubregionPipeline;
use crate::core::{ConfigProvider, PatchReport, Pipeline, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::path::PathBuf;

pub struct PatchEngine<P: Pipeline> {
    pipeline: P,
    input_path: PathBuf,
    dry_run: bool,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PatchEngine<P> {
    pub fn new(pipeline: P, input_path: impl Into<PathBuf>) -> Self {
        Self::new_with_monitoring(pipeline, input_path, false)
    }

    pub fn new_with_monitoring(pipeline: P, input_path: impl Into<PathBuf>, monitor: bool) -> Self {
        Self {
            pipeline,
            input_path: input_path.into(),
            dry_run: false,
            monitor: SystemMonitor::new(monitor),
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Load, transform, then persist. Any error aborts the remaining phases.
    pub fn run(&self) -> Result<PatchReport> {
        let monitor = &self.monitor;
        tracing::info!("Starting subregion patch of {}", self.input_path.display());
        monitor.log_stats("Start");

        let records = self.pipeline.load()?;
        let total_records = records.len();
        monitor.log_stats("Load");

        let result = self.pipeline.transform(records)?;
        tracing::info!(
            "{} of {} records need a subregion update",
            result.updated_count(),
            total_records
        );
        monitor.log_stats("Transform");

        let persisted = if self.dry_run {
            tracing::info!("Dry run: skipping backup and write");
            None
        } else {
            let outcome = self.pipeline.persist(&result)?;
            monitor.log_stats("Persist");
            Some(outcome)
        };

        monitor.log_final_stats();

        Ok(PatchReport {
            input_path: self.input_path.clone(),
            total_records,
            updates: result.updates,
            persisted,
        })
    }
}

impl<S: Storage, C: ConfigProvider> PatchEngine<SubregionPipeline<S, C>> {
    /// Engine configured from the pipeline's own settings.
    pub fn from_pipeline(pipeline: SubregionPipeline<S, C>) -> Self {
        let input_path = pipeline.config().input_path().to_path_buf();
        let monitor = pipeline.config().monitor();
        let dry_run = pipeline.config().dry_run();
        Self::new_with_monitoring(pipeline, input_path, monitor).dry_run(dry_run)
    }
}
