use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::ApplicationError;
use crate::domain::catalog::ScreenshotCatalog;
use crate::domain::compositor_trait::{CompositionRequest, ScreenshotCompositor};
use crate::domain::device::DeviceProfile;
use crate::domain::screenshot::ScreenshotDefinition;
use crate::infrastructure::catalog_file::parse_catalog;
use crate::infrastructure::file_storage::LocalFileStorage;

/// One full run: which devices to render and where captures and outputs live.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub screens_dir: PathBuf,
    pub output_dir: PathBuf,
    pub devices: Vec<DeviceProfile>,
    pub catalog: ScreenshotCatalog,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedScreenshot {
    pub device: DeviceProfile,
    pub definition: ScreenshotDefinition,
    pub screen_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, Default, PartialEq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    /// Outputs whose capture was missing.
    pub placeholders: Vec<PathBuf>,
}

impl GenerationJob {
    pub fn device_dir(&self, device: &DeviceProfile) -> PathBuf {
        self.output_dir.join(device.key)
    }

    /// Every (device, screenshot) pair, devices first, in catalog order.
    pub fn plan(&self) -> Vec<PlannedScreenshot> {
        self.devices
            .iter()
            .flat_map(|device| {
                let device_dir = self.device_dir(device);
                self.catalog
                    .screenshots
                    .iter()
                    .enumerate()
                    .map(move |(i, definition)| PlannedScreenshot {
                        device: *device,
                        definition: definition.clone(),
                        screen_path: self.screens_dir.join(&definition.filename),
                        output_path: device_dir.join(definition.output_file_name(i + 1)),
                    })
            })
            .collect()
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.devices.is_empty() {
            return Err(ApplicationError::ConfigurationError(
                "no device profiles selected".to_string(),
            ));
        }
        self.catalog.validate()?;
        Ok(())
    }
}

pub struct ScreenshotService {
    compositor: Arc<dyn ScreenshotCompositor + Send + Sync>,
    storage: LocalFileStorage,
}

impl ScreenshotService {
    pub fn new(compositor: Arc<dyn ScreenshotCompositor + Send + Sync>) -> Self {
        Self {
            compositor,
            storage: LocalFileStorage::new(),
        }
    }

    /// The catalog from `path`, or the built-in one when no file is given.
    pub async fn load_catalog(&self, path: Option<&Path>) -> Result<ScreenshotCatalog, ApplicationError> {
        let Some(path) = path else {
            return Ok(ScreenshotCatalog::default());
        };
        log::info!("Loading screenshot catalog from {}", path.display());
        let bytes = self.storage.read_file_impl(path).await?;
        parse_catalog(&bytes).map_err(|e| {
            ApplicationError::ConfigurationError(format!("{}: {}", path.display(), e))
        })
    }

    /// Renders and writes every planned screenshot, stopping at the first failure.
    /// Files written before a failure are left in place.
    pub async fn generate_all(&self, job: &GenerationJob) -> Result<GenerationReport, ApplicationError> {
        job.validate()?;
        let plan = job.plan();
        log::info!(
            "Generating {} screenshots for {} devices",
            plan.len(),
            job.devices.len()
        );

        let mut report = GenerationReport::default();
        for device_plan in plan.chunks(job.catalog.screenshots.len()) {
            let device = device_plan[0].device;
            self.storage.ensure_dir_impl(&job.device_dir(&device)).await?;
            println!(
                "Generating for {} ({}x{}):",
                device.label, device.width, device.height
            );

            for planned in device_plan {
                let used_placeholder = self.generate_one(job, planned).await?;
                println!("  ✓ {}", planned.output_path.display());
                if used_placeholder {
                    report.placeholders.push(planned.output_path.clone());
                }
                report.written.push(planned.output_path.clone());
            }
            println!();
        }

        log::info!(
            "Wrote {} screenshots ({} placeholders)",
            report.written.len(),
            report.placeholders.len()
        );
        Ok(report)
    }

    async fn generate_one(&self, job: &GenerationJob, planned: &PlannedScreenshot) -> Result<bool, ApplicationError> {
        let request = CompositionRequest {
            screen_path: planned.screen_path.clone(),
            headline: planned.definition.headline.clone(),
            subheadline: planned.definition.subheadline.clone(),
            canvas_width: planned.device.width,
            canvas_height: planned.device.height,
            background_top: job.catalog.background_top,
            background_bottom: job.catalog.background_bottom,
        };

        let composition = self.compositor.compose(&request).map_err(|source| {
            ApplicationError::ScreenshotGenerationFailed {
                output: planned.output_path.display().to_string(),
                source,
            }
        })?;
        self.storage
            .save_image_impl(&planned.output_path, &composition.png_bytes)
            .await?;
        Ok(composition.used_placeholder)
    }
}
