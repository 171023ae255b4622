use serde::Deserialize;
use crate::domain::error::DomainError;

/// One marketing screenshot: which capture to frame and what to say above it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScreenshotDefinition {
    pub filename: String,
    pub headline: String,
    pub subheadline: String,
}

impl ScreenshotDefinition {
    pub fn new(filename: &str, headline: &str, subheadline: &str) -> Self {
        Self {
            filename: filename.to_string(),
            headline: headline.to_string(),
            subheadline: subheadline.to_string(),
        }
    }

    /// Output name for the `index`-th screenshot (1-based), e.g. `01_casting.png`.
    pub fn output_file_name(&self, index: usize) -> String {
        format!("{:02}_{}", index, self.filename)
    }

    /// The filename is joined onto the input and output directories, so it must stay a
    /// bare file name.
    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.filename.as_str();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("screenshot filename is empty".to_string()));
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") || name == "." {
            return Err(DomainError::InvalidInput(format!(
                "screenshot filename must be a plain file name: {name}"
            )));
        }
        Ok(())
    }
}

pub fn default_screenshots() -> Vec<ScreenshotDefinition> {
    vec![
        ScreenshotDefinition::new(
            "01_casting_feed.png",
            "Find Your Role",
            "Browse casting calls with smart filters",
        ),
        ScreenshotDefinition::new(
            "02_recorder.png",
            "Record Like a Pro",
            "Built-in teleprompter and 4K quality",
        ),
        ScreenshotDefinition::new(
            "03_editor.png",
            "Edit & Submit",
            "Trim, add slate, compress, upload",
        ),
        ScreenshotDefinition::new(
            "04_pipeline.png",
            "Manage Talent",
            "Review submissions in a Kanban pipeline",
        ),
        ScreenshotDefinition::new(
            "05_contract.png",
            "Sign Instantly",
            "Generate contracts and e-sign in-app",
        ),
        ScreenshotDefinition::new(
            "06_payments.png",
            "Get Paid Safely",
            "Funds held in escrow until work is done",
        ),
    ]
}
