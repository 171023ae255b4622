use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::Parser;

use store_screenshots::application::screenshot_service::{GenerationJob, ScreenshotService};
use store_screenshots::domain::device::{DeviceProfile, DEVICE_PROFILES};
use store_screenshots::infrastructure::font::FontResolver;
use store_screenshots::infrastructure::screenshot_compositor::DefaultScreenshotCompositor;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate App Store screenshots with device frames and marketing text")]
struct Cli {
    /// Directory containing raw screen captures
    #[arg(long, default_value = "./screenshot-captures")]
    screens_dir: PathBuf,

    /// Output directory for generated screenshots
    #[arg(long, default_value = "./store-screenshots")]
    output_dir: PathBuf,

    /// Device sizes to generate (default: all)
    #[arg(long, num_args = 1.., value_parser = PossibleValuesParser::new(DeviceProfile::keys()))]
    devices: Vec<String>,

    /// JSON file replacing the built-in screenshot list or brand colors
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Regular-weight font file, tried before the system fonts
    #[arg(long)]
    font: Option<PathBuf>,

    /// Bold font file for headlines, tried before the system fonts
    #[arg(long)]
    bold_font: Option<PathBuf>,
}

impl Cli {
    fn selected_devices(&self) -> Vec<DeviceProfile> {
        if self.devices.is_empty() {
            return DEVICE_PROFILES.to_vec();
        }
        self.devices
            .iter()
            .filter_map(|key| DeviceProfile::find(key))
            .collect()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    println!("\n📱 Store Screenshot Generator");
    println!("   Input:  {}", cli.screens_dir.display());
    println!("   Output: {}\n", cli.output_dir.display());

    let fonts = FontResolver::system()
        .with_overrides(cli.font.clone(), cli.bold_font.clone())
        .load()
        .context("Failed to load fonts")?;
    log::info!("Fonts: regular {:?}, bold {:?}", fonts.regular_source, fonts.bold_source);
    let compositor = DefaultScreenshotCompositor::new(fonts);
    let service = ScreenshotService::new(Arc::new(compositor));

    let catalog = service
        .load_catalog(cli.catalog.as_deref())
        .await
        .context("Failed to load screenshot catalog")?;
    let file_names: Vec<String> = catalog.screenshots.iter().map(|s| s.filename.clone()).collect();

    let job = GenerationJob {
        screens_dir: cli.screens_dir.clone(),
        output_dir: cli.output_dir.clone(),
        devices: cli.selected_devices(),
        catalog,
    };
    let report = service
        .generate_all(&job)
        .await
        .context("Screenshot generation aborted")?;

    println!("✅ All screenshots generated!");
    if !report.placeholders.is_empty() {
        println!(
            "   {} of {} used a placeholder because the capture was missing.",
            report.placeholders.len(),
            report.written.len()
        );
    }
    print_next_steps(&cli.screens_dir, &file_names);
    Ok(())
}

fn print_next_steps(screens_dir: &std::path::Path, file_names: &[String]) {
    let range = match (file_names.first(), file_names.last()) {
        (Some(first), Some(last)) if first != last => format!("{} through {}", first, last),
        (Some(only), _) => only.clone(),
        _ => String::new(),
    };
    println!("\nNext steps:");
    println!("  1. Capture app screens on the iPhone 14 Pro Max simulator");
    println!("  2. Save as {} in {}/", range, screens_dir.display());
    println!("  3. Re-run this tool to composite with device frames and text");
    println!("  4. Upload to App Store Connect and Google Play Console\n");
}
