use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::SiteConfig;
use crate::models::news::NewsFeed;
use crate::news::NewsSource;

/// Subdirectories of the assets dir that will be created if missing
const REQUIRED_ASSET_DIRS: &[&str] = &["json", "css", "img"];

/// Outcome of the checks, before deciding whether to abort.
#[derive(Debug, Default, PartialEq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about a missing or unreadable news feed
/// and missing mail settings, and aborts if the assets dir cannot be created.
pub fn run(config: &SiteConfig) {
    info!("Boot check starting...");

    let report = check(config);

    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    }

    if report.warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some pages may show an error state.",
            report.warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

pub fn check(config: &SiteConfig) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Asset directories ───────────────────────────
    let assets = Path::new(&config.assets_dir);
    let dirs = std::iter::once(assets.to_path_buf())
        .chain(REQUIRED_ASSET_DIRS.iter().map(|d| assets.join(d)));
    for path in dirs {
        if !path.exists() {
            match fs::create_dir_all(&path) {
                Ok(_) => info!("  Created directory: {}", path.display()),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", path.display(), e);
                    report.errors += 1;
                }
            }
        }
    }

    // ── 2. News feed ───────────────────────────────────
    match NewsSource::from_location(&config.news_source) {
        NewsSource::File(path) => match fs::read_to_string(&path) {
            Ok(raw) => match NewsFeed::from_json(&raw).and_then(|feed| feed.into_sorted()) {
                Ok(records) => info!("  News feed: {} record(s) in {}", records.len(), path.display()),
                Err(e) => {
                    warn!("  News feed {} is malformed: {} (news pages will show an error)", path.display(), e);
                    report.warnings += 1;
                }
            },
            Err(e) => {
                warn!("  News feed {} not readable: {} (news pages will show an error)", path.display(), e);
                report.warnings += 1;
            }
        },
        NewsSource::Remote { url, .. } => info!("  News feed is remote: {}", url),
    }

    // ── 3. Mail ────────────────────────────────────────
    if !config.mail.is_configured() {
        warn!("  Mail is not configured (contact messages will fail to send)");
        report.warnings += 1;
    }

    // ── 4. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        info!("  Rocket.toml not found, using default server config");
    }

    report
}
