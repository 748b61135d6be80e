//! Console reporting
//!
//! Renders engine events as log lines: one per copied file, one for the
//! resolved destination, one per source and a final summary. Operational
//! output only; the functional contract lives in the returned report.

use crate::engine::SyncEvent;
use console::style;
use indicatif::HumanDuration;

/// Console consumer for [`SyncEvent`]s
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Render one event
    pub fn handle(&self, event: &SyncEvent) {
        match event {
            SyncEvent::DestinationResolved { dest } => {
                println!("{} {}", style("Destination:").bold(), dest.display());
            }
            SyncEvent::SourceStarted { source } => {
                println!("{} {}", style("Syncing").cyan().bold(), source.display());
            }
            SyncEvent::FileCopied {
                source,
                dest,
                reason,
            } => {
                println!(
                    "  {} {} -> {} ({})",
                    style("copied").green(),
                    source.display(),
                    dest.display(),
                    reason.label()
                );
            }
            SyncEvent::CopyFailed {
                source,
                dest,
                error,
            } => {
                eprintln!(
                    "  {} {} -> {}: {}",
                    style("failed").red().bold(),
                    source.display(),
                    dest.display(),
                    error
                );
            }
            SyncEvent::TraversalWarning { detail } => {
                eprintln!("  {} {}", style("warning").yellow(), detail);
            }
            SyncEvent::Completed { report } => {
                println!(
                    "{} in {} | {} checked, {} copied",
                    style("Done").green().bold(),
                    HumanDuration(report.elapsed),
                    report.files_checked,
                    report.files_copied
                );
            }
        }
    }
}
