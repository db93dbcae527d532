//! Progress reporting for council stages

use colored::Colorize;
use council_application::StageProgressNotifier;
use council_domain::RoleProfile;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports stage progress with a single progress bar and spinner
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Human-readable label for a role
    pub fn stage_label(role: &RoleProfile) -> String {
        match role.name() {
            "architect" => "Architect".to_string(),
            "security" => "Security review".to_string(),
            "moderator" => "Moderator".to_string(),
            other => other.to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StageProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, role: &RoleProfile, index: usize, total: usize) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        let bar = slot.get_or_insert_with(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(Self::stage_style());
            bar.set_prefix("Council");
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        });
        bar.set_position(index as u64);
        bar.set_message(format!("{} ({})", Self::stage_label(role), role.model()));
    }

    fn on_stage_complete(&self, role: &RoleProfile, success: bool) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        let Some(bar) = slot.as_ref() else {
            return;
        };

        if !success {
            bar.abandon_with_message(format!("{} {}", "x".red(), Self::stage_label(role)));
            *slot = None;
            return;
        }

        bar.inc(1);
        bar.set_message(format!("{} {}", "v".green(), Self::stage_label(role)));
        if bar.length().is_some_and(|len| bar.position() >= len) {
            bar.finish_with_message(format!("{}", "Analysis complete!".green()));
            *slot = None;
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl StageProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, role: &RoleProfile, index: usize, total: usize) {
        eprintln!(
            "{} {} [{}/{}] ({})",
            "->".cyan(),
            ProgressReporter::stage_label(role).bold(),
            index + 1,
            total,
            role.model()
        );
    }

    fn on_stage_complete(&self, role: &RoleProfile, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), role.name());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), role.name());
        }
    }
}
