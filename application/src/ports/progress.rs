//! Progress notification port
//!
//! Defines the interface for reporting stage progress during an analysis.

use council_domain::RoleProfile;

/// Callback for progress updates during an analysis
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain text, etc.)
pub trait StageProgressNotifier: Send + Sync {
    /// Called before a stage sends its request (`index` is zero-based)
    fn on_stage_start(&self, role: &RoleProfile, index: usize, total: usize);

    /// Called when a stage finishes, successfully or not
    fn on_stage_complete(&self, role: &RoleProfile, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl StageProgressNotifier for NoProgress {
    fn on_stage_start(&self, _role: &RoleProfile, _index: usize, _total: usize) {}
    fn on_stage_complete(&self, _role: &RoleProfile, _success: bool) {}
}
