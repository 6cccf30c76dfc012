// ============================================================
// PROGRESS TRACKER
// ============================================================
// Mirror backend-reported generation progress into job state and
// an activity log the caller can render

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::generation::ProgressEvent;

/// Activity log entries are capped; the oldest entry is dropped first
const MAX_LOG_ENTRIES: usize = 100;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ActivityEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

/// Last known state of one generation job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobProgress {
    pub job_id: String,
    pub percent: i32,
    pub phase: String,
    pub message: String,
    pub failed: bool,
}

impl JobProgress {
    pub fn is_complete(&self) -> bool {
        !self.failed && self.percent >= 100
    }
}

/// Caller-owned progress state fed by the service's event stream.
/// Events can arrive over any transport; apply() is the only entry.
pub struct ProgressTracker {
    jobs: HashMap<String, JobProgress>,
    log: Vec<ActivityEntry>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            jobs: HashMap::new(),
            log: Vec::new(),
        }
    }

    /// Fold one backend event into job state and the activity log
    pub fn apply(&mut self, event: &ProgressEvent) {
        let failed = event.is_error();
        let level = if failed { "ERROR" } else { "INFO" };

        self.push_log(level, "Generation", &format!("[{}] {}", event.phase, event.message));

        let progress = self
            .jobs
            .entry(event.job_id.clone())
            .or_insert_with(|| JobProgress {
                job_id: event.job_id.clone(),
                percent: 0,
                phase: String::new(),
                message: String::new(),
                failed: false,
            });

        progress.percent = event.progress.clamp(0, 100);
        progress.phase = event.phase.clone();
        progress.message = event.message.clone();
        progress.failed = failed;
    }

    pub fn job(&self, job_id: &str) -> Option<&JobProgress> {
        self.jobs.get(job_id)
    }

    /// Drop a finished or abandoned job's state
    pub fn remove_job(&mut self, job_id: &str) {
        self.jobs.remove(job_id);
    }

    pub fn activity(&self) -> &[ActivityEntry] {
        &self.log
    }

    fn push_log(&mut self, level: &str, source: &str, message: &str) {
        self.log.push(ActivityEntry {
            time: Local::now().format("%H:%M:%S").to_string(),
            level: level.to_string(),
            source: source.to_string(),
            message: message.to_string(),
        });
        if self.log.len() > MAX_LOG_ENTRIES {
            self.log.remove(0);
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
