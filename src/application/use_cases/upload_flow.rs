// ============================================================
// UPLOAD FLOW
// ============================================================
// Upload list and phase state for the enclosing upload sequence:
// idle -> parsing -> analyzing -> complete. There is no terminal
// failed phase; failures return to idle with a transient error.

use crate::domain::table::{UploadPhase, UploadedFile};

/// Caller-owned upload state. The pipeline itself stays stateless;
/// wrap this in a lock when shared across tasks.
pub struct UploadFlow {
    phase: UploadPhase,
    files: Vec<UploadedFile>,
    last_error: Option<String>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self {
            phase: UploadPhase::Idle,
            files: Vec::new(),
            last_error: None,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Take the transient error from the last failed parse, if any.
    /// Reading the error clears it.
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// A new file was dropped and parsing started
    pub fn begin_parsing(&mut self) {
        self.last_error = None;
        self.phase = UploadPhase::Parsing;
    }

    /// Parsing succeeded and type inference is running
    pub fn begin_analyzing(&mut self) {
        self.phase = UploadPhase::Analyzing;
    }

    /// Record a finished upload. A file with the same name supersedes
    /// the previous entry. A failed upload keeps its entry in the list
    /// but returns the flow to idle with a transient error.
    pub fn finish(&mut self, upload: UploadedFile) {
        self.files.retain(|f| f.file_name != upload.file_name);

        if upload.is_success() {
            self.phase = UploadPhase::Complete;
        } else {
            self.phase = UploadPhase::Idle;
            self.last_error = upload.error.clone();
        }

        self.files.push(upload);
    }

    /// Remove a file from the upload list by id
    pub fn remove(&mut self, id: &str) {
        self.files.retain(|f| f.id != id);
        if self.files.is_empty() {
            self.phase = UploadPhase::Idle;
        }
    }

    /// Drop all files and reset the flow
    pub fn clear(&mut self) {
        self.files.clear();
        self.last_error = None;
        self.phase = UploadPhase::Idle;
    }

    /// Successfully parsed files, in upload order
    pub fn successful_files(&self) -> Vec<&UploadedFile> {
        self.files.iter().filter(|f| f.is_success()).collect()
    }
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::ParsedTable;
    use std::collections::HashMap;

    fn table() -> ParsedTable {
        ParsedTable {
            rows: vec![],
            headers: vec!["a".to_string()],
            column_types: HashMap::new(),
        }
    }

    #[test]
    fn test_happy_path_phases() {
        let mut flow = UploadFlow::new();
        assert_eq!(flow.phase(), UploadPhase::Idle);

        flow.begin_parsing();
        assert_eq!(flow.phase(), UploadPhase::Parsing);

        flow.begin_analyzing();
        assert_eq!(flow.phase(), UploadPhase::Analyzing);

        flow.finish(UploadedFile::success("data.csv", table()));
        assert_eq!(flow.phase(), UploadPhase::Complete);
        assert_eq!(flow.files().len(), 1);
        assert!(flow.take_error().is_none());
    }

    #[test]
    fn test_failure_returns_to_idle_with_transient_error() {
        let mut flow = UploadFlow::new();
        flow.begin_parsing();
        flow.finish(UploadedFile::failed("data.bin", "Unsupported format"));

        assert_eq!(flow.phase(), UploadPhase::Idle);
        assert_eq!(flow.take_error().as_deref(), Some("Unsupported format"));
        // The error is a one-shot notification
        assert!(flow.take_error().is_none());
        // The failed entry stays in the list
        assert_eq!(flow.files().len(), 1);
        assert!(flow.successful_files().is_empty());
    }

    #[test]
    fn test_reparse_supersedes_previous_entry() {
        let mut flow = UploadFlow::new();
        flow.finish(UploadedFile::success("data.csv", table()));
        let first_id = flow.files()[0].id.clone();

        flow.finish(UploadedFile::success("data.csv", table()));

        assert_eq!(flow.files().len(), 1);
        assert_ne!(flow.files()[0].id, first_id);
    }

    #[test]
    fn test_remove_by_id() {
        let mut flow = UploadFlow::new();
        flow.finish(UploadedFile::success("data.csv", table()));
        let id = flow.files()[0].id.clone();

        flow.remove(&id);

        assert!(flow.files().is_empty());
        assert_eq!(flow.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_new_parse_clears_stale_error() {
        let mut flow = UploadFlow::new();
        flow.finish(UploadedFile::failed("bad.bin", "Unsupported format"));

        flow.begin_parsing();

        assert!(flow.take_error().is_none());
    }
}
