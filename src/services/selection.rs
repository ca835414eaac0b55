use crate::config::IntakeConfig;
use crate::error::{Rejection, SelectionError};
use crate::models::StagedFile;
use crate::utils::{format, validation};

/// Receives the current selection after every change
pub trait SelectionObserver {
    fn on_selection_changed(&self, files: &[StagedFile]);
}

/// Outcome of one `add` batch, per file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdmissionReport {
    pub added: Vec<StagedFile>,
    pub duplicates: Vec<StagedFile>,
    pub rejected: Vec<(StagedFile, Rejection)>,
}

impl AdmissionReport {
    pub fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Owns the ordered set of staged files and enforces admission rules.
///
/// Invariants: no two entries are duplicates (same name and size), and every entry
/// passed validation when it was added.
pub struct FileSelectionManager {
    config: IntakeConfig,
    files: Vec<StagedFile>,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl Default for FileSelectionManager {
    fn default() -> Self {
        Self::new(IntakeConfig::default())
    }
}

impl FileSelectionManager {
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            config,
            files: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    pub fn is_acceptable(&self, file: &StagedFile) -> bool {
        validation::is_acceptable(file, &self.config)
    }

    pub fn is_within_size_limit(&self, file: &StagedFile) -> bool {
        validation::is_within_size_limit(file, &self.config)
    }

    pub fn format_size(bytes: u64) -> String {
        format::format_size(bytes)
    }

    /// Stages every valid, not-yet-present candidate in input order and returns the updated set.
    /// Invalid files are dropped silently; use [`Self::add_with_report`] to see why.
    pub fn add<I>(&mut self, candidates: I) -> &[StagedFile]
    where
        I: IntoIterator<Item = StagedFile>,
    {
        self.add_with_report(candidates);
        &self.files
    }

    pub fn add_with_report<I>(&mut self, candidates: I) -> AdmissionReport
    where
        I: IntoIterator<Item = StagedFile>,
    {
        let mut report = AdmissionReport::default();

        for file in candidates {
            if let Err(rejection) = validation::validate_candidate(&file, &self.config) {
                tracing::debug!("Rejected '{}' ({}): {}", file.name, rejection.code(), rejection);
                report.rejected.push((file, rejection));
                continue;
            }

            if self.files.iter().any(|staged| staged.is_duplicate_of(&file)) {
                tracing::debug!("Skipping duplicate '{}' ({} bytes)", file.name, file.size);
                report.duplicates.push(file);
                continue;
            }

            self.files.push(file.clone());
            report.added.push(file);
        }

        if report.changed() {
            tracing::info!(
                "Staged {} file(s), {} rejected, {} duplicate(s); {} total",
                report.added.len(),
                report.rejected.len(),
                report.duplicates.len(),
                self.files.len()
            );
            self.notify();
        }

        report
    }

    /// Removes the entry at `index`; later entries shift down by one
    pub fn remove_at(&mut self, index: usize) -> Result<StagedFile, SelectionError> {
        if index >= self.files.len() {
            tracing::warn!(
                "Remove requested for index {} but only {} file(s) are staged",
                index,
                self.files.len()
            );
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.files.len(),
            });
        }

        let removed = self.files.remove(index);
        tracing::info!("Removed '{}' from selection", removed.name);
        self.notify();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.files.clear();
        tracing::debug!("Selection cleared");
        self.notify();
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_selection_changed(&self.files);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<usize>>>);

    impl SelectionObserver for Recorder {
        fn on_selection_changed(&self, files: &[StagedFile]) {
            self.0.borrow_mut().push(files.len());
        }
    }

    fn pdf(name: &str, size: u64) -> StagedFile {
        StagedFile::new(name, size, "application/pdf")
    }

    #[test]
    fn test_add_skips_duplicates_within_batch() {
        let mut manager = FileSelectionManager::default();
        let files = manager.add(vec![pdf("a.pdf", 1), pdf("a.pdf", 1), pdf("a.pdf", 2)]);
        assert_eq!(files, &[pdf("a.pdf", 1), pdf("a.pdf", 2)]);
    }

    #[test]
    fn test_add_with_report() {
        let mut manager = FileSelectionManager::default();
        manager.add(vec![pdf("a.pdf", 1)]);

        let report = manager.add_with_report(vec![
            pdf("a.pdf", 1),
            StagedFile::new("b.exe", 5, "application/octet-stream"),
            pdf("huge.pdf", 10 * 1024 * 1024 + 1),
            StagedFile::new("c.docx", 7, ""),
        ]);

        assert_eq!(report.added, vec![StagedFile::new("c.docx", 7, "")]);
        assert_eq!(report.duplicates, vec![pdf("a.pdf", 1)]);
        let codes: Vec<_> = report.rejected.iter().map(|(_, r)| r.code()).collect();
        assert_eq!(codes, vec!["INVALID_TYPE", "FILE_TOO_LARGE"]);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.total_size(), 8);
    }

    #[test]
    fn test_custom_config_drives_admission() {
        let config = IntakeConfig {
            max_file_size: 100,
            ..IntakeConfig::default()
        };
        let mut manager = FileSelectionManager::new(config.clone());
        assert_eq!(manager.config(), &config);

        manager.add(vec![pdf("small.pdf", 100), pdf("large.pdf", 101)]);
        assert_eq!(manager.files(), &[pdf("small.pdf", 100)]);
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_set() {
        let mut manager = FileSelectionManager::default();
        manager.add(vec![pdf("a.pdf", 1)]);
        assert_eq!(
            manager.remove_at(1),
            Err(SelectionError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_observers_notified_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut manager = FileSelectionManager::default();
        manager.subscribe(Box::new(Recorder(seen.clone())));

        manager.add(vec![pdf("a.pdf", 1), pdf("b.pdf", 2)]);
        manager.add(vec![pdf("a.pdf", 1)]);
        manager.add(vec![StagedFile::new("x.exe", 1, "")]);
        let _ = manager.remove_at(5);
        manager.remove_at(0).unwrap();
        manager.clear();
        manager.clear();

        assert_eq!(*seen.borrow(), vec![2, 1, 0, 0]);
    }
}
