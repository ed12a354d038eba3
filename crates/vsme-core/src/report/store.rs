use chrono::Datelike;
use fs4::fs_std::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::{ReportDraft, StoredReport};
use crate::error::VsmeError;
use crate::plan::{check_quota, Plan, QuotaStatus};
use crate::VsmeResult;

/// Storage abstraction so report generation can run against memory in tests
/// and against disk from the CLI.
///
/// Implementations assign identifiers, refuse a second write for the same
/// `submission_id`, and only ever return a profile's own reports.
pub trait ReportStore: Send + Sync {
    fn insert(&self, draft: ReportDraft, content: String) -> VsmeResult<StoredReport>;
    fn get(&self, profile_id: &str, id: u64) -> VsmeResult<StoredReport>;
    /// Newest first.
    fn list(&self, profile_id: &str) -> VsmeResult<Vec<StoredReport>>;
    fn count_for_month(&self, profile_id: &str, year: i32, month: u32) -> VsmeResult<u32>;

    /// Count the profile's reports in the draft's calendar month, check the
    /// plan's quota, and insert, all as one step: no other writer can slip a
    /// report in between the count and the insert.
    fn insert_within_quota(
        &self,
        draft: ReportDraft,
        content: String,
        plan: Plan,
    ) -> VsmeResult<(StoredReport, QuotaStatus)>;
}

// ---------------------------------------------------------------------------
// Shared record set
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
struct ReportSet {
    next_id: u64,
    reports: Vec<StoredReport>,
}

impl ReportSet {
    fn insert(&mut self, draft: ReportDraft, content: String) -> VsmeResult<StoredReport> {
        if self
            .reports
            .iter()
            .any(|r| r.submission_id == draft.submission_id)
        {
            return Err(VsmeError::Conflict(draft.submission_id));
        }
        self.next_id += 1;
        let report = StoredReport::from_draft(self.next_id, draft, content);
        self.reports.push(report.clone());
        Ok(report)
    }

    fn get(&self, profile_id: &str, id: u64) -> VsmeResult<StoredReport> {
        self.reports
            .iter()
            .find(|r| r.id == id && r.profile_id == profile_id)
            .cloned()
            .ok_or(VsmeError::NotFound(id))
    }

    fn list(&self, profile_id: &str) -> Vec<StoredReport> {
        let mut reports: Vec<StoredReport> = self
            .reports
            .iter()
            .filter(|r| r.profile_id == profile_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        reports
    }

    fn count_for_month(&self, profile_id: &str, year: i32, month: u32) -> u32 {
        self.reports
            .iter()
            .filter(|r| {
                r.profile_id == profile_id
                    && r.created_at.year() == year
                    && r.created_at.month() == month
            })
            .count() as u32
    }

    fn insert_within_quota(
        &mut self,
        draft: ReportDraft,
        content: String,
        plan: Plan,
    ) -> VsmeResult<(StoredReport, QuotaStatus)> {
        let used = self.count_for_month(
            &draft.profile_id,
            draft.created_at.year(),
            draft.created_at.month(),
        );
        let quota = check_quota(plan, used)?;
        let report = self.insert(draft, content)?;
        Ok((report, quota))
    }
}

fn poisoned<T>(_: T) -> VsmeError {
    VsmeError::Storage("report store lock poisoned".into())
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InMemoryReportStore {
    inner: RwLock<ReportSet>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for InMemoryReportStore {
    fn insert(&self, draft: ReportDraft, content: String) -> VsmeResult<StoredReport> {
        self.inner.write().map_err(poisoned)?.insert(draft, content)
    }

    fn get(&self, profile_id: &str, id: u64) -> VsmeResult<StoredReport> {
        self.inner.read().map_err(poisoned)?.get(profile_id, id)
    }

    fn list(&self, profile_id: &str) -> VsmeResult<Vec<StoredReport>> {
        Ok(self.inner.read().map_err(poisoned)?.list(profile_id))
    }

    fn count_for_month(&self, profile_id: &str, year: i32, month: u32) -> VsmeResult<u32> {
        Ok(self
            .inner
            .read()
            .map_err(poisoned)?
            .count_for_month(profile_id, year, month))
    }

    fn insert_within_quota(
        &self,
        draft: ReportDraft,
        content: String,
        plan: Plan,
    ) -> VsmeResult<(StoredReport, QuotaStatus)> {
        self.inner
            .write()
            .map_err(poisoned)?
            .insert_within_quota(draft, content, plan)
    }
}

// ---------------------------------------------------------------------------
// JSON file store
// ---------------------------------------------------------------------------

/// Keeps every report in a single JSON document. Each write rewrites the
/// whole file through a temporary sibling and a rename.
///
/// Writers serialise on an exclusive OS lock over a `.lock` sibling, so
/// separate processes (or separate handles in one process) sharing a path
/// never lose each other's inserts. Readers need no lock: the rename makes
/// every published document complete.
#[derive(Debug)]
pub struct JsonFileReportStore {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFileReportStore {
    /// Open (or lazily create) the store at `path`. The file is not touched
    /// until the first insert.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock_path = path.with_extension("json.lock");
        Self { path, lock_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until this handle holds the writer lock. Released when the
    /// returned file is dropped.
    fn lock(&self) -> VsmeResult<File> {
        self.create_parent()?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)
            .map_err(|e| {
                VsmeError::Storage(format!(
                    "Failed to open lock '{}': {}",
                    self.lock_path.display(),
                    e
                ))
            })?;
        FileExt::lock_exclusive(&file).map_err(|e| {
            VsmeError::Storage(format!(
                "Failed to lock '{}': {}",
                self.lock_path.display(),
                e
            ))
        })?;
        Ok(file)
    }

    fn create_parent(&self) -> VsmeResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
            _ => Ok(()),
        }
    }

    fn load(&self) -> VsmeResult<ReportSet> {
        if !self.path.exists() {
            return Ok(ReportSet::default());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            VsmeError::Storage(format!("Failed to read '{}': {}", self.path.display(), e))
        })?;
        if contents.trim().is_empty() {
            return Ok(ReportSet::default());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Caller must hold the writer lock.
    fn save(&self, set: &ReportSet) -> VsmeResult<()> {
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(set)?)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            VsmeError::Storage(format!("Failed to write '{}': {}", self.path.display(), e))
        })?;
        Ok(())
    }

    /// Load, apply `change`, and save under the writer lock.
    fn update<T>(&self, change: impl FnOnce(&mut ReportSet) -> VsmeResult<T>) -> VsmeResult<T> {
        let _lock = self.lock()?;
        let mut set = self.load()?;
        let out = change(&mut set)?;
        self.save(&set)?;
        Ok(out)
    }
}

impl ReportStore for JsonFileReportStore {
    fn insert(&self, draft: ReportDraft, content: String) -> VsmeResult<StoredReport> {
        self.update(|set| set.insert(draft, content))
    }

    fn get(&self, profile_id: &str, id: u64) -> VsmeResult<StoredReport> {
        self.load()?.get(profile_id, id)
    }

    fn list(&self, profile_id: &str) -> VsmeResult<Vec<StoredReport>> {
        Ok(self.load()?.list(profile_id))
    }

    fn count_for_month(&self, profile_id: &str, year: i32, month: u32) -> VsmeResult<u32> {
        Ok(self.load()?.count_for_month(profile_id, year, month))
    }

    fn insert_within_quota(
        &self,
        draft: ReportDraft,
        content: String,
        plan: Plan,
    ) -> VsmeResult<(StoredReport, QuotaStatus)> {
        self.update(|set| set.insert_within_quota(draft, content, plan))
    }
}
