//! # Project Files
//!
//! `.fence` files hold a [`FenceProject`] as pretty JSON: metadata plus
//! the input spec. Takeoff results are always recomputed on load and are
//! never written.
//!
//! - **Atomic saves**: write `.fence.tmp`, fsync, rename over the target
//! - **Locking**: an OS lock (fs2) plus a `.fence.lock` file naming the holder
//! - **Versioning**: files from a newer schema are refused
//!
//! ## Example
//!
//! ```rust,no_run
//! use fence_core::file_io::{load_project, save_project, FileLock};
//! use fence_core::project::{FenceProject, ProjectSpec};
//! use std::path::Path;
//!
//! let path = Path::new("backyard.fence");
//! let project = FenceProject::new("Back yard", "Sam", ProjectSpec::default());
//!
//! let lock = FileLock::acquire(path, "estimator@example.com")?;
//! save_project(&project, path)?;
//! drop(lock);
//!
//! let loaded = load_project(path)?;
//! # Ok::<(), fence_core::errors::FenceError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{FenceError, FenceResult};
use crate::project::{FenceProject, SCHEMA_VERSION};

/// Project file extension
pub const FENCE_EXTENSION: &str = "fence";

/// Locks older than this are treated as abandoned
const STALE_LOCK_HOURS: i64 = 24;

/// Contents of a `.fence.lock` file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// Who holds the lock (email or username)
    pub user_id: String,
    pub machine: String,
    pub pid: u32,
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }

    /// A lock is stale when its process is gone (same machine) or it is too old.
    pub fn is_stale(&self) -> bool {
        if hostname().as_deref() == Some(self.machine.as_str()) && !process_alive(self.pid) {
            return true;
        }
        (Utc::now() - self.locked_at).num_hours() > STALE_LOCK_HOURS
    }
}

fn hostname() -> Option<String> {
    if cfg!(windows) {
        std::env::var("COMPUTERNAME").ok()
    } else {
        std::env::var("HOSTNAME").or_else(|_| std::env::var("HOST")).ok()
    }
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    Path::new(&format!("/proc/{pid}")).exists()
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}

/// Exclusive lock on a project file, released on drop.
pub struct FileLock {
    project_path: PathBuf,
    lock_path: PathBuf,
    // Holds the OS-level lock for the guard's lifetime
    _lock_file: File,
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// # Errors
    ///
    /// `FileLocked` when another live process holds the lock, `FileError`
    /// when the lock file cannot be written.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> FenceResult<Self> {
        if let Some(holder) = FileLock::check(path) {
            return Err(FenceError::file_locked(
                path.display().to_string(),
                format!("{} ({})", holder.user_id, holder.machine),
                holder.locked_at.to_rfc3339(),
            ));
        }

        let lock_path = lock_path_for(path);
        let lock_display = lock_path.display().to_string();
        let mut lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| FenceError::file_error("create lock", &lock_display, e.to_string()))?;

        lock_file
            .try_lock_exclusive()
            .map_err(|_| FenceError::file_locked(path.display().to_string(), "another process", "unknown"))?;

        let info = LockInfo::new(user_id);
        let json = serde_json::to_string_pretty(&info)?;
        lock_file
            .write_all(json.as_bytes())
            .and_then(|_| lock_file.sync_all())
            .map_err(|e| FenceError::file_error("write lock", &lock_display, e.to_string()))?;

        tracing::debug!(path = %path.display(), user = %info.user_id, "project lock acquired");

        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Current holder of a live lock, if any
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock_info(&lock_path_for(path))
            .ok()
            .filter(|info| !info.is_stale())
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// `backyard.fence` → `backyard.fence.lock`
pub fn lock_path_for(project_path: &Path) -> PathBuf {
    append_extension(project_path, "lock")
}

fn temp_path_for(project_path: &Path) -> PathBuf {
    append_extension(project_path, "tmp")
}

fn append_extension(path: &Path, suffix: &str) -> PathBuf {
    let extension = match path.extension() {
        Some(ext) => format!("{}.{}", ext.to_string_lossy(), suffix),
        None => suffix.to_string(),
    };
    path.with_extension(extension)
}

fn read_lock_info(lock_path: &Path) -> FenceResult<LockInfo> {
    let contents = fs::read_to_string(lock_path)
        .map_err(|e| FenceError::file_error("read lock", lock_path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save a project atomically (temp file, fsync, rename).
pub fn save_project(project: &FenceProject, path: &Path) -> FenceResult<()> {
    let json = serde_json::to_string_pretty(project)?;
    let tmp_path = temp_path_for(path);
    let tmp_display = tmp_path.display().to_string();

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| FenceError::file_error("create temp file", &tmp_display, e.to_string()))?;
    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| FenceError::file_error("write temp file", &tmp_display, e.to_string()))?;
    tmp_file
        .sync_all()
        .map_err(|e| FenceError::file_error("sync temp file", &tmp_display, e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        FenceError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), id = %project.meta.id, "project saved");
    Ok(())
}

/// Load a project and check its schema version.
///
/// # Errors
///
/// * `FileError` - the file cannot be read
/// * `SerializationError` - the contents are not a valid project
/// * `VersionMismatch` - the file was written by an incompatible schema
pub fn load_project(path: &Path) -> FenceResult<FenceProject> {
    let contents = fs::read_to_string(path)
        .map_err(|e| FenceError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: FenceProject = serde_json::from_str(&contents).map_err(|e| FenceError::SerializationError {
        reason: format!("Invalid project file {}: {}", path.display(), e),
    })?;
    validate_version(&project.meta.version)?;

    Ok(project)
}

/// Load a project along with the current lock holder, if someone else has it open.
pub fn load_project_with_lock_check(path: &Path) -> FenceResult<(FenceProject, Option<LockInfo>)> {
    let project = load_project(path)?;
    Ok((project, FileLock::check(path)))
}

fn parse_version(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.').map(|p| p.parse::<u32>().ok());
    let major = parts.next()??;
    let minor = parts.next().flatten().unwrap_or(0);
    Some((major, minor))
}

/// Majors must match; within 0.x a newer minor is refused.
pub fn validate_version(file_version: &str) -> FenceResult<()> {
    let mismatch = || FenceError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (file_major, file_minor) = parse_version(file_version).ok_or_else(mismatch)?;
    let (major, minor) = parse_version(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != major || (major == 0 && file_minor > minor) {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialKind;
    use crate::project::ProjectSpec;
    use std::env::temp_dir;

    fn temp_project_path(name: &str) -> PathBuf {
        temp_dir().join(format!("fence_test_{}_{}.fence", name, std::process::id()))
    }

    #[test]
    fn test_sidecar_paths() {
        let path = Path::new("/jobs/backyard.fence");
        assert_eq!(lock_path_for(path), Path::new("/jobs/backyard.fence.lock"));
        assert_eq!(temp_path_for(path), Path::new("/jobs/backyard.fence.tmp"));
        assert_eq!(lock_path_for(Path::new("/jobs/noext")), Path::new("/jobs/noext.lock"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_project_path("roundtrip");
        let mut spec = ProjectSpec::for_material(MaterialKind::ChainLink, 220.0, 5);
        spec.corners = 3;
        let project = FenceProject::new("Dog run", "Pat", spec.clone());

        save_project(&project, &path).unwrap();
        let loaded = load_project(&path).unwrap();

        assert_eq!(loaded.meta.name, "Dog run");
        assert_eq!(loaded.meta.id, project.meta.id);
        assert_eq!(loaded.spec, spec);
        assert!(!temp_path_for(&path).exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_saved_file_has_no_results() {
        let path = temp_project_path("inputs_only");
        let project = FenceProject::new("Front", "", ProjectSpec::for_material(MaterialKind::Wood, 60.0, 4));
        save_project(&project, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"spec\""));
        assert!(!contents.contains("bill_of_quantities"));
        assert!(!contents.contains("total_material"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_lock_acquire_and_release() {
        let path = temp_project_path("lock");
        File::create(&path).unwrap();

        let lock = FileLock::acquire(&path, "estimator@example.com").unwrap();
        assert_eq!(lock.info.user_id, "estimator@example.com");
        assert_eq!(lock.project_path(), path.as_path());
        assert!(lock_path_for(&path).exists());

        drop(lock);
        assert!(!lock_path_for(&path).exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_with_lock_check() {
        let path = temp_project_path("lock_check");
        save_project(&FenceProject::default(), &path).unwrap();

        let (_, holder) = load_project_with_lock_check(&path).unwrap();
        assert!(holder.is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_old_lock_is_stale() {
        let mut info = LockInfo::new("someone");
        assert!(!info.is_stale());
        info.locked_at = Utc::now() - chrono::Duration::hours(STALE_LOCK_HOURS + 1);
        assert!(info.is_stale());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let missing = temp_project_path("missing");
        assert_eq!(load_project(&missing).unwrap_err().error_code(), "FILE_ERROR");

        let path = temp_project_path("invalid");
        fs::write(&path, "{ not a project").unwrap();
        assert_eq!(load_project(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }
}
