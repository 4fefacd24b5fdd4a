//! Mock system implementation for testing

use super::{GlobMatches, System};
use glob::{MatchOptions, Pattern};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem rooted at `/`, perfect for
/// fast, isolated unit tests without side effects. Relative paths resolve
/// against the configured current directory, and glob expansion yields
/// matches in sorted order.
///
/// # Example
/// ```
/// use remove::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_current_dir("/work").unwrap()
///     .with_file("/work/a.txt", b"a").unwrap()
///     .with_dir("/work/build").unwrap();
///
/// assert!(system.is_file(Path::new("a.txt")));
/// assert!(system.is_dir(Path::new("/work/build")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    current_dir: PathBuf,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    protected: HashSet<PathBuf>,
}

impl MockSystemState {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            normalize(path)
        } else {
            normalize(&self.current_dir.join(path))
        }
    }

    fn is_protected_subtree(&self, root: &Path) -> bool {
        self.protected.iter().any(|p| p.starts_with(root))
    }
}

/// Drop `.` components and fold `..` into its parent
fn normalize(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                } else if !matches!(components.last(), Some(Component::RootDir)) {
                    components.push(component);
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("No such file or directory: {}", path.display()),
    )
}

fn permission_denied(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("Permission denied: {}", path.display()),
    )
}

impl MockSystem {
    /// Create a new `MockSystem` with an empty root and `/` as current directory
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                current_dir: PathBuf::from("/"),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
                protected: HashSet::new(),
            })),
        }
    }

    fn read_state(&self) -> io::Result<RwLockReadGuard<'_, MockSystemState>> {
        self.state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn write_state(&self) -> io::Result<RwLockWriteGuard<'_, MockSystemState>> {
        self.state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))
    }

    /// Set the current working directory, creating it if needed (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> io::Result<Self> {
        let mut state = self.write_state()?;
        let dir = state.resolve(dir.as_ref());
        Self::ensure_parent_dirs(&mut state.dirs, &dir);
        state.current_dir = dir;
        drop(state);
        Ok(self)
    }

    /// Add a file with contents, creating parent directories (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let mut state = self.write_state()?;
        let path_buf = state.resolve(path.as_ref());

        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a directory and its ancestors (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let mut state = self.write_state()?;
        let path_buf = state.resolve(path.as_ref());
        Self::ensure_parent_dirs(&mut state.dirs, &path_buf);
        drop(state);
        Ok(self)
    }

    /// Mark a path as undeletable (builder pattern)
    ///
    /// Removing the path itself, or any directory containing it, fails with
    /// `PermissionDenied` and leaves the tree untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the internal state lock is poisoned
    #[inline]
    pub fn with_protected<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let mut state = self.write_state()?;
        let path_buf = state.resolve(path.as_ref());
        state.protected.insert(path_buf);
        drop(state);
        Ok(self)
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.read_state()?.current_dir.clone())
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.write_state()?;
        let path = state.resolve(path);

        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
        if state.dirs.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {}", path.display()),
            ));
        }

        state.files.insert(path, contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.write_state()?;
        let path = state.resolve(path);
        Self::ensure_parent_dirs(&mut state.dirs, &path);
        drop(state);
        Ok(())
    }

    #[inline]
    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.write_state()?;
        let path = state.resolve(path);

        if !state.dirs.contains(&path) {
            if state.files.contains_key(&path) {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("Not a directory: {}", path.display()),
                ));
            }
            return Err(not_found(&path));
        }
        if state.is_protected_subtree(&path) {
            return Err(permission_denied(&path));
        }

        state.files.retain(|p, _| !p.starts_with(&path));
        state.dirs.retain(|p| !p.starts_with(&path));
        drop(state);
        Ok(())
    }

    #[inline]
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.write_state()?;
        let path = state.resolve(path);

        if state.dirs.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {}", path.display()),
            ));
        }
        if !state.files.contains_key(&path) {
            return Err(not_found(&path));
        }
        if state.protected.contains(&path) {
            return Err(permission_denied(&path));
        }

        state.files.remove(&path);
        drop(state);
        Ok(())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.read_state().is_ok_and(|state| {
            let path = state.resolve(path);
            state.files.contains_key(&path) || state.dirs.contains(&path)
        })
    }

    #[inline]
    fn is_file(&self, path: &Path) -> bool {
        self.read_state()
            .is_ok_and(|state| state.files.contains_key(&state.resolve(path)))
    }

    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        self.read_state()
            .is_ok_and(|state| state.dirs.contains(&state.resolve(path)))
    }

    #[inline]
    fn glob(&self, pattern: &str, options: MatchOptions) -> io::Result<GlobMatches<'_>> {
        let compiled = Pattern::new(pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        let absolute = Path::new(pattern).is_absolute();

        let state = self.read_state()?;
        let mut matches: Vec<PathBuf> = state
            .files
            .keys()
            .chain(state.dirs.iter())
            .filter(|p| p.parent().is_some())
            .filter_map(|p| {
                if absolute {
                    Some(p.clone())
                } else {
                    p.strip_prefix(&state.current_dir)
                        .ok()
                        .filter(|rel| !rel.as_os_str().is_empty())
                        .map(Path::to_path_buf)
                }
            })
            .filter(|candidate| compiled.matches_path_with(candidate, options))
            .collect();
        drop(state);

        matches.sort();
        Ok(Box::new(matches.into_iter().map(Ok::<PathBuf, io::Error>)))
    }
}
