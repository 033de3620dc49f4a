//! An in-memory [`FilesystemProvider`].
//!
//! The current directory is a field of the provider rather than process
//! state, so independent instances can be used side by side (and from
//! concurrent tests) without interfering.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::path::algebra::{self, SEPARATOR, SEPARATOR_CHAR};
use crate::path::provider::FilesystemProvider;
use crate::path::value::PathValue;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(Vec<u8>),
    Directory,
}

#[derive(Debug)]
struct State {
    current_directory: String,
    nodes: BTreeMap<String, Node>,
}

/// Provider that keeps a directory tree and a current directory in memory.
///
/// The tree starts with only the root `/`, which is also the initial current
/// directory. Relative paths are resolved against this provider's own
/// current directory.
///
/// # Examples
///
/// ```
/// use spath::path::{FilesystemProvider, MemoryFilesystem};
///
/// let fs = MemoryFilesystem::new();
/// fs.create_dir_all("/home/user").unwrap();
/// fs.set_current_directory("/home/user").unwrap();
/// fs.write_bytes("notes.txt", b"hello").unwrap();
///
/// assert!(fs.file_exists("/home/user/notes.txt"));
/// assert_eq!(fs.read_bytes("/home/user/notes.txt").unwrap(), b"hello");
/// ```
#[derive(Debug)]
pub struct MemoryFilesystem {
    state: Mutex<State>,
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(SEPARATOR.to_string(), Node::Directory);
        Self {
            state: Mutex::new(State {
                current_directory: SEPARATOR.to_string(),
                nodes,
            }),
        }
    }
}

impl MemoryFilesystem {
    /// Create an empty tree containing only `/`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory and any missing ancestors.
    ///
    /// # Errors
    ///
    /// Returns `NotADirectory` if `path` or one of its ancestors is a file.
    pub fn create_dir_all(&self, path: &str) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let target = state.resolve(path)?;

        let mut current = String::new();
        for segment in target.split(SEPARATOR_CHAR).filter(|s| !s.is_empty()) {
            current.push_str(SEPARATOR);
            current.push_str(segment);
            match state.nodes.get(&current) {
                Some(Node::Directory) => {}
                Some(Node::File(_)) => return Err(Error::NotADirectory { path: current }),
                None => {
                    state.nodes.insert(current.clone(), Node::Directory);
                }
            }
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    /// Absolute, normalized key for `path`. The empty path names nothing.
    fn resolve(&self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Err(Error::PathNotFound {
                path: String::new(),
            });
        }
        let value = PathValue::new(path);
        let absolute = if value.is_absolute() {
            value
        } else {
            algebra::join(&PathValue::new(self.current_directory.as_str()), &value)
        };
        Ok(algebra::normalize(&absolute).into_string())
    }

    fn require_parent_directory(&self, key: &str) -> Result<()> {
        let parent = parent_of(key);
        match self.nodes.get(parent) {
            Some(Node::Directory) => Ok(()),
            Some(Node::File(_)) => Err(Error::NotADirectory {
                path: parent.to_string(),
            }),
            None => Err(Error::PathNotFound {
                path: parent.to_string(),
            }),
        }
    }

    /// Keys of `key` itself and everything beneath it.
    fn subtree(&self, key: &str) -> Vec<String> {
        let prefix = child_prefix(key);
        let mut keys = vec![key.to_string()];
        keys.extend(
            self.nodes
                .range(prefix.clone()..)
                .take_while(|(k, _)| k.starts_with(&prefix))
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, _)| k.clone()),
        );
        keys
    }
}

fn parent_of(key: &str) -> &str {
    match key.rfind(SEPARATOR_CHAR) {
        Some(0) | None => SEPARATOR,
        Some(idx) => &key[..idx],
    }
}

fn child_prefix(key: &str) -> String {
    if key == SEPARATOR {
        key.to_string()
    } else {
        format!("{key}{SEPARATOR}")
    }
}

fn is_a_directory(path: &str) -> Error {
    Error::Io {
        path: path.to_string(),
        source: io::Error::other("is a directory"),
    }
}

impl FilesystemProvider for MemoryFilesystem {
    fn current_directory(&self) -> Result<String> {
        Ok(self.lock().current_directory.clone())
    }

    fn set_current_directory(&self, path: &str) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let key = state.resolve(path)?;
        match state.nodes.get(&key) {
            Some(Node::Directory) => {
                state.current_directory = key;
                Ok(())
            }
            Some(Node::File(_)) => Err(Error::NotADirectory { path: key }),
            None => Err(Error::PathNotFound { path: key }),
        }
    }

    fn file_exists(&self, path: &str) -> bool {
        let state = self.lock();
        state
            .resolve(path)
            .is_ok_and(|key| state.nodes.contains_key(&key))
    }

    fn is_directory(&self, path: &str) -> bool {
        let state = self.lock();
        state
            .resolve(path)
            .is_ok_and(|key| matches!(state.nodes.get(&key), Some(Node::Directory)))
    }

    fn remove_item(&self, path: &str) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let key = state.resolve(path)?;
        if key == SEPARATOR {
            return Err(Error::PermissionDenied { path: key });
        }
        if !state.nodes.contains_key(&key) {
            return Err(Error::PathNotFound { path: key });
        }
        for doomed in state.subtree(&key) {
            state.nodes.remove(&doomed);
        }
        Ok(())
    }

    fn move_item(&self, from: &str, to: &str) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let source = state.resolve(from)?;
        let destination = state.resolve(to)?;

        if !state.nodes.contains_key(&source) {
            return Err(Error::PathNotFound { path: source });
        }
        if state.nodes.contains_key(&destination) {
            return Err(Error::AlreadyExists { path: destination });
        }
        if source == SEPARATOR || destination.starts_with(&child_prefix(&source)) {
            return Err(Error::Io {
                path: source,
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "cannot move a directory into itself",
                ),
            });
        }
        state.require_parent_directory(&destination)?;

        for old_key in state.subtree(&source) {
            if let Some(node) = state.nodes.remove(&old_key) {
                let new_key = format!("{destination}{}", &old_key[source.len()..]);
                state.nodes.insert(new_key, node);
            }
        }
        Ok(())
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let state = self.lock();
        let key = state.resolve(path)?;
        match state.nodes.get(&key) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Directory) => Err(is_a_directory(&key)),
            None => Err(Error::PathNotFound { path: key }),
        }
    }

    fn write_bytes(&self, path: &str, contents: &[u8]) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let key = state.resolve(path)?;
        if matches!(state.nodes.get(&key), Some(Node::Directory)) {
            return Err(is_a_directory(&key));
        }
        state.require_parent_directory(&key)?;
        state.nodes.insert(key, Node::File(contents.to_vec()));
        Ok(())
    }

    fn list_directory(&self, path: &str) -> Result<Vec<String>> {
        let state = self.lock();
        let key = state.resolve(path)?;
        match state.nodes.get(&key) {
            Some(Node::Directory) => {}
            Some(Node::File(_)) => return Err(Error::NotADirectory { path: key }),
            None => return Err(Error::PathNotFound { path: key }),
        }

        let prefix = child_prefix(&key);
        Ok(state
            .nodes
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            .map(|(k, _)| &k[prefix.len()..])
            .filter(|rest| !rest.is_empty() && !rest.contains(SEPARATOR_CHAR))
            .map(str::to_string)
            .collect())
    }
}
