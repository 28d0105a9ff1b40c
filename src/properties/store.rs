//! In-memory property store bound to one project file
//!
//! A [`ProjectProperties`] is loaded from (or created for) a project
//! folder and a [`PropertyType`]. Other kinds can be merged in with Ant
//! semantics, and the whole map is written back with the kind's header and
//! the catalog comments.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use propfile::PropertyMap;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::catalog::comment_for;
use super::error::PropertiesError;
use super::kind::PropertyType;

/// A property file that contributed entries to a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySource {
    /// Kind of the file that was read
    pub kind: PropertyType,

    /// Path of the file that was read
    pub path: PathBuf,

    /// SHA-256 digest of the raw file bytes (hex)
    pub digest: String,
}

/// Properties of one project property file.
///
/// Entries keep insertion order, which is also the order `save` writes
/// them in. The store has no internal locking; callers sharing one across
/// threads must serialize access themselves.
#[derive(Debug, Clone)]
pub struct ProjectProperties {
    project_root: PathBuf,
    kind: PropertyType,
    properties: PropertyMap,
    sources: Vec<PropertySource>,
}

impl ProjectProperties {
    /// Load the `kind` file from `project_root`.
    ///
    /// Returns `None` if the folder or file does not exist, or if the file
    /// cannot be read or parsed. Use [`ProjectProperties::try_load`] to tell
    /// those cases apart.
    pub fn load(project_root: impl AsRef<Path>, kind: PropertyType) -> Option<Self> {
        let project_root = project_root.as_ref();
        let (properties, source) = read_or_absent(project_root, kind)?;

        Some(Self {
            project_root: project_root.to_path_buf(),
            kind,
            properties,
            sources: vec![source],
        })
    }

    /// Load the `kind` file from `project_root`, surfacing read and parse
    /// failures.
    ///
    /// A missing folder or file is still `Ok(None)`.
    pub fn try_load(
        project_root: impl AsRef<Path>,
        kind: PropertyType,
    ) -> Result<Option<Self>, PropertiesError> {
        let project_root = project_root.as_ref();
        let loaded = read_properties(project_root, kind)?;

        Ok(loaded.map(|(properties, source)| Self {
            project_root: project_root.to_path_buf(),
            kind,
            properties,
            sources: vec![source],
        }))
    }

    /// Create an empty store. Nothing is written until [`save`](Self::save).
    pub fn create(project_root: impl AsRef<Path>, kind: PropertyType) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            kind,
            properties: PropertyMap::new(),
            sources: Vec::new(),
        }
    }

    /// Merge the `kind` file of the same project into this store.
    ///
    /// Ant semantics: keys already present are never overridden, only
    /// undefined keys are added. A file that cannot be loaded leaves the
    /// store unchanged.
    ///
    /// Typical usage is to load `build.properties` and merge
    /// `default.properties` into it, so build overrides win.
    pub fn merge(&mut self, kind: PropertyType) -> &mut Self {
        let Some((other, source)) = read_or_absent(&self.project_root, kind) else {
            return self;
        };

        let before = self.properties.len();
        for (key, value) in other {
            self.properties.entry(key).or_insert(value);
        }

        debug!(
            kind = %kind,
            added = self.properties.len() - before,
            "merged property file"
        );
        self.sources.push(source);
        self
    }

    /// Set a property, replacing any existing value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Value of a property, if set.
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Remove a property, returning its previous value.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.shift_remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Entries in save order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn kind(&self) -> PropertyType {
        self.kind
    }

    /// Path this store saves to
    pub fn path(&self) -> PathBuf {
        self.project_root.join(self.kind.filename())
    }

    /// Files read into this store, in read order
    pub fn sources(&self) -> &[PropertySource] {
        &self.sources
    }

    /// The exact file contents [`save`](Self::save) writes.
    pub fn render(&self) -> String {
        let mut out = String::from(self.kind.header());

        for (key, value) in &self.properties {
            if let Some(comment) = comment_for(key) {
                out.push_str(comment);
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }

        out
    }

    /// Write the rendered file to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.render().as_bytes())
    }

    /// Save the property file, truncating any existing one.
    ///
    /// The contents are written with a single `write_all` and flushed. The
    /// file handle is closed when this returns, on success or failure. A
    /// failed write may leave a truncated file behind.
    pub fn save(&self) -> Result<(), PropertiesError> {
        let path = self.path();
        let io_err = |source| PropertiesError::Io {
            path: path.clone(),
            source,
        };

        let mut file = File::create(&path).map_err(io_err)?;
        self.write_to(&mut file).map_err(io_err)?;
        file.flush().map_err(io_err)?;

        debug!(
            path = %path.display(),
            kind = %self.kind,
            entries = self.properties.len(),
            "saved property file"
        );
        Ok(())
    }
}

/// Check that a property survives a save and reload.
///
/// [`ProjectProperties::set_property`] accepts anything; a name the parser
/// rejects, or a value with a line break, makes the saved file unreadable.
pub fn check_property(name: &str, value: &str) -> Result<(), PropertiesError> {
    if !propfile::is_valid_key(name) {
        return Err(PropertiesError::InvalidKey(name.to_string()));
    }
    if value.contains(|c: char| c == '\n' || c == '\r') {
        return Err(PropertiesError::InvalidValue {
            key: name.to_string(),
        });
    }
    Ok(())
}

/// Read and parse the `kind` file under `project_root`.
fn read_properties(
    project_root: &Path,
    kind: PropertyType,
) -> Result<Option<(PropertyMap, PropertySource)>, PropertiesError> {
    if !project_root.is_dir() {
        debug!(root = %project_root.display(), "project folder does not exist");
        return Ok(None);
    }

    let path = project_root.join(kind.filename());
    if !path.is_file() {
        debug!(path = %path.display(), "property file does not exist");
        return Ok(None);
    }

    let bytes = fs::read(&path).map_err(|source| PropertiesError::Io {
        path: path.clone(),
        source,
    })?;
    let digest = hex::encode(Sha256::digest(&bytes));

    let contents = String::from_utf8_lossy(&bytes);
    let properties = propfile::parse_str(&contents).map_err(|source| PropertiesError::Parse {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), entries = properties.len(), "loaded property file");
    Ok(Some((properties, PropertySource { kind, path, digest })))
}

/// Like [`read_properties`], with failures logged and treated as absent.
fn read_or_absent(project_root: &Path, kind: PropertyType) -> Option<(PropertyMap, PropertySource)> {
    match read_properties(project_root, kind) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!(kind = %kind, error = %e, "ignoring unreadable property file");
            None
        }
    }
}
