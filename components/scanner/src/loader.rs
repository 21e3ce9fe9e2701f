//! Module lookup
//!
//! The scanner and the interpreter only see modules through the
//! [`ModuleLoader`] trait, so the storage layout is chosen by the caller.

use crate::source::{read_source, MODULE_EXTENSION};
use core_types::Source;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Default directory for module files, relative to the working directory
pub const DEFAULT_MODULE_DIR: &str = "modules";

/// Maps module names to loadable programs
pub trait ModuleLoader {
    /// Whether a module with this name can be loaded
    fn contains(&self, name: &str) -> bool;

    /// Load the module's program text
    fn load(&self, name: &str) -> io::Result<Source>;

    /// Human-readable location of the module, for diagnostics
    fn locate(&self, name: &str) -> String;
}

/// Modules stored as `<root>/<name>.<extension>` files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsModuleLoader {
    root: PathBuf,
    extension: String,
}

impl FsModuleLoader {
    /// Create a loader rooted at `root` using the module extension
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: MODULE_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Directory searched for modules
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a module is expected at
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, self.extension))
    }
}

impl Default for FsModuleLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE_DIR)
    }
}

impl ModuleLoader for FsModuleLoader {
    fn contains(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    fn load(&self, name: &str) -> io::Result<Source> {
        read_source(self.path_of(name))
    }

    fn locate(&self, name: &str) -> String {
        self.path_of(name).display().to_string()
    }
}

/// Modules held in memory, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemoryModuleLoader {
    modules: HashMap<String, String>,
}

impl MemoryModuleLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module's program text
    pub fn with_module(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    /// Register or replace a module's program text
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.modules.insert(name.into(), text.into());
    }
}

impl ModuleLoader for MemoryModuleLoader {
    fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    fn load(&self, name: &str) -> io::Result<Source> {
        self.modules
            .get(name)
            .map(|text| Source::from_text(self.locate(name), text))
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no module named '{}'", name))
            })
    }

    fn locate(&self, name: &str) -> String {
        format!("{}.{}", name, MODULE_EXTENSION)
    }
}
