//! Resolution error taxonomy plus the pass-through host error alias.

use compact_str::CompactString;

/// Boxed error surfaced unchanged from host ports and module loaders.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Why a class reference could not be resolved. The two kinds terminate
/// resolution the same way but signal different root causes and stay
/// distinguishable to callers.
#[derive(Debug)]
pub enum ResolveError {
    /// No builtin namespace matched and no fallback loader was available,
    /// or the loader itself failed (its error is kept as `source`).
    ModuleNotFound {
        module: CompactString,
        version: CompactString,
        source: Option<BoxError>,
    },
    /// The module was obtained but does not export the requested class.
    ClassNotFound {
        class: CompactString,
        module: CompactString,
        version: CompactString,
    },
}

impl ResolveError {
    pub fn module_not_found(module: &str, version: &str, source: Option<BoxError>) -> Self {
        ResolveError::ModuleNotFound {
            module: CompactString::from(module),
            version: CompactString::from(version),
            source,
        }
    }

    pub fn class_not_found(class: &str, module: &str, version: &str) -> Self {
        ResolveError::ClassNotFound {
            class: CompactString::from(class),
            module: CompactString::from(module),
            version: CompactString::from(version),
        }
    }

    pub fn is_module_not_found(&self) -> bool {
        matches!(self, ResolveError::ModuleNotFound { .. })
    }

    pub fn is_class_not_found(&self) -> bool {
        matches!(self, ResolveError::ClassNotFound { .. })
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::ModuleNotFound {
                module, version, ..
            } => {
                write!(f, "could not load module {}@{}", module, version)
            }
            ResolveError::ClassNotFound {
                class,
                module,
                version,
            } => {
                write!(f, "class {} not found in module {}@{}", class, module, version)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::ModuleNotFound { source, .. } => {
                source.as_deref().map(|e| e as &(dyn std::error::Error + 'static))
            }
            ResolveError::ClassNotFound { .. } => None,
        }
    }
}
