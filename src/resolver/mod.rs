//! Class resolution: builtin namespace dispatch plus the fallback loader.
//!
//! The serialization format names a widget class by a
//! (module, version, class) triple. Resolution matches the three reserved
//! namespaces exactly, then falls back to the loader injected at
//! construction. No match is `ModuleNotFound`; a loaded module without
//! the export is `ClassNotFound`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{BoxError, ResolveError, ResolveResult};
use crate::core::view::{ModelClass, ViewClass};

mod builtins;

use builtins::BuiltinModules;

/// Reserved module namespace for the base model/view primitives.
pub const BASE_NAMESPACE: &str = "@jupyter-widgets/base";
/// Reserved module namespace for the standard controls set.
pub const CONTROLS_NAMESPACE: &str = "@jupyter-widgets/controls";
/// Reserved module namespace for the output widget set.
pub const OUTPUT_NAMESPACE: &str = "@jupyter-widgets/output";

/// The closed set of module namespaces this build resolves itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinNamespace {
    Base,
    Controls,
    Output,
}

impl BuiltinNamespace {
    /// Exact-match parse; anything else goes to the fallback loader.
    pub fn parse(module_name: &str) -> Option<Self> {
        match module_name {
            BASE_NAMESPACE => Some(Self::Base),
            CONTROLS_NAMESPACE => Some(Self::Controls),
            OUTPUT_NAMESPACE => Some(Self::Output),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => BASE_NAMESPACE,
            Self::Controls => CONTROLS_NAMESPACE,
            Self::Output => OUTPUT_NAMESPACE,
        }
    }
}

/// Serialized reference to a widget class. A lookup key, not an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleRef {
    pub module_name: CompactString,
    pub module_version: CompactString,
    pub class_name: CompactString,
}

impl ModuleRef {
    pub fn new(
        module_name: impl Into<CompactString>,
        module_version: impl Into<CompactString>,
        class_name: impl Into<CompactString>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            module_version: module_version.into(),
            class_name: class_name.into(),
        }
    }
}

/// Opaque handle to a resolved class capability.
#[derive(Clone)]
pub enum WidgetClass {
    Model(Arc<dyn ModelClass>),
    View(Arc<dyn ViewClass>),
}

impl WidgetClass {
    pub fn class_name(&self) -> &str {
        match self {
            WidgetClass::Model(class) => class.class_name(),
            WidgetClass::View(class) => class.class_name(),
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self, WidgetClass::Model(_))
    }

    pub fn is_view(&self) -> bool {
        matches!(self, WidgetClass::View(_))
    }
}

impl std::fmt::Debug for WidgetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetClass::Model(class) => f
                .debug_tuple("WidgetClass::Model")
                .field(&class.class_name())
                .finish(),
            WidgetClass::View(class) => f
                .debug_tuple("WidgetClass::View")
                .field(&class.class_name())
                .finish(),
        }
    }
}

/// A loadable module: a registry of exported classes keyed by name.
#[derive(Clone, Default)]
pub struct WidgetModule {
    name: CompactString,
    exports: FxHashMap<CompactString, WidgetClass>,
}

impl WidgetModule {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            exports: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a class under its own name.
    pub fn insert(&mut self, class: WidgetClass) {
        self.exports
            .insert(CompactString::from(class.class_name()), class);
    }

    pub fn export(&self, class_name: &str) -> Option<&WidgetClass> {
        self.exports.get(class_name)
    }

    pub fn export_count(&self) -> usize {
        self.exports.len()
    }
}

/// Future returned by a fallback module loader.
pub type LoaderFuture =
    Pin<Box<dyn Future<Output = Result<WidgetModule, BoxError>> + Send + 'static>>;

/// Fallback loader supplied by the embedding application. Fixed at
/// construction; absence means only the builtin namespaces resolve.
pub type ModuleLoader = Arc<dyn Fn(&str, &str) -> LoaderFuture + Send + Sync>;

pub struct ClassResolver {
    builtins: BuiltinModules,
    loader: Option<ModuleLoader>,
}

impl ClassResolver {
    pub fn new(loader: Option<ModuleLoader>) -> Self {
        Self {
            builtins: BuiltinModules::standard(),
            loader,
        }
    }

    pub fn has_loader(&self) -> bool {
        self.loader.is_some()
    }

    /// Resolve `reference` to a class handle. Every call re-runs the full
    /// lookup; concurrent calls are independent.
    pub async fn resolve(&self, reference: &ModuleRef) -> ResolveResult<WidgetClass> {
        self.resolve_class(
            &reference.class_name,
            &reference.module_name,
            &reference.module_version,
        )
        .await
    }

    pub async fn resolve_class(
        &self,
        class_name: &str,
        module_name: &str,
        module_version: &str,
    ) -> ResolveResult<WidgetClass> {
        let loaded;
        let module = match BuiltinNamespace::parse(module_name) {
            Some(namespace) => self.builtins.module(namespace),
            None => match &self.loader {
                Some(loader) => {
                    loaded = loader(module_name, module_version).await.map_err(|source| {
                        tracing::warn!(
                            module = module_name,
                            version = module_version,
                            error = %source,
                            "fallback loader failed"
                        );
                        ResolveError::module_not_found(module_name, module_version, Some(source))
                    })?;
                    &loaded
                }
                None => {
                    return Err(ResolveError::module_not_found(
                        module_name,
                        module_version,
                        None,
                    ));
                }
            },
        };

        match module.export(class_name) {
            Some(class) => {
                tracing::debug!(
                    class = class_name,
                    module = module_name,
                    version = module_version,
                    "class resolved"
                );
                Ok(class.clone())
            }
            None => Err(ResolveError::class_not_found(
                class_name,
                module_name,
                module_version,
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolver.rs"]
mod tests;
