//! Builtin module registries: the export sets of the three reserved
//! namespaces.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::event::LayoutMessage;
use crate::core::view::{DomWidgetView, ModelClass, ViewClass, VisualRoot, WidgetModel};
use crate::registry::RemoveToken;

use super::{
    BuiltinNamespace, WidgetClass, WidgetModule, BASE_NAMESPACE, CONTROLS_NAMESPACE,
    OUTPUT_NAMESPACE,
};

pub(crate) struct BuiltinModules {
    base: WidgetModule,
    controls: WidgetModule,
    output: WidgetModule,
}

impl BuiltinModules {
    /// The export sets this build ships. Version requests are not checked
    /// against builtins.
    pub(crate) fn standard() -> Self {
        let mut base = WidgetModule::new(BASE_NAMESPACE);
        for name in ["WidgetModel", "DOMWidgetModel", "LayoutModel", "StyleModel"] {
            base.insert(model(name));
        }
        for name in ["WidgetView", "DOMWidgetView"] {
            base.insert(view(name));
        }

        let mut controls = WidgetModule::new(CONTROLS_NAMESPACE);
        for name in [
            "ButtonModel",
            "SliderModel",
            "CheckboxModel",
            "TextModel",
            "ProgressModel",
            "DropdownModel",
        ] {
            controls.insert(model(name));
        }
        for name in [
            "ButtonView",
            "SliderView",
            "CheckboxView",
            "TextView",
            "ProgressView",
            "DropdownView",
        ] {
            controls.insert(view(name));
        }

        let mut output = WidgetModule::new(OUTPUT_NAMESPACE);
        output.insert(model("OutputModel"));
        output.insert(view("OutputView"));

        Self {
            base,
            controls,
            output,
        }
    }

    pub(crate) fn module(&self, namespace: BuiltinNamespace) -> &WidgetModule {
        match namespace {
            BuiltinNamespace::Base => &self.base,
            BuiltinNamespace::Controls => &self.controls,
            BuiltinNamespace::Output => &self.output,
        }
    }
}

fn model(name: &'static str) -> WidgetClass {
    WidgetClass::Model(Arc::new(BuiltinModelClass { name }))
}

fn view(name: &'static str) -> WidgetClass {
    WidgetClass::View(Arc::new(BuiltinViewClass { name }))
}

struct BuiltinModelClass {
    name: &'static str,
}

impl ModelClass for BuiltinModelClass {
    fn class_name(&self) -> &str {
        self.name
    }

    fn create(&self) -> Box<dyn WidgetModel> {
        Box::new(BuiltinModel { class: self.name })
    }
}

struct BuiltinModel {
    class: &'static str,
}

impl WidgetModel for BuiltinModel {
    fn class_name(&self) -> &str {
        self.class
    }
}

struct BuiltinViewClass {
    name: &'static str,
}

impl ViewClass for BuiltinViewClass {
    fn class_name(&self) -> &str {
        self.name
    }

    fn create(&self) -> Box<dyn DomWidgetView> {
        Box::new(BuiltinView {
            root: BuiltinRoot {
                needs_layout: AtomicBool::new(false),
            },
            remove: Mutex::new(None),
        })
    }
}

/// Skeleton view for builtin classes. Rendering belongs to the external
/// pipeline; the skeleton only carries the lifecycle surface the runtime
/// needs.
struct BuiltinView {
    root: BuiltinRoot,
    remove: Mutex<Option<RemoveToken>>,
}

struct BuiltinRoot {
    needs_layout: AtomicBool,
}

impl VisualRoot for BuiltinRoot {
    fn post(&self, msg: LayoutMessage) {
        match msg {
            LayoutMessage::ResizeUnknown => self.needs_layout.store(true, Ordering::Release),
        }
    }
}

impl DomWidgetView for BuiltinView {
    fn visual_root(&self) -> &dyn VisualRoot {
        &self.root
    }

    fn connect_remove(&self, token: RemoveToken) {
        let mut slot = match self.remove.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(token);
    }
}
