//! Element-id to handler registration.
//!
//! Renderers register what each interactive element does while they build the
//! markup, together with the element's parent. Event handling then walks that
//! recorded chain instead of searching the page tree at runtime.

use std::collections::HashMap;
use std::fmt;

use crate::engine::Action;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_BINDINGS;

/// Id attribute of a generated element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `parent-suffix`; children share their root's prefix so a whole subtree
    /// can be forgotten at once.
    pub fn child(&self, suffix: &str) -> ElementId {
        ElementId(format!("{}-{}", self.0, suffix))
    }

    fn is_within(&self, root: &ElementId) -> bool {
        self.0 == root.0
            || (self.0.starts_with(&root.0) && self.0[root.0.len()..].starts_with('-'))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Click,
    PointerEnter,
    PointerLeave,
    Input,
}

impl Trigger {
    /// DOM event name
    pub fn event_name(&self) -> &'static str {
        match self {
            Trigger::Click => "click",
            Trigger::PointerEnter => "mouseenter",
            Trigger::PointerLeave => "mouseleave",
            Trigger::Input => "input",
        }
    }
}

/// How far an event travels once it reaches a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Fire, then let ancestors react too
    Bubbling,
    /// Fire, then stop; ancestors never see the event
    Absorbing,
    /// Fire only when this element is where the event started
    SelfOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element: ElementId,
    pub trigger: Trigger,
    /// `None` for pure interceptors
    pub action: Option<Action>,
    pub scope: Scope,
}

#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    bindings: Vec<Binding>,
    parents: HashMap<ElementId, ElementId>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, element: &ElementId, trigger: Trigger, action: Action, scope: Scope) {
        self.bindings.push(Binding {
            element: element.clone(),
            trigger,
            action: Some(action),
            scope,
        });
    }

    /// Swallow `trigger` on `element` without doing anything with it.
    pub fn absorb(&mut self, element: &ElementId, trigger: Trigger) {
        self.bindings.push(Binding {
            element: element.clone(),
            trigger,
            action: None,
            scope: Scope::Absorbing,
        });
    }

    pub fn set_parent(&mut self, child: &ElementId, parent: &ElementId) {
        self.parents.insert(child.clone(), parent.clone());
    }

    pub fn extend(&mut self, other: BindingTable) {
        self.bindings.extend(other.bindings);
        self.parents.extend(other.parents);
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Is this element part of any registered chain?
    pub fn knows(&self, element: &ElementId) -> bool {
        self.parents.contains_key(element) || self.bindings.iter().any(|b| &b.element == element)
    }

    /// Drop every binding and parent link under `root` (the root included).
    pub fn forget(&mut self, root: &ElementId) {
        self.bindings.retain(|b| !b.element.is_within(root));
        self.parents.retain(|child, _| !child.is_within(root));
    }

    /// Actions fired by `trigger` starting at `origin`, in firing order.
    pub fn resolve(&self, origin: &ElementId, trigger: Trigger) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut current = Some(origin);
        // Parent links form a tree; the hop limit keeps a bad registration from looping.
        let mut hops = 0;

        while let Some(element) = current {
            let mut stop = false;
            for binding in self
                .bindings
                .iter()
                .filter(|b| &b.element == element && b.trigger == trigger)
            {
                if binding.scope == Scope::SelfOnly && element != origin {
                    continue;
                }
                if let Some(action) = &binding.action {
                    actions.push(action.clone());
                }
                if binding.scope == Scope::Absorbing {
                    stop = true;
                }
            }
            if stop {
                #[cfg(debug_assertions)]
                if PRINT_BINDINGS {
                    log::info!("[bindings] {trigger:?} from {origin} absorbed at {element}");
                }
                break;
            }

            hops += 1;
            if hops > self.parents.len() {
                break;
            }
            current = self.parents.get(element);
        }
        actions
    }
}
