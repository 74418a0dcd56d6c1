//! Capabilities the gallery needs from the page it runs in.
//!
//! The browser build implements these over the live document; [`MemoryPage`]
//! implements them in-process for tests and the native preview.

use std::collections::{BTreeMap, BTreeSet};

use crate::ui::bindings::ElementId;
use crate::ui::config::UI_CONFIG;
use crate::ui::filters::CardEntry;
use crate::ui::modal::PackageDetail;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
}

impl Severity {
    /// CSS class added next to `notification`
    pub fn class_name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => UI_CONFIG.toast_colors.info,
            Severity::Success => UI_CONFIG.toast_colors.success,
        }
    }
}

/// Markup and element-state access.
/// Selectors are the simple `#id` / `.class` forms used in config.
pub trait PageHost {
    /// Does an element matching `selector` exist?
    fn exists(&self, selector: &str) -> bool;
    /// Replace inner markup; false when the container is absent
    fn set_container_html(&mut self, selector: &str, html: &str) -> bool;
    /// Add markup after the container's last child, leaving existing children
    /// (and anything attached to them) in place; false when absent
    fn append_html(&mut self, selector: &str, html: &str) -> bool;
    /// Statically authored cards currently on the page, for filtering
    fn static_cards(&mut self) -> Vec<CardEntry>;
    /// Insert markup just before the container; false when absent
    fn insert_before(&mut self, selector: &str, html: &str) -> bool;
    /// Append a top-level element (modal, lightbox, toast) to the body
    fn append_to_body(&mut self, id: &ElementId, html: &str);
    fn remove_element(&mut self, id: &ElementId);
    fn set_visible(&mut self, id: &ElementId, visible: bool);
    fn set_text(&mut self, id: &ElementId, text: &str);
    fn set_class(&mut self, id: &ElementId, class: &str, enabled: bool);
    fn play_media(&mut self, id: &ElementId);
    /// Pause and rewind to the start
    fn reset_media(&mut self, id: &ElementId);
}

/// Transient on-screen feedback.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Shows the full product detail modal.
pub trait ModalOpener {
    fn open_package(&mut self, detail: &PackageDetail);
}

/// Everything the engine talks to.
pub trait GalleryHost: PageHost + Notifier + ModalOpener {}

impl<T: PageHost + Notifier + ModalOpener> GalleryHost for T {}

/// Per-element state recorded by [`MemoryPage`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub hidden: bool,
    pub text: Option<String>,
    pub classes: BTreeSet<String>,
    pub playing: bool,
    pub rewinds: usize,
}

/// In-process page: named containers plus recorded element state.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    /// Selector → inner markup, in page order
    containers: Vec<(String, String)>,
    /// Selector → markup inserted before the container
    before: BTreeMap<String, Vec<String>>,
    /// Selectors that exist but are not containers
    sections: BTreeSet<String>,
    overlays: Vec<(ElementId, String)>,
    elements: BTreeMap<ElementId, ElementState>,
    static_cards: Vec<CardEntry>,
    /// Selectors whose content was replaced wholesale, in call order
    pub replaced: Vec<String>,
    pub toasts: Vec<(String, Severity)>,
    pub opened: Vec<PackageDetail>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, selector: &str, html: &str) -> Self {
        self.containers.push((selector.to_string(), html.to_string()));
        self
    }

    pub fn with_section(mut self, selector: &str) -> Self {
        self.sections.insert(selector.to_string());
        self
    }

    /// A hand-authored card, reported by `static_cards`
    pub fn add_static_card(&mut self, entry: CardEntry) {
        self.static_cards.push(entry);
    }

    pub fn container(&self, selector: &str) -> Option<&str> {
        self.containers
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, html)| html.as_str())
    }

    pub fn inserted_before(&self, selector: &str) -> &[String] {
        self.before.get(selector).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn overlays(&self) -> &[(ElementId, String)] {
        &self.overlays
    }

    pub fn element(&self, id: &ElementId) -> Option<&ElementState> {
        self.elements.get(id)
    }

    /// Elements start visible until something hides them
    pub fn is_visible(&self, id: &ElementId) -> bool {
        self.elements.get(id).is_none_or(|state| !state.hidden)
    }

    pub fn has_class(&self, id: &ElementId, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|state| state.classes.contains(class))
    }

    pub fn text_of(&self, id: &ElementId) -> Option<&str> {
        self.elements.get(id).and_then(|state| state.text.as_deref())
    }

    fn state_mut(&mut self, id: &ElementId) -> &mut ElementState {
        self.elements.entry(id.clone()).or_default()
    }

    /// Assemble a standalone document from the containers and overlays.
    pub fn to_document(&self, title: &str, stylesheet: Option<&str>) -> String {
        let mut body = String::new();
        for (selector, html) in &self.containers {
            for fragment in self.inserted_before(selector) {
                body.push_str(fragment);
                body.push('\n');
            }
            body.push_str(&format!(
                "<div {}>\n{}\n</div>\n",
                selector_attribute(selector),
                html
            ));
        }
        for (_, html) in &self.overlays {
            body.push_str(html);
            body.push('\n');
        }

        let stylesheet = stylesheet
            .map(|href| format!("\n    <link rel=\"stylesheet\" href=\"{href}\">"))
            .unwrap_or_default();
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n    <title>{title}</title>{stylesheet}\n</head>\n<body>\n{body}</body>\n</html>\n"
        )
    }
}

fn selector_attribute(selector: &str) -> String {
    if let Some(id) = selector.strip_prefix('#') {
        format!("id=\"{id}\"")
    } else if let Some(class) = selector.strip_prefix('.') {
        format!("class=\"{class}\"")
    } else {
        format!("data-selector=\"{selector}\"")
    }
}

impl PageHost for MemoryPage {
    fn exists(&self, selector: &str) -> bool {
        self.sections.contains(selector) || self.container(selector).is_some()
    }

    fn set_container_html(&mut self, selector: &str, html: &str) -> bool {
        match self.containers.iter_mut().find(|(s, _)| s == selector) {
            Some((_, existing)) => {
                *existing = html.to_string();
                self.replaced.push(selector.to_string());
                true
            }
            None => false,
        }
    }

    fn append_html(&mut self, selector: &str, html: &str) -> bool {
        match self.containers.iter_mut().find(|(s, _)| s == selector) {
            Some((_, existing)) => {
                if !existing.is_empty() {
                    existing.push('\n');
                }
                existing.push_str(html);
                true
            }
            None => false,
        }
    }

    fn static_cards(&mut self) -> Vec<CardEntry> {
        self.static_cards.clone()
    }

    fn insert_before(&mut self, selector: &str, html: &str) -> bool {
        if self.container(selector).is_none() {
            return false;
        }
        self.before
            .entry(selector.to_string())
            .or_default()
            .push(html.to_string());
        true
    }

    fn append_to_body(&mut self, id: &ElementId, html: &str) {
        self.overlays.push((id.clone(), html.to_string()));
    }

    fn remove_element(&mut self, id: &ElementId) {
        self.overlays.retain(|(overlay, _)| overlay != id);
        self.elements.remove(id);
    }

    fn set_visible(&mut self, id: &ElementId, visible: bool) {
        self.state_mut(id).hidden = !visible;
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        self.state_mut(id).text = Some(text.to_string());
    }

    fn set_class(&mut self, id: &ElementId, class: &str, enabled: bool) {
        let state = self.state_mut(id);
        if enabled {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn play_media(&mut self, id: &ElementId) {
        self.state_mut(id).playing = true;
    }

    fn reset_media(&mut self, id: &ElementId) {
        let state = self.state_mut(id);
        state.playing = false;
        state.rewinds += 1;
    }
}

impl Notifier for MemoryPage {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.toasts.push((message.to_string(), severity));
    }
}

impl ModalOpener for MemoryPage {
    fn open_package(&mut self, detail: &PackageDetail) {
        self.opened.push(detail.clone());
    }
}
