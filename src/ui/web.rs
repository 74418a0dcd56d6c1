//! Live-document host for the browser build.
//!
//! Clicks are delegated from the document to the nearest element the binding
//! table knows about. Pointer and input events don't bubble the same way, so
//! those get a listener on the bound element itself, attached after every
//! render or dispatch that may have added markup.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlMediaElement};

use crate::config::{GALLERY, MEDIA};
use crate::data::LocalStorageStore;
use crate::engine::GalleryEngine;
use crate::media::default_media_files;
use crate::ui::bindings::{ElementId, Trigger};
use crate::ui::config::UI_CONFIG;
use crate::ui::filters::CardEntry;
use crate::ui::host::{ModalOpener, Notifier, PageHost, Severity};
use crate::ui::modal::PackageDetail;
use crate::utils::{attr_escape, html_escape};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_BINDINGS;

// Marks an element whose listener for that event is already attached
const BOUND_MARKER_PREFIX: &str = "data-vp-bound-";

pub struct BrowserPage {
    document: Document,
    next_toast: Cell<usize>,
}

impl BrowserPage {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self {
            document,
            next_toast: Cell::new(0),
        })
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn by_id(&self, id: &ElementId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }

    fn html_element(&self, id: &ElementId) -> Option<HtmlElement> {
        self.by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn media_element(&self, id: &ElementId) -> Option<HtmlMediaElement> {
        self.by_id(id)?.dyn_into::<HtmlMediaElement>().ok()
    }
}

impl PageHost for BrowserPage {
    fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    fn set_container_html(&mut self, selector: &str, html: &str) -> bool {
        match self.query(selector) {
            Some(el) => {
                el.set_inner_html(html);
                true
            }
            None => false,
        }
    }

    fn append_html(&mut self, selector: &str, html: &str) -> bool {
        self.query(selector)
            .is_some_and(|el| el.insert_adjacent_html("beforeend", html).is_ok())
    }

    /// Statically authored `.product-card` elements, given ids when they lack one.
    fn static_cards(&mut self) -> Vec<CardEntry> {
        let Ok(nodes) = self.document.query_selector_all(".product-card") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index)?.dyn_into::<Element>().ok())
            .enumerate()
            .map(|(index, card)| {
                if card.id().is_empty() {
                    card.set_id(&format!("vp-static-{index}"));
                }
                let price_text = card
                    .query_selector(".price")
                    .ok()
                    .flatten()
                    .and_then(|price| price.text_content())
                    .unwrap_or_default();
                CardEntry {
                    element: ElementId::new(card.id()),
                    category_key: card
                        .get_attribute("data-category")
                        .unwrap_or_else(|| "all".to_string()),
                    price_text: price_text.trim().to_string(),
                }
            })
            .collect()
    }

    fn insert_before(&mut self, selector: &str, html: &str) -> bool {
        self.query(selector)
            .is_some_and(|el| el.insert_adjacent_html("beforebegin", html).is_ok())
    }

    fn append_to_body(&mut self, id: &ElementId, html: &str) {
        let appended = self
            .document
            .body()
            .is_some_and(|body| body.insert_adjacent_html("beforeend", html).is_ok());
        if !appended {
            log::error!("Could not append {id} to the page body");
        }
    }

    fn remove_element(&mut self, id: &ElementId) {
        if let Some(el) = self.by_id(id) {
            el.remove();
        }
    }

    fn set_visible(&mut self, id: &ElementId, visible: bool) {
        if let Some(el) = self.html_element(id) {
            let style = el.style();
            let _ = if visible {
                style.remove_property("display").map(|_| ())
            } else {
                style.set_property("display", "none")
            };
        }
    }

    fn set_text(&mut self, id: &ElementId, text: &str) {
        if let Some(el) = self.by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(&mut self, id: &ElementId, class: &str, enabled: bool) {
        if let Some(el) = self.by_id(id) {
            let _ = el.class_list().toggle_with_force(class, enabled);
        }
    }

    fn play_media(&mut self, id: &ElementId) {
        if let Some(media) = self.media_element(id) {
            // Autoplay policies may reject; the preview then just stays still.
            let _ = media.play();
        }
    }

    fn reset_media(&mut self, id: &ElementId) {
        if let Some(media) = self.media_element(id) {
            let _ = media.pause();
            media.set_current_time(0.0);
        }
    }
}

impl Notifier for BrowserPage {
    fn notify(&mut self, message: &str, severity: Severity) {
        let seq = self.next_toast.get();
        self.next_toast.set(seq + 1);
        let id = ElementId::new(format!("vp-toast-{seq}"));

        let html = format!(
            r#"<div class="notification {class}" id="{id}" style="{style} background: {color};">{message}</div>"#,
            class = severity.class_name(),
            style = attr_escape(UI_CONFIG.toast_style),
            color = severity.color(),
            message = html_escape(message),
        );
        self.append_to_body(&id, &html);

        let document = self.document.clone();
        let remove = Closure::once_into_js(move || {
            if let Some(toast) = document.get_element_by_id(id.as_str()) {
                toast.remove();
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                GALLERY.toast_duration_ms,
            );
        }
    }
}

impl ModalOpener for BrowserPage {
    /// Merge the detail into `window.packageData` under the product name and
    /// hand that name to the page's `openPackageModal`.
    fn open_package(&mut self, detail: &PackageDetail) {
        if let Err(e) = open_package_modal(detail) {
            log::error!("Package modal for \"{}\" failed: {e:?}", detail.title);
        }
    }
}

fn open_package_modal(detail: &PackageDetail) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global `window`")?;
    let json = serde_json::to_string(detail).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let entry = js_sys::JSON::parse(&json)?;
    let key = JsValue::from_str(&detail.title);

    let mut package_data = js_sys::Reflect::get(&window, &"packageData".into())?;
    if !package_data.is_object() {
        package_data = js_sys::Object::new().into();
        js_sys::Reflect::set(&window, &"packageData".into(), &package_data)?;
    }
    js_sys::Reflect::set(&package_data, &key, &entry)?;

    let open = js_sys::Reflect::get(&window, &"openPackageModal".into())?;
    match open.dyn_into::<js_sys::Function>() {
        Ok(open) => open.call1(&JsValue::NULL, &key).map(|_| ()),
        Err(_) => Err("openPackageModal is not defined on this page".into()),
    }
}

// --- SESSION ---

struct Session {
    engine: GalleryEngine<LocalStorageStore>,
    page: BrowserPage,
}

type SharedSession = Rc<RefCell<Session>>;

thread_local! {
    static SESSION: RefCell<Option<SharedSession>> = const { RefCell::new(None) };
}

/// Page entry: build the session, wire the document, render after the
/// configured delay so the rest of the page scripts have run.
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global `window`")?;
    let page = BrowserPage::new().ok_or("no document on window")?;

    let engine = GalleryEngine::new(LocalStorageStore::new());
    let document = page.document.clone();
    let shared: SharedSession = Rc::new(RefCell::new(Session { engine, page }));
    SESSION.with(|session| *session.borrow_mut() = Some(shared.clone()));

    let on_click = {
        let shared = shared.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(origin) = bound_origin(&shared, &event) {
                on_event(&shared, origin, Trigger::Click, None);
            }
        })
    };
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let ready = {
        let shared = shared.clone();
        Closure::once_into_js(move || {
            match shared.try_borrow_mut() {
                Ok(mut session) => {
                    let Session { engine, page } = &mut *session;
                    engine.start(page);
                    if page.exists(GALLERY.media_selector) {
                        engine.mount_media_gallery(&default_media_files(), page);
                        log::info!("Media gallery loaded from `{}`", MEDIA.folder);
                    }
                }
                Err(_) => log::warn!("Gallery session busy at page ready"),
            }
            attach_listeners(&shared);
        })
    };
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        ready.unchecked_ref(),
        GALLERY.render_delay_ms,
    )?;
    Ok(())
}

/// Debugging hook: re-read storage and render again.
#[wasm_bindgen(js_name = reloadProducts)]
pub fn reload_products() {
    with_session(|shared| {
        if let Ok(mut session) = shared.try_borrow_mut() {
            let Session { engine, page } = &mut *session;
            engine.reload(page);
        }
        attach_listeners(shared);
    });
}

/// Open the detail modal for a rendered product from page scripts.
#[wasm_bindgen(js_name = openDynamicPackageModal)]
pub fn open_dynamic_package_modal(product_id: &str) {
    with_session(|shared| {
        if let Ok(mut session) = shared.try_borrow_mut() {
            let Session { engine, page } = &mut *session;
            if let Err(e) = engine.open_detail(product_id, page) {
                log::error!("{e}");
            }
        }
    });
}

fn with_session(f: impl FnOnce(&SharedSession)) {
    let shared = SESSION.with(|session| session.borrow().clone());
    match shared {
        Some(shared) => f(&shared),
        None => log::warn!("Gallery not started yet"),
    }
}

// Nearest element, from the event target upwards, that has a registered binding.
fn bound_origin(shared: &SharedSession, event: &Event) -> Option<ElementId> {
    let session = shared.try_borrow().ok()?;
    let mut current = event.target()?.dyn_into::<Element>().ok();
    while let Some(el) = current {
        let id = el.id();
        if !id.is_empty() {
            let id = ElementId::new(id);
            if session.engine.bindings().knows(&id) {
                return Some(id);
            }
        }
        current = el.parent_element();
    }
    None
}

fn on_event(shared: &SharedSession, origin: ElementId, trigger: Trigger, value: Option<String>) {
    match shared.try_borrow_mut() {
        Ok(mut session) => {
            let Session { engine, page } = &mut *session;
            match value {
                Some(value) => engine.handle_input(&origin, &value, page),
                None => {
                    engine.handle_event(&origin, trigger, page);
                }
            }
        }
        Err(_) => {
            log::debug!("Dropped {} on {origin}: gallery busy", trigger.event_name());
            return;
        }
    }
    attach_listeners(shared);
}

/// Attach element listeners for every non-click binding whose element is on
/// the page and not yet wired.
fn attach_listeners(shared: &SharedSession) {
    let pending: Vec<(ElementId, Trigger, Element)> = {
        let Ok(session) = shared.try_borrow() else {
            return;
        };
        session
            .engine
            .bindings()
            .bindings()
            .iter()
            .filter(|binding| binding.trigger != Trigger::Click)
            .filter_map(|binding| {
                let el = session.page.by_id(&binding.element)?;
                let marker = format!("{BOUND_MARKER_PREFIX}{}", binding.trigger.event_name());
                if el.has_attribute(&marker) {
                    return None;
                }
                let _ = el.set_attribute(&marker, "");
                Some((binding.element.clone(), binding.trigger, el))
            })
            .collect()
    };

    for (origin, trigger, el) in pending {
        let listener = {
            let shared = shared.clone();
            let origin = origin.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let value = match trigger {
                    Trigger::Input => event
                        .target()
                        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                        .map(|input| input.value()),
                    _ => None,
                };
                on_event(&shared, origin.clone(), trigger, value);
            })
        };
        match el.add_event_listener_with_callback(trigger.event_name(), listener.as_ref().unchecked_ref()) {
            Ok(()) => {
                #[cfg(debug_assertions)]
                if PRINT_BINDINGS {
                    log::info!("[bindings] {} listener on {origin}", trigger.event_name());
                }
                listener.forget();
            }
            Err(e) => log::error!("Listener for {origin} not attached: {e:?}"),
        }
    }
}
