// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(fern::Output::call(|record| {
            let line = format!("[{}] {}", record.level(), record.args());
            web_sys::console::log_1(&line.into());
        }))
        .apply();

    log::info!("VPOWER gallery starting in WASM mode...");
    #[cfg(debug_assertions)]
    log::info!("{:?}", vpower_gallery::config::DEBUG_FLAGS);

    // B. Wire the page
    vpower_gallery::ui::web::start()
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
const PREVIEW_TITLE: &str = "VPOWER Gallery Preview";
#[cfg(not(target_arch = "wasm32"))]
const PREVIEW_STYLESHEET: &str = "css/style.css";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use vpower_gallery::{Cli, JsonFileStore, MemoryStore};

    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    #[cfg(debug_assertions)]
    log::info!("{:?}", vpower_gallery::config::DEBUG_FLAGS);

    // B. Parse Args
    let args = Cli::parse();

    // C. Pick the storage backing
    match &args.storage {
        Some(path) => preview(JsonFileStore::open(path)?, &args),
        None => {
            log::info!("No storage snapshot given, visitors see the default catalog");
            preview(MemoryStore::new(), &args)
        }
    }
}

/// Run the page-ready sequence against an in-process page and write it out.
#[cfg(not(target_arch = "wasm32"))]
fn preview<S: vpower_gallery::KeyValueStore>(store: S, args: &vpower_gallery::Cli) -> anyhow::Result<()> {
    use anyhow::Context;
    use vpower_gallery::config::GALLERY;
    use vpower_gallery::media::default_media_files;
    use vpower_gallery::{GalleryEngine, MemoryPage};

    let static_cards = match &args.static_cards {
        Some(path) => std::fs::read_to_string(path)
            .context(format!("Failed to read static cards: {}", path.display()))?,
        None => String::new(),
    };

    let mut page = MemoryPage::new()
        .with_section(GALLERY.section_selector)
        .with_container(GALLERY.grid_selector, &static_cards);
    if args.media {
        page = page.with_container(GALLERY.media_selector, "");
    }

    let mut engine = GalleryEngine::new(store);
    engine.start(&mut page);
    if args.media {
        engine.mount_media_gallery(&default_media_files(), &mut page);
    }

    let document = page.to_document(PREVIEW_TITLE, Some(PREVIEW_STYLESHEET));
    std::fs::write(&args.out, document)
        .context(format!("Failed to write preview: {}", args.out.display()))?;

    log::info!(
        "Wrote {} ({} cards, {} wishlisted)",
        args.out.display(),
        engine.cards().len(),
        engine.wishlist().len()
    );
    Ok(())
}
