//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is further gated by `cfg(debug_assertions)`
//! at the call site.

/// Emit the catalog load summary (slot hit/miss, product counts).
pub const PRINT_CATALOG_LOAD: bool = true;

/// Emit render statistics (card count, markup length).
pub const PRINT_RENDER_STATS: bool = false;

/// Emit UI interaction logs (clicks, filters, wishlist toggles).
pub const PRINT_UI_INTERACTIONS: bool = true;

/// Emit binding resolution traces (which element caught which event).
pub const PRINT_BINDINGS: bool = false;

/// Emit detailed storage read/write logs.
pub const PRINT_STORAGE: bool = false;

/// Grouped view of the flags, handy for dumping the active set at startup.
#[derive(Debug, Clone, Copy)]
pub struct DebugFlags {
    pub catalog_load: bool,
    pub render_stats: bool,
    pub ui_interactions: bool,
    pub bindings: bool,
    pub storage: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    catalog_load: PRINT_CATALOG_LOAD,
    render_stats: PRINT_RENDER_STATS,
    ui_interactions: PRINT_UI_INTERACTIONS,
    bindings: PRINT_BINDINGS,
    storage: PRINT_STORAGE,
};
