pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// Toast colours per severity
#[derive(Clone, Copy)]
pub struct ToastColors {
    pub success: &'static str,
    pub info: &'static str,
}

/// Main UI configuration struct
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub toast_colors: ToastColors,
    /// Inline style shared by every toast; the background is appended per severity
    pub toast_style: &'static str,
    /// Class toggled on filter buttons and hearts
    pub active_class: &'static str,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    toast_colors: ToastColors {
        success: "#4CAF50",
        info: "#2196F3",
    },
    toast_style: "position: fixed; top: 20px; right: 20px; color: white; padding: 15px 20px; \
                  border-radius: 8px; z-index: 10000; font-family: 'Georgia', serif; \
                  animation: slideIn 0.3s ease;",
    active_class: "active",
};
