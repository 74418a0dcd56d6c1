pub mod html;

pub use html::{attr_escape, html_escape};
