//! Reusable widget components.

pub mod detail;
pub mod form;

pub use detail::DetailPanel;
pub use form::render_form;
