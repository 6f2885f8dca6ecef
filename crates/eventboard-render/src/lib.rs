//! Static dashboard rendering.
//!
//! - [`render_page`] - builds the self-contained HTML page
//! - [`PageSettings`] - title, footer, locale, sort and refresh settings
//! - [`embed_events`] - boundary-safe JSON for the embedded record list
//! - [`write_atomic`] - replaces the output file in one rename

pub mod card;
pub mod embed;
pub mod error;
pub mod page;
pub mod settings;
pub mod write;

pub use embed::{embed_events, embed_json, EmbeddedEvent};
pub use error::{RenderError, RenderResult};
pub use page::render_page;
pub use settings::{PageSettings, DEFAULT_FOOTER, DEFAULT_LOCALE, DEFAULT_TITLE};
pub use write::write_atomic;
