//! Reusable UI widgets

mod error_banner;
mod notification_banner;
mod status_bar;

pub use error_banner::render_error_banner;
pub use notification_banner::render_notification_banner;
pub use status_bar::{build_status_bar, pending_badge, render_status_bar};
