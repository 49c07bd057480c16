mod configuration;
mod events;
mod navigation;

pub use configuration::handle_settings_changed;
pub use events::{handle_host_event, HostEvent};
pub use navigation::{handle_heading_click, handle_note_click};
