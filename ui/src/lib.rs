//! Shared UI crate for Kommandoskolan. Content model, locale state,
//! dispatch, and views live here; platform crates only compose and launch.

pub mod content;
pub mod dispatch;
pub mod i18n;
pub mod locale;
pub mod switcher;
pub mod views;

pub mod components {
    // Interactive command exercise (components/command_lab.rs)
    pub mod command_lab;
    pub use command_lab::CommandLab;
}
