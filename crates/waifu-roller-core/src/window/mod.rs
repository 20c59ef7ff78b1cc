mod locator;
mod target_app;
mod title_rule;
mod window_handle;
mod window_system;

pub use {
    locator::WindowLocator,
    target_app::TargetApp,
    title_rule::TitleRule,
    window_handle::WindowHandle,
    window_system::{Launcher, WindowSystem},
};
