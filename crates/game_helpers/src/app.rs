use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{
    Backends, PowerPreference, RenderCreation, WgpuSettings, WgpuSettingsPriority,
};
use bevy::window::{PresentMode, WindowMode, WindowResolution};

#[cfg(target_arch = "wasm32")]
use crate::window_resizing::fit_window_to_browser;

// Portrait phone ratio (9:16)
pub const WINDOW_WIDTH: f32 = 360.0;
pub const WINDOW_HEIGHT: f32 = 640.0;

/// CSS selector of the canvas the game draws into on the web.
pub const CANVAS_SELECTOR: &str = "#board";

// Builds a Bevy app with the window, renderer and frame pacing shared by every game
pub fn get_default_app(title: &str) -> App {
    let mut app = App::new();

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: title.to_string(),
            present_mode: PresentMode::Fifo,
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            canvas: Some(CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            mode: WindowMode::Windowed,
            // Keep browser shortcuts (F5, Ctrl+R, ...) working
            prevent_default_event_handling: false,
            ..default()
        }),
        ..default()
    };

    let render_plugin = RenderPlugin {
        render_creation: RenderCreation::Automatic(WgpuSettings {
            backends: Some(Backends::BROWSER_WEBGPU | Backends::GL),
            power_preference: PowerPreference::HighPerformance,
            priority: WgpuSettingsPriority::Functionality,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(window_plugin).set(render_plugin));

    // Saves battery on mobile, the board only changes on input anyway
    app.add_plugins(bevy_framepace::FramepacePlugin);

    app.insert_resource(ClearColor(Color::BLACK));

    #[cfg(target_arch = "wasm32")]
    app.add_systems(PreUpdate, fit_window_to_browser);

    app
}
