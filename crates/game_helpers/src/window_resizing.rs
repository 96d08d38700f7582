use bevy::prelude::*;
use bevy::window::PrimaryWindow;

// wgpu rejects surfaces larger than the max texture extent
const MAX_EXTENT: f32 = 2048.0;

fn browser_inner_size() -> Option<Vec2> {
    let browser = web_sys::window()?;
    let width = browser.inner_width().ok()?.as_f64()?;
    let height = browser.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(width as f32, height as f32))
}

pub fn fit_window_to_browser(mut primary_query: Query<&mut Window, With<PrimaryWindow>>) {
    let Some(target) = browser_inner_size() else {
        return;
    };
    let target = target.min(Vec2::splat(MAX_EXTENT));

    for mut window in &mut primary_query {
        let current = Vec2::new(window.resolution.width(), window.resolution.height());
        if (current - target).abs().max_element() > f32::EPSILON {
            window.resolution.set(target.x, target.y);
        }
    }
}
