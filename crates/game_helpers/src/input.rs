use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    JustPressed,
    JustReleased,
}

/// Screen position of a mouse click or touch that started or ended this frame.
pub fn pointer_screen_position(
    phase: PointerPhase,
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    let (clicked, touch) = match phase {
        PointerPhase::JustPressed => (
            button_input.just_pressed(MouseButton::Left),
            touch_input.iter_just_pressed().next(),
        ),
        PointerPhase::JustReleased => (
            button_input.just_released(MouseButton::Left),
            touch_input.iter_just_released().next(),
        ),
    };

    if clicked {
        windows.get_single().ok()?.cursor_position()
    } else {
        touch.map(bevy::input::touch::Touch::position)
    }
}

/// Same as [`pointer_screen_position`], projected into 2D world space.
pub fn pointer_world_position(
    phase: PointerPhase,
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = pointer_screen_position(phase, button_input, touch_input, windows)?;
    let (camera, camera_transform) = camera.get_single().ok()?;

    camera
        .viewport_to_world(camera_transform, position)
        .map(|ray| ray.origin.truncate())
        .ok()
}

/// Dominant axis of a drag from `start` to `end`, as a unit vector in world
/// space (y up). Drags shorter than `min_distance` are ignored.
pub fn swipe_direction(start: Vec2, end: Vec2, min_distance: f32) -> Option<IVec2> {
    let diff = end - start;
    if diff.length() < min_distance {
        return None;
    }
    if diff.x.abs() > diff.y.abs() {
        Some(IVec2::new(diff.x.signum() as i32, 0))
    } else {
        Some(IVec2::new(0, diff.y.signum() as i32))
    }
}

/// Tracks a single pointer drag and reports its direction on release.
#[derive(Resource, Default, Debug)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn begin(&mut self, position: Vec2) {
        self.start = Some(position);
    }

    pub fn finish(&mut self, position: Vec2, min_distance: f32) -> Option<IVec2> {
        let start = self.start.take()?;
        swipe_direction(start, position, min_distance)
    }
}
