use bevy::prelude::*;
use game_helpers::input::{PointerPhase, SwipeTracker, pointer_world_position};
use window2048_core::{Command, Direction};

use crate::Game;

const MIN_SWIPE_DISTANCE: f32 = 24.0;

// WASD pans the window, arrow keys slide the tiles
const KEY_BINDINGS: [(KeyCode, Command); 8] = [
    (KeyCode::KeyW, Command::Pan(Direction::Up)),
    (KeyCode::KeyA, Command::Pan(Direction::Left)),
    (KeyCode::KeyS, Command::Pan(Direction::Down)),
    (KeyCode::KeyD, Command::Pan(Direction::Right)),
    (KeyCode::ArrowUp, Command::Slide(Direction::Up)),
    (KeyCode::ArrowDown, Command::Slide(Direction::Down)),
    (KeyCode::ArrowLeft, Command::Slide(Direction::Left)),
    (KeyCode::ArrowRight, Command::Slide(Direction::Right)),
];

#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerCommand(pub Command);

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerCommand>()
            .init_resource::<SwipeTracker>()
            .add_systems(
                Update,
                (keyboard_commands, swipe_commands, apply_commands).chain(),
            );
    }
}

fn keyboard_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut writer: EventWriter<PlayerCommand>,
) {
    for (key, command) in KEY_BINDINGS {
        if keyboard.just_pressed(key) {
            writer.send(PlayerCommand(command));
        }
    }
}

fn swipe_commands(
    window: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mouse_button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut tracker: ResMut<SwipeTracker>,
    mut writer: EventWriter<PlayerCommand>,
) {
    if let Some(world_position) = pointer_world_position(
        PointerPhase::JustPressed,
        &mouse_button_input,
        &touch_input,
        &window,
        &camera,
    ) {
        tracker.begin(world_position);
    }

    let Some(world_position) = pointer_world_position(
        PointerPhase::JustReleased,
        &mouse_button_input,
        &touch_input,
        &window,
        &camera,
    ) else {
        return;
    };

    // World space has y pointing up, grid rows grow downwards
    let direction = tracker
        .finish(world_position, MIN_SWIPE_DISTANCE)
        .and_then(|swipe| Direction::from_vector(swipe.x, -swipe.y));

    if let Some(direction) = direction {
        writer.send(PlayerCommand(Command::Slide(direction)));
    }
}

fn apply_commands(mut events: EventReader<PlayerCommand>, mut game: ResMut<Game>) {
    for PlayerCommand(command) in events.read() {
        let outcome = game.bypass_change_detection().apply(*command);
        debug!("{command:?} -> {outcome:?}");
        // Only redraw when the board or the window actually changed
        if outcome.changed() {
            game.set_changed();
        }
    }
}
