use bevy::prelude::*;

/// Game state that can be thrown away and started over in place.
pub trait Restartable: Resource {
    fn restart(&mut self);
}

pub const RESTART_KEY: KeyCode = KeyCode::KeyR;

pub fn restart_on_key<T: Restartable>(keyboard: Res<ButtonInput<KeyCode>>, mut target: ResMut<T>) {
    if keyboard.just_pressed(RESTART_KEY) {
        target.restart();
    }
}
