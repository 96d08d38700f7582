use bevy::prelude::*;
use game_helpers::restart::{Restartable, restart_on_key};
use window2048_core::{ConfigError, Session, SessionConfig};

mod controls;
mod view;

/// The running game, shared by the input and drawing systems.
#[derive(Resource, Deref, DerefMut)]
pub struct Game(pub Session);

impl Restartable for Game {
    fn restart(&mut self) {
        info!("Restarting window2048");
        self.0.restart();
    }
}

pub fn run() {
    if let Err(err) = run_with(SessionConfig::default()) {
        error!("Could not start window2048: {err}");
    }
}

pub fn run_with(config: SessionConfig) -> Result<(), ConfigError> {
    let session = Session::new(config)?;

    game_helpers::get_default_app(env!("CARGO_PKG_NAME"))
        .insert_resource(Game(session))
        .add_plugins((controls::ControlsPlugin, view::ViewPlugin))
        .add_systems(Update, restart_on_key::<Game>)
        .run();

    Ok(())
}
