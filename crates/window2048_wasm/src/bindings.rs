use core::str::FromStr;

use wasm_bindgen::prelude::*;
use web_sys::console;
use window2048_core::{Command, Direction, Session, SessionConfig};

fn to_js_error(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A game driven from JavaScript. The page renders `grid()` and
/// `windowBounds()` after every call that returned true.
#[wasm_bindgen]
pub struct WasmSession {
    session: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// `config` is an optional object with any of `grid_size`,
    /// `window_size`, `initial_tiles`, `spawn` and `seed`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Self, JsValue> {
        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let session = Session::new(config).map_err(to_js_error)?;
        Ok(Self { session })
    }

    /// Applies the command bound to a `KeyboardEvent.key`. Unbound keys are
    /// ignored and return false.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        Command::from_key(key).is_some_and(|command| self.session.apply(command).changed())
    }

    /// `direction` is one of "up", "down", "left" or "right".
    pub fn pan(&mut self, direction: &str) -> bool {
        self.apply(direction, Command::Pan)
    }

    pub fn slide(&mut self, direction: &str) -> bool {
        self.apply(direction, Command::Slide)
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Row-major tile values, `size() * size()` long.
    pub fn grid(&self) -> Vec<u32> {
        self.session.grid()
    }

    pub fn size(&self) -> usize {
        self.session.board().size()
    }

    #[wasm_bindgen(js_name = windowSize)]
    pub fn window_size(&self) -> usize {
        self.session.config().window_size
    }

    /// Highest tile on the board, 0 when empty.
    #[wasm_bindgen(js_name = maxTile)]
    pub fn max_tile(&self) -> u32 {
        self.session.board().max_tile()
    }

    /// `{ left, top, right, bottom }`, right and bottom exclusive.
    #[wasm_bindgen(js_name = windowBounds)]
    pub fn window_bounds(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session.window_bounds()).map_err(Into::into)
    }
}

impl WasmSession {
    fn apply(&mut self, direction: &str, command: fn(Direction) -> Command) -> bool {
        Direction::from_str(direction)
            .is_ok_and(|direction| self.session.apply(command(direction)).changed())
    }
}

/// Starts the Bevy version of the game on the `#board` canvas.
#[wasm_bindgen(js_name = runCanvas)]
pub fn run_canvas() {
    console::log_1(&"Starting window2048".into());
    window2048::run();
}
