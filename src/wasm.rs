//! JavaScript-facing handle for the browser front end.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use crate::game::GameEngine;
use crate::types::{GameConfig, GameMode};

/// One game session owned by the page.
#[wasm_bindgen]
pub struct WasmGame {
    engine: GameEngine,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config` may be `undefined` or a partial `{ mode, computerColor }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            engine: GameEngine::new(config),
        })
    }

    /// Restarts with `mode` ("pvp" or "pvc").
    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(&mut self, mode: &str) -> Result<(), JsError> {
        let mode: GameMode = mode.parse()?;
        self.engine.start_game(mode);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Returns the list of events produced by the move.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, row: u8, col: u8) -> Result<JsValue, JsError> {
        let events = self.engine.attempt_move(row, col)?;
        to_js(&events)
    }

    #[wasm_bindgen(js_name = computerMove)]
    pub fn computer_move(&mut self) -> Result<JsValue, JsError> {
        let events = self.engine.computer_move()?;
        to_js(&events)
    }

    #[wasm_bindgen(js_name = isComputerTurn)]
    pub fn is_computer_turn(&self) -> bool {
        self.engine.is_computer_turn()
    }

    #[wasm_bindgen(js_name = currentState)]
    pub fn current_state(&self) -> Result<JsValue, JsError> {
        to_js(&self.engine.current_state())
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.engine.legal_moves())
    }
}

// `None` must reach JS as `null`, not `undefined`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}
