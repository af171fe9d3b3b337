use sokol::app as sapp;

const KEY_COUNT: usize = 512;

/// Keyboard state for the current frame. Filled from sokol events, queried by the game.
pub struct InputManager {
    keys_down: [bool; KEY_COUNT],
    keys_pressed: [bool; KEY_COUNT],
    previous_keys: [bool; KEY_COUNT],
}

/// Implementation for engine
impl InputManager {
    pub fn new() -> Self {
        Self {
            keys_down: [false; KEY_COUNT],
            keys_pressed: [false; KEY_COUNT],
            previous_keys: [false; KEY_COUNT],
        }
    }

    pub fn new_frame(&mut self) {
        self.previous_keys = self.keys_down;

        // Clear one-frame states
        self.keys_pressed.fill(false);
    }

    pub fn handle_key_down(&mut self, key: sapp::Keycode) {
        let key_idx = key as usize;
        if key_idx < KEY_COUNT {
            if !self.previous_keys[key_idx] && !self.keys_down[key_idx] {
                self.keys_pressed[key_idx] = true;
            }
            self.keys_down[key_idx] = true;
        }
    }

    pub fn handle_key_up(&mut self, key: sapp::Keycode) {
        let key_idx = key as usize;
        if key_idx < KEY_COUNT {
            self.keys_down[key_idx] = false;
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Public functions for Game interface
impl InputManager {
    pub fn is_key_pressed(&self, key: sapp::Keycode) -> bool {
        let key_idx = key as usize;
        key_idx < KEY_COUNT && self.keys_pressed[key_idx]
    }
}
