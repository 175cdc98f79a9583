use std::collections::HashMap;

use crate::{PaddleCommand, PaddleMove, Side};

/// Maps key names reported by the display to paddle commands
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: HashMap<String, PaddleCommand>,
}

impl KeyBindings {
    /// No keys bound
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: impl Into<String>, command: PaddleCommand) {
        self.keys.insert(key.into(), command);
    }

    /// Command for a key, `None` for keys nobody bound
    pub fn resolve(&self, key: &str) -> Option<PaddleCommand> {
        self.keys.get(key).copied()
    }
}

impl Default for KeyBindings {
    /// Arrow keys drive the right paddle, w/s the left one
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind("Up", PaddleCommand::new(Side::Right, PaddleMove::Up));
        bindings.bind("Down", PaddleCommand::new(Side::Right, PaddleMove::Down));
        bindings.bind("w", PaddleCommand::new(Side::Left, PaddleMove::Up));
        bindings.bind("s", PaddleCommand::new(Side::Left, PaddleMove::Down));
        bindings
    }
}
