use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::SceneCommand;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable character bindings mapping commands to typed characters.
///
/// Bindings are case-sensitive: `m` and `M` are different keys.
pub struct KeybindingOptions {
    /// Maps command → key string (e.g. `AdvanceMaterial` → `"m"`).
    pub bindings: HashMap<SceneCommand, String>,
    /// Reverse lookup cache (character → command). Rebuilt on load.
    #[serde(skip)]
    char_to_command: HashMap<char, SceneCommand>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (SceneCommand::AdvanceMaterial, "m".into()),
            (SceneCommand::RetreatMaterial, "M".into()),
            (SceneCommand::AdvanceShader, "s".into()),
            (SceneCommand::RetreatShader, "S".into()),
            (SceneCommand::AdvanceLight, "l".into()),
            (SceneCommand::RetreatLight, "L".into()),
            (SceneCommand::NudgeLightLeft, "x".into()),
            (SceneCommand::NudgeLightRight, "X".into()),
            (SceneCommand::NudgeLightDown, "y".into()),
            (SceneCommand::NudgeLightUp, "Y".into()),
            (SceneCommand::IncreaseToonLevels, "j".into()),
            (SceneCommand::DecreaseToonLevels, "J".into()),
            (SceneCommand::ToggleAnimation, " ".into()),
            (SceneCommand::ToggleCulling, "c".into()),
            (SceneCommand::ToggleWireframe, "z".into()),
        ]);

        let mut opts = Self {
            bindings,
            char_to_command: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (character → command).
    ///
    /// Only single-character key strings are bindable; anything else is
    /// skipped with a warning.
    pub fn rebuild_reverse_map(&mut self) {
        self.char_to_command.clear();
        for (command, key) in &self.bindings {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    let _ = self.char_to_command.insert(c, *command);
                }
                _ => log::warn!(
                    "ignoring binding {key:?} for {command:?}: not a single character"
                ),
            }
        }
    }

    /// Look up the command bound to a character.
    #[must_use]
    pub fn lookup(&self, key: char) -> Option<SceneCommand> {
        self.char_to_command.get(&key).copied()
    }
}
