use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// Opens and closes the palette from anywhere.
    pub toggle: String,
    pub quit: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            toggle: "ctrl+k".to_string(),
            quit: "ctrl+c".to_string(),
        }
    }
}

/// A key combination, compared on code and modifiers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Chord {
    pub fn parse(text: &str) -> Result<Self> {
        let mut modifiers = KeyModifiers::empty();
        let parts: Vec<&str> = text.split('+').map(str::trim).collect();
        let (key, mods) = parts
            .split_last()
            .ok_or_else(|| anyhow!("empty key chord"))?;

        for m in mods {
            match m.to_lowercase().as_str() {
                // "mod" follows the shortcut notation used by command records
                "ctrl" | "control" | "mod" => modifiers.insert(KeyModifiers::CONTROL),
                "alt" | "meta" => modifiers.insert(KeyModifiers::ALT),
                "shift" => modifiers.insert(KeyModifiers::SHIFT),
                other => bail!("unknown modifier `{other}` in `{text}`"),
            }
        }

        let code = match key.to_lowercase().as_str() {
            "" => bail!("missing key in `{text}`"),
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "backspace" => KeyCode::Backspace,
            k if k.starts_with('f') && k.len() > 1 => {
                let n: u8 = k[1..]
                    .parse()
                    .map_err(|_| anyhow!("unknown key `{key}` in `{text}`"))?;
                KeyCode::F(n)
            }
            k => {
                let mut chars = k.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => bail!("unknown key `{key}` in `{text}`"),
                }
            }
        };

        Ok(Self { code, modifiers })
    }

    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let code = match event.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        // Shift is implied by an uppercase char, so only the chord's own modifiers count.
        let modifiers = if matches!(event.code, KeyCode::Char(_))
            && !self.modifiers.contains(KeyModifiers::SHIFT)
        {
            event.modifiers - KeyModifiers::SHIFT
        } else {
            event.modifiers
        };
        code == self.code && modifiers == self.modifiers
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub toggle: Chord,
    pub quit: Chord,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let defaults = KeyConfig::default();
        Self {
            toggle: parse_or_default(&config.toggle, &defaults.toggle),
            quit: parse_or_default(&config.quit, &defaults.quit),
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

fn parse_or_default(text: &str, fallback: &str) -> Chord {
    Chord::parse(text)
        .or_else(|e| {
            tracing::warn!(error = %e, fallback, "Invalid key chord, using default");
            Chord::parse(fallback)
        })
        .unwrap_or(Chord {
            code: KeyCode::Char('k'),
            modifiers: KeyModifiers::CONTROL,
        })
}
