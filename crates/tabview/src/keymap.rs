#![forbid(unsafe_code)]

//! Key bindings for table navigation.
//!
//! A [`KeyBinding`] is a set of key presses written as short strings
//! (`"up"`, `"k"`, `"ctrl+u"`, `"pgdown"`, `" "`) plus the help text shown
//! for it. [`KeyMap`] groups one binding per table [`Action`].

use crate::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};

/// A single key press: a code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Parse a key description such as `"ctrl+d"`, `"pgup"`, `"G"` or `" "`.
    ///
    /// Returns `None` for names that do not describe a key.
    #[must_use]
    pub fn parse(spec: &str) -> Option<Self> {
        // A lone space is the spacebar; it must not be trimmed away.
        if spec == " " || spec.eq_ignore_ascii_case("space") {
            return Some(Self {
                code: KeyCode::Char(' '),
                modifiers: Modifiers::NONE,
            });
        }

        let mut modifiers = Modifiers::NONE;
        let mut rest = spec;
        loop {
            let Some((prefix, tail)) = rest.split_once('+') else {
                break;
            };
            // "+" on its own (or "ctrl++") is the plus key, not a separator.
            if tail.is_empty() {
                break;
            }
            let flag = match prefix.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => Modifiers::CTRL,
                "alt" | "meta" => Modifiers::ALT,
                "shift" => Modifiers::SHIFT,
                "super" | "cmd" => Modifiers::SUPER,
                _ => return None,
            };
            modifiers |= flag;
            rest = tail;
        }

        let code = match rest {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" | "pageup" => KeyCode::PageUp,
            "pgdown" | "pgdn" | "pagedown" => KeyCode::PageDown,
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Escape,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "insert" => KeyCode::Insert,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => {
                        let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
                        KeyCode::F(n)
                    }
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Whether `event` is this key press.
    ///
    /// Shift is not compared for character keys: terminals report `G` as
    /// `Char('G')` with Shift held, and the character already encodes it.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.code != event.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                event.modifiers.difference(Modifiers::SHIFT)
                    == self.modifiers.difference(Modifiers::SHIFT)
            }
            _ => event.modifiers == self.modifiers,
        }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    pub key: String,
    pub desc: String,
}

/// A set of key presses that trigger the same action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBinding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl KeyBinding {
    /// Create a binding from key descriptions. Unparseable entries are skipped.
    #[must_use]
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            keys: keys.into_iter().filter_map(KeyPress::parse).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Set the help text.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Key presses bound to this action.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    pub fn help_text(&self) -> &Help {
        &self.help
    }

    /// Enable or disable the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Whether `event` triggers this binding. Release events never match.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled()
            && event.kind != KeyEventKind::Release
            && self.keys.iter().any(|k| k.matches(event))
    }
}

/// A navigation command understood by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    LineUp,
    LineDown,
    LineLeft,
    LineRight,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    GotoTop,
    GotoBottom,
    ToggleCellSelect,
}

/// Key bindings for every table [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub line_up: KeyBinding,
    pub line_down: KeyBinding,
    pub line_left: KeyBinding,
    pub line_right: KeyBinding,
    pub page_up: KeyBinding,
    pub page_down: KeyBinding,
    pub half_page_up: KeyBinding,
    pub half_page_down: KeyBinding,
    pub goto_top: KeyBinding,
    pub goto_bottom: KeyBinding,
    pub toggle_cell_select: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            line_up: KeyBinding::new(["up", "k"]).help("↑/k", "up"),
            line_down: KeyBinding::new(["down", "j"]).help("↓/j", "down"),
            line_left: KeyBinding::new(["left", "h"]).help("←/h", "cell or column left"),
            line_right: KeyBinding::new(["right", "l"]).help("→/l", "cell or column right"),
            page_up: KeyBinding::new(["b", "pgup"]).help("b/pgup", "page up"),
            page_down: KeyBinding::new(["f", "pgdown", " "]).help("f/pgdn", "page down"),
            half_page_up: KeyBinding::new(["u", "ctrl+u"]).help("u", "½ page up"),
            half_page_down: KeyBinding::new(["d", "ctrl+d"]).help("d", "½ page down"),
            goto_top: KeyBinding::new(["home", "g"]).help("g/home", "go to start"),
            goto_bottom: KeyBinding::new(["end", "G"]).help("G/end", "go to end"),
            toggle_cell_select: KeyBinding::new(["t", "ctrl+t"]).help("t", "toggle cell select"),
        }
    }
}

impl KeyMap {
    fn bindings(&self) -> [(Action, &KeyBinding); 11] {
        [
            (Action::LineUp, &self.line_up),
            (Action::LineDown, &self.line_down),
            (Action::LineLeft, &self.line_left),
            (Action::LineRight, &self.line_right),
            (Action::PageUp, &self.page_up),
            (Action::PageDown, &self.page_down),
            (Action::HalfPageUp, &self.half_page_up),
            (Action::HalfPageDown, &self.half_page_down),
            (Action::GotoTop, &self.goto_top),
            (Action::GotoBottom, &self.goto_bottom),
            (Action::ToggleCellSelect, &self.toggle_cell_select),
        ]
    }

    /// Resolve a key event to an action. Bindings are checked in field order,
    /// so the first binding that claims a key wins.
    #[must_use]
    pub fn action_for(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings()
            .into_iter()
            .find(|(_, binding)| binding.matches(event))
            .map(|(action, _)| action)
    }

    /// Help entries for the most common bindings.
    #[must_use]
    pub fn short_help(&self) -> Vec<&Help> {
        enabled_help(&[&self.line_up, &self.line_down, &self.toggle_cell_select])
    }

    /// Help entries for every enabled binding, grouped in columns.
    #[must_use]
    pub fn full_help(&self) -> Vec<Vec<&Help>> {
        vec![
            enabled_help(&[
                &self.line_up,
                &self.line_down,
                &self.line_left,
                &self.line_right,
            ]),
            enabled_help(&[
                &self.page_up,
                &self.page_down,
                &self.half_page_up,
                &self.half_page_down,
            ]),
            enabled_help(&[&self.goto_top, &self.goto_bottom, &self.toggle_cell_select]),
        ]
    }
}

fn enabled_help<'a>(bindings: &[&'a KeyBinding]) -> Vec<&'a Help> {
    bindings
        .iter()
        .copied()
        .filter(|b| b.enabled())
        .map(KeyBinding::help_text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c))
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(KeyPress::parse("up").map(|k| k.code), Some(KeyCode::Up));
        assert_eq!(
            KeyPress::parse("pgdown").map(|k| k.code),
            Some(KeyCode::PageDown)
        );
        assert_eq!(KeyPress::parse("f5").map(|k| k.code), Some(KeyCode::F(5)));
        assert_eq!(KeyPress::parse("f").map(|k| k.code), Some(KeyCode::Char('f')));
    }

    #[test]
    fn parse_space_and_modifiers() {
        let space = KeyPress::parse(" ").expect("space");
        assert_eq!(space.code, KeyCode::Char(' '));

        let ctrl_u = KeyPress::parse("ctrl+u").expect("ctrl+u");
        assert_eq!(ctrl_u.code, KeyCode::Char('u'));
        assert_eq!(ctrl_u.modifiers, Modifiers::CTRL);

        let plus = KeyPress::parse("+").expect("plus");
        assert_eq!(plus.code, KeyCode::Char('+'));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(KeyPress::parse("hyper+x"), None);
        assert_eq!(KeyPress::parse("notakey"), None);
        assert_eq!(KeyPress::parse(""), None);
    }

    #[test]
    fn shifted_char_matches_uppercase_binding() {
        let binding = KeyBinding::new(["G"]);
        let event = key('G').with_modifiers(Modifiers::SHIFT);
        assert!(binding.matches(&event));
        assert!(!binding.matches(&key('g')));
    }

    #[test]
    fn ctrl_binding_requires_ctrl() {
        let binding = KeyBinding::new(["ctrl+d"]);
        assert!(!binding.matches(&key('d')));
        assert!(binding.matches(&key('d').with_modifiers(Modifiers::CTRL)));
    }

    #[test]
    fn release_never_matches() {
        let binding = KeyBinding::new(["j"]);
        assert!(!binding.matches(&key('j').with_kind(KeyEventKind::Release)));
        assert!(binding.matches(&key('j').with_kind(KeyEventKind::Repeat)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let mut binding = KeyBinding::new(["j"]);
        binding.set_enabled(false);
        assert!(!binding.enabled());
        assert!(!binding.matches(&key('j')));
    }

    #[test]
    fn default_keymap_actions() {
        let km = KeyMap::default();
        assert_eq!(km.action_for(&key('k')), Some(Action::LineUp));
        assert_eq!(
            km.action_for(&KeyEvent::new(KeyCode::Down)),
            Some(Action::LineDown)
        );
        assert_eq!(km.action_for(&key(' ')), Some(Action::PageDown));
        assert_eq!(
            km.action_for(&key('u').with_modifiers(Modifiers::CTRL)),
            Some(Action::HalfPageUp)
        );
        assert_eq!(km.action_for(&key('g')), Some(Action::GotoTop));
        assert_eq!(
            km.action_for(&key('G').with_modifiers(Modifiers::SHIFT)),
            Some(Action::GotoBottom)
        );
        assert_eq!(km.action_for(&key('t')), Some(Action::ToggleCellSelect));
        assert_eq!(km.action_for(&key('z')), None);
    }

    #[test]
    fn help_skips_disabled_bindings() {
        let mut km = KeyMap::default();
        assert_eq!(km.short_help().len(), 3);
        km.toggle_cell_select.set_enabled(false);
        let short = km.short_help();
        assert_eq!(short.len(), 2);
        assert_eq!(short[0].desc, "up");

        let full = km.full_help();
        assert_eq!(full.len(), 3);
        assert_eq!(full[0].len(), 4);
        assert_eq!(full[2].len(), 2);
    }
}
