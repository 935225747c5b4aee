//! Keyboard commands.
//!
//! Each recognized key maps to exactly one [`Command`]; lookup is an exact match on
//! the `KeyboardEvent.key` string, so `w` and `W` are different bindings.

use crate::state::{Preset, ViewportError, ViewportState};

pub const SMALL_STEP: f64 = 10.0;
pub const LARGE_STEP: f64 = 50.0;
pub const RESIZE_STEP: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Preset(Preset),
    Pan { dx: f64, dy: f64 },
    Resize { dw: f64, dh: f64 },
}

impl Command {
    /// Pure transition. The input is never modified; an error means the
    /// result would have broken a viewport invariant.
    pub fn apply(self, state: &ViewportState) -> Result<ViewportState, ViewportError> {
        let mut next = *state;
        match self {
            Command::Preset(p) => return Ok(p.state()),
            Command::Pan { dx, dy } => {
                next.set_center_x(state.center_x() + dx)?;
                next.set_center_y(state.center_y() + dy)?;
            }
            Command::Resize { dw, dh } => {
                next.set_width(state.width() + dw)?;
                next.set_height(state.height() + dh)?;
            }
        }
        Ok(next)
    }

    pub fn describe(self) -> String {
        match self {
            Command::Preset(Preset::Home) => "reset 300×200 @ 100ms".to_string(),
            Command::Preset(Preset::End) => "reset 1024×1024 @ 1000ms".to_string(),
            Command::Pan { dx, dy } if dx == 0.0 => {
                format!("{} {}", if dy < 0.0 { "up" } else { "down" }, dy.abs())
            }
            Command::Pan { dx, .. } => {
                format!("{} {}", if dx < 0.0 { "left" } else { "right" }, dx.abs())
            }
            Command::Resize { dw, dh } if dw == 0.0 => format!("height {:+}", dh),
            Command::Resize { dw, .. } => format!("width {:+}", dw),
        }
    }
}

const fn pan(dx: f64, dy: f64) -> Command {
    Command::Pan { dx, dy }
}

const fn resize(dw: f64, dh: f64) -> Command {
    Command::Resize { dw, dh }
}

pub const BINDINGS: &[(&str, Command)] = &[
    ("Home", Command::Preset(Preset::Home)),
    ("End", Command::Preset(Preset::End)),
    ("ArrowUp", pan(0.0, -SMALL_STEP)),
    ("ArrowDown", pan(0.0, SMALL_STEP)),
    ("ArrowLeft", pan(-SMALL_STEP, 0.0)),
    ("ArrowRight", pan(SMALL_STEP, 0.0)),
    ("w", pan(0.0, -SMALL_STEP)),
    ("s", pan(0.0, SMALL_STEP)),
    ("a", pan(-SMALL_STEP, 0.0)),
    ("d", pan(SMALL_STEP, 0.0)),
    ("W", pan(0.0, -LARGE_STEP)),
    ("S", pan(0.0, LARGE_STEP)),
    ("A", pan(-LARGE_STEP, 0.0)),
    ("D", pan(LARGE_STEP, 0.0)),
    ("q", resize(0.0, RESIZE_STEP)),
    ("Q", resize(0.0, -RESIZE_STEP)),
    ("e", resize(RESIZE_STEP, 0.0)),
    ("E", resize(-RESIZE_STEP, 0.0)),
];

pub fn lookup(key: &str) -> Option<Command> {
    BINDINGS.iter().find(|(k, _)| *k == key).map(|(_, c)| *c)
}

/// Keys sharing a command, in table order. Feeds the legend.
pub fn grouped_bindings() -> Vec<(Vec<&'static str>, Command)> {
    let mut groups: Vec<(Vec<&'static str>, Command)> = Vec::new();
    for &(key, cmd) in BINDINGS {
        match groups.iter_mut().find(|(_, c)| *c == cmd) {
            Some((keys, _)) => keys.push(key),
            None => groups.push((vec![key], cmd)),
        }
    }
    groups
}

/// The parts of a key event the interpreter looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub default_prevented: bool,
}

impl KeyInput {
    #[cfg(test)]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), default_prevented: false }
    }

    pub fn from_event(e: &web_sys::KeyboardEvent) -> Self {
        Self { key: e.key(), default_prevented: e.default_prevented() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    /// Not ours: the browser keeps its default handling.
    Ignored,
    Applied(Command),
    /// Recognized but the result would be invalid; state untouched.
    Rejected(Command, ViewportError),
}

impl KeyOutcome {
    pub fn suppress_default(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }

    pub fn should_refresh(&self) -> bool {
        matches!(self, KeyOutcome::Applied(_))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    pub fn handle(&self, state: &mut ViewportState, input: &KeyInput) -> KeyOutcome {
        if input.default_prevented {
            return KeyOutcome::Ignored;
        }
        let Some(cmd) = lookup(&input.key) else {
            return KeyOutcome::Ignored;
        };
        match cmd.apply(state) {
            Ok(next) => {
                *state = next;
                tracing::debug!(key = %input.key, ?cmd, "viewport updated");
                KeyOutcome::Applied(cmd)
            }
            Err(e) => {
                tracing::warn!(key = %input.key, error = %e, "command rejected");
                KeyOutcome::Rejected(cmd, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::state::ViewportField;

    fn press(state: &mut ViewportState, key: &str) -> KeyOutcome {
        CommandInterpreter.handle(state, &KeyInput::new(key))
    }

    fn snapshot(s: &ViewportState) -> [f64; 5] {
        ViewportField::ALL.map(|f| s.get(f))
    }

    #[test]
    fn scenario_presets() {
        let mut s = ViewportState::default();
        assert!(press(&mut s, "Home").should_refresh());
        assert_eq!(s, ViewportState::new(0.0, 0.0, 300.0, 200.0, 100).unwrap());
        assert!(press(&mut s, "End").should_refresh());
        assert_eq!(s, ViewportState::new(0.0, 0.0, 1024.0, 1024.0, 1000).unwrap());
    }

    #[test]
    fn presets_ignore_prior_state() {
        let mut s = ViewportState::new(-431.0, 97.5, 12.0, 9000.0, 7).unwrap();
        press(&mut s, "Home");
        assert_eq!(s, Preset::Home.state());
        press(&mut s, "Home");
        assert_eq!(s, Preset::Home.state());
        for k in ["d", "q", "E", "S"] {
            press(&mut s, k);
        }
        press(&mut s, "End");
        assert_eq!(s, Preset::End.state());
    }

    #[test]
    fn scenario_pan_right_then_large_step() {
        let mut s = ViewportState::default();
        press(&mut s, "ArrowRight");
        assert_eq!(s.center_x(), 10.0);
        press(&mut s, "D");
        assert_eq!(s.center_x(), 60.0);
        let req = crate::request::build_request(&s, &crate::request::SequenceNonce::default());
        assert_eq!(req.left, -90);
    }

    #[test]
    fn scenario_grow_height_twice() {
        let mut s = ViewportState::default();
        press(&mut s, "q");
        press(&mut s, "q");
        assert_eq!(s.height(), 220.0);
    }

    #[test]
    fn each_directional_binding_touches_only_its_field() {
        let cases: &[(&str, ViewportField, f64)] = &[
            ("ArrowUp", ViewportField::Y, -10.0),
            ("w", ViewportField::Y, -10.0),
            ("ArrowDown", ViewportField::Y, 10.0),
            ("s", ViewportField::Y, 10.0),
            ("ArrowLeft", ViewportField::X, -10.0),
            ("a", ViewportField::X, -10.0),
            ("ArrowRight", ViewportField::X, 10.0),
            ("d", ViewportField::X, 10.0),
            ("W", ViewportField::Y, -50.0),
            ("S", ViewportField::Y, 50.0),
            ("A", ViewportField::X, -50.0),
            ("D", ViewportField::X, 50.0),
            ("q", ViewportField::Height, 10.0),
            ("Q", ViewportField::Height, -10.0),
            ("e", ViewportField::Width, 10.0),
            ("E", ViewportField::Width, -10.0),
        ];
        for &(key, field, delta) in cases {
            let start = ViewportState::new(5.0, -5.0, 300.0, 200.0, 1000).unwrap();
            let mut s = start;
            let outcome = press(&mut s, key);
            assert!(outcome.should_refresh(), "{key}");
            assert!(outcome.suppress_default(), "{key}");
            for f in ViewportField::ALL {
                let expected = if f == field { start.get(f) + delta } else { start.get(f) };
                assert_eq!(s.get(f), expected, "key {key} field {f}");
            }
        }
    }

    #[test]
    fn sequence_accumulates_only_documented_deltas() {
        let mut s = ViewportState::default();
        let keys = ["a", "a", "W", "ArrowDown", "D", "d", "s", "ArrowLeft"];
        for k in keys {
            press(&mut s, k);
        }
        // x: -10 -10 +50 +10 -10 = 30 ; y: -50 +10 +10 = -30
        assert_eq!(s.center_x(), 30.0);
        assert_eq!(s.center_y(), -30.0);
        assert_eq!(s.width(), 300.0);
        assert_eq!(s.height(), 200.0);
        assert_eq!(s.interval_ms(), 1000);
    }

    const PAN_KEYS: [(&str, f64, f64); 12] = [
        ("ArrowUp", 0.0, -10.0),
        ("w", 0.0, -10.0),
        ("ArrowDown", 0.0, 10.0),
        ("s", 0.0, 10.0),
        ("ArrowLeft", -10.0, 0.0),
        ("a", -10.0, 0.0),
        ("ArrowRight", 10.0, 0.0),
        ("d", 10.0, 0.0),
        ("W", 0.0, -50.0),
        ("S", 0.0, 50.0),
        ("A", -50.0, 0.0),
        ("D", 50.0, 0.0),
    ];

    proptest! {
        #[test]
        fn any_pan_sequence_moves_only_the_center(keys in prop::collection::vec(0..PAN_KEYS.len(), 0..64)) {
            let mut s = ViewportState::default();
            let (mut x, mut y) = (0.0, 0.0);
            for i in keys {
                let (key, dx, dy) = PAN_KEYS[i];
                prop_assert!(press(&mut s, key).should_refresh());
                x += dx;
                y += dy;
            }
            prop_assert_eq!(s.center_x(), x);
            prop_assert_eq!(s.center_y(), y);
            prop_assert_eq!(s.width(), 300.0);
            prop_assert_eq!(s.height(), 200.0);
            prop_assert_eq!(s.interval_ms(), 1000);
        }
    }

    #[test]
    fn unrecognized_key_is_ignored() {
        let mut s = ViewportState::default();
        for key in ["x", "Enter", " ", "F5", "home", "ARROWUP", ""] {
            let before = snapshot(&s);
            let outcome = press(&mut s, key);
            assert_eq!(outcome, KeyOutcome::Ignored, "{key:?}");
            assert!(!outcome.suppress_default());
            assert!(!outcome.should_refresh());
            assert_eq!(snapshot(&s), before);
        }
    }

    #[test]
    fn already_prevented_event_is_ignored() {
        let mut s = ViewportState::default();
        let input = KeyInput { key: "d".into(), default_prevented: true };
        let outcome = CommandInterpreter.handle(&mut s, &input);
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(s, ViewportState::default());
    }

    #[test]
    fn shrinking_past_zero_is_rejected_without_refresh() {
        let mut s = ViewportState::new(0.0, 0.0, 10.0, 10.0, 100).unwrap();
        let outcome = press(&mut s, "E");
        assert!(matches!(
            outcome,
            KeyOutcome::Rejected(_, ViewportError::NonPositive { field: ViewportField::Width, .. })
        ));
        assert!(outcome.suppress_default());
        assert!(!outcome.should_refresh());
        assert_eq!(s.width(), 10.0);
        assert!(!press(&mut s, "Q").should_refresh());
        assert_eq!(s.height(), 10.0);
        assert!(press(&mut s, "e").should_refresh());
        assert_eq!(s.width(), 20.0);
    }

    #[test]
    fn binding_keys_are_unique() {
        for (i, (k, _)) in BINDINGS.iter().enumerate() {
            assert!(
                BINDINGS[i + 1..].iter().all(|(other, _)| other != k),
                "duplicate binding {k}"
            );
        }
        assert_eq!(BINDINGS.len(), 18);
    }

    #[test]
    fn transitions_do_not_modify_input() {
        let s = ViewportState::default();
        let next = lookup("D").unwrap().apply(&s).unwrap();
        assert_eq!(s, ViewportState::default());
        assert_eq!(next.center_x(), 50.0);
    }

    #[test]
    fn arrows_and_lowercase_letters_share_a_legend_row() {
        let groups = grouped_bindings();
        assert_eq!(groups.len(), 14);
        assert_eq!(groups[0].0, vec!["Home"]);
        assert!(groups.iter().any(|(keys, _)| keys == &vec!["ArrowUp", "w"]));
        assert!(groups.iter().any(|(keys, _)| keys == &vec!["W"]));
    }

    #[test]
    fn descriptions() {
        assert_eq!(lookup("W").unwrap().describe(), "up 50");
        assert_eq!(lookup("ArrowRight").unwrap().describe(), "right 10");
        assert_eq!(lookup("Q").unwrap().describe(), "height -10");
        assert_eq!(lookup("e").unwrap().describe(), "width +10");
    }
}
