//! Masked entry for secret fields on an interactive terminal.
//!
//! While a secret is typed the terminal runs in raw mode, so keystrokes are
//! not echoed. Each accepted character is shown as `*`.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::warn;

/// How the terminal reads secret fields such as the password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecretEcho {
    /// Read secrets from the input like any other line.
    ///
    /// Suits piped or scripted input, where there is no echo to suppress.
    #[default]
    Visible,
    /// Read key events from the controlling terminal in raw mode and print
    /// `*` for each character.
    Hidden,
}

/// Effect of one key event on the secret being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyEffect {
    Typed,
    Erased,
    Ignored,
    Submitted,
    Cancelled,
}

/// Apply `key` to `secret`.
///
/// Only key presses count; repeats and releases are ignored. Ctrl+C and
/// Ctrl+D cancel the entry.
pub(super) fn apply_key(secret: &mut String, key: KeyEvent) -> KeyEffect {
    if key.kind != KeyEventKind::Press {
        return KeyEffect::Ignored;
    }
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => KeyEffect::Submitted,
        KeyCode::Char('c' | 'd') if control => KeyEffect::Cancelled,
        KeyCode::Backspace if secret.pop().is_some() => KeyEffect::Erased,
        KeyCode::Char(typed) if !control => {
            secret.push(typed);
            KeyEffect::Typed
        }
        _ => KeyEffect::Ignored,
    }
}

/// Read one secret from the controlling terminal, masking it on `output`.
///
/// Returns `None` when the entry is cancelled.
pub(super) fn read_hidden<W: Write>(output: &mut W) -> io::Result<Option<String>> {
    let _raw = RawMode::enable()?;
    let mut secret = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match apply_key(&mut secret, key) {
            KeyEffect::Typed => output.write_all(b"*")?,
            KeyEffect::Erased => output.write_all(b"\x08 \x08")?,
            KeyEffect::Ignored => continue,
            KeyEffect::Submitted => {
                output.write_all(b"\r\n")?;
                output.flush()?;
                return Ok(Some(secret));
            }
            KeyEffect::Cancelled => {
                output.write_all(b"\r\n")?;
                output.flush()?;
                return Ok(None);
            }
        }
        output.flush()?;
    }
}

/// Raw mode for as long as the guard lives.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "failed to leave raw mode");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn ctrl(typed: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..press(KeyCode::Char(typed))
        }
    }

    #[test]
    fn typing_and_erasing_edit_the_secret() {
        let mut secret = String::new();
        let keys = [
            press(KeyCode::Char('s')),
            press(KeyCode::Char('x')),
            press(KeyCode::Backspace),
            press(KeyCode::Char('e')),
            press(KeyCode::Enter),
        ];

        let effects: Vec<_> = keys
            .into_iter()
            .map(|key| apply_key(&mut secret, key))
            .collect();

        assert_eq!(
            effects,
            [
                KeyEffect::Typed,
                KeyEffect::Typed,
                KeyEffect::Erased,
                KeyEffect::Typed,
                KeyEffect::Submitted,
            ]
        );
        assert_eq!(secret, "se");
    }

    #[test]
    fn backspace_on_an_empty_secret_is_ignored() {
        let mut secret = String::new();

        assert_eq!(
            apply_key(&mut secret, press(KeyCode::Backspace)),
            KeyEffect::Ignored
        );
        assert!(secret.is_empty());
    }

    #[rstest]
    #[case(ctrl('c'))]
    #[case(ctrl('d'))]
    fn control_keys_cancel(#[case] key: KeyEvent) {
        let mut secret = "abc".to_owned();

        assert_eq!(apply_key(&mut secret, key), KeyEffect::Cancelled);
        assert_eq!(secret, "abc");
    }

    #[rstest]
    #[case(KeyEvent::new_with_kind(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release
    ))]
    #[case(ctrl('u'))]
    #[case(press(KeyCode::Left))]
    fn other_events_leave_the_secret_alone(#[case] key: KeyEvent) {
        let mut secret = "abc".to_owned();

        assert_eq!(apply_key(&mut secret, key), KeyEffect::Ignored);
        assert_eq!(secret, "abc");
    }

    #[test]
    fn shifted_characters_are_typed() {
        let mut secret = String::new();
        let key = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);

        assert_eq!(apply_key(&mut secret, key), KeyEffect::Typed);
        assert_eq!(secret, "S");
    }
}
