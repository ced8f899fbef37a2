use playfield::{Key, KeySource};
use sdl2::keyboard::{KeyboardState, Scancode};

/// Reads [`Key`]s out of SDL's keyboard state.
pub struct SdlKeys<'a>(pub KeyboardState<'a>);

pub fn scancode(key: Key) -> Scancode {
    match key {
        Key::Up => Scancode::Up,
        Key::Down => Scancode::Down,
        Key::Left => Scancode::Left,
        Key::Right => Scancode::Right,
        Key::W => Scancode::W,
        Key::S => Scancode::S,
        Key::T => Scancode::T,
    }
}

impl KeySource for SdlKeys<'_> {
    fn is_down(&self, key: Key) -> bool {
        self.0.is_scancode_pressed(scancode(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paddle_keys_map_to_distinct_scancodes() {
        let keys = [Key::Up, Key::Down, Key::Left, Key::Right, Key::W, Key::S, Key::T];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(scancode(*a), scancode(*b));
            }
        }
    }
}
