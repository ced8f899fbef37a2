use std::collections::HashSet;

/// Keys sampled into movement. Quitting is handled by the window's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    T,
}

/// A snapshot of which keys are held this frame.
pub trait KeySource {
    fn is_down(&self, key: Key) -> bool;
}

impl KeySource for HashSet<Key> {
    fn is_down(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

impl KeySource for [Key] {
    fn is_down(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

impl<const N: usize> KeySource for [Key; N] {
    fn is_down(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

/// Maps a key pair onto one axis. `positive` wins when both are held.
pub fn axis<K: KeySource + ?Sized>(keys: &K, positive: Key, negative: Key) -> f32 {
    if keys.is_down(positive) {
        1.0
    } else if keys.is_down(negative) {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_prefers_positive_key() {
        assert_eq!(axis(&[Key::W, Key::S], Key::W, Key::S), 1.0);
        assert_eq!(axis(&[Key::S], Key::W, Key::S), -1.0);
        assert_eq!(axis(&[Key::T], Key::W, Key::S), 0.0);
    }

    #[test]
    fn hash_set_source() {
        let keys: HashSet<Key> = [Key::Left].into_iter().collect();
        assert!(keys.is_down(Key::Left));
        assert!(!keys.is_down(Key::Right));
    }
}
