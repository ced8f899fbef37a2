use std::path::{Path, PathBuf};

/// Environment variable overriding where `assets/` and `shaders/` live.
pub const ASSET_ROOT_ENV: &str = "GAME_ASSET_ROOT";

pub const VERTEX_SHADER: &str = "shaders/vertex_textured.glsl";
pub const FRAGMENT_SHADER: &str = "shaders/fragment_textured.glsl";

pub const SPRITE: &str = "assets/sprite.png";
pub const LEFT_PADDLE: &str = "assets/paddle_left.png";
pub const RIGHT_PADDLE: &str = "assets/paddle_right.png";
pub const BALL: &str = "assets/ball.png";

/// Resolves fixed relative asset paths under one root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn under(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$GAME_ASSET_ROOT` if set, otherwise the `game` crate directory.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(ASSET_ROOT_ENV).map(PathBuf::from))
    }

    fn from_override(root: Option<PathBuf>) -> Self {
        match root {
            Some(root) if !root.as_os_str().is_empty() => Self::under(root),
            _ => Self::under(env!("CARGO_MANIFEST_DIR")),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn shader_pair(&self) -> (PathBuf, PathBuf) {
        (self.resolve(VERTEX_SHADER), self.resolve(FRAGMENT_SHADER))
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::from_override(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_under_root() {
        let assets = AssetPaths::under("/tmp/game");
        assert_eq!(assets.resolve(BALL), PathBuf::from("/tmp/game/assets/ball.png"));
        let (v, f) = assets.shader_pair();
        assert_eq!(v, PathBuf::from("/tmp/game/shaders/vertex_textured.glsl"));
        assert_eq!(f, PathBuf::from("/tmp/game/shaders/fragment_textured.glsl"));
    }

    #[test]
    fn empty_override_falls_back_to_crate_dir() {
        let assets = AssetPaths::from_override(Some(PathBuf::new()));
        assert_eq!(assets, AssetPaths::default());
        assert_eq!(assets.root(), Path::new(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn shipped_assets_are_present() {
        let assets = AssetPaths::default();
        for relative in [VERTEX_SHADER, FRAGMENT_SHADER, SPRITE, LEFT_PADDLE, RIGHT_PADDLE, BALL] {
            assert!(assets.resolve(relative).is_file(), "missing {relative}");
        }
    }
}
