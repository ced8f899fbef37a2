//! Shared startup code for the `sprite_demo` and `pong` executables.

pub mod assets;
pub mod keys;

use anyhow::Context;
use assets::AssetPaths;
use backend::shaders::Shaders;
use backend::sprite::SpriteRenderer;
use backend::system::System;
use playfield::Camera;

pub const WINDOW_WIDTH: usize = 640;
pub const WINDOW_HEIGHT: usize = 480;

/// Background colour (r, g, b).
pub const CLEAR_COLOR: (f32, f32, f32) = (0.1922, 0.549, 0.9059);

/// Opens the window, compiles the textured sprite program and points the
/// camera at the play field.
pub fn start(title: &str, assets: &AssetPaths, camera: &Camera) -> anyhow::Result<(System, SpriteRenderer)> {
    let system = System::new(title, WINDOW_WIDTH, WINDOW_HEIGHT)
        .context("game initialization failure")?;

    let (vertex, fragment) = assets.shader_pair();
    let shaders = Shaders::from_files(&vertex, &fragment)
        .with_context(|| format!("loading shaders from {:?}", assets.root()))?;
    let renderer = SpriteRenderer::new(shaders).context("creating sprite renderer")?;
    renderer
        .set_camera(&camera.view, &camera.projection)
        .context("uploading camera matrices")?;

    Ok((system, renderer))
}

/// Logs a fatal error with its cause chain and exits with status 1.
pub fn exit_with(err: anyhow::Error) -> ! {
    log::error!("{err:#}");
    std::process::exit(1);
}
