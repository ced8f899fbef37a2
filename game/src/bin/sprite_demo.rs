use anyhow::Context;
use backend::glutils::load_texture;
use backend::logging::{init_logging, LoggingConfig};
use game::assets::{self, AssetPaths};
use game::keys::SdlKeys;
use game::CLEAR_COLOR;
use playfield::{model_matrix, Camera, Config, FrameClock, SpriteDemoState};

fn run() -> anyhow::Result<()> {
    let config = Config::default();
    let assets = AssetPaths::from_env();
    let (mut system, renderer) = game::start("Hello, Textures!", &assets, &Camera::for_field(&config))?;

    let texture = load_texture(assets.resolve(assets::SPRITE)).context("loading sprite texture")?;

    let mut state = SpriteDemoState::new(&config);
    let mut clock = FrameClock::new();

    while system.process_io_events() {
        state.process_input(&SdlKeys(system.keyboard_state()));
        state.update(clock.tick().dt);

        let (r, g, b) = CLEAR_COLOR;
        system.clear_screen(r, g, b);
        renderer.draw(&texture, &model_matrix(&state.player))?;
        system.draw_to_screen();
    }

    log::info!(
        "sprite stopped at ({:.2}, {:.2})",
        state.player.position.x,
        state.player.position.y
    );
    Ok(())
}

fn main() {
    init_logging(LoggingConfig::default());
    if let Err(e) = run() {
        game::exit_with(e);
    }
}
