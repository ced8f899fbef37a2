use anyhow::Context;
use backend::glutils::load_texture;
use backend::logging::{init_logging, LoggingConfig};
use game::assets::{self, AssetPaths};
use game::keys::SdlKeys;
use game::CLEAR_COLOR;
use playfield::{model_matrix, Camera, Config, FrameClock, PongState};

fn run() -> anyhow::Result<()> {
    let config = Config::default();
    let assets = AssetPaths::from_env();
    let (mut system, renderer) = game::start("Hello, Collisions!", &assets, &Camera::for_field(&config))?;

    let left_texture =
        load_texture(assets.resolve(assets::LEFT_PADDLE)).context("loading left paddle texture")?;
    let right_texture =
        load_texture(assets.resolve(assets::RIGHT_PADDLE)).context("loading right paddle texture")?;
    let ball_texture = load_texture(assets.resolve(assets::BALL)).context("loading ball texture")?;

    let mut state = PongState::new(config);
    let mut clock = FrameClock::new();

    log::info!("W/S: left paddle, Up/Down: right paddle, T: cpu plays right, Q: quit");
    while system.process_io_events() {
        state.process_input(&SdlKeys(system.keyboard_state()));
        let events = state.update(clock.tick().dt);
        if events.ball_hit_paddle {
            log::debug!("paddle hit at y = {:.2}", state.ball.position.y);
        }

        let (r, g, b) = CLEAR_COLOR;
        system.clear_screen(r, g, b);
        renderer.draw(&left_texture, &model_matrix(&state.left))?;
        renderer.draw(&right_texture, &model_matrix(&state.right))?;
        renderer.draw(&ball_texture, &model_matrix(&state.ball))?;
        system.draw_to_screen();
    }

    Ok(())
}

fn main() {
    init_logging(LoggingConfig::default());
    if let Err(e) = run() {
        game::exit_with(e);
    }
}
