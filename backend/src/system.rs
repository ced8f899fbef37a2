use super::error::{BackendError, Result};
use super::glutils::{check_gl_err, log_opengl_info};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{KeyboardState, Keycode};
use sdl2::video::GLProfile;

/// Window, GL context and event pump of one program.
pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    pub event_pump: sdl2::EventPump,
    /// Keys that end the main loop when pressed.
    pub quit_keys: Vec<Keycode>,
}

impl System {
    pub fn new(title: &str, w: usize, h: usize) -> Result<System> {
        let sdl_context = sdl2::init().map_err(BackendError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video_subsystem
            .window(title, w as u32, h as u32)
            .position_centered()
            .opengl()
            .build()?;

        let gl_ctx = window.gl_create_context().map_err(BackendError::Sdl)?;
        window.gl_make_current(&gl_ctx).map_err(BackendError::Sdl)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        let event_pump = sdl_context.event_pump().map_err(BackendError::Sdl)?;

        unsafe {
            gl::Viewport(0, 0, w as i32, h as i32);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }
        check_gl_err()?;
        log_opengl_info();
        log::info!("opened {w}x{h} window \"{title}\"");

        Ok(System {
            w,
            h,
            sdl_context,
            window,
            video_subsystem,
            gl_ctx,
            event_pump,
            quit_keys: vec![Keycode::Q],
        })
    }

    /// Drains the event queue. Returns `false` once the window was closed or
    /// a quit key pressed.
    pub fn process_io_events(&mut self) -> bool {
        let mut running = true;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                } => running = false,
                Event::KeyDown {
                    keycode: Some(key), ..
                } if self.quit_keys.contains(&key) => running = false,
                _ => {}
            }
        }
        if !running {
            log::info!("quit requested");
        }
        running
    }

    /// Keys held right now, as of the last `process_io_events`.
    pub fn keyboard_state(&self) -> KeyboardState<'_> {
        self.event_pump.keyboard_state()
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
        ::std::thread::sleep(::std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    pub fn clear_screen(&mut self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}
