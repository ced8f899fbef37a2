use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("error while building OpenGL window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    #[error("error reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} shader compilation error: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("program link error: {0}")]
    ProgramLink(String),

    #[error("program({program}): '{name}' is not an active {kind} in program")]
    MissingLocation {
        program: u32,
        name: String,
        kind: &'static str,
    },

    #[error("loading image {path:?} error: {reason}")]
    Image { path: PathBuf, reason: String },

    #[error("OpenGL error: 0x{0:04x}")]
    Gl(u32),
}

pub type Result<T> = std::result::Result<T, BackendError>;
