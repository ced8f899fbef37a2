//! Game logic shared by the sprite demo and the Pong clone.
//!
//! Nothing in here touches SDL or OpenGL: state is advanced from a
//! [`KeySource`] snapshot and a frame delta, and the backend only reads the
//! resulting positions to build model matrices.

pub mod camera;
pub mod collision;
pub mod config;
pub mod entity;
pub mod input;
pub mod pong;
pub mod sprite_demo;
pub mod time;

pub use camera::{model_matrix, Camera};
pub use collision::{collided, overlap_distances};
pub use config::{Config, Params};
pub use entity::Entity;
pub use input::{Key, KeySource};
pub use pong::{PongEvents, PongState};
pub use sprite_demo::SpriteDemoState;
pub use time::{FrameClock, FrameTime};
