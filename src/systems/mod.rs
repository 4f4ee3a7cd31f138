//! Systems module - all ECS systems for the launch viewer.

pub mod camera;
pub mod debug;
pub mod hud;
pub mod input;
pub mod scene;
pub mod tick;
