mod builder;
mod color;
mod component;
mod config;
mod frame_loop;
mod render;
mod state;
mod surface;
#[cfg(test)]
mod testing;
mod types;

pub use component::CircuitBackground;
pub use config::CircuitConfig;
