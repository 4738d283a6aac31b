pub mod resources;
pub mod synth;
