pub mod font;
pub mod visual;

pub use visual::draw_network;
