//! Ports - boundaries between the learning core and the host game.

pub mod view;

pub use view::GameView;
