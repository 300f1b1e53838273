// Light source and shadow: a draggable circle casts rays that stop at the
// screen edge or at a second circle bouncing up and down.

pub mod color;
pub mod consts;
pub mod draw;
pub mod error;
pub mod rays;
pub mod sim;
pub mod types;
