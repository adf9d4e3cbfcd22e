pub mod accumulator;
pub mod components;
pub mod renderer;
pub mod renders;
pub mod traits;
pub mod visibility;

pub use accumulator::*;
pub use components::*;
pub use renderer::*;
pub use traits::*;
pub use visibility::*;
