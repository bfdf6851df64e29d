mod button;
pub use button::*;
