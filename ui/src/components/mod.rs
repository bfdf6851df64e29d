pub mod contact_form;
pub mod marquee;
pub mod reveal;
pub mod service_rows;
pub mod simple;
pub mod stat;
pub mod tilt;
pub mod value_tabs;

pub use contact_form::*;
pub use marquee::*;
pub use reveal::*;
pub use service_rows::*;
pub use simple::*;
pub use stat::*;
pub use tilt::*;
pub use value_tabs::*;
