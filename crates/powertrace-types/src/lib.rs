pub mod boot;
pub mod event;
pub mod session;

pub use boot::*;
pub use event::*;
pub use session::*;
