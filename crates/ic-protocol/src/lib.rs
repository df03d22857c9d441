pub mod builtin;
pub mod entity;
pub mod intent;
pub mod paths;
pub mod session;

pub use builtin::*;
pub use entity::*;
pub use intent::*;
pub use session::*;
