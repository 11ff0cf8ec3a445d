pub mod moment;
pub mod timeline;

pub use moment::*;
pub use timeline::*;
