pub mod campaign;
pub mod pool;
pub mod swap;
pub mod vault;

pub use campaign::*;
pub use pool::*;
pub use swap::*;
pub use vault::*;
