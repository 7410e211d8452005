pub mod bouquet;
pub mod constants;
pub mod trail;

pub use bouquet::*;
pub use constants::*;
pub use trail::*;
