pub mod drag;
pub mod pointer;
pub mod scroll;

pub use drag::{wire_bouquet_handlers, BouquetWiring};
pub use pointer::wire_pointer_handlers;
pub use scroll::wire_scroll_handlers;
