pub mod error;
pub mod optional;
pub mod combine;
pub mod dynamic;
pub mod lookup;


pub use error::*;
pub use optional::*;
pub use combine::*;
pub use dynamic::{AnyValue, DynFn, DynOptional};
