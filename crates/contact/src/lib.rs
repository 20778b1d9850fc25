//! Contact messages: the submitted-form record, its validation rules and the
//! stores that persist it.

mod id;
mod input;
mod message;
mod store;

pub use id::*;
pub use input::*;
pub use message::*;
pub use store::*;
