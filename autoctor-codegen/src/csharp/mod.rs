//! C# source rendering.

pub mod constructor;

pub use constructor::{ConstructorGenerator, POST_CONSTRUCT_HOOK};
