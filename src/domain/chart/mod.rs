//! Chart aggregate: viewport math, pointer interaction and the chart entity.

pub mod entities;
pub mod interaction;
pub mod value_objects;
pub mod viewport;

pub use entities::*;
pub use interaction::*;
pub use value_objects::*;
pub use viewport::*;
