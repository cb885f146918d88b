//! Market data aggregate containing entities, services and value objects.

pub mod entities;
pub mod indicator_engine;
pub mod order_book;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use indicator_engine::*;
pub use order_book::*;
pub use value_objects::*;
