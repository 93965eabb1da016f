//! SeaORM entities.

pub mod post;
