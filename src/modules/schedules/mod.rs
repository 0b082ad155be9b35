pub mod controller;
pub mod crud;
pub mod model;
pub mod remap;
pub mod schema;
pub mod seed;
