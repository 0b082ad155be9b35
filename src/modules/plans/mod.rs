pub mod controller;
pub mod crud;
pub mod model;
pub mod schema;
pub mod seed;
