//! JSON-document storage backend: one file, the whole product list.

pub mod connection;
pub mod product_repository;
#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use product_repository::JsonProductRepository;
