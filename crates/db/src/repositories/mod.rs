//! Repository structs providing CRUD operations per table.

pub mod client_repo;

pub use client_repo::ClientRepo;
