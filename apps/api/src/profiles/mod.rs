// Profile Store: CRUD persistence for user profiles behind a pluggable
// repository trait. Partial-update and defaulting semantics live in `store`;
// the storage backends live in `repository`.

pub mod handlers;
pub mod repository;
pub mod store;
