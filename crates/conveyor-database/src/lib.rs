//! # conveyor-database
//!
//! SQLite connection management, migrations, catalog repositories and the
//! idempotent NIKO catalogue seeder.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seeder;

pub use connection::DatabasePool;
