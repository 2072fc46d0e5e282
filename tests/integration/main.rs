//! HTTP integration tests driving the full router.

mod helpers;

mod cad_test;
mod catalog_test;
mod csv_test;
mod export_test;
mod geometry_test;
mod health_test;
mod quote_test;
