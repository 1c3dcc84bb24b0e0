//! Integration tests for the lutconv crates.
//!
//! End-to-end pipelines that cross the core/io boundary: grids travel
//! through real .cube and PNG files on disk and come back.
