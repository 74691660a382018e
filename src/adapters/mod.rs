//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (file I/O). Each sub-module groups adapters
//! by infrastructure concern.
//!
//! Adapter categories:
//! - `persistence`: JSONL odds files and the append-only bet log

pub mod persistence;
