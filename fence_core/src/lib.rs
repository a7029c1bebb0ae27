//! # fence_core - Fence Takeoff Engine
//!
//! `fence_core` turns a fence description (run length, height, gates,
//! corners, material system) into a bill of quantities, post-setting
//! depths, concrete, and a low/high cost estimate. Every input and output
//! is JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function from spec to takeoff
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Clamp, then reject**: bad numbers are clamped; only unusable inputs fail
//!
//! ## Quick Start
//!
//! ```rust
//! use fence_core::{compute_fence_project, ProjectSpec};
//! use fence_core::materials::MaterialKind;
//!
//! let spec = ProjectSpec::for_material(MaterialKind::Wood, 150.0, 6);
//! let takeoff = compute_fence_project(&spec).unwrap();
//!
//! assert_eq!(takeoff.topology.total_posts, 20);
//! let json = serde_json::to_string_pretty(&takeoff).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Input spec and saved project container
//! - [`calculations`] - Geometry, quantities, concrete and cost
//! - [`materials`] - The five material systems and their options
//! - [`pricing`] - Injectable price tables
//! - [`export`] - Plain-text rendering of a takeoff
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - `.fence` files with atomic saves and locking

pub mod calculations;
pub mod errors;
pub mod export;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod materials;
pub mod pricing;
pub mod project;
pub mod units;

pub use calculations::{compute_fence_project, compute_fence_project_with, FenceTakeoff};
pub use errors::{FenceError, FenceResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_project, save_project, FileLock};
pub use project::{FenceProject, ProjectMetadata, ProjectSpec};
