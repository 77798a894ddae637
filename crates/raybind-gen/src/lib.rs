//! raybind — raylib → Zig marshalling binding generator.
//!
//! Parses exported C declarations out of raylib-style headers, filters them
//! against an allow-list, resolves every parameter and return type through
//! a fixed registry, and renders three parallel artifacts: a Zig binding
//! file, a C shim header, and a C shim implementation. Struct-valued
//! arguments and returns cross the ABI boundary by pointer while callers
//! keep ordinary value semantics.
//!
//! ## Modules
//!
//! - [`cdecl`] — declaration extraction and parameter classification
//! - [`registry`] — (type, pointer-ness) → Zig type and marshal strategy
//! - [`signature`] — per-declaration resolution and calling convention
//! - [`emit`] — the three renderers and their fixed preambles
//! - [`pipeline`] — whole-run batch generation
//! - [`manifest`] — `raybind.toml` parsing

pub mod cdecl;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod registry;
pub mod signature;

// Re-export key types for convenience
pub use error::GenError;
pub use manifest::BindManifest;
pub use pipeline::{generate, Generated};
pub use registry::{MarshalKind, TypeMapping};
pub use signature::MappedSignature;
