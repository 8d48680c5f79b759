//! Mesh file I/O.
//!
//! Only the OBJ-like vertex/face format is consumed by the demo; see
//! [`obj`] for the exact subset and its recovery rules.
//!
//! # Usage
//!
//! ```no_run
//! use facet::io::obj;
//!
//! // Parse, normalize and derive normals in one call.
//! let mesh = obj::load("model.obj").unwrap();
//!
//! // Or run the stages separately.
//! let (mut raw, bounds) = obj::parse("model.obj").unwrap();
//! facet::algo::normalize::normalize(&mut raw, &bounds).unwrap();
//! facet::algo::normals::generate(&mut raw);
//! ```

pub mod obj;

pub use obj::load;
