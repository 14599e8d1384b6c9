//! Parametric **ratchet gear** meshes: a ring of sawtooth teeth joined to a
//! base ring and extruded to a width, with teeth pointing outward (a wheel)
//! or inward (a crown / pawl housing).
//!
//! The core ([`ratchet::build`]) is a pure function from [`RatchetParams`] to
//! vertex positions and quad / pentagon faces wound for outward normals.
//! [`adapter::AddRatchet`] is the host-facing operation that validates
//! parameters, places the gear and produces a named [`RatchetMesh`].
//!
//! ```rust
//! use ratchet_gear::{Internality, RatchetParams, ratchet};
//!
//! let params = RatchetParams::default().with_internality(Internality::Internal);
//! let gear = ratchet::build(&params);
//! assert_eq!(gear.vertex_count(), 140);
//! assert_eq!(gear.face_count(), 100);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//! - **hashmap**: enables use of hashbrown for `RatchetMesh::edge_report`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for `ratchet::build_many`

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod adapter;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod ratchet;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use adapter::{AddRatchet, RatchetMesh};
pub use errors::ValidationError;
pub use ratchet::{Internality, RatchetParams, RatchetTopology, RingSpan};
