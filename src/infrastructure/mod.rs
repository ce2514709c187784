//! Infrastructure layer: concrete storage behind the domain traits.
//!
//! The only backend today is the in-memory registry in [`persistence`];
//! its lifetime is the process lifetime and nothing survives a restart.

pub mod persistence;
