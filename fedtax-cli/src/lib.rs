//! Interactive console menu over one in-process tax session.
//!
//! The menu loop in [`menu`] is generic over its reader and writer so
//! tests can drive it with in-memory buffers; the binary wires it to
//! stdin and stdout.

pub mod display;
pub mod input;
pub mod menu;
