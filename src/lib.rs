//! `filterwand` is a pair of command-line image filters, not a library.
//! The crate interface exists for the binaries and the tests and is
//! subject to change at any time.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod arg_parsers;
pub mod args;
pub mod colorspace;
mod decode;
mod encode;
pub mod error;
pub mod help;
pub mod kernel;
pub mod operations;
pub mod plan;
