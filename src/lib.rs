//! # STT Interpreter
//!
//! Bit-level codec for Service/Status Tables (STT): fixed-format status
//! tables in which every byte carries four services, each as a pair of
//! status bits (allocated, activated).
//!
//! ## Table Format
//!
//! - Pairs are packed MSB-first: the first service of a byte sits in bits 7-6
//! - Within a pair, the high bit is *allocated* and the low bit *activated*
//! - A table holds at least 2 bytes (8 services)
//! - The first 8 services form the mandatory block; this is derived from
//!   position on decode and never stored in the bytes
//!
//! ## Design
//!
//! - **Stateless** - both directions are pure functions of their input
//! - **Safe Rust** - `#![forbid(unsafe_code)]`
//! - **Lossless** - `encode(decode(b)) == b` for every valid table
//!
//! ## API Overview
//!
//! - [`decode()`] - Bytes to [`ServiceInfo`] records
//! - [`encode()`] - Records back to bytes
//! - [`encode_pairs()`] - Bare [`BitPair`] payloads to bytes
//! - [`SttInterpreter`] - [`Interpreter`] implementation wrapping both
//!
//! ### Primitives
//!
//! - [`get_bit`] - Single-bit read
//! - [`split_byte`] / [`join_byte`] - One byte to four pairs and back
//!
//! ## Usage
//!
//! ```rust
//! use stt_interpreter::{decode, encode};
//!
//! // 11001001 11000000
//! let table = [0xC9, 0xC0];
//!
//! let services = decode(&table).unwrap();
//! assert_eq!(services.len(), 8);
//! assert!(services.iter().all(|s| s.is_mandatory()));
//! assert_eq!(services[2].to_bit_pair(), (true, false));
//!
//! assert_eq!(encode(&services).unwrap(), table);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod bits;
mod decode;
mod encode;
mod error;
mod interpreter;
pub mod layout;
mod service;

pub use bits::{get_bit, join_byte, split_byte, BitPair};
pub use decode::decode;
pub use encode::{encode, encode_pairs};
pub use error::SttError;
pub use interpreter::{Interpreter, SttInterpreter};
pub use service::{ServiceInfo, ServiceZone};
