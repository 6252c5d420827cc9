#![cfg_attr(not(feature = "std"), no_std)]

//! Optional values that keep "not set" apart from "set to the default".
//!
//! Two containers are provided:
//! - [`Optional`] for element types that implement `PartialEq`, which adds the
//!   emptiness checks (`is_empty`, `set_not_empty`, `set_auto`).
//! - [`AnyOptional`] for any element type.
//!
//! Both are plain values. Every setter borrows the receiver and hands back a new
//! container, so fields are updated by reassignment:
//!
//! ```
//! use optional::Optional;
//!
//! #[derive(Default)]
//! struct Config {
//!     port: Optional<u16>,
//! }
//!
//! let mut cfg = Config::default();
//! assert!(!cfg.port.is_set());
//!
//! cfg.port = cfg.port.set(8080);
//! assert_eq!(cfg.port.value(), 8080);
//!
//! cfg.port = cfg.port.unset();
//! assert_eq!(cfg.port.value(), 0);
//! ```

pub mod any;
pub mod comparable;
pub mod error;

pub use any::AnyOptional;
pub use comparable::Optional;
pub use error::NotSetError;
