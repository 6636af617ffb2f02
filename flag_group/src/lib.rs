//! Core crate for binding command-line options to configuration fields.
//!
//! A struct deriving [`Flags`] describes its fields to a [`Group`], which
//! turns every annotated field into an [`OptionInfo`] and indexes it by short
//! and long name. An argument parser looks descriptors up by name and calls
//! [`OptionInfo::set`] with the raw argument; the value is converted and
//! written straight into the struct.
//!
//! Tokenising the command line and rendering full help output are left to
//! the caller. The procedural macro lives in the companion
//! `flag_group_macros` crate.
//!
//! ```
//! use flag_group::{Flags, Group};
//!
//! #[derive(Debug, Default, Flags)]
//! struct Options {
//!     #[flag(short = "v", long = "verbose", description = "show more output")]
//!     pub verbose: Vec<bool>,
//!     #[flag(long = "jobs", optional, default = "4")]
//!     pub jobs: Option<usize>,
//!     #[flag(long = "include", short = "I", separator = ":")]
//!     pub include: Vec<String>,
//! }
//!
//! let mut options = Options::default();
//! let mut group = Group::new("Application Options", &mut options);
//! assert!(group.is_ok());
//! for info in group.options_mut() {
//!     match info.long_name.as_str() {
//!         "verbose" => info.set(None)?,
//!         "jobs" => info.set_or_default(None)?,
//!         "include" => info.set(Some("/usr/include:/opt/include"))?,
//!         _ => {}
//!     }
//! }
//! drop(group);
//! assert_eq!(options.verbose, [true]);
//! assert_eq!(options.jobs, Some(4));
//! assert_eq!(options.include, ["/usr/include", "/opt/include"]);
//! # Ok::<(), flag_group::ConvertError>(())
//! ```

extern crate self as flag_group;

pub use flag_group_macros::Flags;

mod bind;
mod convert;
mod error;
mod group;
mod info;
mod reflect;
mod tag;

pub use bind::{Action, ActionWith, Bind, Destination, Invoke, Store, ValueKind};
pub use convert::FlagValue;
pub use error::{ConvertError, GroupError};
pub use group::Group;
pub use info::OptionInfo;
pub use reflect::{FieldEntry, FieldVisibility, FlagContainer, Shape};
pub use tag::Tag;
