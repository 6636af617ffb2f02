//! Conversion of raw option arguments into typed destination values.
//!
//! [`FlagValue`] is the collaborator every stored destination forwards to.
//! It receives the raw string exactly as the parser extracted it together with
//! the field's [`Tag`], so per-field coercion rules travel with the field
//! rather than with the type.
//!
//! Recognised coercion keys:
//!
//! - `base`: radix for integer destinations, `2..=36`, default `10`.
//! - `separator`: splits the raw string before appending to `Vec<T>`
//!   destinations (see [`Store`](crate::Store)).

use std::ffi::OsString;
use std::path::PathBuf;

use crate::{ConvertError, Tag, ValueKind};

/// A type that can be parsed from a single raw option argument.
///
/// Implement this for custom types to make them bindable; `Option<T>` and
/// `Vec<T>` destinations pick the implementation up automatically.
///
/// # Examples
///
/// ```
/// use flag_group::{ConvertError, FlagValue, Tag};
///
/// #[derive(Debug, PartialEq)]
/// enum Level {
///     Quiet,
///     Loud,
/// }
///
/// impl FlagValue for Level {
///     fn from_flag(raw: &str, _tag: &Tag) -> Result<Self, ConvertError> {
///         match raw {
///             "quiet" => Ok(Self::Quiet),
///             "loud" => Ok(Self::Loud),
///             other => Err(ConvertError::Malformed {
///                 value: other.to_owned(),
///                 target: "Level",
///                 reason: "expected quiet or loud".to_owned(),
///             }),
///         }
///     }
/// }
///
/// assert_eq!(Level::from_flag("loud", &Tag::default()), Ok(Level::Loud));
/// ```
pub trait FlagValue: Sized {
    /// Kind reported for destinations holding this type directly.
    const KIND: ValueKind = ValueKind::Scalar;

    /// Parses `raw`, honouring any coercion keys in `tag`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] when `raw` is not a valid representation of
    /// `Self` or when a coercion annotation is unusable.
    fn from_flag(raw: &str, tag: &Tag) -> Result<Self, ConvertError>;
}

impl FlagValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    /// A missing argument means the flag was present, so `""` is `true`.
    fn from_flag(raw: &str, _tag: &Tag) -> Result<Self, ConvertError> {
        if raw.is_empty() {
            return Ok(true);
        }
        raw.parse()
            .map_err(|err| ConvertError::malformed::<Self>(raw, err))
    }
}

fn radix(tag: &Tag) -> Result<u32, ConvertError> {
    let value = tag.get("base");
    if value.is_empty() {
        return Ok(10);
    }
    value
        .parse::<u32>()
        .ok()
        .filter(|radix| (2..=36).contains(radix))
        .ok_or_else(|| ConvertError::InvalidTag {
            key: "base",
            value: value.to_owned(),
            reason: "radix must lie in 2..=36".to_owned(),
        })
}

macro_rules! integer_flag_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FlagValue for $ty {
            fn from_flag(raw: &str, tag: &Tag) -> Result<Self, ConvertError> {
                let radix = radix(tag)?;
                <$ty>::from_str_radix(raw, radix)
                    .map_err(|err| ConvertError::malformed::<$ty>(raw, err))
            }
        }
    )*};
}

integer_flag_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! parsed_flag_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FlagValue for $ty {
            fn from_flag(raw: &str, _tag: &Tag) -> Result<Self, ConvertError> {
                raw.parse::<$ty>()
                    .map_err(|err| ConvertError::malformed::<$ty>(raw, err))
            }
        }
    )*};
}

parsed_flag_value!(f32, f64);

impl FlagValue for char {
    fn from_flag(raw: &str, _tag: &Tag) -> Result<Self, ConvertError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(ConvertError::malformed::<Self>(
                raw,
                "expected exactly one character",
            )),
        }
    }
}

impl FlagValue for String {
    fn from_flag(raw: &str, _tag: &Tag) -> Result<Self, ConvertError> {
        Ok(raw.to_owned())
    }
}

impl FlagValue for PathBuf {
    fn from_flag(raw: &str, _tag: &Tag) -> Result<Self, ConvertError> {
        Ok(Self::from(raw))
    }
}

impl FlagValue for OsString {
    fn from_flag(raw: &str, _tag: &Tag) -> Result<Self, ConvertError> {
        Ok(Self::from(raw))
    }
}
