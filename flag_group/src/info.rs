//! Per-field option descriptor.

use std::fmt;

use crate::{ConvertError, Destination, Tag};

/// One option: its names, help metadata and the field it controls.
///
/// Descriptors are produced by [`Group::new`](crate::Group::new). Either
/// `short_name` or `long_name` is always set on descriptors built that way.
#[derive(Debug)]
pub struct OptionInfo<'a> {
    /// Single-character name, activated with `-<short>`.
    pub short_name: Option<char>,
    /// Long name, activated with `--<long>`; empty when absent.
    pub long_name: String,
    /// Help text shown next to the option.
    pub description: String,
    /// Value used when an optional argument is omitted.
    ///
    /// [`set`](Self::set) never substitutes it;
    /// [`set_or_default`](Self::set_or_default) does.
    pub default: String,
    /// Whether the argument may be omitted. Meaningless for boolean options.
    pub optional_argument: bool,
    pub(crate) destination: Destination<'a>,
    pub(crate) tag: Tag,
}

impl<'a> OptionInfo<'a> {
    /// Creates a descriptor with no names or metadata bound to `destination`.
    #[must_use]
    pub const fn new(destination: Destination<'a>, tag: Tag) -> Self {
        Self {
            short_name: None,
            long_name: String::new(),
            description: String::new(),
            default: String::new(),
            optional_argument: false,
            destination,
            tag,
        }
    }

    /// Raw annotations of the underlying field.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Whether the option can take an argument at all.
    ///
    /// Boolean options are presence-only, as are actions without a parameter.
    #[must_use]
    pub fn requires_argument(&self) -> bool {
        match &self.destination {
            Destination::Stored(store) => !store.kind().is_bool(),
            Destination::Nullary(_) => false,
            Destination::Unary(_) => true,
        }
    }

    /// Whether the destination is a `bool` or a sequence of them.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.destination.kind().is_some_and(crate::ValueKind::is_bool)
    }

    /// Whether the destination is an action rather than a storage location.
    #[must_use]
    pub const fn is_invocable(&self) -> bool {
        matches!(
            self.destination,
            Destination::Nullary(_) | Destination::Unary(_)
        )
    }

    /// Runs an action destination.
    ///
    /// Nullary actions ignore `value`. Unary actions receive `value`, or `""`
    /// when absent, converted to their parameter type; a conversion failure
    /// skips the call and is logged rather than returned. Stored destinations
    /// are left alone.
    pub fn invoke(&mut self, value: Option<&str>) {
        match &mut self.destination {
            Destination::Nullary(action) => (**action)(),
            Destination::Unary(action) => {
                if let Err(err) = action.invoke(value.unwrap_or_default(), &self.tag) {
                    tracing::warn!(
                        long = %self.long_name,
                        short = ?self.short_name,
                        error = %err,
                        "option action skipped: argument failed to convert"
                    );
                }
            }
            Destination::Stored(_) => {}
        }
    }

    /// Writes `value` into the destination.
    ///
    /// Actions are invoked and never fail here. Stored destinations forward
    /// the raw string, or `""` when `value` is absent, to the conversion
    /// layer together with the field's annotations; for boolean destinations
    /// `""` means `true`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConvertError`] reported by the conversion layer.
    pub fn set(&mut self, value: Option<&str>) -> Result<(), ConvertError> {
        match &mut self.destination {
            Destination::Stored(store) => {
                return store.store(value.unwrap_or_default(), &self.tag);
            }
            Destination::Nullary(_) | Destination::Unary(_) => {}
        }
        self.invoke(value);
        Ok(())
    }

    /// Like [`set`](Self::set), but an absent value on an optional-argument
    /// option is replaced by [`default`](Self::default).
    ///
    /// # Errors
    ///
    /// Returns the [`ConvertError`] reported by the conversion layer.
    pub fn set_or_default(&mut self, value: Option<&str>) -> Result<(), ConvertError> {
        if value.is_none() && self.optional_argument && !self.is_bool() {
            let default = self.default.clone();
            return self.set(Some(&default));
        }
        self.set(value)
    }

    /// Renders `-s, --long (description)` with absent parts dropped.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OptionInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short_name, self.long_name.is_empty()) {
            (Some(short), false) => write!(f, "-{short}, --{}", self.long_name)?,
            (Some(short), true) => write!(f, "-{short}")?,
            (None, false) => write!(f, "--{}", self.long_name)?,
            (None, true) => {}
        }
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}
