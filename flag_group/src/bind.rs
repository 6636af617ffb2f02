//! Capabilities that let a descriptor write into, or call, a struct field.
//!
//! A field becomes bindable by implementing [`Bind`], which hands out a
//! [`Destination`]: either a storage location ([`Store`]) or an invocable
//! target taking no argument or exactly one ([`Action`], [`ActionWith`]).
//! Destinations taking more parameters have no representation, so the derive
//! rejects them when the field's type does not implement [`Bind`].

use std::fmt;

use crate::{ConvertError, FlagValue, Tag};

/// Shape of the value behind a stored destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A single boolean.
    Bool,
    /// A sequence of booleans; each occurrence appends `true`.
    BoolSeq,
    /// A sequence of any other element type.
    Seq,
    /// Any other single value.
    Scalar,
}

impl ValueKind {
    /// Returns `true` for presence-only kinds.
    #[must_use]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool | Self::BoolSeq)
    }
}

/// Write access to a storage location.
pub trait Store {
    /// Reports the kind of value held.
    fn kind(&self) -> ValueKind;

    /// Converts `raw` and writes the result into the location.
    ///
    /// # Errors
    ///
    /// Returns the conversion error unchanged; the location is left untouched
    /// on failure.
    fn store(&mut self, raw: &str, tag: &Tag) -> Result<(), ConvertError>;
}

impl<T: FlagValue> Store for T {
    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn store(&mut self, raw: &str, tag: &Tag) -> Result<(), ConvertError> {
        *self = T::from_flag(raw, tag)?;
        Ok(())
    }
}

impl<T: FlagValue> Store for Option<T> {
    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn store(&mut self, raw: &str, tag: &Tag) -> Result<(), ConvertError> {
        *self = Some(T::from_flag(raw, tag)?);
        Ok(())
    }
}

/// Each call appends. A non-empty `separator` annotation splits `raw` first;
/// either every piece converts or nothing is appended.
impl<T: FlagValue> Store for Vec<T> {
    fn kind(&self) -> ValueKind {
        if T::KIND.is_bool() {
            ValueKind::BoolSeq
        } else {
            ValueKind::Seq
        }
    }

    fn store(&mut self, raw: &str, tag: &Tag) -> Result<(), ConvertError> {
        let separator = tag.get("separator");
        if separator.is_empty() {
            self.push(T::from_flag(raw, tag)?);
            return Ok(());
        }
        let parsed = raw
            .split(separator)
            .map(|piece| T::from_flag(piece, tag))
            .collect::<Result<Vec<_>, _>>()?;
        self.extend(parsed);
        Ok(())
    }
}

/// Call access to a single-parameter action.
pub trait Invoke {
    /// Coerces `raw` into the parameter type and calls the action.
    ///
    /// # Errors
    ///
    /// Returns the conversion error without calling the action.
    fn invoke(&mut self, raw: &str, tag: &Tag) -> Result<(), ConvertError>;
}

/// Binding to the storage or invocable target a descriptor controls.
pub enum Destination<'a> {
    /// A storage location.
    Stored(&'a mut dyn Store),
    /// An action taking no argument.
    Nullary(&'a mut dyn FnMut()),
    /// An action taking one argument coerced from the raw string.
    Unary(&'a mut dyn Invoke),
}

impl Destination<'_> {
    /// Kind of the stored value, or `None` for invocable targets.
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Stored(store) => Some(store.kind()),
            Self::Nullary(_) | Self::Unary(_) => None,
        }
    }
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stored(store) => f.debug_tuple("Stored").field(&store.kind()).finish(),
            Self::Nullary(_) => f.write_str("Nullary"),
            Self::Unary(_) => f.write_str("Unary"),
        }
    }
}

/// Types a struct field can have for the derive to bind it.
///
/// Implemented for every [`FlagValue`], for `Option<T>` and `Vec<T>` of them,
/// and for the action wrappers.
pub trait Bind {
    /// Borrows the field as a destination.
    fn destination(&mut self) -> Destination<'_>;
}

impl<T: FlagValue> Bind for T {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Stored(self)
    }
}

impl<T: FlagValue> Bind for Option<T> {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Stored(self)
    }
}

impl<T: FlagValue> Bind for Vec<T> {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Stored(self)
    }
}

/// Field type for options that run code instead of storing a value.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use flag_group::Action;
///
/// let hits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&hits);
/// let mut action = Action::new(move || counter.set(counter.get() + 1));
/// action.call();
/// assert_eq!(hits.get(), 1);
/// ```
pub struct Action(Box<dyn FnMut()>);

impl Action {
    /// Wraps a closure taking no argument.
    pub fn new(action: impl FnMut() + 'static) -> Self {
        Self(Box::new(action))
    }

    /// Runs the action.
    pub fn call(&mut self) {
        (self.0)();
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action")
    }
}

impl Bind for Action {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Nullary(&mut *self.0)
    }
}

/// Field type for options that run code with their argument.
///
/// The argument is converted with the parameter type's [`FlagValue`]
/// implementation before the closure runs.
pub struct ActionWith<T>(Box<dyn FnMut(T)>);

impl<T> ActionWith<T> {
    /// Wraps a closure taking one argument.
    pub fn new(action: impl FnMut(T) + 'static) -> Self {
        Self(Box::new(action))
    }

    /// Runs the action with an already converted argument.
    pub fn call(&mut self, value: T) {
        (self.0)(value);
    }
}

impl<T> Default for ActionWith<T> {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl<T> fmt::Debug for ActionWith<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionWith<{}>", std::any::type_name::<T>())
    }
}

impl<T: FlagValue> Invoke for ActionWith<T> {
    fn invoke(&mut self, raw: &str, tag: &Tag) -> Result<(), ConvertError> {
        let value = T::from_flag(raw, tag)?;
        self.call(value);
        Ok(())
    }
}

impl<T: FlagValue> Bind for ActionWith<T> {
    fn destination(&mut self) -> Destination<'_> {
        Destination::Unary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use rstest::rstest;

    const CSV: Tag = Tag::new(&[("separator", ",")]);

    #[rstest]
    fn scalar_store_overwrites() {
        let mut port = 80_u16;
        port.store("8080", &Tag::default()).expect("valid port");
        assert_eq!(port, 8080);
        assert_eq!(Store::kind(&port), ValueKind::Scalar);
    }

    #[rstest]
    fn failed_store_leaves_value_untouched() {
        let mut port = 80_u16;
        assert!(port.store("http", &Tag::default()).is_err());
        assert_eq!(port, 80);
    }

    #[rstest]
    fn option_store_wraps_in_some() {
        let mut name: Option<String> = None;
        name.store("ada", &Tag::default()).expect("string always converts");
        assert_eq!(name.as_deref(), Some("ada"));
    }

    #[rstest]
    fn vec_store_appends_and_splits() {
        let mut ids: Vec<u32> = vec![1];
        ids.store("2", &Tag::default()).expect("single element");
        ids.store("3,4", &CSV).expect("split elements");
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[rstest]
    fn vec_store_is_all_or_nothing() {
        let mut ids: Vec<u32> = Vec::new();
        assert!(ids.store("5,x", &CSV).is_err());
        assert!(ids.is_empty());
    }

    #[rstest]
    #[case(Vec::<bool>::new().destination().kind(), Some(ValueKind::BoolSeq))]
    #[case(Vec::<String>::new().destination().kind(), Some(ValueKind::Seq))]
    #[case(false.destination().kind(), Some(ValueKind::Bool))]
    #[case(Option::<bool>::None.destination().kind(), Some(ValueKind::Bool))]
    #[case(Action::default().destination().kind(), None)]
    fn destinations_report_kind(
        #[case] actual: Option<ValueKind>,
        #[case] expected: Option<ValueKind>,
    ) {
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn action_with_converts_before_calling() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut action = ActionWith::new(move |n: i32| sink.borrow_mut().push(n));
        action.invoke("12", &Tag::default()).expect("valid number");
        assert!(action.invoke("twelve", &Tag::default()).is_err());
        assert_eq!(*seen.borrow(), [12]);
    }
}
