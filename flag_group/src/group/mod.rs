//! Option groups: the scanned, indexed descriptors of one container.
//!
//! [`Group::new`] walks the container's fields once, in declaration order,
//! and keeps one [`OptionInfo`] per field that carries a name annotation.
//! Scanning never panics and never returns early with an error: the first
//! structural problem is stored in [`Group::error`] and whatever was built
//! before it stays available. This lets a caller build several groups and
//! check each one afterwards.

use std::collections::HashMap;

use crate::{
    FieldEntry, FieldVisibility, FlagContainer, GroupError, OptionInfo, Shape,
};

/// Named collection of options bound to one destination container.
///
/// The group holds the container's fields mutably borrowed until it is
/// dropped.
///
/// # Examples
///
/// ```
/// use flag_group::{Flags, Group};
///
/// #[derive(Default, Flags)]
/// struct Opts {
///     #[flag(short = "v", long = "verbose", description = "enable verbose output")]
///     pub verbose: bool,
///     #[flag(long = "name")]
///     pub name: String,
/// }
///
/// let mut opts = Opts::default();
/// let mut group = Group::new("Application Options", &mut opts);
/// assert!(group.error().is_none());
/// assert_eq!(
///     group.by_short('v').map(|info| info.describe()).as_deref(),
///     Some("-v, --verbose (enable verbose output)")
/// );
/// group
///     .by_long_mut("name")
///     .expect("registered above")
///     .set(Some("ada"))
///     .expect("strings always convert");
/// drop(group);
/// assert_eq!(opts.name, "ada");
/// ```
#[derive(Debug)]
pub struct Group<'a> {
    name: String,
    long_names: HashMap<String, usize>,
    short_names: HashMap<char, usize>,
    options: Vec<OptionInfo<'a>>,
    error: Option<GroupError>,
}

impl<'a> Group<'a> {
    /// Scans `container` and builds the group.
    ///
    /// Always returns a group; check [`error`](Self::error) before trusting
    /// its contents.
    pub fn new<C>(name: impl Into<String>, container: &'a mut C) -> Self
    where
        C: FlagContainer + ?Sized,
    {
        let mut group = Self {
            name: name.into(),
            long_names: HashMap::new(),
            short_names: HashMap::new(),
            options: Vec::new(),
            error: None,
        };
        let span = tracing::debug_span!("scan_group", group = %group.name);
        let _entered = span.enter();
        if let Err(err) = group.scan(container.shape()) {
            tracing::debug!(error = %err, "group scan stopped");
            group.error = Some(err);
        }
        group
    }

    fn scan(&mut self, shape: Shape<'a>) -> Result<(), GroupError> {
        let Shape::Struct(fields) = shape else {
            return Err(GroupError::NotAStructureReference);
        };
        for field in fields {
            let field_name = field.name.clone();
            if let Some(info) = build_option(field)? {
                self.register(&field_name, info);
            }
        }
        Ok(())
    }

    fn register(&mut self, field: &str, info: OptionInfo<'a>) {
        let index = self.options.len();
        if let Some(short) = info.short_name {
            if let Some(previous) = self.short_names.insert(short, index) {
                tracing::warn!(field, short = %short, previous, "short name registered twice; last wins");
            }
        }
        if !info.long_name.is_empty() {
            if let Some(previous) = self.long_names.insert(info.long_name.clone(), index) {
                tracing::warn!(field, long = %info.long_name, previous, "long name registered twice; last wins");
            }
        }
        self.options.push(info);
    }

    /// Label of the group, e.g. for a help section heading.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First structural error hit while scanning, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&GroupError> {
        self.error.as_ref()
    }

    /// Returns `true` when the scan completed without error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts the recorded error into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the [`GroupError`] recorded during the scan.
    pub fn into_result(self) -> Result<Self, GroupError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    /// Descriptors in field declaration order.
    #[must_use]
    pub fn options(&self) -> &[OptionInfo<'a>] {
        &self.options
    }

    /// Mutable descriptors in field declaration order.
    pub fn options_mut(&mut self) -> &mut [OptionInfo<'a>] {
        &mut self.options
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` when no field became an option.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Looks up the descriptor registered under `--<long>`.
    #[must_use]
    pub fn by_long(&self, long: &str) -> Option<&OptionInfo<'a>> {
        let index = *self.long_names.get(long)?;
        self.options.get(index)
    }

    /// Mutable variant of [`by_long`](Self::by_long).
    pub fn by_long_mut(&mut self, long: &str) -> Option<&mut OptionInfo<'a>> {
        let index = *self.long_names.get(long)?;
        self.options.get_mut(index)
    }

    /// Looks up the descriptor registered under `-<short>`.
    #[must_use]
    pub fn by_short(&self, short: char) -> Option<&OptionInfo<'a>> {
        let index = *self.short_names.get(&short)?;
        self.options.get(index)
    }

    /// Mutable variant of [`by_short`](Self::by_short).
    pub fn by_short_mut(&mut self, short: char) -> Option<&mut OptionInfo<'a>> {
        let index = *self.short_names.get(&short)?;
        self.options.get_mut(index)
    }

    /// Registered long names, in no particular order.
    pub fn long_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.long_names.keys().map(String::as_str)
    }

    /// Registered short names, in no particular order.
    pub fn short_names(&self) -> impl Iterator<Item = char> + '_ {
        self.short_names.keys().copied()
    }
}

/// Applies the field rules, returning `None` for fields that are not options.
fn build_option(field: FieldEntry<'_>) -> Result<Option<OptionInfo<'_>>, GroupError> {
    let FieldEntry {
        name,
        visibility,
        anonymous,
        tag,
        destination,
    } = field;

    if visibility != FieldVisibility::Public {
        tracing::debug!(field = %name, "skipping non-public field");
        return Ok(None);
    }
    if anonymous {
        tracing::debug!(field = %name, "skipping anonymous field");
        return Ok(None);
    }
    if tag.is_set("no-flag") {
        tracing::debug!(field = %name, "skipping field marked no-flag");
        return Ok(None);
    }

    let long = tag.get("long");
    let short = tag.get("short");
    if long.is_empty() && short.is_empty() {
        return Ok(None);
    }

    let mut chars = short.chars();
    let short_name = chars.next();
    if chars.next().is_some() {
        return Err(GroupError::ShortNameTooLong {
            field: name,
            short: short.to_owned(),
        });
    }

    let Some(destination) = destination else {
        tracing::debug!(field = %name, "skipping named field without a binding");
        return Ok(None);
    };

    let mut info = OptionInfo::new(destination, tag);
    info.short_name = short_name;
    long.clone_into(&mut info.long_name);
    tag.get("description").clone_into(&mut info.description);
    tag.get("default").clone_into(&mut info.default);
    info.optional_argument = tag.is_set("optional");
    tracing::debug!(field = %name, option = %info, "registered option");
    Ok(Some(info))
}
