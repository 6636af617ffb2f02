//! Re-exports the runtime under another name and points the derive at it.

mod vendored {
    pub use flag_group as flags;
}

use flag_group::{Flags, Group};

#[derive(Default, Flags)]
#[flag(crate = "vendored::flags")]
struct AliasedOptions {
    #[flag(long = "count", short = "c")]
    pub count: u32,
}

fn main() {
    let mut options = AliasedOptions::default();
    let mut group = Group::new("aliased", &mut options);
    if let Some(count) = group.by_short_mut('c') {
        assert!(count.set(Some("2")).is_ok());
    }
    drop(group);
    assert_eq!(options.count, 2);
}
