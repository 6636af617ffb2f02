//! Behavioural tests for setting values and running actions through a group.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface binding mistakes"
)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use flag_group::{Action, ActionWith, ConvertError, Flags, Group, OptionInfo};
use rstest::{fixture, rstest};

#[derive(Default, Flags)]
struct ToolOptions {
    #[flag(short = "v", description = "repeat for more output")]
    pub verbosity: Vec<bool>,
    #[flag(long = "mode", base = 8)]
    pub mode: u32,
    #[flag(long = "path", short = "p", separator = ":")]
    pub paths: Vec<PathBuf>,
    #[flag(long = "version", description = "print the version")]
    pub version: Action,
    #[flag(long = "define", short = "D")]
    pub define: ActionWith<String>,
    #[flag(long = "retries")]
    pub retries: ActionWith<u8>,
}

#[derive(Default)]
struct Events {
    log: Rc<RefCell<Vec<String>>>,
}

impl Events {
    fn options(&self) -> ToolOptions {
        let version_log = Rc::clone(&self.log);
        let define_log = Rc::clone(&self.log);
        let retries_log = Rc::clone(&self.log);
        ToolOptions {
            version: Action::new(move || version_log.borrow_mut().push("version".to_owned())),
            define: ActionWith::new(move |value: String| {
                define_log.borrow_mut().push(format!("define {value}"));
            }),
            retries: ActionWith::new(move |value: u8| {
                retries_log.borrow_mut().push(format!("retries {value}"));
            }),
            ..ToolOptions::default()
        }
    }

    fn recorded(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

#[fixture]
fn events() -> Events {
    Events::default()
}

fn set_long(group: &mut Group<'_>, long: &str, value: Option<&str>) -> Result<(), ConvertError> {
    group
        .by_long_mut(long)
        .expect("option registered")
        .set(value)
}

#[rstest]
fn repeated_bool_flags_accumulate(events: Events) {
    let mut options = events.options();
    {
        let mut group = Group::new("tool", &mut options);
        let verbose = group.by_short_mut('v').expect("-v registered");
        assert!(verbose.is_bool());
        assert!(!verbose.requires_argument());
        for _ in 0..3 {
            verbose.set(None).expect("presence flag");
        }
    }
    assert_eq!(options.verbosity, [true, true, true]);
}

#[rstest]
fn coercion_annotations_reach_the_conversion(events: Events) {
    let mut options = events.options();
    {
        let mut group = Group::new("tool", &mut options);
        set_long(&mut group, "mode", Some("644")).expect("octal mode");
        set_long(&mut group, "path", Some("/bin:/usr/bin")).expect("split paths");
        set_long(&mut group, "path", Some("/opt/bin")).expect("single path");
        let err = set_long(&mut group, "mode", Some("9")).expect_err("9 is not octal");
        assert!(matches!(err, ConvertError::Malformed { target: "u32", .. }));
    }
    assert_eq!(options.mode, 0o644);
    assert_eq!(
        options.paths,
        [
            PathBuf::from("/bin"),
            PathBuf::from("/usr/bin"),
            PathBuf::from("/opt/bin"),
        ]
    );
}

#[rstest]
fn actions_run_in_call_order(events: Events) {
    let mut options = events.options();
    {
        let mut group = Group::new("tool", &mut options);
        let version = group.by_long("version").expect("--version registered");
        assert!(version.is_invocable());
        assert!(!version.requires_argument());
        assert_eq!(version.describe(), "--version (print the version)");

        set_long(&mut group, "version", None).expect("actions never fail");
        set_long(&mut group, "define", Some("KEY=1")).expect("actions never fail");
        group
            .by_short_mut('D')
            .expect("-D registered")
            .invoke(Some("OTHER"));
        set_long(&mut group, "version", Some("ignored")).expect("actions never fail");
    }
    assert_eq!(
        events.recorded(),
        ["version", "define KEY=1", "define OTHER", "version"]
    );
}

#[rstest]
fn unary_conversion_failures_skip_the_action(events: Events) {
    let mut options = events.options();
    {
        let mut group = Group::new("tool", &mut options);
        let retries = group.by_long_mut("retries").expect("--retries registered");
        assert!(retries.requires_argument());
        retries.set(Some("many")).expect("failure is swallowed");
        retries.set(None).expect("failure is swallowed");
        retries.set(Some("3")).expect("valid count");
    }
    assert_eq!(events.recorded(), ["retries 3"]);
}

#[rstest]
fn invoke_leaves_stored_destinations_alone(events: Events) {
    let mut options = events.options();
    {
        let mut group = Group::new("tool", &mut options);
        let mode: &mut OptionInfo<'_> = group.by_long_mut("mode").expect("--mode registered");
        assert!(!mode.is_invocable());
        mode.invoke(Some("777"));
    }
    assert_eq!(options.mode, 0);
    assert!(events.recorded().is_empty());
}
