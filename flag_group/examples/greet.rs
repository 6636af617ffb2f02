//! Minimal command-line front end built on a derived option group.
//!
//! Run with `cargo run -p flag_group --example greet -- -v --name Ada --times=2`.
#![expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "example program reports through the terminal"
)]

use std::cell::Cell;
use std::env;
use std::process::ExitCode;
use std::rc::Rc;

use flag_group::{Action, Flags, Group, OptionInfo};

#[derive(Default, Flags)]
struct GreetOptions {
    #[flag(short = "v", long = "verbose", description = "print more detail")]
    pub verbose: Vec<bool>,
    #[flag(short = "n", long = "name", description = "who to greet")]
    pub name: String,
    #[flag(short = "t", long = "times", optional, default = "1")]
    pub times: Option<u8>,
    #[flag(long = "help", description = "show this help")]
    pub help: Action,
}

fn apply(
    info: &mut OptionInfo<'_>,
    inline: Option<&str>,
    args: &mut impl Iterator<Item = String>,
) -> Result<(), String> {
    if inline.is_some() || !info.requires_argument() {
        return info.set(inline).map_err(|err| err.to_string());
    }
    if info.optional_argument {
        return info.set_or_default(None).map_err(|err| err.to_string());
    }
    let value = args
        .next()
        .ok_or_else(|| format!("{} expects a value", info.describe()))?;
    info.set(Some(&value)).map_err(|err| err.to_string())
}

fn lookup<'g, 'a>(group: &'g mut Group<'a>, arg: &str) -> Option<&'g mut OptionInfo<'a>> {
    if let Some(long) = arg.strip_prefix("--") {
        return group.by_long_mut(long);
    }
    let short = arg.strip_prefix('-')?.chars().next()?;
    group.by_short_mut(short)
}

fn parse(group: &mut Group<'_>, args: impl IntoIterator<Item = String>) -> Result<(), String> {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if arg.starts_with("--") => (flag, Some(value)),
            _ => (arg.as_str(), None),
        };
        let info = lookup(group, flag).ok_or_else(|| format!("unknown option '{flag}'"))?;
        apply(info, inline, &mut args)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let wants_help = Rc::new(Cell::new(false));
    let help_flag = Rc::clone(&wants_help);
    let mut options = GreetOptions {
        help: Action::new(move || help_flag.set(true)),
        ..GreetOptions::default()
    };

    let mut usage = Vec::new();
    {
        let mut group = Group::new("Greeting Options", &mut options);
        if let Some(err) = group.error() {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
        usage.extend(group.options().iter().map(OptionInfo::describe));
        if let Err(err) = parse(&mut group, env::args().skip(1)) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    if wants_help.get() {
        println!("Greeting Options:");
        for line in usage {
            println!("  {line}");
        }
        return ExitCode::SUCCESS;
    }

    let name = if options.name.is_empty() { "world" } else { &options.name };
    for _ in 0..options.times.unwrap_or(1) {
        println!("Hello, {name}!");
    }
    if !options.verbose.is_empty() {
        println!("(verbosity level {})", options.verbose.len());
    }
    ExitCode::SUCCESS
}
