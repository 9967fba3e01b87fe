use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash (`-parallel 5`).
const LEGACY_LONG_FLAGS: [&str; 9] = [
    "parallel",
    "steps",
    "url",
    "output",
    "timeout",
    "connect-timeout",
    "config",
    "verbose",
    "no-color",
];

/// Rewrites single-dash long flags into their double-dash form so clap can
/// parse them. Everything after a bare `--` is left untouched.
pub fn normalize_legacy_flags<I>(raw_args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    raw_args
        .into_iter()
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            if arg.to_str().is_some_and(is_legacy_long_flag) {
                let mut rewritten = OsString::from("-");
                rewritten.push(&arg);
                rewritten
            } else {
                arg
            }
        })
        .collect()
}

fn is_legacy_long_flag(arg: &str) -> bool {
    let Some(body) = arg.strip_prefix('-') else {
        return false;
    };
    if body.starts_with('-') {
        return false;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    LEGACY_LONG_FLAGS.contains(&name)
}
