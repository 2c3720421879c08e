// src/helpers.rs
use std::fmt;
use std::io::{IsTerminal, Write};
use rust_decimal::Decimal;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Output stream for uprintln!
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stream {
    Stdout,
    Stderr,
}

// user print
// uprintln!(opt, Stderr, Color::Red, None, ...) always prints, in red
// uprintln!(opt, Stderr, None, 2, ...) prints uncolored when verbose >= 2
#[macro_export]
macro_rules! uprintln {
    ($opt:expr, $stream:ident, None, None, $($arg:tt)*) => {
        $crate::helpers::uprint($opt.verbose, $crate::helpers::Stream::$stream, None, None, format_args!($($arg)*))
    };
    ($opt:expr, $stream:ident, None, $level:expr, $($arg:tt)*) => {
        $crate::helpers::uprint($opt.verbose, $crate::helpers::Stream::$stream, None, Some($level), format_args!($($arg)*))
    };
    ($opt:expr, $stream:ident, $color:expr, None, $($arg:tt)*) => {
        $crate::helpers::uprint($opt.verbose, $crate::helpers::Stream::$stream, Some($color), None, format_args!($($arg)*))
    };
    ($opt:expr, $stream:ident, $color:expr, $level:expr, $($arg:tt)*) => {
        $crate::helpers::uprint($opt.verbose, $crate::helpers::Stream::$stream, Some($color), Some($level), format_args!($($arg)*))
    };
}

// debug function name
#[macro_export]
macro_rules! function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }}
}

// a message without a level always prints, otherwise it needs enough -v
pub fn level_enabled(verbose: u8, level: Option<u8>) -> bool {
    match level {
        Some(level) => verbose >= level,
        None => true,
    }
}

// no escape codes into files or pipes
pub fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal { ColorChoice::Auto } else { ColorChoice::Never }
}

pub fn uprint(verbose: u8, stream: Stream, color: Option<Color>, level: Option<u8>, args: fmt::Arguments) {
    if !level_enabled(verbose, level) {
        return;
    }
    let mut out = match stream {
        Stream::Stdout => StandardStream::stdout(color_choice(std::io::stdout().is_terminal())),
        Stream::Stderr => StandardStream::stderr(color_choice(std::io::stderr().is_terminal())),
    };
    // diagnostics are best effort, a closed pipe shouldn't kill the run
    match color {
        Some(color) => {
            let _ = out.set_color(ColorSpec::new().set_fg(Some(color)));
            let _ = write!(out, "{}", args);
            let _ = out.reset();
        }
        None => {
            let _ = write!(out, "{}", args);
        }
    }
    let _ = writeln!(out);
}

// print a Decimal (in MHz) as a frequency
pub fn freq2str(freq: &Decimal) -> String {
    format!("{:>9} MHz", format!("{:.4}", freq))
}
