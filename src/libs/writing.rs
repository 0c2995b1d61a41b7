use std::io::{self, BufRead, Write};

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    pub const LIGHT_CYAN: &str = "\x1b[96m";
}

#[doc(hidden)]
pub fn stamp() -> String {
    chrono::Utc::now().format("%H:%M:%S%.3f").to_string()
}

/// Timestamped diagnostic line on stderr.
///
/// ```ignore
/// log!(cc::GREEN, "chain id: {}", id);
/// log!("plain");
/// ```
#[macro_export]
macro_rules! log {
    // default color: log!("price: {}", p);
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::libs::writing::cc::LIGHT_GRAY, $fmt $($arg)*)
    };

    // colored: log!(cc::GREEN, "swap: {} -> {}", a, b);
    ($color:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                "{}{} | {}{}{}{}\n",
                $crate::libs::writing::cc::LIGHT_GRAY,
                $crate::libs::writing::stamp(),
                $crate::libs::writing::cc::RESET,
                $color,
                format_args!($fmt $(, $arg)*),
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                "{}{}{}\n",
                $crate::libs::writing::cc::ORANGE,
                format_args!($($arg)*),
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};
}

/// Prompt/answer console over any reader and writer.  The binary wires
/// it to stdin/stdout; tests feed it a `Cursor` and a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn print(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    pub fn cprint(&mut self, text: &str, color: &str) {
        let _ = writeln!(self.out, "{}{}{}", color, text, cc::RESET);
    }

    /// Print `text` and read one line.  `None` on end of input.  A line
    /// that is not valid UTF-8 is consumed and comes back empty.
    pub fn cinput(&mut self, text: &str, color: &str) -> Option<String> {
        self.cprint(text, color);
        let _ = self.out.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Some(String::new()),
            Err(_) => None,
        }
    }

    pub fn err_print(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}{}{}", cc::RED, text, cc::RESET);
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.out)
    }
}
