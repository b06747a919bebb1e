//! Console command parsing.
//!
//! A line is split on single spaces into a command name followed by up to six
//! positional arguments. Missing arguments are empty strings; extra tokens are
//! ignored.

/// Maximum number of positional arguments a command can carry.
pub const MAX_ARGS: usize = 6;

pub const CMD_BASIC_FUNCTIONAL_TEST: &str = "a-bft";
pub const CMD_PUBLISH_EVENT: &str = "a-pubevent";
pub const CMD_PUBLISH_EVENT_MULTI: &str = "a-pubeventmulti";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: [String; MAX_ARGS],
}

impl ParsedCommand {
    /// Parse one non-empty console line.
    ///
    /// Splits on `' '` exactly, so consecutive spaces produce empty tokens.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split(' ');
        let name = tokens.next().unwrap_or_default().to_string();

        let mut args: [String; MAX_ARGS] = Default::default();
        for (slot, token) in args.iter_mut().zip(tokens) {
            *slot = token.to_string();
        }

        Self { name, args }
    }

    /// 1-based positional argument; out-of-range positions read as empty.
    pub fn arg(&self, position: usize) -> &str {
        position
            .checked_sub(1)
            .and_then(|i| self.args.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Parse the `nevents` argument of a multi-publish command.
///
/// Accepts any signed 32-bit integer; non-positive counts simply send nothing.
pub fn parse_event_count(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

/// Parse the `delaymsec` argument of a multi-publish command.
pub fn parse_delay_ms(text: &str) -> Option<u64> {
    text.trim().parse::<u64>().ok()
}

/// Zero-padded 9 digit sender sequence number shown next to each multi-publish event.
pub fn sequence_number(i: i32) -> String {
    format!("{i:09}")
}
