use std::fmt;

/// Every verb the harness exercises, in report order.
pub const CATALOG: [Command; 15] = [
    Command::Ping,
    Command::Echo,
    Command::Set,
    Command::Get,
    Command::Del,
    Command::Exists,
    Command::Keys,
    Command::Flush,
    Command::Save,
    Command::Load,
    Command::Info,
    Command::Config,
    Command::Select,
    Command::Auth,
    Command::Quit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Ping,
    Echo,
    Set,
    Get,
    Del,
    Exists,
    Keys,
    Flush,
    Save,
    Load,
    Info,
    Config,
    Select,
    Auth,
    Quit,
}

/// How a command's arguments are derived from the task index.
#[derive(Debug, Clone, Copy)]
enum ArgPolicy {
    /// Bare verb, no arguments.
    None,
    /// The task index, used as the key.
    Key,
    /// The task index as key plus a value string derived from it.
    KeyValue,
    /// A payload string derived from the task index.
    Payload,
    /// One constant token, the same for every task.
    Fixed(&'static str),
}

impl Command {
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Ping => "PING",
            Command::Echo => "ECHO",
            Command::Set => "SET",
            Command::Get => "GET",
            Command::Del => "DEL",
            Command::Exists => "EXISTS",
            Command::Keys => "KEYS",
            Command::Flush => "FLUSH",
            Command::Save => "SAVE",
            Command::Load => "LOAD",
            Command::Info => "INFO",
            Command::Config => "CONFIG",
            Command::Select => "SELECT",
            Command::Auth => "AUTH",
            Command::Quit => "QUIT",
        }
    }

    pub fn from_verb(verb: &str) -> Option<Command> {
        CATALOG.iter().copied().find(|c| c.verb() == verb)
    }

    fn arg_policy(&self) -> ArgPolicy {
        match self {
            Command::Echo => ArgPolicy::Payload,
            Command::Set => ArgPolicy::KeyValue,
            Command::Get | Command::Del | Command::Exists => ArgPolicy::Key,
            Command::Config => ArgPolicy::Fixed("GET"),
            Command::Select => ArgPolicy::Fixed("0"),
            Command::Auth => ArgPolicy::Fixed("password"),
            Command::Ping
            | Command::Keys
            | Command::Flush
            | Command::Save
            | Command::Load
            | Command::Info
            | Command::Quit => ArgPolicy::None,
        }
    }

    /// Builds the request line for task `index`. Pure and deterministic:
    /// the same command and index always produce identical bytes, so two
    /// runs issue comparable traffic.
    pub fn request_line(&self, index: usize) -> String {
        let verb = self.verb();
        match self.arg_policy() {
            ArgPolicy::None => format!("{verb}\r\n"),
            ArgPolicy::Key => format!("{verb} {index}\r\n"),
            ArgPolicy::KeyValue => format!("{verb} {index} value_{index}\r\n"),
            ArgPolicy::Payload => format!("{verb} hello_{index}\r\n"),
            ArgPolicy::Fixed(token) => format!("{verb} {token}\r\n"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
