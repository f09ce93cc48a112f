/// One canned command offered by the snippet picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub label: &'static str,
    pub command: &'static str,
}

/// The fixed snippet catalog. There is no plugin mechanism; new snippets
/// are added here.
pub const SNIPPETS: [Snippet; 4] = [
    Snippet {
        label: "Clear Screen",
        command: "clear",
    },
    Snippet {
        label: "List Directory",
        command: "ls -la",
    },
    Snippet {
        label: "Print Working Directory",
        command: "pwd",
    },
    Snippet {
        label: "Ping Google",
        command: "ping google.com",
    },
];
