use serde::{Deserialize, Serialize};

/// Target shell syntax family.
///
/// Controls the print/read/dispatch keywords and the banner escaping rule
/// used by [`crate::generate`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum ScriptDialect {
    #[default]
    Posix,
    PowerShell,
}

impl ScriptDialect {
    /// Both dialects, in selector display order.
    pub const ALL: [ScriptDialect; 2] = [ScriptDialect::Posix, ScriptDialect::PowerShell];

    /// Default file name offered when exporting a script in this dialect.
    pub fn file_name(&self) -> &'static str {
        match self {
            ScriptDialect::Posix => "script.sh",
            ScriptDialect::PowerShell => "script.ps1",
        }
    }

    /// Label shown in the dialect selector.
    pub fn label(&self) -> &'static str {
        match self {
            ScriptDialect::Posix => "Bash shell (.sh)",
            ScriptDialect::PowerShell => "PowerShell (.ps1)",
        }
    }

    /// Escapes one banner line for use inside a double-quoted print
    /// statement.
    ///
    /// POSIX backslash-escapes `"`, `` ` `` and `$`; PowerShell replaces
    /// each `"` with a backtick-quote. Menu labels, commands and body text
    /// are never escaped: they are operator input meant to stay executable.
    pub fn escape_banner_line(&self, line: &str) -> String {
        match self {
            ScriptDialect::Posix => {
                let mut escaped = String::with_capacity(line.len());
                for ch in line.chars() {
                    if matches!(ch, '"' | '`' | '$') {
                        escaped.push('\\');
                    }
                    escaped.push(ch);
                }
                escaped
            }
            ScriptDialect::PowerShell => line.replace('"', "`\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_file_names_follow_dialect() {
        assert_eq!(ScriptDialect::Posix.file_name(), "script.sh");
        assert_eq!(ScriptDialect::PowerShell.file_name(), "script.ps1");
    }

    #[test]
    fn posix_escapes_quotes_dollars_and_backticks() {
        let escaped = ScriptDialect::Posix.escape_banner_line(r#"He said "hi" $HOME `cmd`"#);
        assert_eq!(escaped, r#"He said \"hi\" \$HOME \`cmd\`"#);
    }

    #[test]
    fn powershell_escapes_quotes_only() {
        let escaped = ScriptDialect::PowerShell.escape_banner_line(r#"Say "hi" for $5"#);
        assert_eq!(escaped, "Say `\"hi`\" for $5");
    }

    #[test]
    fn plain_lines_pass_through_unchanged() {
        let art = r"|\_/|  (o o)";
        assert_eq!(ScriptDialect::Posix.escape_banner_line(art), art);
        assert_eq!(ScriptDialect::PowerShell.escape_banner_line(art), art);
    }
}
