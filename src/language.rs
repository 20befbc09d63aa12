use std::fmt;
use std::str::FromStr;

/// Script language handled by the tokenizer.
///
/// `Auto` is a request to detect the language; it is resolved to a
/// concrete variant before tokenization and is never produced by
/// [`classify`](crate::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptLanguage {
    /// Detect the language from the script body.
    Auto,
    /// GNU Bash.
    Bash,
    /// POSIX sh.
    Sh,
    /// PowerShell.
    PowerShell,
    /// Windows batch (`cmd.exe`).
    Batch,
}

impl ScriptLanguage {
    /// Canonical lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Bash => "bash",
            Self::Sh => "sh",
            Self::PowerShell => "powershell",
            Self::Batch => "batch",
        }
    }

    /// Whether this is a concrete language rather than `Auto`.
    #[must_use]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Self::Auto)
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error produced when parsing a language name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown script language: {name}")]
pub struct ParseLanguageError {
    pub name: String,
}

impl FromStr for ScriptLanguage {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "bash" => Ok(Self::Bash),
            "sh" => Ok(Self::Sh),
            "powershell" | "pwsh" | "ps1" => Ok(Self::PowerShell),
            "batch" | "bat" | "cmd" => Ok(Self::Batch),
            _ => Err(ParseLanguageError {
                name: s.to_string(),
            }),
        }
    }
}
