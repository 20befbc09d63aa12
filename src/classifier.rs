//! Heuristic script language detection.
//!
//! A shebang line is authoritative; everything else is scored against
//! the indicator banks in [`crate::patterns`].

use crate::language::ScriptLanguage;
use crate::patterns::{BASH_INDICATORS, BATCH_INDICATORS, POWERSHELL_INDICATORS, SHEBANGS};

/// Detect the language of a script body.
///
/// Always returns a concrete language, never
/// [`ScriptLanguage::Auto`]. Ties and scripts with no recognizable
/// markers fall back to [`ScriptLanguage::Bash`]; scoring never
/// produces [`ScriptLanguage::Sh`] — only an `sh` shebang does.
#[must_use]
pub fn classify(input: &str) -> ScriptLanguage {
    if let Some(language) = shebang_language(input) {
        return language;
    }

    let powershell = score(&POWERSHELL_INDICATORS, input);
    let batch = score(&BATCH_INDICATORS, input);
    let bash = score(&BASH_INDICATORS, input);

    if powershell > batch && powershell > bash {
        ScriptLanguage::PowerShell
    } else if batch > powershell && batch > bash {
        ScriptLanguage::Batch
    } else {
        ScriptLanguage::Bash
    }
}

/// Match the trimmed lowercase start of the script against the known
/// shebang prefixes.
fn shebang_language(input: &str) -> Option<ScriptLanguage> {
    let first_line = input.trim_start().split('\n').next()?;
    let lowered = first_line.to_ascii_lowercase();
    SHEBANGS
        .iter()
        .find(|(prefix, _)| lowered.starts_with(prefix))
        .map(|&(_, language)| language)
}

fn score(indicators: &[regex::Regex], input: &str) -> usize {
    indicators.iter().filter(|re| re.is_match(input)).count()
}
