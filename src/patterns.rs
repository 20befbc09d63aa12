//! Static pattern bank: language-distinguishing indicators, keyword
//! sets, and well-known command names used by the classifier and the
//! tokenizer's identifier classification.

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::ScriptLanguage;

/// Shebang prefixes, checked against the trimmed lowercase start of
/// the script. Bash entries come first so `env bash` is not shadowed
/// by the `env sh` prefix check.
pub const SHEBANGS: &[(&str, ScriptLanguage)] = &[
    ("#!/bin/bash", ScriptLanguage::Bash),
    ("#!/usr/bin/env bash", ScriptLanguage::Bash),
    ("#!/bin/sh", ScriptLanguage::Sh),
    ("#!/usr/bin/env sh", ScriptLanguage::Sh),
];

lazy_static! {
    /// PowerShell indicators: assignment to `$var`, `Verb-Noun`
    /// cmdlets, pipeline cmdlets, `[Type]::Member`, `param(` blocks,
    /// and dash-prefixed comparison operators.
    pub static ref POWERSHELL_INDICATORS: Vec<Regex> = vec![
        Regex::new(r"\$\w+\s*=").unwrap(),
        Regex::new(r"\b[A-Z][A-Za-z]*-[A-Z][A-Za-z0-9]*\b").unwrap(),
        Regex::new(
            r"\b(Where-Object|ForEach-Object|Select-Object|Sort-Object|Format-Table|Format-List|Out-File|Out-Null|Write-Host|Write-Output)\b",
        )
        .unwrap(),
        Regex::new(r"\[\w+(\.\w+)*\]::\w+").unwrap(),
        Regex::new(r"(?i)\bparam\s*\(").unwrap(),
        Regex::new(
            r"\s-(eq|ne|gt|lt|ge|le|like|notlike|match|notmatch|contains|notcontains|in|notin)\b",
        )
        .unwrap(),
    ];

    /// Batch indicators: `@echo off`, `%VAR%` expansion, `goto`
    /// labels, `if exist`, `::` comments, `set NAME=`, and the
    /// `setlocal`/`errorlevel` machinery.
    pub static ref BATCH_INDICATORS: Vec<Regex> = vec![
        Regex::new(r"(?i)@echo\s+(off|on)\b").unwrap(),
        Regex::new(r"%\w+%").unwrap(),
        Regex::new(r"(?i)\bgoto\s+:?\w+").unwrap(),
        Regex::new(r"(?i)\bif\s+(not\s+)?exist\b").unwrap(),
        Regex::new(r"(?m)^\s*::").unwrap(),
        Regex::new(r"(?i)\bset\s+\w+=").unwrap(),
        Regex::new(r"(?i)\b(setlocal|endlocal)\b").unwrap(),
        Regex::new(r"(?i)\berrorlevel\b").unwrap(),
    ];

    /// Bash/POSIX shell indicators: command substitution, parameter
    /// expansion, `[[ ]]` tests, function definitions, common Unix
    /// commands in pipe position, and assorted Unix-isms.
    pub static ref BASH_INDICATORS: Vec<Regex> = vec![
        Regex::new(r"\$\([^)]*\)").unwrap(),
        Regex::new(r"\$\{[^}]*\}").unwrap(),
        Regex::new(r"\[\[.*\]\]").unwrap(),
        Regex::new(r"\b\w+\s*\(\)\s*\{").unwrap(),
        Regex::new(
            r"\|\s*(grep|awk|sed|sort|uniq|head|tail|wc|xargs|tee|cut|tr)\b",
        )
        .unwrap(),
        Regex::new(r"\bsudo\s+\w+").unwrap(),
        Regex::new(r"\b(chmod|chown)\s").unwrap(),
        Regex::new(r"/dev/null").unwrap(),
    ];

    /// Whole-word `Verb-Noun` cmdlet shape for identifier
    /// classification under PowerShell.
    pub static ref CMDLET_SHAPE: Regex =
        Regex::new(r"^[A-Z][A-Za-z]*(-[A-Z][A-Za-z0-9]*)+$").unwrap();
}

/// Bash/sh reserved words and shell builtins that read as keywords.
const BASH_KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done",
    "case", "esac", "in", "function", "select", "time", "return", "break",
    "continue", "exit", "local", "export", "readonly", "declare", "unset",
    "shift", "trap", "eval", "exec", "source", "set", "wait",
];

/// POSIX utilities and everyday commands; rendered as function names.
const BASH_COMMANDS: &[&str] = &[
    "ls", "cat", "grep", "awk", "sed", "echo", "printf", "cd", "pwd", "mkdir",
    "rmdir", "rm", "cp", "mv", "ln", "touch", "chmod", "chown", "sudo",
    "curl", "wget", "tar", "gzip", "find", "kill", "ps", "df", "du", "mount",
    "ssh", "scp", "rsync", "head", "tail", "sort", "uniq", "wc", "xargs",
    "tee", "cut", "tr", "date", "sleep", "which", "env", "dirname",
    "basename", "read", "test", "git", "docker", "systemctl",
];

const POWERSHELL_KEYWORDS: &[&str] = &[
    "begin", "break", "catch", "class", "continue", "do", "dynamicparam",
    "else", "elseif", "end", "enum", "exit", "filter", "finally", "for",
    "foreach", "from", "function", "hidden", "if", "in", "param", "process",
    "return", "static", "switch", "throw", "trap", "try", "until", "using",
    "while",
];

const BATCH_KEYWORDS: &[&str] = &[
    "echo", "set", "if", "else", "exist", "defined", "errorlevel", "goto",
    "call", "exit", "for", "in", "do", "not", "equ", "neq", "lss", "leq",
    "gtr", "geq", "setlocal", "endlocal", "shift", "pause", "choice", "cls",
    "title",
];

const BATCH_COMMANDS: &[&str] = &[
    "copy", "del", "dir", "type", "md", "mkdir", "rd", "move", "ren",
    "xcopy", "robocopy", "ping", "ipconfig", "netstat", "tasklist",
    "taskkill", "findstr", "find", "sc", "reg", "net", "wmic", "timeout",
    "attrib", "icacls", "powershell",
];

/// Whether `word` is a keyword of `language`.
///
/// Bash and sh are case-sensitive; PowerShell and batch are not.
#[must_use]
pub fn is_keyword(language: ScriptLanguage, word: &str) -> bool {
    match language {
        ScriptLanguage::Auto | ScriptLanguage::Bash | ScriptLanguage::Sh => {
            BASH_KEYWORDS.contains(&word)
        }
        ScriptLanguage::PowerShell => {
            let lower = word.to_ascii_lowercase();
            POWERSHELL_KEYWORDS.contains(&lower.as_str())
        }
        ScriptLanguage::Batch => {
            let lower = word.to_ascii_lowercase();
            BATCH_KEYWORDS.contains(&lower.as_str())
        }
    }
}

/// Whether `word` is a well-known command name for `language`:
/// a curated POSIX utility for bash/sh, the `Verb-Noun` cmdlet shape
/// for PowerShell, or a standard external command for batch.
#[must_use]
pub fn is_well_known_command(language: ScriptLanguage, word: &str) -> bool {
    match language {
        ScriptLanguage::Auto | ScriptLanguage::Bash | ScriptLanguage::Sh => {
            BASH_COMMANDS.contains(&word)
        }
        ScriptLanguage::PowerShell => CMDLET_SHAPE.is_match(word),
        ScriptLanguage::Batch => {
            let lower = word.to_ascii_lowercase();
            BATCH_COMMANDS.contains(&lower.as_str())
        }
    }
}
