//! Classification behaviour and edge cases.

use scriptlex::{ScriptLanguage, classify};

// -----------------------------------------------------------
// Shebang detection: authoritative, bypasses scoring.
// -----------------------------------------------------------

#[test]
fn shebang_bash() {
    assert_eq!(classify("#!/bin/bash\necho hi"), ScriptLanguage::Bash);
}

#[test]
fn shebang_sh() {
    assert_eq!(classify("#!/bin/sh\necho hi"), ScriptLanguage::Sh);
}

#[test]
fn shebang_env_bash() {
    assert_eq!(
        classify("#!/usr/bin/env bash\necho hi"),
        ScriptLanguage::Bash
    );
}

#[test]
fn shebang_env_sh() {
    assert_eq!(classify("#!/usr/bin/env sh\necho hi"), ScriptLanguage::Sh);
}

#[test]
fn shebang_overrides_powershell_body() {
    let script = "#!/bin/bash\n$x = Get-Process | Where-Object {$_.Name -eq \"a\"}\n";
    assert_eq!(classify(script), ScriptLanguage::Bash);
}

#[test]
fn shebang_overrides_batch_body() {
    let script = "#!/bin/sh\n@echo off\nset X=1\necho %X%\n";
    assert_eq!(classify(script), ScriptLanguage::Sh);
}

#[test]
fn shebang_with_interpreter_flags() {
    assert_eq!(classify("#!/bin/bash -euo pipefail\n"), ScriptLanguage::Bash);
}

// -----------------------------------------------------------
// Pattern scoring.
// -----------------------------------------------------------

#[test]
fn powershell_pipeline_detected() {
    let script = r#"$x = Get-Process | Where-Object {$_.Name -eq "a"}"#;
    assert_eq!(classify(script), ScriptLanguage::PowerShell);
}

#[test]
fn powershell_param_block_detected() {
    let script = "param(\n    [string]$Name\n)\nWrite-Host $Name\n";
    assert_eq!(classify(script), ScriptLanguage::PowerShell);
}

#[test]
fn powershell_type_accelerator_detected() {
    let script = "$out = [System.IO.Path]::GetTempPath()\n";
    assert_eq!(classify(script), ScriptLanguage::PowerShell);
}

#[test]
fn batch_echo_off_detected() {
    assert_eq!(
        classify("@echo off\nset X=1\necho %X%"),
        ScriptLanguage::Batch
    );
}

#[test]
fn batch_goto_and_labels_detected() {
    let script = ":: cleanup helper\nif exist out.log del out.log\ngoto :done\n";
    assert_eq!(classify(script), ScriptLanguage::Batch);
}

#[test]
fn bash_substitution_and_pipes_detected() {
    let script = "files=$(ls /var/log | grep error)\necho ${files} > /dev/null\n";
    assert_eq!(classify(script), ScriptLanguage::Bash);
}

#[test]
fn bash_function_and_test_detected() {
    let script = "cleanup() {\n  [[ -d $1 ]] && sudo rm -rf $1\n}\n";
    assert_eq!(classify(script), ScriptLanguage::Bash);
}

// -----------------------------------------------------------
// Fallback behaviour.
// -----------------------------------------------------------

#[test]
fn plain_text_defaults_to_bash() {
    assert_eq!(
        classify("just plain text with no markers"),
        ScriptLanguage::Bash
    );
}

#[test]
fn empty_string_defaults_to_bash() {
    assert_eq!(classify(""), ScriptLanguage::Bash);
}

#[test]
fn whitespace_only_defaults_to_bash() {
    assert_eq!(classify("   \n\t\n  "), ScriptLanguage::Bash);
}

#[test]
fn tie_falls_back_to_bash() {
    // One batch marker and one bash marker: no strict winner.
    let script = "echo %X%\necho $(date)";
    assert_eq!(classify(script), ScriptLanguage::Bash);
}

#[test]
fn classify_never_returns_auto_or_sh_from_scoring() {
    let samples = [
        "",
        "hello world",
        "echo %X%",
        "$x = 1",
        "ls | grep foo",
        "@echo off",
        "goto :eof",
        "param($x)",
    ];
    for sample in samples {
        let detected = classify(sample);
        assert!(detected.is_concrete(), "Auto leaked for {sample:?}");
        assert_ne!(
            detected,
            ScriptLanguage::Sh,
            "Sh from scoring for {sample:?}"
        );
    }
}
