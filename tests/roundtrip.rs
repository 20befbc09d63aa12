//! Round-trip tests: concatenating token values must reproduce the
//! input exactly, for every language and for realistic scripts.

mod common;

use common::coverage;
use scriptlex::ScriptLanguage;

const ALL_LANGUAGES: [ScriptLanguage; 5] = [
    ScriptLanguage::Auto,
    ScriptLanguage::Bash,
    ScriptLanguage::Sh,
    ScriptLanguage::PowerShell,
    ScriptLanguage::Batch,
];

fn coverage_all(input: &str) {
    for lang in ALL_LANGUAGES {
        coverage(input, lang);
    }
}

// -----------------------------------------------------------
// Realistic scripts.
// -----------------------------------------------------------

#[test]
fn roundtrip_bash_deploy_script() {
    coverage_all(
        "#!/bin/bash\n\
         set -euo pipefail\n\
         \n\
         APP_DIR=/opt/app\n\
         RELEASE=$(date +%Y%m%d%H%M%S)\n\
         \n\
         deploy() {\n\
         \tsudo systemctl stop app\n\
         \tcp -r build \"${APP_DIR}/releases/$RELEASE\"\n\
         \tln -sfn \"${APP_DIR}/releases/$RELEASE\" \"${APP_DIR}/current\"\n\
         \tsudo systemctl start app\n\
         }\n\
         \n\
         deploy # ship it\n",
    );
}

#[test]
fn roundtrip_powershell_service_check() {
    coverage_all(
        "param(\n\
         \t[string]$Name = \"spooler\"\n\
         )\n\
         \n\
         $svc = Get-Service | Where-Object {$_.Name -eq $Name}\n\
         if ($svc.Status -ne \"Running\") {\n\
         \tStart-Service -Name $Name\n\
         \tWrite-Host \"restarted $Name\"\n\
         }\n",
    );
}

#[test]
fn roundtrip_batch_backup_script() {
    coverage_all(
        "@echo off\r\n\
         setlocal\r\n\
         :: nightly backup\r\n\
         set SRC=C:\\data\r\n\
         set DST=D:\\backup\r\n\
         if not exist %DST% mkdir %DST%\r\n\
         for %%f in (%SRC%\\*.db) do copy %%f %DST%\r\n\
         if errorlevel 1 goto :fail\r\n\
         exit /b 0\r\n\
         :fail\r\n\
         echo backup failed\r\n\
         exit /b 1\r\n",
    );
}

#[test]
fn roundtrip_sh_cron_wrapper() {
    coverage_all(
        "#!/bin/sh\n\
         # rotate logs older than a week\n\
         find /var/log/app -name '*.log' -mtime +7 | while read f; do\n\
         \tgzip \"$f\"\n\
         done\n",
    );
}

// -----------------------------------------------------------
// Hostile inputs.
// -----------------------------------------------------------

#[test]
fn roundtrip_unterminated_quotes() {
    coverage_all("echo \"unterminated");
    coverage_all("echo 'unterminated");
    coverage_all("\"");
    coverage_all("'");
}

#[test]
fn roundtrip_unclosed_expansions() {
    coverage_all("echo ${unclosed");
    coverage_all("echo %unclosed");
    coverage_all("echo $");
    coverage_all("echo %");
}

#[test]
fn roundtrip_operator_soup() {
    coverage_all("|&;<>=!+-*/%\\(){}[]@^");
    coverage_all(">>>|||&&&");
}

#[test]
fn roundtrip_mixed_line_endings() {
    coverage_all("a\r\nb\rc\nd");
}

#[test]
fn roundtrip_unicode_heavy() {
    coverage_all("écho \"日本語\" # комментарий ☂\n");
}

#[test]
fn roundtrip_null_and_control_bytes() {
    coverage_all("a\u{0}b\u{7}c\u{1b}[0m");
}

#[test]
fn roundtrip_empty_and_whitespace() {
    coverage_all("");
    coverage_all(" ");
    coverage_all("\n\n\n");
    coverage_all("\t \t");
}
