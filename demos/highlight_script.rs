//! Render scripts with ANSI colors, one per supported language.

use scriptlex::highlight_str;

fn main() {
    let samples = [
        ("bash", "files=$(ls /var/log | grep error)\necho ${files} > /dev/null\n"),
        (
            "powershell",
            "$svc = Get-Service | Where-Object {$_.Status -eq \"Running\"}\n",
        ),
        ("batch", "@echo off\nset DST=D:\\backup\nif not exist %DST% mkdir %DST%\n"),
    ];

    for (name, script) in samples {
        println!("--- {name} ---");
        print!("{}", highlight_str(script));
        println!();
    }
}
