//! Detect a script's language and dump its token stream.

use scriptlex::{ScriptLanguage, classify, tokenize};

fn main() {
    let script = "\
#!/bin/bash
# nightly cleanup
for f in /tmp/*.log; do
\trm -f \"$f\"
done
";

    let language = classify(script);
    println!("Detected language: {language}");
    println!();

    for token in tokenize(script, ScriptLanguage::Auto) {
        println!("{:10?} {:?}", token.kind, token.value);
    }
}
