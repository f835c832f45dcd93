#![no_main]

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use minforth_fuzz::{check_session, render_line, ArbitraryWord};

#[derive(Arbitrary)]
struct FuzzInput {
    lines: Vec<Vec<ArbitraryWord>>,
}

fuzz_target!(|data: FuzzInput| {
    if data.lines.is_empty() { return }

    let lines: Vec<String> = data.lines.iter().map(|l| render_line(l)).collect();
    check_session(&lines);
});
