use arbitrary::Arbitrary;
use minforth::config::Config;
use minforth::console::{Line, Transcript};
use minforth::interpreter::Interpreter;

/// Words the fuzzer builds programs from. A few user word names are included so that
/// definitions, redefinitions and (mutual) recursion show up often.
pub const VOCABULARY: &[&str] = &[
    "+", "-", "*", "/", ".", "dup", "swap", ":", ";",
    "a", "b", "c",
    "0", "1", "-1", "7", "9223372036854775807", "-9223372036854775808",
];

pub struct ArbitraryWord(pub &'static str);

impl<'a> Arbitrary<'a> for ArbitraryWord {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let idx = u.choose_index(VOCABULARY.len())?;
        Ok(ArbitraryWord(VOCABULARY[idx]))
    }
}

pub fn render_line(words: &[ArbitraryWord]) -> String {
    words.iter().map(|w| w.0).collect::<Vec<_>>().join(" ")
}

/// Runs a whole session and checks what must hold for any input: nothing panics, the
/// returned faults match the reported ones and `finish` always leaves normal mode.
pub fn check_session(lines: &[String]) {
    let config = Config { verbosity: 0, max_call_depth: 64 };
    let mut forth = Interpreter::with_config(Transcript::default(), config);
    for line in lines {
        let reported_before = forth.console().faults().len();
        let returned = forth.execute(line).map(|()| 0).unwrap_or_else(|faults| faults.0.len());
        assert_eq!(forth.console().faults().len() - reported_before, returned, "line {line:?}");
    }
    let _ = forth.finish();
    assert!(!forth.is_capturing());
    assert!(forth.console().lines.iter().all(|l| match l {
        Line::Value(_) => true,
        Line::Fault(f) => !f.token.is_empty(),
    }));
}
