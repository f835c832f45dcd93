use clap::Parser;
use minforth::config::get_config;
use minforth::console::{Console, StdoutConsole};
use minforth::interpreter::Interpreter;
use std::io::BufRead;

const DEMO: &str = "\
: square dup * ;
5 square .
3 4 + square .
";

/// Run a minforth program.
#[derive(Parser, Debug)]
#[command()]
struct Args {
    /// File containing a program. Lines are read from stdin if omitted.
    #[arg()]
    file: Option<String>,
    /// Run the built-in example session instead of reading a program.
    #[arg(long, conflicts_with = "file")]
    demo: bool,
    /// Print the final stack to stderr.
    #[arg(long, short = 's')]
    stack: bool,
    /// How deeply user-defined words may call each other.
    #[arg(long, short = 'd')]
    max_call_depth: Option<usize>,
}

/// Feeds every line to the interpreter. Faults are printed by the console as they
/// happen, so the returned ones are not needed here.
fn run_lines<C: Console>(interpreter: &mut Interpreter<C>, reader: impl BufRead) -> Result<(), anyhow::Error> {
    for line in reader.lines() {
        let _ = interpreter.execute(&line?);
    }
    let _ = interpreter.finish();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = get_config().clone();
    if let Some(depth) = args.max_call_depth {
        config.max_call_depth = depth;
    }
    let mut interpreter = Interpreter::with_config(StdoutConsole::default(), config);

    if args.demo {
        println!("Forth Interpreter Example:");
        run_lines(&mut interpreter, DEMO.as_bytes())?;
    } else if let Some(file) = &args.file {
        let file = std::fs::File::open(file)?;
        run_lines(&mut interpreter, std::io::BufReader::new(file))?;
    } else {
        run_lines(&mut interpreter, std::io::stdin().lock())?;
    }

    if args.stack {
        print_stack(interpreter.stack().as_slice());
    }

    Ok(())
}

fn print_stack(values: &[i64]) {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    eprintln!("<{}> {}", values.len(), rendered.join(" "));
}
