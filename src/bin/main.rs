use lox_lexer::{Diagnostics, Scanner};
use std::{
    env,
    io::{self, Write},
};

fn main() {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let args: Vec<String> = env::args().collect();
    let result = match args.len() {
        1 => run_prompt(),
        2 => run_file(args[1].as_str()),
        _ => {
            writeln!(stdout, "Usage: lox-lexer [script]").expect("Something went wrong");
            std::process::exit(64);
        },
    };

    match result {
        Err(e) => {
            writeln!(stderr, "{}", e).expect("Something went wrong");
            std::process::exit(65);
        },
        Ok(clean) if !clean => std::process::exit(65),
        Ok(_) => return,
    }
}

fn run_file(path: &str) -> io::Result<bool> {
    let contents = std::fs::read_to_string(path)?;
    run(contents.as_str())
}

fn run_prompt() -> io::Result<bool> {
    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();

        let num_bytes = stdin.read_line(&mut buffer)?;
        if num_bytes == 0 { break };

        // Bad input never kills the prompt; each line gets a fresh sink.
        run(buffer.as_str())?;
    }

    Ok(true)
}

fn run(source: &str) -> io::Result<bool> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let mut diagnostics = Diagnostics::new();
    let scanner = Scanner::new(source, &mut diagnostics);
    let tokens = scanner.scan_tokens();

    // For now the tokens go straight to stdout; a parser picks them up later.
    for token in &tokens {
        writeln!(stdout, "{}", token)?;
    }

    for error in diagnostics.errors() {
        writeln!(stderr, "{}", error)?;
    }

    Ok(!diagnostics.had_error())
}
