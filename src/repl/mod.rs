//! REPL for the language implemented by this crate.
//!
//! Parses each line, evaluates it against a persistent environment shared
//! across the whole session (so `let` bindings from one line are visible on
//! the next), and prints either the parser errors, the `ERROR: ...` message
//! of a runtime error, or the value's `inspect()` rendering.

mod display;

use crate::environment::Environment;
use crate::eval::eval_program;
use crate::object::Object;
use crate::{lexer::Lexer, parser::Parser};
pub use display::MONKEY_LOGO;
use display::{print_parser_errors, print_welcome, CYAN, GRAY, RESET};
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">>";

/// Starts the REPL, reading lines from `input` and writing to `output` until
/// EOF or the `q` command.
pub fn repl<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    print_welcome();

    let env = Environment::new();
    let mut reader = input;
    let mut line = String::new();

    loop {
        write!(output, "{}{}{} ", CYAN, PROMPT, RESET)?;
        output.flush()?;
        line.clear();

        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            writeln!(output, "\n{}Goodbye!{}", GRAY, RESET)?;
            return Ok(());
        }

        let trimmed_line = line.trim_end_matches(['\n', '\r']);
        if trimmed_line.is_empty() {
            continue;
        }
        if trimmed_line == "q" {
            writeln!(output, "{}Goodbye!{}", GRAY, RESET)?;
            return Ok(());
        }

        let lexer = Lexer::new(trimmed_line.to_string());
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors.is_empty() {
            print_parser_errors(&mut output, &parser.errors)?;
            continue;
        }

        let result = eval_program(&program, &env);
        match result {
            Object::Error(message) => writeln!(output, "ERROR: {}", message)?,
            other => writeln!(output, "{}", other.inspect())?,
        }
    }
}
