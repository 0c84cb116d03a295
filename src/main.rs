use env_logger::Builder;
use monkey_lang::repl::repl;
use std::io;

fn main() -> io::Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=debug, RUST_LOG=monkey_lang::parser=debug
    Builder::from_default_env().init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    repl(stdin, stdout)?;
    Ok(())
}
