use minilang::toolchain;
use minilang::toolchain::diagnostics::DiagnosticConsumer;

const HELP: &str = "\
    mlc - the MiniLang front end

    USAGE:
        mlc SOURCE

    ARGS:
        SOURCE              The MiniLang source text to scan and recognize, passed as a
                            single argument, e.g. mlc 'x=1;'.

    Prints one 'Type: <KIND>, Value: <text>' line per scanned token, then any syntax
    diagnostics from recognition. Diagnostics do not affect the exit status.
";

fn main() {
    let source = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            eprint!("{}", HELP);
            std::process::exit(1);
        }
    };

    let tokens = toolchain::lexer::TokenizedBuffer::tokenize(&source);
    tokens.print_tokens();

    let mut diags = toolchain::diagnostics::diagnostic_emitter::console_diagnostic_consumer();
    toolchain::parser::recognize(&tokens, &mut diags);
    diags.flush();
}

fn parse_args() -> Result<String, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let source: String = pargs.free_from_str()?;

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(source)
}
