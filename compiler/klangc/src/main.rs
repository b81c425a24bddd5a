//! Klang compiler CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use klang_diagnostic::{DiagnosticRenderer, RenderOptions};
use klangc::commands::{lex_file, parse_lex_args, write_tokens};
use klangc::CliError;

/// Exit status for failures of the tool itself.
const INTERNAL_ERROR: u8 = 3;

fn main() -> ExitCode {
    install_panic_hook();
    klangc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print!("{}", usage());
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "lex" => lex(&args[1..]),
        "help" | "-h" | "--help" => {
            print!("{}", usage());
            ExitCode::SUCCESS
        }
        "version" | "-V" | "--version" => {
            println!("kc {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        other => fail(
            &CliError::Usage(format!("unknown command '{other}'")),
            RenderOptions::default(),
        ),
    }
}

fn lex(args: &[String]) -> ExitCode {
    let (path, options) = match parse_lex_args(args) {
        Ok(parsed) => parsed,
        Err(error) => return fail(&error, RenderOptions::default()),
    };
    let render = RenderOptions {
        use_color: options.color.detect(io::stderr().is_terminal()),
        show_locations: options.show_locations,
    };

    let tokens = match lex_file(&path) {
        Ok(tokens) => tokens,
        Err(error) => return fail(&error, render),
    };
    if let Err(error) = write_tokens(&mut io::stdout().lock(), &path, &tokens) {
        eprintln!("internal error: cannot write token listing: {error}");
        return ExitCode::from(INTERNAL_ERROR);
    }
    ExitCode::SUCCESS
}

/// Report an error on stderr and pick the exit status.
fn fail(error: &CliError, render: RenderOptions) -> ExitCode {
    match error {
        CliError::Diagnostic(diagnostic) => {
            let renderer = DiagnosticRenderer::new(render);
            // Nothing sensible is left to do if stderr itself is gone.
            let _ = renderer.emit(&mut io::stderr().lock(), diagnostic);
        }
        CliError::Usage(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprint!("{}", usage());
        }
        CliError::Io { .. } => eprintln!("internal error: {error}"),
    }
    ExitCode::from(error.exit_code())
}

/// Panics are bugs in `kc`, not in the user's source. Report them on a
/// channel that cannot be mistaken for a diagnostic.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("internal error: {info}");
        eprintln!("this is a bug in kc; please report it");
        std::process::exit(i32::from(INTERNAL_ERROR));
    }));
}

fn usage() -> &'static str {
    "\
Klang compiler

Usage: kc <command> [options]

Commands:
  lex <file.k>    Tokenize a file and list its tokens
  help            Show this message
  version         Show the version

Options for lex:
  --color=<when>  Color diagnostics: auto, always, never (default: auto)
  --no-locations  Omit source locations and context from diagnostics

Set RUST_LOG (e.g. RUST_LOG=klang_lexer=debug) to enable tracing output.
"
}
