use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bf2js::cli_util::{print_error, print_error_with_context};
use bf2js::config::{Overrides, Settings, parse_indent_width, parse_tape_size};
use bf2js::{Bf2JsError, render_program, translate_with_indent, validate};
use clap::Args;
use tracing::{debug, info};

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct TranslateArgs {
    /// Brainfuck source file
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Write the generated script here (mode 0755) instead of stdout
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Only check bracket balance; print nothing on success
    #[arg(short = 'c', long = "check")]
    pub check: bool,

    /// Emit only the translated statements, without the runtime boilerplate
    #[arg(long = "body-only")]
    pub body_only: bool,

    /// Show the source around a bracket error
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Tape cells in the generated runtime (fallback BF2JS_TAPE_SIZE; default 30000)
    #[arg(long = "tape-size", value_name = "N", value_parser = parse_tape_size)]
    pub tape_size: Option<usize>,

    /// Spaces per nesting level, at most 16 (fallback BF2JS_INDENT; default 4)
    #[arg(long = "indent", value_name = "N", value_parser = parse_indent_width)]
    pub indent: Option<usize>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: TranslateArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let source = match read_source(args.input.as_deref()) {
        Ok(source) => source,
        Err(err @ Bf2JsError::MissingArgument { .. }) => {
            print_error(program, &err);
            usage_and_exit(program, err.exit_code());
        }
        Err(err) => {
            print_error(program, &err);
            return err.exit_code();
        }
    };

    if let Err(err) = validate(&source) {
        print_error(program, &Bf2JsError::from(err.clone()));
        if args.verbose {
            print_error_with_context(&source, &err);
        }
        return 1;
    }

    if args.check {
        info!("brackets balanced");
        return 0;
    }

    match emit(&args, &source) {
        Ok(()) => 0,
        Err(err) => {
            print_error(program, &err);
            err.exit_code()
        }
    }
}

fn read_source(input: Option<&Path>) -> Result<Vec<u8>, Bf2JsError> {
    let input = input.ok_or(Bf2JsError::MissingArgument { name: "INPUT" })?;
    let source = fs::read(input).map_err(|source| Bf2JsError::FileRead {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = source.len(), "read source");
    Ok(source)
}

/// Translate validated `source` and write it to the output path or stdout.
fn emit(args: &TranslateArgs, source: &[u8]) -> Result<(), Bf2JsError> {
    let settings = Settings::resolve(Overrides {
        tape_size: args.tape_size,
        indent_width: args.indent,
    });
    debug!(?settings, "resolved settings");

    let body = translate_with_indent(source, settings.indent_width);
    let text = if args.body_only {
        body
    } else {
        render_program(&body, settings.tape_size)
    };

    match args.output.as_deref() {
        Some(path) => write_executable(path, &text),
        None => write_stdout(&mut io::stdout().lock(), &text),
    }
}

fn write_stdout<W: Write>(out: &mut W, text: &str) -> Result<(), Bf2JsError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| Bf2JsError::StdoutWrite { source })
}

/// Write `text` to `path` and make it executable by its owner.
fn write_executable(path: &Path, text: &str) -> Result<(), Bf2JsError> {
    let wrap = |source| Bf2JsError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    fs::write(path, text).map_err(wrap)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(wrap)?;
    }

    info!(path = %path.display(), bytes = text.len(), "wrote script");
    Ok(())
}

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [OPTIONS] <INPUT> [OUTPUT]

Options:
  --check,  -c        Only check bracket balance; print nothing on success
  --body-only         Emit only the translated statements (no runtime boilerplate)
  --verbose, -v       Show the source around a bracket error
  --tape-size <N>     Tape cells in the generated runtime (env BF2JS_TAPE_SIZE; default 30000)
  --indent <N>        Spaces per nesting level (0-16; env BF2JS_INDENT; default 4)
  --help,   -h        Show this help

Description:
  Translates a Brainfuck program into a standalone Node.js script.
  Without OUTPUT the script is printed to stdout.

Notes:
  - Bytes other than ><+-.,[] are treated as comments.
  - In the generated script, `,` stores 0 once stdin is exhausted.
  - Settings may also be placed in $XDG_CONFIG_HOME/bf2js.toml under [translate].

Examples:
  {0} hello.bf hello.js && ./hello.js
  {0} --check program.bf
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_stdout_writes_everything() {
        let mut out = Vec::new();
        write_stdout(&mut out, "    addToCell(1);\n").unwrap();
        assert_eq!(out, b"    addToCell(1);\n");
    }

    #[test]
    fn closed_stdout_is_an_error_not_a_panic() {
        let err = write_stdout(&mut ClosedPipe, "x").unwrap_err();
        assert!(matches!(err, Bf2JsError::StdoutWrite { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("failed to write to stdout"));
    }
}
