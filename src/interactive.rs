use std::io::{ BufRead, Write };

use tracing::warn;

use crate::clipboard::{ copy_password, Clipboard };
use crate::errors::Error;
use crate::form::Form;
use crate::generators::CharClass;

const HELP: &str = "\
commands:
  length <n>   set the password length (6-16)
  lower        toggle lowercase
  upper        toggle uppercase
  numbers      toggle numbers
  symbols      toggle symbols
  generate     generate a password
  reset        clear the form
  copy         copy the password to the clipboard
  show         show the form
  help         show this help
  quit         exit";

/// Reads commands until `quit` or end of input, echoing the form state to `output`.
pub fn run<R: BufRead, W: Write>(
    form: &mut Form,
    input: R,
    output: &mut W,
    mut clipboard: Option<&mut dyn Clipboard>,
) -> Result<(), Error> {
    writeln!(output, "Password Generator")?;
    show(form, output)?;

    for line in input.lines() {
        let line = line?;
        let (command, rest) = match line.trim().split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => continue,
            "length" => {
                form.set_length_input(rest);
                if let Some(error) = form.error() {
                    writeln!(output, "{}", error)?;
                }
            }
            "lower" => toggle(form, CharClass::Lower, output)?,
            "upper" => toggle(form, CharClass::Upper, output)?,
            "numbers" => toggle(form, CharClass::Digit, output)?,
            "symbols" => toggle(form, CharClass::Symbol, output)?,
            "generate" => match form.submit().map(|password| password.to_string()) {
                Ok(password) => {
                    writeln!(output, "Result:")?;
                    writeln!(output, "{}", password)?;
                }
                Err(Error::Validation(_)) | Err(Error::Generation(_)) => {
                    if let Some(error) = form.error() {
                        writeln!(output, "{}", error)?;
                    }
                }
                Err(e) => return Err(e),
            },
            "reset" => {
                form.reset();
                writeln!(output, "Form cleared")?;
            }
            "copy" => copy(form, clipboard.as_deref_mut(), output)?,
            "show" => show(form, output)?,
            "help" => writeln!(output, "{}", HELP)?,
            "quit" | "exit" => break,
            other => writeln!(output, "Unknown command: {} (try help)", other)?,
        }
    }

    Ok(())
}

fn toggle<W: Write>(form: &mut Form, class: CharClass, output: &mut W) -> Result<(), Error> {
    form.toggle(class);
    let mark = if form.classes().contains(class) { "x" } else { " " };
    writeln!(output, "[{}] Include {}", mark, class.label())?;

    Ok(())
}

fn copy<W: Write>(
    form: &Form,
    clipboard: Option<&mut (dyn Clipboard + '_)>,
    output: &mut W,
) -> Result<(), Error> {
    let Some(password) = form.result() else {
        writeln!(output, "Nothing to copy")?;
        return Ok(());
    };

    match clipboard {
        Some(clipboard) => match copy_password(clipboard, password) {
            Ok(()) => writeln!(output, "Copied")?,
            Err(e) => {
                warn!(error = %e, "copy failed");
                writeln!(output, "{}", e)?;
            }
        },
        None => writeln!(output, "No clipboard available")?,
    }

    Ok(())
}

fn show<W: Write>(form: &Form, output: &mut W) -> Result<(), Error> {
    writeln!(output, "Password Length: {}", form.length_input())?;
    if let Some(error) = form.error() {
        writeln!(output, "  {}", error)?;
    }

    let classes = form.classes();
    for class in [CharClass::Lower, CharClass::Upper, CharClass::Digit, CharClass::Symbol] {
        let mark = if classes.contains(class) { "x" } else { " " };
        writeln!(output, "[{}] Include {}", mark, class.label())?;
    }
    if !form.can_submit() {
        writeln!(output, "(generate needs a length between 6 and 16)")?;
    }

    if let Some(password) = form.result() {
        writeln!(output, "Result:")?;
        writeln!(output, "{}", password)?;
    }

    Ok(())
}
