mod cli;
mod clipboard;
mod config;
mod errors;
mod form;
mod generators;
mod interactive;
mod logging;
mod password;

use std::io::{ self, Write };
use std::process::ExitCode;

use clap::Parser;

use crate::cli::{ Cli, Command, GenerateArgs };
use crate::clipboard::{ copy_password, Clipboard, LazyClipboard, SystemClipboard };
use crate::config::Config;
use crate::errors::Error;
use crate::form::Form;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Command::Interactive) => run_interactive(&cli.generate, &config),
        None => generate_once(&cli.generate, &config),
    }
}

/// Form prefilled from flags, falling back to the config; also says whether to copy.
fn prefilled_form(args: &GenerateArgs, config: &Config) -> (Form, bool) {
    let (length, classes, copy) = args.merge(config);

    (Form::with_defaults(length, classes), copy)
}

fn generate_once(args: &GenerateArgs, config: &Config) -> Result<(), Error> {
    let (mut form, copy) = prefilled_form(args, config);
    let password = form.submit()?;

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer(&mut stdout, password)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", password)?;
    }

    if copy {
        let mut clipboard = SystemClipboard::new()?;
        copy_password(&mut clipboard, password)?;
    }

    Ok(())
}

fn run_interactive(args: &GenerateArgs, config: &Config) -> Result<(), Error> {
    let (mut form, _) = prefilled_form(args, config);

    let mut clipboard = LazyClipboard::new(|| {
        SystemClipboard::new().map(|c| Box::new(c) as Box<dyn Clipboard>)
    });

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    interactive::run(&mut form, stdin, &mut stdout, Some(&mut clipboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ClassSet;

    #[test]
    fn interactive_form_takes_flags() {
        let cli = Cli::try_parse_from(["pwgen-form", "-L", "8", "-l", "interactive"]).unwrap();
        let (form, _) = prefilled_form(&cli.generate, &Config::default());

        assert!(matches!(cli.command, Some(Command::Interactive)));
        assert_eq!(form.length_input(), "8");
        assert_eq!(form.classes(), ClassSet { lowercase: true, ..ClassSet::default() });
    }

    #[test]
    fn flags_fall_back_to_config() {
        let config = Config {
            length: Some(12),
            classes: ClassSet::all(),
            copy: true,
        };
        let (mut form, copy) = prefilled_form(&GenerateArgs::default(), &config);

        assert!(copy);
        assert_eq!(form.submit().unwrap().length(), 12);
    }
}
