use std::path::PathBuf;

use clap::{ Args, Parser, Subcommand };

use crate::config::Config;
use crate::generators::ClassSet;

#[derive(Parser, Debug)]
#[command(name = "pwgen-form", about = "Generate a random password from selected character classes", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[arg(
        long,
        env = "PWGEN_FORM_CONFIG",
        value_name = "FILE",
        help = "Path to a JSON config file with default length and classes",
        global = true
    )]
    pub config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase log verbosity")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the form line by line on stdin
    Interactive,
}

#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    #[arg(short = 'L', long, value_name = "LEN", help = "Password length (6-16)")]
    pub length: Option<String>,

    #[arg(short, long, help = "Include lowercase")]
    pub lowercase: bool,

    #[arg(short, long, help = "Include uppercase")]
    pub uppercase: bool,

    #[arg(short, long, help = "Include numbers")]
    pub numbers: bool,

    #[arg(short, long, help = "Include symbols")]
    pub symbols: bool,

    #[arg(short, long, help = "Include every character class")]
    pub all: bool,

    #[arg(short, long, help = "Copy the password to the clipboard")]
    pub copy: bool,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,
}

impl GenerateArgs {
    pub fn classes(&self) -> ClassSet {
        if self.all {
            return ClassSet::all();
        }

        ClassSet {
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }

    /// Flags override the config; classes are only taken from the config when no flag picks any.
    pub fn merge(&self, config: &Config) -> (Option<String>, ClassSet, bool) {
        let length = self.length.clone().or_else(|| config.length_input());
        let flagged = self.classes();
        let classes = if flagged.is_empty() { config.classes } else { flagged };

        (length, classes, self.copy || config.copy)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_one_shot_flags() {
        let cli = Cli::try_parse_from(["pwgen-form", "-L", "8", "-l", "-n", "--copy"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.generate.length.as_deref(), Some("8"));
        assert_eq!(
            cli.generate.classes(),
            ClassSet { lowercase: true, numbers: true, ..ClassSet::default() }
        );
        assert!(cli.generate.copy);
    }

    #[test]
    fn length_is_kept_raw_for_validation() {
        let cli = Cli::try_parse_from(["pwgen-form", "--length", "abc"]).unwrap();
        assert_eq!(cli.generate.length.as_deref(), Some("abc"));
    }

    #[test]
    fn parses_interactive_with_verbosity() {
        let cli = Cli::try_parse_from(["pwgen-form", "-vv", "interactive"]).unwrap();

        assert!(matches!(cli.command, Some(Command::Interactive)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            length: Some(10),
            classes: ClassSet { symbols: true, ..ClassSet::default() },
            copy: true,
        };

        let args = GenerateArgs { length: Some("7".into()), uppercase: true, ..GenerateArgs::default() };
        let (length, classes, copy) = args.merge(&config);
        assert_eq!(length.as_deref(), Some("7"));
        assert_eq!(classes, ClassSet { uppercase: true, ..ClassSet::default() });
        assert!(copy);

        let (length, classes, _) = GenerateArgs::default().merge(&config);
        assert_eq!(length.as_deref(), Some("10"));
        assert_eq!(classes, config.classes);
    }
}
