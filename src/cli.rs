use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

pub const USAGE: &str = "Starts a new question set

Usage: quizset [OPTIONS] [CATEGORY]...

Arguments:
  [CATEGORY]...               Which categories do you want (all of them if omitted)

Options:
  -n, --number <N>            How many questions do you want? [default: 20]
  -l, --list                  List categories
      --training              Training mode: the solution is displayed after each question
      --hide-multiple-choice  Should we hide the information that the question is multiple choice?
  -b, --bank <PATH>           Question bank file or directory (can be repeated)
  -h, --help                  Print help";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub categories: Vec<String>,
    pub number: Option<usize>,
    pub list: bool,
    pub training: bool,
    pub hide_multiple_choice: bool,
    pub banks: Vec<PathBuf>,
    pub help: bool,
}

impl Options {
    /// Parses arguments, not including the program name.
    pub fn parse<I, S>(args: I) -> Result<Options>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::into);
        let mut only_categories = false;

        while let Some(arg) = args.next() {
            if only_categories || !arg.starts_with('-') || arg == "-" {
                options.categories.push(arg);
                continue;
            }

            let (flag, inline_value) = match arg.find('=') {
                Some(index) if arg.starts_with("--") => {
                    (arg[..index].to_owned(), Some(arg[index + 1..].to_owned()))
                }
                _ => (arg.clone(), None),
            };

            let mut value = || -> Result<String> {
                match inline_value.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .ok_or_else(|| anyhow!("Option {} requires a value", flag)),
                }
            };

            let switch = |enabled: &mut bool| -> Result<()> {
                if inline_value.is_some() {
                    return Err(anyhow!("Option {} does not take a value", flag));
                }
                *enabled = true;
                Ok(())
            };

            match flag.as_str() {
                "--" => only_categories = true,
                "-n" | "--number" => {
                    let number = value()?;
                    let number = number
                        .parse::<usize>()
                        .with_context(|| format!("Invalid number of questions: {:?}", number))?;
                    options.number = Some(number);
                }
                "-b" | "--bank" => options.banks.push(PathBuf::from(value()?)),
                "-l" | "--list" => switch(&mut options.list)?,
                "--training" => switch(&mut options.training)?,
                "--hide-multiple-choice" => switch(&mut options.hide_multiple_choice)?,
                "-h" | "--help" => switch(&mut options.help)?,
                _ => return Err(anyhow!("Unknown option: {}", arg)),
            }
        }

        Ok(options)
    }
}
