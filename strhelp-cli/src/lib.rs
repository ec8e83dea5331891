use anyhow::{Context, Result};
use structopt::clap::AppSettings;
use structopt::StructOpt;
use strhelp::{decode_utf8, single_char, StringHelpers};
use tracing::debug;

#[derive(Debug, StructOpt)]
pub struct Input {
    /// Text to transform
    /// If omitted, read it from stdin.
    #[structopt(allow_hyphen_values = true)]
    pub text: Option<String>,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Uppercase ASCII letters
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Upper {
        #[structopt(flatten)]
        input: Input,
    },
    /// Lowercase ASCII letters
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Lower {
        #[structopt(flatten)]
        input: Input,
    },
    /// Reverse the character order
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Reverse {
        #[structopt(flatten)]
        input: Input,
    },
    /// Strip spaces, or the given set of characters, from the ends
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Trim {
        #[structopt(flatten)]
        input: Input,
        /// Characters to strip instead of the space
        #[structopt(long)]
        chars: Option<String>,
        /// Only strip the left end
        #[structopt(long, conflicts_with = "right")]
        left: bool,
        /// Only strip the right end
        #[structopt(long)]
        right: bool,
    },
    /// Drop every occurrence of a character
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Remove {
        #[structopt(flatten)]
        input: Input,
        #[structopt(long = "char")]
        character: String,
    },
    /// Split into non-empty tokens
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Split {
        #[structopt(flatten)]
        input: Input,
        #[structopt(long)]
        delim: String,
        /// Print the tokens as a JSON array
        #[structopt(long)]
        json: bool,
    },
}

impl Command {
    pub fn input(&self) -> &Input {
        match self {
            Command::Upper { input }
            | Command::Lower { input }
            | Command::Reverse { input }
            | Command::Trim { input, .. }
            | Command::Remove { input, .. }
            | Command::Split { input, .. } => input,
        }
    }
}

/// Run `command` over `input` and render what should be printed.
pub fn run(command: &Command, input: &str) -> Result<String> {
    debug!(?command, len = input.len(), "running");
    let out = match command {
        Command::Upper { .. } => input.to_upper(),
        Command::Lower { .. } => input.to_lower(),
        Command::Reverse { .. } => input.reversed(),
        Command::Trim {
            chars, left, right, ..
        } => match (chars, left, right) {
            (None, true, _) => input.trimleft_spaces(),
            (None, _, true) => input.trimright_spaces(),
            (None, _, _) => input.trim_spaces(),
            (Some(set), true, _) => input.trimleft_chars(set),
            (Some(set), _, true) => input.trimright_chars(set),
            (Some(set), _, _) => input.trim_chars(set),
        },
        Command::Remove { character, .. } => {
            let c = single_char(character).context("parsing --char failed")?;
            input.remove_char(c)
        }
        Command::Split { delim, json, .. } => {
            let d = single_char(delim).context("parsing --delim failed")?;
            let tokens = input.split_tokens(d);
            debug!("found {} tokens", tokens.len());
            if *json {
                serde_json::to_string(&tokens).context("serializing tokens failed")?
            } else {
                tokens.join("\n")
            }
        }
    };
    Ok(out)
}

/// Decode raw stdin bytes and drop the trailing line terminator.
pub fn decode_stdin(bytes: Vec<u8>) -> Result<String> {
    let input = decode_utf8(bytes).context("stdin is not valid utf-8")?;
    Ok(strip_newline(input))
}

/// Strip the single line terminator a pipe or heredoc leaves on stdin.
pub fn strip_newline(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}
