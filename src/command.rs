use std::str::FromStr;

use entity::prelude::PostId;
use view::{ModalEvent, Route};

pub static HELP: &str = "\
home | create | profile | login | logout   navigate
new | cancel                               open or close the composer overlay
write <text>                               set the composer text
submit                                     create the post
edit <id>                                  open the editor for one of your posts
buffer <text>                              set the editor text
save | delete                              update or delete the edited post
esc | backdrop | surface                   modal events
show <id>                                  fetch a single post
refresh                                    reload the current page
help | quit";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid post id: {0}")]
    InvalidId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(Route),
    Open,
    Cancel,
    Write(String),
    Submit,
    Edit(PostId),
    Buffer(String),
    Save,
    Delete,
    Modal(ModalEvent),
    Show(PostId),
    Refresh,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        if let Ok(route) = Route::from_str(word) {
            return Ok(Command::Navigate(route));
        }

        let command = match word.to_lowercase().as_str() {
            "new" => Command::Open,
            "cancel" => Command::Cancel,
            // Text arguments are kept raw; blank content is rejected on submit.
            "write" => Command::Write(rest.to_string()),
            "submit" => Command::Submit,
            "edit" => Command::Edit(post_id("edit", rest)?),
            "buffer" => Command::Buffer(rest.to_string()),
            "save" => Command::Save,
            "delete" => Command::Delete,
            "esc" | "escape" => Command::Modal(ModalEvent::Escape),
            "backdrop" => Command::Modal(ModalEvent::BackdropClick),
            "surface" => Command::Modal(ModalEvent::SurfaceClick),
            "show" => Command::Show(post_id("show", rest)?),
            "refresh" | "reload" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };

        Ok(command)
    }
}

fn post_id(command: &'static str, arg: &str) -> Result<PostId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }

    PostId::from_str(arg).map_err(|_| CommandError::InvalidId(arg.to_string()))
}
