//! Parsing of shell input lines

use crate::catalog::Isbn;
use crate::{BookshelfError, Result};

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `add <isbn> [title] [author] [description]`
    Add {
        isbn: Isbn,
        title: Option<String>,
        author: Option<String>,
        description: Option<String>,
    },
    /// `find <isbn>`
    Find(Isbn),
    /// `remove <isbn>`
    Remove(Isbn),
    /// `list`
    List,
    /// `lookup <isbn>`
    Lookup(Isbn),
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

impl ShellCommand {
    /// Parse a line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let words = shell_words::split(line)
            .map_err(|e| BookshelfError::Usage(format!("could not parse '{line}': {e}")))?;
        let Some((verb, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let (isbn, rest) = isbn_arg(verb, args)?;
                if rest.len() > 3 {
                    return Err(BookshelfError::Usage(
                        "add takes at most: <isbn> [title] [author] [description]".to_string(),
                    ));
                }
                let mut fields = rest.iter().cloned();
                ShellCommand::Add {
                    isbn,
                    title: fields.next(),
                    author: fields.next(),
                    description: fields.next(),
                }
            }
            "find" | "search" => ShellCommand::Find(single_isbn(verb, args)?),
            "remove" | "delete" | "rm" => ShellCommand::Remove(single_isbn(verb, args)?),
            "lookup" | "fetch" => ShellCommand::Lookup(single_isbn(verb, args)?),
            "list" | "ls" => {
                no_args(verb, args)?;
                ShellCommand::List
            }
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(BookshelfError::Usage(format!(
                    "unknown command '{other}' (try 'help')"
                )))
            }
        };

        Ok(Some(command))
    }
}

fn isbn_arg<'a>(verb: &str, args: &'a [String]) -> Result<(Isbn, &'a [String])> {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| BookshelfError::Usage(format!("{verb} requires an ISBN")))?;
    Ok((first.parse()?, rest))
}

fn single_isbn(verb: &str, args: &[String]) -> Result<Isbn> {
    let (isbn, rest) = isbn_arg(verb, args)?;
    no_args(verb, rest)?;
    Ok(isbn)
}

fn no_args(verb: &str, args: &[String]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(BookshelfError::Usage(format!(
            "{verb}: unexpected argument '{}'",
            args[0]
        )))
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  add <isbn> [title] [author] [description]   add a book; without a title the metadata provider fills it in
  find <isbn>                                 show the book with this ISBN
  remove <isbn>                               remove the book with this ISBN (no-op if absent)
  list                                        show all books ordered by ISBN
  lookup <isbn>                               fetch metadata without adding the book
  help                                        show this message
  quit                                        leave the shell";
