//! Textual trigger events for driving listings from a console.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::types::{RowId, TypeConstraintError};
use crate::dto::table::TableView;
use crate::listing::{Listing, ListingKind};
use crate::pagination::PageToken;
use crate::table::viewport::ViewportClassifier;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown listing `{0}`")]
    UnknownListing(String),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("not a number: `{0}`")]
    InvalidNumber(String),

    #[error("invalid row id: {0}")]
    InvalidRowId(#[from] TypeConstraintError),
}

/// A trigger aimed at one listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableCommand {
    /// Raw filter text; an empty string clears the filter.
    Filter(String),
    Page(usize),
    Prev,
    Next,
    SelectAll,
    SelectNone,
    Check(RowId),
    Uncheck(RowId),
    Show,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Listing {
        kind: ListingKind,
        command: TableCommand,
    },
    /// New viewport width in pixels; applies to every listing.
    Viewport(u32),
    Quit,
}

fn parse_number<T: FromStr>(value: Option<&str>, name: &'static str) -> Result<T, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument(name))?;
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

fn parse_row_id(value: Option<&str>) -> Result<RowId, CommandError> {
    let raw: i64 = parse_number(value, "row id")?;
    Ok(RowId::new(raw)?)
}

impl FromStr for TableCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let (verb, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let mut args = rest.split_whitespace();

        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "filter" | "search" => Ok(TableCommand::Filter(rest.trim().to_string())),
            "page" => Ok(TableCommand::Page(parse_number(args.next(), "page")?)),
            "prev" => Ok(TableCommand::Prev),
            "next" => Ok(TableCommand::Next),
            "select" => match args.next() {
                Some("all") => Ok(TableCommand::SelectAll),
                Some("none") => Ok(TableCommand::SelectNone),
                Some(other) => Err(CommandError::UnknownCommand(format!("select {other}"))),
                None => Err(CommandError::MissingArgument("all|none")),
            },
            "check" => Ok(TableCommand::Check(parse_row_id(args.next())?)),
            "uncheck" => Ok(TableCommand::Uncheck(parse_row_id(args.next())?)),
            "show" => Ok(TableCommand::Show),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match head.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "quit" | "exit" => Ok(Command::Quit),
            "viewport" => Ok(Command::Viewport(parse_number(
                rest.split_whitespace().next(),
                "width",
            )?)),
            listing => {
                let kind = listing
                    .parse::<ListingKind>()
                    .map_err(CommandError::UnknownListing)?;
                let command = if rest.trim().is_empty() {
                    TableCommand::Show
                } else {
                    rest.parse()?
                };
                Ok(Command::Listing { kind, command })
            }
        }
    }
}

/// Runs one trigger against a listing, returning the resulting view.
///
/// `prev`/`next` behave like clicks on the rendered stepping controls, so
/// they do nothing while those controls are disabled or absent.
pub fn apply<C: ViewportClassifier>(listing: &mut Listing<C>, command: &TableCommand) -> TableView {
    let table = listing.table_mut();
    let view = match command {
        TableCommand::Filter(text) => table.apply_filter(text),
        TableCommand::Page(page) => table.set_page(*page),
        TableCommand::Prev | TableCommand::Next => {
            let wanted = matches!(command, TableCommand::Next);
            let token = table.view().pagination.tokens().iter().copied().find(|token| {
                matches!(
                    (token, wanted),
                    (PageToken::Prev { .. }, false) | (PageToken::Next { .. }, true)
                )
            });
            match token {
                Some(token) => table.activate(token),
                None => table.view(),
            }
        }
        TableCommand::SelectAll => table.toggle_master(true),
        TableCommand::SelectNone => table.toggle_master(false),
        TableCommand::Check(id) | TableCommand::Uncheck(id) => {
            let checked = matches!(command, TableCommand::Check(_));
            if !table.set_row_selected(*id, checked) {
                log::warn!("No row {id} in listing");
            }
            table.view()
        }
        TableCommand::Show => table.view(),
    };
    view.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_commands() {
        assert_eq!(
            "cards filter  delver of ".parse::<Command>(),
            Ok(Command::Listing {
                kind: ListingKind::Cards,
                command: TableCommand::Filter("delver of".to_string()),
            })
        );
        assert_eq!(
            "sealed page 3".parse::<Command>(),
            Ok(Command::Listing {
                kind: ListingKind::SealedProducts,
                command: TableCommand::Page(3),
            })
        );
        assert_eq!(
            "cards".parse::<Command>(),
            Ok(Command::Listing {
                kind: ListingKind::Cards,
                command: TableCommand::Show,
            })
        );
    }

    #[test]
    fn filter_without_text_clears() {
        assert_eq!(
            "filter".parse::<TableCommand>(),
            Ok(TableCommand::Filter(String::new()))
        );
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!("viewport 640".parse::<Command>(), Ok(Command::Viewport(640)));
        assert_eq!(" QUIT ".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "ledger show".parse::<Command>(),
            Err(CommandError::UnknownListing("ledger".to_string()))
        );
        assert_eq!(
            "cards page two".parse::<Command>(),
            Err(CommandError::InvalidNumber("two".to_string()))
        );
        assert_eq!(
            "cards check 0".parse::<Command>(),
            Err(CommandError::InvalidRowId(TypeConstraintError::NonPositiveId))
        );
        assert_eq!(
            "viewport".parse::<Command>(),
            Err(CommandError::MissingArgument("width"))
        );
    }
}
