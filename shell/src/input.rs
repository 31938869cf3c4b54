//! Line parsing
//!
//! ```text
//! add Buy milk @2024-06-10    create a task
//! done 2 | rm 2 | edit 2      act on a row (number or id)
//! clear                       delete every task
//! filter pending              all | pending | completed | today
//! search milk                 empty term resets
//! list | help | quit
//! ```

use todo_core::task::Command;
use todo_core::view::{FilterMode, RenderModel};

/// Row reference as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRef {
    /// 1-based position in the last printed list
    Index(usize),
    Id(String),
}

impl RowRef {
    fn parse(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err("expected a row number or task id".to_string());
        }
        Ok(match raw.parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Id(raw.to_string()),
        })
    }

    /// Task id this reference points at in `view`
    pub fn resolve(&self, view: &RenderModel) -> Option<String> {
        match self {
            Self::Index(index) => index
                .checked_sub(1)
                .and_then(|i| view.rows.get(i))
                .map(|row| row.id.clone()),
            Self::Id(id) => Some(id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Add { text: String, date: String },
    Toggle(RowRef),
    Delete(RowRef),
    Edit(RowRef),
    ClearAll,
    Filter(FilterMode),
    Search(String),
    List,
    Help,
    Quit,
    Blank,
}

impl Line {
    /// Core command for this line, resolving row numbers against `view`.
    ///
    /// `Ok(None)` for lines handled by the shell itself.
    pub fn into_command(self, view: &RenderModel) -> Result<Option<Command>, String> {
        let resolve = |row: RowRef| {
            row.resolve(view)
                .ok_or_else(|| "no such row in the current list".to_string())
        };

        let command = match self {
            Self::Add { text, date } => Command::Add { text, date },
            Self::Toggle(row) => Command::Toggle { id: resolve(row)? },
            Self::Delete(row) => Command::Delete { id: resolve(row)? },
            Self::Edit(row) => Command::Edit { id: resolve(row)? },
            Self::ClearAll => Command::ClearAll,
            Self::Filter(mode) => Command::SetFilter { mode },
            Self::Search(term) => Command::SetSearch { term },
            Self::List | Self::Help | Self::Quit | Self::Blank => return Ok(None),
        };
        Ok(Some(command))
    }
}

pub fn parse_line(line: &str) -> Result<Line, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Ok(Line::Blank),
        "add" | "a" => {
            let (text, date) = split_due(rest);
            Ok(Line::Add {
                text: text.to_string(),
                date: date.to_string(),
            })
        }
        "done" | "toggle" | "x" => RowRef::parse(rest).map(Line::Toggle),
        "rm" | "delete" | "del" => RowRef::parse(rest).map(Line::Delete),
        "edit" | "e" => RowRef::parse(rest).map(Line::Edit),
        "clear" => Ok(Line::ClearAll),
        "filter" | "f" => rest.parse::<FilterMode>().map(Line::Filter),
        "search" | "s" | "/" => Ok(Line::Search(rest.to_string())),
        "list" | "ls" => Ok(Line::List),
        "help" | "?" => Ok(Line::Help),
        "quit" | "exit" | "q" => Ok(Line::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

/// Split `text @date` on the last ` @`; no marker means no date
fn split_due(rest: &str) -> (&str, &str) {
    if let Some(date) = rest.strip_prefix('@') {
        return ("", date.trim());
    }
    match rest.rsplit_once(" @") {
        Some((text, date)) => (text.trim(), date.trim()),
        None => (rest, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::view::{Counts, TaskRow};

    fn view_with_ids(ids: &[&str]) -> RenderModel {
        RenderModel {
            rows: ids
                .iter()
                .map(|id| TaskRow {
                    id: id.to_string(),
                    title: "t".to_string(),
                    date_label: "Today".to_string(),
                    scheduled: true,
                    badge: None,
                    done: false,
                })
                .collect(),
            counts: Counts::default(),
            is_empty: ids.is_empty(),
        }
    }

    #[test]
    fn test_parse_add() {
        assert_eq!(
            parse_line("add Buy milk @2024-06-10").unwrap(),
            Line::Add {
                text: "Buy milk".to_string(),
                date: "2024-06-10".to_string()
            }
        );
        assert_eq!(
            parse_line("add Email bob@example.com @2024-06-10").unwrap(),
            Line::Add {
                text: "Email bob@example.com".to_string(),
                date: "2024-06-10".to_string()
            }
        );
        assert_eq!(
            parse_line("add Buy milk").unwrap(),
            Line::Add {
                text: "Buy milk".to_string(),
                date: String::new()
            }
        );
        assert_eq!(
            parse_line("add @2024-06-10").unwrap(),
            Line::Add {
                text: String::new(),
                date: "2024-06-10".to_string()
            }
        );
    }

    #[test]
    fn test_parse_row_commands() {
        assert_eq!(parse_line("done 2").unwrap(), Line::Toggle(RowRef::Index(2)));
        assert_eq!(
            parse_line("rm 3f2a").unwrap(),
            Line::Delete(RowRef::Id("3f2a".to_string()))
        );
        assert!(parse_line("edit").is_err());
    }

    #[test]
    fn test_parse_view_commands() {
        assert_eq!(
            parse_line("filter today").unwrap(),
            Line::Filter(FilterMode::Today)
        );
        assert!(parse_line("filter archived").is_err());
        assert_eq!(parse_line("search").unwrap(), Line::Search(String::new()));
        assert_eq!(parse_line("   ").unwrap(), Line::Blank);
        assert!(parse_line("fly away").is_err());
    }

    #[test]
    fn test_resolve_rows() {
        let view = view_with_ids(&["a", "b"]);
        assert_eq!(RowRef::Index(2).resolve(&view).as_deref(), Some("b"));
        assert_eq!(RowRef::Index(0).resolve(&view), None);
        assert_eq!(RowRef::Index(3).resolve(&view), None);
        assert_eq!(RowRef::Id("zzz".into()).resolve(&view).as_deref(), Some("zzz"));
    }

    #[test]
    fn test_into_command() {
        let view = view_with_ids(&["a"]);
        assert_eq!(
            Line::Edit(RowRef::Index(1)).into_command(&view).unwrap(),
            Some(Command::Edit { id: "a".to_string() })
        );
        assert!(Line::Toggle(RowRef::Index(5)).into_command(&view).is_err());
        assert_eq!(Line::Help.into_command(&view).unwrap(), None);
    }
}
