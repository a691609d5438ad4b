//! Interactive browsing loop.
//!
//! Reads one command per line and dispatches it to the session:
//!
//! ```text
//! search ingredient=aspirin route=ORAL   (alias: s; a bare word is an ingredient term)
//! next | n        previous | p
//! reset | r       vocab | v
//! help | h        quit | q
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::debug;

use iir_model::{Column, FilterCriteria};
use iir_query::{PageView, Session};

use crate::render::{navigation_hint, vocabulary_tables, write_page};

const HELP: &str = "\
commands:
  search [TERM] [ingredient=..] [route=..] [dosage_form=..] [cas=..] [unii=..]
  next | n         previous | p
  reset | r        vocab | v
  help | h         quit | q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(FilterCriteria),
    Next,
    Previous,
    Reset,
    Vocab,
    Help,
    Quit,
}

/// Split a line on whitespace, keeping double-quoted runs together.
fn split_args(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            ch if ch.is_whitespace() && !quoted => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            ch => {
                current.push(ch);
                pending = true;
            }
        }
    }
    if quoted {
        bail!("unterminated quote");
    }
    if pending {
        args.push(current);
    }
    Ok(args)
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>> {
    let args = split_args(line)?;
    let Some((name, rest)) = args.split_first() else {
        return Ok(None);
    };
    let command = match name.to_lowercase().as_str() {
        "search" | "s" => {
            let mut criteria = FilterCriteria::new();
            let mut terms = Vec::new();
            for arg in rest {
                match arg.split_once('=') {
                    Some((key, value)) => criteria.set(key, value)?,
                    None => terms.push(arg.as_str()),
                }
            }
            if !terms.is_empty() {
                criteria.ingredient = Some(terms.join(" "));
            }
            BrowseCommand::Search(criteria)
        }
        "next" | "n" => BrowseCommand::Next,
        "previous" | "prev" | "p" => BrowseCommand::Previous,
        "reset" | "r" => BrowseCommand::Reset,
        "vocab" | "v" => BrowseCommand::Vocab,
        "help" | "h" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        other => bail!("unknown command: {other} (type `help`)"),
    };
    Ok(Some(command))
}

fn write_view<W: Write>(out: &mut W, view: &PageView) -> Result<()> {
    write_page(out, view, &[])?;
    writeln!(out, "{}", navigation_hint(view))?;
    Ok(())
}

/// Run the loop until `quit` or end of input.
pub fn run_browse_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<()> {
    write_view(out, &session.current_page())?;
    for line in input.lines() {
        let line = line.context("read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(out, "error: {error}")?;
                continue;
            }
        };
        debug!(?command, "browse command");
        match command {
            BrowseCommand::Search(criteria) => write_view(out, &session.search(criteria))?,
            BrowseCommand::Reset => write_view(out, &session.reset())?,
            BrowseCommand::Next | BrowseCommand::Previous => {
                let delta = if command == BrowseCommand::Next { 1 } else { -1 };
                // Out-of-range moves leave the current page on screen.
                if let Some(view) = session.change_page(delta) {
                    write_view(out, &view)?;
                }
            }
            BrowseCommand::Vocab => {
                let tables = vocabulary_tables(
                    session.vocabularies(),
                    session.store().field_mapping(),
                    &[Column::Route, Column::DosageForm],
                );
                for table in tables {
                    writeln!(out, "{table}")?;
                }
            }
            BrowseCommand::Help => writeln!(out, "{HELP}")?,
            BrowseCommand::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use iir_model::{DatasetStore, Field, FieldMapping, Record};

    use super::*;

    fn session() -> Session {
        let records = ["SUCROSE", "LACTOSE", "TALC"]
            .into_iter()
            .map(|name| Record::new().with(Field::IngredientName, name))
            .collect();
        Session::new(DatasetStore::new(records, FieldMapping::new()), 2)
    }

    #[test]
    fn splits_quoted_values() {
        assert_eq!(
            split_args(r#"s ingredient="citric acid" route=ORAL"#).unwrap(),
            vec!["s", "ingredient=citric acid", "route=ORAL"]
        );
        assert_eq!(split_args(r#"s route="""#).unwrap(), vec!["s", "route="]);
        assert!(split_args(r#"s "open"#).is_err());
    }

    #[test]
    fn parses_search_terms() {
        let command = parse_command("search citric acid cas=77-92 unii=XF417D3PSL")
            .unwrap()
            .unwrap();
        let expected = FilterCriteria::new()
            .with_ingredient("citric acid")
            .with_cas_number("77-92")
            .with_unii("XF417D3PSL");
        assert_eq!(command, BrowseCommand::Search(expected));
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(parse_command("n").unwrap(), Some(BrowseCommand::Next));
        assert_eq!(parse_command(" PREV ").unwrap(), Some(BrowseCommand::Previous));
        assert_eq!(parse_command("   ").unwrap(), None);
        assert!(parse_command("jump 4").is_err());
        assert!(parse_command("s colour=red").is_err());
    }

    #[test]
    fn loop_drives_the_session() {
        let mut session = session();
        let input = "n\nn\nbogus\ns talc\nq\nn\n";
        let mut out = Vec::new();
        run_browse_loop(&mut session, input.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("第 1 页，共 2 页"));
        assert!(out.contains("第 2 页，共 2 页"));
        assert!(out.contains("error: unknown command: bogus"));
        assert!(out.contains("共 1 条记录"));
        // Input after `q` is not consumed.
        assert_eq!(session.page_state().page(), 1);
        assert_eq!(session.view().len(), 1);
    }
}
