//! Line-oriented command parsing and plain-text rendering of the view model.

use std::fmt::Write as _;

use catalog_core::{AppViewModel, LoadPhase, Msg, SortKey, PAGE_SIZE_OPTIONS};

pub enum Command {
    Msg(Msg),
    Help,
    Quit,
}

/// Parses one line of user input. Returns `None` for input that is not a
/// recognized command, which the caller answers with the help text.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "" => None,
        "quit" | "exit" => Some(Command::Quit),
        "help" => Some(Command::Help),
        // `search` with no argument clears the filter.
        "search" => Some(Command::Msg(Msg::SearchInputChanged(rest.to_string()))),
        // `cat A, B` selects; bare `cat` clears back to all categories.
        "cat" | "categories" => {
            let titles = rest
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToOwned::to_owned)
                .collect();
            Some(Command::Msg(Msg::CategoriesSelected(titles)))
        }
        "sort" => match rest {
            "name" => Some(Command::Msg(Msg::SortKeySelected(SortKey::Name))),
            "category" => Some(Command::Msg(Msg::SortKeySelected(SortKey::Category))),
            _ => None,
        },
        "size" => rest
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(|n| Command::Msg(Msg::PageSizeSelected(n))),
        "page" => rest
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(|n| Command::Msg(Msg::PageSelected(n))),
        _ => None,
    }
}

pub fn help() -> String {
    format!(
        "\
commands:
  search <text>     filter by title/description (debounced; empty clears)
  cat <a>, <b>      filter by categories (empty clears)
  sort name|category
  size <n>          items per page (suggested: {:?})
  page <n>          go to page n
  help, quit
",
        PAGE_SIZE_OPTIONS
    )
}

/// Renders one frame of the catalog view as plain text.
pub fn render(view_model: &AppViewModel) -> String {
    let mut out = String::new();

    match &view_model.phase {
        LoadPhase::Loading => {
            out.push_str("Loading catalog...\n");
            return out;
        }
        LoadPhase::Failed(failure) => {
            let _ = writeln!(out, "Load failed: {failure}");
            return out;
        }
        LoadPhase::Ready => {}
    }

    let query = &view_model.query;
    if !query.search_text.is_empty() {
        let _ = writeln!(out, "search: {:?}", query.search_text);
    }
    if !query.selected_categories.is_empty() {
        let _ = writeln!(out, "categories: {}", query.selected_categories.join(", "));
    }

    let view = &view_model.view;
    for item in &view.items {
        let _ = write!(out, "[{}] {}", item.category, item.title);
        if !item.description.is_empty() {
            let _ = write!(out, " - {}", item.description);
        }
        let _ = writeln!(out, " <{}>", item.url);
    }

    if view.total_count == 0 {
        out.push_str("No items match the current query.\n");
    } else {
        let _ = writeln!(
            out,
            "Showing {}-{} of {} items (page {} of {})",
            view.first_index, view.last_index, view.total_count, view.current_page, view.total_pages
        );
    }

    out
}
