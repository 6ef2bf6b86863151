use crate::core::branch::BranchRecord;
use crate::core::git::GitOperations;
use crate::ui::session::{InteractiveSession, SessionState, StatusMessage};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub const FOOTER_TEXT: &str = "d: delete branch • q: quit";

const CURSOR_WIDTH: u16 = 2;
const NAME_WIDTH: u16 = 40;
const AUTHOR_WIDTH: u16 = 24;
const MERGED_WIDTH: u16 = 8;
const AGE_WIDTH: u16 = 10;

const COLOR_HEADER: Color = Color::Rgb(156, 163, 175);
const COLOR_TEXT: Color = Color::Rgb(229, 231, 235);
const COLOR_SELECTED_BG: Color = Color::Rgb(30, 41, 59);
const COLOR_GREEN: Color = Color::Rgb(34, 197, 94);
const COLOR_RED: Color = Color::Rgb(239, 68, 68);
const COLOR_DIM: Color = Color::Rgb(107, 114, 128);

/// Draws one frame. `table_state` keeps its scroll offset across frames so the
/// cursor row stays on screen when the list is taller than the viewport.
pub fn render<G: GitOperations + ?Sized>(
    f: &mut Frame,
    session: &InteractiveSession<G>,
    table_state: &mut TableState,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, layout[0], session.branches().len());
    if session.state() == SessionState::Empty {
        table_state.select(None);
        render_empty(f, layout[1]);
    } else {
        table_state.select(Some(session.cursor()));
        render_table(f, layout[1], session.branches(), table_state);
    }
    render_status(f, layout[2], session.status());
    render_footer(f, layout[3]);
}

fn render_header(f: &mut Frame, area: Rect, count: usize) {
    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Local branches",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", count), Style::default().fg(COLOR_HEADER)),
    ])]);
    f.render_widget(header, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let message = Paragraph::new("No branches left.").style(Style::default().fg(COLOR_DIM));
    f.render_widget(message, area);
}

fn render_table(f: &mut Frame, area: Rect, branches: &[BranchRecord], state: &mut TableState) {
    let cursor = state.selected().unwrap_or(0);
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Branch"),
        Cell::from("Author"),
        Cell::from("Merged"),
        Cell::from("Age"),
    ])
    .style(
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = branches
        .iter()
        .enumerate()
        .map(|(i, branch)| branch_row(branch, i == cursor))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(CURSOR_WIDTH),
            Constraint::Length(NAME_WIDTH),
            Constraint::Length(AUTHOR_WIDTH),
            Constraint::Length(MERGED_WIDTH),
            Constraint::Length(AGE_WIDTH),
        ],
    )
    .header(header)
    .column_spacing(1);

    f.render_stateful_widget(table, area, state);
}

fn branch_row(branch: &BranchRecord, selected: bool) -> Row<'static> {
    let style = if selected {
        Style::default()
            .bg(COLOR_SELECTED_BG)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT)
    };

    let merged_color = if branch.merged { COLOR_GREEN } else { COLOR_DIM };

    Row::new(vec![
        Cell::from(if selected { ">" } else { " " }),
        Cell::from(truncate(&branch.name, NAME_WIDTH as usize)),
        Cell::from(truncate(&branch.author, AUTHOR_WIDTH as usize)),
        Cell::from(if branch.merged { "yes" } else { "no" })
            .style(Style::default().fg(merged_color)),
        Cell::from(format!("{} days", branch.age_days)),
    ])
    .style(style)
}

fn render_status(f: &mut Frame, area: Rect, status: Option<&StatusMessage>) {
    let line = match status {
        Some(StatusMessage::Deleted(name)) => Line::from(Span::styled(
            format!("deleted {} branch", name),
            Style::default().fg(COLOR_GREEN),
        )),
        Some(StatusMessage::Error(message)) => Line::from(Span::styled(
            format!("error: {}", message),
            Style::default().fg(COLOR_RED),
        )),
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT).style(Style::default().fg(COLOR_DIM));
    f.render_widget(footer, area);
}

/// Cuts `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExhaustionPolicy;
    use crate::test_utils::test_helpers::{record, FakeFailure, FakeGit};
    use crate::ui::session::SessionEvent;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw<G: GitOperations>(session: &InteractiveSession<G>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        let mut table_state = TableState::default();
        terminal
            .draw(|f| render(f, session, &mut table_state))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_rows_with_cursor_marker() {
        let fake = FakeGit::new();
        let mut session = InteractiveSession::new(
            vec![record("feature/a", 12, true), record("feature/b", 3, false)],
            &fake,
            ExhaustionPolicy::Quit,
        );
        session.handle(SessionEvent::MoveDown);

        let screen = draw(&session);
        let lines: Vec<&str> = screen.lines().collect();

        let row_a = lines.iter().find(|l| l.contains("feature/a")).unwrap();
        let row_b = lines.iter().find(|l| l.contains("feature/b")).unwrap();
        assert!(row_a.starts_with("  "));
        assert!(row_b.starts_with("> "));
        assert!(row_a.contains("12 days"));
        assert!(row_a.contains("yes"));
        assert!(row_b.contains("no"));
        assert!(screen.contains(FOOTER_TEXT));
    }

    #[test]
    fn test_renders_inline_error() {
        let lines = ["wip|Jane|2024-05-01 12:00:00 +0000|"];
        let fake = FakeGit::with_refs(&lines).failing_on("wip", FakeFailure::Unmerged);
        let mut session =
            InteractiveSession::new(vec![record("wip", 40, false)], &fake, ExhaustionPolicy::Quit);
        session.handle(SessionEvent::DeleteCurrent);

        let screen = draw(&session);
        assert!(screen.contains("error: Branch 'wip' has unmerged commits"));
        assert!(screen.contains("wip"));
    }

    #[test]
    fn test_renders_empty_state() {
        let fake = FakeGit::new();
        let session = InteractiveSession::new(Vec::new(), &fake, ExhaustionPolicy::Stay);

        let screen = draw(&session);
        assert!(screen.contains("No branches left."));
        assert!(screen.contains(FOOTER_TEXT));
    }

    #[test]
    fn test_cursor_row_stays_visible_in_long_list() {
        let fake = FakeGit::new();
        let records: Vec<BranchRecord> = (0..20)
            .map(|i| record(&format!("branch-{:02}", i), 40, true))
            .collect();
        let mut session = InteractiveSession::new(records, &fake, ExhaustionPolicy::Quit);
        for _ in 0..15 {
            session.handle(SessionEvent::MoveDown);
        }
        assert_eq!(session.cursor(), 15);

        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        let mut table_state = TableState::default();
        terminal
            .draw(|f| render(f, &session, &mut table_state))
            .unwrap();
        let screen = buffer_text(terminal.backend().buffer());

        let cursor_row = screen
            .lines()
            .find(|l| l.starts_with("> "))
            .expect("cursor row should be drawn");
        assert!(cursor_row.contains("branch-15"), "screen:\n{}", screen);
        assert!(!screen.contains("branch-00"));
        assert_eq!(table_state.selected(), Some(15));

        for _ in 0..4 {
            session.handle(SessionEvent::MoveDown);
        }
        terminal
            .draw(|f| render(f, &session, &mut table_state))
            .unwrap();
        let screen = buffer_text(terminal.backend().buffer());
        let cursor_row = screen.lines().find(|l| l.starts_with("> ")).unwrap();
        assert!(cursor_row.contains("branch-19"));
    }

    #[test]
    fn test_empty_state_clears_selection() {
        let fake = FakeGit::new();
        let session = InteractiveSession::new(Vec::new(), &fake, ExhaustionPolicy::Stay);
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        let mut table_state = TableState::default().with_selected(Some(3));

        terminal
            .draw(|f| render(f, &session, &mut table_state))
            .unwrap();

        assert_eq!(table_state.selected(), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly-10", 10), "exactly-10");
        assert_eq!(truncate("much-longer-name", 8), "much-lo…");
    }
}
