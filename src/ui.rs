use crate::calendar::{QuarterEngine, QuarterStep, TaskSummary, WeekCell};
use crate::model::{Plan, Task};
use crate::storage::PlanLocation;
use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Alignment, Color, Modifier, Rect, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

const HIGHLIGHT_BG: Color = Color::Rgb(96, 142, 232);
const PLAIN_BG: Color = Color::Rgb(34, 40, 56);

pub fn run(plan: Plan, location: PlanLocation) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(plan, location);
    let result = app.event_loop(&mut terminal);
    teardown_terminal(&mut terminal)?;
    result
}

struct App {
    plan: Plan,
    location: PlanLocation,
    engine: QuarterEngine,
    selected_task: usize,
    task_offset: usize,
    week_cursor: usize,
    focus: Focus,
    last_save: Instant,
    status: String,
    mode: Mode,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Focus {
    Tasks,
    Grid,
}

enum Mode {
    Normal,
    Creating(TaskForm),
    Editing { task_name: String, form: TaskForm },
    ConfirmDelete { task_name: String },
}

struct TaskForm {
    name: FieldValue,
    start: FieldValue,
    end: FieldValue,
    field: FormField,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum FormField {
    Name,
    Start,
    End,
}

enum FormAction {
    Create,
    Edit(String),
}

#[derive(Clone)]
struct FieldValue {
    value: String,
    cursor: usize,
}

impl FieldValue {
    fn new(value: &str) -> Self {
        FieldValue {
            value: value.to_string(),
            cursor: value.len(),
        }
    }

    fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor = prev_grapheme(self.cursor, &self.value);
    }

    fn move_right(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        self.cursor = next_grapheme(self.cursor, &self.value);
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_grapheme(self.cursor, &self.value);
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
    }

    fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn with_caret(&self) -> String {
        let mut text = self.value.clone();
        text.insert_str(self.cursor, "▌");
        text
    }
}

impl App {
    fn new(plan: Plan, location: PlanLocation) -> Self {
        let status = format!("Loaded plan from {}", location.path.display());
        let mut engine = QuarterEngine::new();
        engine.initialize(Utc::now().date_naive());
        App {
            plan,
            location,
            engine,
            selected_task: 0,
            task_offset: 0,
            week_cursor: 0,
            focus: Focus::Tasks,
            last_save: Instant::now(),
            status,
            mode: Mode::Normal,
        }
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;
            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Creating(_) | Mode::Editing { .. } => self.handle_form_key(key),
            Mode::ConfirmDelete { .. } => self.handle_confirm_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('n') => {
                self.mode = Mode::Creating(TaskForm::new());
                self.status =
                    "Creating new task (Tab/Shift-Tab move, Enter save, Esc cancel)".into();
                return Ok(false);
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.current_task() {
                    let name = task.name.clone();
                    let form = TaskForm::from_task(task);
                    self.mode = Mode::Editing {
                        task_name: name.clone(),
                        form,
                    };
                    self.status = format!("Editing {}", name);
                } else {
                    self.status = "No task selected to edit".into();
                }
                return Ok(false);
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.current_task() {
                    let name = task.name.clone();
                    self.mode = Mode::ConfirmDelete {
                        task_name: name.clone(),
                    };
                    self.status = format!("Delete {}? (y to confirm, n/Esc to cancel)", name);
                } else {
                    self.status = "No task selected to delete".into();
                }
                return Ok(false);
            }
            KeyCode::Char('[') => {
                self.advance(QuarterStep::Back);
                return Ok(false);
            }
            KeyCode::Char(']') => {
                self.advance(QuarterStep::Forward);
                return Ok(false);
            }
            KeyCode::Char('t') => {
                self.engine.initialize(Utc::now().date_naive());
                self.week_cursor = 0;
                self.status = self.quarter_status();
                return Ok(false);
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Tasks => Focus::Grid,
                    Focus::Grid => Focus::Tasks,
                };
                return Ok(false);
            }
            _ => {}
        }

        match self.focus {
            Focus::Tasks => self.handle_task_key(key),
            Focus::Grid => self.handle_grid_key(key),
        }
    }

    fn handle_task_key(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_task > 0 {
                    self.selected_task -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_task + 1 < self.plan.tasks.len() {
                    self.selected_task += 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => self.focus = Focus::Grid,
            _ => {}
        }
        Ok(false)
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> Result<bool> {
        let weeks = self.engine.weeks_in_quarter() as usize;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if self.week_cursor > 0 {
                    self.week_cursor -= 1;
                } else {
                    self.focus = Focus::Tasks;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.week_cursor + 1 < weeks {
                    self.week_cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_task > 0 {
                    self.selected_task -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_task + 1 < self.plan.tasks.len() {
                    self.selected_task += 1;
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<bool> {
        let mut close_form = false;
        let mut mode = std::mem::replace(&mut self.mode, Mode::Normal);
        match &mut mode {
            Mode::Creating(form) => {
                close_form = self.process_form_key(FormAction::Create, form, key)?;
            }
            Mode::Editing { task_name, form } => {
                let name = task_name.clone();
                close_form = self.process_form_key(FormAction::Edit(name), form, key)?;
            }
            Mode::ConfirmDelete { .. } | Mode::Normal => {}
        }
        self.mode = if close_form { Mode::Normal } else { mode };
        Ok(false)
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Result<bool> {
        let task_name = match &self.mode {
            Mode::ConfirmDelete { task_name } => task_name.clone(),
            _ => return Ok(false),
        };
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                match self.plan.remove_task(&task_name) {
                    Ok(_) => {
                        self.selected_task = self
                            .selected_task
                            .min(self.plan.tasks.len().saturating_sub(1));
                        self.persist(format!("Deleted {}", task_name))?;
                    }
                    Err(err) => self.status = format!("Delete failed: {}", err),
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.status = "Delete canceled".into();
                self.mode = Mode::Normal;
            }
            _ => {}
        }
        Ok(false)
    }

    fn process_form_key(
        &mut self,
        action: FormAction,
        form: &mut TaskForm,
        key: KeyEvent,
    ) -> Result<bool> {
        let mut close_form = false;
        match key.code {
            KeyCode::Esc => {
                close_form = true;
                self.status = "Canceled".into();
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left => form.active_field_mut().move_left(),
            KeyCode::Right => form.active_field_mut().move_right(),
            KeyCode::Enter => {
                close_form = self.try_submit(action, form)?;
            }
            KeyCode::Backspace => form.active_field_mut().backspace(),
            KeyCode::Char(c) => {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    form.active_field_mut().insert_char(c);
                }
            }
            _ => {}
        }
        Ok(close_form)
    }

    fn try_submit(&mut self, action: FormAction, form: &mut TaskForm) -> Result<bool> {
        let result = match action {
            FormAction::Create => self.create_task_from_form(form),
            FormAction::Edit(ref task_name) => self.edit_task_from_form(task_name, form),
        };
        match result {
            Ok(()) => Ok(true),
            Err(err) => {
                self.status = format!("Could not save: {}", err);
                Ok(false)
            }
        }
    }

    fn create_task_from_form(&mut self, form: &TaskForm) -> Result<()> {
        let task = form.to_task()?;
        let name = task.name.clone();
        self.plan.add_task(task)?;
        self.selected_task = self.plan.tasks.len().saturating_sub(1);
        self.persist(format!("Created task {}", name))?;
        Ok(())
    }

    fn edit_task_from_form(&mut self, task_name: &str, form: &TaskForm) -> Result<()> {
        let task = form.to_task()?;
        let name = task.name.clone();
        self.plan.replace_task(task_name, task)?;
        self.persist(format!("Updated {}", name))?;
        Ok(())
    }

    fn advance(&mut self, step: QuarterStep) {
        self.engine.advance_quarter(step);
        let weeks = self.engine.weeks_in_quarter() as usize;
        self.week_cursor = self.week_cursor.min(weeks.saturating_sub(1));
        self.status = self.quarter_status();
    }

    fn quarter_status(&self) -> String {
        match self.engine.state() {
            Some(state) => format!("Showing Quarter {}, {}", state.quarter, state.year),
            None => "No quarter selected".into(),
        }
    }

    fn current_task(&self) -> Option<&Task> {
        self.plan.tasks.get(self.selected_task)
    }

    fn cursor_summary(&self) -> Option<TaskSummary> {
        let task = self.current_task()?;
        let cells = self.engine.task_highlights(task);
        match cells.get(self.week_cursor) {
            Some(WeekCell::Highlight(summary)) => Some(summary.clone()),
            _ => None,
        }
    }

    fn persist(&mut self, message: impl Into<String>) -> Result<()> {
        self.location.save(&self.plan)?;
        self.last_save = Instant::now();
        self.status = message.into();
        Ok(())
    }

    fn draw(&mut self, f: &mut ratatui::Frame<'_>) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(4),
            ])
            .split(f.size());

        self.draw_header(f, layout[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
            .split(layout[1]);
        self.draw_task_list(f, body[0]);
        self.draw_grid(f, body[1]);

        self.draw_footer(f, layout[2]);

        match &self.mode {
            Mode::Creating(form) => self.draw_form(f, "New Task", form),
            Mode::Editing { form, .. } => self.draw_form(f, "Edit Task", form),
            Mode::ConfirmDelete { task_name } => self.draw_confirm(f, task_name),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let scope = self.location.scope.label();
        let quarter = match self.engine.state() {
            Some(state) => format!("Quarter {}, {}", state.quarter, state.year),
            None => "—".to_string(),
        };
        let title = Line::from(vec![
            Span::styled(
                "quarterly ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                &self.plan.name,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  •  "),
            Span::styled(scope, Style::default().fg(Color::Green)),
            Span::raw("  •  "),
            Span::styled(quarter, Style::default().fg(Color::Yellow)),
            Span::raw("  •  "),
            Span::styled(
                format!("saved {}", format_elapsed(self.last_save)),
                Style::default().fg(Color::Gray),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
    }

    fn draw_task_list(&mut self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let focused = self.focus == Focus::Tasks;
        let viewport = area.height.saturating_sub(2) as usize;
        let len = self.plan.tasks.len();
        self.selected_task = self.selected_task.min(len.saturating_sub(1));
        self.task_offset = adjust_offset(self.selected_task, self.task_offset, viewport, 1, len);

        let mut state = ListState::default();
        *state.offset_mut() = self.task_offset;
        if !self.plan.tasks.is_empty() {
            state.select(Some(self.selected_task));
        }

        let items = if self.plan.tasks.is_empty() {
            vec![ListItem::new("No tasks yet — press n to add one")]
        } else {
            self.plan
                .tasks
                .iter()
                .map(|task| task_list_item(task, area.width.saturating_sub(4) as usize))
                .collect()
        };

        let block = Block::default()
            .title(Span::styled(
                format!("Tasks ({})", len),
                Style::default()
                    .fg(if focused { Color::Cyan } else { Color::Gray })
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                Color::Cyan
            } else {
                Color::DarkGray
            }));
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::LightCyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
        f.render_stateful_widget(list, area, &mut state);
    }

    fn draw_grid(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let focused = self.focus == Focus::Grid;
        let columns = self.engine.grid_columns().count as usize;
        let inner_width = area.width.saturating_sub(2) as usize;
        let cell_width = (inner_width / columns.max(1)).max(2);

        let mut lines = Vec::new();
        lines.push(self.month_header_line(cell_width));
        lines.push(self.week_number_line(cell_width, focused));
        lines.push(Line::raw(""));
        for (idx, task) in self.plan.tasks.iter().enumerate() {
            lines.push(self.task_cell_line(task, cell_width, idx == self.selected_task));
        }
        if self.plan.tasks.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing scheduled this quarter",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let block = Block::default()
            .title(Span::styled(
                "Quarter Grid  ([ prev  ] next  t today)",
                Style::default()
                    .fg(if focused { Color::Cyan } else { Color::Gray })
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                Color::Cyan
            } else {
                Color::DarkGray
            }));
        let paragraph = Paragraph::new(lines).block(block);
        f.render_widget(paragraph, area);
    }

    fn month_header_line(&self, cell_width: usize) -> Line<'static> {
        let mut spans = Vec::new();
        for segment in self.engine.month_segments() {
            let width = segment.span as usize * cell_width;
            spans.push(Span::styled(
                format!("{:^width$}", truncate_text(segment.label, width)),
                Style::default()
                    .bg(HIGHLIGHT_BG)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }

    fn week_number_line(&self, cell_width: usize, focused: bool) -> Line<'static> {
        let mut spans = Vec::new();
        for (idx, label) in self.engine.week_labels().into_iter().enumerate() {
            let mut style = Style::default().bg(PLAIN_BG).fg(Color::Gray);
            if idx == self.week_cursor {
                style = Style::default()
                    .bg(if focused { Color::Cyan } else { Color::Blue })
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{:^cell_width$}", label), style));
        }
        Line::from(spans)
    }

    fn task_cell_line(&self, task: &Task, cell_width: usize, selected: bool) -> Line<'static> {
        let mut spans = Vec::new();
        for (idx, cell) in self.engine.task_highlights(task).into_iter().enumerate() {
            let mut style = match cell {
                WeekCell::Highlight(_) => Style::default().bg(HIGHLIGHT_BG),
                WeekCell::Plain => Style::default().bg(PLAIN_BG),
            };
            if selected && idx == self.week_cursor && self.focus == Focus::Grid {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(" ".repeat(cell_width), style));
        }
        Line::from(spans)
    }

    fn draw_footer(&self, f: &mut ratatui::Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(area);

        let help_bar = Paragraph::new(self.footer_help_line())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(help_bar, rows[0]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let status = Paragraph::new(self.status.clone())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(status, bottom[0]);

        let (detail_lines, title) = self.detail_content();
        let detail = Paragraph::new(detail_lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(title),
            );
        f.render_widget(detail, bottom[1]);
    }

    fn footer_help_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("Tab", Style::default().fg(Color::LightCyan)),
            Span::raw(" focus  "),
            Span::styled("[ ]", Style::default().fg(Color::LightGreen)),
            Span::raw(" quarter  "),
            Span::styled("t", Style::default().fg(Color::LightGreen)),
            Span::raw(" today  "),
        ];
        match self.focus {
            Focus::Tasks => spans.extend([
                Span::styled("↑↓ / j k", Style::default().fg(Color::LightCyan)),
                Span::raw(" select  "),
            ]),
            Focus::Grid => spans.extend([
                Span::styled("←→ / h l", Style::default().fg(Color::LightCyan)),
                Span::raw(" week  "),
            ]),
        }
        spans.extend([
            Span::styled("n", Style::default().fg(Color::LightMagenta)),
            Span::raw(" new  "),
            Span::styled("e", Style::default().fg(Color::LightYellow)),
            Span::raw(" edit  "),
            Span::styled("d", Style::default().fg(Color::LightRed)),
            Span::raw(" delete  "),
            Span::styled("q", Style::default().fg(Color::LightRed)),
            Span::raw(" quit"),
        ]);
        Line::from(spans)
    }

    fn detail_content(&self) -> (Vec<Line<'static>>, String) {
        if self.focus == Focus::Grid {
            if let Some(summary) = self.cursor_summary() {
                let lines = vec![
                    Line::from(Span::styled(
                        summary.name,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!(
                        "Start date: {}  End date: {}",
                        summary.start, summary.end
                    )),
                ];
                return (lines, "Week".into());
            }
            if let Some(label) = self.engine.week_labels().get(self.week_cursor).copied() {
                return (
                    vec![Line::from(format!("Week {} — nothing scheduled", label))],
                    "Week".into(),
                );
            }
        }
        if let Some(task) = self.current_task() {
            (vec![selected_task_detail(task)], "Selected".into())
        } else {
            (vec![Line::from("No task selected")], "Selected".into())
        }
    }

    fn draw_form(&self, f: &mut ratatui::Frame<'_>, title: &str, form: &TaskForm) {
        let area = centered_rect(60, 40, f.size());
        let mut fields = Vec::new();
        fields.extend(field_lines(
            "Name",
            &form.name,
            form.field == FormField::Name,
        ));
        fields.extend(field_lines(
            "Start (YYYY-MM-DD)",
            &form.start,
            form.field == FormField::Start,
        ));
        fields.extend(field_lines(
            "End (YYYY-MM-DD)",
            &form.end,
            form.field == FormField::End,
        ));
        fields.push(Line::from(Span::styled(
            "Enter to save • Esc to cancel • Tab/Shift-Tab to move",
            Style::default().fg(Color::Gray),
        )));
        let dialog = Paragraph::new(fields)
            .block(
                Block::default()
                    .title(Span::styled(
                        title,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, area);
        f.render_widget(dialog, area);
    }

    fn draw_confirm(&self, f: &mut ratatui::Frame<'_>, task_name: &str) {
        let area = centered_rect(50, 30, f.size());
        let body = vec![
            Line::from(Span::styled(
                format!("Delete \"{}\"?", task_name),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press y to confirm, n or Esc to cancel"),
        ];
        let dialog = Paragraph::new(body).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled(
                    "Confirm Delete",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightRed)),
        );
        f.render_widget(Clear, area);
        f.render_widget(dialog, area);
    }
}

impl TaskForm {
    fn new() -> Self {
        TaskForm {
            name: FieldValue::new(""),
            start: FieldValue::new(""),
            end: FieldValue::new(""),
            field: FormField::Name,
        }
    }

    fn from_task(task: &Task) -> Self {
        TaskForm {
            name: FieldValue::new(&task.name),
            start: FieldValue::new(&task.start_date.format("%Y-%m-%d").to_string()),
            end: FieldValue::new(&task.end_date.format("%Y-%m-%d").to_string()),
            field: FormField::Name,
        }
    }

    fn to_task(&self) -> Result<Task> {
        let start = parse_form_date(&self.start.value)?;
        let end = parse_form_date(&self.end.value)?;
        Ok(Task::new(self.name.value.trim(), start, end)?)
    }

    fn next_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::Start,
            FormField::Start => FormField::End,
            FormField::End => FormField::Name,
        };
    }

    fn prev_field(&mut self) {
        self.field = match self.field {
            FormField::Name => FormField::End,
            FormField::Start => FormField::Name,
            FormField::End => FormField::Start,
        };
    }

    fn active_field_mut(&mut self) -> &mut FieldValue {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Start => &mut self.start,
            FormField::End => &mut self.end,
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

fn parse_form_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("both dates are required"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| anyhow!("invalid date, please use YYYY-MM-DD as date format: {}", trimmed))
}

fn adjust_offset(
    selected: usize,
    current_offset: usize,
    viewport: usize,
    scrolloff: usize,
    len: usize,
) -> usize {
    if viewport == 0 || len == 0 {
        return 0;
    }
    let max_offset = len.saturating_sub(viewport);
    let margin = scrolloff.min(viewport.saturating_sub(1));
    let mut offset = current_offset.min(max_offset);
    if selected < offset.saturating_add(margin) {
        offset = selected.saturating_sub(margin);
    } else {
        let upper = offset
            .saturating_add(viewport.saturating_sub(1))
            .saturating_sub(margin);
        if selected > upper {
            offset = selected.saturating_add(margin + 1).saturating_sub(viewport);
        }
    }
    offset.min(max_offset)
}

fn truncate_text(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.chars().count() >= max.saturating_sub(3) {
            out.push_str("...");
            break;
        }
        out.push(ch);
    }
    if out.chars().count() > max {
        out.truncate(max);
    }
    out
}

fn task_list_item(task: &Task, width: usize) -> ListItem<'static> {
    let mut spans = Vec::new();
    spans.push(Span::styled(
        truncate_text(&task.name, width.saturating_sub(24).max(8)),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!(
            "{} → {}",
            task.start_date.format("%d-%m-%Y"),
            task.end_date.format("%d-%m-%Y")
        ),
        Style::default().fg(Color::LightYellow),
    ));
    ListItem::new(Line::from(spans)).style(Style::default().fg(Color::Gray))
}

fn field_lines(label: &str, field: &FieldValue, active: bool) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD | Modifier::DIM);
    let value_style = Style::default().fg(if active { Color::Cyan } else { Color::White });
    let text = if active {
        field.with_caret()
    } else {
        field.value.clone()
    };
    vec![Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(text, value_style),
    ])]
}

fn selected_task_detail(task: &Task) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            task.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "{} → {}",
                task.start_date.format("%d-%m-%Y"),
                task.end_date.format("%d-%m-%Y")
            ),
            Style::default().fg(Color::LightRed),
        ),
    ])
}

fn format_elapsed(last: Instant) -> String {
    let secs = last.elapsed().as_secs();
    if secs < 60 {
        format!("{}s ago", secs)
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

fn prev_grapheme(cursor: usize, text: &str) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut prev = 0;
    for (idx, _) in text.char_indices() {
        if idx >= cursor {
            break;
        }
        prev = idx;
    }
    prev
}

fn next_grapheme(cursor: usize, text: &str) -> usize {
    for (idx, ch) in text.char_indices() {
        if idx > cursor {
            return idx;
        }
        if idx == cursor {
            return cursor + ch.len_utf8();
        }
    }
    text.len()
}
