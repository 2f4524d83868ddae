//! Terminal rendering host for the wizard.
//!
//! The host is a pure collaborator: it draws from controller snapshots
//! and forwards key presses as controller commands. All wizard rules
//! live on the other side of that boundary.

use std::io;

use chargen_catalog::ThemeColor;
use chargen_core::naming::{NAME_MAX_CHARS, NameVerdict};
use chargen_wizard::application::controller::{WizardController, WizardSignal};
use chargen_wizard::application::snapshot::WizardSnapshot;
use chargen_wizard::domain::composed::ComposedCharacter;
use chargen_wizard::domain::events::WizardStep;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Runs the host until the user quits; returns the last composed hero.
pub fn run(controller: WizardController) -> io::Result<Option<ComposedCharacter>> {
    let mut terminal = ratatui::init();
    let mut app = HostApp::new(controller);
    let result = app.run(&mut terminal);
    ratatui::restore();
    result.map(|()| app.selected)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Landing,
    Wizard,
}

struct HostApp {
    controller: WizardController,
    screen: Screen,
    selected: Option<ComposedCharacter>,
    archetype_cursor: usize,
    appearance_cursor: usize,
    should_quit: bool,
}

/// Moves a list cursor by one position with wrap-around.
fn cycle(current: usize, forward: bool, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

fn theme_color(theme: ThemeColor) -> Color {
    match theme {
        ThemeColor::Red => Color::Red,
        ThemeColor::Blue => Color::Blue,
        ThemeColor::Purple => Color::Magenta,
        ThemeColor::Green => Color::Green,
        ThemeColor::Gold | ThemeColor::Amber => Color::Yellow,
        ThemeColor::Teal => Color::Cyan,
        ThemeColor::Orange => Color::LightRed,
        ThemeColor::Pink => Color::LightMagenta,
        ThemeColor::Emerald => Color::LightGreen,
        ThemeColor::Indigo => Color::LightBlue,
    }
}

fn verdict_text(verdict: NameVerdict) -> &'static str {
    match verdict {
        NameVerdict::Blank => "Character name cannot be blank",
        NameVerdict::TooShort => "Name must be at least 2 characters",
        NameVerdict::Valid => "Valid name",
    }
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

impl HostApp {
    fn new(controller: WizardController) -> Self {
        Self {
            controller,
            screen: Screen::Landing,
            selected: None,
            archetype_cursor: 0,
            appearance_cursor: 0,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    // --- input -----------------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Landing => self.handle_landing_key(key),
            Screen::Wizard => self.handle_wizard_key(key),
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                self.controller.open();
                self.archetype_cursor = 0;
                self.appearance_cursor = 0;
                self.screen = Screen::Wizard;
            }
            KeyCode::Char('c') => self.selected = None,
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        let snapshot = self.controller.snapshot();
        let signal = match snapshot.step {
            WizardStep::Type => self.handle_type_key(key),
            WizardStep::Appearance => self.handle_appearance_key(key, &snapshot),
            WizardStep::Naming => self.handle_naming_key(key, &snapshot),
        };
        match signal {
            WizardSignal::None => {}
            WizardSignal::Closed => self.screen = Screen::Landing,
            WizardSignal::Composed(character) => {
                self.selected = Some(character);
                self.screen = Screen::Landing;
            }
        }
    }

    fn handle_type_key(&mut self, key: KeyEvent) -> WizardSignal {
        let count = self.controller.catalog().archetypes().len();
        match key.code {
            KeyCode::Esc => self.controller.cancel(),
            KeyCode::Up | KeyCode::Left => {
                self.archetype_cursor = cycle(self.archetype_cursor, false, count);
                WizardSignal::None
            }
            KeyCode::Down | KeyCode::Right => {
                self.archetype_cursor = cycle(self.archetype_cursor, true, count);
                WizardSignal::None
            }
            KeyCode::Enter => {
                let id = self.controller.catalog().archetypes()[self.archetype_cursor]
                    .id
                    .clone();
                self.appearance_cursor = 0;
                self.controller.select_archetype(&id)
            }
            _ => WizardSignal::None,
        }
    }

    fn handle_appearance_key(&mut self, key: KeyEvent, snapshot: &WizardSnapshot) -> WizardSignal {
        let Some(archetype) = &snapshot.archetype else {
            // Unreachable through the wizard itself; fall back to the
            // landing screen rather than draw a broken step.
            return self.controller.cancel();
        };
        let count = archetype.appearances.len();
        match key.code {
            KeyCode::Esc => self.controller.go_back(),
            KeyCode::Up | KeyCode::Left => {
                self.appearance_cursor = cycle(self.appearance_cursor, false, count);
                WizardSignal::None
            }
            KeyCode::Down | KeyCode::Right => {
                self.appearance_cursor = cycle(self.appearance_cursor, true, count);
                WizardSignal::None
            }
            KeyCode::Enter => {
                let id = archetype.appearances[self.appearance_cursor].id.clone();
                self.controller.select_appearance(&id)
            }
            _ => WizardSignal::None,
        }
    }

    fn handle_naming_key(&mut self, key: KeyEvent, snapshot: &WizardSnapshot) -> WizardSignal {
        match key.code {
            KeyCode::Esc => self.controller.go_back(),
            KeyCode::Enter => self.controller.confirm(),
            KeyCode::Backspace => {
                let mut name = snapshot.name.clone();
                name.pop();
                self.controller.set_name(&name)
            }
            KeyCode::Char(c) => {
                let mut name = snapshot.name.clone();
                name.push(c);
                self.controller.set_name(&name)
            }
            _ => WizardSignal::None,
        }
    }

    // --- rendering -------------------------------------------------------

    fn draw(&self, frame: &mut Frame) {
        match self.screen {
            Screen::Landing => self.draw_landing(frame, frame.area()),
            Screen::Wizard => self.draw_wizard(frame, frame.area()),
        }
    }

    fn draw_landing(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        let header = Paragraph::new(vec![
            Line::styled(
                "DUNGEONS & REPOS",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled("A mysterious journey awaits", dim()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, rows[0]);

        let body = match &self.selected {
            Some(character) => hero_card(character),
            None => Paragraph::new(vec![
                Line::raw(""),
                Line::raw("No hero chosen"),
                Line::styled("Select your mysterious companion", dim()),
            ])
            .alignment(Alignment::Center),
        };
        frame.render_widget(body, rows[1]);

        let hint = if self.selected.is_some() {
            "Enter change hero · c clear · q quit"
        } else {
            "Enter select hero · q quit"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, dim())).alignment(Alignment::Center),
            rows[2],
        );
    }

    fn draw_wizard(&self, frame: &mut Frame, area: Rect) {
        let snapshot = self.controller.snapshot();
        let rows = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(progress_line(snapshot.step)).alignment(Alignment::Center),
            rows[0],
        );

        match snapshot.step {
            WizardStep::Type => self.draw_type_step(frame, rows[1]),
            WizardStep::Appearance => self.draw_appearance_step(frame, rows[1], &snapshot),
            WizardStep::Naming => Self::draw_naming_step(frame, rows[1], &snapshot),
        }

        let hint = match snapshot.step {
            WizardStep::Type => "↑↓ choose · Enter next · Esc cancel",
            WizardStep::Appearance => "↑↓ choose · Enter next · Esc back",
            WizardStep::Naming => "type to edit · Enter confirm · Esc back",
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, dim())).alignment(Alignment::Center),
            rows[2],
        );
    }

    fn draw_type_step(&self, frame: &mut Frame, area: Rect) {
        let archetypes = self.controller.catalog().archetypes();
        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(6)]).split(area);

        let mut lines = vec![
            Line::raw("Select your mysterious hero"),
            Line::raw(""),
        ];
        for (index, archetype) in archetypes.iter().enumerate() {
            let marker = if index == self.archetype_cursor {
                "▸ "
            } else {
                "  "
            };
            let mut style = Style::default().fg(theme_color(archetype.theme));
            if index == self.archetype_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{} {}", archetype.icon, archetype.class_label),
                    style,
                ),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), rows[0]);

        if let Some(archetype) = archetypes.get(self.archetype_cursor) {
            let attributes = archetype.attributes;
            let detail = Paragraph::new(vec![
                Line::raw(archetype.description.clone()),
                Line::raw(""),
                Line::styled(
                    format!(
                        "STR {}  AGI {}  INT {}  WIS {}  CHA {}",
                        attributes.strength,
                        attributes.agility,
                        attributes.intelligence,
                        attributes.wisdom,
                        attributes.charisma
                    ),
                    dim(),
                ),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(archetype.display_name.clone()));
            frame.render_widget(detail, rows[1]);
        }
    }

    fn draw_appearance_step(&self, frame: &mut Frame, area: Rect, snapshot: &WizardSnapshot) {
        let Some(archetype) = &snapshot.archetype else {
            return;
        };
        let mut lines = vec![
            Line::raw(format!(
                "Choose the visual style for your {}",
                archetype.class_label
            )),
            Line::raw(""),
        ];
        for (index, appearance) in archetype.appearances.iter().enumerate() {
            let marker = if index == self.appearance_cursor {
                "▸ "
            } else {
                "  "
            };
            let mut style = Style::default();
            if index == self.appearance_cursor {
                style = style
                    .fg(theme_color(archetype.theme))
                    .add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(appearance.display_name.clone(), style),
            ]));
            lines.push(Line::styled(format!("    {}", appearance.image_ref), dim()));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_naming_step(frame: &mut Frame, area: Rect, snapshot: &WizardSnapshot) {
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

        let input = Paragraph::new(Line::raw(format!("{}▏", snapshot.name)))
            .block(Block::bordered().title("Character name"));
        frame.render_widget(input, rows[0]);

        let verdict_style = if snapshot.name_verdict == NameVerdict::Valid {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Red)
        };
        let status = Paragraph::new(Line::from(vec![
            Span::styled(verdict_text(snapshot.name_verdict), verdict_style),
            Span::styled(
                format!("   {}/{NAME_MAX_CHARS}", snapshot.name.chars().count()),
                dim(),
            ),
        ]));
        frame.render_widget(status, rows[1]);

        if let (Some(archetype), Some(appearance)) = (&snapshot.archetype, &snapshot.appearance) {
            let preview = Paragraph::new(vec![
                Line::raw(snapshot.name.trim().to_owned()),
                Line::styled(
                    format!("{} — {}", archetype.class_label, appearance.display_name),
                    dim(),
                ),
            ])
            .block(Block::bordered().title("Preview"));
            frame.render_widget(preview, rows[2]);
        }
    }
}

fn progress_line(step: WizardStep) -> Line<'static> {
    let labels = [
        (WizardStep::Type, "Type"),
        (WizardStep::Appearance, "Appearance"),
        (WizardStep::Naming, "Name"),
    ];
    let mut spans = Vec::new();
    for (index, (label_step, label)) in labels.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" • ", dim()));
        }
        if label_step == step {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, dim()));
        }
    }
    Line::from(spans)
}

fn hero_card(character: &ComposedCharacter) -> Paragraph<'_> {
    let accent = Style::default()
        .fg(theme_color(character.theme))
        .add_modifier(Modifier::BOLD);
    Paragraph::new(vec![
        Line::from(vec![Span::styled(
            format!("{} {}", character.icon, character.custom_name),
            accent,
        )]),
        Line::styled(
            format!("{} — {}", character.class_label, character.appearance.display_name),
            dim(),
        ),
        Line::raw(""),
        Line::raw(character.description.clone()),
        Line::raw(""),
        Line::styled(
            format!(
                "STR {}  AGI {}  INT {}  WIS {}  CHA {}",
                character.attributes.strength,
                character.attributes.agility,
                character.attributes.intelligence,
                character.attributes.wisdom,
                character.attributes.charisma
            ),
            dim(),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::bordered().title("Your hero"))
}
