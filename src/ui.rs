use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph, Tabs,
    },
    Frame,
};
use std::f64::consts::TAU;

use crate::{
    app::{App, Screen},
    calculation::Slice,
    error::MortgageError,
    format::{currency, group_thousands},
    mortgage::Field,
};

const PRINCIPAL_COLOR: Color = Color::Blue;
const INTEREST_COLOR: Color = Color::Yellow;

/// Draws the current screen. Fails when the app lost its mortgage provider.
pub fn ui(f: &mut Frame, app: &App) -> Result<(), MortgageError> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.size());

    render_tabs(f, app, chunks[0]);
    match app.screen {
        Screen::Calculator => render_calculator_screen(f, app, chunks[1])?,
        Screen::Dashboard => render_dashboard_screen(f, app, chunks[1])?,
    }
    render_help(f, app, chunks[2]);
    Ok(())
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = Screen::ALL.iter().map(|s| s.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(Span::styled(
                    "HomeEase",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        )
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn render_calculator_screen(f: &mut Frame, app: &App, area: Rect) -> Result<(), MortgageError> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    for field in Field::ALL {
        let focused = app.calculator.focus() == field;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = app.calculator.buffer(field);
        let content = if text.is_empty() && !focused {
            Span::styled(field.label(), Style::default().fg(Color::DarkGray))
        } else if focused {
            Span::styled(
                format!("{text}▏"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(text.to_string())
        };

        let input = Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label()),
        );
        f.render_widget(input, chunks[field.index()]);
    }

    let payment = app.calculator.monthly_payment(&app.context)?;
    let payment_text = vec![
        Line::from("Monthly Payment").style(Style::default().fg(Color::DarkGray)),
        Line::from(Span::styled(
            currency(payment, 2),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
    ];
    let payment_widget = Paragraph::new(payment_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(payment_widget, chunks[4]);
    Ok(())
}

fn render_dashboard_screen(f: &mut Frame, app: &App, area: Rect) -> Result<(), MortgageError> {
    let inputs = app.breakdown.inputs(&app.context)?;
    let figures = app.breakdown.figures(&app.context)?;
    let slices = app.breakdown.slices(&app.context)?;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)].as_ref())
        .split(area);

    let label = Style::default().add_modifier(Modifier::BOLD);
    let summary = vec![
        Line::from(vec![
            Span::styled("Property Price: ", label),
            Span::raw(format!("£{}", group_thousands(inputs.property_price))),
        ]),
        Line::from(vec![
            Span::styled("Deposit: ", label),
            Span::raw(format!("£{}", group_thousands(inputs.deposit))),
        ]),
        Line::from(vec![
            Span::styled("Term: ", label),
            Span::raw(format!("{} years", inputs.term_years)),
        ]),
        Line::from(vec![
            Span::styled("Interest Rate: ", label),
            Span::raw(format!("{:.2}%", inputs.interest_rate)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Monthly Payment: ", label),
            Span::styled(
                currency(figures.monthly_payment, 2),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total Paid: ", label),
            Span::raw(currency(figures.total_paid, 0)),
        ]),
        Line::from(vec![
            Span::styled("Total Interest Paid: ", label),
            Span::styled(
                currency(figures.total_interest, 0),
                Style::default().fg(INTEREST_COLOR),
            ),
        ]),
    ];
    let summary_widget = Paragraph::new(summary)
        .block(Block::default().borders(Borders::ALL).title("Mortgage Breakdown"));
    f.render_widget(summary_widget, chunks[0]);

    render_pie(f, &slices, chunks[1]);
    Ok(())
}

fn render_pie(f: &mut Frame, slices: &[Slice; 2], area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(area);

    let legend = Paragraph::new(vec![
        legend_line(&slices[0], PRINCIPAL_COLOR),
        legend_line(&slices[1], INTEREST_COLOR),
    ])
    .alignment(Alignment::Center);
    f.render_widget(legend, chunks[1]);

    let block = Block::default().borders(Borders::ALL).title("Principal vs Interest");
    let share = match principal_share(slices) {
        Some(share) => share,
        None => {
            let empty = Paragraph::new("Nothing to chart")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, chunks[0]);
            return;
        }
    };

    // Braille dots are roughly square, so widen the x range by the dot aspect.
    let inner = block.inner(chunks[0]);
    let aspect = if inner.height == 0 {
        1.0
    } else {
        (inner.width as f64 * 2.0) / (inner.height as f64 * 4.0)
    };
    let (principal, interest) = pie_points(share, 0.02);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-1.1 * aspect, 1.1 * aspect])
        .y_bounds([-1.1, 1.1])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &principal,
                color: PRINCIPAL_COLOR,
            });
            ctx.draw(&Points {
                coords: &interest,
                color: INTEREST_COLOR,
            });
        });
    f.render_widget(canvas, chunks[0]);
}

fn legend_line(slice: &Slice, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::raw(format!("{}: {}", slice.name, currency(slice.value, 0))),
    ])
}

/// Fraction of the pie taken by principal, `None` when there is nothing to draw.
pub fn principal_share(slices: &[Slice; 2]) -> Option<f64> {
    let principal = slices[0].value.max(0.0);
    let interest = slices[1].value.max(0.0);
    let total = principal + interest;
    if total > 0.0 {
        Some(principal / total)
    } else {
        None
    }
}

/// Samples a unit disc on a square grid and splits the points into two
/// sectors. The principal sector starts at twelve o'clock and runs clockwise.
pub fn pie_points(share: f64, step: f64) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let mut principal = Vec::new();
    let mut interest = Vec::new();
    let steps = (2.0 / step).round() as i64;

    for i in 0..=steps {
        let x = -1.0 + i as f64 * step;
        for j in 0..=steps {
            let y = -1.0 + j as f64 * step;
            if x * x + y * y > 1.0 {
                continue;
            }
            let angle = x.atan2(y).rem_euclid(TAU);
            if share >= 1.0 || angle / TAU < share {
                principal.push((x, y));
            } else {
                interest.push((x, y));
            }
        }
    }
    (principal, interest)
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.status {
        Some(status) => (status.clone(), Style::default().fg(Color::Magenta)),
        None => {
            let help = match app.screen {
                Screen::Calculator => {
                    "0-9 . ,: edit | ↑/↓/Enter: field | Del: clear | Tab/→: dashboard | q: quit"
                }
                Screen::Dashboard => "Tab/←: calculator | e: export JSON | q: quit",
            };
            (help.to_string(), Style::default().fg(Color::DarkGray))
        }
    };

    let help = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
