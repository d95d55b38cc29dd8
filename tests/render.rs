use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use homeease::{app::App, ui::ui, MortgageContext, MortgageInputs};

fn test_app(inputs: MortgageInputs) -> App {
    App::new(
        MortgageContext::provide(inputs),
        std::env::temp_dir().join("homeease-render-test.json"),
    )
    .unwrap()
}

/// Renders the app to a test buffer and returns its text content.
fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut drawn = Ok(());
    terminal.draw(|f| drawn = ui(f, app)).unwrap();
    drawn.unwrap();

    let buf = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn calculator_shows_fields_and_monthly_payment() {
    let app = test_app(MortgageInputs::default());

    let screen = render_to_string(&app);

    assert!(screen.contains("Property Price (£)"));
    assert!(screen.contains("250,000"));
    assert!(screen.contains("£1,344.56"));
}

#[test]
fn calculator_shows_zero_for_zero_rate() {
    let app = test_app(MortgageInputs {
        interest_rate: 0.0,
        ..MortgageInputs::default()
    });

    let screen = render_to_string(&app);

    assert!(screen.contains("£0.00"));
    assert!(!screen.contains("NaN"));
}

#[test]
fn dashboard_shows_breakdown_and_legend() {
    let mut app = test_app(MortgageInputs::default());
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))
        .unwrap();

    let screen = render_to_string(&app);

    assert!(screen.contains("Mortgage Breakdown"));
    assert!(screen.contains("Interest Rate: 5.00%"));
    assert!(screen.contains("Total Interest Paid: £173,367"));
    assert!(screen.contains("Principal: £230,000"));
}

#[test]
fn dashboard_without_a_loan_has_nothing_to_chart() {
    let mut app = test_app(MortgageInputs {
        deposit: 250_000.0,
        ..MortgageInputs::default()
    });
    app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))
        .unwrap();

    let screen = render_to_string(&app);

    assert!(screen.contains("Nothing to chart"));
}

#[test]
fn edits_on_the_calculator_show_on_the_dashboard() {
    let mut app = test_app(MortgageInputs::default());
    for code in [KeyCode::Down, KeyCode::Delete, KeyCode::Char('0'), KeyCode::Tab] {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    let screen = render_to_string(&app);

    assert!(screen.contains("Deposit: £0"));
    assert!(screen.contains("Principal: £250,000"));
}
