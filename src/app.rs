use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::{
    error::MortgageError,
    export::export_breakdown,
    state::{MortgageContext, WriteOutcome},
    views::{BreakdownView, CalculatorView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Calculator,
    Dashboard,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Calculator, Screen::Dashboard];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Calculator => "Calculator",
            Screen::Dashboard => "Dashboard",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::Calculator => 0,
            Screen::Dashboard => 1,
        }
    }
}

/// Composition root: owns the shared mortgage state and both views.
pub struct App {
    pub screen: Screen,
    pub context: MortgageContext,
    pub calculator: CalculatorView,
    pub breakdown: BreakdownView,
    pub export_path: PathBuf,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(context: MortgageContext, export_path: PathBuf) -> Result<Self, MortgageError> {
        let calculator = CalculatorView::new(&context)?;
        Ok(Self {
            screen: Screen::Calculator,
            context,
            calculator,
            breakdown: BreakdownView,
            export_path,
            status: None,
            should_quit: false,
        })
    }

    pub fn switch_screen(&mut self, screen: Screen) -> Result<()> {
        if self.screen != screen {
            self.calculator.resync(&self.context)?;
            info!(screen = screen.title(), "switched screen");
            self.screen = screen;
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }
        match self.screen {
            Screen::Calculator => handle_calculator_input(self, key),
            Screen::Dashboard => handle_dashboard_input(self, key),
        }
    }

    pub fn export(&mut self) -> Result<()> {
        let inputs = self.breakdown.inputs(&self.context)?;
        match export_breakdown(inputs, &self.export_path) {
            Ok(()) => {
                info!(path = %self.export_path.display(), "exported breakdown");
                self.status = Some(format!("Exported to {}", self.export_path.display()));
            }
            Err(e) => {
                warn!("export failed: {e:#}");
                self.status = Some(format!("Error exporting breakdown: {e}"));
            }
        }
        Ok(())
    }
}

fn handle_calculator_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let outcome = match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '-') => {
            Some(app.calculator.type_char(&mut app.context, c)?)
        }
        KeyCode::Backspace => Some(app.calculator.backspace(&mut app.context)?),
        KeyCode::Delete => Some(app.calculator.clear(&mut app.context)?),
        KeyCode::Down | KeyCode::Enter => {
            app.calculator.focus_next(&app.context)?;
            None
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.calculator.focus_prev(&app.context)?;
            None
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            app.switch_screen(Screen::Dashboard)?;
            None
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        _ => None,
    };

    app.status = match outcome {
        Some(WriteOutcome::Discarded(err)) => Some(format!("Ignored: {err}")),
        Some(WriteOutcome::Committed(_)) => None,
        None => app.status.take(),
    };
    Ok(())
}

fn handle_dashboard_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.switch_screen(Screen::Calculator)?
        }
        KeyCode::Char('e') | KeyCode::Char('E') => app.export()?,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mortgage::{Field, MortgageInputs};

    fn test_app() -> App {
        let context = MortgageContext::provide(MortgageInputs::default());
        App::new(context, std::env::temp_dir().join("homeease-app-test.json")).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn starts_on_calculator_with_price_focused() {
        let app = test_app();

        assert_eq!(app.screen, Screen::Calculator);
        assert_eq!(app.calculator.focus(), Field::PropertyPrice);
    }

    #[test]
    fn tab_toggles_between_screens() {
        let mut app = test_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Dashboard);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Calculator);
    }

    #[test]
    fn typing_updates_the_shared_state() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Delete);

        for c in "50,000".chars() {
            press(&mut app, KeyCode::Char(c));
        }

        let inputs = app.context.use_mortgage().unwrap().get();
        assert_eq!(inputs.deposit, 50_000.0);
        assert_eq!(app.breakdown.figures(&app.context).unwrap().principal, 200_000.0);
    }

    #[test]
    fn letters_are_not_typed_into_fields() {
        let mut app = test_app();
        let before = app.context.use_mortgage().unwrap().revision();

        press(&mut app, KeyCode::Char('x'));

        assert_eq!(app.context.use_mortgage().unwrap().revision(), before);
        assert!(!app.should_quit);
    }

    #[test]
    fn rejected_input_sets_status_and_next_commit_clears_it() {
        let mut app = test_app();

        press(&mut app, KeyCode::Char('-'));
        assert!(app.status.as_deref().unwrap_or("").starts_with("Ignored"));

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.status, None);
    }

    #[test]
    fn q_quits_from_either_screen() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app();

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();

        assert!(app.should_quit);
    }

    #[test]
    fn export_failure_is_reported_in_status() {
        let context = MortgageContext::provide(MortgageInputs::default());
        let mut app = App::new(
            context,
            std::env::temp_dir().join("homeease-missing-dir").join("out.json"),
        )
        .unwrap();

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('e'));

        assert!(app
            .status
            .as_deref()
            .unwrap_or("")
            .starts_with("Error exporting breakdown"));
    }

    #[test]
    fn detached_context_cannot_build_an_app() {
        let result = App::new(MortgageContext::detached(), PathBuf::from("unused.json"));

        assert_eq!(result.err(), Some(MortgageError::NoProvider));
    }
}
