//! The two consumers of the shared mortgage state.
//!
//! [`CalculatorView`] reads and writes, [`BreakdownView`] only reads. Both
//! derive their figures from the current snapshot with
//! [`compute_repayment`] on every call.

use crate::{
    calculation::{compute_repayment, RepaymentFigures, Slice},
    error::MortgageError,
    format::field_text,
    mortgage::{Field, MortgageInputs},
    state::{MortgageContext, WriteOutcome},
};

/// The input form: focused field plus the text being typed in each box.
///
/// Buffers hold what the user typed (`"5."` stays `"5."`); only the parsed
/// value reaches the shared state. Buffers are rebuilt from the snapshot
/// whenever focus moves.
#[derive(Debug, Clone)]
pub struct CalculatorView {
    focus: Field,
    buffers: [String; 4],
}

impl CalculatorView {
    pub fn new(ctx: &MortgageContext) -> Result<Self, MortgageError> {
        let mut view = Self {
            focus: Field::PropertyPrice,
            buffers: Default::default(),
        };
        view.resync(ctx)?;
        Ok(view)
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn buffer(&self, field: Field) -> &str {
        &self.buffers[field.index()]
    }

    pub fn focus_next(&mut self, ctx: &MortgageContext) -> Result<(), MortgageError> {
        self.move_focus(ctx, self.focus.next())
    }

    pub fn focus_prev(&mut self, ctx: &MortgageContext) -> Result<(), MortgageError> {
        self.move_focus(ctx, self.focus.prev())
    }

    fn move_focus(&mut self, ctx: &MortgageContext, field: Field) -> Result<(), MortgageError> {
        self.resync(ctx)?;
        self.focus = field;
        Ok(())
    }

    /// Rebuilds every buffer from the current snapshot.
    pub fn resync(&mut self, ctx: &MortgageContext) -> Result<(), MortgageError> {
        let inputs = ctx.use_mortgage()?.get();
        for field in Field::ALL {
            self.buffers[field.index()] = field_text(field, inputs.get(field));
        }
        Ok(())
    }

    pub fn type_char(
        &mut self,
        ctx: &mut MortgageContext,
        c: char,
    ) -> Result<WriteOutcome, MortgageError> {
        let mut text = self.buffer(self.focus).to_string();
        text.push(c);
        self.commit(ctx, text)
    }

    pub fn backspace(&mut self, ctx: &mut MortgageContext) -> Result<WriteOutcome, MortgageError> {
        let mut text = self.buffer(self.focus).to_string();
        text.pop();
        self.commit(ctx, text)
    }

    pub fn clear(&mut self, ctx: &mut MortgageContext) -> Result<WriteOutcome, MortgageError> {
        self.commit(ctx, String::new())
    }

    // A discarded write leaves the buffer as it was, like a controlled input
    // refusing the keystroke.
    fn commit(
        &mut self,
        ctx: &mut MortgageContext,
        text: String,
    ) -> Result<WriteOutcome, MortgageError> {
        let outcome = ctx.use_mortgage_mut()?.apply_raw(self.focus, &text);
        if outcome.is_committed() {
            self.buffers[self.focus.index()] = text;
        }
        Ok(outcome)
    }

    /// Monthly payment as displayed, zero when the formula degenerates.
    pub fn monthly_payment(&self, ctx: &MortgageContext) -> Result<f64, MortgageError> {
        let inputs = ctx.use_mortgage()?.get();
        Ok(compute_repayment(&inputs).displayed().monthly_payment)
    }
}

/// Read-only principal/interest breakdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakdownView;

impl BreakdownView {
    pub fn inputs(&self, ctx: &MortgageContext) -> Result<MortgageInputs, MortgageError> {
        Ok(ctx.use_mortgage()?.get())
    }

    pub fn figures(&self, ctx: &MortgageContext) -> Result<RepaymentFigures, MortgageError> {
        Ok(compute_repayment(&self.inputs(ctx)?).displayed())
    }

    pub fn slices(&self, ctx: &MortgageContext) -> Result<[Slice; 2], MortgageError> {
        Ok(compute_repayment(&self.inputs(ctx)?).slices())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn setup() -> (MortgageContext, CalculatorView) {
        let ctx = MortgageContext::provide(MortgageInputs::default());
        let view = CalculatorView::new(&ctx).unwrap();
        (ctx, view)
    }

    #[test]
    fn buffers_start_from_the_snapshot() {
        let (_, view) = setup();

        assert_eq!(view.buffer(Field::PropertyPrice), "250,000");
        assert_eq!(view.buffer(Field::Deposit), "20,000");
        assert_eq!(view.buffer(Field::InterestRate), "5");
        assert_eq!(view.buffer(Field::TermYears), "25");
    }

    #[test]
    fn typing_commits_each_keystroke() {
        let (mut ctx, mut view) = setup();
        view.focus_next(&ctx).unwrap();
        view.focus_next(&ctx).unwrap();
        view.clear(&mut ctx).unwrap();

        view.type_char(&mut ctx, '4').unwrap();
        view.type_char(&mut ctx, '.').unwrap();
        view.type_char(&mut ctx, '5').unwrap();

        assert_eq!(view.buffer(Field::InterestRate), "4.5");
        assert_eq!(ctx.use_mortgage().unwrap().get().interest_rate, 4.5);
    }

    #[test]
    fn trailing_point_stays_in_the_buffer() {
        let (mut ctx, mut view) = setup();
        view.focus_prev(&ctx).unwrap();
        view.focus_prev(&ctx).unwrap();

        view.type_char(&mut ctx, '.').unwrap();

        assert_eq!(view.focus(), Field::InterestRate);
        assert_eq!(view.buffer(Field::InterestRate), "5.");
        assert_eq!(ctx.use_mortgage().unwrap().get().interest_rate, 5.0);
    }

    #[test]
    fn rejected_keystroke_keeps_previous_text_and_value() {
        let (mut ctx, mut view) = setup();

        let outcome = view.type_char(&mut ctx, '-').unwrap();

        assert!(!outcome.is_committed());
        assert_eq!(view.buffer(Field::PropertyPrice), "250,000");
        assert_eq!(ctx.use_mortgage().unwrap().get().property_price, 250_000.0);
    }

    #[test]
    fn backspace_to_empty_stores_zero() {
        let (mut ctx, mut view) = setup();
        view.focus_next(&ctx).unwrap();

        for _ in 0..6 {
            view.backspace(&mut ctx).unwrap();
        }

        assert_eq!(view.buffer(Field::Deposit), "");
        assert_eq!(ctx.use_mortgage().unwrap().get().deposit, 0.0);
    }

    #[test]
    fn focus_change_reformats_grouped_fields() {
        let (mut ctx, mut view) = setup();
        view.type_char(&mut ctx, '0').unwrap();
        assert_eq!(view.buffer(Field::PropertyPrice), "250,0000");

        view.focus_next(&ctx).unwrap();

        assert_eq!(view.buffer(Field::PropertyPrice), "2,500,000");
    }

    #[test]
    fn both_views_agree_after_a_write() {
        let (mut ctx, mut view) = setup();
        view.clear(&mut ctx).unwrap();
        for c in "400,000".chars() {
            view.type_char(&mut ctx, c).unwrap();
        }

        let calculator_payment = view.monthly_payment(&ctx).unwrap();
        let breakdown = BreakdownView.figures(&ctx).unwrap();

        assert_eq!(calculator_payment, breakdown.monthly_payment);
        assert_eq!(BreakdownView.inputs(&ctx).unwrap().property_price, 400_000.0);
    }

    #[test]
    fn views_fail_loudly_without_a_provider() {
        let mut ctx = MortgageContext::detached();

        assert_eq!(CalculatorView::new(&ctx).err(), Some(MortgageError::NoProvider));
        assert_eq!(BreakdownView.figures(&ctx).err(), Some(MortgageError::NoProvider));

        let provided = MortgageContext::provide(MortgageInputs::default());
        let mut view = CalculatorView::new(&provided).unwrap();
        assert_eq!(
            view.type_char(&mut ctx, '1').err(),
            Some(MortgageError::NoProvider)
        );
    }
}
