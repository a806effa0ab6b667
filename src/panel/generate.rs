use crate::api::salary::generate_salaries;
use crate::panel::loader::Salaries;
use crate::panel::submitter::{Submission, submit};
use crate::panel::{Outcome, PanelContext};
use crate::view::text::texts;

/// Blocking yes/no question put to the user.
pub trait Prompt {
    fn confirm(&self, question: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Prompt for F {
    fn confirm(&self, question: &str) -> bool {
        self(question)
    }
}

/// Asks for confirmation, then has the backend create this month's salaries.
///
/// Nothing here prevents a second run for the same month; duplicates are the
/// backend's to refuse.
pub async fn generate(ctx: &PanelContext, prompt: &dyn Prompt, reload_query: &[(&str, String)]) -> Outcome {
    let t = texts(ctx.display.locale);
    if !prompt.confirm(t.confirm_generate) {
        return Outcome::Declined;
    }

    let submission = Submission {
        modal: None,
        success: t.salaries_generated,
        failure: t.salaries_generate_failed,
    };

    submit::<Salaries, _>(ctx, submission, reload_query, generate_salaries(&ctx.client)).await
}
