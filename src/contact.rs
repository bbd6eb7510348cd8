//! Simulated contact form submission: Idle → Submitting → Submitted → Idle.
//! There is no network call; the timed transitions are driven by whoever owns
//! the form (a timer in the browser, direct calls in tests).

pub const SUBMIT_LATENCY_MS: u32 = 1_500;
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl Phase {
    /// How long the form stays in this phase before advancing on its own.
    pub fn dwell_ms(self) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some(SUBMIT_LATENCY_MS),
            Self::Submitted => Some(SUCCESS_DISPLAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        [Field::Name, Field::Email, Field::Subject, Field::Message]
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: Phase,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Edits are only accepted while the form is shown and idle.
    pub fn edit(&mut self, field: Field, value: String) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        *self.fields.slot(field) = value;
        true
    }

    /// Starts the simulated submission; a submit outside `Idle` is ignored.
    pub fn submit(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Performs the timed transition out of the current phase.
    pub fn advance(&mut self) -> Phase {
        match self.phase {
            Phase::Idle => {}
            Phase::Submitting => {
                self.fields = ContactFields::default();
                self.phase = Phase::Submitted;
            }
            Phase::Submitted => self.phase = Phase::Idle,
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Subject, "Hello".to_string());
        form.edit(Field::Message, "Let's build something.".to_string());
        form
    }

    #[test]
    fn edits_land_in_their_field() {
        let form = filled_form();
        assert_eq!(form.fields().get(Field::Name), "Ada");
        assert_eq!(form.fields().get(Field::Email), "ada@example.com");
        assert_eq!(form.fields().get(Field::Subject), "Hello");
        assert_eq!(form.fields().get(Field::Message), "Let's build something.");
    }

    #[test]
    fn full_submission_cycle_clears_and_reopens_the_form() {
        let mut form = filled_form();

        assert!(form.submit());
        assert_eq!(form.phase(), Phase::Submitting);
        assert_eq!(form.phase().dwell_ms(), Some(SUBMIT_LATENCY_MS));
        assert!(!form.fields().is_empty());

        assert_eq!(form.advance(), Phase::Submitted);
        assert!(form.fields().is_empty());
        assert_eq!(form.phase().dwell_ms(), Some(SUCCESS_DISPLAY_MS));

        assert_eq!(form.advance(), Phase::Idle);
        assert_eq!(form.phase().dwell_ms(), None);
        assert!(form.edit(Field::Name, "Grace".to_string()));
        assert!(form.submit());
    }

    #[test]
    fn repeated_submit_is_ignored() {
        let mut form = filled_form();
        assert!(form.submit());
        assert!(!form.submit());

        form.advance();
        assert!(!form.submit());
        assert_eq!(form.phase(), Phase::Submitted);
    }

    #[test]
    fn edits_are_rejected_while_not_idle() {
        let mut form = filled_form();
        form.submit();

        assert!(!form.edit(Field::Message, "changed".to_string()));
        assert_eq!(form.fields().get(Field::Message), "Let's build something.");
    }

    #[test]
    fn advancing_an_idle_form_is_a_no_op() {
        let mut form = filled_form();
        assert_eq!(form.advance(), Phase::Idle);
        assert_eq!(form.fields().get(Field::Name), "Ada");
    }
}
