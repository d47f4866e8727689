//! Newsletter subscribe form: email validation and the submit state machine.
//!
//! The subscribe call itself is simulated with a fixed delay and always
//! succeeds; the only failure modes are the two client-side validation
//! errors. Making the status an enum keeps "at most one of error, loading,
//! success" true by construction.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Empty,
    Malformed,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::Empty => "Email is required",
            ValidationError::Malformed => "Please enter a valid email address",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Invalid(ValidationError),
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscribeForm {
    email: String,
    status: Status,
}

impl SubscribeForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error(&self) -> Option<&'static str> {
        match self.status {
            Status::Invalid(reason) => Some(reason.message()),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == Status::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Any keystroke returns the form to Idle: a stale validation error or a
    /// lingering success notice clears immediately, not on the next submit.
    pub fn edit(&mut self, value: &str) {
        self.email = value.to_owned();
        if matches!(self.status, Status::Invalid(_) | Status::Success) {
            self.status = Status::Idle;
        }
    }

    /// Validate and, if well-formed, move to Submitting. Returns whether the
    /// submission was accepted and is now in flight.
    pub fn submit(&mut self) -> bool {
        if self.status == Status::Submitting {
            return false;
        }
        match validate_email(&self.email) {
            Ok(()) => {
                self.status = Status::Submitting;
                true
            }
            Err(reason) => {
                self.status = Status::Invalid(reason);
                false
            }
        }
    }

    /// The simulated subscribe call resolved. Always succeeds; the email
    /// field clears so the input is ready for another address.
    pub fn resolve(&mut self) {
        if self.status == Status::Submitting {
            self.status = Status::Success;
            self.email.clear();
        }
    }

    /// The success notice timed out.
    pub fn expire_success(&mut self) {
        if self.status == Status::Success {
            self.status = Status::Idle;
        }
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Empty);
    }
    if is_well_formed(email) {
        Ok(())
    } else {
        Err(ValidationError::Malformed)
    }
}

/// Well-formedness check equivalent to the usual `^[^\s@]+@[^\s@]+\.[^\s@]+$`
/// shape: a local part, a single `@`, and a domain with an interior dot, with
/// no whitespace anywhere.
fn is_well_formed(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(validate_email("user@example.com"), Ok(()));
        assert_eq!(validate_email("first.last@sub.example.co"), Ok(()));
    }

    #[test]
    fn rejects_malformed_addresses_with_the_right_reason() {
        assert_eq!(validate_email(""), Err(ValidationError::Empty));
        for bad in ["test@", "@example.com", "test@.com", "test @example.com", "test@com", "a@b@c.com", "test@com."] {
            assert_eq!(validate_email(bad), Err(ValidationError::Malformed), "input {bad:?}");
        }
    }

    #[test]
    fn error_messages_match_the_copy() {
        assert_eq!(ValidationError::Empty.message(), "Email is required");
        assert_eq!(
            ValidationError::Malformed.message(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn happy_path_walks_idle_submitting_success_idle() {
        let mut form = SubscribeForm::default();
        form.edit("user@example.com");
        assert!(form.submit());
        assert!(form.is_submitting());
        assert_eq!(form.email(), "user@example.com");

        form.resolve();
        assert!(form.is_success());
        assert_eq!(form.email(), "", "success clears the field");

        form.expire_success();
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn invalid_submit_reports_and_keeps_the_input() {
        let mut form = SubscribeForm::default();
        form.edit("test@");
        assert!(!form.submit());
        assert_eq!(form.error(), Some("Please enter a valid email address"));
        assert_eq!(form.email(), "test@");
    }

    #[test]
    fn editing_clears_errors_immediately() {
        let mut form = SubscribeForm::default();
        assert!(!form.submit());
        assert_eq!(form.error(), Some("Email is required"));

        form.edit("u");
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn editing_dismisses_the_success_notice() {
        let mut form = SubscribeForm::default();
        form.edit("user@example.com");
        assert!(form.submit());
        form.resolve();
        assert!(form.is_success());

        form.edit("n");
        assert_eq!(form.status(), Status::Idle);
        assert!(!form.is_success());
    }

    #[test]
    fn duplicate_submissions_are_refused_while_in_flight() {
        let mut form = SubscribeForm::default();
        form.edit("user@example.com");
        assert!(form.submit());
        assert!(!form.submit());
        assert!(form.is_submitting());
    }

    #[test]
    fn resolve_and_expire_only_act_in_their_states() {
        let mut form = SubscribeForm::default();
        form.resolve();
        assert_eq!(form.status(), Status::Idle);

        form.edit("user@example.com");
        form.expire_success();
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.email(), "user@example.com");
    }
}
