//! The requirement capability and its closure-backed implementation.

use std::fmt;

use super::truthy::Truthy;

/// A single precondition with a failure message.
///
/// `is_met` is evaluated on every call and never cached; the checker may
/// call it more than once per pass. Implementations should treat an
/// internal failure as "not met" instead of panicking.
pub trait Requirement {
    /// User-facing description of the failure condition.
    fn message(&self) -> &str;

    /// Evaluate the underlying condition now.
    fn is_met(&self) -> bool;
}

impl<R: Requirement + ?Sized> Requirement for Box<R> {
    fn message(&self) -> &str {
        (**self).message()
    }

    fn is_met(&self) -> bool {
        (**self).is_met()
    }
}

/// A requirement backed by a zero-argument predicate.
///
/// The predicate may return any [`Truthy`] value; its result is coerced on
/// each evaluation.
pub struct ClosureRequirement {
    predicate: Box<dyn Fn() -> bool>,
    message: String,
}

impl ClosureRequirement {
    /// Wrap a predicate and its failure message.
    pub fn new<F, T>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn() -> T + 'static,
        T: Truthy,
    {
        Self {
            predicate: Box::new(move || predicate().is_truthy()),
            message: message.into(),
        }
    }
}

impl Requirement for ClosureRequirement {
    fn message(&self) -> &str {
        &self.message
    }

    fn is_met(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for ClosureRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureRequirement")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn message_is_returned_unchanged() {
        let req = ClosureRequirement::new(|| true, "Needs a thing");
        assert_eq!(req.message(), "Needs a thing");
    }

    #[test]
    fn message_is_available_before_evaluation() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let req = ClosureRequirement::new(
            move || {
                counter.set(counter.get() + 1);
                true
            },
            "Counted",
        );

        assert_eq!(req.message(), "Counted");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn bool_predicates_pass_through() {
        assert!(ClosureRequirement::new(|| true, "").is_met());
        assert!(!ClosureRequirement::new(|| false, "").is_met());
    }

    #[test]
    fn non_bool_results_are_coerced() {
        assert!(ClosureRequirement::new(|| "some string", "").is_met());
        assert!(!ClosureRequirement::new(|| "", "").is_met());
        assert!(!ClosureRequirement::new(|| "0", "").is_met());
        assert!(ClosureRequirement::new(|| 1, "").is_met());
        assert!(!ClosureRequirement::new(|| 0, "").is_met());
        assert!(!ClosureRequirement::new(|| (), "").is_met());
        assert!(!ClosureRequirement::new(|| None::<bool>, "").is_met());
    }

    #[test]
    fn failing_evaluation_is_not_met() {
        let req = ClosureRequirement::new(|| "x".parse::<u32>(), "Parse failed");
        assert!(!req.is_met());
    }

    #[test]
    fn predicate_runs_on_every_evaluation() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let req = ClosureRequirement::new(
            move || {
                counter.set(counter.get() + 1);
                counter.get() > 1
            },
            "Flips after first call",
        );

        assert!(!req.is_met());
        assert!(req.is_met());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn message_accepts_owned_strings() {
        let name = "Widget";
        let req = ClosureRequirement::new(|| true, format!("{} is required", name));
        assert_eq!(req.message(), "Widget is required");
    }

    #[test]
    fn debug_shows_message() {
        let req = ClosureRequirement::new(|| true, "Visible");
        assert!(format!("{:?}", req).contains("Visible"));
    }

    #[test]
    fn boxed_requirements_delegate() {
        let boxed: Box<dyn Requirement> = Box::new(ClosureRequirement::new(|| false, "Boxed"));
        assert_eq!(boxed.message(), "Boxed");
        assert!(!boxed.is_met());
    }
}
