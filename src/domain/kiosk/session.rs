//! Kiosk survey session: an immutable state value advanced by pure
//! transition methods.
//!
//! Each method returns the next session value instead of mutating shared
//! state; callers decide what to do with it. The minimal resume fields can
//! be detached as a [`ResumeState`] and restored later through an explicit
//! save/load boundary.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CounterId, DomainError, ErrorCode, Rating, StateMachine, ValidationError,
};
use crate::domain::response::AnswerSet;
use crate::domain::scheme::{Gender, Respondent, SurveyScheme};

/// Screens of the kiosk flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KioskStep {
    SelectCounter,
    Demographics,
    Questionnaire,
    Review,
    ThankYou,
}

impl StateMachine for KioskStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use KioskStep::*;
        matches!(
            (self, target),
            (SelectCounter, Demographics)
                | (Demographics, Questionnaire)
                | (Demographics, SelectCounter)
                | (Questionnaire, Review)
                | (Questionnaire, Demographics)
                | (Review, Questionnaire)
                | (Review, ThankYou)
                | (ThankYou, SelectCounter)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use KioskStep::*;
        match self {
            SelectCounter => vec![Demographics],
            Demographics => vec![Questionnaire, SelectCounter],
            Questionnaire => vec![Review, Demographics],
            Review => vec![Questionnaire, ThankYou],
            ThankYou => vec![SelectCounter],
        }
    }
}

/// Minimal fields persisted to survive a kiosk reload: current step, counter,
/// demographics, and answers in progress. Nothing else leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeState {
    pub step: KioskStep,
    pub counter: CounterId,
    pub respondent: Respondent,
    pub answers: AnswerSet,
    pub current_question: usize,
}

/// One respondent's pass through the kiosk.
#[derive(Debug, Clone, PartialEq)]
pub struct KioskSession {
    step: KioskStep,
    counter: Option<CounterId>,
    respondent: Respondent,
    answers: AnswerSet,
    current_question: usize,
    submitting: bool,
}

impl KioskSession {
    /// A fresh session at the counter-selection screen.
    pub fn new() -> Self {
        Self {
            step: KioskStep::SelectCounter,
            counter: None,
            respondent: Respondent::empty(),
            answers: AnswerSet::empty(),
            current_question: 0,
            submitting: false,
        }
    }

    pub fn step(&self) -> KioskStep {
        self.step
    }

    pub fn counter(&self) -> Option<CounterId> {
        self.counter
    }

    pub fn respondent(&self) -> &Respondent {
        &self.respondent
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }

    /// True while a submit request is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn require_step(&self, step: KioskStep) -> Result<(), DomainError> {
        if self.step != step {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Expected step {:?}, session is at {:?}", step, self.step),
            ));
        }
        Ok(())
    }

    /// Picks a counter and starts a new survey for it.
    pub fn select_counter(
        &self,
        counter: CounterId,
        scheme: &SurveyScheme,
    ) -> Result<Self, DomainError> {
        self.require_step(KioskStep::SelectCounter)?;
        if !scheme.contains_counter(counter) {
            return Err(DomainError::new(
                ErrorCode::CounterOutOfRange,
                format!(
                    "Counter {} is outside the configured range 1..{}",
                    counter,
                    scheme.counter_count()
                ),
            ));
        }
        let mut next = Self::new();
        next.step = self.step.transition_to(KioskStep::Demographics)?;
        next.counter = Some(counter);
        Ok(next)
    }

    /// Records the gender selection.
    pub fn set_gender(&self, gender: Gender) -> Result<Self, DomainError> {
        self.require_step(KioskStep::Demographics)?;
        let mut next = self.clone();
        next.respondent.gender = Some(gender);
        Ok(next)
    }

    /// Records the education selection, validated against the scheme.
    pub fn set_education(
        &self,
        education: impl Into<String>,
        scheme: &SurveyScheme,
    ) -> Result<Self, DomainError> {
        self.require_step(KioskStep::Demographics)?;
        let education = education.into();
        if !scheme.education_levels.contains(&education) {
            return Err(ValidationError::invalid_format(
                "education",
                format!("'{}' is not a configured education level", education),
            )
            .into());
        }
        let mut next = self.clone();
        next.respondent.education = Some(education);
        Ok(next)
    }

    /// Records the occupation selection, validated against the scheme.
    pub fn set_occupation(
        &self,
        occupation: impl Into<String>,
        scheme: &SurveyScheme,
    ) -> Result<Self, DomainError> {
        self.require_step(KioskStep::Demographics)?;
        let occupation = occupation.into();
        if !scheme.occupation_categories.contains(&occupation) {
            return Err(ValidationError::invalid_format(
                "occupation",
                format!("'{}' is not a configured occupation", occupation),
            )
            .into());
        }
        let mut next = self.clone();
        next.respondent.occupation = Some(occupation);
        Ok(next)
    }

    /// Records the age bracket selection, validated against the scheme.
    pub fn set_age_bracket(
        &self,
        label: impl Into<String>,
        scheme: &SurveyScheme,
    ) -> Result<Self, DomainError> {
        self.require_step(KioskStep::Demographics)?;
        let label = label.into();
        if scheme.age_bracket(&label).is_none() {
            return Err(ValidationError::invalid_format(
                "age",
                format!("'{}' is not a configured age bracket", label),
            )
            .into());
        }
        let mut next = self.clone();
        next.respondent.age_bracket = Some(label);
        Ok(next)
    }

    /// Moves on to the questionnaire once every demographic field is set.
    ///
    /// The error names every still-missing field so the form can point at
    /// all of them at once.
    pub fn confirm_demographics(&self, scheme: &SurveyScheme) -> Result<Self, DomainError> {
        self.require_step(KioskStep::Demographics)?;
        let missing = self.respondent.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyField,
                format!("Please complete: {}", missing.join(", ")),
            ));
        }
        scheme.validate_respondent(&self.respondent)?;
        let mut next = self.clone();
        next.step = self.step.transition_to(KioskStep::Questionnaire)?;
        next.current_question = 0;
        Ok(next)
    }

    /// Answers the current question and advances; the last answer moves the
    /// session to the review screen.
    pub fn answer_current(
        &self,
        rating: Rating,
        scheme: &SurveyScheme,
    ) -> Result<Self, DomainError> {
        self.require_step(KioskStep::Questionnaire)?;
        let question = scheme
            .questions
            .get(self.current_question)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::InternalError, "Question index out of range")
            })?;
        let mut next = self.clone();
        next.answers = self.answers.with(question.id.clone(), rating);
        if self.current_question + 1 < scheme.question_count() {
            next.current_question += 1;
        } else {
            next.step = self.step.transition_to(KioskStep::Review)?;
        }
        Ok(next)
    }

    /// Steps backwards: previous question, back to demographics, or back to
    /// counter selection.
    pub fn back(&self) -> Result<Self, DomainError> {
        let mut next = self.clone();
        match self.step {
            KioskStep::Questionnaire if self.current_question > 0 => {
                next.current_question -= 1;
            }
            KioskStep::Questionnaire => {
                next.step = self.step.transition_to(KioskStep::Demographics)?;
            }
            KioskStep::Demographics => {
                next.step = self.step.transition_to(KioskStep::SelectCounter)?;
                next.counter = None;
                next.respondent = Respondent::empty();
            }
            KioskStep::Review => {
                next.step = self.step.transition_to(KioskStep::Questionnaire)?;
            }
            _ => {
                return Err(DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!("Cannot go back from {:?}", self.step),
                ));
            }
        }
        Ok(next)
    }

    /// Returns from the review screen to re-check answers.
    pub fn cancel_review(&self) -> Result<Self, DomainError> {
        self.require_step(KioskStep::Review)?;
        self.back()
    }

    /// Marks the submit request as in flight.
    ///
    /// A second call while one is outstanding is rejected; this is the
    /// re-submission guard. All answers must be present before the request
    /// leaves the kiosk.
    pub fn begin_submit(&self, scheme: &SurveyScheme) -> Result<Self, DomainError> {
        self.require_step(KioskStep::Review)?;
        if self.submitting {
            return Err(DomainError::new(
                ErrorCode::SubmissionInFlight,
                "A submission is already in progress",
            ));
        }
        self.answers.validate_complete(&scheme.questions)?;
        scheme.validate_respondent(&self.respondent)?;
        let mut next = self.clone();
        next.submitting = true;
        Ok(next)
    }

    /// Observes a successful submit response.
    pub fn submit_succeeded(&self) -> Result<Self, DomainError> {
        self.require_in_flight()?;
        let mut next = self.clone();
        next.submitting = false;
        next.step = self.step.transition_to(KioskStep::ThankYou)?;
        Ok(next)
    }

    /// Observes a failed submit response. The flag clears so the screen is
    /// interactable again and the respondent can retry manually.
    pub fn submit_failed(&self) -> Result<Self, DomainError> {
        self.require_in_flight()?;
        let mut next = self.clone();
        next.submitting = false;
        Ok(next)
    }

    fn require_in_flight(&self) -> Result<(), DomainError> {
        if !self.submitting {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "No submission is in flight",
            ));
        }
        Ok(())
    }

    /// Resets to a fresh session (thank-you screen timeout or manual reset).
    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// The fields worth persisting for reload recovery, if the session is
    /// mid-survey. Selection and thank-you screens restart from scratch.
    pub fn to_resume(&self) -> Option<ResumeState> {
        match self.step {
            KioskStep::Demographics | KioskStep::Questionnaire | KioskStep::Review => {
                Some(ResumeState {
                    step: self.step,
                    counter: self.counter?,
                    respondent: self.respondent.clone(),
                    answers: self.answers.clone(),
                    current_question: self.current_question,
                })
            }
            _ => None,
        }
    }

    /// Rebuilds a session from persisted resume fields. The submit guard is
    /// never restored as set.
    pub fn from_resume(state: ResumeState, scheme: &SurveyScheme) -> Result<Self, DomainError> {
        if !scheme.contains_counter(state.counter) {
            return Err(DomainError::new(
                ErrorCode::CounterOutOfRange,
                format!("Counter {} is outside the configured range", state.counter),
            ));
        }
        let step = match state.step {
            KioskStep::Demographics | KioskStep::Questionnaire | KioskStep::Review => state.step,
            _ => KioskStep::Demographics,
        };
        Ok(Self {
            step,
            counter: Some(state.counter),
            respondent: state.respondent,
            answers: state.answers,
            current_question: state.current_question.min(scheme.question_count() - 1),
            submitting: false,
        })
    }
}

impl Default for KioskSession {
    fn default() -> Self {
        Self::new()
    }
}
