use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::dto::application_dto::{message_key_for, Application, ApplicationFields};
use crate::models::job::JobPosition;
use crate::models::resume::{check_resume, ResumeError, ResumeFile};
use crate::services::submission_service::Submitter;
use crate::utils::validation::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient toast shown after a submission attempt settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Failure,
}

impl Notice {
    pub fn message_key(&self) -> &'static str {
        match self {
            Notice::Success => "application.success",
            Notice::Failure => "application.failure",
        }
    }
}

/// Per-field schema failures plus the separate résumé check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub fields: ValidationErrors,
    pub resume: Option<ResumeError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.resume.is_none()
    }

    /// Failure codes keyed by field name, sorted.
    pub fn field_codes(&self) -> BTreeMap<String, Vec<String>> {
        self.fields
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let codes = errs.iter().map(|e| e.code.to_string()).collect();
                (field.to_string(), codes)
            })
            .collect()
    }

    /// Translation keys for every failure, fields first then the résumé.
    pub fn message_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self
            .field_codes()
            .iter()
            .flat_map(|(field, codes)| {
                codes
                    .iter()
                    .filter_map(move |code| message_key_for(field, code))
            })
            .collect();
        if let Some(resume) = &self.resume {
            keys.push(resume.message_key());
        }
        keys
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Succeeded,
    /// Blocked before any outbound call.
    Invalid(FormErrors),
    /// The outbound attempt failed; the record is untouched.
    Failed { reason: String },
}

/// One rendered application form: its record, attachment, errors and
/// submission state. Each instance owns its state exclusively.
pub struct ApplicationForm<S> {
    defaults: ApplicationFields,
    fields: ApplicationFields,
    resume: Option<ResumeFile>,
    errors: FormErrors,
    state: SubmissionState,
    transitions: Vec<SubmissionState>,
    notice: Option<Notice>,
    submitter: S,
}

impl<S: Submitter> ApplicationForm<S> {
    pub fn new(submitter: S) -> Self {
        Self::with_defaults(submitter, ApplicationFields::default())
    }

    /// A form for a specific listing, with the position pre-filled.
    pub fn for_job(submitter: S, job: &JobPosition) -> Self {
        let defaults = ApplicationFields {
            position: job.title.to_string(),
            ..ApplicationFields::default()
        };
        Self::with_defaults(submitter, defaults)
    }

    fn with_defaults(submitter: S, defaults: ApplicationFields) -> Self {
        Self {
            fields: defaults.clone(),
            defaults,
            resume: None,
            errors: FormErrors::default(),
            state: SubmissionState::Idle,
            transitions: vec![SubmissionState::Idle],
            notice: None,
            submitter,
        }
    }

    pub fn fields(&self) -> &ApplicationFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ApplicationFields {
        &mut self.fields
    }

    pub fn set_fields(&mut self, fields: ApplicationFields) {
        self.fields = fields;
    }

    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    /// Runs the attachment checks on selection. A rejected file replaces
    /// whatever was attached before.
    pub fn attach_resume(&mut self, file: ResumeFile) -> Result<(), ResumeError> {
        match file.check() {
            Ok(()) => {
                info!(file = %file.file_name, bytes = file.size(), "Resume attached");
                self.errors.resume = None;
                self.resume = Some(file);
                Ok(())
            }
            Err(err) => {
                warn!(file = %file.file_name, code = err.code(), "Resume rejected");
                self.resume = None;
                self.errors.resume = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn clear_resume(&mut self) {
        self.resume = None;
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// States visited by the latest submit, starting with the one it began in.
    pub fn transitions(&self) -> &[SubmissionState] {
        &self.transitions
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.state != SubmissionState::Submitting && self.resume.is_some()
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.transitions = vec![self.state];
        self.notice = None;
        self.enter(SubmissionState::Validating);

        let mut errors = FormErrors::default();
        if let Err(field_errors) = validate(&self.fields) {
            errors.fields = field_errors;
        }
        let resume = match check_resume(self.resume.as_ref()) {
            Ok(resume) => Some(resume.clone()),
            Err(err) => {
                errors.resume = Some(err);
                None
            }
        };

        let resume = match resume {
            Some(resume) if errors.is_empty() => resume,
            _ => {
                info!(failures = ?errors.field_codes(), resume = ?errors.resume, "Application blocked by validation");
                self.errors = errors.clone();
                self.enter(SubmissionState::Failed);
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.errors = FormErrors::default();
        self.enter(SubmissionState::Submitting);

        let submission_id = Uuid::new_v4();
        info!(%submission_id, position = %self.fields.position, "Submitting application");

        let mut in_flight = InFlight {
            state: &mut self.state,
            transitions: &mut self.transitions,
            notice: &mut self.notice,
            settled: false,
        };
        let application = Application {
            fields: &self.fields,
            resume: &resume,
        };
        let result = self.submitter.submit(&application).await;
        in_flight.settled = true;
        drop(in_flight);

        match result {
            Ok(()) => {
                info!(%submission_id, "Application submitted");
                self.fields = self.defaults.clone();
                self.resume = None;
                self.notice = Some(Notice::Success);
                self.enter(SubmissionState::Succeeded);
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                error!(%submission_id, transport = e.is_transport(), error = %e, "Error sending application");
                self.notice = Some(Notice::Failure);
                self.enter(SubmissionState::Failed);
                SubmitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn enter(&mut self, state: SubmissionState) {
        self.state = state;
        self.transitions.push(state);
    }
}

/// Marks the form failed if the outbound attempt is dropped before it
/// settles. Record and file stay as they were.
struct InFlight<'a> {
    state: &'a mut SubmissionState,
    transitions: &'a mut Vec<SubmissionState>,
    notice: &'a mut Option<Notice>,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!("Submission dropped before it settled");
        *self.state = SubmissionState::Failed;
        self.transitions.push(SubmissionState::Failed);
        *self.notice = Some(Notice::Failure);
    }
}
