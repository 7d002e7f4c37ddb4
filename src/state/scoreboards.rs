//! Scoreboard page workflow state (listing, search, editor modal).
//!
//! DESIGN
//! ======
//! The server owns all scoreboard data; this state holds only the currently
//! displayed page plus the in-progress editor form. Loads are tagged with a
//! sequence number so a slow response for an abandoned page or search term
//! can never overwrite a newer one.

#[cfg(test)]
#[path = "scoreboards_test.rs"]
mod scoreboards_test;

use crate::net::types::{Scoreboard, ScoreboardPage, ScoreboardPayload};

/// Listing state for the scoreboard table and pager.
#[derive(Clone, Debug)]
pub struct ScoreboardsState {
    /// Rows of the currently displayed page.
    pub rows: Vec<Scoreboard>,
    /// Total matching records across all pages.
    pub total: u64,
    /// Current 1-based page number.
    pub page: u64,
    /// Active search term, exactly as submitted.
    pub search: String,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Sequence number of the most recently started load.
    pub load_seq: u64,
    /// Inline error from the last failed load, cleared on success.
    pub error: Option<String>,
}

impl Default for ScoreboardsState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            page: 1,
            search: String::new(),
            loading: true,
            load_seq: 0,
            error: None,
        }
    }
}

impl ScoreboardsState {
    /// Mark a load as started and return its sequence ticket.
    ///
    /// The ticket must be passed back to [`apply_load`](Self::apply_load) or
    /// [`fail_load`](Self::fail_load) when the response arrives.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.load_seq
    }

    /// Replace the dataset with a freshly loaded page.
    ///
    /// Returns `false` without touching anything when a newer load has been
    /// started since the ticket was issued.
    pub fn apply_load(&mut self, ticket: u64, page: ScoreboardPage) -> bool {
        if ticket != self.load_seq {
            return false;
        }
        self.rows = page.data;
        self.total = page.pagination.total;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a failed load. Stale tickets are ignored like in `apply_load`.
    pub fn fail_load(&mut self, ticket: u64, message: String) -> bool {
        if ticket != self.load_seq {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Adopt a newly submitted search term. The page resets to 1 so the new
    /// result set cannot start on an out-of-range page.
    pub fn reset_for_search(&mut self, term: String) {
        self.search = term;
        self.page = 1;
    }

    /// Restore the defaults for a newly routed academy.
    ///
    /// The sequence counter survives the reset so a response still in flight
    /// for the previous academy keeps a stale ticket.
    pub fn reset_for_academy(&mut self) {
        let seq = self.load_seq;
        *self = Self::default();
        self.load_seq = seq;
    }
}

/// Create/edit modal state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Editor {
    /// Modal hidden, nothing being edited.
    #[default]
    Closed,
    /// Modal open to register a new scoreboard, form starts blank.
    Creating,
    /// Modal open editing the carried record, form pre-populated from it.
    Editing(Scoreboard),
}

impl Editor {
    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    /// Id of the record being edited, when in the editing state.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Editor::Editing(record) => Some(&record.id),
            Editor::Closed | Editor::Creating => None,
        }
    }

    /// Modal heading for the current state.
    pub fn title(&self) -> &'static str {
        match self {
            Editor::Editing(_) => "Editar placar",
            Editor::Closed | Editor::Creating => "Criar placar",
        }
    }
}

/// Required fields of the scoreboard form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Description,
    SerialNumber,
    StaticToken,
}

impl Field {
    /// Message shown under the input when the field is left empty.
    pub fn requirement_message(self) -> &'static str {
        match self {
            Field::Description => "Por favor escolha uma descrição",
            Field::SerialNumber => "Por favor digite o identificador único do placar",
            Field::StaticToken => "Por favor digite o token estático do placar",
        }
    }
}

/// Validation outcome listing the required fields left empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub missing: Vec<Field>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Requirement message for a field, when that field is missing.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.missing.contains(&field).then(|| field.requirement_message())
    }
}

/// Transient form fields while a create or edit is in progress.
///
/// Discarded on cancel and on successful submit; kept intact across a failed
/// submit so the user can correct and resubmit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreboardForm {
    pub description: String,
    pub serial_number: String,
    pub static_token: String,
}

impl ScoreboardForm {
    /// Pre-populate from an existing record for editing.
    pub fn from_record(record: &Scoreboard) -> Self {
        Self {
            description: record.description.clone(),
            serial_number: record.serial_number.clone(),
            static_token: record.static_token.clone(),
        }
    }

    /// Discard all entered values.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the three required fields and build the request payload.
    ///
    /// # Errors
    ///
    /// Returns the set of empty fields when any required value is missing.
    /// Validation failure must block the network request entirely.
    pub fn validate(&self) -> Result<ScoreboardPayload, FormErrors> {
        let mut missing = Vec::new();
        if self.description.trim().is_empty() {
            missing.push(Field::Description);
        }
        if self.serial_number.trim().is_empty() {
            missing.push(Field::SerialNumber);
        }
        if self.static_token.trim().is_empty() {
            missing.push(Field::StaticToken);
        }
        if !missing.is_empty() {
            return Err(FormErrors { missing });
        }
        Ok(ScoreboardPayload {
            description: self.description.trim().to_owned(),
            serial_number: self.serial_number.trim().to_owned(),
            static_token: self.static_token.trim().to_owned(),
        })
    }
}
