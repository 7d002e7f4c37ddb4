//! Transient notice queue for operation outcomes.
//!
//! DESIGN
//! ======
//! Mutation handlers push localized success/error texts here and move on; the
//! `NoticeHost` component owns rendering and expiry. Ids are monotonic so a
//! click can dismiss one entry while later pushes keep ordering stable.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Visual category of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single toast entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Queue-unique identifier used for dismissal.
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
    /// Host poll ticks this notice has been visible.
    pub age_ticks: u32,
}

/// Shared notice queue, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticesState {
    pub items: Vec<Notice>,
    pub next_id: u64,
}

impl NoticesState {
    /// Ticks a notice stays visible before auto-dismissal. The host advances
    /// one tick every 500 ms, so six ticks give the 3 s display window.
    pub const TTL_TICKS: u32 = 6;

    /// Queue a success notice and return its id.
    pub fn push_success(&mut self, text: String) -> u64 {
        self.push(NoticeKind::Success, text)
    }

    /// Queue an error notice and return its id.
    pub fn push_error(&mut self, text: String) -> u64 {
        self.push(NoticeKind::Error, text)
    }

    fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            kind,
            text,
            age_ticks: 0,
        });
        id
    }

    /// Remove a notice by id; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    /// Advance every notice's age by one tick and drop expired entries.
    pub fn tick(&mut self) {
        for notice in &mut self.items {
            notice.age_ticks += 1;
        }
        self.items.retain(|notice| notice.age_ticks < Self::TTL_TICKS);
    }
}
