use time::OffsetDateTime;

/// Store-managed bookkeeping timestamps, shared by every persisted entity.
/// Assigned by column defaults on insert and never exposed over HTTP.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AuditTimes {
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl AuditTimes {
    pub fn new(
        created_at: impl Into<OffsetDateTime>,
        updated_at: impl Into<OffsetDateTime>,
    ) -> Self {
        Self {
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }

    pub fn created_at(&self) -> &OffsetDateTime {
        &self.created_at
    }

    pub fn updated_at(&self) -> &OffsetDateTime {
        &self.updated_at
    }
}
