//! Gift tracking — which of the three gifts have been opened.
//!
//! The set only grows. Once all three are in it, `all_opened()` stays true
//! for the rest of the session.

use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::session::SessionError;
use crate::session::view::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftId {
    Songs,
    Letter,
    Photos,
}

impl GiftId {
    /// Display order on the gifts page: Gift 1, Gift 2, Gift 3.
    pub const ALL: [GiftId; 3] = [GiftId::Songs, GiftId::Letter, GiftId::Photos];

    pub fn as_str(self) -> &'static str {
        match self {
            GiftId::Songs => "songs",
            GiftId::Letter => "letter",
            GiftId::Photos => "photos",
        }
    }

    /// The view a gift reveals when opened.
    pub fn view(self) -> ViewState {
        match self {
            GiftId::Songs => ViewState::Songs,
            GiftId::Letter => ViewState::Letter,
            GiftId::Photos => ViewState::Photos,
        }
    }
}

impl FromStr for GiftId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GiftId::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| SessionError::UnknownGift(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GiftSet {
    opened: BTreeSet<GiftId>,
}

impl GiftSet {
    /// Mark a gift opened. Re-opening is a no-op.
    pub fn open(&mut self, id: GiftId) {
        self.opened.insert(id);
    }

    pub fn is_opened(&self, id: GiftId) -> bool {
        self.opened.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.opened.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opened.is_empty()
    }

    pub fn all_opened(&self) -> bool {
        self.opened.len() == GiftId::ALL.len()
    }
}
