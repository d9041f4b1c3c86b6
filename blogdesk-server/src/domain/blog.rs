use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Blog {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: String,
    pub(crate) image: Option<String>,
    pub(crate) created_at: Option<String>,
}

/// Все поля поста, кроме id. Используется и для создания, и для полной замены.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BlogDraft {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: String,
    pub(crate) image: Option<String>,
    pub(crate) created_at: Option<String>,
}

impl Blog {
    pub(crate) fn from_draft(id: i64, draft: BlogDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            image: draft.image,
            created_at: draft.created_at,
        }
    }

    /// Полная замена: опциональные поля, не переданные в draft, сбрасываются.
    pub(crate) fn replace_with(&mut self, draft: BlogDraft) {
        *self = Self::from_draft(self.id, draft);
    }
}
