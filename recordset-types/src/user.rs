use serde::{Deserialize, Serialize};

/// A user record.
///
/// `id` is assumed to be unique within a collection. Operations keyed by id
/// (`create_user_map`, `merge_and_deduplicate_users`) do not enforce this:
/// a later record with the same id overwrites an earlier one.
///
/// # Examples
///
/// ```
/// use recordset_types::user::User;
///
/// let user = User::new(7, "Bob", 19, false, "Sales");
/// assert_eq!(user.tags, None);
/// assert!(!user.has_tag("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub is_active: bool,
    pub department: String,
    /// Ordered tag list. `None` means the record carries no tags at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl User {
    /// Create a user without tags.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        age: u32,
        is_active: bool,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            is_active,
            department: department.into(),
            tags: None,
        }
    }

    /// Replace the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the tag list contains `tag` exactly. Users without tags never match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// A user augmented with the derived `is_adult` flag.
///
/// Serializes flat, i.e. `{"id": 1, ..., "isAdult": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdultUser {
    #[serde(flatten)]
    pub user: User,
    pub is_adult: bool,
}
