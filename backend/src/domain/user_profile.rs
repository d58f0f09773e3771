//! Static user fields echoed by the profile endpoint.

/// User identity configured at process start.
///
/// Each field is optional: an unset environment variable leaves the field
/// out of the response rather than failing startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Contact email address.
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Technology stack description, e.g. `Rust/actix-web`.
    pub stack: Option<String>,
}

impl UserProfile {
    /// Build a profile with every field set.
    ///
    /// # Examples
    /// ```
    /// use profile_api::domain::UserProfile;
    ///
    /// let user = UserProfile::new("ada@example.com", "Ada", "Rust");
    /// assert_eq!(user.name.as_deref(), Some("Ada"));
    /// ```
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        stack: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            name: Some(name.into()),
            stack: Some(stack.into()),
        }
    }

    /// Names of the fields that were not configured.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("email", self.email.is_none()),
            ("name", self.name.is_none()),
            ("stack", self.stack.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, missing)| missing.then_some(field))
        .collect()
    }
}
