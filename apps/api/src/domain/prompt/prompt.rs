/// Input for creating a prompt template
///
/// # Invariants
/// - Title cannot be blank
/// - Template text cannot be blank
/// - Description may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrompt {
    title: String,
    description: String,
    template: String,
}

impl NewPrompt {
    /// Validates and builds a new template draft
    ///
    /// # Example
    /// ```
    /// use promptdeck_api::domain::prompt::NewPrompt;
    ///
    /// let draft = NewPrompt::new(
    ///     "Explain".to_string(),
    ///     String::new(),
    ///     "Explain {{input}} simply".to_string(),
    /// ).expect("valid prompt");
    ///
    /// assert_eq!(draft.title(), "Explain");
    /// ```
    pub fn new(title: String, description: String, template: String) -> Result<Self, String> {
        validate_title(&title)?;
        validate_template(&template)?;

        Ok(Self {
            title,
            description,
            template,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

/// Partial update for a prompt template
///
/// Only the fields that are `Some` replace the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptPatch {
    title: Option<String>,
    description: Option<String>,
    template: Option<String>,
}

impl PromptPatch {
    /// Validates the fields that are present
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        template: Option<String>,
    ) -> Result<Self, String> {
        if let Some(title) = &title {
            validate_title(title)?;
        }
        if let Some(template) = &template {
            validate_template(template)?;
        }

        Ok(Self {
            title,
            description,
            template,
        })
    }

    /// Returns true when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.template.is_none()
    }
}

/// A stored prompt template
///
/// `template` holds the raw text including any `{{input}}` / `{{search}}`
/// placeholders; they are only resolved at processing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    id: i64,
    title: String,
    description: String,
    template: String,
    created_by: i64,
}

impl PromptTemplate {
    /// Materializes a draft once the repository has assigned an id
    pub fn from_draft(id: i64, draft: NewPrompt, created_by: i64) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            template: draft.template,
            created_by,
        }
    }

    /// Shallow merge of a patch into this template
    ///
    /// The id and creator are never touched.
    pub fn apply(&mut self, patch: PromptPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(template) = patch.template {
            self.template = template;
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// ID of the admin who created the template
    pub fn created_by(&self) -> i64 {
        self.created_by
    }
}

fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    Ok(())
}

fn validate_template(template: &str) -> Result<(), String> {
    if template.trim().is_empty() {
        return Err("Template cannot be empty".to_string());
    }
    Ok(())
}
