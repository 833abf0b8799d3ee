//! Two-field project creation form.

use kb_core::ProjectInput;
use log::debug;

/// Holds the in-progress `name` and `description` and hands a complete
/// [`ProjectInput`] to its owner on submit.
///
/// The form does not observe what the owner does with the input: once the
/// callback has been invoked the fields are cleared, whether or not the
/// creation later succeeds.
pub struct ProjectForm<F>
where
    F: FnMut(ProjectInput),
{
    name: String,
    description: String,
    on_submit: F,
}

impl<F> ProjectForm<F>
where
    F: FnMut(ProjectInput),
{
    pub fn new(on_submit: F) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            on_submit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Returns whether the callback fired. Incomplete input is dropped
    /// without feedback and the fields are left as they were.
    pub fn submit(&mut self) -> bool {
        let input = ProjectInput::new(self.name.as_str(), self.description.as_str());

        if !input.is_complete() {
            debug!("Project form submitted with an empty field, ignoring");
            return false;
        }

        (self.on_submit)(input);

        self.name.clear();
        self.description.clear();
        true
    }
}
