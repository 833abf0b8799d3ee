mod project;
mod project_input;
