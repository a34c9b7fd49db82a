pub mod llm;
pub mod mailer;
pub mod prompt_builder;
