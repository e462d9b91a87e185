pub mod generator;
pub mod prompts;
pub mod validator;
