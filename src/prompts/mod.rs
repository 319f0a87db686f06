pub mod grading_prompt;
