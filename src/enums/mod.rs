pub mod analysis_section;
pub mod commands;
pub mod fetch_error;
pub mod model_error;
pub mod output_format;
pub mod pipeline_stage;
