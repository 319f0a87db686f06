mod common;
mod end_to_end;
mod url_parsing;
