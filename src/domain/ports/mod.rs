pub mod clock;
pub mod table_parser;
pub mod table_source;
