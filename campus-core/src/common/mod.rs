pub mod db_errors;
pub mod string_list;
