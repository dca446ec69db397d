mod declarations_tests;
mod expressions_tests;
mod if_config_tests;
mod statements_tests;
mod trivia_tests;
mod types_tests;
