mod directives_tests;
mod unclosed_tests;
mod unexpected_tests;
