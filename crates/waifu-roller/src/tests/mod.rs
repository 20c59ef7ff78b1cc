mod prompt;
mod support;
