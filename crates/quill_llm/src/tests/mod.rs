mod client;
mod prompt;
