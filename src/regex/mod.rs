// Regular expressions compiled once and cached for the life of the process

#[macro_use]
mod cache;
