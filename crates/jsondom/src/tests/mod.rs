mod parse_bad;
mod properties;
mod streams;
