#[cfg(test)]
#[macro_use]
mod common;
#[cfg(test)]
mod test_errors;
#[cfg(test)]
mod test_parser;
