//! Passenger name handling.
//!
//! The airline matches reservations on an exact (first, last) pair, but
//! travellers with two-word given names or surnames are often booked with
//! the split in a different place than they type it. [`alternate`] produces
//! the other plausible split so a failed lookup can be retried once.

/// Compute the alternate (first, last) split for a two-part name.
///
/// - One-token first name and two-token last name: the first surname token
///   moves into the first name.
/// - Two-token first name and one-token last name: the second given-name
///   token moves into the last name.
/// - Anything else is returned unchanged, meaning no alternate exists.
///
/// # Examples
///
/// ```
/// use southy::domain::alternate;
///
/// assert_eq!(alternate("Jo", "Smith Jones"), ("Jo Smith".to_string(), "Jones".to_string()));
/// assert_eq!(alternate("Jo Ann", "Smith"), ("Jo".to_string(), "Ann Smith".to_string()));
/// assert_eq!(alternate("Jo", "Smith"), ("Jo".to_string(), "Smith".to_string()));
/// ```
pub fn alternate(first: &str, last: &str) -> (String, String) {
    let firsts: Vec<&str> = first.split_whitespace().collect();
    let lasts: Vec<&str> = last.split_whitespace().collect();

    match (firsts.as_slice(), lasts.as_slice()) {
        ([given], [middle, surname]) => (format!("{given} {middle}"), (*surname).to_string()),
        ([given, middle], [surname]) => ((*given).to_string(), format!("{middle} {surname}")),
        _ => (first.to_string(), last.to_string()),
    }
}

/// Uppercase the first character and lowercase the rest.
///
/// ```
/// use southy::domain::capitalize;
///
/// assert_eq!(capitalize("SMITH"), "Smith");
/// assert_eq!(capitalize("o'neil"), "O'neil");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split a passenger's full name into capitalized (first, last).
///
/// Middle names are dropped: the first whitespace token becomes the first
/// name and the last token the last name. Returns `None` for a blank name.
pub fn split_full_name(full_name: &str) -> Option<(String, String)> {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next()?;
    let last = tokens.next_back().unwrap_or(first);
    Some((capitalize(first), capitalize(last)))
}
