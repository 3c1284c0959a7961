/// Lowercases every title-cased part of `name`, splitting on `delimiter`.
///
/// Many source ontologies capitalize every word of a concept name by
/// convention, which creates duplicate-looking entries next to sources that
/// use natural casing ("Disease Of Heart" vs. "disease of heart"). Blanket
/// lowercasing would mangle abbreviations such as "ALS", so only parts in
/// strict title form are converted; everything else passes through untouched.
pub fn lowercase_title_parts(name: &str, delimiter: &str) -> String {
    name.split(delimiter)
        .map(|part| {
            if is_title_case(part) {
                part.to_lowercase()
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Convenience form of [`lowercase_title_parts`] for space-delimited names.
pub fn lowercase_title_words(name: &str) -> String {
    lowercase_title_parts(name, " ")
}

/// A part is title case when it contains at least one alphabetic character,
/// the first alphabetic character is uppercase, and every later alphabetic
/// character is lowercase. Digits and punctuation are ignored by the check,
/// so "Heart," counts while "ALS", "McDonald", and "123" do not.
fn is_title_case(part: &str) -> bool {
    let mut alphabetic = part.chars().filter(|ch| ch.is_alphabetic());
    match alphabetic.next() {
        Some(first) if first.is_uppercase() => alphabetic.all(|ch| ch.is_lowercase()),
        _ => false,
    }
}
