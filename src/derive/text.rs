//! String helpers shared by the derivations.

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A word is a maximal run of letters, so any non-letter (space, digit,
/// apostrophe, hyphen) starts a new word: `o'brien` becomes `O'Brien` and
/// `2nd plot` becomes `2Nd Plot`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Remove comma artifacts left at the ends of a joined list.
///
/// Trailing commas are dropped; when the value starts with a comma, leading
/// commas and spaces are dropped too.
pub fn trim_list_artifacts(s: &str) -> &str {
    let s = s.trim_end_matches(',');
    if s.starts_with(',') {
        s.trim_start_matches([' ', ','])
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_words() {
        assert_eq!(title_case("survey one"), "Survey One");
    }

    #[test]
    fn title_case_lowercases_rest_of_word() {
        assert_eq!(title_case("FOUND UNDER OAK"), "Found Under Oak");
        assert_eq!(title_case("mIxEd"), "Mixed");
    }

    #[test]
    fn title_case_treats_non_letters_as_boundaries() {
        assert_eq!(title_case("o'brien"), "O'Brien");
        assert_eq!(title_case("survey-one"), "Survey-One");
        assert_eq!(title_case("2nd plot"), "2Nd Plot");
    }

    #[test]
    fn title_case_keeps_whitespace() {
        assert_eq!(title_case("  two  spaces "), "  Two  Spaces ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_handles_non_ascii() {
        assert_eq!(title_case("étude des champignons"), "Étude Des Champignons");
    }

    #[test]
    fn trims_leading_comma_space() {
        assert_eq!(trim_list_artifacts(", host: Quercus"), "host: Quercus");
    }

    #[test]
    fn trims_trailing_commas() {
        assert_eq!(trim_list_artifacts("Quercus sp., host: Acer,,"), "Quercus sp., host: Acer");
    }

    #[test]
    fn leaves_clean_lists_alone() {
        assert_eq!(trim_list_artifacts("Quercus sp., host: Quercus"), "Quercus sp., host: Quercus");
        assert_eq!(trim_list_artifacts(" leading space"), " leading space");
    }
}
