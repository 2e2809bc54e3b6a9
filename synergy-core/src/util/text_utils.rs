/// title-cases a label: the first letter of every run of letters is
/// uppercased and the remaining letters of the run are lowercased.
/// "papeleria el sol" -> "Papeleria El Sol", "o'neil gym" -> "O'Neil Gym"
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("primaria benito juarez"), "Primaria Benito Juarez");
        assert_eq!(title_case("clinica 24-horas"), "Clinica 24-Horas");
        assert_eq!(title_case("o'neil gym"), "O'Neil Gym");
        assert_eq!(title_case("farmacia ñandú"), "Farmacia Ñandú");
        assert_eq!(title_case(""), "");
    }
}
