/// Drop repeated entries, keeping the first occurrence of each in place
///
/// Quadratic, which is fine for suggestion lists of a few dozen entries and
/// avoids hashing every suggestion.
pub fn remove_duplicates<T: PartialEq>(suggestions: &mut Vec<T>) {
    if suggestions.len() < 2 {
        return;
    }
    let mut index = 1;
    while index < suggestions.len() {
        if suggestions[..index].contains(&suggestions[index]) {
            suggestions.remove(index);
        } else {
            index += 1;
        }
    }
}
