const ALPHABET_LEN: usize = 26;

/// Spreadsheet-column style identifier for a zero-based index
///
/// `0` is `A`, `25` is `Z`, `26` is `AA` and `52` is `BA`. There is no zero
/// digit: after each full pass through the alphabet the next position
/// starts again at `A`.
///
/// # Examples
/// ```
/// use flowchart_data::section::id_from_index;
///
/// assert_eq!(id_from_index(0), "A");
/// assert_eq!(id_from_index(27), "AB");
/// ```
pub fn id_from_index(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(char::from(b'A' + (n % ALPHABET_LEN) as u8));
        if n < ALPHABET_LEN {
            break;
        }
        n = n / ALPHABET_LEN - 1;
    }

    letters.iter().rev().collect()
}
