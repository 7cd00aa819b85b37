/// Counts Unicode code points, not bytes.
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::count_chars;

    #[test]
    fn counts_ascii() {
        assert_eq!(count_chars("hello"), 5);
    }

    #[test]
    fn counts_empty_as_zero() {
        assert_eq!(count_chars(""), 0);
    }

    #[test]
    fn counts_code_points_not_bytes() {
        assert_eq!(count_chars("こんにちは"), 5);
        assert_eq!(count_chars("🦀"), 1);
    }
}
