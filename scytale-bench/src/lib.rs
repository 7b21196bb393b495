//! Benchmark inputs shared by the Scytale benches.

/// Message lengths exercised by every bench, in characters.
pub const MESSAGE_LENGTHS: [usize; 3] = [96, 1_536, 24_576];

/// A lowercase message of `len` letters cycling through the alphabet.
pub fn lowercase_message(len: usize) -> String {
    (b'a'..=b'z').cycle().take(len).map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_message() {
        assert_eq!(lowercase_message(0), "");
        assert_eq!(lowercase_message(28), "abcdefghijklmnopqrstuvwxyzab");
    }
}
