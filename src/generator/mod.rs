pub mod dictionary;

/// Supplies the words a test is built from.
pub trait WordSource {
    /// `n` words picked uniformly at random. Repeats are allowed.
    fn random_words(&mut self, n: usize) -> Vec<String>;

    /// Every word exactly once, in random order.
    fn all_words(&mut self) -> Vec<String>;
}
