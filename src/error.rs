//! Error definitions for pattern compilation.

use quick_error::quick_error;

quick_error! {
    /// An error that occurred while compiling a pattern.
    #[derive(Debug)]
    #[non_exhaustive]
    pub enum Error {
        /// The inner text of a `/.../` pattern is not a valid regular
        /// expression. Raised at pattern-compilation time, never mid-match.
        InvalidRegex(pattern: String, error: String) {
            display("Could not compile the regex pattern {:?}: {}", pattern, error)
        }
    }
}
