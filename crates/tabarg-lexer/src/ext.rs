use std::ffi::OsStr;

pub(crate) trait OsStrExt: private::Sealed {
    /// Converts to a string slice.
    fn try_str(&self) -> Result<&str, std::str::Utf8Error>;
    /// Returns `true` if the given pattern matches a prefix of this
    /// string slice.
    #[allow(dead_code)]
    fn starts_with(&self, prefix: &str) -> bool;
    /// Returns the byte index of the first occurrence of `needle`.
    ///
    /// Returns [`None`] if the pattern doesn't match.
    fn find(&self, needle: &str) -> Option<usize>;
    /// Returns a string slice with the prefix removed.
    ///
    /// If the string does not start with `prefix`, returns `None`.
    fn strip_prefix(&self, prefix: &str) -> Option<&OsStr>;
    /// Splits the string on the first occurrence of `needle`, dropping the
    /// delimiter itself.
    fn split_once(&self, needle: &str) -> Option<(&OsStr, &OsStr)>;
}

impl OsStrExt for OsStr {
    fn try_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(self.as_encoded_bytes())
    }

    #[allow(dead_code)]
    fn starts_with(&self, prefix: &str) -> bool {
        self.as_encoded_bytes().starts_with(prefix.as_bytes())
    }

    fn find(&self, needle: &str) -> Option<usize> {
        let bytes = self.as_encoded_bytes();
        let needle = needle.as_bytes();
        if needle.is_empty() {
            return Some(0);
        }
        bytes.windows(needle.len()).position(|w| w == needle)
    }

    fn strip_prefix(&self, prefix: &str) -> Option<&OsStr> {
        self.as_encoded_bytes()
            .strip_prefix(prefix.as_bytes())
            // SAFETY:
            // - The bytes came from `as_encoded_bytes`
            // - `prefix` is a `&str` so the cut lands on a UTF-8 boundary
            .map(|rest| unsafe { OsStr::from_encoded_bytes_unchecked(rest) })
    }

    fn split_once(&self, needle: &str) -> Option<(&OsStr, &OsStr)> {
        let start = self.find(needle)?;
        let end = start + needle.len();
        let bytes = self.as_encoded_bytes();
        // SAFETY:
        // - The bytes came from `as_encoded_bytes`
        // - `needle` is a `&str` so both cuts land on UTF-8 boundaries
        unsafe {
            Some((
                OsStr::from_encoded_bytes_unchecked(&bytes[..start]),
                OsStr::from_encoded_bytes_unchecked(&bytes[end..]),
            ))
        }
    }
}

mod private {
    pub(crate) trait Sealed {}

    impl Sealed for std::ffi::OsStr {}
}
