// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

/// A contiguous UTF-8 text buffer that a [`SpannedText`] can wrap.
///
/// Runs are stored as byte ranges into this buffer, and layout passes need
/// to iterate its characters, so implementors expose the whole text as a
/// single `&str`; everything else is derived from that.
///
/// [`SpannedText`]: crate::SpannedText
pub trait TextStorage {
    /// Borrow the text as a string slice.
    fn as_str(&self) -> &str;

    /// The length of the underlying text, in bytes.
    fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return whether `index` is a UTF-8 character boundary in the text.
    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }
}

macro_rules! impl_text_storage {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextStorage for $ty {
                fn as_str(&self) -> &str {
                    self
                }
            }
        )*
    };
}

impl_text_storage!(String, &str, Box<str>, Arc<str>, Cow<'_, str>);

#[cfg(test)]
mod tests {
    use super::TextStorage;
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;

    #[test]
    fn derived_views_follow_as_str() {
        let s = "hello";
        assert_eq!(TextStorage::as_str(&s), "hello");
        assert_eq!(TextStorage::len(&s), 5);
        assert!(!TextStorage::is_empty(&s));
        assert!(TextStorage::is_empty(&""));
    }

    #[test]
    fn every_storage_kind_agrees() {
        fn len_of<T: TextStorage>(t: &T) -> usize {
            t.len()
        }
        assert_eq!(len_of(&String::from("abc")), 3);
        assert_eq!(len_of(&"abc"), 3);
        assert_eq!(len_of(&Box::<str>::from("abc")), 3);
        assert_eq!(len_of(&Arc::<str>::from("abc")), 3);
        assert_eq!(len_of(&Cow::Borrowed("abc")), 3);
    }

    #[test]
    fn char_boundaries_respect_multibyte_text() {
        // "é" is 2 bytes; the flag emoji pair is two 4-byte codepoints.
        let accented = "éclair";
        assert!(accented.is_char_boundary(0));
        assert!(accented.is_char_boundary(2));
        assert!(!TextStorage::is_char_boundary(&accented, 1));

        let flags = "🇯🇵";
        assert_eq!(TextStorage::len(&flags), 8);
        for boundary in [0, 4, 8] {
            assert!(TextStorage::is_char_boundary(&flags, boundary));
        }
        for interior in [1, 3, 5, 7] {
            assert!(!TextStorage::is_char_boundary(&flags, interior));
        }
    }
}
