// Implements `AsciiChar` for an integer code-unit type by delegating to the
// ASCII range checks of `u8`. Values above 0x7f are never letters.
macro_rules! impl_ascii_char {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::chars::AsciiChar for $ty {
                const SPACE: Self = b' ' as $ty;

                fn is_ascii_lowercase(self) -> bool {
                    (b'a' as $ty..=b'z' as $ty).contains(&self)
                }

                fn is_ascii_uppercase(self) -> bool {
                    (b'A' as $ty..=b'Z' as $ty).contains(&self)
                }

                fn to_ascii_uppercase(self) -> Self {
                    if self.is_ascii_lowercase() { self - 0x20 } else { self }
                }

                fn to_ascii_lowercase(self) -> Self {
                    if self.is_ascii_uppercase() { self + 0x20 } else { self }
                }
            }
        )*
    };
}
