macro_rules! const_assert {
    ($($tt:tt)*) => {
        const _: () = ::core::assert!($($tt)*);
    }
}
pub(crate) use const_assert;

/// Reports whether `s` and `t` are equal, ignoring ASCII case.
///
/// `t` must be lowercase.
pub(crate) const fn equal_fold_ascii(s: &[u8], t: &[u8]) -> bool {
    if s.len() != t.len() {
        return false;
    }
    let mut i = 0;
    while i < s.len() {
        if s[i].to_ascii_lowercase() != t[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// A fixed-size byte sink that only ever holds ASCII.
pub(crate) struct Ascii<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> Ascii<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    /// Appends `b`. Bytes past the end of the sink are dropped.
    pub fn push(&mut self, b: u8) {
        debug_assert!(b.is_ascii());
        if let Some(v) = self.buf.get_mut(self.len) {
            *v = b;
            self.len += 1;
        }
    }

    pub fn extend(&mut self, s: &[u8]) {
        for &b in s {
            self.push(b);
        }
    }

    pub fn as_str(&self) -> &str {
        let s = self.buf.get(..self.len).unwrap_or_default();
        // SAFETY: `push` only accepts ASCII.
        unsafe { core::str::from_utf8_unchecked(s) }
    }
}

impl<const N: usize> core::fmt::Write for Ascii<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        if self.len + s.len() > N || !s.is_ascii() {
            return Err(core::fmt::Error);
        }
        self.extend(s.as_bytes());
        Ok(())
    }
}
