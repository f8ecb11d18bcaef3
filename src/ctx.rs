use core::{
    fmt,
    marker::PhantomData,
    sync::atomic::{AtomicU8, Ordering},
};

use bitflags::bitflags;

use crate::util::const_assert;

/// A decimal arithmetic context.
///
/// A `Ctx` carries the rounding mode used by its operations and
/// accumulates the [`Condition`]s they raise. Unlike the
/// operator traits, it never reads the process-wide rounding
/// mode.
///
/// ```
/// use decimal754::{Condition, Ctx, RoundingMode, d64};
///
/// let mut ctx = Ctx::<d64>::new().with_rounding_mode(RoundingMode::ToZero);
/// let x = ctx.div(d64::from_u32(2), d64::from_u32(3));
/// assert_eq!(x.to_string(), "0.6666666666666666");
/// assert!(ctx.status().contains(Condition::INEXACT));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ctx<D> {
    pub(crate) rounding: RoundingMode,
    pub(crate) status: Condition,
    pub(crate) _dec: PhantomData<D>,
}

impl<D> Ctx<D> {
    /// Creates a context that rounds with
    /// [`RoundingMode::ToNearestEven`].
    pub const fn new() -> Self {
        Self {
            rounding: RoundingMode::ToNearestEven,
            status: Condition::empty(),
            _dec: PhantomData,
        }
    }

    /// Creates a context that rounds with the current
    /// process-wide rounding mode.
    pub fn current() -> Self {
        let mode = rounding_mode();
        #[cfg(feature = "log")]
        log::debug!("new context rounding {mode}");
        Self::new().with_rounding_mode(mode)
    }

    /// Sets the context's rounding mode.
    pub const fn with_rounding_mode(self, mode: RoundingMode) -> Self {
        let mut ctx = self;
        ctx.rounding = mode;
        ctx
    }

    /// Returns the context's rounding mode.
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns the conditions raised since the context was
    /// created or last cleared.
    pub const fn status(&self) -> Condition {
        self.status
    }

    /// Clears the accumulated conditions.
    pub fn clear_status(&mut self) {
        self.status = Condition::empty();
    }

    pub(crate) fn raise(&mut self, cond: Condition) {
        self.status |= cond;
    }
}

impl<D> Default for Ctx<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// An IEEE 754-2008 rounding-direction attribute.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// IEEE 754-2008 roundTiesToEven.
    ///
    /// - Under 0.5 rounds down.
    /// - Over 0.5 rounds up.
    /// - Exactly 0.5 rounds to the nearest even.
    #[default]
    ToNearestEven = 0,
    /// IEEE 754-2008 roundTiesToAway.
    ///
    /// Like [`ToNearestEven`][Self::ToNearestEven], except that
    /// 0.5 rounds away from zero.
    ToNearestAway = 1,
    /// IEEE 754-2008 roundTowardZero.
    ///
    /// AKA truncation.
    ToZero = 2,
    /// IEEE 754-2008 roundTowardNegative.
    ///
    /// AKA floor.
    ToNegativeInf = 3,
    /// IEEE 754-2008 roundTowardPositive.
    ///
    /// AKA ceiling.
    ToPositiveInf = 4,
}

impl RoundingMode {
    const fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::ToNearestAway,
            2 => Self::ToZero,
            3 => Self::ToNegativeInf,
            4 => Self::ToPositiveInf,
            _ => Self::ToNearestEven,
        }
    }

    /// Reports whether a coefficient should be incremented
    /// after truncation.
    ///
    /// - `digit` is the most significant discarded digit.
    /// - `sticky` reports whether any other discarded digit
    ///   was non-zero.
    /// - `odd` reports whether the truncated coefficient is
    ///   odd.
    /// - `sign` is the sign of the value (true for negative).
    pub const fn should_increment(self, digit: u32, sticky: bool, odd: bool, sign: bool) -> bool {
        debug_assert!(digit <= 9);

        match self {
            Self::ToNearestEven => digit > 5 || (digit == 5 && (sticky || odd)),
            Self::ToNearestAway => digit >= 5,
            Self::ToZero => false,
            Self::ToNegativeInf => sign && (digit != 0 || sticky),
            Self::ToPositiveInf => !sign && (digit != 0 || sticky),
        }
    }

    /// Parses the rounding mode names used by decTest files.
    #[cfg(test)]
    pub(crate) fn try_from_str(s: &str) -> Option<Self> {
        let mode = match s {
            "ceiling" => Self::ToPositiveInf,
            "down" => Self::ToZero,
            "floor" => Self::ToNegativeInf,
            "half_even" => Self::ToNearestEven,
            "half_up" => Self::ToNearestAway,
            _ => return None,
        };
        Some(mode)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ToNearestEven => "roundTiesToEven",
            Self::ToNearestAway => "roundTiesToAway",
            Self::ToZero => "roundTowardZero",
            Self::ToNegativeInf => "roundTowardNegative",
            Self::ToPositiveInf => "roundTowardPositive",
        };
        f.write_str(s)
    }
}

const_assert!(
    (cfg!(feature = "round-const-ties-away") as u8
        + cfg!(feature = "round-const-toward-zero") as u8
        + cfg!(feature = "round-const-downward") as u8
        + cfg!(feature = "round-const-upward") as u8)
        <= 1,
    "at most one `round-const-*` feature may be enabled"
);

/// The rounding mode used by `const` arithmetic.
///
/// It is fixed at build time by the `round-const-*` cargo
/// features and defaults to [`RoundingMode::ToNearestEven`].
/// `const` evaluation never observes [`rounding_mode`].
pub const ROUNDING_CONST: RoundingMode = if cfg!(feature = "round-const-ties-away") {
    RoundingMode::ToNearestAway
} else if cfg!(feature = "round-const-toward-zero") {
    RoundingMode::ToZero
} else if cfg!(feature = "round-const-downward") {
    RoundingMode::ToNegativeInf
} else if cfg!(feature = "round-const-upward") {
    RoundingMode::ToPositiveInf
} else {
    RoundingMode::ToNearestEven
};

static ROUNDING: AtomicU8 = AtomicU8::new(RoundingMode::ToNearestEven as u8);

/// Returns the process-wide rounding mode.
///
/// The mode is shared by every thread. Code that needs
/// independent rounding per thread should use a [`Ctx`].
pub fn rounding_mode() -> RoundingMode {
    RoundingMode::from_u8(ROUNDING.load(Ordering::Relaxed))
}

/// Sets the process-wide rounding mode and returns the
/// previous mode.
///
/// It affects the operator traits and every other
/// non-`const` operation that does not take a [`Ctx`].
pub fn set_rounding_mode(mode: RoundingMode) -> RoundingMode {
    let prev = RoundingMode::from_u8(ROUNDING.swap(mode as u8, Ordering::Relaxed));
    #[cfg(feature = "log")]
    log::debug!("rounding mode changed from {prev} to {mode}");
    prev
}

/// An exceptional condition raised during or after an operation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Condition(u32);

bitflags! {
    impl Condition: u32 {
        /// Occurs if the exponent has been modified to fit the
        /// constraints of the decimal representation.
        const CLAMPED = 0x1;
        /// Occurs when a string is converted to a decimal and
        /// does not have a valid syntax.
        const CONVERSION_SYNTAX = 0x2;
        /// Occurs when division is attempted with a finite,
        /// non-zero dividend and a divisor with a value of zero.
        const DIVISION_BY_ZERO = 0x4;
        /// Occurs when division is attempted with in which both
        /// the divided and divisor are zero.
        const DIVISION_UNDEFINED = 0x10;
        /// Occurs when the result of an operation (e.g.
        /// division) is not exact, or when the
        /// [OVERFLOW][Condition::OVERFLOW] or
        /// [UNDERFLOW][Condition::UNDERFLOW] conditions occur.
        const INEXACT = 0x20;
        /// Occurs when:
        ///
        /// - An operand to an operation is a signaling NaN.
        /// - An attempt is made to add or subtract infinities of
        /// opposite signs.
        /// - An attempt is made to multiply zero by an infinity
        /// of either sign.
        /// - An attempt is made to divide an infinity by an
        /// infinity, or zero by zero.
        /// - The divisor for a remainder operation is zero.
        /// - The dividend for a remainder operation is an
        /// infinity.
        /// - Exactly one operand of the quantize operation is an
        /// infinity, or the result of a quantize operation would
        /// require greater precision than is available.
        const INVALID_OPERATION = 0x100;
        /// Occurs when the adjusted exponent, after rounding,
        /// would be greater than the maximum allowed exponent.
        /// ([INEXACT][Condition::INEXACT] and
        /// [ROUNDED][Condition::ROUNDED] will also be raised.)
        const OVERFLOW = 0x200;
        /// Occurs when the result of an operation is rounded, or
        /// if an [OVERFLOW][Condition::OVERFLOW] or
        /// [UNDERFLOW][Condition::UNDERFLOW] occurs.
        const ROUNDED = 0x400;
        /// Ocurs when the result of a conversion or operation is
        /// subnormal (i.e. the adjusted exponent is less than
        /// the minimum allowed exponent before any rounding).
        const SUBNORMAL = 0x800;
        /// Occurs when the result is inexact and the adjusted
        /// exponent would be smaller (more negative) than the
        /// minimum allowed exponent.
        const UNDERFLOW = 0x1000;
    }
}
