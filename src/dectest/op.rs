use std::fmt;

/// A decTest operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Op {
    Abs,
    Add,
    Apply,
    Canonical,
    Class,
    Compare,
    CompareSig,
    CompareTotal,
    CompareTotMag,
    Copy,
    CopyAbs,
    CopyNegate,
    CopySign,
    Divide,
    Max,
    Min,
    Multiply,
    NextMinus,
    NextPlus,
    Quantize,
    Reduce,
    Remainder,
    SameQuantum,
    Subtract,
    ToIntegralX,
    ToSci,
}

impl Op {
    const ALL: [(&'static str, Self); 26] = [
        ("abs", Self::Abs),
        ("add", Self::Add),
        ("apply", Self::Apply),
        ("canonical", Self::Canonical),
        ("class", Self::Class),
        ("compare", Self::Compare),
        ("comparesig", Self::CompareSig),
        ("comparetotal", Self::CompareTotal),
        ("comparetotmag", Self::CompareTotMag),
        ("copy", Self::Copy),
        ("copyabs", Self::CopyAbs),
        ("copynegate", Self::CopyNegate),
        ("copysign", Self::CopySign),
        ("divide", Self::Divide),
        ("max", Self::Max),
        ("min", Self::Min),
        ("multiply", Self::Multiply),
        ("nextminus", Self::NextMinus),
        ("nextplus", Self::NextPlus),
        ("quantize", Self::Quantize),
        ("reduce", Self::Reduce),
        ("remainder", Self::Remainder),
        ("samequantum", Self::SameQuantum),
        ("subtract", Self::Subtract),
        ("tointegralx", Self::ToIntegralX),
        ("tosci", Self::ToSci),
    ];

    /// Looks up an operation by its (case insensitive) name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(s, _)| s.eq_ignore_ascii_case(name))
            .map(|&(_, op)| op)
    }

    /// Returns the number of operands.
    pub fn arity(self) -> usize {
        match self {
            Self::Abs
            | Self::Apply
            | Self::Canonical
            | Self::Class
            | Self::Copy
            | Self::CopyAbs
            | Self::CopyNegate
            | Self::NextMinus
            | Self::NextPlus
            | Self::Reduce
            | Self::ToIntegralX
            | Self::ToSci => 1,
            _ => 2,
        }
    }

    pub fn name(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|&&(_, op)| op == self)
            .map_or("?", |(s, _)| s)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
