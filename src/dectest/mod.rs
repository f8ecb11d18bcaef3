//! Runs test cases written in the [decTest] format.
//!
//! [decTest]: https://speleotrove.com/decimal/dectest.html

#![cfg(test)]

mod op;
mod parse;

use std::fmt;

use anyhow::{anyhow, bail, Context, Result};

use self::{op::Op, parse::parse};
use crate::{
    bid::{Bid128, Bid32, Bid64},
    ctx::{Condition, Ctx, RoundingMode},
    dpd::{Dpd128, Dpd32, Dpd64},
};

/// A single test case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Test<'a> {
    pub line: usize,
    pub id: &'a str,
    pub extended: bool,
    pub clamp: bool,
    pub precision: u32,
    pub max_exp: i32,
    pub min_exp: i32,
    pub rounding: RoundingMode,
    pub op: Op,
    pub operands: Vec<&'a str>,
    pub result: &'a str,
    pub conds: Condition,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Outcome {
    Passed,
    Skipped,
}

impl Test<'_> {
    fn run<B: Backend>(&self) -> Result<Outcome> {
        if self.precision != B::PRECISION
            || self.max_exp != B::EMAX
            || self.min_exp != B::EMIN
            || !self.clamp
            || !self.extended
            || self.result == "?"
        {
            return Ok(Outcome::Skipped);
        }

        let (got, conds) = match (self.op, self.operands.as_slice()) {
            (Op::Apply | Op::ToSci, &[s]) if !s.starts_with('#') => {
                let (v, conds) = B::parse(s, self.rounding);
                (Value::Dec(v), conds)
            }
            (op, operands) => {
                let args = operands
                    .iter()
                    .map(|s| self.operand::<B>(s))
                    .collect::<Result<Vec<_>>>()?;
                B::eval(op, &args, self.rounding)?
            }
        };

        let (got, want) = match got {
            Value::Dec(v) => match self.result.strip_prefix('#') {
                Some(want) => (hex::encode(v.to_dpd_be()), want.to_ascii_lowercase()),
                None => (v.to_string(), self.result.to_owned()),
            },
            Value::Text(s) => (s.to_owned(), self.result.to_owned()),
        };
        if got != want {
            bail!("got `{got}`, expected `{want}`");
        }
        if conds != self.conds {
            bail!("got {conds:?}, expected {:?}", self.conds);
        }
        Ok(Outcome::Passed)
    }

    fn operand<B: Backend>(&self, s: &str) -> Result<B> {
        if let Some(s) = s.strip_prefix('#') {
            let bytes = hex::decode(s)?;
            return B::from_dpd_be(&bytes);
        }
        match B::parse(s, self.rounding) {
            (_, conds) if conds.contains(Condition::CONVERSION_SYNTAX) => {
                Err(anyhow!("invalid operand: `{s}`"))
            }
            (v, _) => Ok(v),
        }
    }
}

impl fmt::Display for Test<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.op)?;
        for s in &self.operands {
            write!(f, " '{s}'")?;
        }
        write!(f, " -> {}", self.result)
    }
}

/// The result of an operation.
enum Value<D> {
    Dec(D),
    Text(&'static str),
}

const fn ord_str(ord: std::cmp::Ordering) -> &'static str {
    match ord {
        std::cmp::Ordering::Less => "-1",
        std::cmp::Ordering::Equal => "0",
        std::cmp::Ordering::Greater => "1",
    }
}

trait Backend: Copy + fmt::Display + Sized {
    const PRECISION: u32;
    const EMAX: i32;
    const EMIN: i32;

    fn from_dpd_be(bytes: &[u8]) -> Result<Self>;
    fn to_dpd_be(self) -> Vec<u8>;

    /// Parses `s`, returning NaN if it is malformed.
    fn parse(s: &str, mode: RoundingMode) -> (Self, Condition);

    fn eval(op: Op, args: &[Self], mode: RoundingMode) -> Result<(Value<Self>, Condition)>;
}

macro_rules! impl_backend {
    ($bid:ty, $dpd:ty, $ucoeff:ty) => {
        impl Backend for $bid {
            const PRECISION: u32 = <$bid>::DIGITS;
            const EMAX: i32 = <$bid>::MAX_EXP as i32;
            const EMIN: i32 = <$bid>::MIN_EXP as i32;

            fn from_dpd_be(bytes: &[u8]) -> Result<Self> {
                let bytes = bytes
                    .try_into()
                    .with_context(|| format!("expected {} bytes", <$bid>::BYTES))?;
                Ok(<$dpd>::from_bits(<$ucoeff>::from_be_bytes(bytes)).to_bid())
            }

            fn to_dpd_be(self) -> Vec<u8> {
                self.to_dpd().to_be_bytes().to_vec()
            }

            fn parse(s: &str, mode: RoundingMode) -> (Self, Condition) {
                let mut ctx = Ctx::<$bid>::new().with_rounding_mode(mode);
                let v = ctx.parse(s).unwrap_or(<$bid>::NAN);
                (v, ctx.status())
            }

            fn eval(op: Op, args: &[Self], mode: RoundingMode) -> Result<(Value<Self>, Condition)> {
                let mut ctx = Ctx::<$bid>::new().with_rounding_mode(mode);
                let v = match (op, args) {
                    (Op::Abs, &[x]) => Value::Dec(x.abs()),
                    (Op::Add, &[x, y]) => Value::Dec(ctx.add(x, y)),
                    (Op::Apply | Op::ToSci, &[x]) => Value::Dec(x),
                    (Op::Canonical, &[x]) => Value::Dec(x.canonical()),
                    (Op::Class, &[x]) => Value::Text(x.class()),
                    (Op::Compare, &[x, y]) => Value::Dec(ctx.compare(x, y)),
                    (Op::CompareSig, &[x, y]) => Value::Dec(ctx.compare_signal(x, y)),
                    (Op::CompareTotal, &[x, y]) => Value::Dec(x.compare_total(y)),
                    (Op::CompareTotMag, &[x, y]) => Value::Text(ord_str(x.total_cmp_magnitude(y))),
                    (Op::Copy, &[x]) => Value::Dec(x),
                    (Op::CopyAbs, &[x]) => Value::Dec(x.copy_abs()),
                    (Op::CopyNegate, &[x]) => Value::Dec(x.copy_neg()),
                    (Op::CopySign, &[x, y]) => Value::Dec(x.copy_sign(y)),
                    (Op::Divide, &[x, y]) => Value::Dec(ctx.div(x, y)),
                    (Op::Max, &[x, y]) => Value::Dec(x.max(y)),
                    (Op::Min, &[x, y]) => Value::Dec(x.min(y)),
                    (Op::Multiply, &[x, y]) => Value::Dec(ctx.mul(x, y)),
                    (Op::NextMinus, &[x]) => Value::Dec(x.next_minus()),
                    (Op::NextPlus, &[x]) => Value::Dec(x.next_plus()),
                    (Op::Quantize, &[x, y]) => Value::Dec(ctx.quantize(x, y)),
                    (Op::Reduce, &[x]) => Value::Dec(x.reduce()),
                    (Op::Remainder, &[x, y]) => Value::Dec(ctx.rem(x, y)),
                    (Op::SameQuantum, &[x, y]) => {
                        Value::Text(if x.same_quantum(y) { "1" } else { "0" })
                    }
                    (Op::Subtract, &[x, y]) => Value::Dec(ctx.sub(x, y)),
                    (Op::ToIntegralX, &[x]) => Value::Dec(ctx.round_to_integral(x)),
                    _ => bail!("cannot evaluate `{op}` with {} operands", args.len()),
                };
                Ok((v, ctx.status()))
            }
        }
    };
}
impl_backend!(Bid32, Dpd32, u32);
impl_backend!(Bid64, Dpd64, u64);
impl_backend!(Bid128, Dpd128, u128);

fn run<B: Backend>(name: &str, s: &str) {
    let tests = parse(s)
        .with_context(|| format!("{name}: unable to parse tests"))
        .unwrap();
    let mut passed = 0;
    let mut failures = Vec::new();
    for test in &tests {
        match test.run::<B>() {
            Ok(Outcome::Passed) => passed += 1,
            Ok(Outcome::Skipped) => {}
            Err(err) => failures.push(format!("{name}:{}: {test}: {err:#}", test.line)),
        }
    }
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
    assert!(passed > 0, "{name}: every test was skipped");
}

#[test]
fn test_decimal32() {
    run::<Bid32>("ds.decTest", include_str!("testdata/ds.decTest"));
}

#[test]
fn test_decimal64() {
    run::<Bid64>("dd.decTest", include_str!("testdata/dd.decTest"));
}

#[test]
fn test_decimal128() {
    run::<Bid128>("dq.decTest", include_str!("testdata/dq.decTest"));
}
