use anyhow::{bail, ensure, Context, Result};

use super::{op::Op, Test};
use crate::ctx::{Condition, RoundingMode};

/// Parses the test cases in a decTest file.
pub fn parse(s: &str) -> Result<Vec<Test<'_>>> {
    let mut extended = true;
    let mut clamp = false;
    let mut precision: u32 = 0;
    let mut max_exp: i32 = 0;
    let mut min_exp: i32 = 0;
    let mut rounding = RoundingMode::default();
    let mut cases = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("--") {
            continue;
        }

        if !line.contains("->") {
            let (key, value) = line
                .split_once(':')
                .with_context(|| format!("#{i}: expected a directive: `{line}`"))?;
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "version" => {}
                "extended" => extended = parse_flag(value).with_context(|| format!("#{i}"))?,
                "clamp" => clamp = parse_flag(value).with_context(|| format!("#{i}"))?,
                "precision" => {
                    precision = value
                        .parse()
                        .with_context(|| format!("#{i}: unable to parse precision: `{value}`"))?
                }
                "maxexponent" => {
                    max_exp = value
                        .parse()
                        .with_context(|| format!("#{i}: unable to parse `maxExponent`: `{value}`"))?
                }
                "minexponent" => {
                    min_exp = value
                        .parse()
                        .with_context(|| format!("#{i}: unable to parse `minExponent`: `{value}`"))?
                }
                "rounding" => {
                    rounding = RoundingMode::try_from_str(&value.to_ascii_lowercase())
                        .with_context(|| format!("#{i}: invalid rounding mode: `{value}`"))?
                }
                _ => bail!("#{i}: unknown directive: `{key}`"),
            }
            continue;
        }

        let tokens = tokenize(line).with_context(|| format!("#{i}"))?;
        let arrow = tokens
            .iter()
            .position(|&t| t == "->")
            .with_context(|| format!("#{i}: missing `->`: `{line}`"))?;
        let (lhs, rhs) = tokens.split_at(arrow);
        let [id, name, operands @ ..] = lhs else {
            bail!("#{i}: missing id or operation: `{line}`");
        };
        let op = Op::parse(name).with_context(|| format!("#{i}: unknown op: `{name}`"))?;
        ensure!(
            operands.len() == op.arity(),
            "#{i}: `{op}` takes {} operands, got {}",
            op.arity(),
            operands.len()
        );
        let [_, result, conds @ ..] = rhs else {
            bail!("#{i}: missing result: `{line}`");
        };
        let mut flags = Condition::empty();
        for c in conds {
            flags |= parse_condition(c).with_context(|| format!("#{i}"))?;
        }
        cases.push(Test {
            line: i + 1,
            id: *id,
            extended,
            clamp,
            precision,
            max_exp,
            min_exp,
            rounding,
            op,
            operands: operands.to_vec(),
            result: *result,
            conds: flags,
        });
    }
    ensure!(!cases.is_empty(), "no test cases");
    Ok(cases)
}

fn parse_flag(s: &str) -> Result<bool> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => bail!("expected 0 or 1: `{s}`"),
    }
}

fn parse_condition(s: &str) -> Result<Condition> {
    let cond = match s.to_ascii_lowercase().as_str() {
        "clamped" => Condition::CLAMPED,
        "conversion_syntax" => Condition::CONVERSION_SYNTAX,
        "division_by_zero" => Condition::DIVISION_BY_ZERO,
        // Also an invalid operation.
        "division_undefined" => Condition::DIVISION_UNDEFINED | Condition::INVALID_OPERATION,
        "inexact" => Condition::INEXACT,
        "invalid_operation" => Condition::INVALID_OPERATION,
        "overflow" => Condition::OVERFLOW,
        "rounded" => Condition::ROUNDED,
        "subnormal" => Condition::SUBNORMAL,
        "underflow" => Condition::UNDERFLOW,
        _ => bail!("unsupported condition: `{s}`"),
    };
    Ok(cond)
}

/// Splits a test case into tokens.
///
/// Tokens are separated by whitespace and may be quoted with
/// `'` or `"`. A `--` outside of quotes starts a comment.
fn tokenize(mut s: &str) -> Result<Vec<&str>> {
    let mut tokens = Vec::new();
    loop {
        s = s.trim_start();
        if s.is_empty() || s.starts_with("--") {
            break;
        }
        let quote = s.chars().next().filter(|&c| c == '\'' || c == '"');
        if let Some(q) = quote {
            let rest = s.strip_prefix(q).unwrap_or(s);
            let (tok, rest) = rest
                .split_once(q)
                .with_context(|| format!("unterminated quote: `{s}`"))?;
            tokens.push(tok);
            s = rest;
        } else {
            let end = s.find(char::is_whitespace).unwrap_or(s.len());
            let (tok, rest) = s.split_at(end);
            tokens.push(tok);
            s = rest;
        }
    }
    Ok(tokens)
}
