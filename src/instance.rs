//! Instance text format and random instance generation.
//!
//! The format is line based:
//!
//! ```text
//! <capacity> <item count>
//! <weight> <value>
//! <weight> <value>
//! ...
//! ```
//!
//! Solvers only see [`KnapsackProblem`]; this module is the boundary that
//! turns text and random draws into validated problems.

use crate::error::{KnapsackError, Result};
use crate::problem::{Item, KnapsackProblem};
use rand::Rng;

/// Parses an instance from its text form.
///
/// Blank lines are ignored. The item count in the header must match the
/// number of item lines.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::parse_instance;
///
/// let problem = parse_instance("100 2\n10 20\n20 30\n").unwrap();
/// assert_eq!(problem.capacity(), 100.0);
/// assert_eq!(problem.len(), 2);
/// ```
pub fn parse_instance(text: &str) -> Result<KnapsackProblem> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(KnapsackError::Parse {
        line: 1,
        message: "missing header".into(),
    })?;
    let (capacity, count) = parse_pair(header_line, header)?;
    if count.fract() != 0.0 || count < 0.0 {
        return Err(KnapsackError::Parse {
            line: header_line,
            message: format!("item count {count} is not a non-negative integer"),
        });
    }
    let count = count as usize;

    let mut items = Vec::with_capacity(count);
    for (line_no, line) in lines {
        if items.len() == count {
            return Err(KnapsackError::Parse {
                line: line_no,
                message: format!("more than {count} items"),
            });
        }
        let (weight, value) = parse_pair(line_no, line)?;
        items.push(Item::new(weight, value));
    }
    if items.len() != count {
        return Err(KnapsackError::Parse {
            line: header_line,
            message: format!("header announces {count} items, found {}", items.len()),
        });
    }

    KnapsackProblem::new(items, capacity)
}

fn parse_pair(line_no: usize, line: &str) -> Result<(f64, f64)> {
    let err = |message: String| KnapsackError::Parse {
        line: line_no,
        message,
    };
    let mut fields = line.split_whitespace();
    let mut next = || -> Result<f64> {
        let field = fields
            .next()
            .ok_or_else(|| err("expected two numbers".into()))?;
        field
            .parse::<f64>()
            .map_err(|e| err(format!("bad number {field:?}: {e}")))
    };
    let first = next()?;
    let second = next()?;
    if fields.next().is_some() {
        return Err(err("expected two numbers".into()));
    }
    Ok((first, second))
}

/// Renders an instance in the text format accepted by [`parse_instance`].
pub fn write_instance(problem: &KnapsackProblem) -> String {
    let mut out = format!("{} {}\n", problem.capacity(), problem.len());
    for item in problem.items() {
        out.push_str(&format!("{} {}\n", item.weight, item.value));
    }
    out
}

/// Random real-valued instance.
///
/// Weights are uniform in `(0, max_weight]`, values in `[0, max_value)`.
pub fn generate<R: Rng>(
    rng: &mut R,
    count: usize,
    max_weight: f64,
    max_value: f64,
    capacity: f64,
) -> Result<KnapsackProblem> {
    if !(max_weight > 0.0 && max_weight.is_finite()) || !(max_value > 0.0 && max_value.is_finite())
    {
        return Err(KnapsackError::InvalidInput(
            "generator bounds must be positive and finite".into(),
        ));
    }
    let items = (0..count)
        .map(|_| {
            let weight = max_weight * (1.0 - rng.random::<f64>());
            let value = max_value * rng.random::<f64>();
            Item::new(weight, value)
        })
        .collect();
    KnapsackProblem::new(items, capacity)
}

/// Random integral-weight instance, suitable for the dynamic-programming
/// solver.
///
/// Weights are uniform in `1..=max_weight`, values in `[0, max_value)`.
pub fn generate_integral<R: Rng>(
    rng: &mut R,
    count: usize,
    max_weight: u32,
    max_value: f64,
    capacity: u32,
) -> Result<KnapsackProblem> {
    if max_weight == 0 || !(max_value > 0.0 && max_value.is_finite()) {
        return Err(KnapsackError::InvalidInput(
            "generator bounds must be positive and finite".into(),
        ));
    }
    let items = (0..count)
        .map(|_| {
            let weight = rng.random_range(1..=max_weight) as f64;
            let value = max_value * rng.random::<f64>();
            Item::new(weight, value)
        })
        .collect();
    KnapsackProblem::new(items, capacity as f64)
}
