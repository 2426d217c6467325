//! Bounded integer prompts.
//!
//! Every numeric answer the terminal asks for goes through
//! [`request_integer`], which keeps re-prompting until the reply parses and
//! falls inside `[min, max]`. Out-of-range replies get a message chosen by the
//! [`ValidationContext`] of the question being asked.

use crate::error::{Result, TruckError};
use crate::ingredient::Ingredient;
use crate::menu::MenuItem;
use log::debug;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

/// What a prompt is asking for, which decides the out-of-range wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationContext {
    /// A menu option number.
    Option,

    /// A recounted stock level for an ingredient.
    Inventory(Ingredient),

    /// A quantity of a menu item to sell.
    Quantity(MenuItem),
}

impl ValidationContext {
    /// Message for a reply greater than `max`.
    pub fn above_max(self, min: u32, max: u32) -> String {
        match self {
            ValidationContext::Option => too_high(i64::from(min), i64::from(max)),
            ValidationContext::Inventory(ingredient) => format!(
                "Exceeded max {} capacity ({}). Please enter a valid inventory.",
                ingredient.name(),
                max
            ),
            ValidationContext::Quantity(item) => format!(
                "Exceeded quantity of {} available ({}). Please enter a valid quantity.",
                item.plural(),
                max
            ),
        }
    }

    /// Message for a reply less than `min`.
    pub fn below_min(self, min: u32, max: u32) -> String {
        match self {
            ValidationContext::Option => too_low(i64::from(min), i64::from(max)),
            ValidationContext::Inventory(_) => {
                "Invalid input. Please enter a valid inventory.".to_string()
            }
            ValidationContext::Quantity(_) => {
                "Invalid input. Please enter a valid quantity.".to_string()
            }
        }
    }
}

fn too_high(min: i64, max: i64) -> String {
    format!(
        "Input is too high. Please enter an integer between {} and {}.",
        min, max
    )
}

fn too_low(min: i64, max: i64) -> String {
    format!(
        "Input is too low. Please enter an integer between {} and {}.",
        min, max
    )
}

/// Checks one reply. `Err` carries the message to show before re-prompting.
pub fn validate_integer(
    reply: &str,
    min: u32,
    max: u32,
    context: ValidationContext,
) -> std::result::Result<u32, String> {
    let trimmed = reply.trim_end_matches(['\r', '\n']).trim_start();
    let value = match trimmed.parse::<i32>() {
        Ok(value) => i64::from(value),
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => too_high(i64::from(min), i64::from(max)),
                IntErrorKind::NegOverflow => too_low(i64::from(min), i64::from(max)),
                _ => "Invalid input. Please enter an integer.".to_string(),
            });
        }
    };

    if value > i64::from(max) {
        Err(context.above_max(min, max))
    } else if value < i64::from(min) {
        Err(context.below_min(min, max))
    } else {
        // In range, so it fits in u32.
        Ok(value as u32)
    }
}

/// Writes `prompt`, reads a line, and repeats until a valid integer arrives.
///
/// Returns `InputClosed` if the input reaches end of file first.
pub fn request_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: u32,
    max: u32,
    context: ValidationContext,
) -> Result<u32> {
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(TruckError::InputClosed);
        }

        match validate_integer(&line, min, max, context) {
            Ok(value) => return Ok(value),
            Err(message) => {
                debug!("Rejected reply {:?}: {}", line.trim_end(), message);
                writeln!(output, "{}", message)?;
            }
        }
    }
}
