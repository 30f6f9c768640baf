//! printf-style render primitive for argus-utils
//!
//! Renders a template and its arguments into a caller-owned buffer of a fixed
//! capacity, in the manner of `snprintf`: text that does not fit is dropped,
//! one slot is held back for the terminator, and the required length is
//! reported according to the active [`GrowthStrategy`].

use std::iter::{self, Peekable};
use std::str::CharIndices;

use crate::{
    config::{DEFAULT_FLOAT_PRECISION, MAX_FLOAT_PRECISION, MAX_FORMAT_FIELD},
    error::{Error, Result},
    types::{FormatArg, GrowthStrategy},
};

/// Outcome of one render attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderOutcome {
    /// The whole output is in the buffer
    Fits,
    /// The output needs exactly this many bytes, terminator excluded
    Needs(usize),
    /// The output did not fit and its size is unknown
    Overflow,
}

/// Renders `template` into `out`, keeping `out.len() < capacity`
pub(crate) fn render(
    out: &mut String,
    capacity: usize,
    template: &str,
    args: &[FormatArg<'_>],
    strategy: GrowthStrategy,
) -> Result<RenderOutcome> {
    let mut sink = BoundedSink {
        out,
        capacity,
        required: 0,
    };
    let mut cursor = ArgCursor { args, next: 0 };
    let mut chars = template.char_indices().peekable();
    let mut literal_start = 0;

    while let Some((pos, c)) = chars.next() {
        if c != '%' {
            continue;
        }
        sink.push(&template[literal_start..pos]);

        match chars.peek() {
            // A lone trailing '%' is kept as text
            None => {
                sink.push("%");
                literal_start = template.len();
                break;
            }
            Some((_, '%')) => {
                chars.next();
                sink.push("%");
            }
            Some(_) => {
                let spec = Spec::parse(&mut chars, &mut cursor, &template[pos..])?;
                let piece = spec.render(&mut cursor)?;
                sink.push(&piece);
            }
        }
        literal_start = chars.peek().map_or(template.len(), |&(next, _)| next);
    }
    sink.push(&template[literal_start..]);

    let required = sink.required;
    Ok(if required < capacity {
        RenderOutcome::Fits
    } else {
        match strategy {
            GrowthStrategy::ExactSize => RenderOutcome::Needs(required),
            GrowthStrategy::Doubling => RenderOutcome::Overflow,
        }
    })
}

struct BoundedSink<'b> {
    out: &'b mut String,
    capacity: usize,
    required: usize,
}

impl BoundedSink<'_> {
    fn push(&mut self, piece: &str) {
        self.required = self.required.saturating_add(piece.len());
        if self.required < self.capacity {
            self.out.push_str(piece);
        }
    }
}

struct ArgCursor<'s, 'a> {
    args: &'s [FormatArg<'a>],
    next: usize,
}

impl<'a> ArgCursor<'_, 'a> {
    fn take(&mut self, conversion: char) -> Result<(usize, FormatArg<'a>)> {
        let index = self.next;
        let arg = self
            .args
            .get(index)
            .copied()
            .ok_or(Error::FormatArgumentMissing { index, conversion })?;
        self.next += 1;
        Ok((index, arg))
    }

    fn take_signed(&mut self, conversion: char) -> Result<i64> {
        let (index, arg) = self.take(conversion)?;
        match arg {
            FormatArg::Int(v) => Ok(v),
            FormatArg::UInt(v) => Ok(v as i64),
            FormatArg::Float(v) => Ok(v as i64),
            FormatArg::Char(c) => Ok(c as i64),
            FormatArg::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| mismatch(index, conversion, &arg)),
        }
    }

    fn take_unsigned(&mut self, conversion: char) -> Result<u64> {
        let (index, arg) = self.take(conversion)?;
        match arg {
            FormatArg::Int(v) => Ok(v as u64),
            FormatArg::UInt(v) => Ok(v),
            FormatArg::Float(v) => Ok(v as u64),
            FormatArg::Char(c) => Ok(c as u64),
            FormatArg::Str(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .or_else(|_| s.parse::<i64>().map(|v| v as u64))
                    .map_err(|_| mismatch(index, conversion, &arg))
            }
        }
    }

    fn take_float(&mut self, conversion: char) -> Result<f64> {
        let (index, arg) = self.take(conversion)?;
        match arg {
            FormatArg::Int(v) => Ok(v as f64),
            FormatArg::UInt(v) => Ok(v as f64),
            FormatArg::Float(v) => Ok(v),
            FormatArg::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| mismatch(index, conversion, &arg)),
            FormatArg::Char(_) => Err(mismatch(index, conversion, &arg)),
        }
    }

    fn take_char(&mut self, conversion: char) -> Result<char> {
        let (index, arg) = self.take(conversion)?;
        let c = match arg {
            FormatArg::Char(c) => Some(c),
            FormatArg::Int(v) => u32::try_from(v).ok().and_then(char::from_u32),
            FormatArg::UInt(v) => u32::try_from(v).ok().and_then(char::from_u32),
            FormatArg::Str(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            FormatArg::Float(_) => None,
        };
        c.ok_or_else(|| mismatch(index, conversion, &arg))
    }
}

fn mismatch(index: usize, conversion: char, arg: &FormatArg<'_>) -> Error {
    Error::FormatArgumentMismatch {
        index,
        conversion,
        found: arg.to_string(),
    }
}

/// One parsed conversion specification
#[derive(Debug, Default)]
struct Spec {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    alt: bool,
    width: usize,
    precision: Option<usize>,
    conversion: char,
}

impl Spec {
    /// Parses the conversion after a '%'; `text` is the template from that '%' on
    fn parse(
        chars: &mut Peekable<CharIndices<'_>>,
        cursor: &mut ArgCursor<'_, '_>,
        text: &str,
    ) -> Result<Spec> {
        let mut spec = Spec::default();

        while let Some(&(_, c)) = chars.peek() {
            match c {
                '-' => spec.left = true,
                '0' => spec.zero = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '#' => spec.alt = true,
                _ => break,
            }
            chars.next();
        }

        if chars.next_if(|&(_, c)| c == '*').is_some() {
            let width = cursor.take_signed('*')?;
            if width < 0 {
                spec.left = true;
            }
            spec.width = usize::try_from(width.unsigned_abs()).unwrap_or(usize::MAX);
        } else {
            spec.width = take_number(chars);
        }

        if chars.next_if(|&(_, c)| c == '.').is_some() {
            spec.precision = if chars.next_if(|&(_, c)| c == '*').is_some() {
                // A negative precision counts as none
                let precision = cursor.take_signed('*')?;
                (precision >= 0).then(|| usize::try_from(precision).unwrap_or(usize::MAX))
            } else {
                Some(take_number(chars))
            };
        }

        while chars
            .next_if(|&(_, c)| matches!(c, 'h' | 'l' | 'L' | 'q' | 'j' | 'z' | 't'))
            .is_some()
        {}

        let Some((_, conversion)) = chars.next() else {
            return Err(Error::IncompleteConversion {
                spec: text.to_string(),
            });
        };
        spec.conversion = conversion;
        spec.check_fields()?;
        Ok(spec)
    }

    fn check_fields(&self) -> Result<()> {
        let too_large = |field, value| Error::FormatFieldTooLarge {
            conversion: self.conversion,
            field,
            value,
        };
        if self.width > MAX_FORMAT_FIELD {
            return Err(too_large("width", self.width));
        }
        if let Some(precision) = self.precision {
            let limit = if self.is_float() {
                MAX_FLOAT_PRECISION
            } else {
                MAX_FORMAT_FIELD
            };
            if precision > limit {
                return Err(too_large("precision", precision));
            }
        }
        Ok(())
    }

    fn is_float(&self) -> bool {
        matches!(self.conversion, 'f' | 'F' | 'e' | 'E' | 'g' | 'G')
    }

    fn render(&self, cursor: &mut ArgCursor<'_, '_>) -> Result<String> {
        let conversion = self.conversion;
        match conversion {
            // Flags between the two '%' are ignored, as in glibc
            '%' => Ok("%".to_string()),
            'd' | 'i' => {
                let value = cursor.take_signed(conversion)?;
                let digits = self.integer_digits(value.unsigned_abs(), 10, false)?;
                self.pad_number(self.sign(value < 0), &digits, self.precision.is_none())
            }
            'u' | 'x' | 'X' | 'o' => {
                let value = cursor.take_unsigned(conversion)?;
                let (radix, upper) = match conversion {
                    'x' => (16, false),
                    'X' => (16, true),
                    'o' => (8, false),
                    _ => (10, false),
                };
                let mut digits = self.integer_digits(value, radix, upper)?;
                let mut prefix = "";
                if self.alt {
                    match conversion {
                        'o' if !digits.starts_with('0') => digits.insert(0, '0'),
                        'x' if value != 0 => prefix = "0x",
                        'X' if value != 0 => prefix = "0X",
                        _ => {}
                    }
                }
                self.pad_number(prefix, &digits, self.precision.is_none())
            }
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' => {
                let value = cursor.take_float(conversion)?;
                let body = self.float_body(value.abs());
                self.pad_number(
                    self.sign(value.is_sign_negative() && !value.is_nan()),
                    &body,
                    value.is_finite(),
                )
            }
            'c' => {
                let c = cursor.take_char(conversion)?;
                self.pad_text(c.encode_utf8(&mut [0; 4]))
            }
            's' => {
                let (_, arg) = cursor.take(conversion)?;
                let text = arg.to_string();
                let text = match self.precision {
                    Some(max) => text.chars().take(max).collect(),
                    None => text,
                };
                self.pad_text(&text)
            }
            other => Err(Error::UnsupportedConversion { conversion: other }),
        }
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }

    fn integer_digits(&self, value: u64, radix: u32, upper: bool) -> Result<String> {
        let digits = match (radix, upper) {
            (16, true) => format!("{value:X}"),
            (16, false) => format!("{value:x}"),
            (8, _) => format!("{value:o}"),
            _ => value.to_string(),
        };
        match self.precision {
            Some(0) if value == 0 => Ok(String::new()),
            Some(precision) if digits.len() < precision => {
                let mut padded = reserved(precision)?;
                push_fill(&mut padded, '0', precision - digits.len());
                padded.push_str(&digits);
                Ok(padded)
            }
            _ => Ok(digits),
        }
    }

    fn float_body(&self, value: f64) -> String {
        let upper = self.conversion.is_ascii_uppercase();
        if !value.is_finite() {
            let text = if value.is_nan() { "nan" } else { "inf" };
            return if upper {
                text.to_uppercase()
            } else {
                text.to_string()
            };
        }

        let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
        let body = match self.conversion.to_ascii_lowercase() {
            'f' => {
                let mut body = format!("{value:.precision$}");
                if self.alt && precision == 0 {
                    body.push('.');
                }
                body
            }
            'e' => exponent_form(value, precision, self.alt),
            _ => self.general_form(value, precision),
        };
        if upper { body.to_uppercase() } else { body }
    }

    fn general_form(&self, value: f64, precision: usize) -> String {
        let precision = precision.max(1);
        let exponent = if value == 0.0 {
            0
        } else {
            split_exponent(&format!("{:.*e}", precision - 1, value)).1
        };

        let body = if exponent >= -4 && exponent < precision as i32 {
            let decimals = (precision as i32 - 1 - exponent) as usize;
            let mut body = format!("{value:.decimals$}");
            if self.alt && decimals == 0 {
                body.push('.');
            }
            body
        } else {
            exponent_form(value, precision - 1, self.alt)
        };

        if self.alt {
            body
        } else {
            strip_trailing_zeros(&body)
        }
    }

    fn pad_number(&self, prefix: &str, body: &str, zero_allowed: bool) -> Result<String> {
        let fill = self
            .width
            .saturating_sub(prefix.chars().count() + body.chars().count());
        let zero_fill = self.zero && zero_allowed && !self.left;

        let mut padded = reserved(prefix.len() + body.len() + fill)?;
        if !self.left && !zero_fill {
            push_fill(&mut padded, ' ', fill);
        }
        padded.push_str(prefix);
        if zero_fill {
            push_fill(&mut padded, '0', fill);
        }
        padded.push_str(body);
        if self.left {
            push_fill(&mut padded, ' ', fill);
        }
        Ok(padded)
    }

    fn pad_text(&self, text: &str) -> Result<String> {
        let fill = self.width.saturating_sub(text.chars().count());

        let mut padded = reserved(text.len() + fill)?;
        if !self.left {
            push_fill(&mut padded, ' ', fill);
        }
        padded.push_str(text);
        if self.left {
            push_fill(&mut padded, ' ', fill);
        }
        Ok(padded)
    }
}

/// Allocates an empty string able to hold `capacity` bytes
fn reserved(capacity: usize) -> Result<String> {
    let mut text = String::new();
    text.try_reserve_exact(capacity)
        .map_err(|_| Error::FormatAllocationFailed {
            requested: capacity,
        })?;
    Ok(text)
}

fn push_fill(text: &mut String, fill: char, count: usize) {
    text.extend(iter::repeat_n(fill, count));
}

fn take_number(chars: &mut Peekable<CharIndices<'_>>) -> usize {
    let mut number = 0usize;
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        number = number
            .saturating_mul(10)
            .saturating_add(c as usize - '0' as usize);
    }
    number
}

/// Renders `value` as `d.ddde±XX`
fn exponent_form(value: f64, precision: usize, alt: bool) -> String {
    let (mut mantissa, exponent) = split_exponent(&format!("{value:.precision$e}"));
    if alt && !mantissa.contains('.') {
        mantissa.push('.');
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Splits Rust's `1.5e2` exponent notation into mantissa and exponent
fn split_exponent(text: &str) -> (String, i32) {
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            (mantissa.to_string(), exponent.parse().unwrap_or_default())
        }
        None => (text.to_string(), 0),
    }
}

fn strip_trailing_zeros(body: &str) -> String {
    let (number, exponent) = match body.find('e') {
        Some(at) => body.split_at(at),
        None => (body, ""),
    };
    let number = if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    };
    format!("{number}{exponent}")
}
