//! # Format
//!
//! A runtime float formatting mini-language for vector components.
//!
//! Rust's `format!` specs are fixed at compile time, so vectors carry their
//! own interpreter for spec strings supplied at runtime. The grammar is the
//! familiar Python one:
//!
//! ```text
//! [[fill]align][sign][z][#][0][width][grouping][.precision][type]
//!
//! align     : '<' | '>' | '^' | '='
//! sign      : '+' | '-' | ' '
//! grouping  : ',' | '_'
//! type      : 'e' | 'E' | 'f' | 'F' | 'g' | 'G' | 'n' | '%' | (none)
//! ```
//!
//! With no type and no precision a number renders as its shortest
//! round-trip text (`3.0`, `0.1`, `1e+16`), the same text `Debug` uses.
//!
//! Vector specs add one marker on top: a trailing `p` asks for polar
//! coordinates. See [`split_polar`].

use std::str::FromStr;

use super::error::{VectorError, VectorResult};

/// Where padding goes when the rendered number is narrower than the width
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
    /// Padding between the sign and the digits
    AfterSign,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            '=' => Some(Align::AfterSign),
            _ => None,
        }
    }
}

/// Which signs are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sign {
    /// Only negative numbers get a sign
    #[default]
    Minus,
    /// Positive numbers get `+`
    Plus,
    /// Positive numbers get a leading space
    Space,
}

impl Sign {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Sign::Minus),
            '+' => Some(Sign::Plus),
            ' ' => Some(Sign::Space),
            _ => None,
        }
    }
}

/// Presentation type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Kind {
    /// No type: shortest repr, or `g`-like when a precision is given
    #[default]
    Repr,
    Exponent { upper: bool },
    Fixed { upper: bool },
    General { upper: bool },
    Number,
    Percent,
}

impl Kind {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'e' => Some(Kind::Exponent { upper: false }),
            'E' => Some(Kind::Exponent { upper: true }),
            'f' => Some(Kind::Fixed { upper: false }),
            'F' => Some(Kind::Fixed { upper: true }),
            'g' => Some(Kind::General { upper: false }),
            'G' => Some(Kind::General { upper: true }),
            'n' => Some(Kind::Number),
            '%' => Some(Kind::Percent),
            _ => None,
        }
    }

    fn is_upper(self) -> bool {
        matches!(
            self,
            Kind::Exponent { upper: true } | Kind::Fixed { upper: true } | Kind::General { upper: true }
        )
    }
}

/// A parsed number format spec
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Option<Align>,
    pub sign: Sign,
    /// `z`: render negative zero (after rounding) without its sign
    pub coerce_zero: bool,
    /// `#`: keep the decimal point and trailing zeros
    pub alternate: bool,
    pub width: usize,
    pub grouping: Option<char>,
    pub precision: Option<usize>,
    pub kind: Kind,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: Sign::Minus,
            coerce_zero: false,
            alternate: false,
            width: 0,
            grouping: None,
            precision: None,
            kind: Kind::Repr,
        }
    }
}

impl FromStr for FormatSpec {
    type Err = VectorError;

    fn from_str(spec: &str) -> VectorResult<Self> {
        FormatSpec::parse(spec)
    }
}

impl FormatSpec {
    /// Parse a spec string
    ///
    /// # Example
    /// ```
    /// use vectorkit::core::format::FormatSpec;
    /// let spec = FormatSpec::parse(".3e").unwrap();
    /// assert_eq!(spec.format(1.4142135623730951), "1.414e+00");
    /// ```
    pub fn parse(spec: &str) -> VectorResult<Self> {
        let chars: Vec<char> = spec.chars().collect();
        let mut out = FormatSpec::default();
        let mut i = 0;
        let mut explicit_fill = false;

        if let Some(align) = chars.get(1).and_then(|&c| Align::from_char(c)) {
            out.fill = chars[0];
            out.align = Some(align);
            explicit_fill = true;
            i = 2;
        } else if let Some(align) = chars.first().and_then(|&c| Align::from_char(c)) {
            out.align = Some(align);
            i = 1;
        }

        if let Some(sign) = chars.get(i).and_then(|&c| Sign::from_char(c)) {
            out.sign = sign;
            i += 1;
        }

        if chars.get(i) == Some(&'z') {
            out.coerce_zero = true;
            i += 1;
        }

        if chars.get(i) == Some(&'#') {
            out.alternate = true;
            i += 1;
        }

        if chars.get(i) == Some(&'0') {
            if !explicit_fill {
                out.fill = '0';
            }
            if out.align.is_none() {
                out.align = Some(Align::AfterSign);
            }
            i += 1;
        }

        let (width, next) = read_number(spec, &chars, i)?;
        out.width = width.unwrap_or(0);
        i = next;

        if let Some(&c @ (',' | '_')) = chars.get(i) {
            out.grouping = Some(c);
            i += 1;
        }

        if chars.get(i) == Some(&'.') {
            let (precision, next) = read_number(spec, &chars, i + 1)?;
            if precision.is_none() {
                return Err(VectorError::bad_spec(spec, "missing precision"));
            }
            out.precision = precision;
            i = next;
        }

        if let Some(&c) = chars.get(i) {
            out.kind = Kind::from_char(c)
                .ok_or_else(|| VectorError::bad_spec(spec, format!("unknown format code {c:?}")))?;
            i += 1;
        }

        if i != chars.len() {
            return Err(VectorError::bad_spec(spec, "invalid format specifier"));
        }

        if out.kind == Kind::Number && out.grouping.is_some() {
            return Err(VectorError::bad_spec(spec, "cannot combine grouping with 'n'"));
        }

        Ok(out)
    }

    /// Render one number
    pub fn format(&self, value: f64) -> String {
        let upper = self.kind.is_upper();
        let mut negative = value.is_sign_negative() && !value.is_nan();
        let magnitude = value.abs();

        let mut body = if value.is_nan() {
            String::from(if upper { "NAN" } else { "nan" })
        } else if value.is_infinite() {
            String::from(if upper { "INF" } else { "inf" })
        } else {
            self.finite_body(magnitude)
        };

        let suffix = if self.kind == Kind::Percent { "%" } else { "" };

        if negative && self.coerce_zero && !body.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            negative = false;
        }

        let sign = match (negative, self.sign) {
            (true, _) => "-",
            (false, Sign::Plus) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Minus) => "",
        };

        let int_len = body.bytes().take_while(u8::is_ascii_digit).count();
        let rest = format!("{}{}", &body[int_len..], suffix);
        let mut digits = body[..int_len].to_string();

        if let Some(separator) = self.grouping {
            let zero_fill = self.fill == '0' && self.align == Some(Align::AfterSign);
            let needed = self
                .width
                .saturating_sub(sign.len() + rest.chars().count());
            let mut grouped = group_digits(&digits, separator);
            while zero_fill && value.is_finite() && grouped.chars().count() < needed {
                digits.insert(0, '0');
                grouped = group_digits(&digits, separator);
            }
            digits = grouped;
        }
        body = format!("{digits}{rest}");

        self.pad(sign, &body)
    }

    fn finite_body(&self, magnitude: f64) -> String {
        match self.kind {
            Kind::Repr => match self.precision {
                None => shortest(magnitude),
                Some(p) => general(magnitude, p, self.alternate, true, false),
            },
            Kind::Fixed { .. } => fixed(magnitude, self.precision.unwrap_or(6), self.alternate),
            Kind::Exponent { upper } => {
                let (mantissa, exp) = sci_parts(magnitude, self.precision.unwrap_or(6));
                sci_text(mantissa, exp, self.alternate, upper)
            }
            Kind::General { upper } => {
                general(magnitude, self.precision.unwrap_or(6), self.alternate, false, upper)
            }
            Kind::Number => general(magnitude, self.precision.unwrap_or(6), self.alternate, false, false),
            Kind::Percent => fixed(magnitude * 100.0, self.precision.unwrap_or(6), self.alternate),
        }
    }

    fn pad(&self, sign: &str, body: &str) -> String {
        let len = sign.chars().count() + body.chars().count();
        if len >= self.width {
            return format!("{sign}{body}");
        }

        let padding = self.width - len;
        let fill = |n: usize| std::iter::repeat(self.fill).take(n).collect::<String>();
        match self.align.unwrap_or(Align::Right) {
            Align::Left => format!("{sign}{body}{}", fill(padding)),
            Align::Right => format!("{}{sign}{body}", fill(padding)),
            Align::AfterSign => format!("{sign}{}{body}", fill(padding)),
            Align::Center => {
                let left = padding / 2;
                format!("{}{sign}{body}{}", fill(left), fill(padding - left))
            }
        }
    }
}

/// Format one number with a spec string
///
/// # Example
/// ```
/// use vectorkit::core::format::format_number;
/// assert_eq!(format_number(3.0, "").unwrap(), "3.0");
/// assert_eq!(format_number(3.0, ".2f").unwrap(), "3.00");
/// assert_eq!(format_number(0.25, "+08.1%").unwrap(), "+0025.0%");
/// ```
pub fn format_number(value: f64, spec: &str) -> VectorResult<String> {
    Ok(FormatSpec::parse(spec)?.format(value))
}

/// Split a vector format spec into its number spec and the polar flag
///
/// ```
/// use vectorkit::core::format::split_polar;
/// assert_eq!(split_polar(".3ep"), (".3e", true));
/// assert_eq!(split_polar(".2f"), (".2f", false));
/// ```
pub fn split_polar(spec: &str) -> (&str, bool) {
    match spec.strip_suffix('p') {
        Some(rest) => (rest, true),
        None => (spec, false),
    }
}

/// Shortest round-trip text of a float, Python `repr` style
///
/// Always shows a decimal point or an exponent, so `3.0` never collapses
/// to `3`.
pub fn repr_f64(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}", shortest(value.abs()))
}

/// Format each value with `spec` and join them between `open` and `close`
pub(crate) fn join_formatted<I>(spec: &FormatSpec, values: I, open: &str, close: &str) -> String
where
    I: IntoIterator<Item = f64>,
{
    let parts: Vec<String> = values.into_iter().map(|v| spec.format(v)).collect();
    format!("{open}{}{close}", parts.join(", "))
}

/// Tuple notation: `(3.0, 4.0)`, `(3.0,)`, `()`
pub(crate) fn tuple_text<I>(values: I, precision: Option<usize>) -> String
where
    I: IntoIterator<Item = f64>,
{
    let parts: Vec<String> = values
        .into_iter()
        .map(|v| match precision {
            Some(p) => format!("{v:.p$}"),
            None => repr_f64(v),
        })
        .collect();
    match parts.len() {
        1 => format!("({},)", parts[0]),
        _ => format!("({})", parts.join(", ")),
    }
}

// ============================================================================
// NUMBER RENDERING
// ============================================================================

fn shortest(magnitude: f64) -> String {
    let (mantissa, exp) = sci_parts_shortest(magnitude);
    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();

    if !(-4..16).contains(&exp) {
        let mantissa = match digits.len() {
            1 => digits,
            _ => format!("{}.{}", &digits[..1], &digits[1..]),
        };
        return sci_text(mantissa, exp, false, false);
    }

    if exp < 0 {
        return format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits);
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

fn fixed(magnitude: f64, precision: usize, alternate: bool) -> String {
    let mut s = format!("{magnitude:.precision$}");
    if alternate && !s.contains('.') {
        s.push('.');
    }
    s
}

fn general(magnitude: f64, precision: usize, alternate: bool, repr_mode: bool, upper: bool) -> String {
    let precision = precision.max(1);
    let (_, exp) = sci_parts(magnitude, precision - 1);

    // Without a type, fixed notation must keep one decimal digit, so it
    // gives up one digit of range before switching to exponent form
    let threshold = if repr_mode {
        precision as i32 - 1
    } else {
        precision as i32
    };

    if (-4..threshold).contains(&exp) {
        let decimals = (precision as i32 - 1 - exp) as usize;
        let mut s = format!("{magnitude:.decimals$}");
        if !alternate {
            strip_trailing_zeros(&mut s);
        }
        if repr_mode && !s.contains('.') {
            s.push_str(".0");
        } else if alternate && !s.contains('.') {
            s.push('.');
        }
        s
    } else {
        let (mut mantissa, exp) = sci_parts(magnitude, precision - 1);
        if !alternate {
            strip_trailing_zeros(&mut mantissa);
        }
        sci_text(mantissa, exp, alternate, upper)
    }
}

fn strip_trailing_zeros(s: &mut String) {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
}

/// Mantissa text and decimal exponent, rounded to `precision` decimals
fn sci_parts(magnitude: f64, precision: usize) -> (String, i32) {
    split_exponent(format!("{magnitude:.precision$e}"))
}

fn sci_parts_shortest(magnitude: f64) -> (String, i32) {
    split_exponent(format!("{magnitude:e}"))
}

fn split_exponent(s: String) -> (String, i32) {
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

/// `1.414` and `0` -> `1.414e+00`
fn sci_text(mut mantissa: String, exp: i32, alternate: bool, upper: bool) -> String {
    if alternate && !mantissa.contains('.') {
        mantissa.push('.');
    }
    let marker = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{marker}{sign}{:02}", exp.unsigned_abs())
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Parse a run of ASCII digits starting at `start`
fn read_number(spec: &str, chars: &[char], start: usize) -> VectorResult<(Option<usize>, usize)> {
    let end = chars[start.min(chars.len())..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
        + start;
    if end == start {
        return Ok((None, start));
    }
    let text: String = chars[start..end].iter().collect();
    let n = text
        .parse()
        .map_err(|_| VectorError::bad_spec(spec, "too many decimal digits"))?;
    Ok((Some(n), end))
}
