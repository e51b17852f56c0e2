//! # Numeric hash
//!
//! Hash values for components, compatible with the way Python hashes floats.
//!
//! A finite double is reduced modulo the Mersenne prime `2^61 - 1`, which
//! makes integral values hash to themselves (`3.0 -> 3`) and `0.0`/`-0.0`
//! collide as their equality requires. A vector's hash is the XOR of its
//! component hashes. It is recomputed on every call: vectors are immutable,
//! so there is nothing to invalidate and nothing worth caching.

const MODULUS_BITS: i32 = 61;
const MODULUS: u64 = (1 << MODULUS_BITS) - 1;
const INF_HASH: i64 = 314_159;

/// Hash a single component
///
/// # Example
/// ```
/// use vectorkit::core::hash::hash_component;
/// assert_eq!(hash_component(3.0), 3);
/// assert_eq!(hash_component(-1.0), -2);
/// assert_eq!(hash_component(0.0), hash_component(-0.0));
/// ```
pub fn hash_component(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    if value.is_infinite() {
        return if value > 0.0 { INF_HASH } else { -INF_HASH };
    }

    let (mut m, mut e) = frexp(value);
    let sign = if m < 0.0 {
        m = -m;
        -1
    } else {
        1
    };

    // Consume the mantissa 28 bits at a time, folding into x mod 2^61 - 1
    let mut x: u64 = 0;
    while m != 0.0 {
        x = ((x << 28) & MODULUS) | (x >> (MODULUS_BITS - 28));
        m *= 268_435_456.0;
        e -= 28;
        let y = m as u64;
        m -= y as f64;
        x += y;
        if x >= MODULUS {
            x -= MODULUS;
        }
    }

    // Multiply by 2^e mod 2^61 - 1, a rotation within 61 bits
    let e = if e >= 0 {
        e % MODULUS_BITS
    } else {
        MODULUS_BITS - 1 - ((-1 - e) % MODULUS_BITS)
    };
    x = ((x << e) & MODULUS) | (x >> (MODULUS_BITS - e));

    let h = x as i64 * sign;
    if h == -1 {
        -2
    } else {
        h
    }
}

/// XOR-combine the hashes of an ordered component sequence
pub fn hash_components<I>(components: I) -> i64
where
    I: IntoIterator<Item = f64>,
{
    components
        .into_iter()
        .fold(0, |acc, c| acc ^ hash_component(c))
}

/// Fit a hash into the platform's `isize`
///
/// The identity on 64-bit targets. Narrower targets XOR the high bits into
/// the low ones, so equal vectors still hash equal there; `-1` stays
/// reserved and becomes `-2`.
pub fn hash_isize(hash: i64) -> isize {
    fold_hash(hash, isize::BITS) as isize
}

fn fold_hash(hash: i64, bits: u32) -> i64 {
    if bits >= 64 {
        return hash;
    }
    let limit = 1_i64 << (bits - 1);
    if (-limit..limit).contains(&hash) {
        return hash;
    }

    let spare = 64 - bits;
    let folded = ((hash ^ (hash >> bits)) << spare) >> spare;
    if folded == -1 {
        -2
    } else {
        folded
    }
}

/// Split a finite double into a mantissa in `[0.5, 1)` and a power of two
fn frexp(value: f64) -> (f64, i32) {
    if value == 0.0 || !value.is_finite() {
        return (value, 0);
    }

    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    if biased == 0 {
        // Subnormal: scale into the normal range first
        let (m, e) = frexp(value * 2f64.powi(54));
        return (m, e - 54);
    }

    let mantissa = (bits & !(0x7ff << 52)) | (1022 << 52);
    (f64::from_bits(mantissa), biased - 1022)
}
