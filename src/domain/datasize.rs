//! 데이터 크기 리터럴("10MiB", "1.5G") 해석/표기 모듈.
//!
//! 해석은 소문자 10진(1000 배수) 단위와 대문자/IEC 2진(1024 배수) 단위를 모두
//! 받아들이지만, 표기는 항상 IEC 2진 단위로 정규화한다.

use std::fmt;

use crate::domain::error::SizeFormatError;

const KI: u64 = 1024;
const MI: u64 = KI * 1024;
const GI: u64 = MI * 1024;
const TI: u64 = GI * 1024;
const PI: u64 = TI * 1024;
const EI: u64 = PI * 1024;

const K: u64 = 1000;
const M: u64 = K * 1000;
const G: u64 = M * 1000;
const T: u64 = G * 1000;
const P: u64 = T * 1000;
const E: u64 = P * 1000;

// 소문자는 10진, 대문자는 2진. 모호한 `KB`/`MB`도 2진으로 본다.
const MULTIPLIERS: [(&str, u64); 31] = [
    ("B", 1),
    ("k", K),
    ("kB", K),
    ("K", KI),
    ("KB", KI),
    ("KiB", KI),
    ("m", M),
    ("mB", M),
    ("M", MI),
    ("MB", MI),
    ("MiB", MI),
    ("g", G),
    ("gB", G),
    ("G", GI),
    ("GB", GI),
    ("GiB", GI),
    ("t", T),
    ("tB", T),
    ("T", TI),
    ("TB", TI),
    ("TiB", TI),
    ("p", P),
    ("pB", P),
    ("P", PI),
    ("PB", PI),
    ("PiB", PI),
    ("e", E),
    ("eB", E),
    ("E", EI),
    ("EB", EI),
    ("EiB", EI),
];

// (상한, 나눗수, 단위). 마지막 항목은 상한이 없다.
const DIVISORS: [(Option<u64>, u64, &str); 7] = [
    (Some(KI), 1, "B"),
    (Some(MI), KI, "KiB"),
    (Some(GI), MI, "MiB"),
    (Some(TI), GI, "GiB"),
    (Some(PI), TI, "TiB"),
    (Some(EI), PI, "PiB"),
    (None, EI, "EiB"),
];

/// 해석 결과. 단위 없이 소수가 주어지면 변환 없이 소수 값을 그대로 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ByteCount {
    Exact(u64),
    Fractional(f64),
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Fractional(v) => write!(f, "{}", float_repr(*v)),
        }
    }
}

/// 데이터 크기 리터럴을 바이트 수로 변환한다.
pub fn parse(literal: &str) -> Result<ByteCount, SizeFormatError> {
    let fail = || SizeFormatError::new(literal);

    let body = literal.trim();
    let digits_end = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    if digits_end == 0 {
        return Err(fail());
    }
    let (digits, rest) = body.split_at(digits_end);

    // 소수부는 `.` 뒤 숫자가 없어도 허용한다("10." == 10.0).
    let (frac, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let frac_end = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            (Some(&after_dot[..frac_end]), &after_dot[frac_end..])
        }
        None => (None, rest),
    };
    let spec = rest.trim_start();

    let value = match frac {
        Some(frac) => {
            let number: f64 = format!("{digits}.{frac}").parse().map_err(|_| fail())?;
            ByteCount::Fractional(number)
        }
        None => ByteCount::Exact(digits.parse().map_err(|_| fail())?),
    };

    if spec.is_empty() {
        return Ok(value);
    }

    let multiplier = MULTIPLIERS
        .iter()
        .find(|(unit, _)| *unit == spec)
        .map(|(_, mult)| *mult)
        .ok_or_else(fail)?;

    match value {
        ByteCount::Exact(n) => n
            .checked_mul(multiplier)
            .map(ByteCount::Exact)
            .ok_or_else(fail),
        ByteCount::Fractional(v) => {
            let scaled = (v * multiplier as f64).trunc();
            if scaled >= u64::MAX as f64 {
                return Err(fail());
            }
            Ok(ByteCount::Exact(scaled as u64))
        }
    }
}

/// 바이트 수를 가장 작은 IEC 단위로 표기한다(예: 1024 -> "1.0KiB").
///
/// 음수는 별도로 다루지 않고 첫 번째 상한("B")에 걸린다.
pub fn format<N: Into<i128>>(bytes: N) -> String {
    let bytes: i128 = bytes.into();
    let (_, divisor, unit) = DIVISORS
        .iter()
        .find(|(bound, _, _)| bound.is_none_or(|b| bytes < i128::from(b)))
        .unwrap_or(&DIVISORS[DIVISORS.len() - 1]);
    format!("{}{unit}", float_repr(bytes as f64 / *divisor as f64))
}

/// 정수값 실수도 소수점 한 자리를 남긴다("5" 대신 "5.0").
/// 절댓값이 1e16 이상이면 지수 표기(`1e+17`)로 쓴다.
fn float_repr(value: f64) -> String {
    if value.is_finite() && value.abs() >= 1e16 {
        let sci = format!("{value:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) => match exp.strip_prefix('-') {
                Some(digits) => format!("{mantissa}e-{digits:0>2}"),
                None => format!("{mantissa}e+{exp:0>2}"),
            },
            None => sci,
        };
    }
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_suffixed_literals() {
        assert_eq!(parse("10").unwrap(), ByteCount::Exact(10));
        assert_eq!(parse("10K").unwrap(), ByteCount::Exact(10240));
        assert_eq!(parse("10KB").unwrap(), ByteCount::Exact(10240));
        assert_eq!(parse("10kB").unwrap(), ByteCount::Exact(10000));
        assert_eq!(parse("1.5MiB").unwrap(), ByteCount::Exact(1_572_864));
        assert_eq!(parse("2g").unwrap(), ByteCount::Exact(2_000_000_000));
    }

    #[test]
    fn fraction_without_unit_stays_fractional() {
        assert_eq!(parse("1.5").unwrap(), ByteCount::Fractional(1.5));
        assert_eq!(parse("10.").unwrap(), ByteCount::Fractional(10.0));
    }

    #[test]
    fn tolerates_surrounding_and_inner_whitespace() {
        assert_eq!(parse("  4 KiB  ").unwrap(), ByteCount::Exact(4096));
    }

    #[test]
    fn rejects_malformed_literals() {
        let err = parse("bogus").unwrap_err();
        assert_eq!(err.literal, "bogus");
        assert!(parse("").is_err());
        assert!(parse("10X").is_err());
        assert!(parse("10kib").is_err());
        assert!(parse(".5K").is_err());
        assert!(parse("10 K B").is_err());
    }

    #[test]
    fn rejects_overflowing_products() {
        assert!(parse("100EiB").is_err());
        assert!(parse("99999999999999999999").is_err());
    }

    #[test]
    fn formats_on_iec_boundaries() {
        assert_eq!(format(0u64), "0.0B");
        assert_eq!(format(1u64), "1.0B");
        assert_eq!(format(1023u64), "1023.0B");
        assert_eq!(format(1024u64), "1.0KiB");
        assert_eq!(format(1025u64), "1.0009765625KiB");
        assert_eq!(format(1_048_576u64), "1.0MiB");
        assert_eq!(format(1_073_741_823u64), "1023.9999990463257MiB");
        assert_eq!(format(1_073_741_824u64), "1.0GiB");
        assert_eq!(format(5120u64), "5.0KiB");
    }

    #[test]
    fn negative_values_fall_into_bytes() {
        assert_eq!(format(-5i64), "-5.0B");
        assert_eq!(format(-9_999_999_999_999_998i64), "-9999999999999998.0B");
        assert_eq!(format(-100_000_000_000_000_000i64), "-1e+17B");
        assert_eq!(format(-150_000_000_000_000_000i64), "-1.5e+17B");
    }

    #[test]
    fn largest_unit_has_no_upper_bound() {
        assert_eq!(format(EI), "1.0EiB");
        assert_eq!(format(u64::MAX), "16.0EiB");
    }

    #[test]
    fn binary_aligned_values_round_trip() {
        for n in [1, KI, MI, GI, TI, PI, EI] {
            assert_eq!(parse(&format(n)).unwrap(), ByteCount::Exact(n), "n={n}");
        }
    }
}
