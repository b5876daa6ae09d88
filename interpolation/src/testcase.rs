//! Test case input format.
//!
//! A test case is a JSON object holding the number of points required for
//! interpolation together with the encoded points themselves:
//! ```text
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     ...
//! }
//! ```
//! Every key other than `keys` is the decimal x-coordinate of a point whose
//! y-coordinate is `value` written in `base`.
use std::{collections::BTreeMap, fmt, fs::File, io, io::BufReader, path::Path};

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer};

use crate::{config::Selection, errors::Error, poly::Point, radix};

/// A set of encoded points together with the interpolation threshold.
#[derive(Clone, Debug, Deserialize)]
pub struct TestCase {
    keys: Keys,
    #[serde(flatten)]
    roots: BTreeMap<String, Root>,
}

/// Test case parameters.
#[derive(Clone, Copy, Debug, Deserialize)]
struct Keys {
    /// The number of points provided, informational only.
    #[serde(default)]
    n: Option<usize>,
    /// The number of points required to recover the polynomial.
    k: usize,
}

/// An encoded y-coordinate.
#[derive(Clone, Debug, Deserialize)]
struct Root {
    #[serde(deserialize_with = "deserialize_base")]
    base: u32,
    value: String,
}

/// A point whose y-coordinate has not been decoded yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPoint {
    x: BigInt,
    base: u32,
    value: String,
}

impl EncodedPoint {
    /// Creates a new encoded point.
    pub fn new(x: BigInt, base: u32, value: String) -> Self {
        Self { x, base, value }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Returns the radix of the encoded y-coordinate.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Returns the encoded y-coordinate.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decodes the y-coordinate.
    pub fn decode(&self) -> Result<Point, Error> {
        let y = radix::decode(&self.value, self.base)?;
        Ok(Point::new(self.x.clone(), y))
    }
}

impl TestCase {
    /// Parses a test case from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a test case from a JSON reader.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses a test case from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the number of points required for interpolation.
    pub fn threshold(&self) -> usize {
        self.keys.k
    }

    /// Returns the declared number of points, if any.
    pub fn declared(&self) -> Option<usize> {
        self.keys.n
    }

    /// Returns the number of points present.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns true if the test case holds no points.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the `k` points chosen by the given selection, in ascending
    /// order of their x-coordinates.
    pub fn points(&self, selection: Selection) -> Result<Vec<EncodedPoint>, Error> {
        let k = self.keys.k;
        if k == 0 {
            return Err(Error::InvalidThreshold);
        }
        if self.roots.len() < k {
            return Err(Error::NotEnoughPoints {
                required: k,
                available: self.roots.len(),
            });
        }

        let mut points = self
            .roots
            .iter()
            .map(|(key, root)| {
                let x = parse_coordinate(key)?;
                Ok(EncodedPoint::new(x, root.base, root.value.clone()))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        points.sort_by(|a, b| a.x.cmp(&b.x));

        match selection {
            Selection::Sequential => (1..=k)
                .map(|i| {
                    let x = BigInt::from(i);
                    points
                        .iter()
                        .find(|p| p.x == x)
                        .cloned()
                        .ok_or(Error::MissingPoint(i))
                })
                .collect(),
            Selection::Ascending => {
                points.truncate(k);
                Ok(points)
            }
        }
    }
}

/// Parses a decimal x-coordinate, optionally negative.
///
/// Only the canonical spelling is accepted, so no two keys map to the same
/// coordinate: no leading zeros and no negative zero.
fn parse_coordinate(key: &str) -> Result<BigInt, Error> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == key.len(),
        [b'0', ..] => false,
        bytes => bytes.iter().all(|b| b.is_ascii_digit()),
    };
    if !canonical {
        return Err(Error::InvalidCoordinate(key.to_owned()));
    }
    key.parse()
        .map_err(|_| Error::InvalidCoordinate(key.to_owned()))
}

/// Deserializes a radix given either as a JSON string or a JSON number.
fn deserialize_base<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct BaseVisitor;

    impl<'de> serde::de::Visitor<'de> for BaseVisitor {
        type Value = u32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("base as a string or an unsigned integer")
        }

        fn visit_str<E>(self, data: &str) -> Result<u32, E>
        where
            E: serde::de::Error,
        {
            data.parse::<u32>()
                .map_err(|e| serde::de::Error::custom(format!("invalid base {:?}: {}", data, e)))
        }

        fn visit_u64<E>(self, data: u64) -> Result<u32, E>
        where
            E: serde::de::Error,
        {
            u32::try_from(data)
                .map_err(|_| serde::de::Error::custom(format!("invalid base {}", data)))
        }
    }

    deserializer.deserialize_any(BaseVisitor)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use crate::{config::Selection, errors::Error, poly::Point};

    use super::{EncodedPoint, TestCase};

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    fn xs(points: &[EncodedPoint]) -> Vec<BigInt> {
        points.iter().map(|p| p.x().clone()).collect()
    }

    fn bigints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_parse() {
        let case = TestCase::from_json(SAMPLE).unwrap();
        assert_eq!(case.threshold(), 3);
        assert_eq!(case.declared(), Some(4));
        assert_eq!(case.len(), 4);
        assert!(!case.is_empty());
    }

    #[test]
    fn test_parse_numeric_base() {
        let json = r#"{ "keys": { "k": 1 }, "1": { "base": 16, "value": "ff" } }"#;
        let case = TestCase::from_json(json).unwrap();
        assert_eq!(case.declared(), None);

        let points = case.points(Selection::Sequential).unwrap();
        assert_eq!(points[0].base(), 16);
        assert_eq!(points[0].decode().unwrap(), Point::from((1i64, 255i64)));
    }

    #[test]
    fn test_parse_malformed() {
        for json in [
            "",
            "[]",
            r#"{ "1": { "base": "10", "value": "4" } }"#,
            r#"{ "keys": { "k": 1 }, "1": { "base": "ten", "value": "4" } }"#,
            r#"{ "keys": { "k": 1 }, "1": { "base": -2, "value": "4" } }"#,
            r#"{ "keys": { "k": 1 }, "1": { "base": "10" } }"#,
        ] {
            let res = TestCase::from_json(json);
            assert!(matches!(res, Err(Error::Malformed(_))), "{json}");
        }
    }

    #[test]
    fn test_points_sequential() {
        let case = TestCase::from_json(SAMPLE).unwrap();
        let points = case.points(Selection::Sequential).unwrap();
        assert_eq!(xs(&points), bigints(&[1, 2, 3]));

        let decoded: Vec<_> = points.iter().map(|p| p.decode().unwrap()).collect();
        let expected: Vec<_> = [(1i64, 4i64), (2, 7), (3, 12)].map(Point::from).to_vec();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_points_gaps() {
        let json = r#"{
            "keys": { "n": 4, "k": 3 },
            "8": { "base": "10", "value": "67" },
            "2": { "base": "10", "value": "7" },
            "5": { "base": "10", "value": "28" },
            "3": { "base": "10", "value": "12" }
        }"#;
        let case = TestCase::from_json(json).unwrap();

        let res = case.points(Selection::Sequential);
        assert!(matches!(res, Err(Error::MissingPoint(1))));

        // Keys are ordered numerically, not lexicographically.
        let points = case.points(Selection::Ascending).unwrap();
        assert_eq!(xs(&points), bigints(&[2, 3, 5]));
    }

    #[test]
    fn test_points_not_enough() {
        let json = r#"{ "keys": { "n": 1, "k": 2 }, "1": { "base": "10", "value": "4" } }"#;
        let case = TestCase::from_json(json).unwrap();

        for selection in [Selection::Sequential, Selection::Ascending] {
            match case.points(selection) {
                Err(Error::NotEnoughPoints {
                    required,
                    available,
                }) => {
                    assert_eq!(required, 2);
                    assert_eq!(available, 1);
                }
                res => panic!("unexpected result: {:?}", res),
            }
        }
    }

    #[test]
    fn test_points_invalid_threshold() {
        let json = r#"{ "keys": { "n": 1, "k": 0 }, "1": { "base": "10", "value": "4" } }"#;
        let case = TestCase::from_json(json).unwrap();
        let res = case.points(Selection::Sequential);
        assert!(matches!(res, Err(Error::InvalidThreshold)));
    }

    #[test]
    fn test_points_invalid_coordinate() {
        for key in ["x", "1.5", "+1", "", "-"] {
            let json = format!(
                r#"{{ "keys": {{ "k": 1 }}, "{}": {{ "base": "10", "value": "4" }} }}"#,
                key
            );
            let case = TestCase::from_json(&json).unwrap();
            let res = case.points(Selection::Ascending);
            assert!(matches!(res, Err(Error::InvalidCoordinate(k)) if k == key));
        }
    }

    #[test]
    fn test_points_non_canonical_coordinate() {
        // "01" would otherwise shadow "1" under sequential selection and
        // duplicate it under ascending selection.
        let json = r#"{
            "keys": { "n": 4, "k": 3 },
            "01": { "base": "10", "value": "999" },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" },
            "3": { "base": "10", "value": "12" }
        }"#;
        let case = TestCase::from_json(json).unwrap();
        for selection in [Selection::Sequential, Selection::Ascending] {
            let res = case.points(selection);
            assert!(matches!(res, Err(Error::InvalidCoordinate(k)) if k == "01"));
        }

        let json = r#"{
            "keys": { "k": 2 },
            "-0": { "base": "10", "value": "1" },
            "0": { "base": "10", "value": "2" }
        }"#;
        let case = TestCase::from_json(json).unwrap();
        for selection in [Selection::Sequential, Selection::Ascending] {
            let res = case.points(selection);
            assert!(matches!(res, Err(Error::InvalidCoordinate(k)) if k == "-0"));
        }

        // Zero itself and numbers containing zeros are canonical.
        let json = r#"{
            "keys": { "k": 3 },
            "0": { "base": "10", "value": "3" },
            "10": { "base": "10", "value": "103" },
            "-20": { "base": "10", "value": "403" }
        }"#;
        let case = TestCase::from_json(json).unwrap();
        let points = case.points(Selection::Ascending).unwrap();
        assert_eq!(xs(&points), bigints(&[-20, 0, 10]));
    }

    #[test]
    fn test_points_negative_coordinate() {
        let json = r#"{
            "keys": { "k": 2 },
            "-1": { "base": "10", "value": "3" },
            "4": { "base": "10", "value": "13" }
        }"#;
        let case = TestCase::from_json(json).unwrap();
        let points = case.points(Selection::Ascending).unwrap();
        assert_eq!(xs(&points), bigints(&[-1, 4]));
    }

    #[test]
    fn test_decode_invalid_digit() {
        let json = r#"{ "keys": { "k": 1 }, "1": { "base": "16", "value": "G" } }"#;
        let case = TestCase::from_json(json).unwrap();
        let points = case.points(Selection::Sequential).unwrap();
        assert!(matches!(
            points[0].decode(),
            Err(Error::InvalidDigit { digit: 'G', .. })
        ));
    }
}
