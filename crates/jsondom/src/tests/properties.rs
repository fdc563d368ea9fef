use alloc::{format, string::String, string::ToString, vec::Vec};

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::{Object, Value, parse};

/// A container-rooted document drawn from the escape-free subset the
/// serializer and parser agree on: no quotes or backslashes in strings,
/// finite reals.
#[derive(Clone, Debug)]
struct Doc(Value);

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        Doc(arbitrary_container(g, 3))
    }
}

fn arbitrary_container(g: &mut Gen, depth: usize) -> Value {
    let len = usize::arbitrary(g) % 4;
    if bool::arbitrary(g) {
        let mut root = Value::Array(Vec::new());
        for _ in 0..len {
            root.push(arbitrary_value(g, depth));
        }
        root
    } else {
        let mut root = Value::Object(Object::new());
        for i in 0..len {
            root.insert(format!("{}{i}", arbitrary_text(g)), arbitrary_value(g, depth));
        }
        root
    }
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    if depth > 0 && u8::arbitrary(g) % 3 == 0 {
        return arbitrary_container(g, depth - 1);
    }
    match u8::arbitrary(g) % 5 {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::from(i64::arbitrary(g)),
        // Reals built from small integers plus a fraction render with a
        // decimal point and survive textual round trips bit-exactly, but
        // the comparison below stays epsilon-based per the contract.
        3 => Value::from(f64::from(i32::arbitrary(g)) + 0.5),
        _ => Value::String(arbitrary_text(g)),
    }
}

fn arbitrary_text(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 8;
    (0..len)
        .map(|_| *g.choose(&['a', 'k', 'z', '0', ' ', '~', 'é', '日']).unwrap())
        .collect()
}

fn approx_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        // Numeric content compares within epsilon; the kind may legally
        // drift when an integral real re-parses as a natural.
        (Value::Number(x), Value::Number(y)) => {
            (x.as_real() - y.as_real()).abs() <= 1e-9 * x.as_real().abs().max(1.0)
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| approx_eq(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && approx_eq(va, vb))
        }
        _ => a == b,
    }
}

#[quickcheck]
fn round_trip_reproduces_the_tree(doc: Doc) -> bool {
    let reparsed = parse(&doc.0.to_string()).unwrap();
    approx_eq(&doc.0, &reparsed)
}

#[quickcheck]
fn serialization_is_idempotent(doc: Doc) -> bool {
    let first = parse(&doc.0.to_string()).unwrap().to_string();
    let second = parse(&first).unwrap().to_string();
    first == second
}

#[quickcheck]
fn naturals_round_trip_exactly(n: i64) -> bool {
    let mut doc = Value::Null;
    doc.push(Value::from(n));
    parse(&doc.to_string()).unwrap()[0].as_natural() == n
}

#[quickcheck]
fn duplicate_keys_keep_the_last_write(n: i64, m: i64) -> bool {
    let doc = parse(&format!("{{\"k\":{n},\"k\":{m}}}")).unwrap();
    doc["k"].as_natural() == m && doc.len() == 1
}
