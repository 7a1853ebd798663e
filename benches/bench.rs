#[macro_use]
extern crate criterion;

use core::time::Duration;
use criterion::{black_box, BatchSize, Criterion, ParameterizedBenchmark};

use unijson::json::{Number, Object, Value};

const LEN: usize = 10_000;
const WARM_UP_TIME: Duration = Duration::from_secs(3);
const MEASUREMENT_TIME: Duration = Duration::from_secs(20);

/// A wide record list, numbers mixed across the three representations.
fn input_value(double: bool) -> Value {
    (0..1_000u64)
        .map(|i| {
            let mut object = Object::new();
            let id = if double {
                Value::Number(Number::F64(i as f64))
            } else {
                Value::Number(Number::U64(i))
            };
            object.insert("id".to_owned(), id);
            object.insert("delta".to_owned(), Value::from(-(i as i64)));
            object.insert("name".to_owned(), Value::from(format!("item-{}", i)));
            object.insert("tags".to_owned(), Value::from(vec!["a", "b"]));
            Value::Object(object)
        })
        .collect()
}

fn cmp(c: &mut Criterion) {
    let core_ids = core_affinity::get_core_ids().unwrap();
    core_affinity::set_for_current(core_ids[0]);

    c.bench(
        "eq/value",
        ParameterizedBenchmark::new(
            "same representation",
            |b, _| {
                b.iter_batched(
                    || (input_value(false), input_value(false)),
                    |(left, right)| black_box(left == right),
                    BatchSize::NumIterations(LEN as u64),
                )
            },
            vec![()],
        )
        .with_function("mixed representation", |b, _| {
            b.iter_batched(
                || (input_value(false), input_value(true)),
                |(left, right)| black_box(left == right),
                BatchSize::NumIterations(LEN as u64),
            )
        })
        .warm_up_time(WARM_UP_TIME)
        .measurement_time(MEASUREMENT_TIME),
    );

    c.bench(
        "number/coerce",
        ParameterizedBenchmark::new(
            "as_i64",
            |b, n| b.iter(|| black_box(black_box(n).as_i64())),
            vec![Number::I64(-1), Number::U64(1 << 40), Number::F64(1e12)],
        )
        .with_function("as_u64", |b, n| {
            b.iter(|| black_box(black_box(n).as_u64()))
        })
        .with_function("as_f64", |b, n| {
            b.iter(|| black_box(black_box(n).as_f64()))
        })
        .warm_up_time(WARM_UP_TIME)
        .measurement_time(MEASUREMENT_TIME),
    );
}

criterion_group!(benches, cmp);
criterion_main!(benches);
