use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use indoor_sensor_log::parse_str;
use indoor_sensor_log::parser::split_logical_lines;
use std::time::Duration;

fn synthetic_log(rows: usize) -> String {
    let mut out = String::from("#\tstartTime:1500000000000\tutc\n");
    for i in 0..rows {
        let ts = 1500000000000u64 + i as u64;
        out.push_str(&format!(
            "{ts}\tTYPE_ACCELEROMETER\t0.1\t0.2\t9.8\t3\
             {ts}\tTYPE_GYROSCOPE\t0.01\t0.02\t0.03\t3\
             {ts}\tTYPE_MAGNETIC_FIELD_UNCALIBRATED\t20.0\t-5.5\t-40.2\t1.0\t2.0\t3.0\t3\n"
        ));
        if i % 50 == 0 {
            out.push_str(&format!(
                "{ts}\tTYPE_WIFI\tap{i}\t00:11:22:33:44:55\t-60\t2412\t{ts}\n\
                 {ts}\tTYPE_BEACON\tUUID\t{i}\t7\t-60\t-71\t2.5\n"
            ));
        }
    }
    out.push_str("#\tendTime:1500000999999\tutc\n");
    out
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_log(20_000);
    let mut group = c.benchmark_group("parse_str");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(3));
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("synthetic_20k", |b| {
        b.iter(|| black_box(parse_str(black_box(&text)).unwrap()))
    });
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let text = synthetic_log(2_000);
    c.bench_function("split_logical_lines", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for (i, line) in text.lines().filter(|l| !l.starts_with('#')).enumerate() {
                count += split_logical_lines(i + 1, line).unwrap().count();
            }
            black_box(count)
        })
    });
}

criterion_group!(benches, bench_parse, bench_split);
criterion_main!(benches);
