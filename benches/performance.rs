use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use growstack::{GrowBuf, GrowthPolicy, SinglyLinkedList, Stack, StackKind};

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("multiplicative", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut buf = GrowBuf::new();
                    for i in 0..size {
                        buf.push_back(black_box(i));
                    }
                    black_box(buf.len())
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("additive", size), size, |b, &size| {
            let policy = GrowthPolicy::additive(16.0).unwrap();
            b.iter(|| {
                let mut buf = GrowBuf::with_policy(policy);
                for i in 0..size {
                    buf.push_back(black_box(i));
                }
                black_box(buf.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("buffer_at", size), size, |b, &size| {
            let buf: GrowBuf<usize> = (0..size).collect();

            b.iter(|| {
                for i in 0..size {
                    black_box(buf.at(i).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("buffer", size), size, |b, &size| {
            let buf: GrowBuf<usize> = (0..size).collect();

            b.iter(|| {
                for value in black_box(&buf) {
                    black_box(value);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("list", size), size, |b, &size| {
            let list: SinglyLinkedList<usize> = (0..size).collect();

            b.iter(|| {
                for value in black_box(&list) {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

fn bench_list_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push_front", size), size, |b, &size| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for i in 0..size {
                    list.push_front(black_box(i));
                }
                black_box(list.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("reverse", size), size, |b, &size| {
            let mut list: SinglyLinkedList<usize> = (0..size).collect();

            b.iter(|| {
                list.reverse();
                black_box(list.front());
            });
        });
    }
    group.finish();
}

fn bench_stack_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        for kind in [StackKind::Buffer, StackKind::List] {
            group.bench_with_input(
                BenchmarkId::new(format!("push_pop_cycle_{kind}"), size),
                size,
                |b, &size| {
                    b.iter(|| {
                        let mut stack = Stack::new(kind);

                        // Push elements
                        for i in 0..size {
                            stack.push(black_box(i));
                        }

                        // Pop elements
                        for _ in 0..size {
                            black_box(stack.pop());
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_iterator_performance,
    bench_list_operations,
    bench_stack_operations
);
criterion_main!(benches);
