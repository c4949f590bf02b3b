use criterion::{criterion_group, criterion_main, Criterion};
use unsorted_list::UnsortedList;

fn unsorted_list_bench(c: &mut Criterion) {
    c.bench_function("UnsortedList append/pop", |b| {
        b.iter(|| {
            let mut list = UnsortedList::new();
            for i in 0..100 {
                list.append(i.to_string());
            }
            for _i in 0..100 {
                list.pop().unwrap();
            }
        })
    });

    c.bench_function("UnsortedList prepend/pop_last", |b| {
        b.iter(|| {
            let mut list = UnsortedList::new();
            for i in 0..100 {
                list.prepend(i.to_string());
            }
            for _i in 0..100 {
                list.pop_last().unwrap();
            }
        })
    });

    c.bench_function("UnsortedList insert/remove middle", |b| {
        b.iter(|| {
            let mut list = UnsortedList::with_capacity(6);
            for i in 0..100 {
                list.insert(i.to_string(), list.size() / 2).unwrap();
            }
            for _i in 0..100 {
                list.remove(list.size() / 2).unwrap();
            }
        })
    });
}

criterion_group!(benches, unsorted_list_bench);
criterion_main!(benches);
