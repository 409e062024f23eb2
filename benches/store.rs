use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use address_book::prelude::{Contact, ContactStore};

// In-memory only: no load/save, so the numbers reflect the linear scans.
fn make_store_with_n(n: usize) -> ContactStore {
    let mut storage = ContactStore::new();
    for i in 0..n {
        let contact = Contact::new(
            format!("User{i}"),
            "08885499529",
            format!("user{i}@yahoo.com"),
        )
        .expect("generated name is never blank");
        storage.add(contact);
    }
    storage
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("Adding to 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut storage| {
                let new_contact = Contact::new("Zoe", "08885499529", "zoe@gmail.com")
                    .expect("valid contact");
                storage.add(new_contact);
                black_box(storage.len());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_search(c: &mut Criterion) {
    let storage = make_store_with_n(5_000);

    c.bench_function("Searching 5k contacts", |b| {
        b.iter(|| black_box(storage.search(black_box("user2500"))));
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("Removing from 5k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(5_000),
            |mut storage| black_box(storage.remove("USER4999")),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_add, bench_search, bench_remove);
criterion_main!(benches);
