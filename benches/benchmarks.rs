//! Performance benchmarks for jls

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jls::test_utils::{dir, file};
use jls::{EntryFilter, ListFormatter, ListOptions, Node, format_size, resolve};

/// A flat directory with `count` children, alternating files and
/// directories, with every third entry hidden.
fn wide_tree(count: usize) -> Node {
    let children = (0..count)
        .map(|i| {
            let name = if i % 3 == 0 {
                format!(".hidden_{}", i)
            } else {
                format!("entry_{}", i)
            };
            if i % 2 == 0 {
                dir(&name, 4096, i as i64, vec![])
            } else {
                file(&name, (i * 37) as u64, i as i64)
            }
        })
        .collect();
    dir("root", 4096, 0, children)
}

/// A single chain of nested directories, `depth` levels deep.
fn deep_tree(depth: usize) -> (Node, String) {
    let mut node = file("leaf", 42, 0);
    let mut path = "leaf".to_string();
    for level in (0..depth).rev() {
        let name = format!("level_{}", level);
        path = format!("{}/{}", name, path);
        node = dir(&name, 4096, level as i64, vec![node]);
    }
    (dir("root", 4096, 0, vec![node]), path)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let (tree, path) = deep_tree(100);
    group.bench_function("deep_100_levels", |b| {
        b.iter(|| resolve(black_box(&tree), black_box(&path)).unwrap())
    });

    let wide = wide_tree(10_000);
    group.bench_function("wide_10k_last_child", |b| {
        b.iter(|| resolve(black_box(&wide), black_box("entry_9998")).unwrap())
    });

    group.finish();
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");
    let tree = wide_tree(10_000);

    group.bench_function("names_10k", |b| {
        let formatter = ListFormatter::new(ListOptions::default());
        b.iter(|| formatter.format(black_box(&tree)))
    });

    group.bench_function("long_sorted_reversed_10k", |b| {
        let formatter = ListFormatter::new(ListOptions {
            show_hidden: true,
            long_format: true,
            sort_by_time: true,
            reverse_order: true,
            human_readable: true,
            ..Default::default()
        });
        b.iter(|| formatter.format(black_box(&tree)))
    });

    group.bench_function("filtered_dirs_10k", |b| {
        let formatter = ListFormatter::new(ListOptions {
            filter: Some(EntryFilter::Dir),
            ..Default::default()
        });
        b.iter(|| formatter.format(black_box(&tree)))
    });

    group.finish();
}

fn bench_format_size(c: &mut Criterion) {
    c.bench_function("format_size_mixed", |b| {
        b.iter(|| {
            for size in [0u64, 512, 1023, 1024, 1101, 8911, 1048576, 1 << 30, 1 << 40] {
                black_box(format_size(black_box(size)));
            }
        })
    });
}

criterion_group!(benches, bench_resolve, bench_listing, bench_format_size);
criterion_main!(benches);
