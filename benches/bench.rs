use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use bstree::Tree;

/// Builds a tree of `0..num_nodes` inserted in shuffled order so an
/// unbalanced BST doesn't degrade into a linked list for the benchmark.
fn build_tree(num_nodes: usize, rng: &mut StdRng) -> Tree<i32> {
    let mut keys: Vec<i32> = (0..num_nodes as i32).collect();
    keys.shuffle(rng);

    let mut tree = Tree::new();
    for key in keys {
        tree.insert(key);
    }
    tree
}

/// Helper to bench a function on the BST.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes as i32 - 1;

        let tree = build_tree(num_nodes, &mut rng);
        let id = BenchmarkId::from_parameter(largest_element_in_tree);

        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _id = black_box(tree.search(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _id = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_helper(c, "inorder-walk", |tree, _i| {
        let _count = black_box(tree.inorder().count());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
