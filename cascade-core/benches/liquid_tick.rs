#![allow(missing_docs)]
//! Benchmarks for single liquid ticks.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cascade_core::block::{Block, vanilla};
use cascade_core::fluid::{FluidEngine, Liquid, LiquidKind};
use cascade_core::world::{FluidWorld, MemoryWorld, WorldRange};
use cascade_utils::BlockPos;

const SOURCE: BlockPos = BlockPos::new(0, 1, 0);
const HALF_WIDTH: i32 = 16;

/// A stone floor at y = 0 with a source on top of it, and optionally a hole
/// `hole_distance` blocks east of the source.
fn plane(kind: LiquidKind, hole_distance: Option<i32>) -> MemoryWorld {
    let mut world = MemoryWorld::new(WorldRange::new(-16, 16));
    world.fill(
        BlockPos::new(-HALF_WIDTH, 0, -HALF_WIDTH),
        BlockPos::new(HALF_WIDTH, 0, HALF_WIDTH),
        vanilla::stone(),
    );
    if let Some(distance) = hole_distance {
        world.set_block(BlockPos::new(distance, 0, 0), Block::Air);
    }
    world.set_liquid(SOURCE, Some(Liquid::source(kind)));
    world
}

fn bench_open_plane(c: &mut Criterion) {
    let engine = FluidEngine::default();
    let mut group = c.benchmark_group("open_plane");
    for kind in [LiquidKind::Water, LiquidKind::Lava] {
        group.bench_with_input(BenchmarkId::new("source", kind.name()), &kind, |b, &kind| {
            b.iter_batched(
                || plane(kind, None),
                |mut world| black_box(engine.tick(&mut world, black_box(SOURCE))),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_distant_holes(c: &mut Criterion) {
    let engine = FluidEngine::default();
    let mut group = c.benchmark_group("distant_hole");
    for distance in [1, 3, 5] {
        group.bench_with_input(
            BenchmarkId::new("water", distance),
            &distance,
            |b, &distance| {
                b.iter_batched(
                    || plane(LiquidKind::Water, Some(distance)),
                    |mut world| black_box(engine.tick(&mut world, black_box(SOURCE))),
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_open_plane, bench_distant_holes);
criterion_main!(benches);
