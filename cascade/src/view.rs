//! Text rendering of a horizontal slice.

use cascade_core::block::Block;
use cascade_core::fluid::{Liquid, LiquidKind};
use cascade_core::world::{FluidWorld, MemoryWorld};
use cascade_utils::BlockPos;

/// Renders the layer at `y` from `-radius` to `radius`, one row per z.
///
/// Water shows its depth, `W` for a source and `v` while falling. Lava uses
/// `L` and `l`. Solid blocks are `#`, any other block the first letter of its name.
pub fn render(world: &MemoryWorld, y: i32, radius: i32) -> String {
    let width = (2 * radius + 1) as usize;
    let mut out = String::with_capacity((width + 1) * width);
    for z in -radius..=radius {
        for x in -radius..=radius {
            let pos = BlockPos::new(x, y, z);
            let cell = match world.liquid(pos) {
                Some(liquid) => liquid_char(liquid),
                None => block_char(world.block(pos)),
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

fn liquid_char(liquid: Liquid) -> char {
    match liquid.kind() {
        LiquidKind::Water if liquid.is_source() => 'W',
        LiquidKind::Water if liquid.falling() => 'v',
        LiquidKind::Water => char::from_digit(u32::from(liquid.depth()), 10).unwrap_or('?'),
        LiquidKind::Lava if liquid.is_source() => 'L',
        LiquidKind::Lava => 'l',
    }
}

fn block_char(block: Block) -> char {
    match block {
        Block::Air => '.',
        Block::Liquid(liquid) => liquid_char(liquid),
        Block::Placed(_) if block.removable().is_none() && block.displacer().is_none() => '#',
        Block::Placed(placed) => placed.name().chars().next().unwrap_or('?'),
    }
}
