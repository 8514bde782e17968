fn is_blocking(tile: u16) -> bool {
    BLOCKING_TILES.contains(&tile)
}

/// The two corners of a 16x16 body's leading edge for a 1 px step.
/// Side probes sit 1 px inside the box so brushing a wall while walking
/// along it does not block.
fn leading_edge_probes(x: i32, y: i32, facing: Facing) -> [(i32, i32); 2] {
    match facing {
        Facing::Left => [(x, y + 1), (x, y + BODY_SIZE_PX - 1)],
        Facing::Right => [
            (x + BODY_SIZE_PX, y + 1),
            (x + BODY_SIZE_PX, y + BODY_SIZE_PX - 1),
        ],
        Facing::Up => [(x + 1, y), (x + BODY_SIZE_PX - 1, y)],
        Facing::Down => [
            (x + 1, y + BODY_SIZE_PX),
            (x + BODY_SIZE_PX - 1, y + BODY_SIZE_PX),
        ],
    }
}

fn step_is_clear(
    map: &TileMap,
    xscroll: i32,
    yscroll: i32,
    x: i32,
    y: i32,
    facing: Facing,
) -> bool {
    leading_edge_probes(x, y, facing)
        .iter()
        .all(|&(px, py)| !is_blocking(map.lookup(px, py, xscroll, yscroll)))
}
